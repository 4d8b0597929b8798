use crate::ui::mvi::Reducer;

use super::intent::GestureIntent;
use super::state::GestureState;

pub struct GestureReducer;

impl Reducer for GestureReducer {
    type State = GestureState;
    type Intent = GestureIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GestureIntent::Press { column } => match state {
                // A second press without release keeps the running session.
                pressed @ GestureState::Pressed { .. } => pressed,
                GestureState::Idle => GestureState::Pressed {
                    origin_column: column,
                    current_column: column,
                    moved: false,
                },
            },

            GestureIntent::Drag { column } => match state {
                GestureState::Pressed {
                    origin_column,
                    moved,
                    ..
                } => GestureState::Pressed {
                    origin_column,
                    current_column: column,
                    moved: moved || column != origin_column,
                },
                other => other,
            },

            GestureIntent::End => GestureState::Idle,
        }
    }
}
