//! Drag session over the front card.

use crate::deck::SwipeDirection;
use crate::ui::mvi::UiState;

/// Offset (in drag units) that must be exceeded to commit a swipe.
pub const SWIPE_THRESHOLD: i32 = 100;

/// What a pointer release means for the front card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Press and release without movement.
    Tap,
    /// Dragged past the threshold.
    Dismiss(SwipeDirection),
    /// Dragged, but not far enough. The card returns to center.
    SpringBack,
}

/// Resolve a release. Strict comparison: exactly ±100 springs back.
pub fn resolve_release(offset: i32, moved: bool) -> DragOutcome {
    if !moved {
        DragOutcome::Tap
    } else if offset > SWIPE_THRESHOLD {
        DragOutcome::Dismiss(SwipeDirection::Right)
    } else if offset < -SWIPE_THRESHOLD {
        DragOutcome::Dismiss(SwipeDirection::Left)
    } else {
        DragOutcome::SpringBack
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// Pointer is down on the front card.
    Pressed {
        origin_column: u16,
        current_column: u16,
        /// Set once the pointer leaves the origin column; never cleared.
        moved: bool,
    },
}

impl UiState for GestureState {}

impl GestureState {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pressed { .. })
    }

    /// Horizontal offset in terminal columns (positive = right).
    pub fn offset_columns(&self) -> i32 {
        match self {
            Self::Pressed {
                origin_column,
                current_column,
                ..
            } => i32::from(*current_column) - i32::from(*origin_column),
            Self::Idle => 0,
        }
    }

    /// Horizontal offset in drag units.
    pub fn offset_units(&self, units_per_column: i32) -> i32 {
        self.offset_columns().saturating_mul(units_per_column)
    }

    /// Outcome if the pointer were released now. `None` when idle.
    pub fn outcome(&self, units_per_column: i32) -> Option<DragOutcome> {
        match self {
            Self::Pressed { moved, .. } => {
                Some(resolve_release(self.offset_units(units_per_column), *moved))
            }
            Self::Idle => None,
        }
    }
}
