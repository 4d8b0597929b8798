//! Pointer drag handling for the front card.
//!
//! A press on the front card opens a session; dragging tracks the horizontal
//! offset; the release is resolved by [`resolve_release`] into a tap, a
//! dismissal, or a spring back.

mod intent;
mod reducer;
mod state;

pub use intent::GestureIntent;
pub use reducer::GestureReducer;
pub use state::{resolve_release, DragOutcome, GestureState, SWIPE_THRESHOLD};
