//! Card stack feature module.
//!
//! Owns the deck, the discard pile, the loading/error flags and the face of
//! the front card. Every mutation goes through `SessionReducer`.

mod intent;
mod reducer;
mod state;

pub use intent::SessionIntent;
pub use reducer::SessionReducer;
pub use state::{CardFace, RequestId, SessionState};
