//! Intents for the card stack.

use crate::deck::{Card, SwipeDirection};
use crate::ui::mvi::Intent;

use super::state::RequestId;

#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// A new topic was submitted. Clears the error and the discard pile.
    StartGeneration { request: RequestId },

    /// Generation finished with a deck.
    GenerationSucceeded { request: RequestId, cards: Vec<Card> },

    /// Generation failed; `message` is shown to the user.
    GenerationFailed { request: RequestId, message: String },

    /// Move the front card to the back of the discard pile.
    DismissTop { direction: SwipeDirection },

    /// Put every discarded card back, in original order.
    ResetDeck,

    /// Tap on the front card.
    Flip,

    /// Return the front card to its question side.
    ShowQuestion,
}

impl Intent for SessionIntent {}
