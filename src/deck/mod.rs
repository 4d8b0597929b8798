//! Trivia card model shared by the generation client and the UI.

mod card;

pub use card::{build_deck, Card, CardId, CardStyle, PALETTE};

/// Swipe direction reported by the gesture layer.
///
/// Both directions currently dismiss the card the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}
