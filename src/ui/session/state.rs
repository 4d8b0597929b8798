//! Card stack state: deck, discard pile and generation flags.

use std::collections::VecDeque;

use crate::deck::Card;
use crate::ui::mvi::UiState;

/// Token tagging one generation request.
///
/// Issued in increasing order; only the most recent one is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RequestId(u64);

impl RequestId {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// Which face of the top card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardFace {
    #[default]
    Question,
    Answer,
}

impl CardFace {
    pub fn flipped(self) -> Self {
        match self {
            Self::Question => Self::Answer,
            Self::Answer => Self::Question,
        }
    }
}

/// Session-wide card stack state.
///
/// `deck` and `discard` always partition the current batch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub(super) deck: VecDeque<Card>,
    pub(super) discard: Vec<Card>,
    pub(super) loading: bool,
    pub(super) error: Option<String>,
    /// Last issued request token.
    pub(super) last_request: RequestId,
    /// Face of the front card. Reset whenever the front card changes.
    pub(super) face: CardFace,
}

impl UiState for SessionState {}

impl SessionState {
    /// Ordered active deck; the front is on screen.
    pub fn deck(&self) -> &VecDeque<Card> {
        &self.deck
    }

    /// Dismissed cards in dismissal order.
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    pub fn top(&self) -> Option<&Card> {
        self.deck.front()
    }

    /// Up to `count` cards from the front of the deck.
    pub fn visible(&self, count: usize) -> impl Iterator<Item = &Card> {
        self.deck.iter().take(count)
    }

    pub fn remaining(&self) -> usize {
        self.deck.len()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn face(&self) -> CardFace {
        self.face
    }

    /// Restart is offered only once the whole deck has been dismissed.
    pub fn can_reset(&self) -> bool {
        self.deck.is_empty() && !self.discard.is_empty()
    }

    /// Token to use for the next generation request.
    pub fn next_request_id(&self) -> RequestId {
        self.last_request.next()
    }

    /// True when `request` is the in-flight request whose result is still wanted.
    pub fn is_current(&self, request: RequestId) -> bool {
        self.loading && self.last_request == request
    }
}
