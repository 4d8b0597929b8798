//! Reducer for the card stack.

use crate::ui::mvi::Reducer;

use super::intent::SessionIntent;
use super::state::{CardFace, SessionState};

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::StartGeneration { request } => {
                state.loading = true;
                state.error = None;
                state.discard.clear();
                state.last_request = request;
                state
            }

            SessionIntent::GenerationSucceeded { request, cards } => {
                if !state.is_current(request) {
                    return state;
                }
                state.deck = cards.into();
                state.loading = false;
                state.face = CardFace::Question;
                state
            }

            SessionIntent::GenerationFailed { request, message } => {
                if !state.is_current(request) {
                    return state;
                }
                // Deck stays as it was.
                state.loading = false;
                state.error = Some(message);
                state
            }

            SessionIntent::DismissTop { .. } => {
                if let Some(card) = state.deck.pop_front() {
                    state.discard.push(card);
                    state.face = CardFace::Question;
                }
                state
            }

            SessionIntent::ResetDeck => {
                if !state.can_reset() {
                    return state;
                }
                state.deck = std::mem::take(&mut state.discard).into();
                state.face = CardFace::Question;
                state
            }

            SessionIntent::Flip => {
                if !state.deck.is_empty() {
                    state.face = state.face.flipped();
                }
                state
            }

            SessionIntent::ShowQuestion => {
                state.face = CardFace::Question;
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{build_deck, Card, SwipeDirection};
    use crate::ui::session::RequestId;

    fn cards(n: usize) -> Vec<Card> {
        build_deck("Test", (0..n).map(|i| (format!("q{i}"), format!("a{i}"))))
    }

    fn loaded(n: usize) -> SessionState {
        let state = SessionState::default();
        let request = state.next_request_id();
        let state = SessionReducer::reduce(state, SessionIntent::StartGeneration { request });
        SessionReducer::reduce(
            state,
            SessionIntent::GenerationSucceeded {
                request,
                cards: cards(n),
            },
        )
    }

    #[test]
    fn start_sets_loading_and_clears_error() {
        let mut state = SessionState::default();
        state.error = Some("old".into());
        let request = state.next_request_id();
        let state = SessionReducer::reduce(state, SessionIntent::StartGeneration { request });

        assert!(state.is_loading());
        assert_eq!(state.error(), None);
        assert!(state.is_current(request));
    }

    #[test]
    fn start_clears_discard_but_keeps_deck() {
        let state = loaded(3);
        let state = SessionReducer::reduce(
            state,
            SessionIntent::DismissTop {
                direction: SwipeDirection::Left,
            },
        );
        let request = state.next_request_id();
        let state = SessionReducer::reduce(state, SessionIntent::StartGeneration { request });

        assert!(state.discard().is_empty());
        assert_eq!(state.remaining(), 2);
    }

    #[test]
    fn success_replaces_deck() {
        let state = loaded(4);
        assert_eq!(state.remaining(), 4);
        assert!(!state.is_loading());
    }

    #[test]
    fn failure_keeps_deck_and_sets_error() {
        let state = loaded(2);
        let request = state.next_request_id();
        let state = SessionReducer::reduce(state, SessionIntent::StartGeneration { request });
        let state = SessionReducer::reduce(
            state,
            SessionIntent::GenerationFailed {
                request,
                message: "nope".into(),
            },
        );

        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("nope"));
        assert_eq!(state.remaining(), 2);
    }

    #[test]
    fn stale_success_is_ignored() {
        let state = SessionState::default();
        let first = state.next_request_id();
        let state = SessionReducer::reduce(state, SessionIntent::StartGeneration { request: first });
        let second = state.next_request_id();
        let state =
            SessionReducer::reduce(state, SessionIntent::StartGeneration { request: second });

        let state = SessionReducer::reduce(
            state,
            SessionIntent::GenerationSucceeded {
                request: first,
                cards: cards(5),
            },
        );
        assert!(state.deck().is_empty());
        assert!(state.is_loading());

        let state = SessionReducer::reduce(
            state,
            SessionIntent::GenerationSucceeded {
                request: second,
                cards: cards(2),
            },
        );
        assert_eq!(state.remaining(), 2);
        assert!(!state.is_loading());
    }

    #[test]
    fn duplicate_result_after_completion_is_ignored() {
        let state = SessionState::default();
        let request = state.next_request_id();
        let state = SessionReducer::reduce(state, SessionIntent::StartGeneration { request });
        let state = SessionReducer::reduce(
            state,
            SessionIntent::GenerationSucceeded {
                request,
                cards: cards(3),
            },
        );
        let state = SessionReducer::reduce(
            state,
            SessionIntent::GenerationFailed {
                request,
                message: "late".into(),
            },
        );
        assert_eq!(state.error(), None);
        assert_eq!(state.remaining(), 3);
    }

    #[test]
    fn stale_request_id_is_not_current() {
        let first = RequestId::default().next();
        let mut state = SessionState::default();
        state = SessionReducer::reduce(state, SessionIntent::StartGeneration { request: first });
        let second = state.next_request_id();
        state = SessionReducer::reduce(state, SessionIntent::StartGeneration { request: second });
        assert!(!state.is_current(first));
        assert!(state.is_current(second));
    }

    #[test]
    fn flip_toggles_only_with_cards() {
        let empty = SessionReducer::reduce(SessionState::default(), SessionIntent::Flip);
        assert_eq!(empty.face(), CardFace::Question);

        let state = SessionReducer::reduce(loaded(1), SessionIntent::Flip);
        assert_eq!(state.face(), CardFace::Answer);
        let state = SessionReducer::reduce(state, SessionIntent::Flip);
        assert_eq!(state.face(), CardFace::Question);
    }

    #[test]
    fn show_question_resets_face() {
        let state = SessionReducer::reduce(loaded(1), SessionIntent::Flip);
        let state = SessionReducer::reduce(state, SessionIntent::ShowQuestion);
        assert_eq!(state.face(), CardFace::Question);
    }

    #[test]
    fn dismiss_resets_face_for_next_card() {
        let state = SessionReducer::reduce(loaded(2), SessionIntent::Flip);
        let state = SessionReducer::reduce(
            state,
            SessionIntent::DismissTop {
                direction: SwipeDirection::Right,
            },
        );
        assert_eq!(state.face(), CardFace::Question);
    }

    #[test]
    fn reset_is_noop_while_cards_remain() {
        let state = loaded(2);
        let state = SessionReducer::reduce(
            state,
            SessionIntent::DismissTop {
                direction: SwipeDirection::Left,
            },
        );
        let before = state.clone();
        let after = SessionReducer::reduce(state, SessionIntent::ResetDeck);
        assert_eq!(before, after);
    }

    #[test]
    fn reset_is_noop_when_nothing_discarded() {
        let after = SessionReducer::reduce(SessionState::default(), SessionIntent::ResetDeck);
        assert_eq!(after, SessionState::default());
    }
}
