use crate::config::UiConfig;
use crate::deck::{Card, SwipeDirection};
use crate::generation::USER_FACING_MESSAGE;
use crate::ui::gesture::{DragOutcome, GestureIntent, GestureReducer, GestureState};
use crate::ui::layout::{card_layers, contains, layout_regions, Regions};
use crate::ui::mvi::Reducer;
use crate::ui::session::{RequestId, SessionIntent, SessionReducer, SessionState};
use crate::ui::topic_input::TopicInput;
use ratatui::layout::Rect;
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Topic,
    Stack,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    GenerateDeck { request: RequestId, topic: String },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    size: Option<(u16, u16)>,
    config: UiConfig,
    /// Deck, discard pile and generation flags (MVI pattern).
    session: SessionState,
    /// Drag session over the front card (MVI pattern).
    gesture: GestureState,
    topic: TopicInput,
    command_sender: Option<UiCommandSender>,
    spinner_tick: u8,
}

impl App {
    pub fn new(config: UiConfig) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Topic,
            size: None,
            config,
            session: SessionState::default(),
            gesture: GestureState::default(),
            topic: TopicInput::default(),
            command_sender: None,
            spinner_tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Topic => Focus::Stack,
            Focus::Stack => Focus::Topic,
        };
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn topic(&self) -> &TopicInput {
        &self.topic
    }

    /// Mutable access to the topic field. Ignored while a deck is loading.
    pub fn topic_mut(&mut self) -> Option<&mut TopicInput> {
        if self.session.is_loading() {
            None
        } else {
            Some(&mut self.topic)
        }
    }

    pub fn spinner_tick(&self) -> u8 {
        self.spinner_tick
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn on_tick(&mut self) {
        if self.session.is_loading() {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Screen regions for the last known terminal size.
    pub fn regions(&self) -> Option<Regions> {
        let (cols, rows) = self.size?;
        Some(layout_regions(
            Rect::new(0, 0, cols, rows),
            self.session.error().is_some(),
        ))
    }

    pub fn units_per_column(&self) -> i32 {
        self.config.units_per_column
    }

    /// Horizontal drag offset of the front card, in drag units.
    pub fn drag_offset_units(&self) -> i32 {
        self.gesture.offset_units(self.config.units_per_column)
    }

    // ========================================================================
    // Generation
    // ========================================================================

    /// Submit the topic field. Blank input and submissions while loading are ignored.
    pub fn submit_topic(&mut self) -> bool {
        if self.session.is_loading() {
            return false;
        }
        let Some(topic) = self.topic.submission() else {
            return false;
        };
        self.start_generation(topic);
        true
    }

    fn start_generation(&mut self, topic: String) {
        let request = self.session.next_request_id();
        self.dispatch_session(SessionIntent::StartGeneration { request });
        self.dispatch_gesture(GestureIntent::End);
        self.focus = Focus::Stack;

        tracing::info!(request = request.value(), topic = %topic, "Requesting deck");

        if let Err(err) = self.send_command(UiCommand::GenerateDeck { request, topic }) {
            tracing::error!(request = request.value(), error = %err, "Failed to queue deck generation");
            self.dispatch_session(SessionIntent::GenerationFailed {
                request,
                message: USER_FACING_MESSAGE.to_string(),
            });
        }
    }

    /// A generation request finished. Stale results are dropped by the reducer.
    pub fn on_deck_generated(&mut self, request: RequestId, result: Result<Vec<Card>, String>) {
        if !self.session.is_current(request) {
            tracing::warn!(request = request.value(), "Ignoring stale deck generation result");
            return;
        }
        match result {
            Ok(cards) => {
                tracing::info!(request = request.value(), cards = cards.len(), "Deck ready");
                self.dispatch_gesture(GestureIntent::End);
                self.dispatch_session(SessionIntent::GenerationSucceeded { request, cards });
            }
            Err(message) => {
                self.dispatch_session(SessionIntent::GenerationFailed { request, message });
            }
        }
    }

    // ========================================================================
    // Card stack
    // ========================================================================

    pub fn dismiss_top(&mut self, direction: SwipeDirection) {
        if let Some(card) = self.session.top() {
            tracing::debug!(card = %card.id(), ?direction, "Dismissing card");
        }
        self.dispatch_gesture(GestureIntent::End);
        self.dispatch_session(SessionIntent::DismissTop { direction });
    }

    pub fn reset_deck(&mut self) -> bool {
        if !self.session.can_reset() {
            return false;
        }
        self.dispatch_session(SessionIntent::ResetDeck);
        true
    }

    pub fn flip(&mut self) {
        self.dispatch_session(SessionIntent::Flip);
    }

    pub fn show_question(&mut self) {
        self.dispatch_session(SessionIntent::ShowQuestion);
    }

    // ========================================================================
    // Pointer
    // ========================================================================

    /// Rect of the front card at rest, if there is one on screen.
    pub fn top_card_rect(&self) -> Option<Rect> {
        if self.session.top().is_none() {
            return None;
        }
        let regions = self.regions()?;
        card_layers(regions.stack, 1).into_iter().next()
    }

    pub fn on_pointer_down(&mut self, column: u16, row: u16) {
        if let Some(regions) = self.regions() {
            if contains(regions.input, column, row) {
                self.focus = Focus::Topic;
                return;
            }
            if contains(regions.header, column, row) {
                self.reset_deck();
                return;
            }
        }

        let on_top_card = self
            .top_card_rect()
            .is_some_and(|rect| contains(rect, column, row));
        if on_top_card {
            self.focus = Focus::Stack;
            self.dispatch_gesture(GestureIntent::Press { column });
        }
    }

    pub fn on_pointer_drag(&mut self, column: u16) {
        self.dispatch_gesture(GestureIntent::Drag { column });
    }

    pub fn on_pointer_up(&mut self) {
        let outcome = self.gesture.outcome(self.config.units_per_column);
        self.dispatch_gesture(GestureIntent::End);

        match outcome {
            Some(DragOutcome::Tap) => self.flip(),
            Some(DragOutcome::Dismiss(direction)) => self.dismiss_top(direction),
            Some(DragOutcome::SpringBack) | None => {}
        }
    }

    // ========================================================================
    // MVI dispatch
    // ========================================================================

    fn dispatch_session(&mut self, intent: SessionIntent) {
        dispatch_mvi!(self, session, SessionReducer, intent);
    }

    fn dispatch_gesture(&mut self, intent: GestureIntent) {
        dispatch_mvi!(self, gesture, GestureReducer, intent);
    }

    fn send_command(&mut self, command: UiCommand) -> Result<(), String> {
        let Some(sender) = &self.command_sender else {
            return Err("no command channel".to_string());
        };
        sender
            .try_send(command)
            .map_err(|err| format!("command send failed: {}", err))
    }
}
