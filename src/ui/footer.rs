use crate::ui::session::SessionState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_LOADING};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
const HINTS: &str = "Tab: Focus │ Space: Flip │ ←/→: Skip │ Esc: Quit";

/// Ambient status line: loading, remaining cards, or idle branding.
pub fn status_text(session: &SessionState, spinner_tick: u8) -> String {
    if session.is_loading() {
        let frame = SPINNER[spinner_tick as usize % SPINNER.len()];
        format!("{} AI is thinking...", frame)
    } else if session.remaining() > 0 {
        format!("{} cards remaining", session.remaining())
    } else {
        "Powered by Gemini".to_string()
    }
}

pub struct Footer<'a> {
    session: &'a SessionState,
    spinner_tick: u8,
}

impl<'a> Footer<'a> {
    pub fn new(session: &'a SessionState, spinner_tick: u8) -> Self {
        Self {
            session,
            spinner_tick,
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let status = format!(" {}", status_text(self.session, self.spinner_tick));
        let right = format!("{}  v{} ", HINTS, VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(status.chars().count())
            .saturating_sub(right.chars().count());

        let dim_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let status_style = if self.session.is_loading() {
            Style::default().fg(STATUS_LOADING)
        } else {
            dim_style
        };

        let line = Line::from(vec![
            Span::styled(status, status_style),
            Span::styled(" ".repeat(padding), dim_style),
            Span::styled(right, dim_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
