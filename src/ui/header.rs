use crate::ui::theme::{BRAND_INDIGO, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const TITLE: &str = "SwipeFacts";
const RESTART_HINT: &str = "↻ Restart (r) ";

pub struct Header {
    can_restart: bool,
}

impl Header {
    pub fn new(can_restart: bool) -> Self {
        Self { can_restart }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
        let logo_style = Style::default().fg(BRAND_INDIGO);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("▤", logo_style),
            Span::styled("  ", text_style),
            Span::styled(TITLE, text_style),
        ];

        if self.can_restart {
            // Padding by char count, not byte count (for Unicode).
            let used = 5 + TITLE.chars().count();
            let padding = (area.width as usize)
                .saturating_sub(used)
                .saturating_sub(RESTART_HINT.chars().count());
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(RESTART_HINT, Style::default().fg(MUTED_TEXT)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
