//! Card stack widget: the front card plus a faint echo of the next two.

use crate::deck::Card;
use crate::ui::gesture::SWIPE_THRESHOLD;
use crate::ui::layout::{card_layers, shift_horizontally};
use crate::ui::session::{CardFace, SessionState};
use crate::ui::theme::{
    card_color, ANSWER_FACE, ANSWER_TEXT, HEADER_TEXT, MUTED_TEXT, STACK_ECHO,
};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap};

pub struct CardStack<'a> {
    session: &'a SessionState,
    drag_offset_units: i32,
    units_per_column: i32,
}

impl<'a> CardStack<'a> {
    pub fn new(session: &'a SessionState, drag_offset_units: i32, units_per_column: i32) -> Self {
        Self {
            session,
            drag_offset_units,
            units_per_column,
        }
    }
}

impl Widget for CardStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible: Vec<&Card> = self.session.visible(usize::MAX).collect();
        if visible.is_empty() {
            if !self.session.is_loading() {
                render_empty_state(area, buf);
            }
            return;
        }

        let layers = card_layers(area, visible.len());

        // Back to front so the front card is drawn last.
        for (depth, rect) in layers.iter().enumerate().skip(1).rev() {
            render_echo(visible[depth], *rect, buf);
        }

        let Some(front_rect) = layers.first() else {
            return;
        };
        let offset_columns = self.drag_offset_units / self.units_per_column.max(1);
        let rect = shift_horizontally(*front_rect, offset_columns, area);
        let drag = self.drag_offset_units;

        match self.session.face() {
            CardFace::Question => render_question(visible[0], rect, drag, buf),
            CardFace::Answer => render_answer(visible[0], rect, drag, buf),
        }
    }
}

fn render_empty_state(area: Rect, buf: &mut Buffer) {
    let top_padding = area.height.saturating_sub(2) / 2;
    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        "No cards yet",
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "Enter a topic above to generate a deck of fun facts!",
        Style::default().fg(MUTED_TEXT),
    )));
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_echo(card: &Card, rect: Rect, buf: &mut Buffer) {
    Clear.render(rect, buf);
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(STACK_ECHO))
        .style(Style::default().fg(card_color(card.style())).add_modifier(Modifier::DIM))
        .render(rect, buf);
}

fn render_question(card: &Card, rect: Rect, drag: i32, buf: &mut Buffer) {
    let accent = card_color(card.style());
    let footer = if drag.abs() > SWIPE_THRESHOLD {
        " Release to skip "
    } else {
        " Tap to flip • Swipe to skip "
    };
    let block = face_block(accent, drag)
        .title(Line::from(Span::styled(
            format!(" {} ", card.topic().to_uppercase()),
            Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        )))
        .title_bottom(Line::from(footer).centered());

    render_face(
        card.question(),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        block,
        rect,
        buf,
    );
}

fn render_answer(card: &Card, rect: Rect, drag: i32, buf: &mut Buffer) {
    let block = face_block(MUTED_TEXT, drag)
        .style(Style::default().bg(ANSWER_FACE))
        .title(Line::from(Span::styled(
            " DID YOU KNOW? ",
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD),
        )))
        .title_bottom(Line::from(" Tap or b to flip back ").centered());

    render_face(
        card.answer(),
        Style::default().fg(ANSWER_TEXT).bg(ANSWER_FACE),
        block,
        rect,
        buf,
    );
}

/// Border for the front card. Dims once a release would dismiss it.
fn face_block(border: Color, drag: i32) -> Block<'static> {
    let mut border_style = Style::default().fg(border);
    if drag.abs() > SWIPE_THRESHOLD {
        border_style = border_style.add_modifier(Modifier::DIM);
    }
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Line::from(rotation_hint(drag)).right_aligned())
}

/// Tilt glyph for a drag offset: one stroke per half threshold, capped at three.
pub fn rotation_hint(drag_offset_units: i32) -> &'static str {
    const RIGHT: [&str; 4] = ["", "╱ ", "╱╱ ", "╱╱╱ "];
    const LEFT: [&str; 4] = ["", "╲ ", "╲╲ ", "╲╲╲ "];
    let step = (drag_offset_units.unsigned_abs() / (SWIPE_THRESHOLD as u32 / 2)).min(3) as usize;
    if drag_offset_units >= 0 {
        RIGHT[step]
    } else {
        LEFT[step]
    }
}

fn render_face(text: &str, style: Style, block: Block<'_>, rect: Rect, buf: &mut Buffer) {
    Clear.render(rect, buf);
    let inner = block.inner(rect);
    let padding = vertical_padding(text, inner.width, inner.height);
    let mut lines: Vec<Line> = (0..padding).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(text.to_string(), style)));

    Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(rect, buf);
}

/// Blank lines needed above `text` to center it vertically once wrapped.
pub fn vertical_padding(text: &str, width: u16, height: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let chars = text.chars().count() as u16;
    let wrapped = chars.div_ceil(width).max(1);
    height.saturating_sub(wrapped) / 2
}
