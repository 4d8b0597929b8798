use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Only this many cards from the front of the deck are drawn.
pub const MAX_VISIBLE_CARDS: usize = 3;

const CARD_MAX_WIDTH: u16 = 52;
const CARD_MAX_HEIGHT: u16 = 18;
/// Rows reserved under the front card for the echoes of the next cards.
const STACK_DEPTH_ROWS: u16 = (MAX_VISIBLE_CARDS as u16) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub input: Rect,
    pub error: Rect,
    pub stack: Rect,
    pub footer: Rect,
}

/// Split the screen. The error row collapses to zero height when unused.
pub fn layout_regions(area: Rect, show_error: bool) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(u16::from(show_error)),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    Regions {
        header: chunks[0],
        input: chunks[1],
        error: chunks[2],
        stack: chunks[3],
        footer: chunks[4],
    }
}

/// Resting position of the front card inside the stack area.
pub fn card_rect(stack: Rect) -> Rect {
    let width = stack.width.min(CARD_MAX_WIDTH);
    let height = stack
        .height
        .saturating_sub(STACK_DEPTH_ROWS)
        .min(CARD_MAX_HEIGHT);
    let x = stack.x + (stack.width - width) / 2;
    let y = stack.y + (stack.height.saturating_sub(height + STACK_DEPTH_ROWS)) / 2;
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Rects for the first `count` cards, front card first.
///
/// Each deeper card sits one row lower and is inset two columns per side.
pub fn card_layers(stack: Rect, count: usize) -> Vec<Rect> {
    let base = card_rect(stack);
    let bottom = stack.y + stack.height;
    (0..count.min(MAX_VISIBLE_CARDS) as u16)
        .map(|depth| {
            let inset = depth * 2;
            let y = base.y + depth;
            Rect {
                x: base.x + inset.min(base.width / 2),
                y,
                width: base.width.saturating_sub(inset * 2),
                height: base.height.min(bottom.saturating_sub(y)),
            }
        })
        .collect()
}

/// Move `rect` horizontally by `offset` columns, kept inside `bounds`.
pub fn shift_horizontally(rect: Rect, offset: i32, bounds: Rect) -> Rect {
    let min_x = i32::from(bounds.x);
    let max_x = i32::from(bounds.x + bounds.width.saturating_sub(rect.width));
    let x = (i32::from(rect.x) + offset).clamp(min_x, max_x.max(min_x));
    Rect {
        x: x as u16,
        ..rect
    }
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
