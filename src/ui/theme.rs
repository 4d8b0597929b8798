use ratatui::style::Color;

use crate::deck::CardStyle;

pub const BRAND_INDIGO: Color = Color::Rgb(0x4f, 0x46, 0xe5);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const FOCUS_BORDER: Color = Color::Rgb(0xa7, 0x8b, 0xfa);
pub const STATUS_LOADING: Color = Color::Rgb(0x81, 0x8c, 0xf8);
pub const STATUS_ERROR: Color = Color::Rgb(0xfc, 0xa5, 0xa5);
pub const ANSWER_FACE: Color = Color::Rgb(0xf9, 0xfa, 0xfb);
pub const ANSWER_TEXT: Color = Color::Rgb(0x1f, 0x29, 0x37);
pub const STACK_ECHO: Color = Color::Rgb(0x37, 0x41, 0x51);

/// Accent color of a question face.
pub fn card_color(style: CardStyle) -> Color {
    match style {
        CardStyle::Rose => Color::Rgb(0xf4, 0x3f, 0x5e),
        CardStyle::Indigo => Color::Rgb(0x63, 0x66, 0xf1),
        CardStyle::Cyan => Color::Rgb(0x06, 0xb6, 0xd4),
        CardStyle::Teal => Color::Rgb(0x14, 0xb8, 0xa6),
        CardStyle::Amber => Color::Rgb(0xf5, 0x9e, 0x0b),
        CardStyle::Orange => Color::Rgb(0xf9, 0x73, 0x16),
    }
}
