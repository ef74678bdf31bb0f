use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x1e, 0x29, 0x3b);
pub const HEADER_TEXT: Color = Color::Rgb(0xe2, 0xe8, 0xf0);
pub const SUBTLE_TEXT: Color = Color::Rgb(0x94, 0xa3, 0xb8);
pub const TITLE_BLUE: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const TITLE_PURPLE: Color = Color::Rgb(0xc0, 0x84, 0xfc);
pub const COUNT_TEXT: Color = Color::Rgb(0xf8, 0xfa, 0xfc);
pub const COUNT_PULSE: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const INSIGHT_ACCENT: Color = Color::Rgb(0xc0, 0x84, 0xfc);
pub const CARD_BORDER: Color = Color::Rgb(0x6b, 0x21, 0xa8);
pub const BADGE_BG: Color = Color::Rgb(0x33, 0x41, 0x55);
pub const STATUS_ERROR: Color = Color::Rgb(0xf8, 0x71, 0x71);
pub const DOT_INCREASE: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const DOT_DECREASE: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const DOT_RESET: Color = Color::Rgb(0xef, 0x44, 0x44);
