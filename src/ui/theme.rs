use ratatui::style::Color;

pub const ACCENT_BLUE: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x33, 0x41, 0x55);
pub const FOCUS_BORDER: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const HEADER_TEXT: Color = Color::Rgb(0xf8, 0xfa, 0xfc);
pub const BODY_TEXT: Color = Color::Rgb(0xcb, 0xd5, 0xe1);
pub const MUTED_TEXT: Color = Color::Rgb(0x94, 0xa3, 0xb8);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xf8, 0x71, 0x71);
pub const CURSOR_HIGHLIGHT: Color = Color::Rgb(0x33, 0x41, 0x55);
