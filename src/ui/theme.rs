use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const SURFACE: Color = Color::Rgb(0x37, 0x41, 0x51);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x4b, 0x55, 0x63);
pub const HEADER_TEXT: Color = Color::Rgb(0xf9, 0xfa, 0xfb);
pub const MUTED_TEXT: Color = Color::Rgb(0xd1, 0xd5, 0xdb);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const CODE_BACKGROUND: Color = Color::Rgb(0x11, 0x18, 0x27);
pub const STATUS_WARN: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
