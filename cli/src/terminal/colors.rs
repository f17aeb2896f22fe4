use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 102, g: 204, b: 153 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 196, b: 87 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const IPV4_ADDR: Color = Color::TrueColor { r: 110, g: 180, b: 255 };
pub const IPV4_PREFIX: Color = Color::TrueColor { r: 180, g: 140, b: 255 };
pub const EMPTY_VALUE: Color = Color::BrightBlack;
