use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 110, g: 200, b: 250 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 220, g: 220, b: 220 };

pub const IPV4_ADDR: Color = Color::TrueColor { r: 120, g: 230, b: 160 };
pub const IPV4_PREFIX: Color = Color::TrueColor { r: 250, g: 150, b: 120 };
pub const COUNT: Color = Color::TrueColor { r: 250, g: 200, b: 90 };

pub const VALID: Color = Color::Green;
pub const INVALID: Color = Color::Red;
