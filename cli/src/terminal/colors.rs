use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 138, g: 180, b: 248 };
pub const SECONDARY: Color = Color::TrueColor { r: 129, g: 201, b: 149 };
pub const ACCENT: Color = Color::TrueColor { r: 253, g: 214, b: 99 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const SURFACE: Color = Color::TrueColor { r: 120, g: 217, b: 236 };
pub const PRICE: Color = Color::TrueColor { r: 242, g: 139, b: 130 };
pub const FAILURE: Color = Color::Red;
