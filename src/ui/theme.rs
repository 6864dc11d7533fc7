use ratatui::style::Color;

pub const STORE_ACCENT: Color = Color::Rgb(0x4f, 0x46, 0xe5);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const SKELETON: Color = Color::Rgb(0x37, 0x41, 0x51);

/// Terminal swatch for a product color.
pub fn swatch(color: crate::catalog::Color) -> Color {
    use crate::catalog::Color as Palette;
    match color {
        Palette::White => Color::Rgb(0xf5, 0xf5, 0xf4),
        Palette::Blue => Color::Rgb(0x3b, 0x82, 0xf6),
        Palette::Beige => Color::Rgb(0xd6, 0xc7, 0xa1),
        Palette::Purple => Color::Rgb(0xa8, 0x55, 0xf7),
        Palette::Green => Color::Rgb(0x22, 0xc5, 0x5e),
    }
}
