use ratatui::style::Color;

use crate::host::Theme;

pub const ACCENT: Color = Color::Rgb(0xea, 0x58, 0x0c);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub info: Color,
    pub accent: Color,
    pub success: Color,
    pub active_highlight: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(0xff, 0xff, 0xff),
    surface: Color::Rgb(0xf8, 0xfa, 0xfc),
    border: Color::Rgb(0xe2, 0xe8, 0xf0),
    text: Color::Rgb(0x0f, 0x17, 0x2a),
    text_muted: Color::Rgb(0x64, 0x74, 0x8b),
    info: Color::Rgb(0x1e, 0x40, 0xaf),
    accent: ACCENT,
    success: STATUS_OK,
    active_highlight: Color::Rgb(0xff, 0xf7, 0xed),
};

const DARK: Palette = Palette {
    background: Color::Rgb(0x0f, 0x17, 0x2a),
    surface: Color::Rgb(0x1e, 0x29, 0x3b),
    border: Color::Rgb(0x33, 0x41, 0x55),
    text: Color::Rgb(0xf8, 0xfa, 0xfc),
    text_muted: Color::Rgb(0x94, 0xa3, 0xb8),
    info: Color::Rgb(0x93, 0xc5, 0xfd),
    accent: ACCENT,
    success: STATUS_OK,
    active_highlight: Color::Rgb(0x26, 0x26, 0x26),
};

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => LIGHT,
        Theme::Dark => DARK,
    }
}
