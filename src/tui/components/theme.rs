//! Studio palette and the fade used during view transitions.

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

pub const GOLD: Color = Color::Rgb(201, 162, 77);
pub const BG: Color = Color::Rgb(11, 11, 11);
pub const LIGHT: Color = Color::Rgb(237, 230, 214);
pub const MUTED: Color = Color::Rgb(154, 148, 134);
pub const DARK: Color = Color::Rgb(18, 18, 18);
pub const ERROR: Color = Color::Rgb(224, 108, 96);

/// Blend `color` toward the background; `opacity` 0.0 is fully faded.
pub fn blend(color: Color, opacity: f32) -> Color {
    let Color::Rgb(r, g, b) = color else {
        return color;
    };
    let Color::Rgb(br, bg, bb) = BG else {
        return color;
    };
    let opacity = opacity.clamp(0.0, 1.0);
    let mix = |c: u8, base: u8| -> u8 {
        (f32::from(base) + (f32::from(c) - f32::from(base)) * opacity).round() as u8
    };
    Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
}

/// Apply `opacity` to everything already drawn in `area`.
pub fn fade(buf: &mut Buffer, area: Rect, opacity: f32) {
    if opacity >= 1.0 {
        return;
    }
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.fg = blend(cell.fg, opacity);
                cell.bg = blend(cell.bg, opacity);
            }
        }
    }
}
