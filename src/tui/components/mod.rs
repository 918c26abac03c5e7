//! TUI components for rendering the brochure views.

mod booking;
mod home;
mod navbar;
mod service;
pub mod theme;
mod wrap;

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
};

pub use booking::render_booking;
pub use home::{render_home, render_notice};
pub use navbar::{render_navbar, render_status_bar};
pub use service::render_service;

/// Horizontal padding inside every page.
pub const PAGE_PADDING_X: u16 = 2;

/// Wrap `text` into styled lines.
fn prose(text: &str, width: u16, style: Style) -> impl Iterator<Item = Line<'static>> {
    wrap::wrap(text, usize::from(width))
        .into_iter()
        .map(move |line| Line::from(Span::styled(line, style)))
}

/// Page body inset by the horizontal padding.
fn inset(area: Rect) -> Rect {
    Rect::new(
        area.x + PAGE_PADDING_X.min(area.width / 2),
        area.y,
        area.width.saturating_sub(PAGE_PADDING_X * 2),
        area.height,
    )
}

/// Lines past the viewport, i.e. how far the page can scroll.
fn overflow(lines: usize, viewport: u16) -> u16 {
    u16::try_from(lines)
        .unwrap_or(u16::MAX)
        .saturating_sub(viewport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_is_zero_when_content_fits() {
        assert_eq!(overflow(5, 10), 0);
        assert_eq!(overflow(25, 10), 15);
        assert_eq!(overflow(usize::MAX, 10), u16::MAX - 10);
    }

    #[test]
    fn inset_keeps_narrow_areas_inside() {
        assert_eq!(inset(Rect::new(0, 0, 40, 5)), Rect::new(2, 0, 36, 5));
        assert_eq!(inset(Rect::new(0, 0, 2, 5)).width, 0);
    }
}
