//! Top navigation bar and bottom key-hint bar.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme::{BG, DARK, GOLD, LIGHT, MUTED};
use crate::build_info;
use crate::core::ViewState;
use crate::core::content::{STUDIO, Section};

/// Minimum width to show section links.
const MIN_WIDTH_FOR_LINKS: u16 = 70;

/// Draw the navbar (row 1) with the home scroll progress bar above it (row 0).
///
/// `section` and `progress` are only passed while Home is shown.
pub fn render_navbar(
    frame: &mut Frame,
    area: Rect,
    view: ViewState,
    section: Option<Section>,
    progress: Option<f64>,
) {
    if area.height < 2 {
        return;
    }

    let bar_area = Rect::new(area.x, area.y, area.width, 1);
    let nav_area = Rect::new(area.x, area.y + 1, area.width, 1);

    if let Some(progress) = progress {
        let filled = (f64::from(area.width) * progress.clamp(0.0, 1.0)).round() as usize;
        let bar = Span::styled("▀".repeat(filled), Style::default().fg(GOLD).bg(BG));
        frame.render_widget(Paragraph::new(Line::from(bar)), bar_area);
    }

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            STUDIO.name.to_uppercase(),
            Style::default().fg(LIGHT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];

    match view {
        ViewState::Home if area.width >= MIN_WIDTH_FOR_LINKS => {
            for s in Section::ALL {
                let style = if Some(s) == section {
                    Style::default().fg(GOLD).add_modifier(Modifier::UNDERLINED)
                } else {
                    Style::default().fg(MUTED)
                };
                spans.push(Span::styled(s.label(), style));
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled("[b] Book", Style::default().fg(BG).bg(GOLD)));
        }
        ViewState::Home => {
            spans.push(Span::styled("[b] Book", Style::default().fg(BG).bg(GOLD)));
        }
        ViewState::Booking | ViewState::Service(_) => {
            spans.push(Span::styled("← [esc] Home", Style::default().fg(MUTED)));
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(BG)),
        nav_area,
    );
}

/// Key hints for the current view plus the build version.
pub fn render_status_bar(frame: &mut Frame, area: Rect, view: ViewState) {
    let hints = match view {
        ViewState::Home => {
            "↑↓ scroll · tab section · 1-3 services · f filter · p/t notices · b book · q quit"
        }
        ViewState::Booking => {
            "tab field · ←→ project type · enter/ctrl+s submit · esc home · ctrl+c quit"
        }
        ViewState::Service(_) => "↑↓ scroll · 1-3 services · b book · esc home · q quit",
    };

    let version = build_info::short_version();
    let pad = (area.width as usize)
        .saturating_sub(hints.chars().count() + version.chars().count() + 2);
    let line = Line::from(vec![
        Span::styled(format!(" {hints}"), Style::default().fg(MUTED)),
        Span::raw(" ".repeat(pad)),
        Span::styled(format!("{version} "), Style::default().fg(MUTED)),
    ]);

    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(DARK)),
        area,
    );
}
