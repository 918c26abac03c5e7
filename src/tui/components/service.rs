//! Dedicated service pages.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme::{BG, GOLD, LIGHT, MUTED};
use super::{inset, overflow, prose};
use crate::core::ServiceKind;
use crate::core::content::service_page;

pub fn service_lines(kind: ServiceKind, width: u16) -> Vec<Line<'static>> {
    let page = service_page(kind);
    let muted = Style::default().fg(MUTED);
    let light = Style::default().fg(LIGHT);
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            page.category.to_uppercase(),
            Style::default().fg(GOLD),
        )),
        Line::from(Span::styled(
            page.title.to_string(),
            light.add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(prose(page.subtitle, width, muted));
    lines.push(Line::default());

    for paragraph in page.paragraphs {
        lines.extend(prose(paragraph, width, light));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        "CAPABILITIES",
        Style::default().fg(GOLD),
    )));
    for capability in page.capabilities {
        lines.push(Line::from(vec![
            Span::styled("  ◆ ", Style::default().fg(GOLD)),
            Span::styled((*capability).to_string(), light),
        ]));
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("OUR PROCESS", Style::default().fg(GOLD))));
    for step in &page.process {
        lines.push(Line::from(vec![
            Span::styled(format!("{}  ", step.number), Style::default().fg(GOLD)),
            Span::styled(step.title.to_string(), light.add_modifier(Modifier::BOLD)),
        ]));
        lines.extend(prose(step.description, width.saturating_sub(4), muted).map(|line| {
            let mut spans = vec![Span::raw("    ")];
            spans.extend(line.spans);
            Line::from(spans)
        }));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " [b] Book a consultation ",
        Style::default().fg(BG).bg(GOLD),
    )));

    lines
}

/// Render the page for `kind` scrolled to `scroll`; returns how far it can scroll.
pub fn render_service(frame: &mut Frame, area: Rect, kind: ServiceKind, scroll: u16) -> u16 {
    let body = inset(area);
    let lines = service_lines(kind, body.width);
    let limit = overflow(lines.len(), body.height);

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), body);
    limit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn every_page_lists_its_steps_in_order() {
        for kind in ServiceKind::ALL {
            let steps: Vec<String> = service_lines(kind, 80)
                .iter()
                .map(text)
                .filter(|t| t.starts_with('0'))
                .map(|t| t[..2].to_string())
                .collect();
            assert_eq!(steps, ["01", "02", "03", "04"], "{kind}");
        }
    }

    #[test]
    fn page_opens_with_its_title() {
        let page = service_page(ServiceKind::MediaPanels);
        let lines = service_lines(ServiceKind::MediaPanels, 80);
        assert_eq!(text(&lines[2]), page.title);
    }
}
