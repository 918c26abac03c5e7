//! Home page: hero, services, joinery, portfolio and contact.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::theme::{BG, DARK, GOLD, LIGHT, MUTED};
use super::{inset, overflow, prose};
use crate::core::content::{
    HERO, JOINERY, PortfolioFilter, SERVICE_CARDS, SERVICES_HEADING, SERVICES_LEAD, STUDIO,
    Section,
};
use crate::tui::app::{HomeState, Notice};

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(LIGHT).add_modifier(Modifier::BOLD),
    ))
}

fn eyebrow(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_uppercase(),
        Style::default().fg(GOLD),
    ))
}

/// Build the whole home page at `width`, with the first line of each section.
pub fn home_lines(
    width: u16,
    filter: PortfolioFilter,
) -> (Vec<Line<'static>>, [u16; Section::ALL.len()]) {
    let muted = Style::default().fg(MUTED);
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut anchors = [0u16; Section::ALL.len()];
    let mut mark = |lines: &[Line<'static>], section: Section| {
        if let Some(idx) = Section::ALL.iter().position(|s| *s == section) {
            anchors[idx] = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        }
    };

    // Hero
    mark(&lines, Section::Home);
    lines.push(Line::default());
    lines.push(eyebrow(STUDIO.established));
    lines.push(Line::default());
    for headline in HERO.headline {
        lines.push(heading(headline));
    }
    lines.push(Line::default());
    lines.extend(prose(HERO.lead, width, muted));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(" [b] Book a consultation ", Style::default().fg(BG).bg(GOLD)),
        Span::raw("  "),
        Span::styled("[tab] Explore", muted),
    ]));
    lines.push(Line::default());
    lines.push(Line::default());

    // Services
    mark(&lines, Section::Services);
    lines.push(eyebrow("Our Expertise"));
    lines.push(heading(SERVICES_HEADING));
    lines.extend(prose(SERVICES_LEAD, width, muted));
    for (idx, card) in SERVICE_CARDS.iter().enumerate() {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", idx + 1), Style::default().fg(GOLD)),
            Span::styled(
                card.title.to_string(),
                Style::default().fg(LIGHT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" · {}", card.tag), muted),
        ]));
        lines.extend(prose(card.description, width, muted));
        for feature in card.features {
            lines.push(Line::from(vec![
                Span::styled("  ◆ ", Style::default().fg(GOLD)),
                Span::styled((*feature).to_string(), Style::default().fg(LIGHT)),
            ]));
        }
    }
    lines.push(Line::default());
    lines.push(Line::default());

    // Joinery
    mark(&lines, Section::Joinery);
    lines.push(eyebrow("Bespoke Joinery"));
    lines.push(heading(JOINERY.heading));
    lines.extend(prose(JOINERY.description, width, muted));
    lines.push(Line::default());
    for item in JOINERY.highlights {
        lines.push(Line::from(vec![
            Span::styled("  — ", Style::default().fg(GOLD)),
            Span::styled((*item).to_string(), Style::default().fg(LIGHT)),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::default());

    // Portfolio
    mark(&lines, Section::Portfolio);
    lines.push(eyebrow("Selected Work"));
    lines.push(heading("Portfolio"));
    let mut tabs = vec![Span::styled("[f] ", muted)];
    for option in PortfolioFilter::ALL {
        let style = if option == filter {
            Style::default().fg(BG).bg(GOLD)
        } else {
            muted
        };
        tabs.push(Span::styled(format!(" {} ", option.label()), style));
        tabs.push(Span::raw(" "));
    }
    lines.push(Line::from(tabs));
    lines.push(Line::default());
    for project in filter.apply() {
        lines.push(Line::from(vec![
            Span::styled("  ▪ ", Style::default().fg(GOLD)),
            Span::styled(project.title.to_string(), Style::default().fg(LIGHT)),
            Span::styled(format!("  {}", project.category.label()), muted),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::default());

    // Contact
    mark(&lines, Section::Contact);
    lines.push(eyebrow("Visit the Studio"));
    lines.push(heading(STUDIO.name));
    for address in STUDIO.address {
        lines.push(Line::from(Span::styled((*address).to_string(), muted)));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        STUDIO.email.to_string(),
        Style::default().fg(LIGHT),
    )));
    lines.push(Line::from(Span::styled(STUDIO.instagram.to_string(), muted)));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("[p] Privacy Policy", muted),
        Span::raw("   "),
        Span::styled("[t] Terms of Service", muted),
    ]));
    lines.push(Line::from(Span::styled(
        format!("© 2026 {}. All rights reserved.", STUDIO.name),
        muted,
    )));

    (lines, anchors)
}

/// Render the home page scrolled to `scroll`. Records section anchors on
/// `home` and returns how far the page can scroll.
pub fn render_home(frame: &mut Frame, area: Rect, home: &mut HomeState, scroll: u16) -> u16 {
    let body = inset(area);
    let (lines, anchors) = home_lines(body.width, home.filter);
    home.anchors = anchors;
    let limit = overflow(lines.len(), body.height);

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), body);
    limit
}

/// Centered privacy or terms dialog.
pub fn render_notice(frame: &mut Frame, area: Rect, notice: Notice) {
    let (title, text) = match notice {
        Notice::Privacy => ("Privacy Policy", STUDIO.privacy),
        Notice::Terms => ("Terms of Service", STUDIO.terms),
    };

    let width = area.width.saturating_sub(8).min(64);
    let text_width = width.saturating_sub(4);
    let mut lines: Vec<Line<'static>> = prose(text, text_width, Style::default().fg(LIGHT)).collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("[esc] Close", Style::default().fg(MUTED))));

    let height = (u16::try_from(lines.len()).unwrap_or(u16::MAX) + 2).min(area.height);
    let dialog = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, dialog);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GOLD))
        .title(Span::styled(format!(" {title} "), Style::default().fg(GOLD)))
        .style(Style::default().bg(DARK));
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);
    frame.render_widget(
        Paragraph::new(lines),
        Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height),
    );
}
