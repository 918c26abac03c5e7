//! Booking page: studio column plus the consultation form or its confirmation.

use inquiry_core::SubmissionStatus;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme::{BG, DARK, ERROR, GOLD, LIGHT, MUTED};
use super::{inset, prose, wrap};
use crate::core::content::{BOOKING, STUDIO};
use crate::tui::app::BookingState;
use crate::tui::state::FormField;

/// Minimum width to show the studio column beside the form.
const MIN_WIDTH_FOR_COLUMNS: u16 = 90;

/// Rows of text in the message box.
const MESSAGE_ROWS: u16 = 4;

/// Height of a bordered single-line input.
const INPUT_HEIGHT: u16 = 3;

/// Rows below the inputs: inline error and submit button.
const FOOTER_ROWS: u16 = 2;

/// Vertical split of the form for a given height: the gap under each
/// control and the message box height.
///
/// Single-line boxes never shrink below their value row; on short terminals
/// the gaps go first, then the message box gives up rows down to one line.
fn form_rows(height: u16) -> (u16, u16) {
    let roomy = 4 * (INPUT_HEIGHT + 1) + MESSAGE_ROWS + 3 + FOOTER_ROWS;
    if height >= roomy {
        return (1, MESSAGE_ROWS + 2);
    }
    let message = height
        .saturating_sub(4 * INPUT_HEIGHT + FOOTER_ROWS)
        .clamp(INPUT_HEIGHT, MESSAGE_ROWS + 2);
    (0, message)
}

/// `slot` without its trailing gap rows.
fn without_gap(slot: Rect, gap: u16) -> Rect {
    Rect::new(slot.x, slot.y, slot.width, slot.height.saturating_sub(gap))
}

/// Render the booking page. Returns where the cursor belongs when a text field
/// has focus.
pub fn render_booking(frame: &mut Frame, area: Rect, booking: &BookingState) -> Option<Position> {
    let body = inset(area);

    let form_area = if body.width >= MIN_WIDTH_FOR_COLUMNS {
        let [info, _, form] = Layout::horizontal([
            Constraint::Percentage(38),
            Constraint::Length(4),
            Constraint::Min(40),
        ])
        .areas(body);
        render_studio_column(frame, info);
        form
    } else {
        body
    };

    if booking.status().is_succeeded() {
        render_confirmation(frame, form_area);
        None
    } else {
        render_form(frame, form_area, booking)
    }
}

fn render_studio_column(frame: &mut Frame, area: Rect) {
    let muted = Style::default().fg(MUTED);
    let mut lines = vec![Line::default()];
    for headline in BOOKING.headline {
        lines.push(Line::from(Span::styled(
            (*headline).to_string(),
            Style::default().fg(LIGHT).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::default());
    lines.extend(prose(BOOKING.lead, area.width, muted));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("THE STUDIO", Style::default().fg(GOLD))));
    for address in STUDIO.address {
        lines.push(Line::from(Span::styled((*address).to_string(), muted)));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("INQUIRIES", Style::default().fg(GOLD))));
    lines.push(Line::from(Span::styled(
        STUDIO.email.to_string(),
        Style::default().fg(LIGHT),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_confirmation(frame: &mut Frame, area: Rect) {
    let height = 10.min(area.height);
    let panel = Rect::new(area.x, area.y + 1, area.width, height.saturating_sub(1));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GOLD))
        .style(Style::default().bg(DARK));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let mut lines = vec![
        Line::from(Span::styled("✓", Style::default().fg(GOLD))),
        Line::from(Span::styled(
            BOOKING.confirmation_title,
            Style::default().fg(LIGHT).add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(prose(
        BOOKING.confirmation_body,
        inner.width.saturating_sub(2),
        Style::default().fg(MUTED),
    ));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "[enter] Back to home",
        Style::default().fg(GOLD),
    )));

    frame.render_widget(
        Paragraph::new(lines),
        Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height),
    );
}

fn render_form(frame: &mut Frame, area: Rect, booking: &BookingState) -> Option<Position> {
    let (gap, message_height) = form_rows(area.height);
    let [name, email, project, budget, message, error, submit] = Layout::vertical([
        Constraint::Length(INPUT_HEIGHT + gap),
        Constraint::Length(INPUT_HEIGHT + gap),
        Constraint::Length(INPUT_HEIGHT + gap),
        Constraint::Length(INPUT_HEIGHT + gap),
        Constraint::Length(message_height + gap),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);
    let [name, email, project, budget, message] =
        [name, email, project, budget, message].map(|slot| without_gap(slot, gap));

    let form = &booking.form;
    let mut cursor = None;
    for (field, slot, value) in [
        (FormField::Name, name, form.name.as_str()),
        (FormField::Email, email, form.email.as_str()),
        (FormField::Budget, budget, form.budget.as_str()),
        (FormField::Message, message, form.message.as_str()),
    ] {
        let position = render_input(frame, slot, field, value, booking.focus == field);
        if booking.focus == field {
            cursor = position;
        }
    }
    render_select(
        frame,
        project,
        form.project_type.label(),
        booking.focus == FormField::ProjectType,
    );

    if let SubmissionStatus::Failed(message) = booking.status() {
        frame.render_widget(
            Paragraph::new(Span::styled(message.clone(), Style::default().fg(ERROR))),
            error,
        );
    }

    let (label, style) = if booking.status().is_submitting() {
        (" Sending... ", Style::default().fg(MUTED).bg(DARK))
    } else if booking.focus == FormField::Submit {
        (
            " Book consultation ",
            Style::default()
                .fg(BG)
                .bg(GOLD)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (" Book consultation ", Style::default().fg(GOLD).bg(DARK))
    };
    frame.render_widget(Paragraph::new(Span::styled(label, style)), submit);

    cursor
}

fn field_block(field: FormField, focused: bool) -> Block<'static> {
    let required = matches!(
        field,
        FormField::Name | FormField::Email | FormField::Message
    );
    let title = if required {
        format!(" {} * ", field.label())
    } else {
        format!(" {} ", field.label())
    };
    let border = if focused { GOLD } else { MUTED };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(title, Style::default().fg(border)))
}

fn render_input(
    frame: &mut Frame,
    area: Rect,
    field: FormField,
    value: &str,
    focused: bool,
) -> Option<Position> {
    let block = field_block(field, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if value.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(field.placeholder(), Style::default().fg(MUTED))),
            inner,
        );
        return Some(Position::new(inner.x, inner.y));
    }

    let lines = wrap::wrap(value, usize::from(inner.width.max(1)));
    // Keep the last line in view while typing
    let skip = lines.len().saturating_sub(usize::from(inner.height.max(1)));
    let row = lines.len() - 1 - skip;
    let col = lines.last().map_or(0, |l| l.chars().count());

    let shown: Vec<Line<'static>> = lines
        .into_iter()
        .skip(skip)
        .map(|l| Line::from(Span::styled(l, Style::default().fg(LIGHT))))
        .collect();
    frame.render_widget(Paragraph::new(shown), inner);

    Some(Position::new(
        inner.x + (col as u16).min(inner.width.saturating_sub(1)),
        inner.y + row as u16,
    ))
}

fn render_select(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    let block = field_block(FormField::ProjectType, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let arrows = if focused { GOLD } else { MUTED };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("‹ ", Style::default().fg(arrows)),
            Span::styled(label.to_string(), Style::default().fg(LIGHT)),
            Span::styled(" ›", Style::default().fg(arrows)),
        ])),
        inner,
    );
}
