//! Terminal brochure for Nirvana Interiors.

mod app;
mod components;
mod state;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::core::content::{SERVICE_CARDS, Section};
use crate::core::{ServiceKind, ViewState};

pub use app::App;
use app::{Notice, SubmissionRx};
use components::{
    render_booking, render_home, render_navbar, render_notice, render_service, render_status_bar,
    theme,
};
use state::FormField;

/// Lines moved by one page key.
const PAGE_SCROLL: i32 = 10;

/// Run the brochure until the user quits.
///
/// `simulate` answers submissions locally instead of posting them.
///
/// # Errors
///
/// Returns an error if terminal initialization fails or the event loop encounters an error.
pub async fn run(config: Config, simulate: bool) -> anyhow::Result<()> {
    let transport = config.client.transport(simulate);
    tracing::info!(transport = transport.name(), "starting brochure");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.tui.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (submission_tx, submission_rx) = mpsc::unbounded_channel();
    let mut app = App::new(transport, config.tui.fade(), submission_tx);

    let result = run_app(&mut terminal, &mut app, submission_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    if config.tui.mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    mut submissions: SubmissionRx,
) -> anyhow::Result<()> {
    loop {
        let now = Instant::now();
        app.selector.tick(now);
        terminal.draw(|f| draw(f, app, now))?;

        // Poll for events and submission results concurrently
        tokio::select! {
            () = tokio::time::sleep(Duration::from_millis(10)) => {
                while event::poll(Duration::from_millis(0))? {
                    match event::read()? {
                        Event::Key(key) => {
                            // Accept Press and Repeat, but not Release
                            if key.kind != KeyEventKind::Release
                                && handle_key(app, key.code, key.modifiers)
                            {
                                return Ok(());
                            }
                        }
                        Event::Mouse(mouse) => match mouse.kind {
                            MouseEventKind::ScrollUp => app.selector.scroll_by(-3),
                            MouseEventKind::ScrollDown => app.selector.scroll_by(3),
                            _ => {}
                        },
                        _ => {}
                    }
                }
            }

            Some((session, outcome)) = submissions.recv() => {
                app.apply_outcome(session, outcome);
            }
        }
    }
}

fn draw(f: &mut Frame, app: &mut App, now: Instant) {
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(theme::BG)), area);

    let [nav, body, status] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let shown = app.selector.frame(now);
    let settled = shown.view == app.selector.current();
    let scroll = app.selector.scroll();

    let home = shown.view == ViewState::Home;
    render_navbar(
        f,
        nav,
        shown.view,
        home.then(|| app.home.section_at(scroll)),
        home.then(|| app.selector.scroll_progress()),
    );

    let mut cursor = None;
    let limit = match shown.view {
        ViewState::Home => render_home(f, body, &mut app.home, scroll),
        ViewState::Service(kind) => render_service(f, body, kind, scroll),
        ViewState::Booking => {
            if let Some(booking) = app.booking.as_ref() {
                cursor = render_booking(f, body, booking);
            }
            0
        }
    };
    if settled {
        app.selector.set_scroll_limit(limit);
    }

    theme::fade(f.buffer_mut(), nav.union(body), shown.opacity);

    if let Some(notice) = app.home.notice.filter(|_| home) {
        render_notice(f, body, notice);
    }

    render_status_bar(f, status, shown.view);

    if let Some(position) = cursor.filter(|_| settled) {
        f.set_cursor_position(position);
    }
}

/// Handle one key press. Returns true when the app should exit.
fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        return true;
    }

    match app.selector.current() {
        ViewState::Home => handle_home_key(app, code),
        ViewState::Booking => {
            handle_booking_key(app, code, modifiers);
            false
        }
        ViewState::Service(_) => handle_service_key(app, code),
    }
}

fn handle_scroll_key(app: &mut App, code: KeyCode) -> bool {
    match code {
        KeyCode::Up | KeyCode::Char('k') => app.selector.scroll_by(-1),
        KeyCode::Down | KeyCode::Char('j') => app.selector.scroll_by(1),
        KeyCode::PageUp => app.selector.scroll_by(-PAGE_SCROLL),
        KeyCode::PageDown | KeyCode::Char(' ') => app.selector.scroll_by(PAGE_SCROLL),
        KeyCode::Home => app.selector.scroll_to(0),
        KeyCode::End => app.selector.scroll_to(u16::MAX),
        _ => return false,
    }
    true
}

fn service_for_key(code: KeyCode) -> Option<ServiceKind> {
    match code {
        KeyCode::Char(c @ '1'..='9') => SERVICE_CARDS
            .get(usize::from(c as u8 - b'1'))
            .map(|card| card.kind),
        _ => None,
    }
}

fn handle_home_key(app: &mut App, code: KeyCode) -> bool {
    // An open notice swallows keys until closed
    if app.home.notice.is_some() {
        if matches!(
            code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | 'p' | 't')
        ) {
            app.home.notice = None;
        }
        return false;
    }

    if handle_scroll_key(app, code) {
        return false;
    }
    if let Some(kind) = service_for_key(code) {
        app.open_service(kind);
        return false;
    }

    match code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('b') => app.open_booking(),
        KeyCode::Tab => {
            let next = app.home.section_at(app.selector.scroll()).next();
            app.selector.scroll_to(app.home.anchor(next));
        }
        KeyCode::BackTab => app.selector.scroll_to(app.home.anchor(Section::Home)),
        KeyCode::Char('f') => app.home.filter = app.home.filter.next(),
        KeyCode::Char('p') => app.home.notice = Some(Notice::Privacy),
        KeyCode::Char('t') => app.home.notice = Some(Notice::Terms),
        _ => {}
    }
    false
}

fn handle_service_key(app: &mut App, code: KeyCode) -> bool {
    if handle_scroll_key(app, code) {
        return false;
    }
    if let Some(kind) = service_for_key(code) {
        app.open_service(kind);
        return false;
    }

    match code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('b') => app.open_booking(),
        KeyCode::Esc | KeyCode::Backspace => app.go_home(),
        _ => {}
    }
    false
}

fn handle_booking_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if code == KeyCode::Esc {
        app.go_home();
        return;
    }
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('s') {
        app.submit_booking();
        return;
    }

    let Some(booking) = app.live_booking() else {
        return;
    };

    // The confirmation panel only offers the way back
    if booking.status().is_succeeded() {
        if code == KeyCode::Enter {
            app.go_home();
        }
        return;
    }

    let focus = booking.focus;
    match code {
        KeyCode::Tab | KeyCode::Down => booking.focus = booking.focus.next(),
        KeyCode::BackTab | KeyCode::Up => booking.focus = booking.focus.prev(),
        KeyCode::Left => booking.cycle_project_type(false),
        KeyCode::Right => booking.cycle_project_type(true),
        KeyCode::Backspace => booking.delete_char(),
        KeyCode::Enter => match focus {
            FormField::Submit => app.submit_booking(),
            FormField::Message => booking.insert_char('\n'),
            _ => booking.focus = booking.focus.next(),
        },
        KeyCode::Char(c) => booking.insert_char(c),
        _ => {}
    }
}
