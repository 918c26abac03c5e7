//! Which page of the brochure is on screen, and how it got there.
//!
//! The selector is a plain last-write-wins switch over [`ViewState`]. Every
//! navigation resets the scroll offset before the next draw and starts a
//! fade: the view leaving the screen fades out over the first half of the
//! fade duration, the new one fades in over the second half.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Fade duration when none is configured.
pub const DEFAULT_FADE: Duration = Duration::from_millis(500);

/// One of the studio's dedicated service pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Kitchens,
    MediaPanels,
    InteriorDecor,
}

impl ServiceKind {
    pub const ALL: [Self; 3] = [Self::Kitchens, Self::MediaPanels, Self::InteriorDecor];

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Kitchens => "kitchens",
            Self::MediaPanels => "media-panels",
            Self::InteriorDecor => "interior-decor",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ServiceKind {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.slug() == s)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

/// A top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewState {
    #[default]
    Home,
    Booking,
    Service(ServiceKind),
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("home"),
            Self::Booking => f.write_str("booking"),
            Self::Service(kind) => write!(f, "service-{kind}"),
        }
    }
}

impl FromStr for ViewState {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "booking" => Ok(Self::Booking),
            _ => s
                .strip_prefix("service-")
                .ok_or_else(|| UnknownView(s.to_string()))?
                .parse()
                .map(Self::Service)
                .map_err(|_| UnknownView(s.to_string())),
        }
    }
}

/// A view key that names no page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view: {0}")]
pub struct UnknownView(pub String);

/// What to draw right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub view: ViewState,
    /// 0.0 (invisible) to 1.0 (fully drawn).
    pub opacity: f32,
}

/// An in-flight fade between two views.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    from: ViewState,
    to: ViewState,
    started: Instant,
    duration: Duration,
}

impl Transition {
    #[must_use]
    pub const fn from(&self) -> ViewState {
        self.from
    }

    #[must_use]
    pub const fn to(&self) -> ViewState {
        self.to
    }

    /// Fraction of the fade elapsed, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    #[must_use]
    pub fn frame(&self, now: Instant) -> Frame {
        let p = self.progress(now);
        if p < 0.5 {
            Frame {
                view: self.from,
                opacity: 2.0f32.mul_add(-p, 1.0),
            }
        } else {
            Frame {
                view: self.to,
                opacity: 2.0f32.mul_add(p, -1.0),
            }
        }
    }
}

/// Holds the current view, its scroll offset and any fade in flight.
#[derive(Debug, Clone)]
pub struct ViewSelector {
    current: ViewState,
    scroll: u16,
    scroll_limit: u16,
    transition: Option<Transition>,
    fade: Duration,
}

impl Default for ViewSelector {
    fn default() -> Self {
        Self::new(DEFAULT_FADE)
    }
}

impl ViewSelector {
    /// Start on Home.
    #[must_use]
    pub const fn new(fade: Duration) -> Self {
        Self {
            current: ViewState::Home,
            scroll: 0,
            scroll_limit: 0,
            transition: None,
            fade,
        }
    }

    #[must_use]
    pub const fn current(&self) -> ViewState {
        self.current
    }

    #[must_use]
    pub const fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub fn navigate_home(&mut self) {
        self.navigate(ViewState::Home);
    }

    pub fn navigate_to_booking(&mut self) {
        self.navigate(ViewState::Booking);
    }

    pub fn navigate_to_service(&mut self, kind: ServiceKind) {
        self.navigate(ViewState::Service(kind));
    }

    pub fn navigate(&mut self, view: ViewState) {
        self.navigate_at(view, Instant::now());
    }

    /// Switch to `view` as of `now`.
    ///
    /// Supersedes any fade in flight: the new fade starts from whatever is on
    /// screen at `now`, at the opacity it currently has.
    pub fn navigate_at(&mut self, view: ViewState, now: Instant) {
        self.scroll = 0;

        let live = self.transition.filter(|t| !t.is_finished(now));
        if live.is_none() && view == self.current {
            return;
        }

        let on_screen = live.map_or(
            Frame {
                view: self.current,
                opacity: 1.0,
            },
            |t| t.frame(now),
        );

        // Backdate the start so the outgoing view keeps its opacity.
        let lead = self.fade.mul_f32((1.0 - on_screen.opacity) / 2.0);
        let started = now.checked_sub(lead).unwrap_or(now);

        tracing::debug!(from = %on_screen.view, to = %view, "navigate");

        self.current = view;
        self.transition = Some(Transition {
            from: on_screen.view,
            to: view,
            started,
            duration: self.fade,
        });
    }

    /// What to draw at `now`.
    #[must_use]
    pub fn frame(&self, now: Instant) -> Frame {
        self.transition.map_or(
            Frame {
                view: self.current,
                opacity: 1.0,
            },
            |t| t.frame(now),
        )
    }

    /// Drop a finished fade. Returns true while one is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.transition.is_some_and(|t| t.is_finished(now)) {
            self.transition = None;
        }
        self.transition.is_some()
    }

    #[must_use]
    pub const fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Set how far the current view can scroll; clamps the offset.
    pub fn set_scroll_limit(&mut self, limit: u16) {
        self.scroll_limit = limit;
        self.scroll = self.scroll.min(limit);
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = i32::from(self.scroll).saturating_add(delta);
        self.scroll = target.clamp(0, i32::from(self.scroll_limit)) as u16;
    }

    pub fn scroll_to(&mut self, offset: u16) {
        self.scroll = offset.min(self.scroll_limit);
    }

    /// How far down the current view the reader is, `0.0..=1.0`.
    #[must_use]
    pub fn scroll_progress(&self) -> f64 {
        if self.scroll_limit == 0 {
            return 0.0;
        }
        f64::from(self.scroll) / f64::from(self.scroll_limit)
    }
}
