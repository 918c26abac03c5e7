//! TUI application state.

use std::sync::Arc;
use std::time::Duration;

use inquiry_core::{InquiryForm, InquirySubmitter, InquiryTransport, Outcome, SubmissionStatus};
use tokio::sync::mpsc;
use uuid::Uuid;

use super::state::FormField;
use crate::core::ServiceKind;
use crate::core::ViewSelector;
use crate::core::ViewState;
use crate::core::content::{PortfolioFilter, Section};

/// Completed submissions, tagged with the booking session that started them.
pub type SubmissionTx = mpsc::UnboundedSender<(Uuid, Outcome)>;
pub type SubmissionRx = mpsc::UnboundedReceiver<(Uuid, Outcome)>;

/// Footer notice opened from the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Privacy,
    Terms,
}

/// Home page state that survives navigation.
#[derive(Debug, Default)]
pub struct HomeState {
    pub filter: PortfolioFilter,
    /// First line of each section, written by the renderer.
    pub anchors: [u16; Section::ALL.len()],
    pub notice: Option<Notice>,
}

impl HomeState {
    /// The section the reader is in at `scroll`.
    pub fn section_at(&self, scroll: u16) -> Section {
        Section::ALL
            .into_iter()
            .zip(self.anchors)
            .take_while(|(_, line)| *line <= scroll)
            .last()
            .map_or(Section::Home, |(section, _)| section)
    }

    pub fn anchor(&self, section: Section) -> u16 {
        Section::ALL
            .iter()
            .position(|s| *s == section)
            .map_or(0, |idx| self.anchors[idx])
    }
}

/// One mount of the booking page.
pub struct BookingState {
    /// Changes every time the page is entered.
    pub session: Uuid,
    pub form: InquiryForm,
    pub focus: FormField,
    pub submitter: InquirySubmitter,
}

impl BookingState {
    pub fn new(transport: Arc<dyn InquiryTransport>) -> Self {
        Self {
            session: Uuid::new_v4(),
            form: InquiryForm::default(),
            focus: FormField::default(),
            submitter: InquirySubmitter::new(transport),
        }
    }

    pub fn status(&self) -> &SubmissionStatus {
        self.submitter.status()
    }

    fn field_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.form.name),
            FormField::Email => Some(&mut self.form.email),
            FormField::Budget => Some(&mut self.form.budget),
            FormField::Message => Some(&mut self.form.message),
            FormField::ProjectType | FormField::Submit => None,
        }
    }

    /// Type into the focused field. Ignored once the request went through.
    pub fn insert_char(&mut self, c: char) {
        if self.status().is_succeeded() {
            return;
        }
        if let Some(value) = self.field_mut(self.focus) {
            value.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        if self.status().is_succeeded() {
            return;
        }
        if let Some(value) = self.field_mut(self.focus) {
            value.pop();
        }
    }

    pub fn cycle_project_type(&mut self, forward: bool) {
        if self.focus != FormField::ProjectType || self.status().is_succeeded() {
            return;
        }
        self.form.project_type = if forward {
            self.form.project_type.next()
        } else {
            self.form.project_type.prev()
        };
    }
}

/// Main application state.
pub struct App {
    pub selector: ViewSelector,
    pub home: HomeState,
    /// The booking page as last mounted. Kept after leaving so the fade-out can
    /// still draw it; only live while the selector is on Booking.
    pub booking: Option<BookingState>,
    transport: Arc<dyn InquiryTransport>,
    submission_tx: SubmissionTx,
}

impl App {
    pub fn new(transport: Arc<dyn InquiryTransport>, fade: Duration, tx: SubmissionTx) -> Self {
        Self {
            selector: ViewSelector::new(fade),
            home: HomeState::default(),
            booking: None,
            transport,
            submission_tx: tx,
        }
    }

    pub fn go_home(&mut self) {
        self.selector.navigate_home();
    }

    pub fn open_service(&mut self, kind: ServiceKind) {
        self.selector.navigate_to_service(kind);
    }

    /// Enter the booking page with a blank form.
    pub fn open_booking(&mut self) {
        self.selector.navigate_to_booking();
        let booking = BookingState::new(Arc::clone(&self.transport));
        tracing::debug!(session = %booking.session, "booking page mounted");
        self.booking = Some(booking);
    }

    /// The booking page, if it is the current view.
    pub fn live_booking(&mut self) -> Option<&mut BookingState> {
        if self.selector.current() == ViewState::Booking {
            self.booking.as_mut()
        } else {
            None
        }
    }

    /// Send the booking form. The request runs on the runtime and its
    /// outcome comes back through the submission channel.
    pub fn submit_booking(&mut self) {
        let tx = self.submission_tx.clone();
        let Some(booking) = self.live_booking() else {
            return;
        };
        let Some(pending) = booking.submitter.begin(&booking.form) else {
            return;
        };

        let session = booking.session;
        tracing::info!(
            %session,
            attempt = %pending.attempt(),
            project_type = pending.payload().project_type(),
            "submitting consultation request"
        );
        tokio::spawn(async move {
            let outcome = pending.send().await;
            let _ = tx.send((session, outcome));
        });
    }

    /// Apply a finished submission. Returns false when its page is gone.
    pub fn apply_outcome(&mut self, session: Uuid, outcome: Outcome) -> bool {
        let applied = self
            .live_booking()
            .filter(|booking| booking.session == session)
            .is_some_and(|booking| booking.submitter.complete(outcome));
        if !applied {
            tracing::debug!(%session, "discarding result for unmounted booking page");
        }
        applied
    }
}
