//! Booking form focus state.

/// The booking form control that receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    ProjectType,
    Budget,
    Message,
    /// The "Book consultation" button.
    Submit,
}

impl FormField {
    /// Focus order, top to bottom.
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Email,
        Self::ProjectType,
        Self::Budget,
        Self::Message,
        Self::Submit,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::ProjectType => "Project Type",
            Self::Budget => "Estimated Budget",
            Self::Message => "Project Details",
            Self::Submit => "Book consultation",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "you@example.com",
            Self::Budget => "e.g. ₹5,00,000",
            Self::Message => "Tell us about your space, timeline and vision...",
            Self::ProjectType | Self::Submit => "",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_wraps_both_ways() {
        assert_eq!(FormField::Submit.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Submit);
        assert_eq!(FormField::Email.next(), FormField::ProjectType);
    }
}
