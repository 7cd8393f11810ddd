use super::input::AppTextArea;
use super::overlay::{Anchor, Overlay};
use std::fmt;

/// Sequence number of the most recently scheduled search. Timer expiries and
/// responses carrying an older ticket are stale and get dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SearchTicket(pub u64);

impl SearchTicket {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for SearchTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchState<'a> {
    pub input: AppTextArea<'a>,
    pub overlay: Overlay,
    pub ticket: SearchTicket,
    pub in_flight: bool,
    pub anchor: Anchor,
}

impl Default for SearchState<'_> {
    fn default() -> Self {
        Self {
            input: AppTextArea::search_box(),
            overlay: Overlay::default(),
            ticket: SearchTicket::default(),
            in_flight: false,
            anchor: Anchor::default(),
        }
    }
}

impl SearchState<'_> {
    pub fn query(&self) -> String {
        self.input.text()
    }

    pub fn trimmed_query(&self) -> String {
        self.query().trim().to_string()
    }

    pub fn clear_query(&mut self) {
        self.input = AppTextArea::search_box();
    }

    /// Supersedes whatever timer or request is outstanding.
    pub fn issue_ticket(&mut self) -> SearchTicket {
        self.ticket = self.ticket.next();
        self.ticket
    }
}
