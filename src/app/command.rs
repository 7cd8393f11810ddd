use crate::app::state::SearchTicket;
use std::time::Duration;

/// Side effects requested by the reducer and carried out by the runtime loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Restart the debounce timer; replaces any pending one.
    ScheduleSearch {
        ticket: SearchTicket,
        delay: Duration,
    },
    CancelPendingSearch,
    RunSearch {
        ticket: SearchTicket,
        query: String,
        limit: usize,
    },
}
