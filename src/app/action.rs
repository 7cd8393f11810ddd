use crate::app::command::Command;
use crate::app::state::SearchTicket;
use crate::domain::models::SearchResponse;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,
    NavigateBack, // Return to the previous page

    // --- Search Input ---
    FocusSearch,
    BlurSearch,
    QueryInput(crossterm::event::KeyEvent), // Edit the query text

    // --- Keyboard Navigator ---
    SelectNext, // Down
    SelectPrev, // Up
    Submit,     // Enter
    Dismiss,    // Esc

    // --- Overlay Layer ---
    PointerDown(u16, u16), // Left click while the overlay listens
    Reposition,            // Scroll, resize or fallback ticker

    // --- Async Results ---
    DebounceElapsed(SearchTicket),
    SearchFinished(SearchTicket, Result<SearchResponse, String>),
}
