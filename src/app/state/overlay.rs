use crate::domain::models::{SearchResponse, SearchResultItem, SearchSuggestion};
use ratatui::layout::Rect;

/// The two lists returned by one search, navigated as a single sequence
/// `suggestions ++ results`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchHits {
    pub suggestions: Vec<SearchSuggestion>,
    pub results: Vec<SearchResultItem>,
}

impl From<SearchResponse> for SearchHits {
    fn from(response: SearchResponse) -> Self {
        Self {
            suggestions: response.suggestions,
            results: response.results,
        }
    }
}

/// An item chosen from the overlay, detached from the hit lists.
#[derive(Debug, Clone, PartialEq)]
pub enum Picked {
    Suggestion(SearchSuggestion),
    Result(SearchResultItem),
}

impl SearchHits {
    pub fn len(&self) -> usize {
        self.suggestions.len() + self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<Picked> {
        if index < self.suggestions.len() {
            self.suggestions.get(index).cloned().map(Picked::Suggestion)
        } else {
            self.results
                .get(index - self.suggestions.len())
                .cloned()
                .map(Picked::Result)
        }
    }

    /// First suggestion, falling back to the first result.
    pub fn first(&self) -> Option<Picked> {
        self.get(0)
    }
}

/// Visibility and cursor of the result panel.
///
/// `selected` only exists while open and is always `< hits.len()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Closed {
        hits: SearchHits,
    },
    Open {
        hits: SearchHits,
        selected: Option<usize>,
    },
}

impl Default for Overlay {
    fn default() -> Self {
        Overlay::Closed {
            hits: SearchHits::default(),
        }
    }
}

impl Overlay {
    pub fn hits(&self) -> &SearchHits {
        match self {
            Overlay::Closed { hits } | Overlay::Open { hits, .. } => hits,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Overlay::Open { .. })
    }

    pub fn selected(&self) -> Option<usize> {
        match self {
            Overlay::Open { selected, .. } => *selected,
            Overlay::Closed { .. } => None,
        }
    }

    /// Opens only when there is something to show.
    pub fn open(&mut self) {
        if let Overlay::Closed { hits } = self {
            if !hits.is_empty() {
                let hits = std::mem::take(hits);
                *self = Overlay::Open {
                    hits,
                    selected: None,
                };
            }
        }
    }

    /// Hides the panel but keeps the hits so it can be reopened.
    pub fn close(&mut self) {
        if let Overlay::Open { hits, .. } = self {
            let hits = std::mem::take(hits);
            *self = Overlay::Closed { hits };
        }
    }

    pub fn clear(&mut self) {
        *self = Overlay::default();
    }

    pub fn replace_hits(&mut self, hits: SearchHits) {
        *self = if hits.is_empty() {
            Overlay::Closed { hits }
        } else {
            Overlay::Open {
                hits,
                selected: None,
            }
        };
    }

    pub fn reset_selection(&mut self) {
        if let Overlay::Open { selected, .. } = self {
            *selected = None;
        }
    }

    /// Opens the panel and moves down, wrapping from the last item to the first.
    pub fn select_next(&mut self) {
        self.open();
        if let Overlay::Open { hits, selected } = self {
            let len = hits.len();
            *selected = match *selected {
                Some(i) if i + 1 < len => Some(i + 1),
                _ => Some(0),
            };
        }
    }

    /// Moves up; stepping above the first item clears the selection.
    pub fn select_prev(&mut self) {
        if let Overlay::Open { selected, .. } = self {
            *selected = match *selected {
                Some(i) if i > 0 => Some(i - 1),
                _ => None,
            };
        }
    }

    /// What Enter acts on: the highlighted item, else the first one.
    pub fn submission(&self) -> Option<Picked> {
        let hits = self.hits();
        match self.selected() {
            Some(i) if i < hits.len() => hits.get(i),
            _ => hits.first(),
        }
    }
}

/// Where the panel hangs: `center_x` is the input's horizontal midpoint,
/// the panel is centred on it at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchor {
    pub top: u16,
    pub center_x: u16,
}

impl Anchor {
    pub fn below(input: Rect, gap: u16) -> Self {
        Self {
            top: input.bottom().saturating_add(gap),
            center_x: input.x.saturating_add(input.width / 2),
        }
    }
}
