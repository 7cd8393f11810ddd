use crate::app::{
    action::{Action, UpdateResult},
    state::{Anchor, AppState},
    ui,
};
use ratatui::layout::Rect;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, *width, *height);
            if state.search.overlay.is_open() {
                reposition(state);
            }
            UpdateResult::Handled(None)
        }
        Action::Reposition => {
            if state.search.overlay.is_open() {
                reposition(state);
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Re-anchors the panel under the search input's current rectangle.
pub fn reposition(state: &mut AppState) {
    let input = ui::get_layout(state.viewport).search;
    state.search.anchor = Anchor::below(input, state.config.overlay.gap);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;
    use crate::app::state::SearchHits;
    use crate::domain::models::{ResultKind, SearchResultItem};

    fn open_state() -> AppState<'static> {
        let mut state = AppState::default();
        state.search.overlay.replace_hits(SearchHits {
            suggestions: Vec::new(),
            results: vec![SearchResultItem::new(ResultKind::Team, 1, "Core")],
        });
        state
    }

    #[test]
    fn test_resize_moves_anchor_while_open() {
        let mut state = open_state();
        reducer::update(&mut state, Action::Resize(120, 40));
        let input = ui::get_layout(state.viewport).search;
        assert_eq!(state.search.anchor.top, input.bottom() + 1);
        assert_eq!(state.search.anchor.center_x, input.x + input.width / 2);
    }

    #[test]
    fn test_closed_overlay_ignores_reposition() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::Reposition);
        assert_eq!(state.search.anchor, Anchor::default());

        reducer::update(&mut state, Action::Resize(100, 30));
        assert_eq!(state.viewport, Rect::new(0, 0, 100, 30));
        assert_eq!(state.search.anchor, Anchor::default());
    }

    #[test]
    fn test_opening_anchors_immediately() {
        let mut state = AppState::default();
        state.search.input.insert_str("core");
        let ticket = state.search.issue_ticket();
        reducer::update(
            &mut state,
            Action::SearchFinished(
                ticket,
                Ok(crate::domain::models::SearchResponse {
                    results: vec![SearchResultItem::new(ResultKind::Team, 1, "Core")],
                    suggestions: Vec::new(),
                }),
            ),
        );
        assert!(state.search.overlay.is_open());
        assert_ne!(state.search.anchor, Anchor::default());
    }
}
