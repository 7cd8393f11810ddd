use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    features::{search, selection},
    state::{AppState, Focus},
    ui,
};
use crate::components::search_panel;
use ratatui::layout::Position;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SelectNext => {
            state.search.overlay.select_next();
            UpdateResult::Handled(None)
        }
        Action::SelectPrev => {
            state.search.overlay.select_prev();
            UpdateResult::Handled(None)
        }
        Action::Submit => UpdateResult::Handled(submit(state)),
        Action::Dismiss => {
            state.search.overlay.close();
            state.focus = Focus::Page;
            UpdateResult::Handled(None)
        }
        Action::FocusSearch => {
            focus_search(state);
            UpdateResult::Handled(None)
        }
        Action::BlurSearch => {
            state.focus = Focus::Page;
            UpdateResult::Handled(None)
        }
        Action::PointerDown(column, row) => {
            UpdateResult::Handled(pointer_down(state, Position::new(*column, *row)))
        }
        Action::NavigateBack => {
            if let Some(previous) = state.history.pop() {
                state.location = previous;
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Enter: the highlighted item, else the first suggestion, else the first
/// result; with nothing listed, search immediately.
fn submit(state: &mut AppState) -> Option<Command> {
    if let Some(picked) = state.search.overlay.submission() {
        return selection::dispatch(state, picked);
    }
    search::force_search(state)
}

fn focus_search(state: &mut AppState) {
    state.focus = Focus::Search;
    state.search.overlay.open();
}

/// Only reached while the overlay's pointer listener is attached.
fn pointer_down(state: &mut AppState, position: Position) -> Option<Command> {
    if !state.search.overlay.is_open() {
        return None;
    }

    let input_area = ui::get_layout(state.viewport).search;
    if input_area.contains(position) {
        state.focus = Focus::Search;
        return None;
    }

    let panel = search_panel::panel_rect(
        state.search.anchor,
        state.search.overlay.hits(),
        &state.config.overlay,
        state.viewport,
    );
    if panel.contains(position) {
        let clicked = search_panel::item_at(
            panel,
            state.search.overlay.hits(),
            state.search.overlay.selected(),
            position,
        );
        return clicked
            .and_then(|index| state.search.overlay.hits().get(index))
            .and_then(|picked| selection::dispatch(state, picked));
    }

    state.search.overlay.close();
    state.focus = Focus::Page;
    None
}
