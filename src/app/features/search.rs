use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, SearchHits},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::QueryInput(key) => {
            let before = state.search.query();
            state.search.input.input(*key);
            state.search.input.flatten();
            if state.search.query() == before {
                return UpdateResult::Handled(None);
            }
            state.search.overlay.reset_selection();
            UpdateResult::Handled(query_changed(state))
        }
        Action::DebounceElapsed(ticket) => {
            if *ticket != state.search.ticket {
                return UpdateResult::Handled(None);
            }
            let query = state.search.trimmed_query();
            if query.chars().count() < state.min_query_len() {
                return UpdateResult::Handled(None);
            }
            state.search.in_flight = true;
            UpdateResult::Handled(Some(Command::RunSearch {
                ticket: *ticket,
                query,
                limit: state.config.search.result_limit,
            }))
        }
        Action::SearchFinished(ticket, outcome) => {
            if *ticket != state.search.ticket {
                tracing::debug!(%ticket, latest = %state.search.ticket, "discarding stale search response");
                return UpdateResult::Handled(None);
            }
            state.search.in_flight = false;
            match outcome {
                Ok(response) => {
                    let hits = SearchHits::from(response.clone());
                    tracing::debug!(
                        suggestions = hits.suggestions.len(),
                        results = hits.results.len(),
                        "search completed"
                    );
                    state.status_message = if hits.is_empty() {
                        Some(format!("No results for \"{}\"", state.search.trimmed_query()))
                    } else {
                        None
                    };
                    state.search.overlay.replace_hits(hits);
                }
                Err(err) => {
                    tracing::warn!(%ticket, error = %err, "search failed");
                    state.search.overlay.clear();
                }
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Reacts to an edited query: short queries clear everything synchronously,
/// anything else restarts the debounce timer.
pub fn query_changed(state: &mut AppState) -> Option<Command> {
    state.status_message = None;
    let query = state.search.trimmed_query();
    if query.chars().count() < state.min_query_len() {
        abandon_search(state);
        return Some(Command::CancelPendingSearch);
    }
    let ticket = state.search.issue_ticket();
    Some(Command::ScheduleSearch {
        ticket,
        delay: state.config.search.debounce(),
    })
}

/// Skips the debounce and searches for the current query right away.
pub fn force_search(state: &mut AppState) -> Option<Command> {
    let query = state.search.trimmed_query();
    if query.chars().count() < state.min_query_len() {
        return None;
    }
    let ticket = state.search.issue_ticket();
    state.search.in_flight = true;
    Some(Command::RunSearch {
        ticket,
        query,
        limit: state.config.search.result_limit,
    })
}

/// Clears the hits and invalidates anything still pending or in flight.
pub fn abandon_search(state: &mut AppState) {
    state.search.overlay.clear();
    state.search.issue_ticket();
    state.search.in_flight = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;
    use crate::app::state::SearchTicket;
    use crate::domain::models::{ResultKind, SearchResponse, SearchResultItem};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::time::Duration;

    fn type_str(state: &mut AppState, text: &str) -> Option<Command> {
        let mut last = None;
        for c in text.chars() {
            last = reducer::update(
                state,
                Action::QueryInput(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
            );
        }
        last
    }

    fn response(results: usize) -> SearchResponse {
        SearchResponse {
            results: (0..results)
                .map(|i| SearchResultItem::new(ResultKind::Project, i as i64, format!("p{i}")))
                .collect(),
            suggestions: Vec::new(),
        }
    }

    #[test]
    fn test_short_query_cancels_and_closes() {
        let mut state = AppState::default();
        let cmd = type_str(&mut state, "a");
        assert_eq!(cmd, Some(Command::CancelPendingSearch));
        assert!(!state.search.overlay.is_open());

        let cmd = type_str(&mut state, " ");
        assert_eq!(cmd, Some(Command::CancelPendingSearch), "whitespace does not count");
    }

    #[test]
    fn test_long_query_schedules_debounce() {
        let mut state = AppState::default();
        type_str(&mut state, "a");
        let cmd = type_str(&mut state, "b");
        assert_eq!(
            cmd,
            Some(Command::ScheduleSearch {
                ticket: state.search.ticket,
                delay: Duration::from_millis(300),
            })
        );
    }

    #[test]
    fn test_debounce_runs_trimmed_query() {
        let mut state = AppState::default();
        type_str(&mut state, "  abc ");
        let ticket = state.search.ticket;

        let cmd = reducer::update(&mut state, Action::DebounceElapsed(ticket));
        assert_eq!(
            cmd,
            Some(Command::RunSearch {
                ticket,
                query: "abc".to_string(),
                limit: 10,
            })
        );
        assert!(state.search.in_flight);
    }

    #[test]
    fn test_superseded_timer_is_ignored() {
        let mut state = AppState::default();
        type_str(&mut state, "ab");
        let old = state.search.ticket;
        type_str(&mut state, "c");

        assert_eq!(reducer::update(&mut state, Action::DebounceElapsed(old)), None);
        assert!(!state.search.in_flight);
    }

    #[test]
    fn test_stale_response_does_not_overwrite() {
        let mut state = AppState::default();
        type_str(&mut state, "ab");
        let stale = state.search.ticket;
        type_str(&mut state, "c");
        let fresh = state.search.ticket;

        reducer::update(&mut state, Action::SearchFinished(fresh, Ok(response(1))));
        reducer::update(&mut state, Action::SearchFinished(stale, Ok(response(3))));

        assert_eq!(state.search.overlay.hits().results.len(), 1);
        assert!(state.search.overlay.is_open());
    }

    #[test]
    fn test_results_open_and_empty_keeps_closed() {
        let mut state = AppState::default();
        type_str(&mut state, "zz");
        let ticket = state.search.ticket;
        reducer::update(&mut state, Action::SearchFinished(ticket, Ok(response(0))));
        assert!(!state.search.overlay.is_open());
        assert_eq!(state.status_message.as_deref(), Some("No results for \"zz\""));

        type_str(&mut state, "z");
        let ticket = state.search.ticket;
        reducer::update(&mut state, Action::SearchFinished(ticket, Ok(response(2))));
        assert!(state.search.overlay.is_open());
        assert_eq!(state.search.overlay.selected(), None);
        assert_eq!(state.status_message, None);
    }

    #[test]
    fn test_failure_clears_and_closes() {
        let mut state = AppState::default();
        type_str(&mut state, "ab");
        let ticket = state.search.ticket;
        reducer::update(&mut state, Action::SearchFinished(ticket, Ok(response(2))));

        type_str(&mut state, "c");
        let ticket = state.search.ticket;
        state.search.in_flight = true;
        reducer::update(
            &mut state,
            Action::SearchFinished(ticket, Err("connection refused".to_string())),
        );
        assert!(!state.search.overlay.is_open());
        assert!(state.search.overlay.hits().is_empty());
        assert!(!state.search.in_flight);
    }

    #[test]
    fn test_shrinking_query_discards_in_flight_response() {
        let mut state = AppState::default();
        type_str(&mut state, "ab");
        let ticket = state.search.ticket;
        reducer::update(&mut state, Action::DebounceElapsed(ticket));

        reducer::update(
            &mut state,
            Action::QueryInput(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)),
        );
        assert!(!state.search.in_flight);
        reducer::update(&mut state, Action::SearchFinished(ticket, Ok(response(4))));
        assert!(state.search.overlay.hits().is_empty());
        assert!(!state.search.overlay.is_open());
    }

    #[test]
    fn test_editing_resets_selection() {
        let mut state = AppState::default();
        type_str(&mut state, "ab");
        let ticket = state.search.ticket;
        reducer::update(&mut state, Action::SearchFinished(ticket, Ok(response(3))));
        reducer::update(&mut state, Action::SelectNext);
        reducer::update(&mut state, Action::SelectNext);
        assert_eq!(state.search.overlay.selected(), Some(1));

        type_str(&mut state, "c");
        assert_eq!(state.search.overlay.selected(), None);
    }

    #[test]
    fn test_ticket_display() {
        assert_eq!(SearchTicket(7).to_string(), "#7");
    }
}
