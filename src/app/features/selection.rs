use crate::app::{
    command::Command,
    features::search,
    state::{AppState, Picked},
};
use crate::domain::models::{
    ResultKind, Route, SearchResultItem, SearchSuggestion, SuggestionKind,
};

pub fn route_for_result(item: &SearchResultItem) -> Option<Route> {
    match &item.kind {
        ResultKind::Project => Some(Route::Projects),
        ResultKind::Task => Some(Route::Tasks { search: None }),
        ResultKind::SprintTask => Some(
            match item.sprint_id.as_ref().filter(|id| !id.is_unset()) {
                Some(sprint_id) => Route::Sprint(sprint_id.clone()),
                None => Route::Sprints,
            },
        ),
        ResultKind::Sprint => Some(Route::Sprint(item.id.clone())),
        ResultKind::Employee => Some(Route::Employees),
        ResultKind::Team => Some(Route::Teams),
        ResultKind::Other(_) => None,
    }
}

/// `current_query` backs a `search` suggestion that carries no query of its own.
pub fn route_for_suggestion(suggestion: &SearchSuggestion, current_query: &str) -> Option<Route> {
    match suggestion.kind {
        SuggestionKind::Result => suggestion.data.as_ref().and_then(route_for_result),
        SuggestionKind::Action => suggestion
            .route
            .clone()
            .filter(|route| !route.is_empty())
            .map(Route::Custom),
        SuggestionKind::Search => {
            let query = suggestion
                .query
                .clone()
                .filter(|q| !q.is_empty())
                .unwrap_or_else(|| current_query.to_string());
            (!query.is_empty()).then_some(Route::Tasks {
                search: Some(query),
            })
        }
        SuggestionKind::Other(_) => None,
    }
}

/// Navigates for the picked item, then resets the widget whatever the outcome.
pub fn dispatch(state: &mut AppState, picked: Picked) -> Option<Command> {
    let route = match &picked {
        Picked::Suggestion(suggestion) => {
            route_for_suggestion(suggestion, &state.search.query())
        }
        Picked::Result(item) => route_for_result(item),
    };

    match route {
        Some(route) => {
            tracing::info!(%route, "navigating from search");
            state.navigate(route);
        }
        None => tracing::debug!(?picked, "selection has no navigation target"),
    }

    state.search.clear_query();
    state.status_message = None;
    search::abandon_search(state);
    Some(Command::CancelPendingSearch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::SearchHits;
    use crate::domain::models::ItemId;

    fn result(kind: ResultKind, id: i64) -> SearchResultItem {
        SearchResultItem::new(kind, id, "item")
    }

    #[test]
    fn test_result_routes() {
        let cases = [
            (ResultKind::Project, "/projects"),
            (ResultKind::Task, "/tasks"),
            (ResultKind::SprintTask, "/sprints"),
            (ResultKind::Sprint, "/sprints/42"),
            (ResultKind::Employee, "/employee"),
            (ResultKind::Team, "/teams"),
        ];
        for (kind, path) in cases {
            let route = route_for_result(&result(kind.clone(), 42)).unwrap();
            assert_eq!(route.to_string(), path, "{kind:?}");
        }

        let mut sprint_task = result(ResultKind::SprintTask, 9);
        sprint_task.sprint_id = Some(ItemId::Int(5));
        assert_eq!(route_for_result(&sprint_task).unwrap().to_string(), "/sprints/5");

        sprint_task.sprint_id = Some(ItemId::Int(0));
        assert_eq!(route_for_result(&sprint_task), Some(Route::Sprints));
        sprint_task.sprint_id = Some(ItemId::Text(String::new()));
        assert_eq!(route_for_result(&sprint_task), Some(Route::Sprints));

        assert_eq!(route_for_result(&result(ResultKind::Other("invoice".into()), 1)), None);
    }

    #[test]
    fn test_suggestion_routes() {
        let mut embedded = SearchSuggestion::new(SuggestionKind::Result, "Open team");
        embedded.data = Some(result(ResultKind::Team, 3));
        assert_eq!(route_for_suggestion(&embedded, "x"), Some(Route::Teams));

        let mut action = SearchSuggestion::new(SuggestionKind::Action, "New invoice");
        action.route = Some("/invoices".to_string());
        assert_eq!(
            route_for_suggestion(&action, "x").unwrap().to_string(),
            "/invoices"
        );

        let mut search = SearchSuggestion::new(SuggestionKind::Search, "Tasks about login");
        search.query = Some("login".to_string());
        assert_eq!(
            route_for_suggestion(&search, "log").unwrap().to_string(),
            "/tasks?search=login"
        );

        let bare = SearchSuggestion::new(SuggestionKind::Search, "Search tasks");
        assert_eq!(
            route_for_suggestion(&bare, "log").unwrap().to_string(),
            "/tasks?search=log"
        );
        assert_eq!(route_for_suggestion(&bare, ""), None);

        let no_route = SearchSuggestion::new(SuggestionKind::Action, "Nothing");
        assert_eq!(route_for_suggestion(&no_route, "x"), None);

        let mut empty_route = SearchSuggestion::new(SuggestionKind::Action, "Nothing");
        empty_route.route = Some(String::new());
        assert_eq!(route_for_suggestion(&empty_route, "x"), None);
    }

    #[test]
    fn test_dispatch_sprint_resets_widget() {
        let mut state = AppState::default();
        state.search.input.insert_str("sprint");
        state.search.overlay.replace_hits(SearchHits {
            suggestions: Vec::new(),
            results: vec![result(ResultKind::Sprint, 42)],
        });
        state.search.overlay.select_next();
        let ticket = state.search.ticket;

        let cmd = dispatch(&mut state, Picked::Result(result(ResultKind::Sprint, 42)));

        assert_eq!(cmd, Some(Command::CancelPendingSearch));
        assert_eq!(state.location.to_string(), "/sprints/42");
        assert_eq!(state.search.query(), "");
        assert!(!state.search.overlay.is_open());
        assert_eq!(state.search.overlay.selected(), None);
        assert!(state.search.overlay.hits().is_empty());
        assert!(state.search.ticket > ticket);
    }

    #[test]
    fn test_dispatch_unknown_type_still_resets() {
        let mut state = AppState::default();
        state.search.input.insert_str("inv");
        state.search.overlay.replace_hits(SearchHits {
            suggestions: Vec::new(),
            results: vec![result(ResultKind::Other("invoice".into()), 1)],
        });

        dispatch(
            &mut state,
            Picked::Result(result(ResultKind::Other("invoice".into()), 1)),
        );
        assert_eq!(state.location, Route::Dashboard);
        assert!(state.history.is_empty());
        assert_eq!(state.search.query(), "");
        assert!(!state.search.overlay.is_open());
    }
}
