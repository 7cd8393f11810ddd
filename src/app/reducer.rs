use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

/// Applies one action. Every state transition of the search widget goes
/// through here; side effects come back as a `Command`.
pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    let was_open = state.search.overlay.is_open();
    let command = dispatch(state, &action);
    if !was_open && state.search.overlay.is_open() {
        features::overlay::reposition(state);
    }
    command
}

fn dispatch(state: &mut AppState, action: &Action) -> Option<Command> {
    let handlers: [fn(&mut AppState, &Action) -> UpdateResult; 3] = [
        features::search::update,
        features::navigation::update,
        features::overlay::update,
    ];
    for handler in handlers {
        if let UpdateResult::Handled(command) = handler(state, action) {
            return command;
        }
    }

    match action {
        Action::Quit => {
            state.should_quit = true;
        }
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
        }
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_and_tick() {
        let mut state = AppState::default();
        update(&mut state, Action::Tick);
        update(&mut state, Action::Tick);
        assert_eq!(state.frame_count, 2);

        update(&mut state, Action::Quit);
        assert!(state.should_quit);
    }
}
