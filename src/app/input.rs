use crate::app::subscriptions::{Listener, Subscriptions};
use crate::app::{
    action::Action,
    state::{AppState, Focus},
    ui,
};
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Position;

/// Translates a terminal event into an action. Pointer and scroll events
/// only reach the overlay while its listeners are attached.
pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    subscriptions: &Subscriptions,
) -> Option<Action> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            if let Some(action) = app_state.keymap.get_action(key, app_state.focus) {
                return Some(action);
            }
            match app_state.focus {
                Focus::Search => Some(Action::QueryInput(key)),
                Focus::Page => None,
            }
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if subscriptions.is_listening(Listener::PointerDown) {
                    return Some(Action::PointerDown(mouse.column, mouse.row));
                }
                let input_area = ui::get_layout(app_state.viewport).search;
                if input_area.contains(Position::new(mouse.column, mouse.row)) {
                    Some(Action::FocusSearch)
                } else if app_state.focus == Focus::Search {
                    Some(Action::BlurSearch)
                } else {
                    None
                }
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => subscriptions
                .is_listening(Listener::Scroll)
                .then_some(Action::Reposition),
            _ => None,
        },
        // The viewport is tracked even while closed; the reducer only
        // re-anchors when the overlay is open.
        Event::Resize(width, height) => Some(Action::Resize(width, height)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers, MouseEvent};
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_keys_follow_focus() {
        let mut state = AppState::default();
        let subs = Subscriptions::new(Duration::from_millis(100));

        assert_eq!(
            map_event_to_action(key(KeyCode::Down), &state, &subs),
            Some(Action::SelectNext)
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('q')), &state, &subs),
            Some(Action::QueryInput(KeyEvent::new(
                KeyCode::Char('q'),
                KeyModifiers::NONE
            )))
        );

        state.focus = Focus::Page;
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('q')), &state, &subs),
            Some(Action::Quit)
        );
        assert_eq!(map_event_to_action(key(KeyCode::Char('z')), &state, &subs), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let state = AppState::default();
        let subs = Subscriptions::new(Duration::from_millis(100));
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event_to_action(release, &state, &subs), None);
    }

    #[tokio::test]
    async fn test_pointer_routed_only_while_listening() {
        let state = AppState::default();
        let mut subs = Subscriptions::new(Duration::from_millis(100));
        let (tx, _rx) = mpsc::channel(8);

        let click = mouse(MouseEventKind::Down(MouseButton::Left), 0, 20);
        assert_eq!(
            map_event_to_action(click.clone(), &state, &subs),
            Some(Action::BlurSearch)
        );
        assert_eq!(
            map_event_to_action(mouse(MouseEventKind::ScrollDown, 0, 20), &state, &subs),
            None
        );

        subs.sync(true, &tx);
        assert_eq!(
            map_event_to_action(click, &state, &subs),
            Some(Action::PointerDown(0, 20))
        );
        assert_eq!(
            map_event_to_action(mouse(MouseEventKind::ScrollUp, 0, 20), &state, &subs),
            Some(Action::Reposition)
        );
    }

    #[test]
    fn test_click_on_input_focuses() {
        let mut state = AppState::default();
        state.focus = Focus::Page;
        let subs = Subscriptions::new(Duration::from_millis(100));
        let input = ui::get_layout(state.viewport).search;
        let click = mouse(MouseEventKind::Down(MouseButton::Left), input.x + 2, input.y + 1);
        assert_eq!(
            map_event_to_action(click, &state, &subs),
            Some(Action::FocusSearch)
        );
    }

    #[test]
    fn test_resize_always_mapped() {
        let state = AppState::default();
        let subs = Subscriptions::new(Duration::from_millis(100));
        assert_eq!(
            map_event_to_action(Event::Resize(100, 30), &state, &subs),
            Some(Action::Resize(100, 30))
        );
    }
}
