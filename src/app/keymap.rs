use super::action::Action;
use super::state::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Key bindings per focus target. Keys not bound while the search input has
/// focus are treated as text.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub search: HashMap<KeyEvent, Action>,
    pub page: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut search = HashMap::new();
        let mut page = HashMap::new();

        // --- Search Input ---
        search.insert(key(KeyCode::Down), Action::SelectNext);
        search.insert(key(KeyCode::Up), Action::SelectPrev);
        search.insert(ctrl('n'), Action::SelectNext);
        search.insert(ctrl('p'), Action::SelectPrev);
        search.insert(key(KeyCode::Enter), Action::Submit);
        search.insert(key(KeyCode::Esc), Action::Dismiss);
        search.insert(key(KeyCode::Tab), Action::BlurSearch);
        search.insert(ctrl('c'), Action::Quit);

        // --- Page ---
        page.insert(key('q'), Action::Quit);
        page.insert(key(KeyCode::Esc), Action::Quit);
        page.insert(ctrl('c'), Action::Quit);
        page.insert(key('/'), Action::FocusSearch);
        page.insert(key('i'), Action::FocusSearch);
        page.insert(key(KeyCode::Tab), Action::FocusSearch);
        page.insert(key('b'), Action::NavigateBack);
        page.insert(key(KeyCode::Backspace), Action::NavigateBack);

        Self { search, page }
    }
}

impl KeyMap {
    pub fn get_action(&self, event: KeyEvent, focus: Focus) -> Option<Action> {
        let bindings = match focus {
            Focus::Search => &self.search,
            Focus::Page => &self.page,
        };
        // Terminals disagree on whether SHIFT accompanies shifted characters.
        let normalized = KeyEvent::new(event.code, event.modifiers - KeyModifiers::SHIFT);
        bindings
            .get(&KeyEvent::new(event.code, event.modifiers))
            .or_else(|| bindings.get(&normalized))
            .cloned()
    }
}

trait IntoKeyCode {
    fn into_key_code(self) -> KeyCode;
}

impl IntoKeyCode for KeyCode {
    fn into_key_code(self) -> KeyCode {
        self
    }
}

impl IntoKeyCode for char {
    fn into_key_code(self) -> KeyCode {
        KeyCode::Char(self)
    }
}

fn key(code: impl IntoKeyCode) -> KeyEvent {
    KeyEvent::new(code.into_key_code(), KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_keys_unbound_in_search() {
        let keymap = KeyMap::default();
        assert_eq!(keymap.get_action(key('q'), Focus::Search), None);
        assert_eq!(keymap.get_action(key('q'), Focus::Page), Some(Action::Quit));
    }

    #[test]
    fn test_navigation_keys() {
        let keymap = KeyMap::default();
        assert_eq!(keymap.get_action(key(KeyCode::Down), Focus::Search), Some(Action::SelectNext));
        assert_eq!(keymap.get_action(key(KeyCode::Esc), Focus::Search), Some(Action::Dismiss));
        assert_eq!(keymap.get_action(key(KeyCode::Esc), Focus::Page), Some(Action::Quit));
        assert_eq!(
            keymap.get_action(KeyEvent::new(KeyCode::Char('/'), KeyModifiers::SHIFT), Focus::Page),
            Some(Action::FocusSearch)
        );
    }
}
