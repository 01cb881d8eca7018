//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    NextField,
    PrevField,
    Input(char),
    Backspace,
    ClearField,
    Toggle,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Home,
    End,
    None,
}

/// Map a key event to an action.
///
/// Printable characters always edit the focused field, so quitting uses
/// Esc or Ctrl-C rather than a letter.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c' | 'q') if ctrl => KeyAction::Quit,
        KeyCode::Char('u') if ctrl => KeyAction::ClearField,
        KeyCode::Char(_) if ctrl => KeyAction::None,
        KeyCode::Char(c) => KeyAction::Input(c),
        KeyCode::Tab | KeyCode::Enter => KeyAction::NextField,
        KeyCode::BackTab => KeyAction::PrevField,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Left | KeyCode::Right => KeyAction::Toggle,
        KeyCode::Up => KeyAction::ScrollUp,
        KeyCode::Down => KeyAction::ScrollDown,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        KeyCode::Home => KeyAction::Home,
        KeyCode::End => KeyAction::End,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_keys() {
        let event = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Quit);

        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), KeyAction::Quit);
    }

    #[test]
    fn letters_are_input() {
        let event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Input('q'));

        let event = KeyEvent::new(KeyCode::Char(','), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Input(','));
    }

    #[test]
    fn field_navigation() {
        let event = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::NextField);

        let event = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(map_key(event), KeyAction::PrevField);
    }

    #[test]
    fn editing_keys() {
        let event = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Backspace);

        let event = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), KeyAction::ClearField);

        let event = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Toggle);
    }

    #[test]
    fn scroll_keys() {
        let event = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::ScrollUp);

        let event = KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::PageDown);

        let event = KeyEvent::new(KeyCode::Home, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Home);
    }

    #[test]
    fn unknown_key() {
        let event = KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::None);

        let event = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), KeyAction::None);
    }
}
