//! Key mapping for drawing input
//!
//! Converts crossterm key events to the actions a session understands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::{Direction, KeyAction};

/// Key mapper for converting key events to actions
pub struct KeyMapper;

impl KeyMapper {
    /// Map a crossterm KeyEvent to an action.
    ///
    /// Returns `None` for release and repeat events, which the input loop
    /// skips entirely.
    pub fn map(event: &KeyEvent) -> Option<KeyAction> {
        if event.kind != KeyEventKind::Press {
            return None;
        }

        let action = match event.code {
            // Arrow keys
            KeyCode::Left => KeyAction::Move(Direction::Left),
            KeyCode::Right => KeyAction::Move(Direction::Right),
            KeyCode::Up => KeyAction::Move(Direction::Up),
            KeyCode::Down => KeyAction::Move(Direction::Down),

            // Raw mode swallows SIGINT, so Ctrl+C has to quit by hand
            KeyCode::Char('c') | KeyCode::Char('C') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                KeyAction::Quit
            }

            KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::Clear,
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,

            _ => KeyAction::Unrecognized,
        };
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key_event(code: KeyCode, mods: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, mods)
    }

    #[test]
    fn test_arrow_keys() {
        let cases = [
            (KeyCode::Left, Direction::Left),
            (KeyCode::Right, Direction::Right),
            (KeyCode::Up, Direction::Up),
            (KeyCode::Down, Direction::Down),
        ];
        for (code, direction) in cases {
            let event = key_event(code, KeyModifiers::NONE);
            assert_eq!(KeyMapper::map(&event), Some(KeyAction::Move(direction)));
        }
    }

    #[test]
    fn test_command_keys() {
        let event = key_event(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(KeyMapper::map(&event), Some(KeyAction::Clear));

        let event = key_event(KeyCode::Char('C'), KeyModifiers::SHIFT);
        assert_eq!(KeyMapper::map(&event), Some(KeyAction::Clear));

        let event = key_event(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(KeyMapper::map(&event), Some(KeyAction::Quit));

        let event = key_event(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(KeyMapper::map(&event), Some(KeyAction::Quit));

        // Ctrl+C
        let event = key_event(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyMapper::map(&event), Some(KeyAction::Quit));
    }

    #[test]
    fn test_unrecognized_keys() {
        for code in [KeyCode::Char('x'), KeyCode::Enter, KeyCode::Esc, KeyCode::F(1)] {
            let event = key_event(code, KeyModifiers::NONE);
            assert_eq!(KeyMapper::map(&event), Some(KeyAction::Unrecognized));
        }
    }

    #[test]
    fn test_release_ignored() {
        let event = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(KeyMapper::map(&event), None);
    }
}
