//! Key bindings
//!
//! Translates terminal key presses into game actions. Which keys are live
//! depends on the phase the app is in.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the UI is currently able to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Word list still loading
    Loading,
    /// Word list failed to load
    Failed,
    /// Game in progress
    Playing,
    /// Game won or lost
    Finished,
}

/// A discrete input the app acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Append(char),
    Delete,
    Submit,
    Restart,
    Retry,
    Quit,
}

/// Map a key press to an action allowed in `phase`
///
/// Returns `None` for key releases/repeats and for keys that mean nothing
/// right now.
#[must_use]
pub fn map_key(key: &KeyEvent, phase: Phase) -> Option<InputAction> {
    // Only process key press events (fixes Windows double-input bug)
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    let action = match key.code {
        KeyCode::Char('c') if ctrl => InputAction::Quit,
        KeyCode::Char('n') if ctrl => InputAction::Restart,
        KeyCode::Esc => InputAction::Quit,
        _ if ctrl || alt => return None,
        KeyCode::Char(c) => match (phase, c.to_ascii_lowercase()) {
            (Phase::Playing, c) if c.is_ascii_alphabetic() => InputAction::Append(c),
            (Phase::Finished, 'n') => InputAction::Restart,
            (Phase::Failed, 'r') => InputAction::Retry,
            (Phase::Loading | Phase::Failed | Phase::Finished, 'q') => InputAction::Quit,
            _ => return None,
        },
        KeyCode::Backspace => InputAction::Delete,
        KeyCode::Enter if phase == Phase::Finished => InputAction::Restart,
        KeyCode::Enter => InputAction::Submit,
        _ => return None,
    };

    accept(phase, action)
}

/// Filter an action (from a key or an on-screen button) by phase
///
/// Letter entry only works mid-game; restart works everywhere and reloads
/// the word list when no game could be started.
#[must_use]
pub fn accept(phase: Phase, action: InputAction) -> Option<InputAction> {
    let allowed = match action {
        InputAction::Append(_) | InputAction::Delete | InputAction::Submit => {
            phase == Phase::Playing
        }
        InputAction::Retry => phase == Phase::Failed,
        InputAction::Restart | InputAction::Quit => true,
    };
    allowed.then_some(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn letters_append_while_playing() {
        assert_eq!(
            map_key(&press(KeyCode::Char('a')), Phase::Playing),
            Some(InputAction::Append('a'))
        );
        assert_eq!(
            map_key(&press(KeyCode::Char('Q')), Phase::Playing),
            Some(InputAction::Append('q'))
        );
        assert_eq!(map_key(&press(KeyCode::Char('1')), Phase::Playing), None);
        assert_eq!(map_key(&press(KeyCode::Char(' ')), Phase::Playing), None);
    }

    #[test]
    fn editing_keys_while_playing() {
        assert_eq!(
            map_key(&press(KeyCode::Backspace), Phase::Playing),
            Some(InputAction::Delete)
        );
        assert_eq!(
            map_key(&press(KeyCode::Enter), Phase::Playing),
            Some(InputAction::Submit)
        );
    }

    #[test]
    fn game_input_ignored_when_finished() {
        assert_eq!(map_key(&press(KeyCode::Char('a')), Phase::Finished), None);
        assert_eq!(map_key(&press(KeyCode::Backspace), Phase::Finished), None);
        assert_eq!(
            map_key(&press(KeyCode::Enter), Phase::Finished),
            Some(InputAction::Restart)
        );
        assert_eq!(
            map_key(&press(KeyCode::Char('n')), Phase::Finished),
            Some(InputAction::Restart)
        );
        assert_eq!(
            map_key(&press(KeyCode::Char('q')), Phase::Finished),
            Some(InputAction::Quit)
        );
    }

    #[test]
    fn game_input_ignored_while_loading() {
        for code in [KeyCode::Char('a'), KeyCode::Backspace, KeyCode::Enter] {
            assert_eq!(map_key(&press(code), Phase::Loading), None);
        }
        assert_eq!(
            map_key(&press(KeyCode::Char('q')), Phase::Loading),
            Some(InputAction::Quit)
        );
    }

    #[test]
    fn retry_only_after_failure() {
        assert_eq!(
            map_key(&press(KeyCode::Char('r')), Phase::Failed),
            Some(InputAction::Retry)
        );
        assert_eq!(
            map_key(&press(KeyCode::Char('r')), Phase::Playing),
            Some(InputAction::Append('r'))
        );
        assert_eq!(accept(Phase::Finished, InputAction::Retry), None);
    }

    #[test]
    fn q_is_a_letter_mid_game() {
        assert_eq!(
            map_key(&press(KeyCode::Char('q')), Phase::Playing),
            Some(InputAction::Append('q'))
        );
    }

    #[test]
    fn control_keys_work_everywhere() {
        for phase in [Phase::Loading, Phase::Failed, Phase::Playing, Phase::Finished] {
            assert_eq!(map_key(&ctrl('c'), phase), Some(InputAction::Quit));
            assert_eq!(map_key(&ctrl('n'), phase), Some(InputAction::Restart));
            assert_eq!(map_key(&press(KeyCode::Esc), phase), Some(InputAction::Quit));
        }
        assert_eq!(map_key(&ctrl('a'), Phase::Playing), None);
    }

    #[test]
    fn key_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(&release, Phase::Playing), None);
    }
}
