//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::messages::RenderState;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Navigation
    NextPanel,
    PrevPanel,
    NextNetwork,
    PrevNetwork,

    // Wallet
    ToggleWallet,

    // Address editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // Faucet actions
    Claim,
    CheckBalance,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Focused panel
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Panel {
    #[default]
    Claim,
    Balance,
}

impl Panel {
    pub fn next(&self) -> Panel {
        match self {
            Panel::Claim => Panel::Balance,
            Panel::Balance => Panel::Claim,
        }
    }

    pub fn prev(&self) -> Panel {
        // Two panels: the cycle is symmetric
        self.next()
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on the last rendered state.
///
/// Claim and balance keys are dropped while that panel is loading, the
/// terminal counterpart of a disabled button.
pub fn key_to_ui_event(key: KeyEvent, state: &RenderState) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UiEvent::Quit),
            _ => None,
        };
    }

    if state.show_help {
        return Some(UiEvent::CloseHelp);
    }

    let event = match state.input_mode {
        InputMode::Normal => normal_mode_key(key, state),
        InputMode::Editing => editing_mode_key(key),
    }?;

    match event {
        UiEvent::Claim if state.claim_loading => None,
        UiEvent::CheckBalance if state.balance_loading => None,
        event => Some(event),
    }
}

fn normal_mode_key(key: KeyEvent, state: &RenderState) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Tab => Some(UiEvent::NextPanel),
        KeyCode::BackTab => Some(UiEvent::PrevPanel),
        KeyCode::Char('n') => Some(UiEvent::NextNetwork),
        KeyCode::Char('N') => Some(UiEvent::PrevNetwork),
        KeyCode::Char('w') => Some(UiEvent::ToggleWallet),
        KeyCode::Char('c') => Some(UiEvent::Claim),
        KeyCode::Char('b') => Some(UiEvent::CheckBalance),
        KeyCode::Char('e') if state.active_panel == Panel::Claim && !state.address_locked => {
            Some(UiEvent::StartEditing)
        }
        KeyCode::Enter => match state.active_panel {
            Panel::Claim => Some(UiEvent::Claim),
            Panel::Balance => Some(UiEvent::CheckBalance),
        },
        _ => None,
    }
}

fn editing_mode_key(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc => Some(UiEvent::StopEditing),
        KeyCode::Left => Some(UiEvent::CursorLeft),
        KeyCode::Right => Some(UiEvent::CursorRight),
        KeyCode::Backspace => Some(UiEvent::Backspace),
        KeyCode::Enter => Some(UiEvent::Claim),
        KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_bindings() {
        let state = RenderState::default();
        assert_eq!(key_to_ui_event(press(KeyCode::Char('c')), &state), Some(UiEvent::Claim));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('b')), &state), Some(UiEvent::CheckBalance));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('n')), &state), Some(UiEvent::NextNetwork));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('w')), &state), Some(UiEvent::ToggleWallet));
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), &state), Some(UiEvent::Claim));
        assert_eq!(
            key_to_ui_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &state),
            Some(UiEvent::Quit)
        );
    }

    #[test]
    fn test_enter_follows_focus() {
        let state = RenderState {
            active_panel: Panel::Balance,
            ..RenderState::default()
        };
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), &state), Some(UiEvent::CheckBalance));
    }

    #[test]
    fn test_loading_panel_key_disabled() {
        let state = RenderState {
            claim_loading: true,
            ..RenderState::default()
        };
        assert_eq!(key_to_ui_event(press(KeyCode::Char('c')), &state), None);
        // The other panel is unaffected
        assert_eq!(key_to_ui_event(press(KeyCode::Char('b')), &state), Some(UiEvent::CheckBalance));

        let state = RenderState {
            balance_loading: true,
            ..RenderState::default()
        };
        assert_eq!(key_to_ui_event(press(KeyCode::Char('b')), &state), None);
    }

    #[test]
    fn test_locked_address_not_editable() {
        let state = RenderState {
            address_locked: true,
            ..RenderState::default()
        };
        assert_eq!(key_to_ui_event(press(KeyCode::Char('e')), &state), None);

        let state = RenderState::default();
        assert_eq!(key_to_ui_event(press(KeyCode::Char('e')), &state), Some(UiEvent::StartEditing));
    }

    #[test]
    fn test_editing_mode_captures_characters() {
        let state = RenderState {
            input_mode: InputMode::Editing,
            ..RenderState::default()
        };
        assert_eq!(key_to_ui_event(press(KeyCode::Char('q')), &state), Some(UiEvent::CharInput('q')));
        assert_eq!(key_to_ui_event(press(KeyCode::Esc), &state), Some(UiEvent::StopEditing));
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), &state), Some(UiEvent::Claim));
    }

    #[test]
    fn test_help_popup_swallows_keys() {
        let state = RenderState {
            show_help: true,
            ..RenderState::default()
        };
        assert_eq!(key_to_ui_event(press(KeyCode::Char('c')), &state), Some(UiEvent::CloseHelp));
    }
}
