//! Event Handling - Keyboard input processing

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use super::state::{DashboardState, TabId};
use crate::fixtures::agents::AgentId;
use crate::fixtures::implementation::{FileBlock, FILES};

/// Actions that can be triggered by user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    SelectTab(TabId),
    SelectAgent(AgentId),
    ConsoleToggled,
    ConsoleMinimized,
    FileCursorMoved,
    FileToggled(&'static str),
    /// Copy this file's code to the clipboard. The state has already armed
    /// the copied indicator; the app performs the actual write.
    CopyFile(&'static FileBlock),
    None,
}

/// Handle keyboard events
pub fn handle_key_event(key: KeyEvent, state: &mut DashboardState) -> Action {
    // Global keybindings
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => return Action::Quit,
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Action::Quit,
        _ => {}
    }

    match key.code {
        // Tab selection: direct digit or cycling
        KeyCode::Char(c @ '1'..='4') => {
            if let Some(tab) = TabId::from_digit(c) {
                state.active_tab = tab;
                return Action::SelectTab(tab);
            }
        }
        KeyCode::Tab => {
            state.active_tab = state.active_tab.next();
            return Action::SelectTab(state.active_tab);
        }
        KeyCode::BackTab => {
            state.active_tab = state.active_tab.prev();
            return Action::SelectTab(state.active_tab);
        }

        // Agent rail: moving is activating
        KeyCode::Up => {
            state.active_agent = state.active_agent.prev();
            return Action::SelectAgent(state.active_agent);
        }
        KeyCode::Down => {
            state.active_agent = state.active_agent.next();
            return Action::SelectAgent(state.active_agent);
        }

        // Console
        KeyCode::Char('c') => {
            state.console.toggle_open();
            return Action::ConsoleToggled;
        }
        KeyCode::Char('m') => {
            state.console.toggle_minimize();
            return Action::ConsoleMinimized;
        }

        _ => {}
    }

    // Implementation panel keybindings
    if state.active_tab == TabId::Implementation {
        match key.code {
            KeyCode::Char('j') => {
                state.implementation.cursor_down();
                return Action::FileCursorMoved;
            }
            KeyCode::Char('k') => {
                state.implementation.cursor_up();
                return Action::FileCursorMoved;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let file = &FILES[state.implementation.cursor];
                state.implementation.toggle_expanded(file.id);
                return Action::FileToggled(file.id);
            }
            KeyCode::Char('y') => {
                let file = &FILES[state.implementation.cursor];
                state.implementation.mark_copied(file.id, Instant::now());
                return Action::CopyFile(file);
            }
            _ => {}
        }
    }

    Action::None
}

/// Poll for keyboard events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<KeyEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            return Ok(Some(key));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_action() {
        let mut state = DashboardState::new();
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &mut state), Action::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_c, &mut state), Action::Quit);
    }

    #[test]
    fn test_digit_selects_tab() {
        let mut state = DashboardState::new();
        let action = handle_key_event(key(KeyCode::Char('3')), &mut state);
        assert_eq!(action, Action::SelectTab(TabId::Qa));
        assert_eq!(state.active_tab, TabId::Qa);
    }

    #[test]
    fn test_arrows_move_active_agent() {
        let mut state = DashboardState::new();
        handle_key_event(key(KeyCode::Down), &mut state);
        assert_eq!(state.active_agent, AgentId::Coder);

        handle_key_event(key(KeyCode::Up), &mut state);
        assert_eq!(state.active_agent, AgentId::Planner);

        // Saturates at the top of the rail.
        handle_key_event(key(KeyCode::Up), &mut state);
        assert_eq!(state.active_agent, AgentId::Planner);
    }

    #[test]
    fn test_console_keys() {
        use crate::tui::state::ConsoleVisibility;

        let mut state = DashboardState::new();
        handle_key_event(key(KeyCode::Char('m')), &mut state);
        assert_eq!(state.console.visibility(), ConsoleVisibility::Minimized);

        handle_key_event(key(KeyCode::Char('c')), &mut state);
        assert_eq!(state.console.visibility(), ConsoleVisibility::Closed);
    }

    #[test]
    fn test_file_keys_only_bind_on_implementation_tab() {
        let mut state = DashboardState::new();
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &mut state), Action::None);
        assert_eq!(handle_key_event(key(KeyCode::Char('y')), &mut state), Action::None);

        state.active_tab = TabId::Implementation;
        assert_eq!(
            handle_key_event(key(KeyCode::Char('j')), &mut state),
            Action::FileCursorMoved
        );
        assert_eq!(state.implementation.cursor, 1);

        let action = handle_key_event(key(KeyCode::Enter), &mut state);
        assert_eq!(action, Action::FileToggled("2"));
        assert!(state.implementation.is_expanded("2"));
    }

    #[test]
    fn test_yank_arms_copy_flash() {
        let mut state = DashboardState::new();
        state.active_tab = TabId::Implementation;

        let action = handle_key_event(key(KeyCode::Char('y')), &mut state);
        match action {
            Action::CopyFile(file) => assert_eq!(file.id, "1"),
            other => panic!("expected CopyFile, got {:?}", other),
        }
        assert_eq!(state.implementation.copied_id(Instant::now()), Some("1"));
    }
}
