//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings. Jump mode bypasses this table: while
/// it is active the next typed character is the jump target.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Bind (or rebind) a key.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }

    fn insert(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bind(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;
        let shift = KeyModifiers::SHIFT;
        let ctrl = KeyModifiers::CONTROL;

        // Vim-style scrolling
        keys.insert(KeyCode::Char('j'), none, KeyAction::ScrollDown);
        keys.insert(KeyCode::Char('k'), none, KeyAction::ScrollUp);
        keys.insert(KeyCode::Char('J'), shift, KeyAction::RowDown);
        keys.insert(KeyCode::Char('K'), shift, KeyAction::RowUp);
        keys.insert(KeyCode::Char('g'), none, KeyAction::ScrollToTop);
        keys.insert(KeyCode::Char('G'), shift, KeyAction::ScrollToBottom);

        // Arrow and navigation keys
        keys.insert(KeyCode::Down, none, KeyAction::ScrollDown);
        keys.insert(KeyCode::Up, none, KeyAction::ScrollUp);
        keys.insert(KeyCode::Home, none, KeyAction::ScrollToTop);
        keys.insert(KeyCode::End, none, KeyAction::ScrollToBottom);

        // Page navigation
        keys.insert(KeyCode::Char('d'), ctrl, KeyAction::PageDown);
        keys.insert(KeyCode::Char('u'), ctrl, KeyAction::PageUp);
        keys.insert(KeyCode::PageDown, none, KeyAction::PageDown);
        keys.insert(KeyCode::PageUp, none, KeyAction::PageUp);

        // Jump to character
        keys.insert(KeyCode::Char('f'), none, KeyAction::StartJump);
        keys.insert(KeyCode::Esc, none, KeyAction::CancelJump);

        // Display options
        keys.insert(KeyCode::Char('s'), none, KeyAction::CycleSize);
        keys.insert(KeyCode::Char('p'), none, KeyAction::ToggleDetailedProgress);
        keys.insert(KeyCode::Char('t'), none, KeyAction::ToggleTitle);
        keys.insert(KeyCode::Char('m'), none, KeyAction::ToggleMonitored);
        keys.insert(KeyCode::Char('Q'), shift, KeyAction::ToggleQualityProfile);
        keys.insert(KeyCode::Char('o'), none, KeyAction::CycleSortKey);
        keys.insert(KeyCode::Char('v'), none, KeyAction::ToggleTableMode);
        keys.insert(KeyCode::Char('z'), none, KeyAction::ToggleSmallScreen);

        // Application controls
        keys.insert(KeyCode::Char('q'), none, KeyAction::Quit);
        keys.insert(KeyCode::Char('c'), ctrl, KeyAction::Quit);

        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_map_f_to_start_jump() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE);

        assert_eq!(
            bindings.get(key_event),
            Some(KeyAction::StartJump),
            "'f' should enter jump mode"
        );
    }

    #[test]
    fn default_bindings_distinguish_quit_from_quality_profile() {
        let bindings = KeyBindings::default();

        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            Some(KeyAction::ToggleQualityProfile)
        );
    }

    #[test]
    fn unbound_key_has_no_action() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(bindings.get(key_event), None);
    }

    #[test]
    fn bind_overrides_default() {
        let mut bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        bindings.bind(key_event, KeyAction::RowDown);
        assert_eq!(bindings.get(key_event), Some(KeyAction::RowDown));
    }
}
