//! Domain-level keyboard actions independent of key bindings.

/// User intents the terminal host understands.
///
/// The mapping from `crossterm::event::KeyEvent` to `KeyAction` lives in
/// [`crate::config::KeyBindings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll up by one terminal line. Default: k/↑
    ScrollUp,
    /// Scroll down by one terminal line. Default: j/↓
    ScrollDown,
    /// Scroll up by one grid row. Default: K
    RowUp,
    /// Scroll down by one grid row. Default: J
    RowDown,
    /// Scroll up by one viewport height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one viewport height. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first row. Default: g/Home
    ScrollToTop,
    /// Jump to the last row. Default: G/End
    ScrollToBottom,

    // Navigation
    /// Enter jump mode; the next character typed is the jump target. Default: f
    StartJump,
    /// Leave jump mode without jumping. Default: Esc
    CancelJump,

    // Display options
    /// Cycle poster size class. Default: s
    CycleSize,
    /// Toggle the detailed progress bar. Default: p
    ToggleDetailedProgress,
    /// Toggle the title line. Default: t
    ToggleTitle,
    /// Toggle the monitored line. Default: m
    ToggleMonitored,
    /// Toggle the quality profile line. Default: Q
    ToggleQualityProfile,
    /// Cycle the active sort key. Default: o
    CycleSortKey,
    /// Switch between poster grid and table layout. Default: v
    ToggleTableMode,
    /// Toggle small-screen mode. Default: z
    ToggleSmallScreen,

    // Application
    /// Exit. Default: q/Ctrl+c
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_are_copy_and_comparable() {
        let action = KeyAction::StartJump;
        let copied = action;
        assert_eq!(action, copied);
        assert_ne!(KeyAction::RowUp, KeyAction::ScrollUp);
    }
}
