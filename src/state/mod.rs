//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod display_handler;
pub mod jump_handler;
pub mod scroll_handler;

// Re-export for convenience
pub use app_state::{grid_config, AppState, HostScroll, InputMode, TerminalViewport};
pub use display_handler::handle_display_action;
pub use jump_handler::{cancel_jump, handle_jump_key, jump_to_character, start_jump};
pub use scroll_handler::handle_scroll_action;
