//! Layout dimension constants for TUI rendering.

/// Height of the header bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Shows key hints, the jump prompt, or the last status message.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// How long the event loop waits for input before polling again.
pub const EVENT_POLL_INTERVAL_MS: u64 = 250;

/// Truncation marker for labels wider than their cell.
pub const ELLIPSIS: char = '…';

/// Progress bar glyphs.
pub const PROGRESS_FILLED: char = '█';
/// Progress bar glyphs.
pub const PROGRESS_EMPTY: char = '░';
