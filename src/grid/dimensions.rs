//! Fixed pixel bands used by the geometry calculator.

use serde::Deserialize;

/// Immutable styling constants for poster and table layout.
///
/// Passed into every geometry function instead of living in globals, so the
/// calculator stays pure and a host can supply its own values (the terminal
/// host loads them from the `[dimensions]` table of the config file).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutDimensions {
    /// Upper bound on a column's width on regular screens.
    pub max_column_width: u32,
    /// Upper bound on a column's width on small screens.
    pub max_column_width_small_screen: u32,
    /// Padding on each side of a poster on regular screens.
    pub column_padding: u32,
    /// Padding on each side of a poster on small screens.
    pub column_padding_small_screen: u32,
    /// Height of the thin progress bar.
    pub progress_bar_small_height: u32,
    /// Height of the detailed progress bar.
    pub progress_bar_medium_height: u32,
    /// Height of the always-present next-event annotation.
    pub next_airing_height: u32,
    /// Height of each optional detail line (title, monitored, ...).
    pub detail_line_height: u32,
    /// Row height in table mode.
    pub table_row_height: u32,
    /// Poster edge length before the first measurement.
    pub initial_poster_size: u32,
}

impl LayoutDimensions {
    /// Maximum column width for the screen class.
    pub fn max_column_width(&self, is_small_screen: bool) -> u32 {
        if is_small_screen {
            self.max_column_width_small_screen
        } else {
            self.max_column_width
        }
    }

    /// Poster padding for the screen class.
    pub fn column_padding(&self, is_small_screen: bool) -> u32 {
        if is_small_screen {
            self.column_padding_small_screen
        } else {
            self.column_padding
        }
    }

    /// Progress bar band height.
    pub fn progress_bar_height(&self, detailed: bool) -> u32 {
        if detailed {
            self.progress_bar_medium_height
        } else {
            self.progress_bar_small_height
        }
    }
}

impl Default for LayoutDimensions {
    fn default() -> Self {
        Self {
            max_column_width: 182,
            max_column_width_small_screen: 172,
            column_padding: 10,
            column_padding_small_screen: 5,
            progress_bar_small_height: 5,
            progress_bar_medium_height: 15,
            next_airing_height: 19,
            detail_line_height: 19,
            table_row_height: 38,
            initial_poster_size: 238,
        }
    }
}
