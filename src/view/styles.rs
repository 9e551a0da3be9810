//! Grid and status bar styling.
//!
//! Colors are disabled entirely when `NO_COLOR` is set.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Colors are on unless `NO_COLOR` is set (to any value).
    pub fn from_env() -> Self {
        Self::new(std::env::var_os("NO_COLOR").is_none())
    }

    /// Explicit setting.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== GridStyles =====

/// Styles for poster cards, table rows and the bars around the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridStyles {
    /// Poster frame.
    pub poster_border: Style,
    /// Label inside the poster frame.
    pub poster_label: Style,
    /// Filled part of the progress bar.
    pub progress_filled: Style,
    /// Empty part of the progress bar.
    pub progress_empty: Style,
    /// Title line.
    pub title: Style,
    /// Monitored marker.
    pub monitored: Style,
    /// Unmonitored marker.
    pub unmonitored: Style,
    /// Quality profile and sort-key annotation lines.
    pub detail: Style,
    /// Header bar.
    pub header: Style,
    /// Status bar.
    pub status: Style,
    /// Jump prompt.
    pub jump: Style,
}

impl GridStyles {
    /// Styles honoring `NO_COLOR`.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env())
    }

    /// Styles for an explicit color setting.
    ///
    /// Without color only modifiers (bold, dim, reversed) remain.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                poster_border: Style::default().fg(Color::DarkGray),
                poster_label: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                progress_filled: Style::default().fg(Color::Green),
                progress_empty: Style::default().fg(Color::DarkGray),
                title: Style::default().fg(Color::White),
                monitored: Style::default().fg(Color::Cyan),
                unmonitored: Style::default().fg(Color::Gray),
                detail: Style::default().fg(Color::Gray),
                header: Style::default().fg(Color::Black).bg(Color::Cyan),
                status: Style::default().fg(Color::White).bg(Color::DarkGray),
                jump: Style::default().fg(Color::Black).bg(Color::Yellow),
            }
        } else {
            Self {
                poster_border: Style::default(),
                poster_label: Style::default().add_modifier(Modifier::BOLD),
                progress_filled: Style::default(),
                progress_empty: Style::default().add_modifier(Modifier::DIM),
                title: Style::default(),
                monitored: Style::default(),
                unmonitored: Style::default().add_modifier(Modifier::DIM),
                detail: Style::default(),
                header: Style::default().add_modifier(Modifier::REVERSED),
                status: Style::default().add_modifier(Modifier::REVERSED),
                jump: Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
            }
        }
    }
}

impl Default for GridStyles {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn explicit_config_reports_setting() {
        assert!(ColorConfig::new(true).colors_enabled());
        assert!(!ColorConfig::new(false).colors_enabled());
    }

    #[test]
    #[serial(no_color)]
    fn no_color_env_disables_colors() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env();
        std::env::remove_var("NO_COLOR");
        assert!(!config.colors_enabled());
    }

    #[test]
    fn colorless_styles_have_no_foreground() {
        let styles = GridStyles::with_color_config(ColorConfig::new(false));
        assert_eq!(styles.progress_filled.fg, None);
        assert_eq!(styles.monitored.fg, None);
        assert!(styles.status.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn colored_styles_distinguish_monitored() {
        let styles = GridStyles::with_color_config(ColorConfig::new(true));
        assert_ne!(styles.monitored, styles.unmonitored);
    }
}
