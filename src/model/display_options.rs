//! Per-item display options and the poster size class.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Coarse poster size selector.
///
/// Drives the column-packing bias of the geometry calculator: smaller
/// requested posters pack more, narrower columns into the same width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    /// Smallest posters, densest packing.
    Small,
    /// Default poster size.
    #[default]
    Medium,
    /// Largest posters.
    Large,
}

impl SizeClass {
    /// All size classes, smallest first.
    pub const ALL: [SizeClass; 3] = [SizeClass::Small, SizeClass::Medium, SizeClass::Large];

    /// Columns added to the naive column count before dividing the width.
    pub fn extra_columns(self) -> u32 {
        match self {
            SizeClass::Small => 3,
            SizeClass::Medium => 2,
            SizeClass::Large => 1,
        }
    }

    /// The next size class, wrapping from large back to small.
    pub fn cycle(self) -> Self {
        match self {
            SizeClass::Small => SizeClass::Medium,
            SizeClass::Medium => SizeClass::Large,
            SizeClass::Large => SizeClass::Small,
        }
    }

    /// Lowercase name as used in config files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized size class name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown size class '{0}' (expected small, medium or large)")]
pub struct InvalidSizeClass(pub String);

impl FromStr for SizeClass {
    type Err = InvalidSizeClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(SizeClass::Small),
            "medium" => Ok(SizeClass::Medium),
            "large" => Ok(SizeClass::Large),
            _ => Err(InvalidSizeClass(s.to_string())),
        }
    }
}

/// Display toggles that affect cell geometry.
///
/// A layout pass treats this as an immutable value. Changing any field means
/// building a new value and handing it to the grid wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Poster size class.
    pub size_class: SizeClass,
    /// Use the tall progress bar instead of the thin one.
    pub detailed_progress_bar: bool,
    /// Reserve a line for the item title.
    pub show_title: bool,
    /// Reserve a line for the monitored flag.
    pub show_monitored: bool,
    /// Reserve a line for the quality profile.
    pub show_quality_profile: bool,
}

impl DisplayOptions {
    /// Copy with a different size class.
    pub fn with_size_class(self, size_class: SizeClass) -> Self {
        Self { size_class, ..self }
    }

    /// Copy with the detailed progress bar toggled.
    pub fn toggle_detailed_progress_bar(self) -> Self {
        Self {
            detailed_progress_bar: !self.detailed_progress_bar,
            ..self
        }
    }

    /// Copy with the title line toggled.
    pub fn toggle_title(self) -> Self {
        Self {
            show_title: !self.show_title,
            ..self
        }
    }

    /// Copy with the monitored line toggled.
    pub fn toggle_monitored(self) -> Self {
        Self {
            show_monitored: !self.show_monitored,
            ..self
        }
    }

    /// Copy with the quality profile line toggled.
    pub fn toggle_quality_profile(self) -> Self {
        Self {
            show_quality_profile: !self.show_quality_profile,
            ..self
        }
    }
}
