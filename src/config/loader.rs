//! Configuration file loading with precedence handling.

use crate::grid::{LayoutDimensions, DEFAULT_OVERSCAN_COUNT};
use crate::model::{DisplayOptions, SizeClass, SortKey};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "POSTERGRID_CONFIG";
/// Environment variable overriding the size class.
pub const SIZE_ENV_VAR: &str = "POSTERGRID_SIZE";
/// Environment variable overriding the sort key.
pub const SORT_KEY_ENV_VAR: &str = "POSTERGRID_SORT_KEY";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A field holds a value outside its domain.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Offending field.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/postergrid/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Poster size class ("small", "medium", "large").
    #[serde(default)]
    pub size_class: Option<String>,

    /// Show the taller, detailed progress bar.
    #[serde(default)]
    pub detailed_progress_bar: Option<bool>,

    /// Show the title line under each poster.
    #[serde(default)]
    pub show_title: Option<bool>,

    /// Show the monitored line.
    #[serde(default)]
    pub show_monitored: Option<bool>,

    /// Show the quality profile line.
    #[serde(default)]
    pub show_quality_profile: Option<bool>,

    /// Active sort key (e.g. "sizeOnDisk"). Unknown keys reserve no line.
    #[serde(default)]
    pub sort_key: Option<String>,

    /// Rows rendered beyond each viewport edge.
    #[serde(default)]
    pub overscan_count: Option<usize>,

    /// Start in small-screen mode.
    #[serde(default)]
    pub small_screen: Option<bool>,

    /// Start in table mode.
    #[serde(default)]
    pub table_mode: Option<bool>,

    /// Pixels represented by one terminal column.
    #[serde(default)]
    pub pixels_per_column: Option<u32>,

    /// Pixels represented by one terminal line.
    #[serde(default)]
    pub pixels_per_row: Option<u32>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Overrides for the fixed layout bands.
    #[serde(default)]
    pub dimensions: Option<LayoutDimensions>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Display toggles and size class.
    pub options: DisplayOptions,
    /// Active sort key.
    pub sort_key: Option<SortKey>,
    /// Overscan rows.
    pub overscan_count: usize,
    /// Small-screen mode.
    pub small_screen: bool,
    /// Table mode.
    pub table_mode: bool,
    /// Pixels per terminal column.
    pub pixels_per_column: u32,
    /// Pixels per terminal line.
    pub pixels_per_row: u32,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Fixed layout bands.
    pub dimensions: LayoutDimensions,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            options: DisplayOptions::default(),
            sort_key: None,
            overscan_count: DEFAULT_OVERSCAN_COUNT,
            small_screen: false,
            table_mode: false,
            pixels_per_column: 8,
            pixels_per_row: 16,
            log_file_path: default_log_path(),
            dimensions: LayoutDimensions::default(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/postergrid/postergrid.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("postergrid").join("postergrid.log")
    } else {
        PathBuf::from("postergrid.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/postergrid/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("postergrid").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `POSTERGRID_CONFIG` environment variable
/// 3. Default path `~/.config/postergrid/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!("{CONFIG_ENV_VAR} is empty")));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Parse a sort key as written in config, env or CLI.
///
/// Blank and `"none"` mean no sort key.
pub fn parse_sort_key(raw: &str) -> Option<SortKey> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("none") {
        return None;
    }
    raw.parse().ok()
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for an unknown size class or a zero
/// pixel scale.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let size_class = match config.size_class {
        Some(raw) => raw
            .parse::<SizeClass>()
            .map_err(|e| ConfigError::InvalidValue {
                field: "size_class",
                reason: e.to_string(),
            })?,
        None => defaults.options.size_class,
    };

    let options = DisplayOptions {
        size_class,
        detailed_progress_bar: config
            .detailed_progress_bar
            .unwrap_or(defaults.options.detailed_progress_bar),
        show_title: config.show_title.unwrap_or(defaults.options.show_title),
        show_monitored: config
            .show_monitored
            .unwrap_or(defaults.options.show_monitored),
        show_quality_profile: config
            .show_quality_profile
            .unwrap_or(defaults.options.show_quality_profile),
    };

    Ok(ResolvedConfig {
        options,
        sort_key: match config.sort_key {
            Some(raw) => parse_sort_key(&raw),
            None => defaults.sort_key,
        },
        overscan_count: config.overscan_count.unwrap_or(defaults.overscan_count),
        small_screen: config.small_screen.unwrap_or(defaults.small_screen),
        table_mode: config.table_mode.unwrap_or(defaults.table_mode),
        pixels_per_column: positive(
            "pixels_per_column",
            config.pixels_per_column,
            defaults.pixels_per_column,
        )?,
        pixels_per_row: positive(
            "pixels_per_row",
            config.pixels_per_row,
            defaults.pixels_per_row,
        )?,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        dimensions: config.dimensions.unwrap_or(defaults.dimensions),
    })
}

fn positive(field: &'static str, value: Option<u32>, default: u32) -> Result<u32, ConfigError> {
    match value {
        Some(0) => Err(ConfigError::InvalidValue {
            field,
            reason: "must be greater than zero".to_string(),
        }),
        Some(v) => Ok(v),
        None => Ok(default),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `POSTERGRID_SIZE`: Override size class (invalid values are logged and ignored)
/// - `POSTERGRID_SORT_KEY`: Override sort key
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(SIZE_ENV_VAR) {
        match raw.parse::<SizeClass>() {
            Ok(size_class) => config.options.size_class = size_class,
            Err(e) => warn!(error = %e, var = SIZE_ENV_VAR, "Ignoring invalid size class"),
        }
    }

    if let Ok(raw) = std::env::var(SORT_KEY_ENV_VAR) {
        config.sort_key = parse_sort_key(&raw);
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Arguments
///
/// * `config` - Base resolved config (already merged with defaults, file, and env vars)
/// * `size_override` - Size class from `--size`
/// * `sort_key_override` - Sort key from `--sort-key` (`"none"` clears it)
/// * `small_screen_override` - Set by `--small-screen`
/// * `overscan_override` - Overscan rows from `--overscan`
/// * `table_override` - Set by `--table`
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    size_override: Option<SizeClass>,
    sort_key_override: Option<String>,
    small_screen_override: Option<bool>,
    overscan_override: Option<usize>,
    table_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(size_class) = size_override {
        config.options.size_class = size_class;
    }

    if let Some(raw) = sort_key_override {
        config.sort_key = parse_sort_key(&raw);
    }

    if let Some(small_screen) = small_screen_override {
        config.small_screen = small_screen;
    }

    if let Some(overscan) = overscan_override {
        config.overscan_count = overscan;
    }

    if let Some(table) = table_override {
        config.table_mode = table;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
