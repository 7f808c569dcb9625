//! Configuration file loading with precedence handling.

use crate::model::{PageNumber, PageSize};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Upstream placeholder API used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/blogview/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Base URL of the post API.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Initial page size (10, 20 or 50).
    #[serde(default)]
    pub page_size: Option<PageSize>,

    /// Pull the page back into range when the page size changes.
    #[serde(default)]
    pub clamp_page_on_resize: Option<bool>,

    /// Drop responses that arrive after a newer request of the same kind.
    #[serde(default)]
    pub discard_stale_responses: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Base URL of the post API.
    pub base_url: String,
    /// Page shown on startup.
    pub page: PageNumber,
    /// Page size on startup.
    pub page_size: PageSize,
    /// Clamp the page when the page size changes.
    pub clamp_page_on_resize: bool,
    /// Drop out-of-order responses.
    pub discard_stale_responses: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page: PageNumber::FIRST,
            page_size: PageSize::Ten,
            clamp_page_on_resize: true,
            discard_stale_responses: true,
            log_file_path: default_log_path(),
        }
    }
}

/// Overrides collected from command-line flags.
///
/// `None` (or `false` for the switches) leaves the lower layers untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--base-url`
    pub base_url: Option<String>,
    /// `--page`
    pub page: Option<PageNumber>,
    /// `--page-size`
    pub page_size: Option<PageSize>,
    /// `--keep-page-on-resize`
    pub keep_page_on_resize: bool,
    /// `--allow-stale-responses`
    pub allow_stale_responses: bool,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/blogview/blogview.log` on Unix-like systems,
/// or the platform equivalent. Falls back to the current directory when
/// no state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("blogview").join("blogview.log")
    } else {
        PathBuf::from("blogview.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

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

/// Resolve default config file path (`~/.config/blogview/config.toml`).
///
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("blogview").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `BLOGVIEW_CONFIG` environment variable
/// 3. Default path
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

    if let Ok(env_path) = std::env::var("BLOGVIEW_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        base_url: config.base_url.unwrap_or(defaults.base_url),
        page: defaults.page,
        page_size: config.page_size.unwrap_or(defaults.page_size),
        clamp_page_on_resize: config
            .clamp_page_on_resize
            .unwrap_or(defaults.clamp_page_on_resize),
        discard_stale_responses: config
            .discard_stale_responses
            .unwrap_or(defaults.discard_stale_responses),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `BLOGVIEW_BASE_URL`: Override base URL
/// - `BLOGVIEW_PAGE_SIZE`: Override page size (invalid values are ignored with a warning)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(base_url) = std::env::var("BLOGVIEW_BASE_URL") {
        config.base_url = base_url;
    }

    if let Ok(raw) = std::env::var("BLOGVIEW_PAGE_SIZE") {
        match raw.parse::<PageSize>() {
            Ok(size) => config.page_size = size,
            Err(e) => warn!(error = %e, "Ignoring BLOGVIEW_PAGE_SIZE"),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. Only flags the user actually set
/// are applied.
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    if let Some(page) = cli.page {
        config.page = page;
    }

    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }

    if cli.keep_page_on_resize {
        config.clamp_page_on_resize = false;
    }

    if cli.allow_stale_responses {
        config.discard_stale_responses = false;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
