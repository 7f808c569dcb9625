//! Error types for blogview.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from the binary's setup and run phases
//!   - [`FetchError`] - Failures of a single HTTP read against the post API
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing setup failures
//!   - [`TuiError`](crate::view::TuiError) - Terminal and fetch runtime failures
//!
//! # Recovery Strategy
//!
//! Fetch failures are **non-fatal**: they are logged and the displayed state
//! stays as it was. There is no retry and no user-visible message.
//! Config, logging and terminal errors are fatal and end the process.

use thiserror::Error;

/// Failure of a request against the post API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure: DNS, connection refused, TLS, body read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status} from {url}")]
    Http {
        /// Response status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The body was not the expected JSON shape.
    #[error("malformed response body: {0}")]
    Parse(String),

    /// The list response lacked a numeric `x-total-count` header.
    #[error("missing or invalid x-total-count header")]
    MissingTotalCount,

    /// The base URL or a derived URL could not be built.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl FetchError {
    /// True when the server reported the item does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Http { status: 404, .. })
    }
}

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialized.
    #[error("logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// The API client could not be constructed.
    #[error("client error: {0}")]
    Client(#[from] FetchError),

    /// The terminal UI failed.
    #[error("terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),
}
