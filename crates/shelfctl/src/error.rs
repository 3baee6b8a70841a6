//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use shelf_config::ConfigError;
use shelf_core::CoreError;

/// Exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the inventory API")]
    #[diagnostic(
        code(shelf::connection_failed),
        help(
            "Check that the backend is running and the base URL is correct.\n\
             Reason: {reason}"
        )
    )]
    ConnectionFailed { reason: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(shelf::not_found),
        help("Run: shelfctl {resource_type} list to see available records")
    )]
    NotFound {
        resource_type: &'static str,
        identifier: String,
    },

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error (HTTP {status}): {message}")]
    #[diagnostic(code(shelf::api_error))]
    ApiError { status: u16, message: String },

    #[error("Unexpected response from the API: {message}")]
    #[diagnostic(
        code(shelf::bad_response),
        help("The backend may be a different version than this CLI expects.")
    )]
    BadResponse { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(shelf::validation))]
    Validation {
        field: &'static str,
        reason: String,
    },

    // ── Configuration ────────────────────────────────────────────────
    #[error("No base URL configured")]
    #[diagnostic(
        code(shelf::no_base_url),
        help(
            "Set SHELF_BASE_URL, pass --base-url, or run:\n\
             shelfctl config set --base-url http://localhost:4000/api\n\
             Config file: {path}"
        )
    )]
    NoBaseUrl { path: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(shelf::config))]
    Config { message: String },

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::NoBaseUrl { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Transport { message } => CliError::ConnectionFailed { reason: message },
            CoreError::Server { status, message } => CliError::ApiError { status, message },
            CoreError::Decode { message } => CliError::BadResponse { message },
            CoreError::Config { message } => CliError::Config { message },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoBaseUrl { path } => CliError::NoBaseUrl { path },
            ConfigError::Validation { field: _, reason } => CliError::Config { message: reason },
            other => CliError::Config {
                message: other.to_string(),
            },
        }
    }
}
