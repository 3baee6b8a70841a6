// ── Core error types ──
//
// User-facing errors from shelf-core. Consumers never see reqwest or
// serde_json failures directly; the `From<shelf_api::Error>` impl
// translates transport-layer errors into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
///
/// One variant per failure class: transport failure (no response
/// reached), server-reported failure (envelope or HTTP status >= 400),
/// and payload decoding. "Not found in cache" is not an error —
/// lookups return `Option` instead.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Cannot reach the inventory API: {message}")]
    Transport { message: String },

    #[error("Server rejected the request (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    #[error("Unexpected response payload: {message}")]
    Decode { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// The message shown to the user, mirroring the envelope's `message`
    /// field where one was received.
    pub fn message(&self) -> &str {
        match self {
            Self::Transport { message }
            | Self::Server { message, .. }
            | Self::Decode { message }
            | Self::Config { message } => message,
        }
    }

    /// Returns `true` if the server reported the target as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Server { status: 404, .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<shelf_api::Error> for CoreError {
    fn from(err: shelf_api::Error) -> Self {
        match err {
            shelf_api::Error::Transport(e) => CoreError::Transport {
                message: e.to_string(),
            },
            shelf_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            shelf_api::Error::Api { status, message } => CoreError::Server { status, message },
            shelf_api::Error::Deserialization { message, body: _ } => {
                CoreError::Decode { message }
            }
            shelf_api::Error::MissingData {
                resource,
                operation,
            } => CoreError::Decode {
                message: format!("no data returned for {operation} {resource}"),
            },
        }
    }
}
