// Shared transport configuration for building reqwest::Client instances.
//
// Keeps client construction in one place so the CLI and tests agree on
// timeout and user-agent settings.

use std::time::Duration;

/// Transport settings applied to every request the client issues.
///
/// There is deliberately no per-operation retry or timeout override: each
/// API call is a single request bounded by this one timeout.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("shelfctl/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(client)
    }
}
