//! Configuration for shelfctl.
//!
//! A single TOML file plus `SHELF_`-prefixed environment variables,
//! merged via figment. The one setting every consumer needs is
//! `base_url` — it is shared by all entity clients and resolved once at
//! startup. A missing or unparseable base URL is a hard error rather
//! than a request aimed at an empty host.

use std::path::PathBuf;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use shelf_core::SyncPolicy;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no base URL configured (set SHELF_BASE_URL or base_url in {path})")]
    NoBaseUrl { path: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config struct ──────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Base URL of the inventory API (e.g. "http://localhost:4000/api").
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Cache synchronization after mutations: "local-merge" or "refetch".
    #[serde(default = "default_sync_policy")]
    pub sync_policy: String,

    /// Default output format for the CLI.
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: default_timeout(),
            sync_policy: default_sync_policy(),
            output: default_output(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}
fn default_sync_policy() -> String {
    "local-merge".into()
}
fn default_output() -> String {
    "table".into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("dev", "shelfctl", "shelfctl").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("shelfctl");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    let path = config_path();

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("SHELF_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning the defaults if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Resolution helpers ──────────────────────────────────────────────

/// Validate and parse the configured base URL; absence is an error.
pub fn resolve_base_url(cfg: &Config) -> Result<Url, ConfigError> {
    let raw = cfg
        .base_url
        .as_deref()
        .ok_or_else(|| ConfigError::NoBaseUrl {
            path: config_path().display().to_string(),
        })?;

    raw.parse().map_err(|_| ConfigError::Validation {
        field: "base_url".into(),
        reason: format!("invalid URL: {raw}"),
    })
}

/// Map the configured policy string onto a [`SyncPolicy`].
pub fn resolve_sync_policy(cfg: &Config) -> Result<SyncPolicy, ConfigError> {
    match cfg.sync_policy.as_str() {
        "local-merge" => Ok(SyncPolicy::LocalMerge),
        "refetch" => Ok(SyncPolicy::Refetch),
        other => Err(ConfigError::Validation {
            field: "sync_policy".into(),
            reason: format!("expected 'local-merge' or 'refetch', got '{other}'"),
        }),
    }
}
