//! Config subcommand handlers.

use std::fmt::Write;

use shelf_config::{self as config, Config};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

fn format_config(cfg: &Config) -> String {
    let mut out = String::new();
    match &cfg.base_url {
        Some(url) => {
            let _ = writeln!(out, "base_url = \"{url}\"");
        }
        None => {
            let _ = writeln!(out, "# base_url not set");
        }
    }
    let _ = writeln!(out, "timeout = {}", cfg.timeout);
    let _ = writeln!(out, "sync_policy = \"{}\"", cfg.sync_policy);
    let _ = write!(out, "output = \"{}\"", cfg.output);
    out
}

fn save_config(cfg: &Config) -> Result<(), CliError> {
    config::save_config(cfg)?;
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let out =
                output::render_single(global.output(), &cfg, format_config, |_| "config".into());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }

        ConfigCommand::Set {
            base_url,
            sync_policy,
            output: output_format,
            timeout,
        } => {
            let mut cfg = config::load_config_or_default();
            let mut changed = Vec::new();

            if let Some(url) = base_url {
                url.parse::<url::Url>().map_err(|_| CliError::Validation {
                    field: "base_url",
                    reason: format!("invalid URL: {url}"),
                })?;
                cfg.base_url = Some(url);
                changed.push("base_url");
            }
            if let Some(policy) = sync_policy {
                if !matches!(policy.as_str(), "local-merge" | "refetch") {
                    return Err(CliError::Validation {
                        field: "sync_policy",
                        reason: format!("expected 'local-merge' or 'refetch', got '{policy}'"),
                    });
                }
                cfg.sync_policy = policy;
                changed.push("sync_policy");
            }
            if let Some(format) = output_format {
                if !matches!(
                    format.as_str(),
                    "table" | "json" | "json-compact" | "yaml" | "plain"
                ) {
                    return Err(CliError::Validation {
                        field: "output",
                        reason: format!("unknown output format '{format}'"),
                    });
                }
                cfg.output = format;
                changed.push("output");
            }
            if let Some(secs) = timeout {
                if secs == 0 {
                    return Err(CliError::Validation {
                        field: "timeout",
                        reason: "must be at least 1 second".into(),
                    });
                }
                cfg.timeout = secs;
                changed.push("timeout");
            }

            if changed.is_empty() {
                return Err(CliError::Validation {
                    field: "set",
                    reason: "nothing to set; pass --base-url, --sync-policy, --output, \
                             or --timeout"
                        .into(),
                });
            }

            save_config(&cfg)?;
            if !global.quiet {
                eprintln!("Updated {} in {}", changed.join(", "), config::config_path().display());
            }
            Ok(())
        }
    }
}
