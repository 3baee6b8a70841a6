mod cli;
mod commands;
mod error;
mod output;
mod validate;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use shelf_api::{ApiClient, TransportConfig};
use shelf_core::{Inventory, SyncPolicy};

use crate::cli::{Cli, Command, GlobalOpts, OutputFormat};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(mut cli: Cli) -> Result<(), CliError> {
    if cli.global.output.is_none() {
        let cfg = shelf_config::load_config_or_default();
        cli.global.output = Some(output_from_config(&cfg.output));
    }

    match cli.command {
        // Config commands don't need an API connection
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "shelfctl", &mut std::io::stdout());
            Ok(())
        }

        // Entity commands talk to the backend through an Inventory
        cmd => {
            let inventory = build_inventory(&cli.global)?;

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &inventory, &cli.global).await
        }
    }
}

fn output_from_config(value: &str) -> OutputFormat {
    match value {
        "json" => OutputFormat::Json,
        "json-compact" => OutputFormat::JsonCompact,
        "yaml" => OutputFormat::Yaml,
        "plain" => OutputFormat::Plain,
        _ => OutputFormat::Table,
    }
}

/// Build an [`Inventory`] from the config file merged with CLI overrides.
fn build_inventory(global: &GlobalOpts) -> Result<Inventory, CliError> {
    let mut cfg = shelf_config::load_config_or_default();

    // CLI flags and env vars win over the config file.
    if let Some(url) = &global.base_url {
        cfg.base_url = Some(url.clone());
    }
    if let Some(policy) = &global.sync_policy {
        cfg.sync_policy = policy.clone();
    }
    if let Some(timeout) = global.timeout {
        cfg.timeout = timeout;
    }

    let base_url = shelf_config::resolve_base_url(&cfg)?;
    let policy: SyncPolicy = shelf_config::resolve_sync_policy(&cfg)?;

    let transport = TransportConfig {
        timeout: Duration::from_secs(cfg.timeout),
    };
    let client = ApiClient::new(base_url.as_str(), &transport).map_err(|e| CliError::Config {
        message: format!("failed to build HTTP client: {e}"),
    })?;

    Ok(Inventory::new(Arc::new(client), policy))
}
