//! Toolgate - main entry point.
//!
//! Subcommands:
//! - `serve`: load the registry and serve the lookup gateway
//! - `build-manual`: survey a list of tools via `-h` and persist the snapshot
//! - `convert-schema`: re-key a list-form descriptor file by tool name

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use toolgate::exec::ExecutionEngine;
use toolgate::manual::{read_command_list, ManualBuilder};
use toolgate::registry::{list_to_mapping, Registry};
use toolgate::types::ExecutionConfig;
use toolgate::Config;

#[derive(Debug, Parser)]
#[command(
    name = "toolgate",
    version,
    about = "Command-line tool catalog gateway and manual harness"
)]
struct Cli {
    /// Configuration file (JSON); defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Serve the lookup gateway over the loaded registry.
    Serve,

    /// Survey tools via their help output and persist the snapshot.
    BuildManual {
        /// File with one bare tool name per line (`#` comments allowed).
        #[arg(long)]
        commands: PathBuf,

        /// Snapshot output path (defaults to the configured path).
        #[arg(long)]
        output: Option<PathBuf>,

        /// Per-command deadline in seconds (defaults to the configured value).
        #[arg(long)]
        timeout_secs: Option<u64>,
    },

    /// Convert a list-form descriptor file into the mapping form the
    /// registry loads.
    ConvertSchema {
        #[arg(long)]
        input: PathBuf,

        #[arg(long)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    // Initialize observability
    toolgate::observability::init_tracing();

    match cli.command {
        Commands::Serve => serve(&config).await,
        Commands::BuildManual {
            commands,
            output,
            timeout_secs,
        } => build_manual(&config, &commands, output, timeout_secs).await,
        Commands::ConvertSchema { input, output } => convert_schema(&input, &output),
    }
}

async fn serve(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    // Fail fast: a schema violation aborts startup, never individual requests.
    let registry = Registry::load(&config.registry.schema_path)?;

    tracing::info!(
        "🚀 Toolgate gateway starting on {} ({} tools from {})",
        config.server.listen_addr,
        registry.len(),
        config.registry.schema_path.display(),
    );

    let app = toolgate::gateway::router(Arc::new(registry));
    let listener = tokio::net::TcpListener::bind(&config.server.listen_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => tracing::error!("cannot listen for shutdown signal: {}", e),
    }
}

async fn build_manual(
    config: &Config,
    commands: &Path,
    output: Option<PathBuf>,
    timeout_secs: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let names = read_command_list(commands)?;
    let timeout = timeout_secs
        .map(Duration::from_secs)
        .unwrap_or(config.manual.command_timeout);
    let output_path = output.unwrap_or_else(|| config.manual.output_path.clone());

    tracing::info!(
        "surveying {} tools (timeout {:?} per command)",
        names.len(),
        timeout,
    );

    let engine = ExecutionEngine::new(&ExecutionConfig {
        default_timeout: timeout,
    });
    let builder = ManualBuilder::new(engine, timeout);

    // Ctrl-c aborts the remaining queue; recorded entries are still persisted.
    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received; aborting remaining queue");
            signal_cancel.cancel();
        }
    });

    let store = builder.build_with_cancel(&names, &cancel).await;
    store.save(&output_path)?;

    tracing::info!(
        "manual snapshot written to {} ({} of {} commands recorded)",
        output_path.display(),
        store.len(),
        names.len(),
    );
    Ok(())
}

fn convert_schema(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(input)?;
    let mapping = list_to_mapping(&raw)?;
    std::fs::write(output, mapping)?;
    tracing::info!("schema written to {}", output.display());
    Ok(())
}
