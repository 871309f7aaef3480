//! Nexus - Main Entry Point
//!
//! Loads settings and the saved workspace, runs one command against it and
//! writes the workspace back.

mod cli;
mod commands;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use nexus_application::Workspace;
use nexus_domain::WorkbenchSettings;
use nexus_infrastructure::{FileSnapshotStore, ReqwestTransport, SettingsRepository, SystemClock};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

const DEFAULT_LOG_FILTER: &str = "info";

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let settings = load_settings(&cli).await?;
    init_tracing(&settings);

    let store = match cli.snapshot.clone().or_else(|| settings.snapshot_path.clone()) {
        Some(path) => FileSnapshotStore::new(path),
        None => FileSnapshotStore::default_location().context("locating the workspace file")?,
    };
    debug!(path = %store.path().display(), "using workspace file");

    let transport = ReqwestTransport::new(&settings).context("building the HTTP client")?;
    let workspace = Workspace::new(Arc::new(transport), Arc::new(SystemClock::new()));
    workspace
        .load_from(&store)
        .await
        .with_context(|| format!("loading {}", store.path().display()))?;

    let succeeded = commands::run(cli.command, &workspace).await?;

    workspace
        .save_to(&store)
        .await
        .with_context(|| format!("saving {}", store.path().display()))?;

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn load_settings(cli: &Cli) -> Result<WorkbenchSettings> {
    let repository = match &cli.settings {
        Some(path) => SettingsRepository::new(path),
        None => match SettingsRepository::default_location() {
            Ok(repository) => repository,
            Err(_) => return Ok(WorkbenchSettings::default()),
        },
    };

    repository
        .load()
        .await
        .with_context(|| format!("loading settings from {}", repository.path().display()))
}

/// Log filter: `RUST_LOG`, then the settings file, then `info`. Logs go to stderr.
fn init_tracing(settings: &WorkbenchSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            EnvFilter::try_new(settings.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER))
        })
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
