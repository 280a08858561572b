//! cordeiro-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`) plus
//! `CORDEIRO_*` environment variables, opens the SQLite store, seeds it and
//! serves the JSON API over HTTP under `/api`.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
  time::Duration,
};

use anyhow::Context as _;
use chrono::Utc;
use clap::Parser;
use cordeiro_api::AppState;
use cordeiro_server::{load_config, seed::seed};
use cordeiro_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "PIB do Cordeiro church API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Skip inserting sample events and the starter reading plan.
  #[arg(long)]
  no_seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = load_config(&cli.config).context("failed to load configuration")?;

  // Expand `~` in store path.
  let store_path = expand_tilde(&server_cfg.store_path);

  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  if server_cfg.seed && !cli.no_seed {
    let report = seed(&store, Utc::now()).await.context("failed to seed store")?;
    tracing::info!(events = report.events, readings = report.readings, "seeded store");
  }

  let state = AppState::new(Arc::new(store), server_cfg.content.clone());
  let app = cordeiro_server::app(state, Duration::from_secs(server_cfg.request_timeout_secs));
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}/api");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  tracing::info!("server stopped");
  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = tokio::signal::ctrl_c();
  #[cfg(unix)]
  {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
      Ok(mut sigterm) => tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = sigterm.recv() => tracing::info!("received SIGTERM, shutting down"),
      },
      Err(e) => {
        tracing::warn!(error = %e, "cannot listen for SIGTERM");
        ctrl_c.await.ok();
        tracing::info!("received Ctrl+C, shutting down");
      }
    }
  }
  #[cfg(not(unix))]
  {
    ctrl_c.await.ok();
    tracing::info!("received Ctrl+C, shutting down");
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
