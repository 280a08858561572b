//! HTTP server assembly for the Cordeiro church backend.
//!
//! Loads [`ServerConfig`], wraps the [`cordeiro_api`] router in the
//! cross-cutting layers (CORS, request tracing, timeouts) and seeds a fresh
//! store with sample data.

pub mod seed;

use std::{path::{Path, PathBuf}, time::Duration};

use axum::{Router, http::StatusCode};
use config::{ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use cordeiro_api::AppState;
use cordeiro_core::{content::ChurchContent, store::ChurchStore};
use serde::Deserialize;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `CORDEIRO_*` environment variables.
#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
  pub host:                 String,
  pub port:                 u16,
  pub store_path:           PathBuf,
  pub request_timeout_secs: u64,
  /// Insert sample events and a starter reading plan on startup.
  pub seed:                 bool,
  /// Static ministries, contact info and media links.
  #[serde(default)]
  pub content:              ChurchContent,
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
  config::Config::builder()
    .set_default("host", "0.0.0.0")?
    .set_default("port", 8001)?
    .set_default("store_path", "cordeiro.db")?
    .set_default("request_timeout_secs", 30)?
    .set_default("seed", true)
}

/// `CORDEIRO_*` variables. Nested keys use `__`, e.g.
/// `CORDEIRO_CONTENT__CHURCH__PHONE`.
fn environment() -> Environment {
  Environment::with_prefix("CORDEIRO")
    .prefix_separator("_")
    .separator("__")
}

/// Layer the optional TOML file at `path` and the environment over the
/// built-in defaults.
pub fn load_config(path: &Path) -> Result<ServerConfig, ConfigError> {
  with_defaults()?
    .add_source(File::from(path).required(false))
    .add_source(environment())
    .build()?
    .try_deserialize()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Mount the API under `/api` with CORS open to any origin, per-request
/// tracing and a request timeout.
pub fn app<S>(state: AppState<S>, request_timeout: Duration) -> Router
where
  S: ChurchStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .nest("/api", cordeiro_api::api_router(state))
    .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, request_timeout))
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
}
