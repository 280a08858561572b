//! JSON REST API for the Cordeiro church app.
//!
//! Exposes an axum [`Router`] backed by any [`cordeiro_core::store::ChurchStore`].
//! CORS, tracing and timeouts are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", cordeiro_api::api_router(state))
//! ```

pub mod content;
pub mod error;
pub mod events;
pub mod prayer_requests;
pub mod reading_plan;
pub mod status;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, patch},
};
use cordeiro_core::{content::ChurchContent, store::ChurchStore};

pub use error::ApiError;

/// Shared state threaded through all handlers.
#[derive(Clone)]
pub struct AppState<S> {
  pub store:   Arc<S>,
  pub content: Arc<ChurchContent>,
}

impl<S> AppState<S> {
  pub fn new(store: Arc<S>, content: ChurchContent) -> Self {
    Self { store, content: Arc::new(content) }
  }
}

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: AppState<S>) -> Router<()>
where
  S: ChurchStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/", get(content::root))
    // Status checks
    .route("/status", get(status::list::<S>).post(status::create::<S>))
    // Events
    .route("/events", get(events::list::<S>).post(events::create::<S>))
    .route("/events/next", get(events::next::<S>))
    // Prayer requests
    .route(
      "/prayer-requests",
      get(prayer_requests::list::<S>).post(prayer_requests::submit::<S>),
    )
    .route("/prayer-requests/{id}", get(prayer_requests::get_one::<S>))
    .route("/prayer-requests/{id}/approve", patch(prayer_requests::approve::<S>))
    .route("/prayer-requests/{id}/answer", patch(prayer_requests::answer::<S>))
    // Reading plan
    .route("/reading-plan", get(reading_plan::list::<S>))
    .route("/reading-plan/today", get(reading_plan::today::<S>))
    // Static content
    .route("/ministries", get(content::ministries::<S>))
    .route("/media-links", get(content::media_links::<S>))
    .route("/church-info", get(content::church_info::<S>))
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
