//! The `ChurchStore` trait and supporting query types.
//!
//! The trait is the document-store contract: insert, filtered find, single
//! lookup and filtered update per collection. It is implemented by storage
//! backends (e.g. `cordeiro-store-sqlite`). Higher layers (`cordeiro-api`,
//! `cordeiro-server`) depend on this abstraction, not on any concrete backend.

use std::future::Future;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
  event::Event,
  prayer::{PrayerPatch, PrayerRequest},
  reading::ReadingPlanEntry,
  status::StatusCheck,
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`ChurchStore::find_prayer_requests`].
///
/// Results are always ordered by `created_at`, newest first.
#[derive(Debug, Clone, Default)]
pub struct PrayerQuery {
  pub is_public:   Option<bool>,
  pub is_approved: Option<bool>,
  pub limit:       Option<usize>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a church document store backend.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait ChurchStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Prayer requests ───────────────────────────────────────────────────

  /// Persist a fully-built prayer request.
  fn insert_prayer_request<'a>(
    &'a self,
    request: &'a PrayerRequest,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Return the requests matching `query`, newest first.
  fn find_prayer_requests<'a>(
    &'a self,
    query: &'a PrayerQuery,
  ) -> impl Future<Output = Result<Vec<PrayerRequest>, Self::Error>> + Send + 'a;

  /// Retrieve a request by id. Returns `None` if not found.
  fn get_prayer_request(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<PrayerRequest>, Self::Error>> + Send + '_;

  /// Apply `patch` to the request with the given id.
  ///
  /// Returns the number of records the id *matched*, whether or not any
  /// field actually changed. Zero means the id does not exist.
  fn update_prayer_request(
    &self,
    id: Uuid,
    patch: PrayerPatch,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  // ── Events ────────────────────────────────────────────────────────────

  fn insert_event<'a>(
    &'a self,
    event: &'a Event,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// All events ordered by date, earliest first, capped at `limit`.
  fn list_events(
    &self,
    limit: usize,
  ) -> impl Future<Output = Result<Vec<Event>, Self::Error>> + Send + '_;

  /// The earliest event whose date is at or after `after`.
  fn next_event(
    &self,
    after: DateTime<Utc>,
  ) -> impl Future<Output = Result<Option<Event>, Self::Error>> + Send + '_;

  fn find_event_by_title<'a>(
    &'a self,
    title: &'a str,
  ) -> impl Future<Output = Result<Option<Event>, Self::Error>> + Send + 'a;

  // ── Reading plan ──────────────────────────────────────────────────────

  fn insert_reading<'a>(
    &'a self,
    entry: &'a ReadingPlanEntry,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Plan entries ordered by day, capped at `limit`.
  fn list_reading_plan(
    &self,
    limit: usize,
  ) -> impl Future<Output = Result<Vec<ReadingPlanEntry>, Self::Error>> + Send + '_;

  fn reading_for_day(
    &self,
    day: u16,
  ) -> impl Future<Output = Result<Option<ReadingPlanEntry>, Self::Error>> + Send + '_;

  // ── Status checks ─────────────────────────────────────────────────────

  fn insert_status_check<'a>(
    &'a self,
    check: &'a StatusCheck,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  fn list_status_checks(
    &self,
    limit: usize,
  ) -> impl Future<Output = Result<Vec<StatusCheck>, Self::Error>> + Send + '_;
}
