//! Handlers for `/prayer-requests` endpoints.
//!
//! | Method  | Path | Notes |
//! |---------|------|-------|
//! | `GET`   | `/prayer-requests` | Public + approved only, newest first, at most 100 |
//! | `POST`  | `/prayer-requests` | Body: `{"name","message","is_public"?}` |
//! | `GET`   | `/prayer-requests/:id` | 404 if not found |
//! | `PATCH` | `/prayer-requests/:id/approve` | Moderation; idempotent |
//! | `PATCH` | `/prayer-requests/:id/answer` | `?testimony=...` or body `{"testimony":"..."}` |

use axum::{
  Json,
  body::Bytes,
  extract::{Path, Query, State, rejection::JsonRejection},
};
use cordeiro_core::{
  prayer::{NewPrayerRequest, PrayerRequest, PrayerService},
  store::ChurchStore,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AppState, error::ApiError};

/// `{"message": "..."}` confirmation returned by the moderation endpoints.
#[derive(Debug, Serialize)]
pub struct Confirmation {
  pub message: &'static str,
}

/// Ids that are not UUIDs cannot exist, so they are reported as not found.
fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
  Uuid::parse_str(raw)
    .map_err(|_| ApiError::NotFound(format!("prayer request not found: {raw}")))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /prayer-requests`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<PrayerRequest>>, ApiError>
where
  S: ChurchStore,
{
  let requests = PrayerService::new(&*state.store).list_public_approved().await?;
  Ok(Json(requests))
}

// ─── Submit ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SubmitBody {
  pub name:      String,
  pub message:   String,
  #[serde(default = "default_public")]
  pub is_public: bool,
}

fn default_public() -> bool { true }

/// `POST /prayer-requests`: returns the stored request.
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  body: Result<Json<SubmitBody>, JsonRejection>,
) -> Result<Json<PrayerRequest>, ApiError>
where
  S: ChurchStore,
{
  let Json(body) = body?;
  let input = NewPrayerRequest::new(body.name, body.message, body.is_public)?;
  let request = PrayerService::new(&*state.store).submit(input).await?;
  tracing::debug!(id = %request.id, is_public = request.is_public, "prayer request submitted");
  Ok(Json(request))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /prayer-requests/:id`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
) -> Result<Json<PrayerRequest>, ApiError>
where
  S: ChurchStore,
{
  let id = parse_id(&id)?;
  let request = PrayerService::new(&*state.store).get(id).await?;
  Ok(Json(request))
}

// ─── Approve ──────────────────────────────────────────────────────────────────

/// `PATCH /prayer-requests/:id/approve`
pub async fn approve<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
) -> Result<Json<Confirmation>, ApiError>
where
  S: ChurchStore,
{
  let id = parse_id(&id)?;
  PrayerService::new(&*state.store).approve(id).await?;
  tracing::info!(%id, "prayer request approved");
  Ok(Json(Confirmation { message: "Request approved" }))
}

// ─── Answer ───────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct AnswerParams {
  pub testimony: Option<String>,
}

/// `PATCH /prayer-requests/:id/answer?testimony=...`
///
/// The testimony may also be sent as a JSON body; the query parameter wins
/// when both are present.
pub async fn answer<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
  Query(params): Query<AnswerParams>,
  body: Bytes,
) -> Result<Json<Confirmation>, ApiError>
where
  S: ChurchStore,
{
  let id = parse_id(&id)?;

  let testimony = match params.testimony {
    Some(t) => t,
    None if !body.is_empty() => serde_json::from_slice::<AnswerParams>(&body)
      .map_err(|e| ApiError::Unprocessable(format!("invalid body: {e}")))?
      .testimony
      .ok_or_else(|| ApiError::Unprocessable("testimony is required".into()))?,
    None => return Err(ApiError::Unprocessable("testimony is required".into())),
  };

  PrayerService::new(&*state.store).answer(id, testimony).await?;
  tracing::info!(%id, "prayer request answered");
  Ok(Json(Confirmation { message: "Prayer answered" }))
}
