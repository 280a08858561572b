//! Handlers for `/reading-plan` endpoints.

use axum::{Json, extract::State};
use chrono::Utc;
use cordeiro_core::{
  reading::{READING_PLAN_LIMIT, ReadingPlanEntry, plan_day},
  store::ChurchStore,
};

use crate::{AppState, error::ApiError};

/// `GET /reading-plan`: the whole plan, ordered by day.
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<ReadingPlanEntry>>, ApiError>
where
  S: ChurchStore,
{
  let plan = state
    .store
    .list_reading_plan(READING_PLAN_LIMIT)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(plan))
}

/// `GET /reading-plan/today`: the entry for today's day of the year (UTC),
/// or `null`.
pub async fn today<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Option<ReadingPlanEntry>>, ApiError>
where
  S: ChurchStore,
{
  let entry = state
    .store
    .reading_for_day(plan_day(Utc::now()))
    .await
    .map_err(ApiError::store)?;
  Ok(Json(entry))
}
