//! Handlers for `/events` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/events` | Earliest first, at most 100 |
//! | `POST` | `/events` | Body: [`NewEvent`]; `location` defaults to the church |
//! | `GET`  | `/events/next` | First event from now on, or `null` |

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use chrono::Utc;
use cordeiro_core::{
  event::{EVENT_LIST_LIMIT, Event, NewEvent},
  store::ChurchStore,
};

use crate::{AppState, error::ApiError};

/// `GET /events`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<Json<Vec<Event>>, ApiError>
where
  S: ChurchStore,
{
  let events = state
    .store
    .list_events(EVENT_LIST_LIMIT)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(events))
}

/// `POST /events`: returns the stored event.
pub async fn create<S>(
  State(state): State<AppState<S>>,
  body: Result<Json<NewEvent>, JsonRejection>,
) -> Result<Json<Event>, ApiError>
where
  S: ChurchStore,
{
  let Json(body) = body?;
  body.validate()?;
  let event = Event::from_new(body);
  state.store.insert_event(&event).await.map_err(ApiError::store)?;
  Ok(Json(event))
}

/// `GET /events/next`
pub async fn next<S>(State(state): State<AppState<S>>) -> Result<Json<Option<Event>>, ApiError>
where
  S: ChurchStore,
{
  let event = state
    .store
    .next_event(Utc::now())
    .await
    .map_err(ApiError::store)?;
  Ok(Json(event))
}
