//! Handlers for `/status`.

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use cordeiro_core::{
  status::{STATUS_LIST_LIMIT, StatusCheck},
  store::ChurchStore,
};
use serde::Deserialize;

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub client_name: String,
}

/// `POST /status`, body: `{"client_name":"..."}`
pub async fn create<S>(
  State(state): State<AppState<S>>,
  body: Result<Json<CreateBody>, JsonRejection>,
) -> Result<Json<StatusCheck>, ApiError>
where
  S: ChurchStore,
{
  let Json(body) = body?;
  let check = StatusCheck::new(body.client_name)?;
  state.store.insert_status_check(&check).await.map_err(ApiError::store)?;
  Ok(Json(check))
}

/// `GET /status`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<StatusCheck>>, ApiError>
where
  S: ChurchStore,
{
  let checks = state
    .store
    .list_status_checks(STATUS_LIST_LIMIT)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(checks))
}
