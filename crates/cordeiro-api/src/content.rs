//! Handlers for the static content endpoints. None of these touch the store.

use axum::{Json, extract::State};
use cordeiro_core::{
  content::{ChurchInfo, MediaLinks, Ministry},
  store::ChurchStore,
};
use serde_json::{Value, json};

use crate::AppState;

/// `GET /`
pub async fn root() -> Json<Value> { Json(json!({ "message": "PIB do Cordeiro API" })) }

/// `GET /ministries`
pub async fn ministries<S>(State(state): State<AppState<S>>) -> Json<Vec<Ministry>>
where
  S: ChurchStore,
{
  Json(state.content.ministries.clone())
}

/// `GET /church-info`
pub async fn church_info<S>(State(state): State<AppState<S>>) -> Json<ChurchInfo>
where
  S: ChurchStore,
{
  Json(state.content.church.clone())
}

/// `GET /media-links`
pub async fn media_links<S>(State(state): State<AppState<S>>) -> Json<MediaLinks>
where
  S: ChurchStore,
{
  Json(state.content.media.clone())
}
