//! # OpenAPI ドキュメント配信
//!
//! - `/api-docs/openapi.json` — 起動時に描画したドキュメントを返す

use std::sync::Arc;

use axum::{Json, extract::State};
use utoipa::openapi::OpenApi;

use crate::state::AppState;

pub async fn openapi_json(State(state): State<Arc<AppState>>) -> Json<OpenApi> {
    Json(state.openapi.clone())
}
