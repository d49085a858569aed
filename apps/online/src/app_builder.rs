//! # アプリケーション構築
//!
//! 記述子から State を組み立て、ルーターを構築する。
//! `main.rs` は設定の読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, routing::get};
use openapi_online_docs::DocumentationDescriptor;
use tower_http::trace::TraceLayer;

use crate::{
    api::get_api_info,
    handler::{health_check, openapi_json},
    openapi,
    state::AppState,
};

/// OpenAPI ドキュメントの配信パス
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// ルーターを構築する
///
/// OpenAPI ドキュメントはここで一度だけ描画する。
pub fn build_app(descriptor: &DocumentationDescriptor) -> Router {
    let state = Arc::new(AppState {
        metadata: descriptor.metadata().clone(),
        openapi:  openapi::render(descriptor),
    });

    Router::new()
        .route("/health", get(health_check))
        .route("/api/info", get(get_api_info))
        .route(OPENAPI_JSON_PATH, get(openapi_json))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
