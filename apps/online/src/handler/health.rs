//! # ヘルスチェックハンドラ
//!
//! - `/health` — Liveness Check（常に `"healthy"` を返す）
//!
//! ハンドラ自体は utoipa で注釈しているが、選択規則の対象外のため
//! 公開ドキュメントには含まれない。

use std::sync::Arc;

use axum::{Json, extract::State};
use openapi_online_docs::HandlerGroup;
use openapi_online_shared::HealthResponse;

use crate::state::AppState;

/// ヘルスチェックエンドポイント
///
/// バージョンはパッケージ済みの `version.properties` から解決したもの。
#[utoipa::path(
   get,
   path = "/health",
   tag = "health",
   responses(
      (status = 200, description = "サーバー稼働中", body = HealthResponse)
   )
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.metadata.version.as_str()))
}

#[derive(utoipa::OpenApi)]
#[openapi(paths(health_check), components(schemas(HealthResponse)))]
pub struct HealthApi;

pub fn handler_group() -> HandlerGroup {
    HandlerGroup::of::<HealthApi>(module_path!())
}
