//! # API メタデータハンドラ
//!
//! - `GET /api/info` — タイトル・バージョン・ライセンス等を返す

use std::sync::Arc;

use axum::{Json, extract::State};
use openapi_online_docs::{ApiMetadata, HandlerGroup};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

/// API メタデータレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiInfoResponse {
    pub title:                String,
    pub description:          String,
    pub version:              String,
    pub license:              String,
    pub license_url:          String,
    pub terms_of_service_url: String,
    pub contact_name:         String,
    pub contact_url:          String,
    pub contact_email:        String,
}

impl From<&ApiMetadata> for ApiInfoResponse {
    fn from(metadata: &ApiMetadata) -> Self {
        Self {
            title:                metadata.title.clone(),
            description:          metadata.description.clone(),
            version:              metadata.version.clone(),
            license:              metadata.license.clone(),
            license_url:          metadata.license_url.clone(),
            terms_of_service_url: metadata.terms_of_service_url.clone(),
            contact_name:         metadata.contact.name.clone(),
            contact_url:          metadata.contact.url.clone(),
            contact_email:        metadata.contact.email.clone(),
        }
    }
}

/// API メタデータを取得する
#[utoipa::path(
   get,
   path = "/api/info",
   tag = "info",
   responses(
      (status = 200, description = "API メタデータ", body = ApiInfoResponse)
   )
)]
pub async fn get_api_info(State(state): State<Arc<AppState>>) -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse::from(&state.metadata))
}

#[derive(utoipa::OpenApi)]
#[openapi(
   paths(get_api_info),
   components(schemas(ApiInfoResponse)),
   tags((name = "info", description = "API メタデータ"))
)]
pub struct InfoApi;

/// このモジュールのハンドラグループ
pub fn handler_group() -> HandlerGroup {
    HandlerGroup::of::<InfoApi>(module_path!())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_メタデータからレスポンスに変換できる() {
        let metadata = ApiMetadata::with_version("7.0.0");

        let response = ApiInfoResponse::from(&metadata);

        assert_eq!(response.title, "OpenAPI Generator Online");
        assert_eq!(response.version, "7.0.0");
        assert_eq!(response.license, "Apache 2.0");
        assert_eq!(response.contact_email, "");
    }

    #[test]
    fn test_ハンドラグループは選択規則の配下にある() {
        assert_eq!(handler_group().module_path(), "openapi_online::api::info");
    }
}
