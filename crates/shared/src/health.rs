//! # ヘルスチェック共通型
//!
//! `/health` エンドポイントが返すレスポンス型を提供する。

use serde::{Deserialize, Serialize};

/// ヘルスチェックレスポンス
///
/// `status` はサービスの稼働状態、`version` はパッケージ済みバージョンを示す。
///
/// ## 使用例
///
/// ```
/// use openapi_online_shared::HealthResponse;
///
/// let response = HealthResponse::healthy("7.0.0");
/// assert_eq!(response.status, "healthy");
/// assert_eq!(response.version, "7.0.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HealthResponse {
    /// 稼働状態（`"healthy"`）
    pub status:  String,
    /// アプリケーションバージョン
    pub version: String,
}

impl HealthResponse {
    /// 稼働中を示すレスポンスを作成する
    pub fn healthy(version: impl Into<String>) -> Self {
        Self {
            status:  "healthy".to_string(),
            version: version.into(),
        }
    }
}
