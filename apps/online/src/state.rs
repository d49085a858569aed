//! # ハンドラ共有 State

use openapi_online_docs::ApiMetadata;
use utoipa::openapi::OpenApi;

/// 起動時に一度だけ組み立て、以降は読み取り専用で共有する
#[derive(Clone)]
pub struct AppState {
    /// API メタデータ
    pub metadata: ApiMetadata,
    /// 描画済み OpenAPI ドキュメント
    pub openapi:  OpenApi,
}
