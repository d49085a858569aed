//! # 運用系 HTTP ハンドラ
//!
//! OpenAPI ドキュメントには載せないハンドラを置く。
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `docs`: OpenAPI ドキュメントの配信

pub mod docs;
pub mod health;

pub use docs::openapi_json;
pub use health::health_check;
