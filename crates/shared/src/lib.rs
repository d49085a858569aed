//! # OpenAPI Online 共有ユーティリティ
//!
//! サーバーとドキュメント生成ツールの双方から使われる共通部品を提供する。
//!
//! ## 設計方針
//!
//! - ドキュメント記述子の組み立て（`openapi-online-docs`）には依存しない
//! - HTTP フレームワーク（axum）への依存は持ち込まない
//! - 外部クレートへの依存は feature で必要な分だけ有効化する

pub mod health;
pub mod observability;

pub use health::HealthResponse;
