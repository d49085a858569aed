//! # OpenAPI Online サーバーライブラリ
//!
//! ドキュメント記述子から OpenAPI ドキュメントを描画し、HTTP で公開する。
//!
//! ## モジュール構成
//!
//! - `api`: ドキュメント化対象のハンドラ（選択規則 `openapi_online::api` の配下）
//! - `app_builder`: ルーター構築
//! - `handler`: ドキュメント化しない運用系ハンドラ（ヘルスチェック、ドキュメント配信）
//! - `openapi`: ハンドラグループの登録と描画
//! - `resources`: パッケージ済みリソース
//! - `state`: ハンドラ共有の State

pub mod api;
pub mod app_builder;
pub mod handler;
pub mod openapi;
pub mod resources;
pub mod state;
