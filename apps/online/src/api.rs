//! # ドキュメント化対象の API
//!
//! このモジュール配下のハンドラだけが OpenAPI ドキュメントに載る。
//!
//! ## ハンドラ一覧
//!
//! - `info`: API メタデータの取得

pub mod info;

pub use info::{ApiInfoResponse, get_api_info};
