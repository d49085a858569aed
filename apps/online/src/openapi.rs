//! # OpenAPI ドキュメント描画
//!
//! アプリケーションの全ハンドラグループを [`UtoipaSink`] に登録し、
//! 記述子の選択規則に従って OpenAPI ドキュメントを描画する。
//! ドキュメントに載るかどうかはここではなく選択規則が決める。

use openapi_online_docs::{DocumentationDescriptor, DocumentationSink, HandlerGroup, UtoipaSink};
use utoipa::openapi::OpenApi;

use crate::{api, handler};

/// アプリケーションの全ハンドラグループ
pub fn handler_groups() -> Vec<HandlerGroup> {
    vec![api::info::handler_group(), handler::health::handler_group()]
}

/// 記述子から OpenAPI ドキュメントを描画する
pub fn render(descriptor: &DocumentationDescriptor) -> OpenApi {
    UtoipaSink::new(handler_groups()).render(descriptor)
}
