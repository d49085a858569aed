//! # OpenAPI Online ドキュメント記述子
//!
//! OpenAPI ドキュメント生成に渡す記述子（メタデータ・ハンドラ選択規則・
//! 型の置き換え・ホスト上書き）を組み立てる。
//!
//! ## モジュール構成
//!
//! - `builder`: 記述子ビルダー（起動時に一度だけ呼ぶ）
//! - `config`: ビルダーの設定（`GENERATOR_HOST`）
//! - `descriptor`: 記述子と選択規則・型マーカー
//! - `host_override`: `GENERATOR_HOST` の解釈
//! - `metadata`: API メタデータの固定文言
//! - `openapi`: utoipa による描画
//! - `resource`: パッケージ済みリソースの読み込み
//! - `sink`: 描画側との境界トレイト
//! - `uri`: RFC 3986 に沿った URI 参照の分解
//! - `version_info` / `properties`: `version.properties` の読み取り

pub mod builder;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod host_override;
pub mod metadata;
pub mod openapi;
pub mod properties;
pub mod resource;
pub mod sink;
pub mod uri;
pub mod version_info;

pub use builder::{API_BASE_PATH, DocumentationDescriptorBuilder, VERSION_RESOURCE};
pub use config::{DocsConfig, GENERATOR_HOST_ENV};
pub use descriptor::{
    DocumentationDescriptor,
    DocumentationType,
    SelectionRule,
    TypeMarker,
    TypeSubstitution,
};
pub use error::{DocsError, UriError};
pub use host_override::HostOverride;
pub use metadata::{ApiMetadata, Contact};
pub use openapi::{HandlerGroup, UtoipaSink};
pub use resource::{EmbeddedResources, FsResourceLoader, ResourceLoader};
pub use sink::DocumentationSink;
pub use version_info::{UNKNOWN_VERSION, VersionInfo};
