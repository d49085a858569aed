//! # ドキュメント記述子ビルダー
//!
//! 起動時に一度だけ呼ばれ、ドキュメント生成側へ渡す記述子を組み立てる。
//!
//! ## 入力
//!
//! - パッケージ済みリソース `version.properties`（読めなければ `"unknown"`、ログなし）
//! - [`DocsConfig::host_override`]（不正なら warn ログを出して無視）
//!
//! ## 使用例
//!
//! ```
//! use openapi_online_docs::{DocsConfig, DocumentationDescriptorBuilder, EmbeddedResources};
//!
//! static RESOURCES: EmbeddedResources =
//!     EmbeddedResources::new(&[("version.properties", "version=7.0.0")]);
//!
//! let builder = DocumentationDescriptorBuilder::new(
//!     DocsConfig::with_host_override("https://api.example.com:8443/gen"),
//!     RESOURCES,
//! );
//! let descriptor = builder.build_descriptor();
//!
//! assert_eq!(descriptor.metadata().version, "7.0.0");
//! assert_eq!(descriptor.host(), Some("api.example.com:8443"));
//! assert_eq!(descriptor.path_mapping(), Some("/gen"));
//! ```

use std::sync::Arc;

use crate::{
    config::DocsConfig,
    descriptor::{DocumentationDescriptor, SelectionRule, TypeMarker, TypeSubstitution},
    error::DocsError,
    host_override::HostOverride,
    metadata::ApiMetadata,
    resource::ResourceLoader,
    version_info::VersionInfo,
};

/// ドキュメント化するハンドラの基底モジュールパス
pub const API_BASE_PATH: &str = "openapi_online::api";

/// バージョン情報リソース名
pub const VERSION_RESOURCE: &str = "version.properties";

/// ドキュメント記述子ビルダー
///
/// 状態を持たないため、複数スレッドから同時に呼び出してよい。
#[derive(Clone)]
pub struct DocumentationDescriptorBuilder {
    config:    DocsConfig,
    resources: Arc<dyn ResourceLoader>,
}

impl DocumentationDescriptorBuilder {
    pub fn new(config: DocsConfig, resources: impl ResourceLoader + 'static) -> Self {
        Self {
            config,
            resources: Arc::new(resources),
        }
    }

    pub fn config(&self) -> &DocsConfig {
        &self.config
    }

    /// API メタデータを組み立てる
    ///
    /// リソースの読み込み失敗は握りつぶし、バージョンを `"unknown"` にする。
    pub fn build_api_metadata(&self) -> ApiMetadata {
        let version = self.load_version_info().unwrap_or_default();
        ApiMetadata::with_version(version.into_version())
    }

    /// ドキュメント記述子を組み立てる
    pub fn build_descriptor(&self) -> DocumentationDescriptor {
        let mut descriptor = DocumentationDescriptor::new(
            self.build_api_metadata(),
            SelectionRule::base_path(API_BASE_PATH),
        )
        .for_code_generation(true)
        .direct_substitute(TypeSubstitution::of::<chrono::NaiveDate, time::Date>())
        .direct_substitute(TypeSubstitution::of::<
            chrono::DateTime<chrono::FixedOffset>,
            std::time::SystemTime,
        >())
        .direct_substitute(TypeSubstitution::of::<
            serde_json::Value,
            serde_json::Map<String, serde_json::Value>,
        >())
        .ignored_parameter_type(TypeMarker::of::<dyn ResourceLoader>())
        .ignored_parameter_type(TypeMarker::of::<dyn std::io::Read>());

        let host_override = HostOverride::resolve(self.config.host_override.as_deref());
        if let Some(host_override) = &host_override {
            descriptor.apply_host_override(host_override);
        }

        tracing::debug!(
            version = %descriptor.metadata().version,
            host_override = host_override.is_some(),
            "ドキュメント記述子を組み立てました"
        );

        descriptor
    }

    fn load_version_info(&self) -> Result<VersionInfo, DocsError> {
        let contents = self
            .resources
            .load(VERSION_RESOURCE)
            .map_err(|source| DocsError::ResourceRead {
                name: VERSION_RESOURCE.to_string(),
                source,
            })?;
        Ok(contents.map_or_else(VersionInfo::default, |text| VersionInfo::parse(&text)))
    }
}

impl std::fmt::Debug for DocumentationDescriptorBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentationDescriptorBuilder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use pretty_assertions::assert_eq;

    use super::*;

    fn version_resource(text: &'static str) -> impl ResourceLoader {
        move |name: &str| -> io::Result<Option<String>> {
            Ok((name == VERSION_RESOURCE).then(|| text.to_string()))
        }
    }

    fn missing_resource(_name: &str) -> io::Result<Option<String>> {
        Ok(None)
    }

    fn unreadable_resource(_name: &str) -> io::Result<Option<String>> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
    }

    #[test]
    fn test_リソースのversionがメタデータに入る() {
        let builder =
            DocumentationDescriptorBuilder::new(DocsConfig::default(), version_resource("version=7.0.0"));

        assert_eq!(builder.build_api_metadata().version, "7.0.0");
    }

    #[test]
    fn test_リソースがなければunknown() {
        let builder = DocumentationDescriptorBuilder::new(DocsConfig::default(), missing_resource);

        assert_eq!(builder.build_api_metadata().version, "unknown");
    }

    #[test]
    fn test_リソースが読めなければunknown() {
        let builder = DocumentationDescriptorBuilder::new(DocsConfig::default(), unreadable_resource);

        assert_eq!(builder.build_api_metadata().version, "unknown");
    }

    #[test]
    fn test_load_version_infoは読み込み失敗をエラーとして返す() {
        let builder = DocumentationDescriptorBuilder::new(DocsConfig::default(), unreadable_resource);

        let err = builder.load_version_info().unwrap_err();

        assert!(matches!(err, DocsError::ResourceRead { ref name, .. } if name == VERSION_RESOURCE));
    }

    #[test]
    fn test_固定の置き換えと無視する型が登録される() {
        let builder = DocumentationDescriptorBuilder::new(DocsConfig::default(), missing_resource);

        let descriptor = builder.build_descriptor();

        assert_eq!(descriptor.selection().as_str(), "openapi_online::api");
        assert!(descriptor.is_for_code_generation());
        assert_eq!(
            descriptor.substitutions(),
            &[
                TypeSubstitution::of::<chrono::NaiveDate, time::Date>(),
                TypeSubstitution::of::<chrono::DateTime<chrono::FixedOffset>, std::time::SystemTime>(),
                TypeSubstitution::of::<serde_json::Value, serde_json::Map<String, serde_json::Value>>(),
            ]
        );
        assert_eq!(
            descriptor.ignored_parameter_types(),
            &[
                TypeMarker::of::<dyn ResourceLoader>(),
                TypeMarker::of::<dyn std::io::Read>(),
            ]
        );
    }
}
