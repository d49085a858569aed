//! # パッケージ済みリソース
//!
//! `version.properties` はビルド時のパッケージバージョンから生成してバイナリに埋め込む。
//! `VERSION_RESOURCE_DIR` が設定されていれば、そのディレクトリのファイルを優先する。

use std::{env, io, path::PathBuf};

use openapi_online_docs::{EmbeddedResources, FsResourceLoader, ResourceLoader, VERSION_RESOURCE};

/// バイナリに埋め込んだリソース
pub static EMBEDDED_RESOURCES: EmbeddedResources = EmbeddedResources::new(&[(
    VERSION_RESOURCE,
    concat!("version=", env!("CARGO_PKG_VERSION"), "\n"),
)]);

/// リソースディレクトリを指定する環境変数
pub const VERSION_RESOURCE_DIR_ENV: &str = "VERSION_RESOURCE_DIR";

/// リソースディレクトリの設定値を解釈する（空白のみは未設定扱い）
pub fn version_resource_dir(value: Option<String>) -> Option<PathBuf> {
    value.filter(|dir| !dir.trim().is_empty()).map(PathBuf::from)
}

/// サーバーが使うリソースの読み込み元
#[derive(Debug, Clone)]
pub enum PackagedResources {
    Embedded(EmbeddedResources),
    Directory(FsResourceLoader),
}

impl PackagedResources {
    /// ディレクトリ指定があればそこから、なければ埋め込みリソースから読む
    pub fn new(directory: Option<PathBuf>) -> Self {
        match directory {
            Some(directory) => Self::Directory(FsResourceLoader::new(directory)),
            None => Self::Embedded(EMBEDDED_RESOURCES),
        }
    }

    /// `VERSION_RESOURCE_DIR` に従って読み込み元を決める
    pub fn from_env() -> Self {
        Self::new(version_resource_dir(
            env::var(VERSION_RESOURCE_DIR_ENV).ok(),
        ))
    }
}

impl ResourceLoader for PackagedResources {
    fn load(&self, name: &str) -> io::Result<Option<String>> {
        match self {
            Self::Embedded(resources) => resources.load(name),
            Self::Directory(loader) => loader.load(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_埋め込みリソースにパッケージバージョンが入っている() {
        let contents = PackagedResources::new(None)
            .load(VERSION_RESOURCE)
            .unwrap()
            .unwrap();

        assert_eq!(contents, format!("version={}\n", env!("CARGO_PKG_VERSION")));
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("  "), None)]
    #[case(Some("/etc/openapi-online"), Some("/etc/openapi-online"))]
    fn test_リソースディレクトリの設定値を解釈する(
        #[case] value: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(
            version_resource_dir(value.map(str::to_string)),
            expected.map(PathBuf::from)
        );
    }

    #[test]
    fn test_ディレクトリ指定時はファイルから読む() {
        let resources = PackagedResources::new(Some(PathBuf::from("/nonexistent/openapi-online")));

        assert!(matches!(resources, PackagedResources::Directory(_)));
        assert_eq!(resources.load(VERSION_RESOURCE).unwrap(), None);
    }
}
