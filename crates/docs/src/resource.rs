//! # パッケージ済みリソースの読み込み
//!
//! 記述子ビルダーは `version.properties` を [`ResourceLoader`] 経由で読む。
//! 本番ではバイナリに埋め込んだ [`EmbeddedResources`]、設定によっては
//! ディレクトリから読む [`FsResourceLoader`] を使う。
//! テストではクロージャをそのままローダーとして渡せる。

use std::{
    io,
    path::{Path, PathBuf},
};

/// 名前付きリソースのローダー
///
/// - `Ok(Some(_))`: リソースの内容
/// - `Ok(None)`: リソースが存在しない
/// - `Err(_)`: 存在するが読めない
pub trait ResourceLoader: Send + Sync {
    fn load(&self, name: &str) -> io::Result<Option<String>>;
}

impl<F> ResourceLoader for F
where
    F: Fn(&str) -> io::Result<Option<String>> + Send + Sync,
{
    fn load(&self, name: &str) -> io::Result<Option<String>> {
        self(name)
    }
}

/// バイナリに埋め込まれたリソース表
///
/// ```
/// use openapi_online_docs::{EmbeddedResources, ResourceLoader};
///
/// static RESOURCES: EmbeddedResources =
///     EmbeddedResources::new(&[("version.properties", "version=7.0.0")]);
///
/// assert_eq!(
///     RESOURCES.load("version.properties").unwrap().as_deref(),
///     Some("version=7.0.0")
/// );
/// assert_eq!(RESOURCES.load("missing.properties").unwrap(), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedResources {
    entries: &'static [(&'static str, &'static str)],
}

impl EmbeddedResources {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }
}

impl ResourceLoader for EmbeddedResources {
    fn load(&self, name: &str) -> io::Result<Option<String>> {
        Ok(self
            .entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, contents)| (*contents).to_string()))
    }
}

/// ディレクトリ配下のファイルをリソースとして読むローダー
#[derive(Debug, Clone)]
pub struct FsResourceLoader {
    root: PathBuf,
}

impl FsResourceLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceLoader for FsResourceLoader {
    fn load(&self, name: &str) -> io::Result<Option<String>> {
        match std::fs::read_to_string(self.root.join(name)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}
