//! # バージョン情報
//!
//! パッケージ済みリソース `version.properties` の `version` キーを保持する。

use crate::properties::Properties;

/// バージョンが解決できないときの値
pub const UNKNOWN_VERSION: &str = "unknown";

/// `version.properties` から読み取ったバージョン情報
///
/// `version` は空にならない。リソースが無い、読めない、`version` キーが無い、
/// 値が空白のみ、のいずれでも [`UNKNOWN_VERSION`] になる。
/// 値の末尾の空白はそのまま残す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    version: String,
}

impl VersionInfo {
    /// リソースのテキストから読み取る
    pub fn parse(text: &str) -> Self {
        Properties::parse(text)
            .get("version")
            .filter(|version| !version.trim().is_empty())
            .map_or_else(Self::default, |version| Self {
                version: version.to_string(),
            })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn into_version(self) -> String {
        self.version
    }
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self {
            version: UNKNOWN_VERSION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("version=7.0.0", "7.0.0")]
    #[case("version=7.1.0-SNAPSHOT\nbuild=42", "7.1.0-SNAPSHOT")]
    #[case("# built by CI\nversion : 6.6.0", "6.6.0")]
    #[case("version=7.0.0 ", "7.0.0 ")]
    fn test_versionキーの値を返す(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(VersionInfo::parse(text).version(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("build=42")]
    #[case("version=")]
    #[case("version=   ")]
    fn test_versionが得られなければunknownになる(#[case] text: &str) {
        assert_eq!(VersionInfo::parse(text).version(), UNKNOWN_VERSION);
    }

    #[test]
    fn test_defaultはunknown() {
        assert_eq!(VersionInfo::default().version(), "unknown");
    }
}
