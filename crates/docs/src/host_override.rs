//! # ホスト上書き
//!
//! `GENERATOR_HOST` に設定された URI から、ドキュメントに載せる
//! スキーム・ホスト・ベースパスを取り出す。
//!
//! 値が不正でも起動は止めない。warn ログを 1 行出して上書きを丸ごと破棄する
//! （一部だけ適用することはない）。

use crate::{error::DocsError, uri::UriReference};

/// ホスト上書き値
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostOverride {
    /// スキーム（例: `"https"`）
    pub scheme:    Option<String>,
    /// オーソリティ（`host:port`）
    ///
    /// OpenAPI の `host` はホストとポートの組、つまり URI のオーソリティを指す。
    pub authority: Option<String>,
    /// パス（空文字の場合あり）
    pub path:      String,
}

impl HostOverride {
    /// 値を URI として解釈する
    pub fn parse(raw: &str) -> Result<Self, DocsError> {
        let uri: UriReference = raw.parse().map_err(|source| DocsError::InvalidHostOverride {
            value: raw.to_string(),
            source,
        })?;
        Ok(Self::from(uri))
    }

    /// 設定値から上書きを解決する
    ///
    /// - 未設定または空白のみ: `None`
    /// - 解釈できない値: warn ログを出して `None`
    pub fn resolve(raw: Option<&str>) -> Option<Self> {
        let raw = raw.filter(|value| !value.trim().is_empty())?;
        match Self::parse(raw) {
            Ok(host_override) => Some(host_override),
            Err(e) => {
                tracing::warn!(value = raw, "ホスト上書きを無視します: {e}");
                None
            }
        }
    }
}

impl From<UriReference> for HostOverride {
    fn from(uri: UriReference) -> Self {
        Self {
            scheme:    uri.scheme().filter(|s| !s.is_empty()).map(str::to_string),
            authority: uri.authority().map(str::to_string),
            path:      uri.path().to_string(),
        }
    }
}
