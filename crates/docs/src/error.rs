//! # ドキュメント記述子まわりのエラー定義
//!
//! 記述子の組み立て中に起こり得る失敗を表現する。
//!
//! ## 回復方針
//!
//! どちらの失敗も記述子の組み立てを中断しない。
//!
//! | エラー種別 | 発生箇所 | 回復方法 |
//! |-----------|---------|---------|
//! | `ResourceRead` | `version.properties` の読み込み | `"unknown"` にフォールバック（ログなし） |
//! | `InvalidHostOverride` | `GENERATOR_HOST` の解析 | 上書きを破棄し warn ログを 1 行出す |

use thiserror::Error;

/// 記述子の組み立て中に発生するエラー
#[derive(Debug, Error)]
pub enum DocsError {
    /// パッケージ済みリソースの読み込み失敗
    #[error("リソース {name} を読み込めません: {source}")]
    ResourceRead {
        /// リソース名（例: `"version.properties"`）
        name:   String,
        #[source]
        source: std::io::Error,
    },

    /// ホスト上書き値が URI として不正
    #[error("GENERATOR_HOST の値 '{value}' を解析できません: {source}")]
    InvalidHostOverride {
        /// 設定された生の値
        value:  String,
        #[source]
        source: UriError,
    },
}

/// URI 参照として解釈できない理由
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UriError {
    #[error("URI が空です")]
    Empty,

    #[error("URI の構造を解釈できません")]
    Malformed,

    #[error("位置 {index} に使用できない文字 {character:?} があります")]
    IllegalCharacter { index: usize, character: char },

    #[error("位置 {index} のパーセントエンコーディングが不正です")]
    MalformedEscape { index: usize },

    #[error("スキーム名が不正です: {0:?}")]
    InvalidScheme(String),

    #[error("スキーム {0:?} の後にスキーム固有部がありません")]
    MissingSchemeSpecificPart(String),

    /// スキームなしの相対パスで最初のセグメントに `:` が含まれる
    #[error("スキーム名がありません（相対パス {0:?} の先頭セグメントに ':' があります）")]
    ColonInRelativePath(String),

    /// `//` の後が空で、パス・クエリ・フラグメントも続かない（`http://` など）
    #[error("位置 {index} にオーソリティが必要です")]
    MissingAuthority { index: usize },

    #[error("オーソリティが不正です: {0:?}")]
    InvalidAuthority(String),

    #[error("ポート番号が不正です: {0:?}")]
    InvalidPort(String),
}
