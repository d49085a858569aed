//! # ドキュメント記述子の設定
//!
//! ビルダーはプロセスの環境変数を直接読まず、この設定を受け取る。
//! 本番では [`DocsConfig::from_env`] で環境変数から作る。

use std::env;

/// ホスト上書きを読む環境変数名
pub const GENERATOR_HOST_ENV: &str = "GENERATOR_HOST";

/// ドキュメント記述子の設定
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocsConfig {
    /// ホスト上書き URI（未解析の生の値）
    pub host_override: Option<String>,
}

impl DocsConfig {
    /// 環境変数 `GENERATOR_HOST` から読み込む
    ///
    /// 未設定または UTF-8 でない値は未設定として扱う。
    pub fn from_env() -> Self {
        Self {
            host_override: env::var(GENERATOR_HOST_ENV).ok(),
        }
    }

    pub fn with_host_override(host_override: impl Into<String>) -> Self {
        Self {
            host_override: Some(host_override.into()),
        }
    }
}
