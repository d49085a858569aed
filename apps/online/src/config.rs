//! # サーバー設定
//!
//! 環境変数からサーバーの設定を読み込む。
//! ドキュメント記述子の設定（`GENERATOR_HOST`）は
//! [`openapi_online_docs::DocsConfig`] が別に読む。

use std::{env, num::ParseIntError, path::PathBuf};

use openapi_online::resources::{VERSION_RESOURCE_DIR_ENV, version_resource_dir};
use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ONLINE_PORT は有効なポート番号である必要があります: {value:?}")]
    InvalidPort {
        value:  String,
        #[source]
        source: ParseIntError,
    },
}

/// サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnlineConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// `version.properties` を読むディレクトリ（未設定なら埋め込みリソース）
    pub version_resource_dir: Option<PathBuf>,
}

impl OnlineConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var("ONLINE_HOST").ok(),
            env::var("ONLINE_PORT").ok(),
            env::var(VERSION_RESOURCE_DIR_ENV).ok(),
        )
    }

    fn from_values(
        host: Option<String>,
        port: Option<String>,
        resource_dir: Option<String>,
    ) -> Result<Self, ConfigError> {
        let port = match port {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => 8080,
        };

        Ok(Self {
            host: host.unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            version_resource_dir: version_resource_dir(resource_dir),
        })
    }
}
