//! # OpenAPI Online サーバー
//!
//! OpenAPI ドキュメントを公開する HTTP サーバー。
//!
//! ## 起動シーケンス
//!
//! 1. 環境変数の読み込み（.env ファイル）
//! 2. トレーシングの初期化
//! 3. サーバー設定と記述子設定の読み込み
//! 4. ドキュメント記述子の組み立て（一度だけ）
//! 5. ルーターの構築と HTTP サーバーの起動
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `ONLINE_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `ONLINE_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `GENERATOR_HOST` | No | ドキュメントに載せるスキーム・ホスト・ベースパス（URI） |
//! | `VERSION_RESOURCE_DIR` | No | `version.properties` を読むディレクトリ |
//! | `LOG_FORMAT` | No | `json` または `pretty` |
//! | `RUST_LOG` | No | ログフィルタ |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p openapi-online
//!
//! GENERATOR_HOST=https://api.example.com:8443/gen cargo run -p openapi-online --release
//! ```

mod config;

use std::net::SocketAddr;

use config::OnlineConfig;
use openapi_online::{app_builder::build_app, resources::PackagedResources};
use openapi_online_docs::{DocsConfig, DocumentationDescriptorBuilder};
use openapi_online_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    init_tracing(TracingConfig::from_env("online"));
    let _tracing_guard = tracing::info_span!("app", service = "online").entered();

    let config = OnlineConfig::from_env()?;

    let builder = DocumentationDescriptorBuilder::new(
        DocsConfig::from_env(),
        PackagedResources::new(config.version_resource_dir.clone()),
    );
    let descriptor = builder.build_descriptor();
    tracing::info!(
        version = %descriptor.metadata().version,
        host = descriptor.host().unwrap_or_default(),
        "ドキュメント記述子を読み込みました"
    );

    let app = build_app(&descriptor);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("OpenAPI Online サーバーを起動します: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
