//! # OpenAPI YAML 生成ツール
//!
//! サーバーと同じ記述子から OpenAPI 仕様を描画し、YAML 形式で標準出力に出力する。
//! `GENERATOR_HOST` が設定されていれば `servers` に反映される。
//! `VERSION_RESOURCE_DIR` もサーバーと同じように解釈する。
//!
//! ## 使い方
//!
//! ```bash
//! cargo run --bin generate-openapi -p openapi-online > openapi/openapi.yaml
//! ```

use anyhow::Context as _;
use openapi_online::{openapi, resources::PackagedResources};
use openapi_online_docs::{DocsConfig, DocumentationDescriptorBuilder};
use openapi_online_shared::observability::{TracingConfig, init_tracing};

fn main() -> anyhow::Result<()> {
    // stdout はドキュメント専用
    init_tracing(TracingConfig::from_env("generate-openapi").with_stderr());

    let descriptor =
        DocumentationDescriptorBuilder::new(DocsConfig::from_env(), PackagedResources::from_env())
            .build_descriptor();
    let yaml = openapi::render(&descriptor)
        .to_yaml()
        .context("OpenAPI YAML 生成に失敗しました")?;
    print!("{yaml}");

    Ok(())
}
