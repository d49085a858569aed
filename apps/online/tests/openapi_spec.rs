//! # OpenAPI 仕様テスト
//!
//! 記述子から描画される OpenAPI ドキュメントの内容を検証する。

use std::io;

use openapi_online::openapi;
use openapi_online_docs::{DocsConfig, DocumentationDescriptor, DocumentationDescriptorBuilder};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn version_resource(_name: &str) -> io::Result<Option<String>> {
    Ok(Some("version=7.0.0\n".to_string()))
}

fn descriptor(host_override: Option<&str>) -> DocumentationDescriptor {
    let config = DocsConfig {
        host_override: host_override.map(str::to_string),
    };
    DocumentationDescriptorBuilder::new(config, version_resource).build_descriptor()
}

#[test]
fn test_openapi仕様がパニックせず生成される() {
    let doc = openapi::render(&descriptor(None));

    let _yaml = doc.to_yaml().unwrap();
}

#[test]
fn test_選択規則配下のパスだけが含まれる() {
    let doc = openapi::render(&descriptor(None));
    let paths: Vec<&str> = doc.paths.paths.keys().map(|k| k.as_str()).collect();

    assert_eq!(paths, vec!["/api/info"]);
}

#[test]
fn test_infoタグが含まれhealthタグは含まれない() {
    let doc = openapi::render(&descriptor(None));
    let tags: Vec<&str> = doc
        .tags
        .as_ref()
        .expect("tags が存在すること")
        .iter()
        .map(|t| t.name.as_str())
        .collect();

    assert!(tags.contains(&"info"));
    assert!(!tags.contains(&"health"));
}

#[test]
fn test_api_info_responseスキーマが登録されている() {
    let doc = openapi::render(&descriptor(None));
    let components = doc.components.as_ref().expect("components が存在すること");

    assert!(
        components.schemas.contains_key("ApiInfoResponse"),
        "ApiInfoResponse スキーマが存在すること: {:?}",
        components.schemas.keys().collect::<Vec<_>>()
    );
    assert!(!components.schemas.contains_key("HealthResponse"));
}

#[rstest]
#[case(None, vec![])]
#[case(Some("https://api.example.com:8443/gen"), vec!["https://api.example.com:8443/gen"])]
#[case(Some("ftp://host"), vec!["ftp://host"])]
#[case(Some("://bad uri"), vec![])]
fn test_ホスト上書きがserversに反映される(
    #[case] host_override: Option<&str>,
    #[case] expected: Vec<&str>,
) {
    let doc = openapi::render(&descriptor(host_override));
    let urls: Vec<&str> = doc
        .servers
        .iter()
        .flatten()
        .map(|server| server.url.as_str())
        .collect();

    assert_eq!(urls, expected);
}

#[test]
fn test_info部分のスナップショット() {
    let doc = openapi::render(&descriptor(None));
    let json = serde_json::to_string_pretty(&doc.info).unwrap();

    insta::assert_snapshot!(json, @r#"
    {
      "title": "OpenAPI Generator Online",
      "description": "This is an online openapi generator server.  You can find out more at https://github.com/OpenAPITools/openapi-generator.",
      "license": {
        "name": "Apache 2.0",
        "url": "https://www.apache.org/licenses/LICENSE-2.0.html"
      },
      "version": "7.0.0"
    }
    "#);
}
