//! # API メタデータ
//!
//! OpenAPI ドキュメントの `info` に載る固定文言とバージョンを保持する。

use serde::Serialize;

pub const API_TITLE: &str = "OpenAPI Generator Online";
pub const API_DESCRIPTION: &str = "This is an online openapi generator server.  You can find out more at https://github.com/OpenAPITools/openapi-generator.";
pub const LICENSE_NAME: &str = "Apache 2.0";
pub const LICENSE_URL: &str = "https://www.apache.org/licenses/LICENSE-2.0.html";
pub const TERMS_OF_SERVICE_URL: &str = "";

/// 問い合わせ先
///
/// 既定では 3 項目とも空文字。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub name:  String,
    pub url:   String,
    pub email: String,
}

impl Contact {
    /// 全項目が空か
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.url.is_empty() && self.email.is_empty()
    }
}

/// API メタデータ
///
/// 値としての同一性のみを持つ。記述子を組み立てるたびに新しく作られる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiMetadata {
    pub title:                String,
    pub description:          String,
    pub license:              String,
    pub license_url:          String,
    pub terms_of_service_url: String,
    pub version:              String,
    pub contact:              Contact,
}

impl ApiMetadata {
    /// 固定文言と指定バージョンからメタデータを作る
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            title:                API_TITLE.to_string(),
            description:          API_DESCRIPTION.to_string(),
            license:              LICENSE_NAME.to_string(),
            license_url:          LICENSE_URL.to_string(),
            terms_of_service_url: TERMS_OF_SERVICE_URL.to_string(),
            version:              version.into(),
            contact:              Contact::default(),
        }
    }
}
