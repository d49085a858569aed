//! # utoipa による OpenAPI 描画
//!
//! [`DocumentationDescriptor`] を utoipa の [`OpenApi`] に変換する。
//!
//! ハンドラは `#[derive(utoipa::OpenApi)]` したグループ単位で登録し、
//! グループのモジュールパスが選択規則に含まれるものだけをマージする。
//!
//! ## Swagger 2 項目との対応
//!
//! | 記述子 | OpenAPI 3 |
//! |--------|-----------|
//! | protocols / host / path_mapping | `servers` |
//! | 型の置き換え | `components.schemas`（元の型名で置き換え先のスキーマを登録） |
//! | 無視するパラメータ型 | `x-ignored-parameter-types` 拡張 |

use utoipa::openapi::{
    ContactBuilder,
    Info,
    InfoBuilder,
    LicenseBuilder,
    OpenApi,
    Paths,
    Server,
    extensions::ExtensionsBuilder,
    schema::{AdditionalProperties, KnownFormat, ObjectBuilder, Schema, SchemaFormat, Type},
};

use crate::{
    descriptor::{DocumentationDescriptor, TypeMarker},
    metadata::ApiMetadata,
    sink::DocumentationSink,
};

/// 無視するパラメータ型を載せる拡張フィールド名
pub const IGNORED_PARAMETER_TYPES_EXTENSION: &str = "x-ignored-parameter-types";

/// モジュールパスで識別されるハンドラのまとまり
#[derive(Debug, Clone, Copy)]
pub struct HandlerGroup {
    module_path: &'static str,
    openapi:     fn() -> OpenApi,
}

impl HandlerGroup {
    pub const fn new(module_path: &'static str, openapi: fn() -> OpenApi) -> Self {
        Self {
            module_path,
            openapi,
        }
    }

    /// `#[derive(utoipa::OpenApi)]` した型から作る
    ///
    /// `module_path` には定義元モジュールで `module_path!()` を渡す。
    pub fn of<A: utoipa::OpenApi>(module_path: &'static str) -> Self {
        Self::new(module_path, A::openapi)
    }

    pub fn module_path(&self) -> &'static str {
        self.module_path
    }
}

/// utoipa の OpenAPI ドキュメントを描画する Sink
#[derive(Debug, Clone, Default)]
pub struct UtoipaSink {
    groups: Vec<HandlerGroup>,
}

impl UtoipaSink {
    pub fn new(groups: impl IntoIterator<Item = HandlerGroup>) -> Self {
        Self {
            groups: groups.into_iter().collect(),
        }
    }

    pub fn with_group(mut self, group: HandlerGroup) -> Self {
        self.groups.push(group);
        self
    }
}

impl DocumentationSink for UtoipaSink {
    type Output = OpenApi;

    fn render(&self, descriptor: &DocumentationDescriptor) -> OpenApi {
        let mut openapi = OpenApi::new(build_info(descriptor.metadata()), Paths::new());

        for group in &self.groups {
            if descriptor.selection().matches(group.module_path) {
                tracing::debug!(module = group.module_path, "ハンドラグループをドキュメントに含めます");
                openapi.merge((group.openapi)());
            } else {
                tracing::debug!(module = group.module_path, "選択規則の対象外のため除外します");
            }
        }

        let servers = build_servers(descriptor);
        if !servers.is_empty() {
            openapi.servers = Some(servers);
        }

        let components = openapi.components.get_or_insert_default();
        for substitution in descriptor.substitutions() {
            match substitute_schema(substitution.substitute) {
                Some(schema) => {
                    components
                        .schemas
                        .insert(substitution.original.short_name().to_string(), schema.into());
                }
                None => tracing::debug!(
                    substitute = substitution.substitute.name(),
                    "置き換え先のスキーマが未定義のため登録しません"
                ),
            }
        }

        if !descriptor.ignored_parameter_types().is_empty() {
            let names: Vec<&str> = descriptor
                .ignored_parameter_types()
                .iter()
                .map(TypeMarker::name)
                .collect();
            openapi.extensions = Some(
                ExtensionsBuilder::new()
                    .add(IGNORED_PARAMETER_TYPES_EXTENSION, serde_json::json!(names))
                    .build(),
            );
        }

        openapi
    }
}

/// `info` を組み立てる
///
/// 空の利用規約 URL と全項目が空の問い合わせ先は出力しない。
fn build_info(metadata: &ApiMetadata) -> Info {
    let non_empty = |value: &str| (!value.is_empty()).then(|| value.to_string());

    let contact = (!metadata.contact.is_empty()).then(|| {
        ContactBuilder::new()
            .name(non_empty(&metadata.contact.name))
            .url(non_empty(&metadata.contact.url))
            .email(non_empty(&metadata.contact.email))
            .build()
    });

    InfoBuilder::new()
        .title(metadata.title.as_str())
        .version(metadata.version.as_str())
        .description(Some(metadata.description.as_str()))
        .terms_of_service(non_empty(&metadata.terms_of_service_url))
        .license(Some(
            LicenseBuilder::new()
                .name(metadata.license.as_str())
                .url(Some(metadata.license_url.as_str()))
                .build(),
        ))
        .contact(contact)
        .build()
}

/// ホスト上書きから `servers` を組み立てる
///
/// - ホストとプロトコルあり: プロトコルごとに `{scheme}://{host}{path}`
/// - ホストのみ: `//{host}{path}`
/// - パスのみ: `{path}`
/// - 上書きなし: 空
fn build_servers(descriptor: &DocumentationDescriptor) -> Vec<Server> {
    let path = descriptor.path_mapping().unwrap_or_default();
    match descriptor.host() {
        Some(host) if descriptor.protocols().is_empty() => {
            vec![Server::new(format!("//{host}{path}"))]
        }
        Some(host) => descriptor
            .protocols()
            .iter()
            .map(|scheme| Server::new(format!("{scheme}://{host}{path}")))
            .collect(),
        None if !path.is_empty() => vec![Server::new(path)],
        None => Vec::new(),
    }
}

/// 置き換え先の型に対応するスキーマ
fn substitute_schema(marker: TypeMarker) -> Option<Schema> {
    let object = if marker == TypeMarker::of::<time::Date>() {
        ObjectBuilder::new()
            .schema_type(Type::String)
            .format(Some(SchemaFormat::KnownFormat(KnownFormat::Date)))
            .build()
    } else if marker == TypeMarker::of::<std::time::SystemTime>() {
        ObjectBuilder::new()
            .schema_type(Type::String)
            .format(Some(SchemaFormat::KnownFormat(KnownFormat::DateTime)))
            .build()
    } else if marker == TypeMarker::of::<serde_json::Map<String, serde_json::Value>>() {
        ObjectBuilder::new()
            .schema_type(Type::Object)
            .additional_properties(Some(AdditionalProperties::FreeForm(true)))
            .build()
    } else {
        return None;
    };
    Some(Schema::Object(object))
}
