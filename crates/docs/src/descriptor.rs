//! # ドキュメント記述子
//!
//! ドキュメント生成側（[`DocumentationSink`](crate::DocumentationSink)）に渡す集約。
//!
//! ## 構成要素
//!
//! - [`ApiMetadata`]: タイトル・バージョン・ライセンス等
//! - [`SelectionRule`]: ドキュメント化するハンドラのモジュールパス
//! - [`TypeSubstitution`]: スキーマ上で別の型として表現する型の組
//! - 無視するパラメータ型（[`TypeMarker`]）
//! - ホスト上書きで変わるプロトコル集合・ホスト・ベースパス

use std::collections::BTreeSet;

use crate::{host_override::HostOverride, metadata::ApiMetadata};

/// ドキュメント形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentationType {
    /// Swagger 2 互換（host / schemes / basePath を持つ）
    #[default]
    Swagger2,
}

/// ハンドラの選択規則
///
/// 基底モジュールパス配下のハンドラだけをドキュメントに含める。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRule {
    base_path: String,
}

impl SelectionRule {
    pub fn base_path(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.base_path
    }

    /// モジュールパスが規則に含まれるか
    ///
    /// `::` の区切りで判定する（`app::api` は `app::api_v2` を含まない）。
    ///
    /// ```
    /// use openapi_online_docs::SelectionRule;
    ///
    /// let rule = SelectionRule::base_path("openapi_online::api");
    /// assert!(rule.matches("openapi_online::api"));
    /// assert!(rule.matches("openapi_online::api::info"));
    /// assert!(!rule.matches("openapi_online::api_v2"));
    /// assert!(!rule.matches("openapi_online::health"));
    /// ```
    pub fn matches(&self, module_path: &str) -> bool {
        module_path
            .strip_prefix(self.base_path.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
    }
}

/// 型を名前で識別するマーカー
///
/// 名前は [`std::any::type_name`] による。同じビルド内での比較にのみ使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeMarker {
    name: &'static str,
}

impl TypeMarker {
    pub fn of<T: ?Sized>() -> Self {
        Self {
            name: std::any::type_name::<T>(),
        }
    }

    /// 完全修飾名（例: `"chrono::naive::date::NaiveDate"`）
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// ジェネリクスとモジュールパスを除いた名前（例: `"NaiveDate"`）
    pub fn short_name(&self) -> &'static str {
        let name = self.name.strip_prefix("dyn ").unwrap_or(self.name);
        let name = name.split('<').next().unwrap_or(name);
        name.rsplit("::").next().unwrap_or(name)
    }
}

/// スキーマ上の型の置き換え
///
/// `original` の値を `substitute` として扱うようにレンダラーへ伝える。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSubstitution {
    pub original:   TypeMarker,
    pub substitute: TypeMarker,
}

impl TypeSubstitution {
    pub fn of<Original: ?Sized, Substitute: ?Sized>() -> Self {
        Self {
            original:   TypeMarker::of::<Original>(),
            substitute: TypeMarker::of::<Substitute>(),
        }
    }
}

/// ドキュメント記述子
///
/// [`DocumentationDescriptorBuilder`](crate::DocumentationDescriptorBuilder) が組み立てる。
/// 組み立て後は読み取り専用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentationDescriptor {
    documentation_type:      DocumentationType,
    metadata:                ApiMetadata,
    selection:               SelectionRule,
    for_code_generation:     bool,
    substitutions:           Vec<TypeSubstitution>,
    ignored_parameter_types: Vec<TypeMarker>,
    protocols:               BTreeSet<String>,
    host:                    Option<String>,
    path_mapping:            Option<String>,
}

impl DocumentationDescriptor {
    pub(crate) fn new(metadata: ApiMetadata, selection: SelectionRule) -> Self {
        Self {
            documentation_type: DocumentationType::Swagger2,
            metadata,
            selection,
            for_code_generation: false,
            substitutions: Vec::new(),
            ignored_parameter_types: Vec::new(),
            protocols: BTreeSet::new(),
            host: None,
            path_mapping: None,
        }
    }

    pub(crate) fn for_code_generation(mut self, enabled: bool) -> Self {
        self.for_code_generation = enabled;
        self
    }

    pub(crate) fn direct_substitute(mut self, substitution: TypeSubstitution) -> Self {
        self.substitutions.push(substitution);
        self
    }

    pub(crate) fn ignored_parameter_type(mut self, marker: TypeMarker) -> Self {
        self.ignored_parameter_types.push(marker);
        self
    }

    /// ホスト上書きを適用する
    ///
    /// - スキームがあればプロトコル集合をそのスキームだけに置き換える
    /// - オーソリティがあればホストを置き換える
    /// - ベースパスは常に上書き値のパスにする（空文字でも）
    pub(crate) fn apply_host_override(&mut self, host_override: &HostOverride) {
        if let Some(scheme) = host_override.scheme.as_deref().filter(|s| !s.is_empty()) {
            self.protocols = BTreeSet::from([scheme.to_string()]);
        }
        if let Some(authority) = &host_override.authority {
            self.host = Some(authority.clone());
        }
        self.path_mapping = Some(host_override.path.clone());
    }

    pub fn documentation_type(&self) -> DocumentationType {
        self.documentation_type
    }

    pub fn metadata(&self) -> &ApiMetadata {
        &self.metadata
    }

    pub fn selection(&self) -> &SelectionRule {
        &self.selection
    }

    pub fn is_for_code_generation(&self) -> bool {
        self.for_code_generation
    }

    pub fn substitutions(&self) -> &[TypeSubstitution] {
        &self.substitutions
    }

    pub fn ignored_parameter_types(&self) -> &[TypeMarker] {
        &self.ignored_parameter_types
    }

    /// プロトコル集合（上書きがなければ空）
    pub fn protocols(&self) -> &BTreeSet<String> {
        &self.protocols
    }

    /// ホスト（`host:port`）
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// ベースパス
    ///
    /// 上書きがなければ `None`。上書きがあれば空文字を含めその URI のパス。
    pub fn path_mapping(&self) -> Option<&str> {
        self.path_mapping.as_deref()
    }
}
