//! # ドキュメント生成側との境界
//!
//! 記述子を受け取り、実際のドキュメント（OpenAPI 等）を描画する側の抽象。
//! ハンドラの走査そのものは描画側のライブラリに任せる。

use crate::descriptor::DocumentationDescriptor;

/// ドキュメント記述子の受け取り手
pub trait DocumentationSink {
    /// 描画結果
    type Output;

    fn render(&self, descriptor: &DocumentationDescriptor) -> Self::Output;
}
