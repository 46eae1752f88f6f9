//! The doc-tree source consumed by the renderer.

use super::doc::DocTree;
use crate::hir::ModuleHandle;

/// Provides the parsed documentation of a module.
pub trait DocSource {
    /// The module's documentation tree, or `None` when it has no doc comment.
    fn doc_tree(&self, module: &ModuleHandle) -> Option<DocTree>;
}
