//! Workspace: an in-memory documentation project.
//!
//! Bundles a [`SymbolIndex`], the raw doc comments (or pre-built trees) of
//! its modules, and the set of modules marked for generation. Implements
//! every collaborator trait the driver consumes.

use indexmap::IndexSet;
use rustc_hash::FxHashMap;

use super::sink::ModuleDiscovery;
use crate::base::{DocGenConfig, Name};
use crate::hir::{
    ImportDecl, Member, ModuleDecl, ModuleHandle, SymbolIndex, SymbolTable, TypeDecl, TypeHandle,
};
use crate::syntax::{DocSource, DocTree, parse_doc_comment};

#[derive(Clone, Debug)]
enum ModuleDoc {
    Comment(String),
    Tree(DocTree),
}

#[derive(Clone, Debug, Default)]
pub struct Workspace {
    index: SymbolIndex,
    docs: FxHashMap<Name, ModuleDoc>,
    /// Modules marked for generation, in marking order.
    generated: IndexSet<Name>,
    config: DocGenConfig,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DocGenConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &DocGenConfig {
        &self.config
    }

    pub fn index(&self) -> &SymbolIndex {
        &self.index
    }

    pub fn add_type(&mut self, decl: TypeDecl) -> &mut Self {
        self.index.add_type(decl);
        self
    }

    pub fn add_module(&mut self, decl: ModuleDecl) -> &mut Self {
        self.index.add_module(decl);
        self
    }

    /// Attach a raw doc comment to a module; parsed on demand.
    pub fn set_doc_comment(&mut self, module: impl Into<Name>, raw: impl Into<String>) -> &mut Self {
        self.docs.insert(module.into(), ModuleDoc::Comment(raw.into()));
        self
    }

    /// Attach an already-built tree to a module.
    pub fn set_doc_tree(&mut self, module: impl Into<Name>, tree: DocTree) -> &mut Self {
        self.docs.insert(module.into(), ModuleDoc::Tree(tree));
        self
    }

    /// Mark a module for generation.
    pub fn mark_generated(&mut self, module: impl Into<Name>) -> &mut Self {
        self.generated.insert(module.into());
        self
    }

    pub fn is_generated(&self, module: &str) -> bool {
        self.generated.contains(module)
    }
}

impl SymbolTable for Workspace {
    fn lookup_type(&self, qualified_name: &str) -> Option<TypeHandle> {
        self.index.lookup_type(qualified_name)
    }

    fn lookup_module(&self, qualified_name: &str) -> Option<ModuleHandle> {
        self.index.lookup_module(qualified_name)
    }

    fn all_members(&self, ty: &TypeHandle) -> Vec<Member> {
        self.index.all_members(ty)
    }

    fn imports(&self, module: &ModuleHandle) -> Vec<ImportDecl> {
        self.index.imports(module)
    }
}

impl DocSource for Workspace {
    fn doc_tree(&self, module: &ModuleHandle) -> Option<DocTree> {
        match self.docs.get(&module.qualified_name)? {
            ModuleDoc::Comment(raw) => Some(parse_doc_comment(raw, &self.config)),
            ModuleDoc::Tree(tree) => Some(tree.clone()),
        }
    }
}

impl ModuleDiscovery for Workspace {
    /// Marked modules that exist in the index, in marking order.
    fn discover(&self) -> Vec<ModuleHandle> {
        self.generated
            .iter()
            .filter_map(|name| {
                let module = self.index.lookup_module(name);
                if module.is_none() {
                    tracing::warn!("[DRIVER] Module '{}' marked for generation but not declared", name);
                }
                module
            })
            .collect()
    }
}
