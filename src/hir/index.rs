//! In-memory symbol index.
//!
//! Holds declared types (with members and supertypes) and documentation
//! modules (with their imports). Used as the [`SymbolTable`] behind a
//! [`Workspace`](crate::project::Workspace) and directly by tests.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use super::table::SymbolTable;
use super::types::{ImportDecl, Member, MemberKind, ModuleHandle, TypeHandle, TypeRef};
use crate::base::Name;

// ============================================================================
// DECLARATIONS
// ============================================================================

/// A declared type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeDecl {
    pub qualified_name: Name,
    /// Direct supertypes, searched in order for inherited members.
    pub supertypes: Vec<Name>,
    /// Declared members, in declaration order.
    pub members: Vec<Member>,
}

impl TypeDecl {
    pub fn new(qualified_name: impl Into<Name>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            ..Default::default()
        }
    }

    pub fn with_supertype(mut self, supertype: impl Into<Name>) -> Self {
        self.supertypes.push(supertype.into());
        self
    }

    pub fn with_field(self, name: impl Into<Name>) -> Self {
        self.with_member(name, MemberKind::Field, Vec::new())
    }

    pub fn with_enum_constant(self, name: impl Into<Name>) -> Self {
        self.with_member(name, MemberKind::EnumConstant, Vec::new())
    }

    pub fn with_method(self, name: impl Into<Name>, params: Vec<TypeRef>) -> Self {
        self.with_member(name, MemberKind::Method, params)
    }

    pub fn with_constructor(self, params: Vec<TypeRef>) -> Self {
        self.with_member("<init>", MemberKind::Constructor, params)
    }

    pub fn with_member(mut self, name: impl Into<Name>, kind: MemberKind, params: Vec<TypeRef>) -> Self {
        let owner = self.qualified_name.clone();
        self.members.push(Member {
            name: name.into(),
            kind,
            params,
            owner,
        });
        self
    }
}

/// A documentation module and the imports of its compilation unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModuleDecl {
    pub qualified_name: Name,
    pub imports: Vec<ImportDecl>,
}

impl ModuleDecl {
    pub fn new(qualified_name: impl Into<Name>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            imports: Vec::new(),
        }
    }

    pub fn with_import(mut self, path: impl Into<Name>) -> Self {
        self.imports.push(ImportDecl::new(path));
        self
    }

    pub fn with_static_import(mut self, path: impl Into<Name>) -> Self {
        self.imports.push(ImportDecl::new_static(path));
        self
    }
}

// ============================================================================
// SYMBOL INDEX
// ============================================================================

/// An index of all declared types and modules.
///
/// Insertion order is preserved, so member enumeration is stable across
/// runs.
#[derive(Clone, Debug, Default)]
pub struct SymbolIndex {
    /// Types by qualified name.
    types: IndexMap<Name, TypeDecl>,
    /// Modules by qualified name.
    modules: IndexMap<Name, ModuleDecl>,
}

impl SymbolIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a type.
    pub fn add_type(&mut self, decl: TypeDecl) {
        self.types.insert(decl.qualified_name.clone(), decl);
    }

    /// Add or replace a module.
    pub fn add_module(&mut self, decl: ModuleDecl) {
        self.modules.insert(decl.qualified_name.clone(), decl);
    }

    pub fn type_decl(&self, qualified_name: &str) -> Option<&TypeDecl> {
        self.types.get(qualified_name)
    }

    pub fn module_decl(&self, qualified_name: &str) -> Option<&ModuleDecl> {
        self.modules.get(qualified_name)
    }

    /// All modules, in insertion order.
    pub fn modules(&self) -> impl Iterator<Item = &ModuleDecl> {
        self.modules.values()
    }

    /// Number of types in the index.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Number of modules in the index.
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Collect members of `qualified_name` and its supertypes, depth-first.
    ///
    /// Fields hide same-named inherited fields; methods hide inherited
    /// methods with the same name and erased parameters. Constructors are
    /// only collected for the type itself.
    fn collect_members(
        &self,
        qualified_name: &str,
        own: bool,
        visited: &mut FxHashSet<Name>,
        seen_fields: &mut FxHashSet<Name>,
        seen_methods: &mut FxHashSet<(Name, Vec<TypeRef>)>,
        out: &mut Vec<Member>,
    ) {
        let Some(decl) = self.types.get(qualified_name) else {
            tracing::trace!("[INDEX] Supertype '{}' not indexed, skipping", qualified_name);
            return;
        };

        for member in &decl.members {
            let visible = match member.kind {
                MemberKind::Constructor => own,
                MemberKind::Field | MemberKind::EnumConstant => {
                    seen_fields.insert(member.name.clone())
                }
                MemberKind::Method => {
                    let key = (member.name.clone(), self.erased_parameter_types(member));
                    seen_methods.insert(key)
                }
            };
            if visible {
                out.push(member.clone());
            }
        }

        for supertype in &decl.supertypes {
            if visited.insert(supertype.clone()) {
                self.collect_members(supertype, false, visited, seen_fields, seen_methods, out);
            }
        }
    }
}

impl SymbolTable for SymbolIndex {
    fn lookup_type(&self, qualified_name: &str) -> Option<TypeHandle> {
        self.types
            .get(qualified_name)
            .map(|decl| TypeHandle::new(decl.qualified_name.clone()))
    }

    fn lookup_module(&self, qualified_name: &str) -> Option<ModuleHandle> {
        self.modules
            .get(qualified_name)
            .map(|decl| ModuleHandle::new(decl.qualified_name.clone()))
    }

    fn all_members(&self, ty: &TypeHandle) -> Vec<Member> {
        let mut visited = FxHashSet::default();
        visited.insert(ty.qualified_name.clone());
        let mut out = Vec::new();
        self.collect_members(
            &ty.qualified_name,
            true,
            &mut visited,
            &mut FxHashSet::default(),
            &mut FxHashSet::default(),
            &mut out,
        );
        out
    }

    fn imports(&self, module: &ModuleHandle) -> Vec<ImportDecl> {
        self.modules
            .get(&module.qualified_name)
            .map(|decl| decl.imports.clone())
            .unwrap_or_default()
    }
}
