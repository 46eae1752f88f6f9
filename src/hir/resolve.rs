//! Name resolution: resolving link references to symbols.
//!
//! Resolution is always relative to the module whose documentation holds the
//! reference: its imports decide what an unqualified type name means.
//!
//! ## Type names
//!
//! [`TypeResolver`] maps a written type name to an erased [`TypeRef`]:
//!
//! 1. primitive keywords (`int`, `boolean`, ...)
//! 2. array suffix `[]`, resolved on the component
//! 3. qualified names (`java.util.List`), looked up directly
//! 4. simple names, matched against the trailing identifier of each import
//! 5. simple names inside the default namespace (`java.lang`)
//!
//! ## Members
//!
//! [`resolve_member`] scans all members of the target type, own and
//! inherited, and returns the first field or method the reference matches.
//! The matching policy depends on how the parameter list was written:
//!
//! | written         | matches                                               |
//! |-----------------|-------------------------------------------------------|
//! | `T#name`        | any field or method named `name`                      |
//! | `T#name()`      | a method named `name` with no parameters              |
//! | `T#name(A, B)`  | a field named `name`, or a method with erased `(A, B)`|

use crate::base::constants::{ARRAY_SUFFIX, QUALIFIER_SEPARATOR};
use crate::base::{DocGenConfig, Name, join_name};
use crate::error::DocGenError;
use crate::parser::ParsedReference;

use super::table::SymbolTable;
use super::types::{
    ImportDecl, Member, MemberKind, ModuleHandle, PrimitiveKind, ResolvedSymbol, TypeHandle,
    TypeRef,
};

// ============================================================================
// TYPE NAMES
// ============================================================================

/// Resolves written type names in the context of one module.
pub struct TypeResolver<'a> {
    symbols: &'a dyn SymbolTable,
    module: Name,
    imports: Vec<ImportDecl>,
    default_namespace: Name,
}

impl<'a> TypeResolver<'a> {
    /// Create a resolver using `module`'s imports.
    pub fn new(symbols: &'a dyn SymbolTable, module: &ModuleHandle, config: &DocGenConfig) -> Self {
        Self {
            symbols,
            module: module.qualified_name.clone(),
            imports: symbols.imports(module),
            default_namespace: config.default_namespace.clone(),
        }
    }

    /// Resolve a written type name to its erased type.
    ///
    /// `Ok(None)` means the type is unknown. `Err` is only returned for
    /// malformed import declarations.
    pub fn resolve(&self, name: &str) -> Result<Option<TypeRef>, DocGenError> {
        let name = name.trim();

        if let Some(kind) = PrimitiveKind::from_keyword(name) {
            return Ok(Some(TypeRef::Primitive(kind)));
        }

        if let Some(component) = name.strip_suffix(ARRAY_SUFFIX) {
            return Ok(self.resolve(component)?.map(TypeRef::array));
        }

        Ok(self
            .resolve_declared(name)?
            .map(|handle| self.symbols.erasure(&handle.as_type_ref())))
    }

    /// Resolve a written name to a declared type (steps 3–5 only).
    pub fn resolve_declared(&self, name: &str) -> Result<Option<TypeHandle>, DocGenError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        if name.contains(QUALIFIER_SEPARATOR) {
            return Ok(self.symbols.lookup_type(name));
        }

        for import in &self.imports {
            let Some((qualifier, identifier)) = import.split() else {
                return Err(DocGenError::MalformedImport {
                    module: self.module.clone(),
                    import: import.path.clone(),
                });
            };
            if identifier != name {
                continue;
            }
            let qualified = join_name(qualifier, identifier);
            if let Some(handle) = self.symbols.lookup_type(&qualified) {
                tracing::trace!(
                    "[RESOLVE] '{}' found via import in '{}' -> {}",
                    name,
                    self.module,
                    qualified
                );
                return Ok(Some(handle));
            }
        }

        let fallback = join_name(&self.default_namespace, name);
        let handle = self.symbols.lookup_type(&fallback);
        if handle.is_some() {
            tracing::trace!("[RESOLVE] '{}' found in default namespace -> {}", name, fallback);
        }
        Ok(handle)
    }
}

// ============================================================================
// MEMBERS
// ============================================================================

/// Find the first member of `target` matching `reference`.
pub fn resolve_member(
    symbols: &dyn SymbolTable,
    types: &TypeResolver<'_>,
    target: &TypeHandle,
    reference: &ParsedReference,
) -> Result<Option<Member>, DocGenError> {
    let Some(member_name) = reference.member_name.as_deref() else {
        return Err(DocGenError::MissingMemberName {
            signature: reference.target_name.clone(),
        });
    };

    for member in symbols.all_members(target) {
        if !matches!(member.kind, MemberKind::Field | MemberKind::Method) {
            continue;
        }
        if member.name != member_name {
            continue;
        }
        let matched = match reference.param_types.as_deref() {
            None => true,
            Some([]) => member.is_method() && member.params.is_empty(),
            Some(written) => member.is_field() || method_params_match(symbols, types, &member, written)?,
        };
        if matched {
            tracing::trace!(
                "[RESOLVE] '{}#{}' matched {:?} on {}",
                reference.target_name,
                member_name,
                member.kind,
                member.owner
            );
            return Ok(Some(member));
        }
    }
    Ok(None)
}

/// Whether the method's erased parameters equal the written types.
fn method_params_match(
    symbols: &dyn SymbolTable,
    types: &TypeResolver<'_>,
    method: &Member,
    written: &[String],
) -> Result<bool, DocGenError> {
    let declared = symbols.erased_parameter_types(method);
    if declared.len() != written.len() {
        return Ok(false);
    }
    for (declared, written) in declared.iter().zip(written) {
        match types.resolve(written)? {
            Some(resolved) if symbols.is_same_type(&resolved, declared) => {}
            _ => return Ok(false),
        }
    }
    Ok(true)
}

// ============================================================================
// RESOLVER
// ============================================================================

/// Result of resolving a link reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveResult {
    /// Successfully resolved.
    Found(ResolvedSymbol),
    /// Could not resolve the reference.
    NotFound,
}

impl ResolveResult {
    /// Get the resolved symbol.
    pub fn symbol(&self) -> Option<&ResolvedSymbol> {
        match self {
            ResolveResult::Found(s) => Some(s),
            ResolveResult::NotFound => None,
        }
    }

    /// Check if resolution was successful.
    pub fn is_found(&self) -> bool {
        matches!(self, ResolveResult::Found(_))
    }
}

impl From<Option<ResolvedSymbol>> for ResolveResult {
    fn from(symbol: Option<ResolvedSymbol>) -> Self {
        symbol.map_or(ResolveResult::NotFound, ResolveResult::Found)
    }
}

/// Resolves parsed link references for one module.
pub struct Resolver<'a> {
    symbols: &'a dyn SymbolTable,
    types: TypeResolver<'a>,
}

impl<'a> Resolver<'a> {
    pub fn new(symbols: &'a dyn SymbolTable, module: &ModuleHandle, config: &DocGenConfig) -> Self {
        Self {
            symbols,
            types: TypeResolver::new(symbols, module, config),
        }
    }

    /// The type-name resolver for this module.
    pub fn types(&self) -> &TypeResolver<'a> {
        &self.types
    }

    /// Resolve a reference.
    ///
    /// Without a member the target is tried as a type first, then as a
    /// module. With a member the target must be a type.
    pub fn resolve(&self, reference: &ParsedReference) -> Result<ResolveResult, DocGenError> {
        let target = reference.target_name.as_str();

        if !reference.is_member() {
            if let Some(ty) = self.types.resolve_declared(target)? {
                return Ok(ResolveResult::Found(ResolvedSymbol::Type(ty)));
            }
            let module = self.symbols.lookup_module(target).map(ResolvedSymbol::Module);
            return Ok(module.into());
        }

        let Some(owner) = self.types.resolve_declared(target)? else {
            tracing::debug!("[RESOLVE] Target type '{}' not found", target);
            return Ok(ResolveResult::NotFound);
        };

        let member = resolve_member(self.symbols, &self.types, &owner, reference)?;
        Ok(member
            .map(|member| match member.kind {
                MemberKind::Field => ResolvedSymbol::Field { owner, field: member },
                _ => ResolvedSymbol::Method { owner, method: member },
            })
            .into())
    }
}
