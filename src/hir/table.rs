//! The symbol table capability consumed by the resolvers.
//!
//! Resolution never touches a concrete compiler model. Anything that can
//! look up types and modules, enumerate members and read imports can back a
//! documentation run; [`SymbolIndex`](super::SymbolIndex) is the in-memory
//! implementation.

use super::types::{ImportDecl, Member, ModuleHandle, TypeHandle, TypeRef};

pub trait SymbolTable {
    /// Look up a declared type by qualified name.
    fn lookup_type(&self, qualified_name: &str) -> Option<TypeHandle>;

    /// Look up a documentation module by qualified name.
    fn lookup_module(&self, qualified_name: &str) -> Option<ModuleHandle>;

    /// All members of a type, own and inherited, in a stable order.
    fn all_members(&self, ty: &TypeHandle) -> Vec<Member>;

    /// Import declarations of the module's compilation unit, in source order.
    fn imports(&self, module: &ModuleHandle) -> Vec<ImportDecl>;

    /// Generic erasure of a type.
    fn erasure(&self, ty: &TypeRef) -> TypeRef {
        ty.erasure()
    }

    /// A method's parameter types after erasure.
    fn erased_parameter_types(&self, method: &Member) -> Vec<TypeRef> {
        method.params.iter().map(|p| self.erasure(p)).collect()
    }

    /// Whether two types are the same after erasure.
    fn is_same_type(&self, a: &TypeRef, b: &TypeRef) -> bool {
        self.erasure(a) == self.erasure(b)
    }
}
