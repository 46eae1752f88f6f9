//! High-level IR (HIR): the symbol model and reference resolution.
//!
//! ## Key Types
//!
//! - [`SymbolTable`]: Capability interface over types, members and imports
//! - [`SymbolIndex`]: In-memory [`SymbolTable`]
//! - [`TypeResolver`]: Written type name → erased [`TypeRef`]
//! - [`Resolver`]: Parsed reference → [`ResolvedSymbol`]
//! - [`Diagnostic`]: Per-module error reports
//!
//! ## Resolution Layers
//!
//! ```text
//! ParsedReference
//!     │
//!     ▼
//! TypeResolver::resolve_declared   ← primitives, arrays, imports, default namespace
//!     │
//!     ▼
//! resolve_member                   ← field/method matching over all members
//!     │
//!     ▼
//! ResolvedSymbol
//! ```

mod diagnostics;
mod index;
mod resolve;
mod table;
mod types;

pub use diagnostics::{
    Diagnostic, DiagnosticCollector, DiagnosticSink, Severity, codes as diagnostic_codes,
};
pub use index::{ModuleDecl, SymbolIndex, TypeDecl};
pub use resolve::{ResolveResult, Resolver, TypeResolver, resolve_member};
pub use table::SymbolTable;
pub use types::{
    ImportDecl, Member, MemberKind, ModuleHandle, PrimitiveKind, ResolvedSymbol, TypeHandle,
    TypeRef,
};
