//! # docgen-base
//!
//! Core library for rendering package documentation: doc comments attached to
//! modules are parsed, `{@link}` references are resolved against a symbol
//! table, and each module is flattened into one text document, with other
//! modules spliced in by reference or `{@include}`.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Workspace, pass-based driver, result sinks
//!   ↓
//! render    → Doc-tree renderer, include stack, link formatting
//!   ↓
//! hir       → Symbol table interface, type/member resolution, diagnostics
//!   ↓
//! syntax    → Doc tree, comment parser
//!   ↓
//! parser    → Reference signature parser
//!   ↓
//! base      → Names, constants, configuration
//! ```
//!
//! ## Usage
//!
//! ```
//! use docgen::hir::{DiagnosticCollector, ModuleDecl, TypeDecl};
//! use docgen::project::{DocGenerator, ResultStore, Workspace};
//! use docgen::render::JavadocLinks;
//!
//! let mut ws = Workspace::new();
//! ws.add_type(TypeDecl::new("io.vertx.core.Vertx"))
//!     .add_module(ModuleDecl::new("docs").with_import("io.vertx.core.Vertx"))
//!     .set_doc_comment("docs", "/** Start with {@link Vertx}. */")
//!     .mark_generated("docs");
//!
//! let links = JavadocLinks::new("api");
//! let mut generator = DocGenerator::new(&ws, &ws, &links, ws.config());
//! let mut diagnostics = DiagnosticCollector::new();
//! let mut results = ResultStore::new();
//! generator.run_pass(&ws, &mut diagnostics, &mut results).unwrap();
//!
//! assert_eq!(
//!     results.get_doc("docs").map(str::trim_end),
//!     Some("Start with link:api/io/vertx/core/Vertx.html[`Vertx`].")
//! );
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → hir → render → project)
// ============================================================================

/// Foundation types: names, constants, configuration
pub mod base;

/// Error types shared by resolution, rendering and the driver
pub mod error;

/// Parser: reference signatures
pub mod parser;

/// Syntax: doc tree and comment parser
pub mod syntax;

/// High-level IR: symbol table, resolution, diagnostics
pub mod hir;

/// Rendering: doc-tree walking, includes, link markup
pub mod render;

/// Project management: workspace, driver, sinks
pub mod project;

// Re-export commonly needed items
pub use base::{DocGenConfig, Name};
pub use error::DocGenError;
