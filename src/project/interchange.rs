//! JSON workspace descriptions.
//!
//! ```json
//! {
//!   "config": { "default_namespace": "java.lang" },
//!   "modules": [
//!     { "name": "test.proj", "imports": ["io.vertx.core.Vertx"],
//!       "doc": "/** See {@link Vertx}. */", "generate": true }
//!   ],
//!   "types": [
//!     { "name": "io.vertx.core.Vertx", "supertypes": [],
//!       "members": [ { "name": "vertx", "kind": "method", "params": [] } ] }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::workspace::Workspace;
use crate::base::{DocGenConfig, Name};
use crate::hir::{MemberKind, ModuleDecl, TypeDecl, TypeRef};

/// Errors that can occur while loading a workspace description.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A module or type declared twice.
    #[error("Duplicate {kind}: {name}")]
    Duplicate { kind: &'static str, name: String },
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceFile {
    pub config: Option<DocGenConfig>,
    pub modules: Vec<ModuleEntry>,
    pub types: Vec<TypeEntry>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleEntry {
    pub name: Name,
    pub imports: Vec<Name>,
    pub static_imports: Vec<Name>,
    pub doc: Option<String>,
    pub generate: bool,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeEntry {
    pub name: Name,
    pub supertypes: Vec<Name>,
    pub members: Vec<MemberEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MemberEntry {
    pub name: Name,
    pub kind: MemberKind,
    #[serde(default)]
    pub params: Vec<TypeRef>,
}

/// Parse a workspace description.
pub fn load_workspace_json(json: &str) -> Result<Workspace, InterchangeError> {
    let file: WorkspaceFile = serde_json::from_str(json)?;
    build_workspace(file)
}

/// Build a workspace from a parsed description.
pub fn build_workspace(file: WorkspaceFile) -> Result<Workspace, InterchangeError> {
    let mut workspace = Workspace::with_config(file.config.unwrap_or_default());

    for entry in file.types {
        if workspace.index().type_decl(&entry.name).is_some() {
            return Err(InterchangeError::Duplicate {
                kind: "type",
                name: entry.name.to_string(),
            });
        }
        let mut decl = TypeDecl::new(entry.name);
        decl.supertypes = entry.supertypes;
        for member in entry.members {
            decl = decl.with_member(member.name, member.kind, member.params);
        }
        workspace.add_type(decl);
    }

    for entry in file.modules {
        if workspace.index().module_decl(&entry.name).is_some() {
            return Err(InterchangeError::Duplicate {
                kind: "module",
                name: entry.name.to_string(),
            });
        }
        let mut decl = ModuleDecl::new(entry.name.clone());
        for path in entry.imports {
            decl = decl.with_import(path);
        }
        for path in entry.static_imports {
            decl = decl.with_static_import(path);
        }
        workspace.add_module(decl);
        if let Some(doc) = entry.doc {
            workspace.set_doc_comment(entry.name.clone(), doc);
        }
        if entry.generate {
            workspace.mark_generated(entry.name);
        }
    }

    tracing::debug!(
        "[INTERCHANGE] Loaded {} type(s), {} module(s)",
        workspace.index().type_count(),
        workspace.index().module_count()
    );
    Ok(workspace)
}
