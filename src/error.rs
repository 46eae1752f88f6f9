//! Error types for documentation generation.

use thiserror::Error;

use crate::base::Name;
use crate::parser::SignatureError;

/// Errors raised while rendering a module.
///
/// The first four variants are documentation-authoring mistakes: the driver
/// records them against a module and moves on. The remaining variants signal
/// input the symbol table should never produce and abort the run
/// (see [`DocGenError::is_fatal`]).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DocGenError {
    /// A link reference that does not parse.
    #[error("Malformed reference '{signature}': {source}")]
    MalformedSignature {
        module: Name,
        signature: String,
        source: SignatureError,
    },

    /// No module, type or member matches a link reference.
    #[error("Could not resolve {signature}")]
    UnresolvedLink { module: Name, signature: String },

    /// An inclusion tag names a sub-module that does not exist.
    #[error("Could not find module {target} included from {module}")]
    MissingModule { module: Name, target: Name },

    /// A module was entered again while still being rendered.
    #[error("Circular include of {module}: {}", .chain.join(" -> "))]
    CircularInclude { module: Name, chain: Vec<Name> },

    /// An import declaration without a qualifier.
    #[error("Malformed import '{import}' in {module}")]
    MalformedImport { module: Name, import: Name },

    /// Member lookup requested for a reference that names no member.
    #[error("Reference '{signature}' has no member name")]
    MissingMemberName { signature: String },
}

impl DocGenError {
    pub fn malformed_signature(
        module: &Name,
        signature: impl Into<String>,
        source: SignatureError,
    ) -> Self {
        Self::MalformedSignature {
            module: module.clone(),
            signature: signature.into(),
            source,
        }
    }

    pub fn unresolved_link(module: &Name, signature: impl Into<String>) -> Self {
        Self::UnresolvedLink {
            module: module.clone(),
            signature: signature.into(),
        }
    }

    pub fn missing_module(module: &Name, target: impl Into<Name>) -> Self {
        Self::MissingModule {
            module: module.clone(),
            target: target.into(),
        }
    }

    /// Whether this error indicates an invariant violation rather than a
    /// documentation mistake.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::MalformedImport { .. } | Self::MissingMemberName { .. }
        )
    }

    /// The module this error is attributed to.
    ///
    /// Link and inclusion failures name the module whose documentation holds
    /// the reference; a circular include names the module entered twice.
    pub fn module(&self) -> Option<&Name> {
        match self {
            Self::MalformedSignature { module, .. }
            | Self::UnresolvedLink { module, .. }
            | Self::MissingModule { module, .. }
            | Self::CircularInclude { module, .. }
            | Self::MalformedImport { module, .. } => Some(module),
            Self::MissingMemberName { .. } => None,
        }
    }
}
