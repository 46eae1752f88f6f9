//! Diagnostics: per-module error reporting.
//!
//! Every failure the driver catches becomes a [`Diagnostic`] attributed to
//! a module and handed to a [`DiagnosticSink`].

use std::sync::Arc;

use crate::base::Name;
use crate::error::DocGenError;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// A diagnostic message attributed to a module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Qualified name of the module the message is about.
    pub module: Name,
    /// Severity level.
    pub severity: Severity,
    /// Error code (e.g., "E0002").
    pub code: Option<Arc<str>>,
    /// The diagnostic message.
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(module: impl Into<Name>, message: impl Into<Arc<str>>) -> Self {
        Self {
            module: module.into(),
            severity: Severity::Error,
            code: None,
            message: message.into(),
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(module: impl Into<Name>, message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(module, message)
        }
    }

    /// Set the error code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Build the error diagnostic for a rendering failure.
    pub fn from_error(module: impl Into<Name>, error: &DocGenError) -> Self {
        Self::error(module, error.to_string()).with_code(codes::for_error(error))
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(
                f,
                "{}[{}] {}: {}",
                self.severity.as_str(),
                code,
                self.module,
                self.message
            ),
            None => write!(f, "{} {}: {}", self.severity.as_str(), self.module, self.message),
        }
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Standard diagnostic codes.
pub mod codes {
    use crate::error::DocGenError;

    /// Reference string does not parse.
    pub const MALFORMED_SIGNATURE: &str = "E0001";
    /// No type or member matches a reference.
    pub const UNRESOLVED_LINK: &str = "E0002";
    /// Included sub-module does not exist.
    pub const MISSING_MODULE: &str = "E0003";
    /// Module included while already being rendered.
    pub const CIRCULAR_INCLUDE: &str = "E0004";
    /// Import declaration without a qualifier.
    pub const MALFORMED_IMPORT: &str = "E0005";
    /// Member lookup without a member name.
    pub const MISSING_MEMBER_NAME: &str = "E0006";

    pub fn for_error(error: &DocGenError) -> &'static str {
        match error {
            DocGenError::MalformedSignature { .. } => MALFORMED_SIGNATURE,
            DocGenError::UnresolvedLink { .. } => UNRESOLVED_LINK,
            DocGenError::MissingModule { .. } => MISSING_MODULE,
            DocGenError::CircularInclude { .. } => CIRCULAR_INCLUDE,
            DocGenError::MalformedImport { .. } => MALFORMED_IMPORT,
            DocGenError::MissingMemberName { .. } => MISSING_MEMBER_NAME,
        }
    }
}

// ============================================================================
// SINKS
// ============================================================================

/// Receives diagnostics produced during a run.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics in memory.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// All collected diagnostics, in report order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Diagnostics reported against `module`.
    pub fn for_module<'a>(&'a self, module: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.module == module)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Take the collected diagnostics, leaving the collector empty.
    pub fn finish(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.add(diagnostic);
    }
}
