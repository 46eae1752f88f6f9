//! The documentation driver.
//!
//! Runs discrete passes over the discovered modules. Each module is rendered
//! on its own; a recoverable failure is recorded against a module, reported,
//! and the pass moves on to the next module. Failures accumulate in a
//! [`RunContext`] for the whole run, and once one is recorded no later pass
//! renders anything.

use indexmap::IndexMap;

use super::sink::{ModuleDiscovery, ResultSink};
use crate::base::{DocGenConfig, Name};
use crate::error::DocGenError;
use crate::hir::{Diagnostic, DiagnosticSink, SymbolTable};
use crate::render::{LinkFormatter, Renderer};
use crate::syntax::DocSource;

// ============================================================================
// RUN CONTEXT
// ============================================================================

/// State that lives for a whole run: the failure set.
#[derive(Clone, Debug, Default)]
pub struct RunContext {
    /// Module name → failure message, in recording order.
    failures: IndexMap<Name, String>,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure. A later failure of the same module replaces the
    /// message.
    pub fn record_failure(&mut self, module: Name, message: String) {
        self.failures.insert(module, message);
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn failure(&self, module: &str) -> Option<&str> {
        self.failures.get(module).map(String::as_str)
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Name, &str)> {
        self.failures.iter().map(|(name, msg)| (name, msg.as_str()))
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
}

/// Outcome of one pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PassReport {
    /// Modules whose output was delivered.
    pub rendered: Vec<Name>,
    /// Modules whose rendering failed.
    pub failed: Vec<Name>,
    /// Whether the pass was skipped because the run already had failures.
    pub skipped: bool,
}

impl PassReport {
    fn skipped() -> Self {
        Self {
            skipped: true,
            ..Self::default()
        }
    }

    /// Number of modules attempted.
    pub fn attempted(&self) -> usize {
        self.rendered.len() + self.failed.len()
    }
}

// ============================================================================
// DRIVER
// ============================================================================

pub struct DocGenerator<'a> {
    renderer: Renderer<'a>,
    context: RunContext,
}

impl<'a> DocGenerator<'a> {
    pub fn new(
        symbols: &'a dyn SymbolTable,
        docs: &'a dyn DocSource,
        links: &'a dyn LinkFormatter,
        config: &'a DocGenConfig,
    ) -> Self {
        Self {
            renderer: Renderer::new(symbols, docs, links, config),
            context: RunContext::new(),
        }
    }

    pub fn renderer(&self) -> &Renderer<'a> {
        &self.renderer
    }

    pub fn context(&self) -> &RunContext {
        &self.context
    }

    /// Run one pass.
    ///
    /// Returns `Err` only for fatal errors; the run must stop there.
    pub fn run_pass(
        &mut self,
        discovery: &dyn ModuleDiscovery,
        diagnostics: &mut dyn DiagnosticSink,
        sink: &mut dyn ResultSink,
    ) -> Result<PassReport, DocGenError> {
        if self.context.has_failures() {
            tracing::info!(
                "[DRIVER] Skipping pass: {} module(s) already failed",
                self.context.failure_count()
            );
            return Ok(PassReport::skipped());
        }

        let mut report = PassReport::default();
        for module in discovery.discover() {
            match self.renderer.render_module(&module) {
                Ok(content) => {
                    tracing::debug!("[DRIVER] Rendered '{}'", module.qualified_name);
                    sink.accept(&module.qualified_name, content);
                    report.rendered.push(module.qualified_name);
                }
                Err(err) if err.is_fatal() => {
                    tracing::warn!("[DRIVER] Aborting run on '{}': {}", module.qualified_name, err);
                    return Err(err);
                }
                Err(err) => {
                    let attributed = err
                        .module()
                        .cloned()
                        .unwrap_or_else(|| module.qualified_name.clone());
                    tracing::debug!("[DRIVER] '{}' failed: {}", attributed, err);
                    diagnostics.report(Diagnostic::from_error(attributed.clone(), &err));
                    self.context.record_failure(attributed, err.to_string());
                    report.failed.push(module.qualified_name);
                }
            }
        }
        Ok(report)
    }
}
