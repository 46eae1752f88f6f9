//! Tracks the chain of modules currently being rendered.

use crate::base::Name;
use crate::error::DocGenError;
use crate::hir::ModuleHandle;

/// Modules being rendered, outermost first.
///
/// A module may appear at most once; entering it again is a circular
/// include.
#[derive(Clone, Debug, Default)]
pub struct IncludeStack {
    entries: Vec<Name>,
}

impl IncludeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `module`, failing if it is already being rendered.
    pub fn enter(&mut self, module: &ModuleHandle) -> Result<(), DocGenError> {
        if self.contains(&module.qualified_name) {
            let mut chain = self.entries.clone();
            chain.push(module.qualified_name.clone());
            tracing::debug!("[RENDER] Circular include: {}", chain.join(" -> "));
            return Err(DocGenError::CircularInclude {
                module: module.qualified_name.clone(),
                chain,
            });
        }
        self.entries.push(module.qualified_name.clone());
        Ok(())
    }

    /// Pop the most recently entered module.
    pub fn leave(&mut self) -> Option<Name> {
        self.entries.pop()
    }

    /// Run `f` with `module` entered, leaving it again on every exit path.
    pub fn scoped<T>(
        &mut self,
        module: &ModuleHandle,
        f: impl FnOnce(&mut Self) -> Result<T, DocGenError>,
    ) -> Result<T, DocGenError> {
        self.enter(module)?;
        let result = f(self);
        self.leave();
        result
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.entries.iter().any(|e| e == qualified_name)
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entered modules, outermost first.
    pub fn entries(&self) -> &[Name] {
        &self.entries
    }
}
