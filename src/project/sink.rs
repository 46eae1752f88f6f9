//! Driver-side collaborators: discovery and result delivery.

use indexmap::IndexMap;

use crate::base::Name;
use crate::hir::ModuleHandle;

/// Supplies the modules to render in a pass.
pub trait ModuleDiscovery {
    fn discover(&self) -> Vec<ModuleHandle>;
}

impl ModuleDiscovery for [ModuleHandle] {
    fn discover(&self) -> Vec<ModuleHandle> {
        self.to_vec()
    }
}

impl ModuleDiscovery for Vec<ModuleHandle> {
    fn discover(&self) -> Vec<ModuleHandle> {
        self.clone()
    }
}

/// Receives the rendered text of every module that rendered cleanly.
pub trait ResultSink {
    fn accept(&mut self, module: &Name, content: String);
}

/// Keeps rendered documents in memory, keyed by module name.
#[derive(Clone, Debug, Default)]
pub struct ResultStore {
    docs: IndexMap<Name, String>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered document of `module`, if any.
    pub fn get_doc(&self, module: &str) -> Option<&str> {
        self.docs.get(module).map(String::as_str)
    }

    /// Rendered documents in delivery order.
    pub fn iter(&self) -> impl Iterator<Item = (&Name, &str)> {
        self.docs.iter().map(|(name, doc)| (name, doc.as_str()))
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl ResultSink for ResultStore {
    fn accept(&mut self, module: &Name, content: String) {
        self.docs.insert(module.clone(), content);
    }
}
