//! Project management: workspaces and the documentation driver.
//!
//! - [`Workspace`]: In-memory project implementing every collaborator trait
//! - [`DocGenerator`]: Pass-based driver with a run-wide failure set
//! - [`ResultStore`]: In-memory [`ResultSink`]

mod driver;
#[cfg(feature = "interchange")]
pub mod interchange;
mod sink;
mod workspace;

pub use driver::{DocGenerator, PassReport, RunContext};
pub use sink::{ModuleDiscovery, ResultSink, ResultStore};
pub use workspace::Workspace;
