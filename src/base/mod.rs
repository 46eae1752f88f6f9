//! Foundation types for the docgen toolchain.
//!
//! This module provides the primitives used throughout the crate:
//! - [`Name`] - Cheaply clonable identifier/qualified-name string
//! - [`DocGenConfig`] - Run configuration (default namespace, tag names)
//! - Qualified-name helpers ([`simple_name`], [`parent_name`], [`join_name`])
//! - Language constants (primitive keywords, separators)
//!
//! This module has NO dependencies on other docgen modules.

pub mod constants;
mod config;
mod name;

pub use config::DocGenConfig;
pub use name::{Name, join_name, parent_name, simple_name};
