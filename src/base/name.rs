//! Qualified-name helpers.
//!
//! Names are dot-separated (`io.vertx.core.Vertx`). Modules and types share
//! the same namespace syntax.

use super::constants::QUALIFIER_SEPARATOR;

/// A cheaply clonable name. Most identifiers fit inline.
pub type Name = smol_str::SmolStr;

/// The last segment of a qualified name.
///
/// ```
/// assert_eq!(docgen::base::simple_name("java.util.List"), "List");
/// assert_eq!(docgen::base::simple_name("List"), "List");
/// ```
pub fn simple_name(qualified: &str) -> &str {
    match qualified.rfind(QUALIFIER_SEPARATOR) {
        Some(pos) => &qualified[pos + 1..],
        None => qualified,
    }
}

/// Everything before the last segment, or `None` for an unqualified name.
pub fn parent_name(qualified: &str) -> Option<&str> {
    qualified
        .rfind(QUALIFIER_SEPARATOR)
        .map(|pos| &qualified[..pos])
}

/// Join a parent name and a child segment. An empty parent yields the child.
pub fn join_name(parent: &str, child: &str) -> Name {
    if parent.is_empty() {
        Name::new(child)
    } else {
        smol_str::format_smolstr!("{parent}{QUALIFIER_SEPARATOR}{child}")
    }
}
