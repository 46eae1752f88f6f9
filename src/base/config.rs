//! Run configuration.

use super::constants::{DEFAULT_NAMESPACE, INCLUDE_TAG, LINK_TAGS};
use super::name::Name;

/// Settings shared by the comment parser, the resolvers and the driver.
///
/// The defaults describe Java-style sources: `java.lang` is always in scope,
/// `{@link}`/`{@linkplain}` produce links and `{@include}` splices a
/// sub-module.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DocGenConfig {
    /// Namespace searched last when resolving an unqualified type name.
    pub default_namespace: Name,
    /// Inline tag that includes a direct sub-module.
    pub include_tag: Name,
    /// Inline tags parsed as cross-reference links.
    pub link_tags: Vec<Name>,
}

impl Default for DocGenConfig {
    fn default() -> Self {
        Self {
            default_namespace: Name::new(DEFAULT_NAMESPACE),
            include_tag: Name::new(INCLUDE_TAG),
            link_tags: LINK_TAGS.iter().map(|t| Name::new(t)).collect(),
        }
    }
}

impl DocGenConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the implicit default namespace.
    pub fn with_default_namespace(mut self, namespace: impl Into<Name>) -> Self {
        self.default_namespace = namespace.into();
        self
    }

    /// Set the inclusion tag name.
    pub fn with_include_tag(mut self, tag: impl Into<Name>) -> Self {
        self.include_tag = tag.into();
        self
    }

    /// Replace the set of link tag names.
    pub fn with_link_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Name>,
    {
        self.link_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `tag` produces a link.
    pub fn is_link_tag(&self, tag: &str) -> bool {
        self.link_tags.iter().any(|t| t == tag)
    }

    /// Whether `tag` is the inclusion tag.
    pub fn is_include_tag(&self, tag: &str) -> bool {
        self.include_tag == tag
    }
}
