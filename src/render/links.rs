//! Link markup.
//!
//! The renderer never interprets destinations; it asks a [`LinkFormatter`]
//! for one per resolved symbol and for the final composite text.

use crate::base::constants::QUALIFIER_SEPARATOR;
use crate::hir::{Member, TypeHandle};

/// Maps resolved symbols to link destinations.
pub trait LinkFormatter {
    fn type_link(&self, ty: &TypeHandle) -> String;

    fn method_link(&self, owner: &TypeHandle, method: &Member) -> String;

    fn field_link(&self, owner: &TypeHandle, field: &Member) -> String;

    /// The text emitted for a link. Defaults to an Asciidoc inline link with
    /// a monospaced label.
    fn compose(&self, destination: &str, label: &str) -> String {
        format!("link:{destination}[`{label}`]")
    }
}

/// Destinations into a Javadoc site rooted at `base_url`.
///
/// ```text
/// io.vertx.core.Vertx            -> {base}/io/vertx/core/Vertx.html
/// io.vertx.core.Vertx#vertx()    -> {base}/io/vertx/core/Vertx.html#vertx--
/// io.vertx.core.Vertx#close(int) -> {base}/io/vertx/core/Vertx.html#close-int-
/// ```
#[derive(Clone, Debug, Default)]
pub struct JavadocLinks {
    base_url: String,
}

impl JavadocLinks {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    fn page(&self, qualified_name: &str) -> String {
        let path = qualified_name.replace(QUALIFIER_SEPARATOR, "/");
        if self.base_url.is_empty() {
            format!("{path}.html")
        } else {
            format!("{}/{path}.html", self.base_url)
        }
    }
}

impl LinkFormatter for JavadocLinks {
    fn type_link(&self, ty: &TypeHandle) -> String {
        self.page(&ty.qualified_name)
    }

    fn method_link(&self, owner: &TypeHandle, method: &Member) -> String {
        let mut anchor = format!("{}-", method.name);
        for param in &method.params {
            anchor.push_str(&param.erasure().to_string().replace("[]", ":A"));
            anchor.push('-');
        }
        if method.params.is_empty() {
            anchor.push('-');
        }
        format!("{}#{anchor}", self.page(&owner.qualified_name))
    }

    fn field_link(&self, owner: &TypeHandle, field: &Member) -> String {
        format!("{}#{}", self.page(&owner.qualified_name), field.name)
    }
}
