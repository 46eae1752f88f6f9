//! Documentation syntax: the doc-tree model and the default comment parser.
//!
//! - [`DocNode`], [`DocTree`] - The parsed form of a module's doc comment
//! - [`parse_doc_comment`] - Builds a [`DocTree`] from raw comment text
//! - [`DocSource`] - Where the renderer gets a module's tree from

pub mod comment;
mod doc;
mod lexer;
mod source;

pub use comment::parse_doc_comment;
pub use doc::{DocNode, DocTree};
pub use source::DocSource;
