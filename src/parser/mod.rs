//! Parsers for the small textual grammars embedded in doc comments.
//!
//! - [`signature`] - Cross-reference signatures (`Type#member(A, B)`)

pub mod signature;

pub use signature::{ParsedReference, SignatureError, parse_signature};
