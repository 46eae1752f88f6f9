//! Reference signature parsing.
//!
//! A link reference names a module or type, optionally followed by a member
//! and an optional parenthesised parameter list:
//!
//! ```text
//! io.vertx.core.Vertx
//! io.vertx.core.Vertx#vertx
//! io.vertx.core.Vertx#vertx()
//! io.vertx.core.Vertx#vertx(io.vertx.core.VertxOptions, int[])
//! ```

use thiserror::Error;
use unicode_ident::{is_xid_continue, is_xid_start};

use crate::base::constants::MEMBER_SEPARATOR;

/// A reference string split into its target, member and parameter list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedReference {
    /// Module or type name written before `#` (or the whole signature).
    pub target_name: String,
    /// Member name written after `#`.
    pub member_name: Option<String>,
    /// Written parameter types. `None` when no parentheses were written.
    pub param_types: Option<Vec<String>>,
    /// Whether parentheses were written, even empty ones.
    pub has_parens: bool,
}

impl ParsedReference {
    /// A bare module or type reference.
    pub fn bare(target: impl Into<String>) -> Self {
        Self {
            target_name: target.into(),
            member_name: None,
            param_types: None,
            has_parens: false,
        }
    }

    /// Whether this reference names a member.
    pub fn is_member(&self) -> bool {
        self.member_name.is_some()
    }

    /// Whether this reference asks for exactly a zero-argument method.
    pub fn is_empty_call(&self) -> bool {
        self.has_parens && self.param_types.as_ref().is_some_and(Vec::is_empty)
    }
}

/// Why a signature could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("empty reference")]
    Empty,

    #[error("missing target name in '{0}'")]
    MissingTarget(String),

    #[error("malformed member reference '{0}'")]
    MalformedMember(String),
}

/// Parse a raw reference string.
///
/// The first `#` whose remainder is `identifier` or `identifier(...)` closing
/// the string splits target from member. A signature containing `#` where no
/// such split exists is malformed.
pub fn parse_signature(signature: &str) -> Result<ParsedReference, SignatureError> {
    let signature = signature.trim();
    if signature.is_empty() {
        return Err(SignatureError::Empty);
    }

    if !signature.contains(MEMBER_SEPARATOR) {
        return Ok(ParsedReference::bare(signature));
    }

    for (pos, _) in signature.match_indices(MEMBER_SEPARATOR) {
        let Some((member, params)) = parse_member(&signature[pos + 1..]) else {
            continue;
        };
        let target = signature[..pos].trim();
        if target.is_empty() {
            return Err(SignatureError::MissingTarget(signature.to_string()));
        }
        let param_types = params.map(split_params);
        return Ok(ParsedReference {
            target_name: target.to_string(),
            member_name: Some(member.to_string()),
            has_parens: param_types.is_some(),
            param_types,
        });
    }

    Err(SignatureError::MalformedMember(signature.to_string()))
}

/// Match `identifier` or `identifier(...)` spanning the whole input.
fn parse_member(rest: &str) -> Option<(&str, Option<&str>)> {
    let end = identifier_len(rest)?;
    let (member, tail) = rest.split_at(end);
    if tail.is_empty() {
        return Some((member, None));
    }
    let inner = tail.strip_prefix('(')?.strip_suffix(')')?;
    Some((member, Some(inner)))
}

/// Byte length of the identifier at the start of `s`.
fn identifier_len(s: &str) -> Option<usize> {
    let mut chars = s.char_indices();
    let (_, first) = chars.next()?;
    if !is_identifier_start(first) {
        return None;
    }
    let end = chars
        .find(|&(_, c)| !is_identifier_part(c))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    Some(end)
}

fn is_identifier_start(c: char) -> bool {
    c == '_' || c == '$' || is_xid_start(c)
}

fn is_identifier_part(c: char) -> bool {
    c == '$' || is_xid_continue(c)
}

/// Split a written parameter list. Blank lists and trailing blank entries
/// yield nothing, so `m(int,)` lists one parameter.
fn split_params(params: &str) -> Vec<String> {
    let mut entries: Vec<String> = params.split(',').map(collapse_whitespace).collect();
    while entries.last().is_some_and(String::is_empty) {
        entries.pop();
    }
    entries
}

fn collapse_whitespace(entry: &str) -> String {
    entry.split_whitespace().collect::<Vec<_>>().join(" ")
}
