//! Doc comment parser.
//!
//! Turns raw comment text into a [`DocTree`]:
//!
//! ```text
//! /**
//!  * Use {@link io.vertx.core.Vertx#vertx() the factory}.
//!  *
//!  * {@include sub}
//!  */
//! ```
//!
//! Link tags become [`DocNode::Link`] (first word is the signature, the rest
//! is the label), the inclusion tag becomes [`DocNode::Inclusion`], and any
//! other inline tag contributes its content as a [`DocNode::Container`].
//! Braces that do not close are kept as text, as are braces nested past a
//! fixed depth.

use super::doc::{DocNode, DocTree};
use super::lexer::{Token, TokenKind, tokenize};
use crate::base::DocGenConfig;

/// Parse a raw doc comment into a tree.
pub fn parse_doc_comment(raw: &str, config: &DocGenConfig) -> DocTree {
    let body = strip_comment_markers(raw);
    let tokens = tokenize(&body);
    let nodes = CommentParser { config }.parse(&tokens);
    DocTree::new(merge_text(nodes))
}

/// Remove `/**`, `*/` and leading `*` line decorations.
fn strip_comment_markers(raw: &str) -> String {
    let trimmed = raw.trim();
    let Some(inner) = trimmed.strip_prefix("/**") else {
        return raw.to_string();
    };
    let inner = inner.strip_suffix("*/").unwrap_or(inner);

    let lines: Vec<&str> = inner
        .lines()
        .map(|line| {
            let line = line.trim_start();
            match line.strip_prefix('*') {
                Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
                None => line,
            }
        })
        .collect();

    // Drop the blank lines left by the opening and closing markers.
    let start = lines.iter().position(|l| !l.trim().is_empty()).unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(start, |i| i + 1);
    lines[start..end].join("\n")
}

/// Open tags and braces nested deeper than this are kept as literal text.
const MAX_NESTING: usize = 64;

/// What opened a frame on the parser stack.
enum Opener<'a> {
    Brace,
    Tag(Token<'a>),
}

struct Frame<'a> {
    opener: Opener<'a>,
    nodes: Vec<DocNode>,
}

struct CommentParser<'t> {
    config: &'t DocGenConfig,
}

impl CommentParser<'_> {
    /// Build the node list with an explicit frame stack.
    ///
    /// Braces past [`MAX_NESTING`] are emitted as text; `literal_depth`
    /// keeps their closing braces from closing an outer frame.
    fn parse(&self, tokens: &[Token<'_>]) -> Vec<DocNode> {
        let mut root = Vec::new();
        let mut stack: Vec<Frame<'_>> = Vec::new();
        let mut literal_depth = 0usize;

        for token in tokens.iter().copied() {
            match token.kind {
                TokenKind::Text => top(&mut stack, &mut root).push(DocNode::text(token.text)),
                TokenKind::LBrace | TokenKind::TagOpen
                    if literal_depth > 0 || stack.len() >= MAX_NESTING =>
                {
                    literal_depth += 1;
                    top(&mut stack, &mut root).push(DocNode::text(token.text));
                }
                TokenKind::LBrace => stack.push(Frame {
                    opener: Opener::Brace,
                    nodes: Vec::new(),
                }),
                TokenKind::TagOpen => stack.push(Frame {
                    opener: Opener::Tag(token),
                    nodes: Vec::new(),
                }),
                TokenKind::RBrace if literal_depth > 0 => {
                    literal_depth -= 1;
                    top(&mut stack, &mut root).push(DocNode::text(token.text));
                }
                TokenKind::RBrace => match stack.pop() {
                    Some(frame) => {
                        let closed = self.close(frame);
                        top(&mut stack, &mut root).extend(closed);
                    }
                    None => root.push(DocNode::text(token.text)),
                },
            }
        }

        // Unclosed frames fall back to their literal text.
        while let Some(frame) = stack.pop() {
            let opener = match frame.opener {
                Opener::Brace => "{",
                Opener::Tag(token) => token.text,
            };
            let parent = top(&mut stack, &mut root);
            parent.push(DocNode::text(opener));
            parent.extend(frame.nodes);
        }
        root
    }

    /// Nodes produced by a frame whose closing brace was found.
    fn close(&self, frame: Frame<'_>) -> Vec<DocNode> {
        match frame.opener {
            Opener::Brace => {
                let mut nodes = Vec::with_capacity(frame.nodes.len() + 2);
                nodes.push(DocNode::text("{"));
                nodes.extend(frame.nodes);
                nodes.push(DocNode::text("}"));
                nodes
            }
            Opener::Tag(token) => {
                let name = token.tag_name().unwrap_or_default();
                vec![self.inline_tag(name, frame.nodes)]
            }
        }
    }

    fn inline_tag(&self, name: &str, content: Vec<DocNode>) -> DocNode {
        if self.config.is_link_tag(name) {
            let (signature, label) = split_reference(merge_text(content));
            DocNode::Link { signature, label }
        } else if self.config.is_include_tag(name) {
            DocNode::Inclusion(DocTree::plain_text(&content).trim().to_string())
        } else {
            DocNode::Container(merge_text(content))
        }
    }
}

/// The node list currently being filled.
fn top<'s>(stack: &'s mut [Frame<'_>], root: &'s mut Vec<DocNode>) -> &'s mut Vec<DocNode> {
    match stack.last_mut() {
        Some(frame) => &mut frame.nodes,
        None => root,
    }
}

/// Split link content into its reference and label nodes.
///
/// The reference ends at the first whitespace outside parentheses, so
/// `a.B#m(int, byte[]) label` keeps its parameter list whole.
fn split_reference(mut content: Vec<DocNode>) -> (String, Vec<DocNode>) {
    let Some(DocNode::Text(first)) = content.first() else {
        return (String::new(), content);
    };
    let first = first.trim_start();
    let end = reference_end(first);
    let (signature, rest) = (first[..end].to_string(), first[end..].trim_start().to_string());
    if rest.is_empty() {
        content.remove(0);
    } else {
        content[0] = DocNode::text(rest);
    }
    (signature, content)
}

/// Byte offset of the first whitespace at parenthesis depth zero.
fn reference_end(text: &str) -> usize {
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => return i,
            _ => {}
        }
    }
    text.len()
}

/// Join adjacent text nodes.
fn merge_text(nodes: Vec<DocNode>) -> Vec<DocNode> {
    let mut merged: Vec<DocNode> = Vec::with_capacity(nodes.len());
    for node in nodes {
        match (merged.last_mut(), node) {
            (Some(DocNode::Text(prev)), DocNode::Text(body)) => prev.push_str(&body),
            (_, node) => merged.push(node),
        }
    }
    merged
}
