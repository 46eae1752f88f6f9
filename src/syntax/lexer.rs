//! Logos-based lexer for doc comment bodies.
//!
//! Only braces and inline-tag openers are significant; everything else is
//! text.

use logos::Logos;

/// A token with its kind and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `{@name`
    #[regex(r"\{@[A-Za-z][A-Za-z0-9_-]*")]
    TagOpen,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[regex(r"[^{}]+")]
    Text,
}

/// Tokenize a comment body. Unmatched input is returned as text.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut lexer = TokenKind::lexer(input);
    let mut tokens = Vec::new();
    while let Some(kind) = lexer.next() {
        tokens.push(Token {
            kind: kind.unwrap_or(TokenKind::Text),
            text: lexer.slice(),
        });
    }
    tokens
}

impl Token<'_> {
    /// The tag name of a [`TokenKind::TagOpen`] token.
    pub fn tag_name(&self) -> Option<&str> {
        match self.kind {
            TokenKind::TagOpen => self.text.get(2..),
            _ => None,
        }
    }
}
