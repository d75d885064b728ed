//! Lexical stage: turns description text into a flat token list.

use std::fmt;

/// Kind of a lexical token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of characters other than whitespace and `{ } ( ) , =`.
    Ident(String),
    LBrace,
    RBrace,
    LParen,
    RParen,
    Comma,
    Equals,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(name) => write!(f, "identifier '{name}'"),
            Self::LBrace => f.write_str("'{'"),
            Self::RBrace => f.write_str("'}'"),
            Self::LParen => f.write_str("'('"),
            Self::RParen => f.write_str("')'"),
            Self::Comma => f.write_str("','"),
            Self::Equals => f.write_str("'='"),
        }
    }
}

/// A token together with its byte offset in the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

fn punctuation(c: char) -> Option<TokenKind> {
    match c {
        '{' => Some(TokenKind::LBrace),
        '}' => Some(TokenKind::RBrace),
        '(' => Some(TokenKind::LParen),
        ')' => Some(TokenKind::RParen),
        ',' => Some(TokenKind::Comma),
        '=' => Some(TokenKind::Equals),
        _ => None,
    }
}

pub(crate) fn is_ident_char(c: char) -> bool {
    !c.is_whitespace() && punctuation(c).is_none()
}

/// Whether `text` lexes as exactly one identifier.
pub(crate) fn is_identifier(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_ident_char)
}

/// Iterator over the tokens of a description fragment.
///
/// Every character is either whitespace, punctuation or part of an
/// identifier, so lexing cannot fail.
///
/// # Example
///
/// ```rust
/// use dfa_sim::parser::{Lexer, TokenKind};
///
/// let kinds: Vec<TokenKind> = Lexer::new("(q0,a)=q1").map(|t| t.kind).collect();
/// assert_eq!(kinds[0], TokenKind::LParen);
/// assert_eq!(kinds[1], TokenKind::Ident("q0".to_string()));
/// assert_eq!(kinds.len(), 7);
/// ```
pub struct Lexer<'a> {
    source: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let rest = &self.source[self.position..];
        let skipped = rest.len() - rest.trim_start().len();
        self.position += skipped;

        let offset = self.position;
        let c = self.source[offset..].chars().next()?;

        if let Some(kind) = punctuation(c) {
            self.position += c.len_utf8();
            return Some(Token { kind, offset });
        }

        let rest = &self.source[offset..];
        let len = rest.find(|c: char| !is_ident_char(c)).unwrap_or(rest.len());
        self.position += len;
        Some(Token {
            kind: TokenKind::Ident(rest[..len].to_owned()),
            offset,
        })
    }
}

/// Lex `source` into a token list.
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Cursor over a token list, used by the structural extractors.
pub(crate) struct Cursor {
    tokens: Vec<Token>,
    index: usize,
    end: usize,
}

impl Cursor {
    pub(crate) fn new(source: &str) -> Self {
        Self {
            tokens: lex(source),
            index: 0,
            end: source.len(),
        }
    }

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    pub(crate) fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.index).cloned();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.index >= self.tokens.len()
    }

    /// Offset of the next token, or the end of the source.
    pub(crate) fn offset(&self) -> usize {
        self.peek().map_or(self.end, |t| t.offset)
    }

    /// Description of the next token for error messages.
    pub(crate) fn found(&self) -> String {
        self.peek()
            .map_or_else(|| "end of input".to_string(), |t| t.kind.to_string())
    }
}
