//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.

use plar_ir::{Span, Token, TokenKind, TokenList};

use crate::ParseError;

/// Cursor over a `TokenList`.
///
/// Invariant: the list ends with `Eof` and `pos` never moves past it, so
/// `current()` is always valid.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor {
            tokens: tokens.as_slice(),
            pos: 0,
        }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the current token. An empty list behaves as a lone `Eof`.
    #[inline]
    pub fn current(&self) -> &'a Token {
        static EOF: Token = Token {
            kind: TokenKind::Eof,
            span: Span::DUMMY,
        };
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .unwrap_or(&EOF)
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|idx| self.tokens.get(idx))
            .map_or(Span::DUMMY, |token| token.span)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token has the same variant as `kind`.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind().same_kind(kind)
    }

    #[inline]
    pub fn check_ident(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Ident(_))
    }

    /// Peek at the kind after the current token.
    #[inline]
    pub fn peek_next_kind(&self) -> &'a TokenKind {
        static EOF: TokenKind = TokenKind::Eof;
        self.tokens
            .get(self.pos + 1)
            .map_or(&EOF, |token| &token.kind)
    }

    /// Consume the current token and return it. `Eof` is never consumed.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or fail with "expected X".
    pub fn expect(&mut self, kind: &TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(self.unexpected(format!("`{}`", kind.symbol())))
        }
    }

    /// Consume an identifier and return its text.
    pub fn expect_ident(&mut self, what: &str) -> Result<(String, Span), ParseError> {
        match self.current_kind() {
            TokenKind::Ident(name) => {
                let span = self.advance().span;
                Ok((name.clone(), span))
            }
            _ => Err(self.unexpected(what.to_string())),
        }
    }

    /// Build an "expected X, found Y" error at the current token.
    ///
    /// Error tokens from the lexer are reported as such instead.
    #[cold]
    pub fn unexpected(&self, expected: String) -> ParseError {
        let token = self.current();
        match &token.kind {
            TokenKind::Error(text) => ParseError::invalid_token(text.clone(), token.span),
            found => ParseError::unexpected(expected, found.describe(), token.span),
        }
    }
}
