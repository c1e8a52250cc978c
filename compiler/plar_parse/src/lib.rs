//! Recursive descent parser for Plar.
//!
//! Produces an owned `ast::Program`. Parsing stops at the first error.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

use plar_ir::{Program, Span, Token, TokenKind, TokenList};
use plar_stack::ensure_sufficient_stack;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    #[inline]
    fn current_kind(&self) -> &'a TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn peek_next_kind(&self) -> &'a TokenKind {
        self.cursor.peek_next_kind()
    }

    #[inline]
    fn advance(&mut self) -> &'a Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: &TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    #[inline]
    fn expect(&mut self, kind: &TokenKind) -> Result<Span, ParseError> {
        self.cursor.expect(kind)
    }

    #[inline]
    fn expect_ident(&mut self, what: &str) -> Result<(String, Span), ParseError> {
        self.cursor.expect_ident(what)
    }

    #[inline]
    fn unexpected(&self, expected: &str) -> ParseError {
        self.cursor.unexpected(expected.to_string())
    }

    /// Parse a whole program: leading imports, then statements until `Eof`.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::default();

        while self.check(&TokenKind::Import) {
            program.imports.push(self.parse_import()?);
        }

        while !self.is_at_end() {
            if self.check(&TokenKind::Import) {
                return Err(ParseError::late_import(self.current_span()));
            }
            let stmt = ensure_sufficient_stack(|| self.parse_stmt())?;
            program.stmts.push(stmt);
        }

        tracing::debug!(
            imports = program.imports.len(),
            stmts = program.stmts.len(),
            "parsed program"
        );
        Ok(program)
    }
}

/// Parse a token list into a program.
pub fn parse(tokens: &TokenList) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}

/// Lex and parse source text.
pub fn parse_source(source: &str) -> Result<Program, ParseError> {
    let tokens = plar_lexer::lex(source);
    parse(&tokens)
}

#[cfg(test)]
mod tests;
