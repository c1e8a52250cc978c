//! Lexer for Plar using logos.
//!
//! Produces a `TokenList` whose last token is always `Eof`. Lexing never
//! fails: unrecognized input becomes a `TokenKind::Error` token and the
//! parser reports it with its span.

mod convert;
mod escape;
mod raw_token;

use logos::Logos;
use plar_ir::{Span, Token, TokenKind, TokenList};

use crate::convert::convert_token;
use crate::raw_token::RawToken;

/// Tokenize `source`.
pub fn lex(source: &str) -> TokenList {
    let mut result = TokenList::with_capacity(source.len() / 4);
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        match token_result {
            Ok(RawToken::LineComment | RawToken::BlockComment) => {}
            Ok(raw) => result.push(Token::new(convert_token(raw, slice), span)),
            Err(()) => result.push(Token::new(TokenKind::Error(slice.to_string()), span)),
        }
    }

    let eof = Span::from_range(source.len()..source.len());
    result.push(Token::new(TokenKind::Eof, eof));
    result
}
