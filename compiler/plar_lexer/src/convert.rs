//! Raw token to `TokenKind` conversion.

use plar_ir::TokenKind;

use crate::escape::unescape_text;
use crate::raw_token::RawToken;

/// Convert a raw token to its `TokenKind`.
///
/// Comments never reach this point; `lex` drops them first.
pub(crate) fn convert_token(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::Integer(n) => TokenKind::Integer(n),
        RawToken::Real(r) => TokenKind::Real(r),
        RawToken::Text => TokenKind::Text(unescape_text(slice)),
        RawToken::UnterminatedText => TokenKind::Error(slice.to_string()),
        RawToken::Ident => TokenKind::Ident(slice.to_string()),

        RawToken::Class => TokenKind::Class,
        RawToken::Extends => TokenKind::Extends,
        RawToken::Implements => TokenKind::Implements,
        RawToken::Interface => TokenKind::Interface,
        RawToken::Function => TokenKind::Function,
        RawToken::Var => TokenKind::Var,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::While => TokenKind::While,
        RawToken::For => TokenKind::For,
        RawToken::Do => TokenKind::Do,
        RawToken::Return => TokenKind::Return,
        RawToken::Break => TokenKind::Break,
        RawToken::Continue => TokenKind::Continue,
        RawToken::Try => TokenKind::Try,
        RawToken::Catch => TokenKind::Catch,
        RawToken::New => TokenKind::New,
        RawToken::This => TokenKind::This,
        RawToken::Null => TokenKind::Null,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::Import => TokenKind::Import,
        RawToken::And => TokenKind::And,
        RawToken::Or => TokenKind::Or,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Bang => TokenKind::Bang,

        RawToken::LineComment | RawToken::BlockComment => TokenKind::Error(slice.to_string()),
    }
}
