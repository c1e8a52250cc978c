//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! conversion into the shared `TokenKind`.

use logos::Logos;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    #[token("classe")]
    Class,
    #[token("estende")]
    Extends,
    #[token("implementa")]
    Implements,
    #[token("interface")]
    Interface,
    #[token("funcao")]
    #[token("função")]
    Function,
    #[token("var")]
    Var,
    #[token("se")]
    If,
    #[token("senao")]
    #[token("senão")]
    Else,
    #[token("enquanto")]
    While,
    #[token("para")]
    For,
    #[token("faca")]
    #[token("faça")]
    Do,
    #[token("retornar")]
    Return,
    #[token("quebrar")]
    Break,
    #[token("continuar")]
    Continue,
    #[token("tentar")]
    Try,
    #[token("capturar")]
    Catch,
    #[token("novo")]
    New,
    #[token("este")]
    This,
    #[token("nulo")]
    Null,
    #[token("verdadeiro")]
    True,
    #[token("falso")]
    False,
    #[token("importar")]
    Import,
    #[token("e", priority = 3)]
    #[token("&&")]
    And,
    #[token("ou")]
    #[token("||")]
    Or,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("!")]
    Bang,

    // Literals. Integers that do not fit in i64 fail the callback and
    // surface as error tokens.
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Integer(i64),

    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Real(f64),

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    Text,

    #[regex(r#""([^"\\\n]|\\.)*"#)]
    UnterminatedText,

    #[regex(r"[\p{L}_][\p{L}\p{N}_]*")]
    Ident,
}
