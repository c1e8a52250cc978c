//! Token types for the Plar lexer.

use super::Span;
use std::fmt;

/// A token with its span in the source.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Token kinds for Plar.
///
/// Keywords are Portuguese; the variant names describe their role.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// Integer literal: `42`
    Integer(i64),
    /// Real literal: `3.14`
    Real(f64),
    /// Text literal with escapes already resolved: `"ola\n"`
    Text(String),
    /// Identifier, including the `Lista`/`Mapa` constructors and type names.
    Ident(String),

    Class,      // classe
    Extends,    // estende
    Implements, // implementa
    Interface,  // interface
    Function,   // funcao
    Var,        // var
    If,         // se
    Else,       // senao
    While,      // enquanto
    For,        // para
    Do,         // faca / faça
    Return,     // retornar
    Break,      // quebrar
    Continue,   // continuar
    Try,        // tentar
    Catch,      // capturar
    New,        // novo
    This,       // este
    Null,       // nulo
    True,       // verdadeiro
    False,      // falso
    Import,     // importar
    And,        // e / &&
    Or,         // ou / ||

    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    LBracket,  // [
    RBracket,  // ]
    Comma,     // ,
    Semicolon, // ;
    Colon,     // :
    Dot,       // .
    Eq,        // =
    EqEq,      // ==
    NotEq,     // !=
    Lt,        // <
    LtEq,      // <=
    Gt,        // >
    GtEq,      // >=
    Plus,      // +
    Minus,     // -
    Star,      // *
    Slash,     // /
    Percent,   // %
    Bang,      // !

    /// Unrecognized input or an unterminated literal.
    Error(String),
    Eof,
}

impl TokenKind {
    /// Human-readable description used in parser diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Integer(n) => format!("inteiro `{n}`"),
            TokenKind::Real(r) => format!("real `{r}`"),
            TokenKind::Text(_) => "texto".to_string(),
            TokenKind::Ident(name) => format!("identificador `{name}`"),
            TokenKind::Error(text) => format!("caractere inesperado `{text}`"),
            TokenKind::Eof => "fim do arquivo".to_string(),
            other => format!("`{}`", other.symbol()),
        }
    }

    /// Source spelling of keyword and punctuation tokens.
    pub fn symbol(&self) -> &'static str {
        match self {
            TokenKind::Class => "classe",
            TokenKind::Extends => "estende",
            TokenKind::Implements => "implementa",
            TokenKind::Interface => "interface",
            TokenKind::Function => "funcao",
            TokenKind::Var => "var",
            TokenKind::If => "se",
            TokenKind::Else => "senao",
            TokenKind::While => "enquanto",
            TokenKind::For => "para",
            TokenKind::Do => "faca",
            TokenKind::Return => "retornar",
            TokenKind::Break => "quebrar",
            TokenKind::Continue => "continuar",
            TokenKind::Try => "tentar",
            TokenKind::Catch => "capturar",
            TokenKind::New => "novo",
            TokenKind::This => "este",
            TokenKind::Null => "nulo",
            TokenKind::True => "verdadeiro",
            TokenKind::False => "falso",
            TokenKind::Import => "importar",
            TokenKind::And => "e",
            TokenKind::Or => "ou",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Dot => ".",
            TokenKind::Eq => "=",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Bang => "!",
            TokenKind::Integer(_)
            | TokenKind::Real(_)
            | TokenKind::Text(_)
            | TokenKind::Ident(_)
            | TokenKind::Error(_)
            | TokenKind::Eof => "",
        }
    }

    /// True when the two kinds have the same variant, ignoring payloads.
    #[inline]
    pub fn same_kind(&self, other: &TokenKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// Lexer output: every token of a file, terminated by a single `Eof`.
#[derive(Clone, Default, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
