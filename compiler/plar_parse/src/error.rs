//! Parse error types.

use plar_ir::Span;

/// What went wrong while parsing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("esperado {expected}, encontrado {found}")]
    UnexpectedToken { expected: String, found: String },

    #[error("caractere inesperado `{0}`")]
    InvalidToken(String),

    #[error("alvo de atribuicao invalido")]
    InvalidAssignmentTarget,

    #[error("`importar` so pode aparecer no inicio do arquivo")]
    LateImport,
}

/// A parse failure with the location of the offending token.
///
/// Parsing is fail-fast: the first error aborts the parse.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    #[cold]
    pub fn unexpected(expected: String, found: String, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedToken { expected, found },
            span,
        }
    }

    #[cold]
    pub fn invalid_token(text: String, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::InvalidToken(text),
            span,
        }
    }

    #[cold]
    pub fn invalid_assignment_target(span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::InvalidAssignmentTarget,
            span,
        }
    }

    #[cold]
    pub fn late_import(span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::LateImport,
            span,
        }
    }
}
