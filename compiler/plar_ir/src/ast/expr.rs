//! Expression nodes.

use std::rc::Rc;

use super::{BinaryOp, FunctionDecl, UnaryOp};
use crate::Span;

/// An expression with its source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// `nulo`
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    /// `verdadeiro` / `falso`
    Logic(bool),
    /// `este`
    This,
    Ident(String),

    /// `Lista(n)`: a list of `n` nulls.
    ListNew(Box<Expr>),
    /// `Mapa()`: an empty map.
    MapNew,

    /// `callee(args)`. When `callee` is a bare identifier, methods on the
    /// bound `este` are tried before free functions.
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    /// `receiver.method(args)`
    MethodCall {
        receiver: Box<Expr>,
        method: String,
        args: Vec<Expr>,
    },
    /// `receiver.name`
    Field {
        receiver: Box<Expr>,
        name: String,
    },
    /// `receiver[index]`
    Index {
        receiver: Box<Expr>,
        index: Box<Expr>,
    },
    /// `novo Classe(args)`
    New {
        class: String,
        args: Vec<Expr>,
    },

    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Assign {
        target: AssignTarget,
        value: Box<Expr>,
    },

    /// Function literal: `funcao (a, b) { ... }`
    Function(Rc<FunctionDecl>),
}

/// The left-hand side of `=`.
#[derive(Clone, Debug, PartialEq)]
pub enum AssignTarget {
    Variable(String),
    Field { receiver: Box<Expr>, name: String },
    Index { receiver: Box<Expr>, index: Box<Expr> },
}
