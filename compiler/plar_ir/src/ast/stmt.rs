//! Statement nodes.

use std::rc::Rc;

use super::{ClassDecl, Expr, FunctionDecl, InterfaceDecl};
use crate::Span;

/// A sequence of statements executed in its own scope.
pub type Block = Vec<Stmt>;

#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

/// `var nome: Tipo = valor`
///
/// Also used for class field declarations, whose initializers run at
/// construction time.
#[derive(Clone, Debug, PartialEq)]
pub struct VarDecl {
    pub name: String,
    pub ty: Option<String>,
    pub init: Expr,
    pub span: Span,
}

/// The optional first clause of a `para` loop header.
#[derive(Clone, Debug, PartialEq)]
pub enum ForInit {
    Var(VarDecl),
    Expr(Expr),
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    Var(VarDecl),
    Function(Rc<FunctionDecl>),
    Class(Rc<ClassDecl>),
    Interface(Rc<InterfaceDecl>),
    Expr(Expr),
    Block(Block),
    If {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        cond: Expr,
        body: Box<Stmt>,
    },
    For {
        init: Option<ForInit>,
        cond: Expr,
        step: Option<Expr>,
        body: Box<Stmt>,
    },
    /// `faca corpo enquanto (cond)`
    DoWhile {
        body: Box<Stmt>,
        cond: Expr,
    },
    Return(Option<Expr>),
    Break,
    Continue,
    /// `tentar { } capturar (nome) { }`
    Try {
        body: Block,
        catch_name: Option<String>,
        handler: Block,
    },
}
