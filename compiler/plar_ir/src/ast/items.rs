//! Program-level items: imports and declarations.

use std::rc::Rc;

use super::{Block, Stmt, StmtKind, VarDecl};
use crate::Span;

/// A parsed source file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub imports: Vec<ImportDecl>,
    pub stmts: Vec<Stmt>,
}

impl Program {
    /// Interface declarations at the top level, in source order.
    pub fn interfaces(&self) -> impl Iterator<Item = &Rc<InterfaceDecl>> {
        self.stmts.iter().filter_map(|stmt| match &stmt.kind {
            StmtKind::Interface(decl) => Some(decl),
            _ => None,
        })
    }

    /// Class declarations at the top level, in source order.
    pub fn classes(&self) -> impl Iterator<Item = &Rc<ClassDecl>> {
        self.stmts.iter().filter_map(|stmt| match &stmt.kind {
            StmtKind::Class(decl) => Some(decl),
            _ => None,
        })
    }

    /// Function declarations at the top level, in source order.
    pub fn functions(&self) -> impl Iterator<Item = &Rc<FunctionDecl>> {
        self.stmts.iter().filter_map(|stmt| match &stmt.kind {
            StmtKind::Function(decl) => Some(decl),
            _ => None,
        })
    }

    /// Variable declarations at the top level, in source order.
    pub fn variables(&self) -> impl Iterator<Item = &VarDecl> {
        self.stmts.iter().filter_map(|stmt| match &stmt.kind {
            StmtKind::Var(decl) => Some(decl),
            _ => None,
        })
    }
}

/// `importar "caminho.plar"`
#[derive(Clone, Debug, PartialEq)]
pub struct ImportDecl {
    /// The literal path text, escapes resolved, quotes removed.
    pub path: String,
    pub span: Span,
}

/// A named or anonymous function, or a class method.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<String>,
    pub return_type: Option<String>,
    pub body: Block,
    pub span: Span,
}

/// `classe Nome estende Base implementa I1, I2 { ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct ClassDecl {
    pub name: String,
    pub superclass: Option<String>,
    pub interfaces: Vec<String>,
    pub fields: Vec<VarDecl>,
    pub methods: Vec<Rc<FunctionDecl>>,
    pub span: Span,
}

impl ClassDecl {
    /// A method declared directly on this class.
    pub fn method(&self, name: &str) -> Option<&Rc<FunctionDecl>> {
        self.methods.iter().find(|method| method.name == name)
    }
}

/// `interface Nome { funcao metodo(a); }`
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceDecl {
    pub name: String,
    pub methods: Vec<MethodSignature>,
    pub span: Span,
}

/// A required method in an interface. Only the name takes part in
/// conformance checks.
#[derive(Clone, Debug, PartialEq)]
pub struct MethodSignature {
    pub name: String,
    pub params: Vec<String>,
    pub return_type: Option<String>,
    pub span: Span,
}
