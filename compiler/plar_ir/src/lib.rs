//! Plar IR - shared front-end data for the Plar interpreter.
//!
//! This crate holds the types every other stage agrees on:
//! - `Span`: byte ranges into a source file
//! - `Token`, `TokenKind`, `TokenList`: lexer output
//! - `ast`: the syntax tree the parser produces and the evaluator walks

pub mod ast;
mod span;
mod token;

pub use ast::{
    AssignTarget, BinaryOp, Block, ClassDecl, Expr, ExprKind, ForInit, FunctionDecl, ImportDecl,
    InterfaceDecl, MethodSignature, Program, Stmt, StmtKind, UnaryOp, VarDecl,
};
pub use span::{LineCol, Span, SpanError};
pub use token::{Token, TokenKind, TokenList};

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}
