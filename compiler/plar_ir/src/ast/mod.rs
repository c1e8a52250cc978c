//! Syntax tree for Plar programs.
//!
//! The tree is owned and boxed: the evaluator walks it directly. Declarations
//! that outlive a single walk (functions, classes, interfaces) sit behind `Rc`
//! so closures and the class registry can share them without cloning bodies.
//!
//! # Module Structure
//!
//! - `expr`: expressions and assignment targets
//! - `stmt`: statements, blocks and loop headers
//! - `items`: program, imports and declarations
//! - `operators`: binary and unary operators

mod expr;
mod items;
mod operators;
mod stmt;

pub use expr::{AssignTarget, Expr, ExprKind};
pub use items::{ClassDecl, FunctionDecl, ImportDecl, InterfaceDecl, MethodSignature, Program};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{Block, ForInit, Stmt, StmtKind, VarDecl};
