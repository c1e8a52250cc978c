//! Grammar productions, split by syntactic category.
//!
//! - `item.rs`: imports, functions, classes, interfaces
//! - `stmt.rs`: statements and blocks
//! - `expr/`: the expression precedence cascade

mod expr;
mod item;
mod stmt;
