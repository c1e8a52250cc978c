//! Plar Eval - the tree-walking evaluator for Plar.
//!
//! # Architecture
//!
//! - [`Value`]: the closed set of runtime values
//! - [`Scope`]/[`LocalScope`]: the scope chain; closures hold their defining scope
//! - [`ClassRegistry`]: class and interface declarations, hierarchy walks
//! - `evaluate_binary`/`evaluate_unary`: operator semantics
//! - [`Interpreter`]: statements, expressions, calls, construction, imports
//! - `natives`: the built-in function library
//!
//! Statements return [`Flow`] (`Normal`, `Return`, `Break`, `Continue`);
//! errors travel separately as [`EvalError`].

mod environment;
pub mod errors;
pub mod interpreter;
mod module_loader;
mod natives;
mod operators;
mod print_handler;
mod registry;
mod unary_operators;
pub mod value;

#[cfg(test)]
mod test_helpers;

pub use environment::{LocalScope, Scope};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{
    CatchPolicy, ExecResult, Flow, Interpreter, InterpreterBuilder, InterpreterConfig,
    ScopedInterpreter, DEFAULT_MAX_CALL_DEPTH, DEFAULT_MAX_LOOP_ITERATIONS,
};
pub use module_loader::{LoadError, MemoryModuleLoader, ModuleLoader, NoModuleLoader};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use registry::ClassRegistry;
pub use unary_operators::evaluate_unary;
pub use value::{FunctionValue, Heap, MapValue, ObjectValue, Value};
