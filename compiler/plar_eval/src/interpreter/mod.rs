//! The tree-walking interpreter.
//!
//! # Module Structure
//!
//! - `builder`: `InterpreterBuilder` and configuration defaults
//! - `scope_guard`: RAII guard that restores the current scope and call depth
//! - `exec`: statements and control flow
//! - `expr`: expressions, member access, indexing, assignment
//! - `call`: function and method invocation
//! - `construct`: object construction
//! - `imports`: `importar` processing

mod builder;
mod call;
mod construct;
mod exec;
mod expr;
mod imports;
mod scope_guard;

use std::rc::Rc;

use plar_ir::Program;
use rustc_hash::FxHashSet;

pub use builder::{
    CatchPolicy, InterpreterBuilder, InterpreterConfig, DEFAULT_MAX_CALL_DEPTH,
    DEFAULT_MAX_LOOP_ITERATIONS,
};
pub use exec::{ExecResult, Flow};
pub use scope_guard::ScopedInterpreter;

use crate::environment::{LocalScope, Scope};
use crate::errors::{signal_outside_construct, EvalError};
use crate::module_loader::ModuleLoader;
use crate::print_handler::SharedPrintHandler;
use crate::registry::ClassRegistry;
use crate::Value;

/// Interpreter state for one script session.
///
/// `env` is the current scope; it starts as `globals` and is only ever
/// changed through a [`ScopedInterpreter`] guard, which puts the previous
/// scope back on every exit path.
pub struct Interpreter {
    pub(crate) globals: LocalScope<Scope>,
    pub(crate) env: LocalScope<Scope>,
    pub(crate) registry: ClassRegistry,
    /// Import literals already processed, compared verbatim.
    pub(crate) imported: FxHashSet<String>,
    pub(crate) loader: Rc<dyn ModuleLoader>,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) config: InterpreterConfig,
    pub(crate) call_depth: usize,
}

impl Interpreter {
    /// Interpreter with default configuration and the native library.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn globals(&self) -> &LocalScope<Scope> {
        &self.globals
    }

    /// Look up a global binding.
    pub fn global(&self, name: &str) -> Option<Value> {
        self.globals.borrow().get(name)
    }

    pub fn define_global(&mut self, name: &str, value: Value) {
        self.globals.borrow_mut().define(name, value);
    }

    pub fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Execute a parsed program against the global scope.
    ///
    /// Imports run first, then every interface and class in the file is
    /// registered so declarations may refer to ones appearing later, then
    /// statements run in order. Side effects performed before a failure are
    /// kept. A `retornar`, `quebrar` or `continuar` that reaches this level
    /// is an error.
    pub fn run(&mut self, program: &Program) -> Result<(), EvalError> {
        for import in &program.imports {
            self.import(&import.path)
                .map_err(|err| err.with_span(import.span))?;
        }
        self.preregister(program);

        let mut scoped = self.scoped_at(self.globals.clone());
        for stmt in &program.stmts {
            let flow = scoped.exec_stmt(stmt)?;
            if flow != Flow::Normal {
                return Err(
                    signal_outside_construct(exec::signal_keyword(&flow)).with_span(stmt.span)
                );
            }
        }
        Ok(())
    }

    /// Register every interface, then every class, without validation.
    fn preregister(&mut self, program: &Program) {
        for interface in program.interfaces() {
            self.registry.define_interface(Rc::clone(interface));
        }
        for class in program.classes() {
            self.registry.define_class(Rc::clone(class));
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
