//! `InterpreterBuilder` for creating configured `Interpreter` instances.

use std::rc::Rc;

use rustc_hash::FxHashSet;

use super::Interpreter;
use crate::environment::{LocalScope, Scope};
use crate::module_loader::{ModuleLoader, NoModuleLoader};
use crate::natives;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::registry::ClassRegistry;

/// Iterations after which any loop stops silently.
pub const DEFAULT_MAX_LOOP_ITERATIONS: usize = 10_000;

/// Nested user calls allowed before a recursion-limit error.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 2_000;

/// What `tentar ... capturar` intercepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CatchPolicy {
    /// Only runtime errors; `retornar`/`quebrar`/`continuar` pass through.
    #[default]
    ErrorsOnly,
    /// Errors and control-flow signals alike.
    Everything,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Shared by `enquanto`, `para` and `faca ... enquanto`.
    pub max_loop_iterations: usize,
    pub max_call_depth: usize,
    pub catch_policy: CatchPolicy,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            max_loop_iterations: DEFAULT_MAX_LOOP_ITERATIONS,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            catch_policy: CatchPolicy::default(),
        }
    }
}

/// Builder for [`Interpreter`].
///
/// Defaults: stdout printing, no module loader, the native library
/// registered, and [`InterpreterConfig::default`].
pub struct InterpreterBuilder {
    config: InterpreterConfig,
    print_handler: Option<SharedPrintHandler>,
    loader: Option<Rc<dyn ModuleLoader>>,
    natives: bool,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            config: InterpreterConfig::default(),
            print_handler: None,
            loader: None,
            natives: true,
        }
    }

    #[must_use]
    pub fn config(mut self, config: InterpreterConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn max_loop_iterations(mut self, max: usize) -> Self {
        self.config.max_loop_iterations = max;
        self
    }

    #[must_use]
    pub fn max_call_depth(mut self, max: usize) -> Self {
        self.config.max_call_depth = max;
        self
    }

    #[must_use]
    pub fn catch_policy(mut self, policy: CatchPolicy) -> Self {
        self.config.catch_policy = policy;
        self
    }

    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    #[must_use]
    pub fn module_loader(mut self, loader: Rc<dyn ModuleLoader>) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Whether to register `escrever`, `tamanho` and the other natives.
    #[must_use]
    pub fn natives(mut self, enabled: bool) -> Self {
        self.natives = enabled;
        self
    }

    pub fn build(self) -> Interpreter {
        let globals = LocalScope::new(Scope::new());
        let mut interpreter = Interpreter {
            env: globals.clone(),
            globals,
            registry: ClassRegistry::new(),
            imported: FxHashSet::default(),
            loader: self.loader.unwrap_or_else(|| Rc::new(NoModuleLoader)),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            config: self.config,
            call_depth: 0,
        };
        if self.natives {
            natives::register(&mut interpreter);
        }
        interpreter
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
