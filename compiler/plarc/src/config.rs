//! Interpreter configuration from the environment.
//!
//! `PLAR_MAX_LOOP` overrides the loop ceiling and `PLAR_MAX_DEPTH` the call
//! depth limit. Unparseable values are ignored with a warning.

use std::path::Path;
use std::rc::Rc;

use plar_eval::{InterpreterBuilder, SharedPrintHandler};

use crate::loader::FsModuleLoader;

pub const MAX_LOOP_VAR: &str = "PLAR_MAX_LOOP";
pub const MAX_DEPTH_VAR: &str = "PLAR_MAX_DEPTH";

/// Limits supplied by the user; `None` keeps the interpreter default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub max_loop_iterations: Option<usize>,
    pub max_call_depth: Option<usize>,
}

impl Overrides {
    /// Build overrides from raw variable values.
    pub fn parse(max_loop: Option<&str>, max_depth: Option<&str>) -> Self {
        Overrides {
            max_loop_iterations: max_loop.and_then(|raw| parse_limit(MAX_LOOP_VAR, raw)),
            max_call_depth: max_depth.and_then(|raw| parse_limit(MAX_DEPTH_VAR, raw)),
        }
    }

    #[must_use]
    pub fn apply(&self, mut builder: InterpreterBuilder) -> InterpreterBuilder {
        if let Some(max) = self.max_loop_iterations {
            builder = builder.max_loop_iterations(max);
        }
        if let Some(max) = self.max_call_depth {
            builder = builder.max_call_depth(max);
        }
        builder
    }
}

pub fn overrides_from_env() -> Overrides {
    let max_loop = std::env::var(MAX_LOOP_VAR).ok();
    let max_depth = std::env::var(MAX_DEPTH_VAR).ok();
    Overrides::parse(max_loop.as_deref(), max_depth.as_deref())
}

fn parse_limit(var: &str, raw: &str) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(var, value = raw, %err, "ignoring invalid limit");
            None
        }
    }
}

/// A builder wired for the CLI: filesystem imports rooted at `base_dir`,
/// the given print handler, and `overrides` applied.
pub fn interpreter_builder(
    overrides: &Overrides,
    base_dir: &Path,
    print_handler: SharedPrintHandler,
) -> InterpreterBuilder {
    let builder = InterpreterBuilder::new()
        .print_handler(print_handler)
        .module_loader(Rc::new(FsModuleLoader::new(base_dir)));
    overrides.apply(builder)
}
