//! Resolution of `importar` literals into parsed programs.
//!
//! The evaluator only sees the [`ModuleLoader`] trait; the CLI supplies a
//! filesystem loader, tests use [`MemoryModuleLoader`].

use std::cell::Cell;

use plar_ir::Program;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Why an import literal could not be turned into a program.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("{path}: arquivo nao encontrado")]
    NotFound { path: String },
    #[error("{path}: {message}")]
    Io { path: String, message: String },
    #[error("{path}: erro de sintaxe: {message}")]
    Parse { path: String, message: String },
    #[error("importacao nao suportada: {path}")]
    Unsupported { path: String },
}

/// Turns an import literal into a parsed program.
pub trait ModuleLoader {
    fn load(&self, literal: &str) -> Result<Program, LoadError>;
}

/// Loader for embeddings without imports; every import fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoModuleLoader;

impl ModuleLoader for NoModuleLoader {
    fn load(&self, literal: &str) -> Result<Program, LoadError> {
        Err(LoadError::Unsupported {
            path: literal.to_string(),
        })
    }
}

/// Serves pre-parsed programs keyed by literal and counts loads.
#[derive(Default)]
pub struct MemoryModuleLoader {
    modules: FxHashMap<String, Program>,
    loads: Cell<usize>,
}

impl MemoryModuleLoader {
    pub fn new() -> Self {
        MemoryModuleLoader::default()
    }

    #[must_use]
    pub fn with_module(mut self, literal: &str, program: Program) -> Self {
        self.modules.insert(literal.to_string(), program);
        self
    }

    /// Number of successful loads so far.
    pub fn loads(&self) -> usize {
        self.loads.get()
    }
}

impl ModuleLoader for MemoryModuleLoader {
    fn load(&self, literal: &str) -> Result<Program, LoadError> {
        let program = self
            .modules
            .get(literal)
            .cloned()
            .ok_or_else(|| LoadError::NotFound {
                path: literal.to_string(),
            })?;
        self.loads.set(self.loads.get() + 1);
        Ok(program)
    }
}
