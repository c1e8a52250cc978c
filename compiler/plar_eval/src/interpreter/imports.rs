//! `importar` processing.

use std::rc::Rc;

use plar_ir::Program;

use super::Interpreter;
use crate::errors::{file_error, EvalError, EvalErrorKind};

impl Interpreter {
    /// Import the file named by `literal` into the global scope.
    ///
    /// Literals are deduplicated verbatim: importing the same text twice is
    /// a no-op, while two spellings of one file are processed twice. The
    /// file's own imports run first, then its interfaces, classes, functions
    /// and variables, in that order regardless of source order. Failures
    /// come back as file errors.
    pub fn import(&mut self, literal: &str) -> Result<(), EvalError> {
        if !self.imported.insert(literal.to_string()) {
            tracing::debug!(path = literal, "already imported; skipping");
            return Ok(());
        }
        tracing::debug!(path = literal, "importing");
        let loader = Rc::clone(&self.loader);
        let program = loader
            .load(literal)
            .map_err(|err| file_error(err.to_string()))?;
        let globals = self.globals.clone();
        self.with_scope(globals, |scoped| scoped.merge_program(&program))
            .map_err(|err| match err.kind {
                // Spans inside the imported file mean nothing to the importer.
                EvalErrorKind::File { .. } => EvalError { span: None, ..err },
                _ => file_error(format!("{literal}: {}", err.message)),
            })
    }

    fn merge_program(&mut self, program: &Program) -> Result<(), EvalError> {
        for import in &program.imports {
            self.import(&import.path)?;
        }
        for interface in program.interfaces() {
            self.registry.define_interface(Rc::clone(interface));
        }
        for class in program.classes() {
            self.registry.define_class(Rc::clone(class));
        }
        for class in program.classes() {
            self.declare_class(class)?;
        }
        for function in program.functions() {
            let value = self.make_function(function)?;
            self.env.borrow_mut().define(&function.name, value);
        }
        for var in program.variables() {
            self.exec_var_decl(var)?;
        }
        Ok(())
    }
}
