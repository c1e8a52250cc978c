//! RAII guard for the interpreter's current scope.
//!
//! Entering a block, a call or a class initializer swaps `env` (and, for
//! calls, bumps the call depth). The [`ScopedInterpreter`] guard puts both
//! back when dropped, so every exit path restores them: normal completion,
//! `?` propagation of an error, a control-flow signal, or unwinding.
//!
//! ```text
//! self.with_env_scope(|scoped| {
//!     scoped.env.borrow_mut().define("i", Value::Integer(0));
//!     scoped.exec_stmts(body)
//! }) // previous scope restored here
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::environment::{LocalScope, Scope};

/// Access the interpreter through this guard; it implements `Deref` and
/// `DerefMut`.
pub struct ScopedInterpreter<'a> {
    interpreter: &'a mut Interpreter,
    saved_env: LocalScope<Scope>,
    saved_depth: usize,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.env = self.saved_env.clone();
        self.interpreter.call_depth = self.saved_depth;
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Make `scope` current until the guard drops.
    pub fn scoped_at(&mut self, scope: LocalScope<Scope>) -> ScopedInterpreter<'_> {
        let saved_env = std::mem::replace(&mut self.env, scope);
        let saved_depth = self.call_depth;
        ScopedInterpreter {
            interpreter: self,
            saved_env,
            saved_depth,
        }
    }

    /// Open a child of the current scope until the guard drops.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_> {
        let child = LocalScope::new(Scope::with_parent(self.env.clone()));
        self.scoped_at(child)
    }

    /// Enter a call frame: make `scope` current and count one level of depth.
    pub(crate) fn call_scope(&mut self, scope: Scope) -> ScopedInterpreter<'_> {
        let mut guard = self.scoped_at(LocalScope::new(scope));
        guard.call_depth += 1;
        guard
    }

    /// Run `f` inside a fresh child scope.
    pub fn with_env_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }

    /// Run `f` with `scope` as the current scope.
    pub fn with_scope<T, F>(&mut self, scope: LocalScope<Scope>, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_>) -> T,
    {
        let mut scoped = self.scoped_at(scope);
        f(&mut scoped)
    }
}

#[cfg(test)]
mod tests;
