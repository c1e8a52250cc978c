//! Function and method invocation.

use std::rc::Rc;

use plar_ir::FunctionDecl;

use super::exec::signal_keyword;
use super::{Flow, Interpreter};
use crate::environment::Scope;
use crate::errors::{
    arity_mismatch, method_not_found, not_callable, recursion_limit, return_type_mismatch,
    signal_outside_construct, EvalResult,
};
use crate::value::{FunctionBody, Heap, ObjectValue};
use crate::Value;

impl Interpreter {
    /// Call any value; only functions are callable.
    pub fn call_value(&mut self, callee: &Value, args: Vec<Value>) -> EvalResult {
        match callee {
            Value::Function(function) => match &function.body {
                FunctionBody::Native(native) => {
                    let native = Rc::clone(native);
                    native(self, args)
                }
                FunctionBody::User { decl, closure } => {
                    let scope = Scope::with_parent(closure.clone());
                    self.invoke(decl, scope, args)
                }
            },
            other => Err(not_callable(other.type_name())),
        }
    }

    /// Call `method` on `receiver`, resolving it through the class hierarchy.
    ///
    /// Methods run in a scope rooted at the globals with `este` bound to the
    /// receiver; they do not see the caller's locals.
    pub fn call_method(
        &mut self,
        receiver: &Heap<ObjectValue>,
        method: &str,
        args: Vec<Value>,
    ) -> EvalResult {
        let decl = self
            .registry
            .find_method(&receiver.class, method)
            .ok_or_else(|| method_not_found(method, &receiver.class))?;
        let scope = Scope::with_parent(self.globals.clone()).with_this(receiver.clone());
        self.invoke(&decl, scope, args)
    }

    /// Bind parameters into `scope`, run the body, and turn its outcome into
    /// the call's result.
    ///
    /// Extra arguments are an error; missing ones bind to `nulo`. An
    /// explicit `retornar` is checked against the declared return type.
    #[tracing::instrument(level = "debug", skip_all, fields(function = %decl.name, args = args.len()))]
    pub(crate) fn invoke(
        &mut self,
        decl: &FunctionDecl,
        mut scope: Scope,
        args: Vec<Value>,
    ) -> EvalResult {
        if args.len() > decl.params.len() {
            return Err(arity_mismatch(&decl.name, decl.params.len(), args.len()));
        }
        if self.call_depth >= self.config.max_call_depth {
            return Err(recursion_limit(self.config.max_call_depth));
        }
        let mut args = args.into_iter();
        for param in &decl.params {
            scope.define(param, args.next().unwrap_or(Value::Null));
        }

        let flow = self.call_scope(scope).exec_stmts(&decl.body)?;
        match flow {
            Flow::Normal => Ok(Value::Null),
            Flow::Return(value) => match &decl.return_type {
                Some(ty) if !value.matches_type(ty) => Err(return_type_mismatch(
                    &decl.name,
                    ty,
                    value.type_name(),
                )),
                _ => Ok(value),
            },
            signal @ (Flow::Break | Flow::Continue) => {
                Err(signal_outside_construct(signal_keyword(&signal)))
            }
        }
    }
}
