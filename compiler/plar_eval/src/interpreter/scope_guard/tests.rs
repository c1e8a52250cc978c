#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use crate::environment::LocalScope;
use crate::errors::{undefined_variable, EvalError};
use crate::{Interpreter, InterpreterBuilder, Value};

fn interpreter() -> Interpreter {
    InterpreterBuilder::new().natives(false).build()
}

#[test]
fn scoped_restores_env_on_drop() {
    let mut interp = interpreter();
    let before = interp.env.clone();
    {
        let scoped = interp.scoped();
        assert!(!LocalScope::ptr_eq(&scoped.env, &before));
        scoped.env.borrow_mut().define("x", Value::Integer(1));
    }
    assert!(LocalScope::ptr_eq(&interp.env, &before));
    assert_eq!(interp.env.borrow().get("x"), None);
}

#[test]
fn with_env_scope_restores_on_error() {
    let mut interp = interpreter();
    let before = interp.env.clone();
    let result: Result<(), EvalError> = interp.with_env_scope(|scoped| {
        scoped.env.borrow_mut().define("x", Value::Integer(1));
        Err(undefined_variable("y"))
    });
    assert!(result.is_err());
    assert!(LocalScope::ptr_eq(&interp.env, &before));
}

#[test]
fn call_scope_counts_depth_and_restores_it() {
    let mut interp = interpreter();
    {
        let mut outer = interp.call_scope(crate::Scope::new());
        assert_eq!(outer.call_depth, 1);
        {
            let inner = outer.call_scope(crate::Scope::new());
            assert_eq!(inner.call_depth, 2);
        }
        assert_eq!(outer.call_depth, 1);
    }
    assert_eq!(interp.call_depth, 0);
}

#[test]
fn child_scope_reads_through_to_parent() {
    let mut interp = interpreter();
    interp.define_global("g", Value::text("global"));
    let seen = interp.with_env_scope(|scoped| scoped.env.borrow().get("g"));
    assert_eq!(seen, Some(Value::text("global")));
}
