#![allow(clippy::unwrap_used, clippy::expect_used)]

mod expressions;
mod imports;

use pretty_assertions::assert_eq;

use crate::errors::EvalErrorKind;
use crate::test_helpers::{buffered_interpreter, error_of, run_on, run_source};
use crate::Value;

#[test]
fn side_effects_before_a_failure_are_kept() {
    let (result, output) = run_source(r#"escrever("antes"); escrever(1 / 0); escrever("depois");"#);
    assert_eq!(result.unwrap_err().kind, EvalErrorKind::DivisionByZero);
    assert_eq!(output, "antes\n");
}

#[test]
fn errors_point_at_the_failing_subexpression() {
    let source = "var x = 2;\nescrever(x + 1 / 0);";
    let err = error_of(source);
    let span = err.span.expect("error should carry a span");
    assert_eq!(&source[span.to_range()], "1 / 0");
}

#[test]
fn globals_persist_across_runs() {
    let mut interp = buffered_interpreter();
    run_on(&mut interp, "var contador = 1; funcao inc() { contador = contador + 1; }").unwrap();
    run_on(&mut interp, "inc(); inc();").unwrap();
    assert_eq!(interp.global("contador"), Some(Value::Integer(3)));
}

#[test]
fn interpreter_is_usable_after_an_error() {
    let mut interp = buffered_interpreter();
    assert!(run_on(&mut interp, "funcao f() { var local = 1; jogarErro(\"x\"); } f();").is_err());
    run_on(&mut interp, "escrever(\"ok\");").unwrap();
    assert_eq!(interp.print_handler().get_output(), "ok\n");
    assert_eq!(interp.global("local"), None);
    assert_eq!(interp.call_depth, 0);
}

#[test]
fn natives_can_be_left_out() {
    let mut interp = crate::InterpreterBuilder::new()
        .natives(false)
        .print_handler(crate::buffer_handler())
        .build();
    let err = run_on(&mut interp, "escrever(1);").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedFunction {
            name: "escrever".to_string()
        }
    );
}

#[test]
fn hosts_can_define_natives() {
    let mut interp = buffered_interpreter();
    interp.define_global(
        "dobro",
        Value::function(crate::FunctionValue::native("dobro", |_, args| {
            match args.first() {
                Some(Value::Integer(n)) => Ok(Value::Integer(n * 2)),
                _ => Ok(Value::Null),
            }
        })),
    );
    run_on(&mut interp, "escrever(dobro(21));").unwrap();
    assert_eq!(interp.print_handler().get_output(), "42\n");
}
