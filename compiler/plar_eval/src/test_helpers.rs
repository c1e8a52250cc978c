//! Helpers for driving source text through the interpreter in tests.

#![allow(clippy::expect_used)]

use crate::errors::EvalError;
use crate::print_handler::buffer_handler;
use crate::{Interpreter, InterpreterBuilder};

/// Interpreter printing into a buffer, natives registered.
pub fn buffered_interpreter() -> Interpreter {
    InterpreterBuilder::new()
        .print_handler(buffer_handler())
        .build()
}

/// Parse and run `source` on `interp`.
pub fn run_on(interp: &mut Interpreter, source: &str) -> Result<(), EvalError> {
    let program = plar_parse::parse_source(source).expect("test source should parse");
    interp.run(&program)
}

/// Run `source` and return the outcome with everything printed.
pub fn run_source(source: &str) -> (Result<(), EvalError>, String) {
    let mut interp = buffered_interpreter();
    let result = run_on(&mut interp, source);
    (result, interp.print_handler().get_output())
}

/// Run `source`, which must succeed, and return what it printed.
pub fn output_of(source: &str) -> String {
    let (result, output) = run_source(source);
    if let Err(err) = result {
        panic!("script failed: {err}\noutput so far:\n{output}");
    }
    output
}

/// Run `source`, which must fail, and return the error.
pub fn error_of(source: &str) -> EvalError {
    match run_source(source) {
        (Err(err), _) => err,
        (Ok(()), output) => panic!("script succeeded; output:\n{output}"),
    }
}
