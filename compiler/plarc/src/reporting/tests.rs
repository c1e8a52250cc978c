#![allow(clippy::unwrap_used, clippy::expect_used)]

use plar_eval::{EvalError, InterpreterBuilder};
use plar_ir::Span;
use pretty_assertions::assert_eq;

use super::{Location, Report};

#[test]
fn message_only_report() {
    assert_eq!(
        Report::message("arquivo nao encontrado").to_string(),
        "erro: arquivo nao encontrado\n"
    );
}

#[test]
fn resolves_line_and_column() {
    let source = "var a = 1;\nescrever(a / 0);\n";
    let start = source.find("a / 0").unwrap();
    let span = Span::from_range(start..start + 5);
    let location = Location::resolve("p.plar", source, span);
    assert_eq!(location.line, 2);
    assert_eq!(location.col, 10);
    assert_eq!(location.source_line, "escrever(a / 0);");
    assert_eq!(location.width, 5);
}

#[test]
fn renders_runtime_error_with_snippet() {
    let source = "var a = 1;\nescrever(a / 0);\n";
    let program = plar_parse::parse_source(source).unwrap();
    let mut interp = InterpreterBuilder::new()
        .print_handler(plar_eval::silent_handler())
        .build();
    let err = interp.run(&program).unwrap_err();
    let report = Report::from_eval(&err, "p.plar", source);
    assert_eq!(
        report.to_string(),
        "erro: divisao por zero\n --> p.plar:2:10\n  |\n2 | escrever(a / 0);\n  |          ^^^^^\n"
    );
}

#[test]
fn renders_parse_error() {
    let source = "var = 3;";
    let err = plar_parse::parse_source(source).unwrap_err();
    let report = Report::from_parse(&err, "p.plar", source);
    assert!(report.message.starts_with("erro de sintaxe: esperado"), "{}", report.message);
    let location = report.location.unwrap();
    assert_eq!((location.line, location.col), (1, 5));
}

#[test]
fn spanless_error_has_no_location() {
    let report = Report::from_eval(&EvalError::new("falhou"), "p.plar", "");
    assert_eq!(report.location, None);
    assert_eq!(report.to_string(), "erro: falhou\n");
}

#[test]
fn multiline_span_underlines_to_end_of_line() {
    let source = "se (x) {\n  y;\n}";
    let location = Location::resolve("p.plar", source, Span::from_range(0..source.len()));
    assert_eq!(location.width, "se (x) {".len());
}
