#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::rc::Rc;

use pretty_assertions::assert_eq;

use crate::errors::EvalErrorKind;
use crate::module_loader::MemoryModuleLoader;
use crate::print_handler::buffer_handler;
use crate::test_helpers::run_on;
use crate::{Interpreter, InterpreterBuilder, Value};

const LIB: &str = r#"
    var usa_depois = triplo(2);
    var versao = 1 + 1;
    funcao dobro(n) { retornar n * 2; }
    funcao triplo(n) { retornar n * 3; }
    classe Util estende Base implementa Nomeavel { funcao nome() { retornar "util"; } }
    classe Base { }
    interface Nomeavel { funcao nome(); }
"#;

fn parse(source: &str) -> plar_ir::Program {
    plar_parse::parse_source(source).expect("module should parse")
}

fn with_loader(loader: &Rc<MemoryModuleLoader>) -> Interpreter {
    InterpreterBuilder::new()
        .print_handler(buffer_handler())
        .module_loader(Rc::clone(loader) as Rc<dyn crate::ModuleLoader>)
        .build()
}

#[test]
fn imported_declarations_are_global() {
    let loader = Rc::new(MemoryModuleLoader::new().with_module("lib.plar", parse(LIB)));
    let mut interp = with_loader(&loader);
    run_on(
        &mut interp,
        r#"importar "lib.plar"; escrever(dobro(versao), usa_depois, novo Util().nome());"#,
    )
    .unwrap();
    assert_eq!(interp.print_handler().get_output(), "4 6 util\n");
}

#[test]
fn same_literal_is_processed_once() {
    let loader = Rc::new(MemoryModuleLoader::new().with_module("lib.plar", parse(LIB)));
    let mut interp = with_loader(&loader);
    run_on(&mut interp, r#"importar "lib.plar"; importar "lib.plar";"#).unwrap();
    interp.import("lib.plar").unwrap();
    assert_eq!(loader.loads(), 1);
}

#[test]
fn reimport_under_another_literal_resets_variables() {
    let loader = Rc::new(
        MemoryModuleLoader::new()
            .with_module("lib.plar", parse("var contador = 1;"))
            .with_module("./lib.plar", parse("var contador = 1;")),
    );
    let mut interp = with_loader(&loader);
    run_on(&mut interp, r#"importar "lib.plar";"#).unwrap();
    interp.define_global("contador", Value::Integer(5));
    interp.import("./lib.plar").unwrap();
    assert_eq!(loader.loads(), 2);
    assert_eq!(interp.global("contador"), Some(Value::Integer(1)));
}

#[test]
fn transitive_and_cyclic_imports() {
    let loader = Rc::new(
        MemoryModuleLoader::new()
            .with_module("a.plar", parse(r#"importar "b.plar"; var de_a = de_b + 1;"#))
            .with_module("b.plar", parse(r#"importar "a.plar"; var de_b = 10;"#)),
    );
    let mut interp = with_loader(&loader);
    run_on(&mut interp, r#"importar "a.plar"; escrever(de_a, de_b);"#).unwrap();
    assert_eq!(interp.print_handler().get_output(), "11 10\n");
    assert_eq!(loader.loads(), 2);
}

#[test]
fn missing_module_is_a_file_error() {
    let loader = Rc::new(MemoryModuleLoader::new());
    let mut interp = with_loader(&loader);
    let err = run_on(&mut interp, r#"importar "nada.plar";"#).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::File { .. }));
    assert!(err.message.contains("nada.plar"));
}

#[test]
fn failures_inside_a_module_are_wrapped() {
    let loader =
        Rc::new(MemoryModuleLoader::new().with_module("ruim.plar", parse("var x = 1 / 0;")));
    let mut interp = with_loader(&loader);
    let err = interp.import("ruim.plar").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::File {
            message: "ruim.plar: divisao por zero".to_string()
        }
    );
}

#[test]
fn imports_fail_without_a_loader() {
    let mut interp = InterpreterBuilder::new()
        .print_handler(buffer_handler())
        .build();
    let err = run_on(&mut interp, r#"importar "lib.plar";"#).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::File { .. }));
}
