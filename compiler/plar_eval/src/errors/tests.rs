use plar_ir::Span;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn message_matches_kind_display() {
    let err = division_by_zero();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(err.message, err.kind.to_string());
    assert_eq!(err.to_string(), "divisao por zero");
}

#[test]
fn with_span_keeps_innermost() {
    let inner = Span::new(4, 6);
    let outer = Span::new(0, 10);
    let err = undefined_variable("x").with_span(inner).with_span(outer);
    assert_eq!(err.span, Some(inner));
}

#[test]
fn new_is_custom() {
    let err = EvalError::new("algo deu errado");
    assert_eq!(
        err.kind,
        EvalErrorKind::Custom {
            message: "algo deu errado".to_string()
        }
    );
    assert_eq!(err.span, None);
}

#[test]
fn thrown_message_is_verbatim() {
    assert_eq!(thrown("falhou").to_string(), "falhou");
}

#[test]
fn file_error_preserves_cause() {
    let err = file_error("lib.plar: arquivo nao encontrado");
    assert_eq!(
        err.to_string(),
        "erro de arquivo: lib.plar: arquivo nao encontrado"
    );
}

#[test]
fn interface_message_names_everything() {
    let msg = interface_not_implemented("Cachorro", "Animal", "falar").to_string();
    assert!(msg.contains("Cachorro"));
    assert!(msg.contains("Animal"));
    assert!(msg.contains("falar"));
}

#[test]
fn arity_message() {
    assert_eq!(
        arity_mismatch("soma", 2, 3).to_string(),
        "soma espera no maximo 2 argumento(s), recebeu 3"
    );
}
