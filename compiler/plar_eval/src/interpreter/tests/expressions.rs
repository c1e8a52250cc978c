use pretty_assertions::assert_eq;

use crate::errors::EvalErrorKind;
use crate::test_helpers::{error_of, output_of};

#[test]
fn arithmetic_precedence_and_division() {
    assert_eq!(
        output_of("escrever(1 + 2 * 3, (1 + 2) * 3, 7 / 2, 8 / 2, 7 % 3, 10 - 4 - 3);"),
        "7 9 3.5 4 1 3\n"
    );
}

#[test]
fn reals_render_with_fraction() {
    assert_eq!(output_of("escrever(1.0 + 1, 0.5 * 3, 1 / 4);"), "2.0 1.5 0.25\n");
}

#[test]
fn text_concatenation() {
    assert_eq!(
        output_of(r#"escrever("x" + 1, 1 + "x", "a" + nulo, "l=" + Lista(2));"#),
        "x1 1x anulo l=[nulo, nulo]\n"
    );
}

#[test]
fn equality_and_comparison() {
    assert_eq!(
        output_of(r#"escrever(nulo == nulo, nulo == 0, 1 == 1.0, "a" != "b", "abc" < "abd", 2 >= 2.5);"#),
        "verdadeiro falso verdadeiro verdadeiro verdadeiro falso\n"
    );
}

#[test]
fn logical_operators_short_circuit() {
    let source = r#"
        escrever(falso e jogarErro("direita avaliada"));
        escrever(verdadeiro ou jogarErro("direita avaliada"));
        escrever(verdadeiro && falso, falso || verdadeiro);
    "#;
    assert_eq!(output_of(source), "falso\nverdadeiro\nfalso verdadeiro\n");
}

#[test]
fn logical_operands_must_be_logic() {
    assert_eq!(
        error_of("escrever(1 ou verdadeiro);").kind,
        EvalErrorKind::LogicalOperands {
            op: "ou".to_string()
        }
    );
    assert_eq!(
        error_of("escrever(verdadeiro e 1);").kind,
        EvalErrorKind::LogicalOperands {
            op: "e".to_string()
        }
    );
}

#[test]
fn unary_operators() {
    assert_eq!(output_of("escrever(-5, !falso, -2.5, --3);"), "-5 verdadeiro -2.5 3\n");
    assert!(matches!(
        error_of(r#"escrever(-"a");"#).kind,
        EvalErrorKind::InvalidUnaryOp { .. }
    ));
}

#[test]
fn lists_are_fixed_length_and_bounds_checked() {
    assert_eq!(
        output_of(r#"var l = Lista(2); l[0] = 5; l[1] = "a"; escrever(l, l[0], tamanho(l));"#),
        "[5, a] 5 2\n"
    );
    assert_eq!(
        error_of("var l = Lista(1); l[1] = 2;").kind,
        EvalErrorKind::IndexOutOfBounds { index: 1, len: 1 }
    );
    assert_eq!(
        error_of("var l = Lista(1); escrever(l[-1]);").kind,
        EvalErrorKind::IndexOutOfBounds { index: -1, len: 1 }
    );
}

#[test]
fn maps_insert_replace_and_miss() {
    let source = r#"
        var m = Mapa();
        m["a"] = 1;
        m[2] = "b";
        m["a"] = 3;
        m[2.0] = "c";
        escrever(m, m["a"], m["z"]);
    "#;
    assert_eq!(output_of(source), "[[a: 3, 2: c]] 3 nulo\n");
}

#[test]
fn nested_indexing_composes() {
    let source = r#"
        var m = Mapa();
        m["l"] = Lista(2);
        m["l"][1] = 9;
        escrever(m["l"][1], m);
    "#;
    assert_eq!(output_of(source), "9 [[l: [nulo, 9]]]\n");
}

#[test]
fn indexing_other_receivers_fails() {
    assert_eq!(
        error_of("var n = 3; escrever(n[0]);").kind,
        EvalErrorKind::InvalidIndex {
            receiver: "Inteiro".to_string(),
            index: "Inteiro".to_string(),
        }
    );
    assert_eq!(
        error_of(r#"var l = Lista(1); l["a"] = 1;"#).kind,
        EvalErrorKind::InvalidAssignmentTarget
    );
}

#[test]
fn assignment_yields_the_value() {
    assert_eq!(output_of("var a = 0; var b = (a = 5); escrever(a, b);"), "5 5\n");
}

#[test]
fn assignment_to_unknown_name_defines_it() {
    assert_eq!(output_of("novo_nome = 4; escrever(novo_nome);"), "4\n");
}

#[test]
fn unresolved_names() {
    assert_eq!(
        error_of("escrever(y);").kind,
        EvalErrorKind::UndefinedVariable {
            name: "y".to_string()
        }
    );
    assert_eq!(
        error_of("nada();").kind,
        EvalErrorKind::UndefinedFunction {
            name: "nada".to_string()
        }
    );
}

#[test]
fn calling_a_non_function_fails() {
    assert_eq!(
        error_of("var x = 1; x();").kind,
        EvalErrorKind::NotCallable {
            type_name: "Inteiro".to_string()
        }
    );
}

#[test]
fn integer_overflow_is_an_error() {
    assert!(matches!(
        error_of("escrever(9223372036854775807 + 1);").kind,
        EvalErrorKind::IntegerOverflow { .. }
    ));
}

#[test]
fn negative_list_length_fails() {
    assert!(matches!(
        error_of("var l = Lista(-1);").kind,
        EvalErrorKind::WrongArgType { .. }
    ));
}

#[test]
fn self_containing_containers_print_and_concatenate() {
    assert_eq!(
        output_of(r#"var l = Lista(1); l[0] = l; escrever(l); escrever("l=" + l);"#),
        "[[...]]\nl=[[...]]\n"
    );
    assert_eq!(
        output_of(r#"var m = Mapa(); m["m"] = m; escrever(m);"#),
        "[[m: [[...]]]]\n"
    );
}
