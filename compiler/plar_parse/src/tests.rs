#![allow(clippy::unwrap_used, clippy::expect_used)]

use plar_ir::{
    AssignTarget, BinaryOp, Expr, ExprKind, ForInit, Program, Span, StmtKind, UnaryOp,
};
use pretty_assertions::assert_eq;

use super::*;

fn parse_ok(source: &str) -> Program {
    match parse_source(source) {
        Ok(program) => program,
        Err(err) => panic!("parse failed: {err} at {}", err.span),
    }
}

fn parse_err(source: &str) -> ParseError {
    match parse_source(source) {
        Ok(program) => panic!("expected parse error, got {program:#?}"),
        Err(err) => err,
    }
}

/// Parse `source` as a single expression statement.
fn expr(source: &str) -> Expr {
    let program = parse_ok(&format!("{source};"));
    match program.stmts.into_iter().next().map(|s| s.kind) {
        Some(StmtKind::Expr(expr)) => expr,
        other => panic!("expected expression statement, got {other:?}"),
    }
}

/// Render an expression as an s-expression to check tree shape.
fn sexpr(e: &Expr) -> String {
    match &e.kind {
        ExprKind::Null => "nulo".to_string(),
        ExprKind::Integer(n) => n.to_string(),
        ExprKind::Real(r) => format!("{r:?}"),
        ExprKind::Text(t) => format!("{t:?}"),
        ExprKind::Logic(b) => b.to_string(),
        ExprKind::This => "este".to_string(),
        ExprKind::Ident(name) => name.clone(),
        ExprKind::ListNew(len) => format!("(Lista {})", sexpr(len)),
        ExprKind::MapNew => "(Mapa)".to_string(),
        ExprKind::Call { callee, args } => format!("(call {}{})", sexpr(callee), join(args)),
        ExprKind::MethodCall {
            receiver,
            method,
            args,
        } => format!("(.{method} {}{})", sexpr(receiver), join(args)),
        ExprKind::Field { receiver, name } => format!("(. {} {name})", sexpr(receiver)),
        ExprKind::Index { receiver, index } => {
            format!("([] {} {})", sexpr(receiver), sexpr(index))
        }
        ExprKind::New { class, args } => format!("(novo {class}{})", join(args)),
        ExprKind::Unary { op, operand } => format!("({} {})", op.as_symbol(), sexpr(operand)),
        ExprKind::Binary { op, left, right } => {
            format!("({} {} {})", op.as_symbol(), sexpr(left), sexpr(right))
        }
        ExprKind::Assign { target, value } => {
            let target = match target {
                AssignTarget::Variable(name) => name.clone(),
                AssignTarget::Field { receiver, name } => format!("(. {} {name})", sexpr(receiver)),
                AssignTarget::Index { receiver, index } => {
                    format!("([] {} {})", sexpr(receiver), sexpr(index))
                }
            };
            format!("(= {target} {})", sexpr(value))
        }
        ExprKind::Function(decl) => format!("(funcao {} {:?})", decl.name, decl.params),
    }
}

fn join(args: &[Expr]) -> String {
    args.iter().map(|a| format!(" {}", sexpr(a))).collect()
}

#[test]
fn test_precedence_cascade() {
    assert_eq!(sexpr(&expr("1 + 2 * 3")), "(+ 1 (* 2 3))");
    assert_eq!(sexpr(&expr("1 - 2 - 3")), "(- (- 1 2) 3)");
    assert_eq!(sexpr(&expr("a < b == c >= d")), "(== (< a b) (>= c d))");
    assert_eq!(
        sexpr(&expr("a ou b e c == d")),
        "(ou a (e b (== c d)))"
    );
    assert_eq!(sexpr(&expr("(1 + 2) % 3")), "(% (+ 1 2) 3)");
}

#[test]
fn test_unary_binds_tighter_than_binary() {
    assert_eq!(sexpr(&expr("-a * b")), "(* (- a) b)");
    assert_eq!(sexpr(&expr("!!x")), "(! (! x))");
    let e = expr("-5");
    assert!(matches!(
        e.kind,
        ExprKind::Unary {
            op: UnaryOp::Neg,
            ..
        }
    ));
}

#[test]
fn test_symbolic_logical_operators() {
    let e = expr("a && b || c");
    let ExprKind::Binary { op, .. } = e.kind else {
        panic!("expected binary");
    };
    assert_eq!(op, BinaryOp::Or);
}

#[test]
fn test_postfix_chains() {
    assert_eq!(sexpr(&expr("f(1, 2)")), "(call f 1 2)");
    assert_eq!(sexpr(&expr("a.b.c")), "(. (. a b) c)");
    assert_eq!(sexpr(&expr("obj.falar(x)")), "(.falar obj x)");
    assert_eq!(sexpr(&expr("m[\"k\"][0]")), "([] ([] m \"k\") 0)");
    assert_eq!(sexpr(&expr("este.lista[i]")), "([] (. este lista) i)");
}

#[test]
fn test_constructors() {
    assert_eq!(sexpr(&expr("novo Pessoa(\"Ana\", 30)")), "(novo Pessoa \"Ana\" 30)");
    assert_eq!(sexpr(&expr("Lista(3)")), "(Lista 3)");
    assert_eq!(sexpr(&expr("Mapa()")), "(Mapa)");
    assert_eq!(sexpr(&expr("Lista")), "Lista");
}

#[test]
fn test_assignment_targets() {
    assert_eq!(sexpr(&expr("x = y = 1")), "(= x (= y 1))");
    assert_eq!(sexpr(&expr("este.nome = n")), "(= (. este nome) n)");
    assert_eq!(sexpr(&expr("lista[0] = 2")), "(= ([] lista 0) 2)");
}

#[test]
fn test_invalid_assignment_target() {
    let err = parse_err("f() = 1;");
    assert_eq!(err.kind, ParseErrorKind::InvalidAssignmentTarget);
    assert_eq!(err.span, Span::new(0, 3));
}

#[test]
fn test_function_literal() {
    assert_eq!(sexpr(&expr("funcao (a, b) { retornar a; }")), "(funcao anonima [\"a\", \"b\"])");
    assert_eq!(sexpr(&expr("(funcao dobro(x) { })")), "(funcao dobro [\"x\"])");
}

#[test]
fn test_imports_come_first() {
    let program = parse_ok("importar \"a.plar\";\nimportar \"b.plar\"\nvar x = 1;");
    let paths: Vec<&str> = program.imports.iter().map(|i| i.path.as_str()).collect();
    assert_eq!(paths, vec!["a.plar", "b.plar"]);
    assert_eq!(program.stmts.len(), 1);

    let err = parse_err("var x = 1; importar \"a.plar\";");
    assert_eq!(err.kind, ParseErrorKind::LateImport);
}

#[test]
fn test_var_declaration() {
    let program = parse_ok("var idade: Inteiro = 30;");
    let Some(StmtKind::Var(decl)) = program.stmts.first().map(|s| &s.kind) else {
        panic!("expected var");
    };
    assert_eq!(decl.name, "idade");
    assert_eq!(decl.ty.as_deref(), Some("Inteiro"));
    assert_eq!(sexpr(&decl.init), "30");
}

#[test]
fn test_function_declaration() {
    let program = parse_ok("funcao soma(a, b): Inteiro { retornar a + b; }");
    let Some(StmtKind::Function(decl)) = program.stmts.first().map(|s| &s.kind) else {
        panic!("expected function");
    };
    assert_eq!(decl.name, "soma");
    assert_eq!(decl.params, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(decl.return_type.as_deref(), Some("Inteiro"));
    assert_eq!(decl.body.len(), 1);
}

#[test]
fn test_class_declaration() {
    let source = r#"
        classe Cachorro estende Animal implementa Falante, Corredor {
            var nome = "Rex";
            var idade: Inteiro = 3;
            funcao inicializar(n) { este.nome = n; }
            funcao falar(): Texto { retornar "au"; }
        }
    "#;
    let program = parse_ok(source);
    let class = program.classes().next().expect("class");
    assert_eq!(class.name, "Cachorro");
    assert_eq!(class.superclass.as_deref(), Some("Animal"));
    assert_eq!(
        class.interfaces,
        vec!["Falante".to_string(), "Corredor".to_string()]
    );
    let fields: Vec<&str> = class.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(fields, vec!["nome", "idade"]);
    let methods: Vec<&str> = class.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(methods, vec!["inicializar", "falar"]);
}

#[test]
fn test_class_body_rejects_statements() {
    let err = parse_err("classe A { x = 1; }");
    assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { .. }));
}

#[test]
fn test_interface_declaration() {
    let program = parse_ok("interface Falante { funcao falar(); funcao gritar(vezes): Texto; }");
    let iface = program.interfaces().next().expect("interface");
    assert_eq!(iface.name, "Falante");
    let names: Vec<&str> = iface.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["falar", "gritar"]);
    assert_eq!(iface.methods[1].params, vec!["vezes".to_string()]);
}

#[test]
fn test_control_flow_statements() {
    let source = r"
        se (x > 1) { y = 1; } senao se (x < 0) y = 2; senao { }
        enquanto (verdadeiro) { quebrar; }
        para (var i = 0; i < 10; i = i + 1) { continuar; }
        para (; falso; ) { }
        faca { x = x - 1; } enquanto (x > 0);
        faça x = 1; enquanto (falso)
        tentar { jogarErro(1); } capturar (erro) { escrever(erro); }
        tentar { } capturar { }
        retornar;
    ";
    let program = parse_ok(source);
    let kinds: Vec<&str> = program
        .stmts
        .iter()
        .map(|s| match &s.kind {
            StmtKind::If { .. } => "se",
            StmtKind::While { .. } => "enquanto",
            StmtKind::For { .. } => "para",
            StmtKind::DoWhile { .. } => "faca",
            StmtKind::Try { .. } => "tentar",
            StmtKind::Return(_) => "retornar",
            _ => "outro",
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["se", "enquanto", "para", "para", "faca", "faca", "tentar", "tentar", "retornar"]
    );

    let StmtKind::For { init, step, .. } = &program.stmts[2].kind else {
        panic!("expected for");
    };
    assert!(matches!(init, Some(ForInit::Var(_))));
    assert!(step.is_some());

    let StmtKind::For { init, step, .. } = &program.stmts[3].kind else {
        panic!("expected for");
    };
    assert!(init.is_none());
    assert!(step.is_none());

    let StmtKind::Try { catch_name, .. } = &program.stmts[6].kind else {
        panic!("expected try");
    };
    assert_eq!(catch_name.as_deref(), Some("erro"));
}

#[test]
fn test_statement_spans() {
    let source = "var a = 1;\nescrever(a);";
    let program = parse_ok(source);
    let slices: Vec<&str> = program
        .stmts
        .iter()
        .map(|s| &source[s.span.to_range()])
        .collect();
    assert_eq!(slices, vec!["var a = 1;", "escrever(a);"]);
}

#[test]
fn test_missing_semicolon() {
    let err = parse_err("var a = 1 var b = 2;");
    assert_eq!(err.to_string(), "esperado `;`, encontrado `var`");
    assert_eq!(err.span, Span::new(10, 13));
}

#[test]
fn test_unclosed_block() {
    let err = parse_err("se (x) { y = 1;");
    assert_eq!(err.to_string(), "esperado `}`, encontrado fim do arquivo");
}

#[test]
fn test_lexer_error_surfaces() {
    let err = parse_err("var x = 1 # 2;");
    assert_eq!(err.kind, ParseErrorKind::InvalidToken("#".to_string()));
}

#[test]
fn test_deeply_nested_parentheses() {
    let depth = 5_000;
    let source = format!("{}1{};", "(".repeat(depth), ")".repeat(depth));
    let program = parse_ok(&source);
    assert_eq!(program.stmts.len(), 1);
}
