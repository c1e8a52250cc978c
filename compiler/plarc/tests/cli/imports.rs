use pretty_assertions::assert_eq;

use super::common::Project;

#[test]
fn imports_resolve_next_to_the_script() {
    let project = Project::new();
    project.file(
        "app/util/mat.plar",
        "funcao quadrado(n) { retornar n * n; }\nvar PI = 3.14;\n",
    );
    project.file(
        "app/main.plar",
        "importar \"./util/mat.plar\";\nescrever(quadrado(7), PI);\n",
    );
    let (result, out) = project.run("app/main.plar");
    assert_eq!(result, Ok(()));
    assert_eq!(out, "49 3.14\n");
}

#[test]
fn imported_classes_and_interfaces() {
    let project = Project::new();
    project.file(
        "formas.plar",
        r#"
interface Forma { funcao area(); }
classe Quadrado implementa Forma {
    var lado = 0;
    funcao inicializar(l) { este.lado = l; }
    funcao area() { retornar este.lado * este.lado; }
}
"#,
    );
    project.file(
        "main.plar",
        "importar \"formas.plar\";\nvar q = novo Quadrado(3);\nescrever(q.area());\n",
    );
    let (result, out) = project.run("main.plar");
    assert_eq!(result, Ok(()));
    assert_eq!(out, "9\n");
}

#[test]
fn repeated_literal_is_imported_once() {
    let project = Project::new();
    project.file(
        "contador.plar",
        "var carregado = escrever(\"carregado\");\nvar n = 0;\n",
    );
    project.file("b.plar", "importar \"contador.plar\";\n");
    project.file(
        "main.plar",
        "importar \"contador.plar\";\nimportar \"b.plar\";\nescrever(n);\n",
    );
    let (result, out) = project.run("main.plar");
    assert_eq!(result, Ok(()));
    assert_eq!(out, "carregado\n0\n");
}

#[test]
fn different_spellings_load_twice() {
    let project = Project::new();
    project.file("lib.plar", "var carregado = escrever(\"carregado\");\n");
    project.file(
        "main.plar",
        "importar \"lib.plar\";\nimportar \"./lib.plar\";\n",
    );
    let (result, out) = project.run("main.plar");
    assert_eq!(result, Ok(()));
    assert_eq!(out, "carregado\ncarregado\n");
}

#[test]
fn missing_import_is_reported_at_the_import() {
    let project = Project::new();
    project.file("main.plar", "importar \"sumiu.plar\";\nescrever(1);\n");
    let (result, out) = project.run("main.plar");
    let report = result.unwrap_err();
    assert_eq!(out, "");
    assert!(report.message.contains("sumiu.plar: arquivo nao encontrado"), "{}", report.message);
    assert_eq!(report.location.unwrap().line, 1);
}

#[test]
fn failure_inside_import_is_a_file_error() {
    let project = Project::new();
    project.file("quebra.plar", "var x = 1 / 0;\n");
    project.file("main.plar", "importar \"quebra.plar\";\n");
    let (result, _) = project.run("main.plar");
    let report = result.unwrap_err();
    assert!(report.message.starts_with("erro de arquivo: quebra.plar: divisao por zero"), "{}", report.message);
    assert_eq!(report.location.unwrap().source_line, "importar \"quebra.plar\";");
}
