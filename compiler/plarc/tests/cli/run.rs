use plarc::Overrides;
use pretty_assertions::assert_eq;

use super::common::Project;

#[test]
fn runs_a_script() {
    let project = Project::new();
    project.file(
        "main.plar",
        r#"
classe Contador {
    var total = 0;
    funcao somar(n) { este.total = este.total + n; retornar este; }
}
var c = novo Contador();
c.somar(2).somar(3);
escrever("total:", c.total);
"#,
    );
    let (result, out) = project.run("main.plar");
    assert_eq!(result, Ok(()));
    assert_eq!(out, "total: 5\n");
}

#[test]
fn runtime_error_points_into_the_script() {
    let project = Project::new();
    project.file("erro.plar", "escrever(\"antes\");\nvar l = Lista(2);\nescrever(l[5]);\n");
    let (result, out) = project.run("erro.plar");
    let report = result.unwrap_err();
    assert_eq!(out, "antes\n");
    let location = report.location.clone().unwrap();
    assert!(location.file.ends_with("erro.plar"), "{}", location.file);
    assert_eq!(location.line, 3);
    assert_eq!(location.source_line, "escrever(l[5]);");
    assert!(report.to_string().starts_with("erro: "), "{report}");
}

#[test]
fn syntax_error_reports_position() {
    let project = Project::new();
    project.file("ruim.plar", "var x = 1;\nse x { }\n");
    let (result, out) = project.run("ruim.plar");
    let report = result.unwrap_err();
    assert_eq!(out, "");
    assert!(report.message.starts_with("erro de sintaxe"), "{}", report.message);
    let location = report.location.unwrap();
    assert_eq!((location.line, location.col), (2, 4));
}

#[test]
fn rejects_other_extensions() {
    let project = Project::new();
    project.file("main.txt", "escrever(1);");
    let (result, out) = project.run("main.txt");
    assert!(result.unwrap_err().message.contains("formato de arquivo invalido"));
    assert_eq!(out, "");
}

#[test]
fn missing_script() {
    let project = Project::new();
    let (result, _) = project.run("nada.plar");
    let report = result.unwrap_err();
    assert!(report.message.starts_with("arquivo nao encontrado"), "{}", report.message);
    assert_eq!(report.location, None);
}

#[test]
fn loop_ceiling_override() {
    let project = Project::new();
    project.file(
        "laco.plar",
        "var i = 0;\nenquanto (verdadeiro) { i = i + 1; }\nescrever(i);\n",
    );
    let overrides = Overrides::parse(Some("25"), None);
    let (result, out) = project.run_with("laco.plar", &overrides);
    assert_eq!(result, Ok(()));
    assert_eq!(out, "25\n");
}

#[test]
fn call_depth_override() {
    let project = Project::new();
    project.file(
        "rec.plar",
        "funcao desce(n) { retornar desce(n + 1); }\ndesce(0);\n",
    );
    let overrides = Overrides::parse(None, Some("40"));
    let (result, _) = project.run_with("rec.plar", &overrides);
    let report = result.unwrap_err();
    assert!(report.message.contains("40"), "{}", report.message);
}

#[test]
fn file_natives_work_on_disk() {
    let project = Project::new();
    let data = project.path().join("dados.txt");
    project.file(
        "io.plar",
        &format!(
            "escreverArquivo(\"{p}\", \"a\");\nescreverArquivo(\"{p}\", \"b\", verdadeiro);\nescrever(lerArquivo(\"{p}\"));\n",
            p = data.display()
        ),
    );
    let (result, out) = project.run("io.plar");
    assert_eq!(result, Ok(()));
    assert_eq!(out, "ab\n");
}
