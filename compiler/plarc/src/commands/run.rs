//! The `run` command: read, parse and execute a `.plar` file.

use std::path::Path;
use std::process::ExitCode;

use plar_eval::{stdout_handler, Interpreter, SharedPrintHandler};

use super::{has_plar_extension, parse_program, read_source, EXTENSION};
use crate::config::{interpreter_builder, overrides_from_env, Overrides};
use crate::reporting::Report;

/// Run a script with stdout output and environment overrides, reporting
/// any failure to stderr.
pub fn run_file(path: &str) -> ExitCode {
    match run_script(Path::new(path), &overrides_from_env(), stdout_handler()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            eprint!("{report}");
            ExitCode::FAILURE
        }
    }
}

/// Run a script in a fresh interpreter whose imports resolve next to it.
pub fn run_script(
    path: &Path,
    overrides: &Overrides,
    print_handler: SharedPrintHandler,
) -> Result<(), Report> {
    let base_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut interpreter = interpreter_builder(overrides, base_dir, print_handler).build();
    execute_file(&mut interpreter, path)
}

/// Execute a script in an existing interpreter, keeping its globals.
pub fn execute_file(interpreter: &mut Interpreter, path: &Path) -> Result<(), Report> {
    if !has_plar_extension(path) {
        return Err(Report::message(format!(
            "formato de arquivo invalido: '{}' (use arquivos .{EXTENSION})",
            path.display()
        )));
    }
    let source = read_source(path)?;
    let file = path.display().to_string();
    let program = parse_program(&source, &file)?;
    tracing::debug!(file = %file, stmts = program.stmts.len(), "running script");
    interpreter
        .run(&program)
        .map_err(|err| Report::from_eval(&err, &file, &source))
}
