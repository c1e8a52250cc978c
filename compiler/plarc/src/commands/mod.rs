//! Command handlers for the `plar` CLI.
//!
//! Each submodule implements one command. Shared helpers for reading and
//! parsing source files live here.

use std::io::ErrorKind;
use std::path::Path;

use plar_ir::Program;

use crate::reporting::Report;

mod debug;
mod repl;
mod run;

pub use debug::{dump_ast, dump_tokens, lex_file, parse_file};
pub use repl::{run_repl, Repl, ReplOutcome};
pub use run::{execute_file, run_file, run_script};

/// Extension accepted by `plar run`.
pub const EXTENSION: &str = "plar";

pub(crate) fn read_source(path: &Path) -> Result<String, Report> {
    std::fs::read_to_string(path).map_err(|err| {
        let shown = path.display();
        Report::message(match err.kind() {
            ErrorKind::NotFound => format!("arquivo nao encontrado: '{shown}'"),
            ErrorKind::PermissionDenied => format!("permissao negada ao ler '{shown}'"),
            ErrorKind::InvalidData => format!("'{shown}' contem UTF-8 invalido"),
            _ => format!("erro ao ler '{shown}': {err}"),
        })
    })
}

pub(crate) fn parse_program(source: &str, file: &str) -> Result<Program, Report> {
    plar_parse::parse_source(source).map_err(|err| Report::from_parse(&err, file, source))
}

pub(crate) fn has_plar_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(EXTENSION))
}
