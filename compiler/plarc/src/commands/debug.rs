//! Debug commands: `lex` and `parse` for inspecting the front-end.

use std::fmt::Write as _;
use std::path::Path;
use std::process::ExitCode;

use super::{parse_program, read_source};
use crate::reporting::Report;

/// One line per token, `Eof` included.
pub fn dump_tokens(source: &str) -> String {
    let tokens = plar_lexer::lex(source);
    let mut out = String::new();
    for token in tokens.iter() {
        let _ = writeln!(out, "  {token:?}");
    }
    out
}

/// The pretty-printed AST.
pub fn dump_ast(source: &str, file: &str) -> Result<String, Report> {
    let program = parse_program(source, file)?;
    Ok(format!("{program:#?}"))
}

/// Lex a file and print its token stream.
pub fn lex_file(path: &str) -> ExitCode {
    let source = match read_source(Path::new(path)) {
        Ok(source) => source,
        Err(report) => return fail(&report),
    };
    let tokens = dump_tokens(&source);
    println!("Tokens de '{path}' ({} tokens):", tokens.lines().count());
    print!("{tokens}");
    ExitCode::SUCCESS
}

/// Parse a file and print its AST.
pub fn parse_file(path: &str) -> ExitCode {
    let ast = read_source(Path::new(path)).and_then(|source| dump_ast(&source, path));
    match ast {
        Ok(ast) => {
            println!("{ast}");
            ExitCode::SUCCESS
        }
        Err(report) => fail(&report),
    }
}

fn fail(report: &Report) -> ExitCode {
    eprint!("{report}");
    ExitCode::FAILURE
}
