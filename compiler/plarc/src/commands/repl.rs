//! Line-oriented REPL sharing one interpreter across inputs.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use plar_eval::{Interpreter, SharedPrintHandler};

use super::{execute_file, parse_program};
use crate::config::{interpreter_builder, Overrides};
use crate::reporting::Report;

const PROMPT: &str = "> ";
const INPUT_NAME: &str = "<repl>";

/// What the caller should do after a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplOutcome {
    Continue,
    Exit,
    Failed(Report),
}

/// REPL state: the live interpreter plus what is needed to rebuild it.
pub struct Repl {
    interpreter: Interpreter,
    overrides: Overrides,
    base_dir: PathBuf,
    print_handler: SharedPrintHandler,
}

impl Repl {
    pub fn new(overrides: Overrides, base_dir: &Path, print_handler: SharedPrintHandler) -> Self {
        let interpreter =
            interpreter_builder(&overrides, base_dir, print_handler.clone()).build();
        Repl {
            interpreter,
            overrides,
            base_dir: base_dir.to_path_buf(),
            print_handler,
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Handle one input line.
    ///
    /// `sair`/`exit` ends the session, `reiniciar`/`reset` starts over with
    /// a fresh interpreter, `rodar <caminho>`/`run <caminho>` executes a
    /// file in the current session, and anything else is Plar source.
    pub fn handle_line(&mut self, line: &str) -> ReplOutcome {
        let input = line.trim();
        if input.is_empty() {
            return ReplOutcome::Continue;
        }
        let result = match input {
            "sair" | "exit" => return ReplOutcome::Exit,
            "reiniciar" | "reset" => {
                self.reset();
                Ok(())
            }
            _ => match file_command(input) {
                Some(path) => execute_file(&mut self.interpreter, Path::new(path)),
                None => self.eval_source(input),
            },
        };
        match result {
            Ok(()) => ReplOutcome::Continue,
            Err(report) => ReplOutcome::Failed(report),
        }
    }

    fn reset(&mut self) {
        tracing::debug!("resetting interpreter");
        self.interpreter =
            interpreter_builder(&self.overrides, &self.base_dir, self.print_handler.clone())
                .build();
    }

    fn eval_source(&mut self, source: &str) -> Result<(), Report> {
        let program = parse_program(source, INPUT_NAME)?;
        self.interpreter
            .run(&program)
            .map_err(|err| Report::from_eval(&err, INPUT_NAME, source))
    }
}

fn file_command(input: &str) -> Option<&str> {
    let (command, rest) = input.split_once(char::is_whitespace)?;
    match command {
        "rodar" | "run" => Some(rest.trim()).filter(|path| !path.is_empty()),
        _ => None,
    }
}

/// Read lines from `input` until end of input or `sair`, writing the prompt
/// and error reports to `out`.
pub fn run_repl<R: BufRead, W: Write>(
    input: R,
    mut out: W,
    repl: &mut Repl,
) -> std::io::Result<()> {
    writeln!(out, "Plar {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "Digite 'sair' para sair, 'rodar <caminho>' para executar um arquivo")?;
    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        match repl.handle_line(&line?) {
            ReplOutcome::Continue => {}
            ReplOutcome::Exit => return Ok(()),
            ReplOutcome::Failed(report) => write!(out, "{report}")?,
        }
    }
}
