//! Plar CLI
//!
//! Tree-walking interpreter for Plar scripts.

use std::path::Path;
use std::process::ExitCode;

use plarc::commands::{lex_file, parse_file, run_file, run_repl, Repl, EXTENSION};
use plarc::overrides_from_env;
use plarc::tracing_setup::init_tracing;

fn main() -> ExitCode {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        return repl();
    };

    match command.as_str() {
        "run" => {
            let Some(path) = args.get(2) else {
                eprintln!("Uso: plar run <arquivo.{EXTENSION}>");
                return ExitCode::FAILURE;
            };
            run_file(path)
        }
        "repl" => repl(),
        "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Uso: plar lex <arquivo>");
                return ExitCode::FAILURE;
            };
            lex_file(path)
        }
        "parse" => {
            let Some(path) = args.get(2) else {
                eprintln!("Uso: plar parse <arquivo>");
                return ExitCode::FAILURE;
            };
            parse_file(path)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("Plar {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            // A bare script path runs it
            if Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(EXTENSION))
            {
                run_file(command)
            } else {
                eprintln!("Comando desconhecido: {command}");
                eprintln!();
                print_usage();
                ExitCode::FAILURE
            }
        }
    }
}

fn repl() -> ExitCode {
    let mut session = Repl::new(
        overrides_from_env(),
        Path::new("."),
        plar_eval::stdout_handler(),
    );
    let stdin = std::io::stdin();
    match run_repl(stdin.lock(), std::io::stdout(), &mut session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("erro de E/S: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("Plar - interpretador");
    println!();
    println!("Uso: plar <comando> [opcoes]");
    println!();
    println!("Comandos:");
    println!("  run <arquivo.plar>   Executa um programa Plar");
    println!("  repl                 Modo interativo (padrao sem argumentos)");
    println!("  lex <arquivo>        Mostra os tokens do arquivo");
    println!("  parse <arquivo>      Mostra a arvore sintatica do arquivo");
    println!("  help                 Mostra esta ajuda");
    println!("  version              Mostra a versao");
    println!();
    println!("Variaveis de ambiente:");
    println!("  PLAR_LOG             Filtro de log (ex.: plar_eval=debug); RUST_LOG se ausente");
    println!("  PLAR_MAX_LOOP        Limite de iteracoes por laco (padrao 10000)");
    println!("  PLAR_MAX_DEPTH       Profundidade maxima de chamadas (padrao 2000)");
    println!();
    println!("Comandos do REPL:");
    println!("  sair | exit          Encerra a sessao");
    println!("  reiniciar | reset    Descarta o estado e recomeca");
    println!("  rodar | run <arq>    Executa um arquivo na sessao atual");
}
