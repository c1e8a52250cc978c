//! The native function library registered in the global scope.
//!
//! Natives receive their arguments as an ordered list; a missing argument
//! reads as `nulo`. Failures surface exactly like evaluator errors.

use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::time::Duration;

use crate::errors::{file_error, thrown, wrong_arg_type, EvalError, EvalResult};
use crate::value::FunctionValue;
use crate::{Interpreter, Value};

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 8080;

/// Define every native in the interpreter's globals.
pub fn register(interp: &mut Interpreter) {
    let natives: [(&str, fn(&mut Interpreter, Vec<Value>) -> EvalResult); 14] = [
        ("escrever", write_line),
        ("imprimir", write_line),
        ("ler", read_line),
        ("tamanho", length),
        ("jogarErro", throw),
        ("jogarError", throw),
        ("lerArquivo", read_file),
        ("readFile", read_file),
        ("escreverArquivo", write_file),
        ("writeFile", write_file),
        ("dormir", sleep),
        ("executar", run_task),
        ("ler_socket", read_socket),
        ("escrever_socket", write_socket),
    ];
    for (name, native) in natives {
        interp.define_global(name, Value::function(FunctionValue::native(name, native)));
    }
}

fn arg(args: &[Value], index: usize) -> Value {
    args.get(index).cloned().unwrap_or(Value::Null)
}

fn text_arg(function: &str, args: &[Value], index: usize) -> Result<String, EvalError> {
    match arg(args, index) {
        Value::Text(s) => Ok(s.to_string()),
        other => Err(wrong_arg_type(function, "Texto", other.type_name())),
    }
}

fn join_rendered(args: &[Value]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `escrever(a, b, ...)`: arguments joined by a space, then a newline.
fn write_line(interp: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    interp.print_handler().println(&join_rendered(&args));
    Ok(Value::Null)
}

/// `ler()`: one line from stdin without its line ending; `nulo` at EOF.
fn read_line(_: &mut Interpreter, _: Vec<Value>) -> EvalResult {
    let mut line = String::new();
    let read = std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|err| file_error(format!("stdin: {err}")))?;
    if read == 0 {
        return Ok(Value::Null);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']);
    Ok(Value::text(trimmed))
}

/// `tamanho(x)`: length of a list, map or text (in characters).
fn length(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let len = match arg(&args, 0) {
        Value::List(items) => items.borrow().len(),
        Value::Map(map) => map.borrow().len(),
        Value::Text(s) => s.chars().count(),
        other => {
            return Err(wrong_arg_type(
                "tamanho",
                "Lista, Mapa ou Texto",
                other.type_name(),
            ))
        }
    };
    Ok(Value::Integer(i64::try_from(len).unwrap_or(i64::MAX)))
}

/// `jogarErro(msg)`: raise a catchable error carrying `msg`.
fn throw(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    Err(thrown(arg(&args, 0).to_string()))
}

/// `lerArquivo(caminho)`.
fn read_file(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let path = text_arg("lerArquivo", &args, 0)?;
    std::fs::read_to_string(&path)
        .map(Value::text)
        .map_err(|err| file_error(format!("{path}: {err}")))
}

/// `escreverArquivo(caminho, dados, anexar?)`: truncate unless `anexar`.
fn write_file(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let path = text_arg("escreverArquivo", &args, 0)?;
    let data = arg(&args, 1).to_string();
    let append = matches!(arg(&args, 2), Value::Logic(true));
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(&path)
        .map_err(|err| file_error(format!("{path}: {err}")))?;
    file.write_all(data.as_bytes())
        .map_err(|err| file_error(format!("{path}: {err}")))?;
    Ok(Value::Null)
}

/// `dormir(ms)`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sleep(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let millis = match arg(&args, 0) {
        Value::Integer(n) => u64::try_from(n).unwrap_or(0),
        Value::Real(r) => r.max(0.0) as u64,
        other => return Err(wrong_arg_type("dormir", "Inteiro", other.type_name())),
    };
    std::thread::sleep(Duration::from_millis(millis));
    Ok(Value::Null)
}

/// `executar(f, args...)`: run `f` to completion as a task.
///
/// A failing task is reported, not propagated; the call returns `nulo` once
/// the task has finished.
fn run_task(interp: &mut Interpreter, mut args: Vec<Value>) -> EvalResult {
    if args.is_empty() {
        return Err(wrong_arg_type("executar", "Funcao", "Nulo"));
    }
    let task = args.remove(0);
    if let Err(err) = interp.call_value(&task, args) {
        tracing::warn!(error = %err, "background task failed");
        interp
            .print_handler()
            .println(&format!("Erro na execucao da tarefa: {}", err.message));
    }
    Ok(Value::Null)
}

/// Host and port from the leading socket arguments.
fn socket_address(function: &str, args: &[Value]) -> Result<(String, u16), EvalError> {
    let host = match arg(args, 0) {
        Value::Null => DEFAULT_HOST.to_string(),
        Value::Text(s) => s.to_string(),
        other => return Err(wrong_arg_type(function, "Texto", other.type_name())),
    };
    let port = match arg(args, 1) {
        Value::Null => DEFAULT_PORT,
        Value::Integer(n) => u16::try_from(n)
            .map_err(|_| wrong_arg_type(function, "porta entre 0 e 65535", &n.to_string()))?,
        other => return Err(wrong_arg_type(function, "Inteiro", other.type_name())),
    };
    Ok((host, port))
}

fn accept_one(host: &str, port: u16) -> Result<std::net::TcpStream, EvalError> {
    let listener = TcpListener::bind((host, port))
        .map_err(|err| file_error(format!("{host}:{port}: {err}")))?;
    tracing::debug!(host, port, "waiting for a connection");
    let (stream, peer) = listener
        .accept()
        .map_err(|err| file_error(format!("{host}:{port}: {err}")))?;
    tracing::debug!(%peer, "connection accepted");
    Ok(stream)
}

/// `ler_socket(host?, porta?)`: accept one connection and read one line.
fn read_socket(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let (host, port) = socket_address("ler_socket", &args)?;
    let stream = accept_one(&host, port)?;
    let mut line = String::new();
    BufReader::new(stream)
        .read_line(&mut line)
        .map_err(|err| file_error(format!("{host}:{port}: {err}")))?;
    Ok(Value::text(line.trim_end_matches(['\n', '\r'])))
}

/// `escrever_socket(texto)` or `escrever_socket(host, porta, texto)`:
/// accept one connection and write one line.
fn write_socket(_: &mut Interpreter, args: Vec<Value>) -> EvalResult {
    let ((host, port), text) = write_socket_target(&args)?;
    let mut stream = accept_one(&host, port)?;
    writeln!(stream, "{text}").map_err(|err| file_error(format!("{host}:{port}: {err}")))?;
    Ok(Value::Null)
}

/// With a single argument the text goes to the default address.
fn write_socket_target(args: &[Value]) -> Result<((String, u16), String), EvalError> {
    if args.len() <= 1 {
        Ok((
            (DEFAULT_HOST.to_string(), DEFAULT_PORT),
            arg(args, 0).to_string(),
        ))
    } else {
        Ok((
            socket_address("escrever_socket", args)?,
            arg(args, 2).to_string(),
        ))
    }
}
