#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn buffer_handler_println_appends_newline() {
    let handler = BufferPrintHandler::new();
    handler.println("ola");
    assert_eq!(handler.get_output(), "ola\n");
}

#[test]
fn buffer_handler_print_and_println_interleave() {
    let handler = BufferPrintHandler::new();
    handler.print("ola");
    handler.print(", ");
    handler.println("mundo");
    assert_eq!(handler.get_output(), "ola, mundo\n");
}

#[test]
fn take_output_drains_the_buffer() {
    let handler = buffer_handler();
    handler.println("um");
    assert_eq!(handler.take_output(), "um\n");
    assert_eq!(handler.get_output(), "");
    handler.println("dois");
    assert_eq!(handler.take_output(), "dois\n");
}

#[test]
fn stdout_handler_captures_nothing() {
    let handler = stdout_handler();
    assert_eq!(handler.get_output(), "");
    assert_eq!(handler.take_output(), "");
}

#[test]
fn silent_handler_discards_output() {
    let handler = silent_handler();
    handler.println("ola");
    handler.print("mundo");
    assert_eq!(handler.get_output(), "");
}

#[test]
fn buffer_handler_is_shareable_across_threads() {
    let handler = buffer_handler();
    let other = Arc::clone(&handler);
    let worker = std::thread::spawn(move || {
        for _ in 0..50 {
            other.println("a");
        }
    });
    for _ in 0..50 {
        handler.println("b");
    }
    worker.join().unwrap();
    assert_eq!(handler.get_output().lines().count(), 100);
}
