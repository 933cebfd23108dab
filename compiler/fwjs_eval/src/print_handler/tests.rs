#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn buffer_handler_println_appends_newline() {
    let handler = BufferPrintHandler::new();
    handler.println("42");
    handler.println("null");
    assert_eq!(handler.get_output(), "42\nnull\n");
}

#[test]
fn buffer_handler_clear_empties_buffer() {
    let handler = buffer_handler();
    handler.println("true");
    assert!(!handler.get_output().is_empty());
    handler.clear();
    assert!(handler.get_output().is_empty());
}

#[test]
fn stdout_handler_captures_nothing() {
    let handler = stdout_handler();
    handler.clear();
    assert_eq!(handler.get_output(), "");
}

#[test]
fn silent_handler_discards_output() {
    let handler = silent_handler();
    handler.println("hello");
    assert_eq!(handler.get_output(), "");
}

#[test]
fn buffer_handler_is_thread_safe() {
    use std::thread;

    let handler = buffer_handler();
    let handler2 = handler.clone();

    let t1 = thread::spawn(move || {
        for _ in 0..100 {
            handler2.println("a");
        }
    });

    for _ in 0..100 {
        handler.println("b");
    }

    t1.join().unwrap();

    assert_eq!(handler.get_output().lines().count(), 200);
}
