//! Tests for in-memory IO implementations.

use std::io::{Read, Write};

use crate::{InMemorySource, InMemoryTerminal, InputProvider, TerminalTarget};

#[test]
fn in_memory_source_reads_data() {
    let src = InMemorySource::from_string("id", "hello");

    let mut reader = src.open().expect("open in-memory source");
    let mut buf = String::new();
    reader.read_to_string(&mut buf).unwrap();

    assert_eq!(buf, "hello");
    assert_eq!(src.id(), "id");
}

#[test]
fn from_lines_terminates_each_line() {
    let src = InMemorySource::from_lines("id", ["a", "b"]);
    let mut buf = String::new();
    src.open().unwrap().read_to_string(&mut buf).unwrap();
    assert_eq!(buf, "a\nb\n");
}

#[test]
fn terminal_records_and_clears() {
    let term = InMemoryTerminal::interactive("tty");
    assert!(term.is_interactive());
    assert!(!InMemoryTerminal::piped("pipe").is_interactive());

    {
        let mut w = term.open().unwrap();
        w.write_all(b"abc\n").unwrap();
    }
    {
        let mut w = term.open().unwrap();
        w.write_all(b"def").unwrap();
    }
    assert_eq!(term.contents(), b"abc\ndef".to_vec());
    assert_eq!(term.line_breaks(), 1);

    term.clear();
    assert!(term.contents().is_empty());
}

#[test]
fn screen_applies_column_moves_and_carriage_returns() {
    let term = InMemoryTerminal::interactive("tty");
    let mut w = term.open().unwrap();

    w.write_all(b"\x1b[1GFixed 9 issues so far").unwrap();
    w.write_all(b"\x1b[1GFixed 10 issues so far").unwrap();
    w.write_all(b"\nabcdef\rXY\x1b[5Gz").unwrap();

    assert_eq!(
        term.screen(),
        vec!["Fixed 10 issues so far".to_string(), "XYcdzf".to_string()]
    );
}

#[test]
fn screen_of_empty_terminal_is_one_empty_line() {
    let term = InMemoryTerminal::piped("pipe");
    assert_eq!(term.screen(), vec![String::new()]);
}
