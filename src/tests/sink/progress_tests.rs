//! Tests for the in-place progress line.

use std::io::{self, Write};

use crate::io::{InMemoryTerminal, TerminalTarget};
use crate::sink::{ProgressLine, ProgressState, fix_count_label};

#[test]
fn label_pluralizes_above_one() {
    assert_eq!(fix_count_label(1), "Fixed 1 issue so far");
    assert_eq!(fix_count_label(2), "Fixed 2 issues so far");
    assert_eq!(fix_count_label(40), "Fixed 40 issues so far");
}

#[test]
fn overwrite_moves_to_column_zero_and_leaves_line_open() {
    let term = InMemoryTerminal::interactive("tty");
    let mut out = term.open().unwrap();
    let mut line = ProgressLine::new();
    assert_eq!(line.state(), ProgressState::Idle);

    line.overwrite(&mut out, 1).unwrap();

    assert_eq!(term.contents_string(), "\u{1b}[1GFixed 1 issue so far");
    assert_eq!(term.line_breaks(), 0);
    assert_eq!(line.state(), ProgressState::PendingOverwrite);
}

#[test]
fn repeated_overwrites_stay_on_one_line() {
    let term = InMemoryTerminal::interactive("tty");
    let mut out = term.open().unwrap();
    let mut line = ProgressLine::new();

    for count in [1, 2, 9, 10] {
        line.overwrite(&mut out, count).unwrap();
    }

    assert_eq!(term.screen(), vec!["Fixed 10 issues so far".to_string()]);
    assert!(line.is_pending());
}

#[test]
fn terminate_writes_one_break_only_when_pending() {
    let term = InMemoryTerminal::interactive("tty");
    let mut out = term.open().unwrap();
    let mut line = ProgressLine::new();

    assert!(!line.terminate(&mut out).unwrap());
    assert!(term.contents().is_empty());

    line.overwrite(&mut out, 3).unwrap();
    assert!(line.terminate(&mut out).unwrap());
    assert!(!line.terminate(&mut out).unwrap());

    assert_eq!(term.line_breaks(), 1);
    assert_eq!(line.state(), ProgressState::Idle);
}

/// Accepts every byte but never manages to flush.
#[derive(Default)]
struct NoFlush {
    bytes: Vec<u8>,
}

impl Write for NoFlush {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("flush failed"))
    }
}

#[test]
fn state_tracks_written_bytes_when_flush_fails() {
    let mut out = NoFlush::default();
    let mut line = ProgressLine::new();

    assert!(line.overwrite(&mut out, 2).is_err());
    assert_eq!(line.state(), ProgressState::PendingOverwrite);

    assert!(line.terminate(&mut out).is_err());
    assert_eq!(line.state(), ProgressState::Idle);
    assert!(!line.terminate(&mut out).unwrap());

    let written = String::from_utf8(out.bytes).unwrap();
    assert_eq!(written, "\u{1b}[1GFixed 2 issues so far\n");
}
