//! In-place progress line.
//!
//! Two states: `Idle` and `PendingOverwrite`. A fix-count update rewrites the
//! current line from column 0 and leaves it unterminated; `terminate` closes
//! it with a single line break so later output starts on a fresh line.

use std::io::{self, Write};

use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::style::Print;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressState {
    #[default]
    Idle,
    /// The last write was a counter update not yet followed by a line break
    PendingOverwrite,
}

#[derive(Debug, Default)]
pub struct ProgressLine {
    state: ProgressState,
}

impl ProgressLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ProgressState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == ProgressState::PendingOverwrite
    }

    /// Rewrite the current line with the fix counter.
    ///
    /// The whole frame goes out in one write. The state follows the bytes
    /// handed to the stream, so a failed flush still leaves the line pending.
    pub fn overwrite(&mut self, out: &mut dyn Write, count: u64) -> io::Result<()> {
        let mut frame: Vec<u8> = Vec::with_capacity(32);
        queue!(frame, MoveToColumn(0), Print(fix_count_label(count)))?;
        out.write_all(&frame)?;
        self.state = ProgressState::PendingOverwrite;
        out.flush()
    }

    /// End a pending line with exactly one line break.
    ///
    /// Returns whether anything was written.
    pub fn terminate(&mut self, out: &mut dyn Write) -> io::Result<bool> {
        if !self.is_pending() {
            return Ok(false);
        }
        out.write_all(b"\n")?;
        self.state = ProgressState::Idle;
        out.flush()?;
        Ok(true)
    }
}

/// `"Fixed 1 issue so far"`, `"Fixed 3 issues so far"`.
pub fn fix_count_label(count: u64) -> String {
    let plural = if count > 1 { "s" } else { "" };
    format!("Fixed {count} issue{plural} so far")
}
