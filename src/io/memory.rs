//! In-memory I/O implementations for testing.

use std::io::{self, Cursor, Read, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use super::{InputProvider, TerminalTarget};

/// In-memory message source for testing.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    id: String,
    data: Arc<Vec<u8>>,
}

impl InMemorySource {
    /// Create a new in-memory source with the given data.
    pub fn new(id: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            data: Arc::new(data),
        }
    }

    /// Create a new in-memory source from a string.
    pub fn from_string(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self::new(id, data.into().into_bytes())
    }

    /// Create a source holding one encoded message per line.
    pub fn from_lines<I, S>(id: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut data = String::new();
        for line in lines {
            data.push_str(line.as_ref());
            data.push('\n');
        }
        Self::from_string(id, data)
    }
}

impl InputProvider for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(self.data.as_ref().clone())))
    }
}

/// In-memory terminal for testing.
///
/// Records every byte written and can replay them through a minimal terminal
/// model (`screen`) that understands `\r`, `\n` and the cursor-to-column
/// escape `ESC [ n G`.
#[derive(Debug, Clone)]
pub struct InMemoryTerminal {
    id: String,
    interactive: bool,
    buf: Arc<Mutex<Vec<u8>>>,
}

impl InMemoryTerminal {
    /// Create a terminal that reports itself as interactive.
    pub fn interactive(id: impl Into<String>) -> Self {
        Self::new(id, true)
    }

    /// Create a terminal that reports itself as not interactive (a pipe).
    pub fn piped(id: impl Into<String>) -> Self {
        Self::new(id, false)
    }

    pub fn new(id: impl Into<String>, interactive: bool) -> Self {
        Self {
            id: id.into(),
            interactive,
            buf: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buf.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Get the raw bytes written so far.
    pub fn contents(&self) -> Vec<u8> {
        self.lock().clone()
    }

    /// Get the raw output as a string.
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Number of line breaks written so far.
    pub fn line_breaks(&self) -> usize {
        self.lock().iter().filter(|b| **b == b'\n').count()
    }

    /// Clear the recorded output.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Render the recorded output the way a terminal would display it.
    ///
    /// Returns one entry per line, including the (possibly empty) line the
    /// cursor ends on.
    pub fn screen(&self) -> Vec<String> {
        let raw = self.contents_string();
        let mut lines: Vec<Vec<char>> = vec![Vec::new()];
        let mut col = 0usize;
        let mut chars = raw.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\n' => {
                    lines.push(Vec::new());
                    col = 0;
                }
                '\r' => col = 0,
                '\u{1b}' if chars.peek() == Some(&'[') => {
                    chars.next();
                    let mut params = String::new();
                    let mut command = None;
                    for next in chars.by_ref() {
                        if next.is_ascii_digit() || next == ';' {
                            params.push(next);
                        } else {
                            command = Some(next);
                            break;
                        }
                    }
                    if command == Some('G') {
                        let target: usize = params.parse().unwrap_or(1);
                        col = target.saturating_sub(1);
                    }
                }
                _ => {
                    if let Some(line) = lines.last_mut() {
                        while line.len() < col {
                            line.push(' ');
                        }
                        if col < line.len() {
                            line[col] = c;
                        } else {
                            line.push(c);
                        }
                    }
                    col += 1;
                }
            }
        }

        lines.into_iter().map(|l| l.into_iter().collect()).collect()
    }
}

impl TerminalTarget for InMemoryTerminal {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn open(&self) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(InMemoryWriteHandle {
            buf: self.buf.clone(),
        }))
    }
}

/// Write handle for the in-memory terminal.
struct InMemoryWriteHandle {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Write for InMemoryWriteHandle {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .buf
            .lock()
            .map_err(|_| io::Error::other("in-memory terminal lock poisoned"))?;
        guard.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
