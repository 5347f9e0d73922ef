//! Standard I/O implementations for files, stdin and the process terminals.

use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;

use super::{InputProvider, TerminalTarget};

/// Input provider for reading from stdin.
#[derive(Debug, Clone)]
pub struct StdinInput {
    id: String,
}

impl StdinInput {
    /// Create a new stdin input provider.
    pub fn new() -> Self {
        Self { id: "-".into() }
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputProvider for StdinInput {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(io::stdin()))
    }
}

/// Input provider for reading from files.
#[derive(Debug, Clone)]
pub struct FileInput {
    id: String,
    path: PathBuf,
}

impl FileInput {
    /// Create a new file input provider.
    pub fn new(path: PathBuf) -> Self {
        let id = path.to_string_lossy().into_owned();
        Self { id, path }
    }

    /// Get the file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl InputProvider for FileInput {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        let file = std::fs::File::open(&self.path)?;
        Ok(Box::new(file))
    }
}

/// Terminal target for the process stdout.
#[derive(Debug, Clone)]
pub struct StdoutTerminal {
    id: String,
}

impl StdoutTerminal {
    /// Create a new stdout terminal target.
    pub fn new() -> Self {
        Self { id: "-".into() }
    }
}

impl Default for StdoutTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalTarget for StdoutTerminal {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_interactive(&self) -> bool {
        io::stdout().is_terminal()
    }

    fn open(&self) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(io::stdout()))
    }
}

/// Terminal target for the process stderr.
#[derive(Debug, Clone)]
pub struct StderrTerminal {
    id: String,
}

impl StderrTerminal {
    /// Create a new stderr terminal target.
    pub fn new() -> Self {
        Self {
            id: "stderr".into(),
        }
    }
}

impl Default for StderrTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalTarget for StderrTerminal {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_interactive(&self) -> bool {
        io::stderr().is_terminal()
    }

    fn open(&self) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(io::stderr()))
    }
}
