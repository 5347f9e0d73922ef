//! Terminal target trait definition.

use std::fmt::Debug;
use std::io::Write;

/// Trait for the output stream a sink renders onto.
///
/// A target answers the capability question once ("is this an interactive
/// terminal?") and hands out the writer the sink then owns exclusively.
pub trait TerminalTarget: Send + Sync + Debug {
    /// Returns a unique identifier for this target.
    ///
    /// Convention: "-" for stdout, "stderr" for stderr.
    fn id(&self) -> &str;

    /// Whether the target is attached to an interactive terminal.
    fn is_interactive(&self) -> bool;

    /// Open the target for writing.
    fn open(&self) -> std::io::Result<Box<dyn Write + Send>>;
}
