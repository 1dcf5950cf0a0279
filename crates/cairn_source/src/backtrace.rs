//! Origin context for diagnostics: where the current command was invoked from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One command invocation in a configuration file.
///
/// Line numbers are 1-indexed for display to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFileContext {
    /// The configuration file containing the invocation.
    pub file_path: PathBuf,
    /// The line (or entry number) of the invocation.
    pub line: u32,
    /// The name of the invoked command.
    pub command: String,
}

impl ListFileContext {
    /// Creates a new invocation context.
    pub fn new(file_path: impl Into<PathBuf>, line: u32, command: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            command: command.into(),
        }
    }
}

impl fmt::Display for ListFileContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} ({})",
            self.file_path.display(),
            self.line,
            self.command
        )
    }
}

/// The stack of invocations leading to the current command, innermost last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backtrace {
    frames: Vec<ListFileContext>,
}

impl Backtrace {
    /// Creates an empty backtrace (no origin information).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new backtrace with `frame` pushed as the innermost invocation.
    pub fn push(&self, frame: ListFileContext) -> Self {
        let mut frames = self.frames.clone();
        frames.push(frame);
        Self { frames }
    }

    /// Returns the innermost invocation, if any.
    pub fn top(&self) -> Option<&ListFileContext> {
        self.frames.last()
    }

    /// Iterates from the innermost invocation outwards.
    pub fn frames(&self) -> impl Iterator<Item = &ListFileContext> {
        self.frames.iter().rev()
    }

    /// Returns `true` if there is no origin information.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
