//! Rendering backends for displayed messages.

use crate::message_type::MessageType;
use cairn_source::{Backtrace, ListFileContext};
use serde::Serialize;
use std::fmt::Write;

/// Trait for rendering a displayed message into output text.
///
/// Implementations format messages for different targets: a human-readable
/// terminal layout or one JSON object per line.
pub trait MessageRenderer {
    /// Renders one message, including its trailing newline(s).
    fn render(&self, kind: MessageType, body: &str, backtrace: &Backtrace) -> String;
}

/// Renders messages in a block layout for terminals.
///
/// Produces output like:
/// ```text
/// Cairn Warning (dev) at cairn.toml:3 (message):
///   body line one
///   body line two
/// This warning is for project developers.  Set SUPPRESS_DEVELOPER_WARNINGS to
/// suppress it.
///
/// ```
pub struct TerminalRenderer {
    /// The tool name used as the header prefix.
    pub tool: String,
}

impl TerminalRenderer {
    /// Creates a terminal renderer with the given header prefix.
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new("Cairn")
    }
}

impl MessageRenderer for TerminalRenderer {
    fn render(&self, kind: MessageType, body: &str, backtrace: &Backtrace) -> String {
        let mut out = String::new();

        // Header line: Tool Title[ at origin]:
        out.push_str(&self.tool);
        out.push(' ');
        out.push_str(kind.title());
        if let Some(top) = backtrace.top() {
            let _ = write!(out, " at {top}");
        }
        out.push_str(":\n");

        for line in body.split('\n') {
            if !line.is_empty() {
                out.push_str("  ");
                out.push_str(line);
            }
            out.push('\n');
        }

        // Outer frames, innermost first
        let callers: Vec<_> = backtrace.frames().skip(1).collect();
        if !callers.is_empty() {
            out.push_str("Call Stack (most recent call first):\n");
            for frame in callers {
                let _ = writeln!(out, "  {frame}");
            }
        }

        match kind {
            MessageType::AuthorWarning => out.push_str(
                "This warning is for project developers.  \
                 Set SUPPRESS_DEVELOPER_WARNINGS to suppress it.\n",
            ),
            MessageType::AuthorError => out.push_str(
                "This error is for project developers.  \
                 Set SUPPRESS_DEVELOPER_ERRORS to suppress it.\n",
            ),
            _ => {}
        }

        out.push('\n');
        out
    }
}

/// Renders each message as a single-line JSON object.
#[derive(Default)]
pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonMessage<'a> {
    kind: MessageType,
    message: &'a str,
    backtrace: Vec<&'a ListFileContext>,
}

impl MessageRenderer for JsonRenderer {
    fn render(&self, kind: MessageType, body: &str, backtrace: &Backtrace) -> String {
        let record = JsonMessage {
            kind,
            message: body,
            backtrace: backtrace.frames().collect(),
        };
        let mut out = serde_json::to_string(&record).unwrap_or_default();
        out.push('\n');
        out
    }
}
