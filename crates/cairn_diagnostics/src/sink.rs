//! The output channels a routed message is written to.

use crate::message_type::MessageType;
use cairn_source::Backtrace;

/// Destination for routed messages.
///
/// Error- and warning-level messages go through
/// [`display_message`](Self::display_message) with their display type and
/// origin; notices go through [`emit`](Self::emit); status, verbose, debug
/// and trace messages go through [`emit_status`](Self::emit_status).
pub trait MessageSink {
    /// Displays an error- or warning-level message with its origin.
    fn display_message(&mut self, kind: MessageType, body: &str, backtrace: &Backtrace);

    /// Writes a notice unconditionally.
    fn emit(&mut self, body: &str);

    /// Writes a status line; `progress` is a completion fraction, if known.
    fn emit_status(&mut self, body: &str, progress: Option<f32>);
}

/// One call recorded by a [`RecordingSink`].
#[derive(Clone, Debug, PartialEq)]
pub enum Record {
    /// A [`MessageSink::display_message`] call.
    Display {
        /// The display type.
        kind: MessageType,
        /// The message body, indentation included.
        body: String,
        /// The origin of the message.
        backtrace: Backtrace,
    },
    /// A [`MessageSink::emit`] call.
    Notice(String),
    /// A [`MessageSink::emit_status`] call.
    Status {
        /// The status line.
        body: String,
        /// The progress hint.
        progress: Option<f32>,
    },
}

impl Record {
    /// Returns the body of the recorded message.
    pub fn body(&self) -> &str {
        match self {
            Record::Display { body, .. } | Record::Notice(body) | Record::Status { body, .. } => {
                body
            }
        }
    }
}

/// A sink that keeps every call in memory, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Vec<Record>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded calls.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Takes all recorded calls, leaving the sink empty.
    pub fn take_all(&mut self) -> Vec<Record> {
        std::mem::take(&mut self.records)
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of displayed messages with an error type.
    pub fn error_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| matches!(record, Record::Display { kind, .. } if kind.is_error()))
            .count()
    }
}

impl MessageSink for RecordingSink {
    fn display_message(&mut self, kind: MessageType, body: &str, backtrace: &Backtrace) {
        self.records.push(Record::Display {
            kind,
            body: body.to_string(),
            backtrace: backtrace.clone(),
        });
    }

    fn emit(&mut self, body: &str) {
        self.records.push(Record::Notice(body.to_string()));
    }

    fn emit_status(&mut self, body: &str, progress: Option<f32>) {
        self.records.push(Record::Status {
            body: body.to_string(),
            progress,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sink() {
        let mut sink = RecordingSink::new();
        assert!(sink.is_empty());
        assert_eq!(sink.error_count(), 0);
        assert!(sink.take_all().is_empty());
    }

    #[test]
    fn records_in_order() {
        let mut sink = RecordingSink::new();
        sink.emit("first");
        sink.emit_status("second", None);
        sink.display_message(MessageType::Warning, "third", &Backtrace::new());
        let bodies: Vec<_> = sink.records().iter().map(Record::body).collect();
        assert_eq!(bodies, vec!["first", "second", "third"]);
    }

    #[test]
    fn counts_errors_only() {
        let mut sink = RecordingSink::new();
        let bt = Backtrace::new();
        sink.display_message(MessageType::FatalError, "e1", &bt);
        sink.display_message(MessageType::AuthorWarning, "w", &bt);
        sink.display_message(MessageType::DeprecationError, "e2", &bt);
        sink.emit("notice");
        assert_eq!(sink.error_count(), 2);
    }

    #[test]
    fn take_all_drains() {
        let mut sink = RecordingSink::new();
        sink.emit("a");
        assert_eq!(sink.take_all().len(), 1);
        assert!(sink.is_empty());
    }
}
