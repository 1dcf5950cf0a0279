//! A message sink writing to a pair of output streams.

use crate::message_type::MessageType;
use crate::renderer::MessageRenderer;
use crate::sink::MessageSink;
use cairn_source::Backtrace;
use std::io::{self, Stderr, Stdout, Write};

/// Writes messages to an output stream (status lines) and an error stream
/// (displayed messages and notices).
///
/// Displayed messages are formatted by a [`MessageRenderer`]. Status lines
/// are prefixed with `-- `. The sink counts displayed error-type messages so
/// the caller can fail the run even when no message was fatal.
pub struct ConsoleSink<O: Write, E: Write> {
    out: O,
    err: E,
    renderer: Box<dyn MessageRenderer>,
    error_count: usize,
}

impl ConsoleSink<Stdout, Stderr> {
    /// Creates a sink writing to the process's stdout and stderr.
    pub fn stdio(renderer: Box<dyn MessageRenderer>) -> Self {
        Self::new(io::stdout(), io::stderr(), renderer)
    }
}

impl<O: Write, E: Write> ConsoleSink<O, E> {
    /// Creates a sink over arbitrary writers.
    pub fn new(out: O, err: E, renderer: Box<dyn MessageRenderer>) -> Self {
        Self {
            out,
            err,
            renderer,
            error_count: 0,
        }
    }

    /// Returns `true` if any error-type message has been displayed.
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Returns the number of error-type messages displayed so far.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Consumes the sink, returning its writers.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

fn report_write_error(result: io::Result<()>) {
    if let Err(e) = result {
        tracing::warn!(error = %e, "failed to write message");
    }
}

impl<O: Write, E: Write> MessageSink for ConsoleSink<O, E> {
    fn display_message(&mut self, kind: MessageType, body: &str, backtrace: &Backtrace) {
        if kind.is_error() {
            self.error_count += 1;
        }
        let text = self.renderer.render(kind, body, backtrace);
        report_write_error(self.err.write_all(text.as_bytes()).and_then(|()| self.err.flush()));
    }

    fn emit(&mut self, body: &str) {
        report_write_error(writeln!(self.err, "{body}").and_then(|()| self.err.flush()));
    }

    fn emit_status(&mut self, body: &str, progress: Option<f32>) {
        if let Some(progress) = progress {
            tracing::trace!(progress, "status progress");
        }
        report_write_error(writeln!(self.out, "-- {body}").and_then(|()| self.out.flush()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{JsonRenderer, TerminalRenderer};
    use cairn_source::ListFileContext;

    fn sink() -> ConsoleSink<Vec<u8>, Vec<u8>> {
        ConsoleSink::new(Vec::new(), Vec::new(), Box::new(TerminalRenderer::default()))
    }

    fn output(sink: ConsoleSink<Vec<u8>, Vec<u8>>) -> (String, String) {
        let (out, err) = sink.into_inner();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn status_goes_to_out() {
        let mut s = sink();
        s.emit_status("Configuring done", None);
        let (out, err) = output(s);
        assert_eq!(out, "-- Configuring done\n");
        assert!(err.is_empty());
    }

    #[test]
    fn notice_goes_to_err() {
        let mut s = sink();
        s.emit("hello");
        let (out, err) = output(s);
        assert!(out.is_empty());
        assert_eq!(err, "hello\n");
    }

    #[test]
    fn display_is_rendered_to_err() {
        let mut s = sink();
        let bt = Backtrace::new().push(ListFileContext::new("cairn.toml", 2, "message"));
        s.display_message(MessageType::Warning, "careful", &bt);
        assert!(!s.has_errors());
        let (_, err) = output(s);
        assert_eq!(err, "Cairn Warning at cairn.toml:2 (message):\n  careful\n\n");
    }

    #[test]
    fn counts_error_types() {
        let mut s = sink();
        let bt = Backtrace::new();
        s.display_message(MessageType::FatalError, "a", &bt);
        s.display_message(MessageType::DeprecationWarning, "b", &bt);
        s.display_message(MessageType::AuthorError, "c", &bt);
        assert!(s.has_errors());
        assert_eq!(s.error_count(), 2);
    }

    #[test]
    fn json_renderer_output() {
        let mut s = ConsoleSink::new(Vec::new(), Vec::new(), Box::new(JsonRenderer));
        s.display_message(MessageType::Warning, "w", &Backtrace::new());
        let (_, err) = output(s);
        assert_eq!(err, "{\"kind\":\"warning\",\"message\":\"w\",\"backtrace\":[]}\n");
    }
}
