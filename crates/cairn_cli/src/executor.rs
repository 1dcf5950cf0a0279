//! Command dispatch against a shared configuration, registry, and sink.

use std::path::PathBuf;

use cairn_common::{cat, CommandResult};
use cairn_config::{CommandSpec, ConfigStore, Definitions};
use cairn_diagnostics::{message, FatalFlag, MessageContext, MessageSink, MessageType};
use cairn_source::{get_source_file_property, Backtrace, ListFileContext, SourceRegistry};

/// Name of the `message` command.
pub const MESSAGE: &str = "message";
/// Name of the `get_source_file_property` command.
pub const GET_SOURCE_FILE_PROPERTY: &str = "get_source_file_property";

/// Runs commands one at a time, reporting their failures to the sink.
pub struct Executor<S: MessageSink> {
    store: ConfigStore,
    registry: SourceRegistry,
    sink: S,
    fatal: FatalFlag,
    origin: PathBuf,
}

impl<S: MessageSink> Executor<S> {
    /// Creates an executor. `origin` names the file commands are attributed to.
    pub fn new(
        store: ConfigStore,
        registry: SourceRegistry,
        sink: S,
        origin: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            registry,
            sink,
            fatal: FatalFlag::new(),
            origin: origin.into(),
        }
    }

    /// Executes `commands` in order, stopping once a fatal message is emitted.
    ///
    /// Returns the number of commands that ran.
    pub fn run_all(&mut self, commands: &[CommandSpec]) -> usize {
        let mut ran = 0;
        for (index, spec) in commands.iter().enumerate() {
            if self.fatal.is_raised() {
                tracing::debug!(remaining = commands.len() - index, "halting after fatal error");
                break;
            }
            let line = u32::try_from(index + 1).unwrap_or(u32::MAX);
            self.execute(&spec.name, &spec.args, line);
            ran += 1;
        }
        ran
    }

    /// Executes one command invocation attributed to `line` of the origin.
    ///
    /// Failures are displayed as errors with the invocation's backtrace and
    /// do not stop later commands. Returns `false` if the command failed.
    pub fn execute<A: AsRef<str>>(&mut self, name: &str, args: &[A], line: u32) -> bool {
        let backtrace =
            Backtrace::new().push(ListFileContext::new(self.origin.clone(), line, name));
        tracing::trace!(command = name, line, "executing");

        let result = match name {
            MESSAGE => {
                let mut ctx = MessageContext::new(
                    &self.store,
                    &mut self.sink,
                    &mut self.fatal,
                    &backtrace,
                );
                message(args, &mut ctx)
            }
            GET_SOURCE_FILE_PROPERTY => {
                get_source_file_property(args, &self.registry, &mut self.store.definitions)
            }
            _ => {
                let body = cat!("Unknown command \"", name, "\".");
                self.sink
                    .display_message(MessageType::FatalError, &body, &backtrace);
                return false;
            }
        };
        self.report(name, result, &backtrace)
    }

    fn report(&mut self, name: &str, result: CommandResult, backtrace: &Backtrace) -> bool {
        match result {
            Ok(()) => true,
            Err(err) => {
                let body = cat!(name, " ", err.to_string());
                self.sink
                    .display_message(MessageType::FatalError, &body, backtrace);
                false
            }
        }
    }

    /// Returns `true` once a fatal message has been emitted.
    pub fn fatal_raised(&self) -> bool {
        self.fatal.is_raised()
    }

    /// The current variable definitions.
    pub fn definitions(&self) -> &Definitions {
        &self.store.definitions
    }

    /// The sink messages are routed to.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}
