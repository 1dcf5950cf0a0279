//! Error type shared by every command.

/// The result of running a command.
///
/// `Err` means the command was misused (wrong arguments, unknown entity) and
/// aborted. Diagnostics a command *emits*, fatal or not, are reported through
/// the message sink and the command still returns `Ok`.
pub type CommandResult<T = ()> = Result<T, CommandError>;

/// A command aborted because of how it was invoked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The command was called with the wrong number of arguments.
    #[error("called with incorrect number of arguments")]
    InvalidArguments,

    /// A named source file is not known to the source registry.
    #[error("Could not find source file: {0}")]
    NotFound(String),
}
