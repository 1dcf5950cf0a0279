//! Classification, filtering, and routing of user-facing messages.
//!
//! The [`message`] command turns a list of arguments into a diagnostic: an
//! optional leading keyword is looked up in the [`KEYWORD_RULES`] table,
//! developer and deprecation messages are reclassified by policy flags, the
//! result is filtered against the configured log level, indented, and routed
//! to a [`MessageSink`]. Fatal messages raise the [`FatalFlag`] so the caller
//! can stop executing further commands.

#![warn(missing_docs)]

pub mod console;
pub mod fatal;
pub mod keyword;
pub mod message_type;
pub mod pipeline;
pub mod policy;
pub mod renderer;
pub mod sink;

pub use console::ConsoleSink;
pub use fatal::FatalFlag;
pub use keyword::{lookup_keyword, Classification, KeywordRule, PolicyClass, KEYWORD_RULES};
pub use message_type::MessageType;
pub use pipeline::{message, MessageContext};
pub use policy::{apply_policy, resolve_policy, PolicyOutcome};
pub use renderer::{JsonRenderer, MessageRenderer, TerminalRenderer};
pub use sink::{MessageSink, Record, RecordingSink};
