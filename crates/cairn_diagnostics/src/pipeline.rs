//! The `message` command: classify, filter, indent, route, and latch fatality.

use crate::fatal::FatalFlag;
use crate::keyword::{lookup_keyword, UNTYPED};
use crate::policy::apply_policy;
use crate::sink::MessageSink;
use cairn_common::{cat, join, CommandError, CommandResult};
use cairn_config::definitions::MESSAGE_INDENT;
use cairn_config::{ConfigStore, LogLevel};
use cairn_source::Backtrace;

/// Everything the `message` command reads and writes besides its arguments.
///
/// The configuration is a read-only snapshot; the fatal flag may only be
/// raised.
pub struct MessageContext<'a> {
    /// Threshold, policy flags, and indentation.
    pub config: &'a ConfigStore,
    /// Where routed messages are written.
    pub sink: &'a mut dyn MessageSink,
    /// Raised when a fatal message is emitted.
    pub fatal: &'a mut FatalFlag,
    /// The origin attached to displayed messages.
    pub backtrace: &'a Backtrace,
}

impl<'a> MessageContext<'a> {
    /// Bundles the collaborators of a `message` invocation.
    pub fn new(
        config: &'a ConfigStore,
        sink: &'a mut dyn MessageSink,
        fatal: &'a mut FatalFlag,
        backtrace: &'a Backtrace,
    ) -> Self {
        Self {
            config,
            sink,
            fatal,
            backtrace,
        }
    }
}

/// Runs the `message` command.
///
/// An optional leading keyword selects the classification; without one the
/// whole argument list is the body of a notice. Messages suppressed by
/// policy or more verbose than the configured threshold produce no output
/// and never raise the fatal flag. The remaining arguments are concatenated
/// without a separator. Error, warning, and notice bodies get the current
/// `MESSAGE_INDENT` prepended to every line.
///
/// # Errors
///
/// [`CommandError::InvalidArguments`] if `args` is empty.
pub fn message<S: AsRef<str>>(args: &[S], ctx: &mut MessageContext<'_>) -> CommandResult {
    let Some(first) = args.first() else {
        return Err(CommandError::InvalidArguments);
    };
    let defs = &ctx.config.definitions;

    let (classification, body_args) = match lookup_keyword(first.as_ref()) {
        Some(rule) => match apply_policy(rule, defs) {
            Some(classification) => (classification, &args[1..]),
            None => {
                tracing::debug!(keyword = rule.keyword, "message suppressed by policy");
                return Ok(());
            }
        },
        None => (UNTYPED, args),
    };
    tracing::trace!(?classification, "classified message");

    if !classification.level.passes(ctx.config.log_level) {
        tracing::debug!(
            level = %classification.level,
            threshold = %ctx.config.log_level,
            "message below log level"
        );
        return Ok(());
    }

    let mut body = join(body_args.iter().map(|arg| AsRef::<str>::as_ref(arg)), "");

    if classification.level <= LogLevel::Notice {
        // Re-read on every message; the indentation may change between calls.
        let indent = join(defs.get_list(MESSAGE_INDENT), "");
        if !indent.is_empty() {
            let continued = cat!("\n", &indent);
            body = cat!(&indent, &body.replace('\n', &continued));
        }
    }

    match classification.level {
        LogLevel::Error | LogLevel::Warning => {
            ctx.sink
                .display_message(classification.display, &body, ctx.backtrace);
        }
        LogLevel::Notice => ctx.sink.emit(&body),
        LogLevel::Status | LogLevel::Verbose | LogLevel::Debug | LogLevel::Trace => {
            ctx.sink.emit_status(&body, None);
        }
    }

    if classification.fatal {
        ctx.fatal.raise();
    }
    Ok(())
}
