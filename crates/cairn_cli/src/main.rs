//! Cairn CLI, the command-line front end for the Cairn build-configuration
//! commands.
//!
//! Provides `cairn message` and `cairn get-source-file-property` for running a
//! single command, and `cairn run` for executing the `[[commands]]` list of a
//! `cairn.toml` project.

#![warn(missing_docs)]

mod executor;
mod project;

use std::path::PathBuf;
use std::process;

use cairn_config::LogLevel;
use cairn_diagnostics::{ConsoleSink, JsonRenderer, MessageRenderer, TerminalRenderer};
use cairn_source::{SourceProperty, SourceRegistry};
use clap::{Parser, Subcommand, ValueEnum};

use crate::executor::{Executor, GET_SOURCE_FILE_PROPERTY, MESSAGE};
use crate::project::COMMAND_LINE_ORIGIN;

/// Cairn, build-configuration commands from the terminal.
#[derive(Parser, Debug)]
#[command(name = "cairn", version, about = "Cairn build configuration")]
pub struct Cli {
    /// Path to a `cairn.toml` file, or a directory containing one.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Message threshold, overriding `[message] log_level`.
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Define a variable before running (e.g. `-D WARN_DEPRECATED=OFF`).
    #[arg(
        short = 'D',
        global = true,
        value_name = "NAME=VALUE",
        value_parser = parse_definition
    )]
    pub define: Vec<(String, String)>,

    /// Output format for displayed messages.
    #[arg(long, global = true, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Emit one message, as the `message` command would.
    Message {
        /// An optional mode keyword followed by the message text.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Query a source file property and print the resulting variable.
    GetSourceFileProperty {
        /// `<VARIABLE> <SOURCE> <PROPERTY>`.
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Execute the `[[commands]]` list from `cairn.toml`.
    Run,
}

/// Output format for displayed messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// One JSON object per displayed message.
    Json,
}

impl ReportFormat {
    fn renderer(self) -> Box<dyn MessageRenderer> {
        match self {
            ReportFormat::Text => Box::new(TerminalRenderer::default()),
            ReportFormat::Json => Box::new(JsonRenderer),
        }
    }
}

/// Parses a `NAME=VALUE` definition. The value may be empty or contain `=`.
fn parse_definition(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        Some(_) => Err(format!("missing variable name in '{raw}'")),
        None => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}

/// The variable a `get_source_file_property` invocation writes, if any.
///
/// Unsupported property names write nothing, so a value the variable
/// already had must not be reported as the query's result.
fn published_variable(args: &[String]) -> Option<&str> {
    let [variable, _, property] = args else {
        return None;
    };
    SourceProperty::from_name(property).map(|_| variable.as_str())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Runs the selected command and returns the process exit code.
///
/// The code is 1 when an error-type message was displayed or a fatal
/// message stopped execution, 0 otherwise.
fn run(cli: Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let project = project::load_project(cli.config.as_deref(), &cwd)?;

    let mut store = cairn_config::build_store(&project.config)?;
    if let Some(level) = cli.log_level {
        store.log_level = level;
    }
    for (name, value) in &cli.define {
        store.definitions.define(name.as_str(), value.as_str());
    }
    tracing::debug!(
        log_level = %store.log_level,
        definitions = store.definitions.len(),
        "configuration ready"
    );

    let registry = SourceRegistry::from_config(&project.config.sources);
    let sink = ConsoleSink::stdio(cli.format.renderer());

    let exec = match cli.command {
        Command::Message { args } => {
            let mut exec = Executor::new(store, registry, sink, COMMAND_LINE_ORIGIN);
            exec.execute(MESSAGE, &args, 1);
            exec
        }
        Command::GetSourceFileProperty { args } => {
            let mut exec = Executor::new(store, registry, sink, COMMAND_LINE_ORIGIN);
            let succeeded = exec.execute(GET_SOURCE_FILE_PROPERTY, &args, 1);
            if let Some(variable) = published_variable(&args).filter(|_| succeeded) {
                if let Some(value) = exec.definitions().get(variable) {
                    println!("{variable}={value}");
                }
            }
            exec
        }
        Command::Run => {
            if project.path.is_none() {
                return Err(format!(
                    "could not find cairn.toml in {} or any parent directory",
                    cwd.display()
                )
                .into());
            }
            let mut exec = Executor::new(store, registry, sink, project.origin());
            let ran = exec.run_all(&project.config.commands);
            tracing::debug!(ran, total = project.config.commands.len(), "run finished");
            exec
        }
    };

    let failed = exec.fatal_raised() || exec.sink().has_errors();
    Ok(i32::from(failed))
}
