//! Source file registry, source properties, and command origin tracking.
//!
//! This crate provides the [`SourceRegistry`] of named source files and their
//! properties, the [`get_source_file_property`] command that publishes a
//! property into the variable store, and the [`Backtrace`] of command
//! invocations attached to diagnostics.

#![warn(missing_docs)]

pub mod backtrace;
pub mod property;
pub mod query;
pub mod registry;
pub mod source_file;
pub mod source_id;

pub use backtrace::{Backtrace, ListFileContext};
pub use property::{PropertyKind, SourceProperty};
pub use query::get_source_file_property;
pub use registry::SourceRegistry;
pub use source_file::SourceFile;
pub use source_id::SourceId;
