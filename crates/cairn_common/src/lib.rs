//! Shared foundational helpers used across the cairn configuration tool.
//!
//! This crate provides the text-assembly primitives ([`join`], [`wrap`],
//! [`cat!`], prefix/suffix tests), `;`-list expansion, the boolean
//! interpretation of configuration values, and the error type shared by
//! every command.

#![warn(missing_docs)]

pub mod alpha_num;
pub mod error;
pub mod list;
pub mod strings;
pub mod truth;

pub use alpha_num::{cat_views, AlphaNum};
pub use error::{CommandError, CommandResult};
pub use list::{escape_list_element, expand_list};
pub use strings::{
    has_prefix, has_suffix, join, strip_suffix_if_exists, wrap, wrap_chars, Affix,
};
pub use truth::{is_notfound, is_on};
