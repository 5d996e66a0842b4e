//! pathrank CLI library.
//!
//! This crate provides the subcommand handlers, terminal styling and
//! output formatting behind the `pathrank` binary.

pub mod commands;
pub mod output;
pub mod terminal;

#[cfg(test)]
pub(crate) mod test_helpers;
