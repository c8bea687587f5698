//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which resolves
//! configuration once, opens the favorites store for the selected scope and
//! routes the subcommand to its implementation.

pub mod check;
pub mod clear;
pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod mutate;
pub mod record;
pub mod stats;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
