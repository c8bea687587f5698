//! Command-line interface for the favorites store.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    CheckArgs, ClearArgs, Cli, Commands, CompletionsArgs, ListArgs, RecordArgs, RemoveArgs,
    StatsArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
