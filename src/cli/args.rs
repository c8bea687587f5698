//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::favorites::FavoriteKind;

/// MYFC favorites - manage favorited workouts and movements.
#[derive(Debug, Parser)]
#[command(name = "myfc-favorites")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ~/.myfc/config.yml)
    #[arg(short, long, global = true, env = "MYFC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding favorites snapshots
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Signed-in user id (omit for the local scope)
    #[arg(short, long, global = true, value_name = "ID")]
    pub user: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List favorites (default if no command specified)
    List(ListArgs),

    /// Check whether an item is favorited
    Check(CheckArgs),

    /// Flip an item's favorited state
    Toggle(RecordArgs),

    /// Favorite an item, updating its stored copy
    Add(RecordArgs),

    /// Unfavorite an item
    Remove(RemoveArgs),

    /// Clear the current scope's favorites and sign out
    Clear(ClearArgs),

    /// Show favorites counts and storage status
    Stats(StatsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Only list one kind (workout or movement)
    #[arg(short, long)]
    pub kind: Option<FavoriteKind>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Item kind (workout or movement)
    pub kind: FavoriteKind,

    /// Item id
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for commands that take a source record.
#[derive(Debug, Clone, clap::Args)]
pub struct RecordArgs {
    /// Item kind (workout or movement)
    pub kind: FavoriteKind,

    /// Read the JSON record from a file ("-" for stdin)
    #[arg(short, long, value_name = "PATH", conflicts_with = "record")]
    pub file: Option<PathBuf>,

    /// The JSON record inline
    #[arg(short, long, value_name = "JSON", required_unless_present = "file")]
    pub record: Option<String>,
}

/// Arguments for the `remove` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RemoveArgs {
    /// Item kind (workout or movement)
    pub kind: FavoriteKind,

    /// Item id
    pub id: String,
}

/// Arguments for the `clear` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ClearArgs {
    /// Don't ask for confirmation (required when signed in)
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `stats` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
