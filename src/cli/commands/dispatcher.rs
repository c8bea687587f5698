//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, ListArgs};
use crate::config::{load_resolved_config, FavoritesConfig};
use crate::error::Result;
use crate::favorites::FavoritesStore;
use crate::persistence::{FileBackend, PersistenceAdapter, ScopeKey};
use crate::ui::{OutputMode, UserInterface};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Exit code when favorites changed in memory but could not be saved.
pub const EXIT_NOT_PERSISTED: i32 = 3;

/// Dispatches CLI commands to their implementations.
#[derive(Debug)]
pub struct CommandDispatcher {
    config: FavoritesConfig,
}

impl CommandDispatcher {
    /// Create a dispatcher for an already resolved configuration.
    pub fn new(config: FavoritesConfig) -> Self {
        Self { config }
    }

    /// Resolve configuration from file, environment and CLI flags.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = load_resolved_config(cli.config.as_deref())?;

        if let Some(dir) = &cli.data_dir {
            config.data_dir = Some(dir.clone());
        }
        if let Some(user) = &cli.user {
            config.scope = Some(user.clone());
        }
        if cli.quiet {
            config.output = OutputMode::Quiet;
        } else if cli.verbose {
            config.output = OutputMode::Verbose;
        }

        Ok(Self::new(config))
    }

    /// The resolved configuration.
    pub fn config(&self) -> &FavoritesConfig {
        &self.config
    }

    /// Open the favorites store for the configured scope.
    pub fn open_store(&self) -> Result<FavoritesStore> {
        let data_dir = self.config.data_dir();
        let scope: ScopeKey = self.config.scope_key();
        tracing::debug!("Opening favorites in {:?} for scope {}", data_dir, scope);

        let adapter = PersistenceAdapter::new(FileBackend::new(data_dir));
        FavoritesStore::open(adapter, scope)
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let Some(Commands::Completions(args)) = &cli.command {
            let cmd = super::completions::CompletionsCommand::new(args.clone());
            return cmd.execute(ui);
        }

        let store = self.open_store()?;

        match &cli.command {
            Some(Commands::List(args)) => {
                super::list::ListCommand::new(&store, args.clone()).execute(ui)
            }
            Some(Commands::Check(args)) => {
                super::check::CheckCommand::new(&store, args.clone()).execute(ui)
            }
            Some(Commands::Toggle(args)) => {
                super::mutate::ToggleCommand::new(&store, args.clone()).execute(ui)
            }
            Some(Commands::Add(args)) => {
                super::mutate::AddCommand::new(&store, args.clone()).execute(ui)
            }
            Some(Commands::Remove(args)) => {
                super::mutate::RemoveCommand::new(&store, args.clone()).execute(ui)
            }
            Some(Commands::Clear(args)) => {
                super::clear::ClearCommand::new(&store, args.clone()).execute(ui)
            }
            Some(Commands::Stats(args)) => {
                super::stats::StatsCommand::new(&store, args.clone()).execute(ui)
            }
            Some(Commands::Completions(_)) => Ok(CommandResult::success()),
            None => super::list::ListCommand::new(&store, ListArgs::default()).execute(ui),
        }
    }
}

/// Flush queued saves and report a failed save to the user.
pub(crate) fn finish_mutation(store: &FavoritesStore, ui: &mut dyn UserInterface) -> CommandResult {
    let status = store.flush();
    match status.last_error {
        Some(error) => {
            ui.warning(&format!("Favorites changed but were not saved: {}", error));
            CommandResult::failure(EXIT_NOT_PERSISTED)
        }
        None => CommandResult::success(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn flags_override_config_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.yml");
        std::fs::write(&config_path, "scope: alice\ndata_dir: /from/file\n").unwrap();

        let cli = Cli::parse_from([
            "myfc-favorites",
            "--config",
            config_path.to_str().unwrap(),
            "--user",
            "bob",
            "--data-dir",
            "/from/flag",
            "--verbose",
        ]);
        let dispatcher = CommandDispatcher::from_cli(&cli).unwrap();

        assert_eq!(dispatcher.config().scope.as_deref(), Some("bob"));
        assert_eq!(dispatcher.config().data_dir(), PathBuf::from("/from/flag"));
        assert_eq!(dispatcher.config().output, OutputMode::Verbose);
    }

    #[test]
    fn open_store_uses_configured_scope() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(FavoritesConfig {
            data_dir: Some(temp.path().to_path_buf()),
            scope: Some("alice".to_string()),
            ..Default::default()
        });

        let store = dispatcher.open_store().unwrap();
        assert_eq!(store.scope(), ScopeKey::User("alice".to_string()));
        assert!(!store.is_loading());
    }
}
