//! Stats command implementation.
//!
//! The `myfc-favorites stats` command shows favorite counts for the current
//! scope along with where and how they are stored.

use anyhow::Context;
use serde::Serialize;

use crate::cli::args::StatsArgs;
use crate::error::Result;
use crate::favorites::{FavoriteKind, FavoritesStore};
use crate::ui::theme::FavoritesTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// State of the stored snapshot for the current scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoredStatus {
    /// A readable snapshot exists.
    Ok,
    /// Nothing has been saved for this scope yet.
    Missing,
    /// A snapshot exists but cannot be read; it loads as empty.
    Unreadable,
}

#[derive(Debug, Serialize)]
struct StatsReport {
    scope: String,
    storage: String,
    stored: StoredStatus,
    workouts: usize,
    movements: usize,
    total: usize,
}

/// The stats command implementation.
pub struct StatsCommand<'a> {
    store: &'a FavoritesStore,
    args: StatsArgs,
}

impl<'a> StatsCommand<'a> {
    /// Create a new stats command.
    pub fn new(store: &'a FavoritesStore, args: StatsArgs) -> Self {
        Self { store, args }
    }

    fn report(&self) -> StatsReport {
        let scope = self.store.scope();
        let adapter = self.store.adapter();
        let stored = match adapter.try_load(&scope) {
            Ok(Some(_)) => StoredStatus::Ok,
            Ok(None) => StoredStatus::Missing,
            Err(e) => {
                tracing::debug!("Stored favorites unreadable: {}", e);
                StoredStatus::Unreadable
            }
        };
        let state = self.store.snapshot();

        StatsReport {
            scope: scope.to_string(),
            storage: adapter.describe(),
            stored,
            workouts: state.len(FavoriteKind::Workout),
            movements: state.len(FavoriteKind::Movement),
            total: state.total(),
        }
    }
}

impl Command for StatsCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = self.report();

        if self.args.json {
            let payload =
                serde_json::to_string_pretty(&report).context("Failed to serialize stats")?;
            ui.data(&payload);
            return Ok(CommandResult::success());
        }

        let theme = FavoritesTheme::detect();
        ui.message(&theme.format_header(&format!("Favorites for {}", report.scope)));
        ui.message(&format!("  Workouts:  {}", report.workouts));
        ui.message(&format!("  Movements: {}", report.movements));
        ui.message(&format!("  Total:     {}", report.total));
        ui.detail(&format!("  Storage:   {}", report.storage));

        match report.stored {
            StoredStatus::Ok => {}
            StoredStatus::Missing => ui.detail("  Nothing saved yet for this scope"),
            StoredStatus::Unreadable => {
                ui.warning("Stored favorites for this scope are unreadable and were ignored")
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::entity::fixtures::{movement, workout};
    use crate::persistence::{MemoryBackend, PersistenceAdapter, ScopeKey};
    use crate::ui::{MockUI, OutputMode};
    use std::sync::Arc;

    #[test]
    fn reports_counts() {
        let store =
            FavoritesStore::open(PersistenceAdapter::new(MemoryBackend::new()), ScopeKey::Anonymous)
                .unwrap();
        store.add_entity(workout("w1", "Jawline Basics").into()).unwrap();
        store.add_entity(movement("m1", "Chin Tuck").into()).unwrap();
        store.flush();
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        let result = StatsCommand::new(&store, StatsArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_message("Favorites for local"));
        assert!(ui.has_message("Workouts:  1"));
        assert!(ui.has_message("Total:     2"));
        assert!(ui.details().iter().any(|d| d.contains("memory")));
    }

    #[test]
    fn json_reports_missing_snapshot() {
        let store = FavoritesStore::open(
            PersistenceAdapter::new(MemoryBackend::new()),
            ScopeKey::user("alice").unwrap(),
        )
        .unwrap();
        let mut ui = MockUI::new();

        StatsCommand::new(&store, StatsArgs { json: true })
            .execute(&mut ui)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.payloads()[0]).unwrap();
        assert_eq!(value["scope"], "user:alice");
        assert_eq!(value["stored"], "missing");
        assert_eq!(value["total"], 0);
    }

    #[test]
    fn corrupt_snapshot_is_flagged() {
        let backend = Arc::new(MemoryBackend::new());
        backend.insert_raw(&ScopeKey::Anonymous, "{not json");
        let store = FavoritesStore::open(
            PersistenceAdapter::from_shared(backend.clone()),
            ScopeKey::Anonymous,
        )
        .unwrap();
        let mut ui = MockUI::new();

        StatsCommand::new(&store, StatsArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_warning("unreadable"));
        assert!(store.snapshot().is_empty());
    }
}
