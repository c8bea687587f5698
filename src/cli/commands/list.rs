//! List command implementation.
//!
//! The `myfc-favorites list` command lists favorited workouts and movements.

use anyhow::Context;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::favorites::{FavoriteEntity, FavoriteKind, FavoritesStore};
use crate::persistence::Snapshot;
use crate::ui::theme::FavoritesTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand<'a> {
    store: &'a FavoritesStore,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(store: &'a FavoritesStore, args: ListArgs) -> Self {
        Self { store, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    fn kinds(&self) -> Vec<FavoriteKind> {
        match self.args.kind {
            Some(kind) => vec![kind],
            None => FavoriteKind::ALL.to_vec(),
        }
    }

    fn print_json(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let payload = match self.args.kind {
            Some(kind) => serde_json::to_string_pretty(&self.store.list(kind)),
            None => serde_json::to_string_pretty(&Snapshot::from_state(&self.store.snapshot())),
        }
        .context("Failed to serialize favorites")?;

        ui.data(&payload);
        Ok(())
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            self.print_json(ui)?;
            return Ok(CommandResult::success());
        }

        let theme = FavoritesTheme::detect();
        let kinds = self.kinds();

        for (i, kind) in kinds.iter().enumerate() {
            let items = self.store.list(*kind);
            let heading = format!("{} ({})", capitalize(kind.plural()), items.len());
            ui.message(&theme.format_header(&heading));

            if items.is_empty() {
                ui.message(&format!("  {}", theme.dim.apply_to("No favorites yet")));
            }
            for entity in &items {
                ui.message(&format!("  {}", theme.format_favorite(entity)));
                ui.detail(&format!("    {}", entity_detail(entity)));
            }

            if i + 1 < kinds.len() {
                ui.message("");
            }
        }

        Ok(CommandResult::success())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn entity_detail(entity: &FavoriteEntity) -> String {
    match entity {
        FavoriteEntity::Workout(w) => format!(
            "{} · {} · {}s · published {}",
            w.workout_type,
            w.difficulty,
            w.duration,
            w.published_date.format("%Y-%m-%d")
        ),
        FavoriteEntity::Movement(m) => {
            format!("{} · added {}", m.category, m.date_added.format("%Y-%m-%d"))
        }
    }
}
