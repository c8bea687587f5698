//! Mutating commands: `toggle`, `add` and `remove`.
//!
//! Each command applies one change through the store, then waits for the
//! queued save so that a storage failure can be reported before exit. The
//! in-memory change stands either way.

use crate::cli::args::{RecordArgs, RemoveArgs};
use crate::error::Result;
use crate::favorites::{FavoriteKind, FavoritesStore, ToggleOutcome};
use crate::ui::UserInterface;

use super::dispatcher::{finish_mutation, Command, CommandResult};
use super::record::read_record;

/// The toggle command implementation.
pub struct ToggleCommand<'a> {
    store: &'a FavoritesStore,
    args: RecordArgs,
}

impl<'a> ToggleCommand<'a> {
    /// Create a new toggle command.
    pub fn new(store: &'a FavoritesStore, args: RecordArgs) -> Self {
        Self { store, args }
    }
}

impl Command for ToggleCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let record = read_record(&self.args)?;
        let outcome = self.store.toggle(self.args.kind, &record)?;
        let label = record_label(self.args.kind, &record);

        match outcome {
            ToggleOutcome::Added => ui.success(&format!("Added {} to favorites", label)),
            ToggleOutcome::Removed => ui.success(&format!("Removed {} from favorites", label)),
        }

        Ok(finish_mutation(self.store, ui))
    }
}

/// The add command implementation.
pub struct AddCommand<'a> {
    store: &'a FavoritesStore,
    args: RecordArgs,
}

impl<'a> AddCommand<'a> {
    /// Create a new add command.
    pub fn new(store: &'a FavoritesStore, args: RecordArgs) -> Self {
        Self { store, args }
    }
}

impl Command for AddCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let record = read_record(&self.args)?;
        let inserted = self.store.add(self.args.kind, &record)?;
        let label = record_label(self.args.kind, &record);

        if inserted {
            ui.success(&format!("Added {} to favorites", label));
        } else {
            ui.success(&format!("Updated {} in favorites", label));
        }

        Ok(finish_mutation(self.store, ui))
    }
}

/// The remove command implementation.
pub struct RemoveCommand<'a> {
    store: &'a FavoritesStore,
    args: RemoveArgs,
}

impl<'a> RemoveCommand<'a> {
    /// Create a new remove command.
    pub fn new(store: &'a FavoritesStore, args: RemoveArgs) -> Self {
        Self { store, args }
    }
}

impl Command for RemoveCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let id = self.args.id.trim();

        if !self.store.remove(self.args.kind, id) {
            ui.message(&format!("{} {} was not favorited", self.args.kind, id));
            return Ok(CommandResult::success());
        }

        ui.success(&format!("Removed {} {} from favorites", self.args.kind, id));
        Ok(finish_mutation(self.store, ui))
    }
}

/// Short description of a raw record for status messages.
fn record_label(kind: FavoriteKind, record: &serde_json::Value) -> String {
    match record.get("title").and_then(|t| t.as_str()) {
        Some(title) => format!("{} \"{}\"", kind, title.trim()),
        None => kind.to_string(),
    }
}
