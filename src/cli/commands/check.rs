//! Check command implementation.
//!
//! The `myfc-favorites check` command reports whether an item is favorited.
//! It exits 0 when the item is favorited and 1 when it is not, so it can be
//! used directly in shell conditionals.

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::favorites::FavoritesStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand<'a> {
    store: &'a FavoritesStore,
    args: CheckArgs,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(store: &'a FavoritesStore, args: CheckArgs) -> Self {
        Self { store, args }
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let id = self.args.id.trim();
        let favorited = self.store.is_favorited(self.args.kind, id);

        if self.args.json {
            let payload = serde_json::json!({
                "kind": self.args.kind,
                "id": id,
                "favorited": favorited,
            });
            ui.data(&payload.to_string());
        } else if favorited {
            ui.message(&format!("{} {} is favorited", self.args.kind, id));
        } else {
            ui.message(&format!("{} {} is not favorited", self.args.kind, id));
        }

        Ok(if favorited {
            CommandResult::success()
        } else {
            CommandResult::failure(1)
        })
    }
}
