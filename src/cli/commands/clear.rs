//! Clear command implementation.
//!
//! The `myfc-favorites clear` command empties the current scope's favorites
//! the way signing out does: the emptied state is saved for that scope and
//! the session falls back to the local scope.

use crate::cli::args::ClearArgs;
use crate::error::Result;
use crate::favorites::FavoritesStore;
use crate::ui::UserInterface;

use super::dispatcher::{finish_mutation, Command, CommandResult};

/// The clear command implementation.
pub struct ClearCommand<'a> {
    store: &'a FavoritesStore,
    args: ClearArgs,
}

impl<'a> ClearCommand<'a> {
    /// Create a new clear command.
    pub fn new(store: &'a FavoritesStore, args: ClearArgs) -> Self {
        Self { store, args }
    }
}

impl Command for ClearCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let scope = self.store.scope();
        let count = self.store.snapshot().total();

        if count > 0 && !self.args.force {
            ui.error(&format!(
                "Refusing to clear {} favorites for {} without --force",
                count, scope
            ));
            return Ok(CommandResult::failure(1));
        }

        self.store.sign_out();
        let result = finish_mutation(self.store, ui);
        if result.success {
            ui.success(&format!("Cleared {} favorites for {}", count, scope));
        }
        Ok(result)
    }
}
