//! Edit command for renaming tasks
//!
//! Implements the `tpd edit` command. The new name is passed through
//! verbatim, including the empty string; the wire contract does not
//! validate it.

use clap::Args;
use taskpad_store::{RemoteStore, StoreError};

/// Rename a task
#[derive(Debug, Args)]
pub struct EditCommand {
    /// Id of the task to rename
    #[arg(required = true)]
    pub id: String,

    /// New display text, accepted verbatim
    pub name: String,
}

impl EditCommand {
    /// Execute the edit command.
    ///
    /// # Errors
    ///
    /// Returns a store error if the remote call fails.
    pub async fn execute(&self, store: &dyn RemoteStore) -> Result<String, StoreError> {
        store.rename(&self.id, &self.name).await?;
        Ok(format!("Renamed task '{}' to '{}'", self.id, self.name))
    }
}
