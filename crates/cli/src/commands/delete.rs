//! Delete command for removing tasks
//!
//! Implements the `tpd delete` command.

use clap::Args;
use taskpad_store::{RemoteStore, StoreError};

/// Delete a task
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Id of the task to delete
    #[arg(required = true)]
    pub id: String,
}

impl DeleteCommand {
    /// Execute the delete command.
    ///
    /// # Errors
    ///
    /// Returns a store error if the remote call fails.
    pub async fn execute(&self, store: &dyn RemoteStore) -> Result<String, StoreError> {
        store.delete(&self.id).await?;
        Ok(format!("Deleted task '{}'", self.id))
    }
}
