//! Complete command for toggling a task's completed flag
//!
//! Implements the `tpd complete` command. The id is sent as-is; the server
//! is authoritative about whether it exists.

use clap::Args;
use taskpad_store::{RemoteStore, StoreError};

/// Flip a task's completed flag
#[derive(Debug, Args)]
pub struct CompleteCommand {
    /// Id of the task to toggle
    #[arg(required = true)]
    pub id: String,
}

impl CompleteCommand {
    /// Execute the complete command.
    ///
    /// # Errors
    ///
    /// Returns a store error if the remote call fails.
    pub async fn execute(&self, store: &dyn RemoteStore) -> Result<String, StoreError> {
        store.toggle(&self.id).await?;
        Ok(format!("Toggled task '{}'", self.id))
    }
}
