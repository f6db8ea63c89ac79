//! Add command for creating new tasks
//!
//! Implements the `tpd add` command. The store itself accepts any name, so
//! the empty-name rejection lives here, on the caller side.

use clap::Args;
use taskpad_store::{RemoteStore, StoreError};

/// Create a new task
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Display text for the new task
    #[arg(required = true)]
    pub name: String,
}

impl AddCommand {
    /// Execute the add command.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if the name is empty or
    /// whitespace-only, or a store error if the remote call fails.
    pub async fn execute(&self, store: &dyn RemoteStore) -> Result<String, StoreError> {
        if self.name.trim().is_empty() {
            return Err(StoreError::Validation {
                message: "task name cannot be empty".to_string(),
            });
        }

        store.add(&self.name).await?;

        Ok(format!("Created task '{}'", self.name))
    }
}
