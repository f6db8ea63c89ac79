//! CLI command definitions
//!
//! One module per user intent; each command is a clap `Args` struct with an
//! `execute` method that talks to the remote store and returns the text to
//! print.

pub mod add;
pub mod complete;
pub mod delete;
pub mod edit;
pub mod list;

pub use add::AddCommand;
pub use complete::CompleteCommand;
pub use delete::DeleteCommand;
pub use edit::EditCommand;
pub use list::ListCommand;

use clap::Subcommand;
use taskpad_store::{RemoteStore, StoreError};

/// Available subcommands for the tpd CLI
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new task
    Add(AddCommand),
    /// List tasks, optionally filtered by status
    List(ListCommand),
    /// Flip a task's completed flag
    Complete(CompleteCommand),
    /// Rename a task
    Edit(EditCommand),
    /// Delete a task
    Delete(DeleteCommand),
}

impl Command {
    /// Execute the subcommand against the given store.
    pub async fn execute(&self, store: &dyn RemoteStore) -> Result<String, StoreError> {
        match self {
            Command::Add(cmd) => cmd.execute(store).await,
            Command::List(cmd) => cmd.execute(store).await,
            Command::Complete(cmd) => cmd.execute(store).await,
            Command::Edit(cmd) => cmd.execute(store).await,
            Command::Delete(cmd) => cmd.execute(store).await,
        }
    }
}
