//! List command for displaying tasks
//!
//! Implements the `tpd list` command: fetches the full snapshot, applies the
//! status filter projection, and formats the result as a table under the
//! remaining-count heading.

use clap::Args;
use taskpad_store::{Filter, RemoteStore, StoreError};

use crate::output;

/// List tasks with an optional status filter
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Filter by status (all, active, completed)
    #[arg(short, long, value_parser = parse_filter, default_value = "all")]
    pub filter: Filter,
}

/// Parse a filter string into a Filter selection
fn parse_filter(s: &str) -> Result<Filter, String> {
    Filter::parse(s).ok_or_else(|| {
        format!(
            "invalid filter '{}'. Valid values: all, active, completed",
            s
        )
    })
}

impl ListCommand {
    /// Execute the list command.
    ///
    /// # Errors
    ///
    /// Returns a store error if the snapshot fetch fails or the response
    /// body cannot be decoded.
    pub async fn execute(&self, store: &dyn RemoteStore) -> Result<String, StoreError> {
        let snapshot = store.list_all().await?;
        let visible = self.filter.apply(&snapshot);
        Ok(output::format_task_list(&visible))
    }
}
