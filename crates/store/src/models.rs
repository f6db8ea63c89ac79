//! Data model for taskpad
//!
//! Defines the Rust type that maps to the task JSON shape served by the
//! remote todo API.

use serde::{Deserialize, Serialize};

/// A single todo task as held by the remote store.
///
/// Identity is the `id`; lookup and equality in the rest of the workspace go
/// by `id`. Ids are opaque strings generated by the server on add.
///
/// Wire shape: `{"id": string, "name": string, "completed": boolean}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque stable identifier assigned by the remote store
    pub id: String,
    /// Display text for the task
    pub name: String,
    /// Whether the task has been completed
    pub completed: bool,
}

impl Task {
    /// Create a new incomplete task.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            completed: false,
        }
    }

    /// Set the completed flag, builder style.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}
