//! Test infrastructure for integration tests
//!
//! Provides a scripted in-memory store implementing `RemoteStore` so
//! commands can be executed end-to-end without a running server. Each test
//! constructs its own store instance to ensure no shared state.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use taskpad_store::{RemoteStore, StoreError, StoreResult, Task};

/// In-memory stand-in for the remote task store.
///
/// Mimics the server's CRUD semantics: ids are assigned on add, toggles flip
/// the completed flag, renames accept any string. Can be switched into a
/// failing mode where every call answers HTTP 500.
pub struct MockStore {
    tasks: Mutex<Vec<Task>>,
    next_id: AtomicUsize,
    failing: bool,
}

impl MockStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_tasks(Vec::new())
    }

    /// Create a store pre-seeded with tasks.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.len() + 1;
        Self {
            tasks: Mutex::new(tasks),
            next_id: AtomicUsize::new(next_id),
            failing: false,
        }
    }

    /// Create a store where every call fails with HTTP 500.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    /// Snapshot of the server-side task state, for assertions.
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.lock().unwrap().clone()
    }

    fn check(&self) -> StoreResult<()> {
        if self.failing {
            return Err(StoreError::Status { code: 500 });
        }
        Ok(())
    }
}

#[async_trait]
impl RemoteStore for MockStore {
    async fn list_all(&self) -> StoreResult<Vec<Task>> {
        self.check()?;
        Ok(self.tasks())
    }

    async fn add(&self, name: &str) -> StoreResult<()> {
        self.check()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.tasks
            .lock()
            .unwrap()
            .push(Task::new(id.to_string(), name));
        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        self.check()?;
        self.tasks.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }

    async fn toggle(&self, id: &str) -> StoreResult<()> {
        self.check()?;
        let mut tasks = self.tasks.lock().unwrap();
        if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
        }
        Ok(())
    }

    async fn rename(&self, id: &str, name: &str) -> StoreResult<()> {
        self.check()?;
        let mut tasks = self.tasks.lock().unwrap();
        if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
            task.name = name.to_string();
        }
        Ok(())
    }
}

/// Build a store seeded with one incomplete and one completed task.
pub fn seeded_store() -> MockStore {
    MockStore::with_tasks(vec![
        Task::new("1", "Buy milk"),
        Task::new("2", "Walk dog").with_completed(true),
    ])
}
