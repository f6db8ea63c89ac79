//! Snapshot synchronization engine for taskpad
//!
//! Owns the locally cached task snapshot, the active filter selection, and a
//! revision counter, and keeps them in sync with the remote store: every
//! acknowledged mutation bumps the revision and re-fetches the full task
//! list. The snapshot is only ever replaced wholesale, never merged, so the
//! only local/remote divergence window is in-flight request latency.

use tracing::{debug, trace};

use taskpad_store::{Filter, RemoteStore, StoreResult, Task};

/// State-synchronization engine mirroring the remote store into local state.
///
/// The engine exclusively owns its state; views read through the accessors
/// and dispatch intents through the mutating operations. Overlapping
/// mutations are not serialized: each acknowledged mutation performs its own
/// re-fetch and the last response wins.
pub struct SyncEngine<S> {
    /// Remote store the engine synchronizes against
    store: S,
    /// Full task list as last received from the store
    snapshot: Vec<Task>,
    /// Active filter selection
    filter: Filter,
    /// Count of acknowledged mutations, incremented once per success
    revision: u64,
    /// Teardown guard; once set, every operation is a no-op
    closed: bool,
}

impl<S: RemoteStore> SyncEngine<S> {
    /// Create an engine with an empty snapshot and the default filter.
    ///
    /// Call [`resynchronize`](Self::resynchronize) to perform the initial
    /// fetch.
    pub fn new(store: S) -> Self {
        Self {
            store,
            snapshot: Vec::new(),
            filter: Filter::default(),
            revision: 0,
            closed: false,
        }
    }

    /// Get the current snapshot, in store order.
    pub fn snapshot(&self) -> &[Task] {
        &self.snapshot
    }

    /// Get the active filter selection.
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Get the number of acknowledged mutations so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Check whether the engine has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Get the visible tasks under the active filter, in snapshot order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.filter.apply(&self.snapshot)
    }

    /// Replace the active filter selection.
    ///
    /// Local-only: no remote call is issued and the revision is unchanged.
    pub fn set_filter(&mut self, filter: Filter) {
        if self.closed {
            return;
        }
        debug!(%filter, "set_filter: selection replaced");
        self.filter = filter;
    }

    /// Re-fetch the full task list and replace the snapshot wholesale.
    ///
    /// On failure the previous snapshot is kept untouched.
    pub async fn resynchronize(&mut self) -> StoreResult<()> {
        if self.closed {
            trace!("resynchronize: engine closed, skipping");
            return Ok(());
        }
        let tasks = self.store.list_all().await?;
        debug!(count = tasks.len(), "resynchronize: snapshot replaced");
        self.snapshot = tasks;
        Ok(())
    }

    /// Create a task with the given name.
    ///
    /// The engine does not validate the name; rejecting empty or
    /// whitespace-only input is the caller's responsibility.
    pub async fn add_task(&mut self, name: &str) -> StoreResult<()> {
        if self.closed {
            return Ok(());
        }
        self.store.add(name).await?;
        self.acknowledge().await
    }

    /// Flip the completed flag of the task with the given id.
    ///
    /// The call is issued even when the id is absent from the local
    /// snapshot; the server is authoritative.
    pub async fn toggle_task(&mut self, id: &str) -> StoreResult<()> {
        if self.closed {
            return Ok(());
        }
        self.store.toggle(id).await?;
        self.acknowledge().await
    }

    /// Rename the task with the given id.
    ///
    /// `new_name` is passed through verbatim, including the empty string.
    pub async fn edit_task(&mut self, id: &str, new_name: &str) -> StoreResult<()> {
        if self.closed {
            return Ok(());
        }
        self.store.rename(id, new_name).await?;
        self.acknowledge().await
    }

    /// Delete the task with the given id.
    pub async fn delete_task(&mut self, id: &str) -> StoreResult<()> {
        if self.closed {
            return Ok(());
        }
        self.store.delete(id).await?;
        self.acknowledge().await
    }

    /// Close the engine.
    ///
    /// Every subsequent operation, including a remote response handled after
    /// this point, leaves all state untouched and issues no remote call.
    pub fn close(&mut self) {
        debug!("close: engine torn down");
        self.closed = true;
    }

    /// Record an acknowledged mutation and resynchronize.
    ///
    /// The revision increment stands even if the follow-up fetch fails; the
    /// mutation itself was acknowledged and the stale snapshot is kept.
    async fn acknowledge(&mut self) -> StoreResult<()> {
        self.revision += 1;
        debug!(revision = self.revision, "acknowledge: mutation confirmed");
        self.resynchronize().await
    }
}
