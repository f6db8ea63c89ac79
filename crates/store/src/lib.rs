//! Remote task store access for taskpad
//!
//! Provides the task data model, the status filter projection, and a
//! reqwest-backed client for the remote todo HTTP API.

pub mod client;
pub mod error;
pub mod filter;
pub mod models;

pub use client::{DEFAULT_BASE_URL, HttpStore, RemoteStore};
pub use error::{StoreError, StoreResult};
pub use filter::{Filter, remaining_heading};
pub use models::Task;
