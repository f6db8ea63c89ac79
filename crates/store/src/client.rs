//! Remote task store client
//!
//! Defines the `RemoteStore` trait covering the five operations of the todo
//! HTTP API, and `HttpStore`, its reqwest-backed implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, trace};

use crate::error::{StoreError, StoreResult};
use crate::models::Task;

/// Default base URL for the remote task store
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Timeout applied to every request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Remote task store operations.
///
/// Mutating calls are acknowledgment-only: any 2xx response counts as
/// success and the body is ignored. `list_all` is the sole read and returns
/// the complete task list; callers replace their snapshot wholesale with it.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetch every task currently held by the store.
    async fn list_all(&self) -> StoreResult<Vec<Task>>;

    /// Create a new incomplete task with the given name.
    async fn add(&self, name: &str) -> StoreResult<()>;

    /// Delete the task with the given id.
    async fn delete(&self, id: &str) -> StoreResult<()>;

    /// Flip the completed flag of the task with the given id.
    async fn toggle(&self, id: &str) -> StoreResult<()>;

    /// Rename the task with the given id.
    async fn rename(&self, id: &str, name: &str) -> StoreResult<()>;
}

/// HTTP client for the remote task store.
///
/// Wraps a `reqwest::Client` with a validated base URL. All query strings
/// are built through the URL query-pair API so names containing spaces or
/// reserved characters are encoded correctly.
pub struct HttpStore {
    /// Parsed base URL of the store
    base: Url,
    /// The underlying HTTP client
    http: Client,
}

impl HttpStore {
    /// Create a store client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidBaseUrl` if the URL cannot be parsed or
    /// cannot serve as a base. Returns `StoreError::Transport` if the HTTP
    /// client cannot be constructed.
    pub fn new(base_url: &str) -> StoreResult<Self> {
        let base = Url::parse(base_url).map_err(|e| StoreError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if base.cannot_be_a_base() {
            return Err(StoreError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "cannot be used as a base URL".to_string(),
            });
        }

        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self { base, http })
    }

    /// Get the base URL this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Build an endpoint URL from a path and query pairs.
    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Url {
        let mut url = self.base.clone();
        url.set_path(path);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url
    }

    /// Issue a POST and treat any 2xx as success, ignoring the body.
    async fn post_ack(&self, url: Url) -> StoreResult<()> {
        debug!(%url, "post_ack: sending mutation");
        let response = self.http.post(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                code: status.as_u16(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RemoteStore for HttpStore {
    async fn list_all(&self) -> StoreResult<Vec<Task>> {
        let url = self.endpoint("/todo/all", &[]);
        debug!(%url, "list_all: fetching snapshot");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                code: status.as_u16(),
            });
        }

        // Decode from text rather than response.json() so malformed bodies
        // surface as a decode error distinct from transport failures.
        let body = response.text().await?;
        let tasks: Vec<Task> =
            serde_json::from_str(&body).map_err(|e| StoreError::Decode { source: e })?;

        trace!(count = tasks.len(), "list_all: snapshot received");
        Ok(tasks)
    }

    async fn add(&self, name: &str) -> StoreResult<()> {
        // The wire contract fixes isCompleted=false; new tasks start incomplete.
        let url = self.endpoint("/todo/add", &[("name", name), ("isCompleted", "false")]);
        self.post_ack(url).await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let url = self.endpoint("/todo/delete", &[("id", id)]);
        self.post_ack(url).await
    }

    async fn toggle(&self, id: &str) -> StoreResult<()> {
        let url = self.endpoint("/todo/complete", &[("id", id)]);
        self.post_ack(url).await
    }

    async fn rename(&self, id: &str, name: &str) -> StoreResult<()> {
        let url = self.endpoint("/todo/update", &[("id", id), ("name", name)]);
        self.post_ack(url).await
    }
}

// Ensure HttpStore is Send + Sync for async compatibility
static_assertions::assert_impl_all!(HttpStore: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> HttpStore {
        HttpStore::new(DEFAULT_BASE_URL).unwrap()
    }

    #[test]
    fn test_new_accepts_default_base_url() {
        let store = store();
        assert_eq!(store.base_url().as_str(), "http://localhost:8080/");
    }

    #[test]
    fn test_new_rejects_unparsable_url() {
        let result = HttpStore::new("not a url");
        assert!(matches!(
            result,
            Err(StoreError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_new_rejects_non_base_url() {
        let result = HttpStore::new("mailto:someone@example.com");
        assert!(matches!(
            result,
            Err(StoreError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_list_endpoint_url() {
        let url = store().endpoint("/todo/all", &[]);
        assert_eq!(url.as_str(), "http://localhost:8080/todo/all");
    }

    #[test]
    fn test_add_endpoint_url_encodes_name() {
        let url = store().endpoint("/todo/add", &[("name", "Buy milk"), ("isCompleted", "false")]);
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/todo/add?name=Buy+milk&isCompleted=false"
        );
    }

    #[test]
    fn test_add_endpoint_url_encodes_reserved_characters() {
        let url = store().endpoint("/todo/add", &[("name", "a&b=c"), ("isCompleted", "false")]);
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/todo/add?name=a%26b%3Dc&isCompleted=false"
        );
    }

    #[test]
    fn test_delete_endpoint_url() {
        let url = store().endpoint("/todo/delete", &[("id", "abc123")]);
        assert_eq!(url.as_str(), "http://localhost:8080/todo/delete?id=abc123");
    }

    #[test]
    fn test_toggle_endpoint_url() {
        let url = store().endpoint("/todo/complete", &[("id", "7")]);
        assert_eq!(url.as_str(), "http://localhost:8080/todo/complete?id=7");
    }

    #[test]
    fn test_rename_endpoint_url() {
        let url = store().endpoint("/todo/update", &[("id", "7"), ("name", "New name")]);
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/todo/update?id=7&name=New+name"
        );
    }

    #[test]
    fn test_endpoint_respects_custom_port_and_host() {
        let store = HttpStore::new("http://tasks.internal:9999").unwrap();
        let url = store.endpoint("/todo/all", &[]);
        assert_eq!(url.as_str(), "http://tasks.internal:9999/todo/all");
    }

    #[tokio::test]
    async fn test_list_all_surfaces_transport_failure() {
        // Nothing is listening on this port; the request must fail with a
        // transport error rather than a panic or a silent success.
        let store = HttpStore::new("http://127.0.0.1:1").unwrap();
        let result = store.list_all().await;
        assert!(matches!(result, Err(StoreError::Transport { .. })));
    }

    #[tokio::test]
    async fn test_toggle_surfaces_transport_failure() {
        let store = HttpStore::new("http://127.0.0.1:1").unwrap();
        let result = store.toggle("1").await;
        assert!(matches!(result, Err(StoreError::Transport { .. })));
    }
}
