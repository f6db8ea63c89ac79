use thiserror::Error;

/// Error types for remote task store operations.
///
/// Every failure is recoverable: callers keep their local snapshot, nothing
/// is retried, and nothing is fatal to the process.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The configured base URL could not be parsed
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Network or transport failure while talking to the store
    #[error("Request to task store failed")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The store answered with a non-2xx status
    #[error("Task store returned HTTP {code}")]
    Status { code: u16 },

    /// The task list response body was not valid task JSON
    #[error("Failed to decode task list")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// Error for invalid input rejected before reaching the store
    #[error("{message}")]
    Validation { message: String },
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Transport { source: err }
    }
}

impl StoreError {
    /// Get the full error message including nested source detail.
    ///
    /// Useful for displaying complete error information to users.
    pub fn full_message(&self) -> String {
        match self {
            StoreError::Transport { source } => {
                format!("Request to task store failed: {}", source)
            }
            StoreError::Decode { source } => {
                format!("Failed to decode task list: {}", source)
            }
            other => other.to_string(),
        }
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
