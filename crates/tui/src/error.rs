//! Error types for the TUI module.

use std::io;
use thiserror::Error;

/// Result type for TUI operations.
pub type TuiResult<T> = Result<T, TuiError>;

/// Error type for TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// Failed to initialize or restore the terminal.
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// Remote task store error.
    #[error("Task store error: {0}")]
    Store(#[from] taskpad_store::StoreError),
}
