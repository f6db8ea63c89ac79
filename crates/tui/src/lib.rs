//! TUI module for taskpad
//!
//! Provides a terminal user interface for viewing and editing the remote
//! todo list using ratatui and crossterm.

pub mod app;
pub mod error;
pub mod event;
pub mod ui;

pub use app::{App, Focus, InputMode};
pub use error::{TuiError, TuiResult};
