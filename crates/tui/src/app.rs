//! Main application state and event loop.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::KeyEvent;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::prelude::*;

use taskpad_engine::SyncEngine;
use taskpad_store::{
    DEFAULT_BASE_URL, Filter, HttpStore, RemoteStore, StoreResult, Task, remaining_heading,
};

use crate::error::TuiResult;
use crate::event::{
    char_input, is_backspace, is_down, is_enter, is_esc, is_quit, is_up, poll_key,
};
use crate::ui;

/// Environment variable name for the task store base URL
const TPD_URL_ENV: &str = "TPD_URL";

/// The element currently holding keyboard focus.
///
/// Focus returns to the heading whenever the task list shrinks, mirroring
/// the accessibility affordance of the original list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The remaining-count heading above the list.
    #[default]
    Heading,
    /// A row in the task list.
    List,
}

/// The current text-input mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal browsing; keys are commands.
    #[default]
    Browse,
    /// Typing the name of a new task.
    Adding,
    /// Typing the new name for an existing task.
    Editing {
        /// Id of the task being renamed.
        id: String,
    },
}

/// Main application state.
pub struct App<S> {
    /// Synchronization engine owning the snapshot.
    engine: SyncEngine<S>,
    /// Index of the currently selected row in the visible list.
    selected_index: usize,
    /// The element currently holding focus.
    focus: Focus,
    /// The current text-input mode.
    input_mode: InputMode,
    /// Text buffer for add/edit input.
    input: String,
    /// Last store error or notice, shown on the status line.
    status: Option<String>,
    /// Whether the application is still running.
    running: bool,
    /// Snapshot length at the previous render, for shrink detection.
    prev_task_count: usize,
}

impl App<HttpStore> {
    /// Create a new App connected to the remote store.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Optional base URL. If `None`, the `TPD_URL` environment
    ///   variable is used when set and non-empty, else the default.
    ///
    /// # Errors
    ///
    /// Returns `TuiError::Store` if the URL is invalid or the initial
    /// snapshot fetch fails.
    pub async fn new(base_url: Option<&str>) -> TuiResult<Self> {
        let url = match base_url {
            Some(u) => u.to_string(),
            None => std::env::var(TPD_URL_ENV)
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        };

        let store = HttpStore::new(&url)?;
        Self::with_store(store).await
    }
}

impl<S: RemoteStore> App<S> {
    /// Create an App around an already-constructed store and perform the
    /// initial synchronization.
    pub async fn with_store(store: S) -> TuiResult<Self> {
        let mut engine = SyncEngine::new(store);
        engine.resynchronize().await?;

        let prev_task_count = engine.snapshot().len();
        let focus = if engine.visible_tasks().is_empty() {
            Focus::Heading
        } else {
            Focus::List
        };

        Ok(Self {
            engine,
            selected_index: 0,
            focus,
            input_mode: InputMode::default(),
            input: String::new(),
            status: None,
            running: true,
            prev_task_count,
        })
    }

    /// Get the visible tasks under the active filter, in snapshot order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.engine.visible_tasks()
    }

    /// Get the active filter selection.
    pub fn filter(&self) -> Filter {
        self.engine.filter()
    }

    /// Get the remaining-count heading for the current projection.
    pub fn heading_text(&self) -> String {
        remaining_heading(self.visible_len())
    }

    /// Get the currently selected row index.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Get the element currently holding focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Get the current input mode.
    pub fn input_mode(&self) -> &InputMode {
        &self.input_mode
    }

    /// Get the current input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Get the current status-line message, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Check if the application is still running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Request the application to quit and tear the engine down.
    pub fn quit(&mut self) {
        self.engine.close();
        self.running = false;
    }

    /// Move the selection down, entering the list from the heading.
    pub fn select_next(&mut self) {
        let len = self.visible_len();
        match self.focus {
            Focus::Heading => {
                if len > 0 {
                    self.focus = Focus::List;
                    self.selected_index = 0;
                }
            }
            Focus::List => {
                if len > 0 && self.selected_index + 1 < len {
                    self.selected_index += 1;
                }
            }
        }
    }

    /// Move the selection up, returning to the heading from the top row.
    pub fn select_previous(&mut self) {
        match self.focus {
            Focus::Heading => {}
            Focus::List => {
                if self.selected_index == 0 {
                    self.focus = Focus::Heading;
                } else {
                    self.selected_index -= 1;
                }
            }
        }
    }

    /// Cycle the filter selection and reset the list selection to the top.
    pub fn cycle_filter(&mut self) {
        let next = self.engine.filter().next();
        self.engine.set_filter(next);
        self.selected_index = 0;
    }

    /// Re-fetch the snapshot from the store.
    pub async fn refresh(&mut self) {
        let result = self.engine.resynchronize().await;
        self.record(result);
    }

    /// Toggle the completed flag of the selected task.
    pub async fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            let result = self.engine.toggle_task(&id).await;
            self.record(result);
        }
    }

    /// Delete the selected task.
    pub async fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            let result = self.engine.delete_task(&id).await;
            self.record(result);
        }
    }

    /// Enter add mode with an empty input buffer.
    pub fn begin_add(&mut self) {
        self.input.clear();
        self.input_mode = InputMode::Adding;
    }

    /// Enter edit mode for the selected task, prefilled with its name.
    pub fn begin_edit(&mut self) {
        let selected = self
            .visible_tasks()
            .get(self.selected_index)
            .filter(|_| self.focus == Focus::List)
            .map(|t| (t.id.clone(), t.name.clone()));

        if let Some((id, name)) = selected {
            self.input = name;
            self.input_mode = InputMode::Editing { id };
        }
    }

    /// Leave input mode without committing.
    pub fn cancel_input(&mut self) {
        self.input.clear();
        self.input_mode = InputMode::Browse;
    }

    /// Commit the input buffer as an add or rename.
    ///
    /// Adds reject empty or whitespace-only names here, before any remote
    /// call; renames are passed through verbatim, empty string included.
    pub async fn commit_input(&mut self) {
        match self.input_mode.clone() {
            InputMode::Browse => {}
            InputMode::Adding => {
                if self.input.trim().is_empty() {
                    self.status = Some("task name cannot be empty".to_string());
                    return;
                }
                let name = self.input.clone();
                let result = self.engine.add_task(&name).await;
                self.finish_input(result);
            }
            InputMode::Editing { id } => {
                let name = self.input.clone();
                let result = self.engine.edit_task(&id, &name).await;
                self.finish_input(result);
            }
        }
    }

    /// Handle a keyboard event.
    pub async fn handle_key(&mut self, key: &KeyEvent) {
        match self.input_mode {
            InputMode::Browse => self.handle_browse_key(key).await,
            _ => self.handle_input_key(key).await,
        }
        self.sync_selection();
    }

    /// Handle a key in browse mode.
    async fn handle_browse_key(&mut self, key: &KeyEvent) {
        if is_quit(key) {
            self.quit();
        } else if is_down(key) {
            self.select_next();
        } else if is_up(key) {
            self.select_previous();
        } else if is_enter(key) {
            self.toggle_selected().await;
        } else {
            match char_input(key) {
                Some(' ') => self.toggle_selected().await,
                Some('a') => self.begin_add(),
                Some('e') => self.begin_edit(),
                Some('d') => self.delete_selected().await,
                Some('f') => self.cycle_filter(),
                Some('r') => self.refresh().await,
                _ => {}
            }
        }
    }

    /// Handle a key while typing in add or edit mode.
    async fn handle_input_key(&mut self, key: &KeyEvent) {
        if is_esc(key) {
            self.cancel_input();
        } else if is_enter(key) {
            self.commit_input().await;
        } else if is_backspace(key) {
            self.input.pop();
        } else if let Some(c) = char_input(key) {
            self.input.push(c);
        }
    }

    /// Run the main application loop.
    ///
    /// This initializes the terminal, runs the event loop, and ensures
    /// the terminal is restored on exit (even on panic).
    pub async fn run(&mut self) -> TuiResult<()> {
        let mut terminal = init_terminal()?;

        // Use scopeguard to ensure terminal cleanup on panic
        let _guard = scopeguard::guard((), |()| {
            let _ = restore_terminal();
        });

        let result = self.event_loop(&mut terminal).await;

        // Explicitly drop guard before returning (runs cleanup)
        drop(_guard);

        result
    }

    /// The main event loop.
    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> TuiResult<()> {
        while self.running {
            terminal.draw(|frame| ui::draw(frame, self))?;

            if let Some(key) = poll_key(Duration::from_millis(100))? {
                self.handle_key(&key).await;
            }
        }
        Ok(())
    }

    /// Number of tasks visible under the active filter.
    fn visible_len(&self) -> usize {
        self.visible_tasks().len()
    }

    /// Id of the selected task, when a list row holds focus.
    fn selected_task_id(&self) -> Option<String> {
        if self.focus != Focus::List {
            return None;
        }
        self.visible_tasks()
            .get(self.selected_index)
            .map(|t| t.id.clone())
    }

    /// Leave input mode after a commit and record the outcome.
    ///
    /// On success the buffer is cleared and the app returns to browse mode;
    /// on failure the buffer and mode are kept so the input can be retried.
    fn finish_input(&mut self, result: StoreResult<()>) {
        if result.is_ok() {
            self.input.clear();
            self.input_mode = InputMode::Browse;
        }
        self.record(result);
    }

    /// Record a store result on the status line.
    fn record(&mut self, result: StoreResult<()>) {
        match result {
            Ok(()) => self.status = None,
            Err(e) => self.status = Some(e.full_message()),
        }
    }

    /// Reconcile selection and focus with the current snapshot.
    ///
    /// When the snapshot shrank since the previous render, focus moves back
    /// to the heading. The selection is clamped into the visible range.
    fn sync_selection(&mut self) {
        let count = self.engine.snapshot().len();
        if count < self.prev_task_count {
            self.focus = Focus::Heading;
            self.selected_index = 0;
        }
        self.prev_task_count = count;

        let visible = self.visible_len();
        if visible == 0 {
            self.focus = Focus::Heading;
            self.selected_index = 0;
        } else if self.selected_index >= visible {
            self.selected_index = visible - 1;
        }
    }
}

/// Initialize the terminal for TUI rendering.
fn init_terminal() -> TuiResult<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
fn restore_terminal() -> TuiResult<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
