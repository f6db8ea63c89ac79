//! UI rendering for the TUI.
//!
//! Provides layout and widget rendering using ratatui.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
};

use taskpad_store::{Filter, RemoteStore};

use crate::app::{App, Focus, InputMode};

/// Legend text for keyboard shortcuts.
const LEGEND: &str =
    " [j/k] Navigate  [a] Add  [e] Edit  [Enter] Toggle  [d] Delete  [f] Filter  [r] Refresh  [q] Quit ";

/// Draw the entire UI.
pub fn draw<S: RemoteStore>(frame: &mut Frame, app: &App<S>) {
    let chunks = create_main_layout(frame.area());

    draw_filter_bar(frame, chunks[0], app.filter());
    draw_heading(frame, chunks[1], app);
    draw_task_list(frame, chunks[2], app);
    draw_input_line(frame, chunks[3], app);
    draw_legend(frame, chunks[4]);
}

/// Create the main five-part vertical layout.
fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter tab bar
            Constraint::Length(1), // Remaining-count heading
            Constraint::Min(0),    // Task list
            Constraint::Length(1), // Input / status line
            Constraint::Length(1), // Legend bar
        ])
        .split(area)
        .to_vec()
}

/// Draw the filter selection bar.
fn draw_filter_bar(frame: &mut Frame, area: Rect, filter: Filter) {
    let titles: Vec<Line> = Filter::ALL.iter().map(|f| Line::from(f.as_str())).collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" taskpad ")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .select(filter.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Draw the remaining-count heading.
fn draw_heading<S: RemoteStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let mut style = Style::default().add_modifier(Modifier::BOLD);
    if app.focus() == Focus::Heading {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let heading = Paragraph::new(format!(" {}", app.heading_text())).style(style);
    frame.render_widget(heading, area);
}

/// Draw the visible task list.
fn draw_task_list<S: RemoteStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let items: Vec<ListItem> = app
        .visible_tasks()
        .iter()
        .map(|task| {
            let marker = if task.completed { "[x]" } else { "[ ]" };
            let style = if task.completed {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(format!(" {} {}", marker, task.name)).style(style)
        })
        .collect();

    if items.is_empty() {
        let placeholder = Paragraph::new(" No tasks to show")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(placeholder, area);
        return;
    }

    let selected = (app.focus() == Focus::List).then_some(app.selected_index());
    let mut state = ListState::default();
    state.select(selected);

    let list = List::new(items).highlight_style(
        Style::default()
            .add_modifier(Modifier::REVERSED)
            .add_modifier(Modifier::BOLD),
    );

    frame.render_stateful_widget(list, area, &mut state);
}

/// Draw the input or status line.
fn draw_input_line<S: RemoteStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let (text, style) = match app.input_mode() {
        InputMode::Adding => (
            format!(" New task: {}_", app.input()),
            Style::default().fg(Color::Yellow),
        ),
        InputMode::Editing { .. } => (
            format!(" New name: {}_", app.input()),
            Style::default().fg(Color::Yellow),
        ),
        InputMode::Browse => match app.status() {
            Some(status) => (
                format!(" {}", status),
                Style::default().fg(Color::Red),
            ),
            None => (String::new(), Style::default()),
        },
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}

/// Draw the keyboard legend at the bottom.
fn draw_legend(frame: &mut Frame, area: Rect) {
    let legend = Paragraph::new(LEGEND).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Gray),
    );
    frame.render_widget(legend, area);
}
