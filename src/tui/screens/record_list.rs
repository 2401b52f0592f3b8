//! Record list screen: table of all records with view, edit and delete.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table};

use crate::model::{RecordId, RecordView};
use crate::store::RecordStore;
use crate::tui::action::Action;
use crate::tui::app::Screen;

/// State for the record list screen.
#[derive(Debug, Clone)]
pub struct RecordListState {
    /// Index of the currently highlighted row (0-based).
    selected: usize,
    /// Record shown in the view popup, if open.
    viewing: Option<RecordView>,
    /// Record awaiting delete confirmation.
    pending_delete: Option<RecordId>,
    confirm_delete: bool,
}

impl Default for RecordListState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl RecordListState {
    /// Creates a new state with the cursor at the first row.
    pub fn new(confirm_delete: bool) -> Self {
        Self {
            selected: 0,
            viewing: None,
            pending_delete: None,
            confirm_delete,
        }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    ///
    /// An open popup or a pending confirmation captures all keys.
    pub fn handle_key(&mut self, key: KeyEvent, store: &RecordStore) -> Action {
        if self.viewing.is_some() {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('v')
            ) {
                self.viewing = None;
            }
            return Action::None;
        }

        if let Some(id) = self.pending_delete {
            return match key.code {
                KeyCode::Char('y') => {
                    self.pending_delete = None;
                    Action::DeleteRecord(id)
                }
                KeyCode::Char('n') | KeyCode::Esc => {
                    self.pending_delete = None;
                    Action::None
                }
                _ => Action::None,
            };
        }

        let count = store.len();
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                if count > 0 {
                    self.selected = (self.selected + 1).min(count - 1);
                }
                Action::None
            }
            KeyCode::Home => {
                self.selected = 0;
                Action::None
            }
            KeyCode::End => {
                self.selected = count.saturating_sub(1);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char('v') => {
                store.id_at(self.selected).map_or(Action::None, Action::ViewRecord)
            }
            KeyCode::Char('e') => {
                store.id_at(self.selected).map_or(Action::None, Action::EditRecord)
            }
            KeyCode::Char('d') => match store.id_at(self.selected) {
                Some(id) if self.confirm_delete => {
                    self.pending_delete = Some(id);
                    Action::None
                }
                Some(id) => Action::DeleteRecord(id),
                None => Action::None,
            },
            KeyCode::Esc | KeyCode::Char('q') => Action::Navigate(Screen::Form),
            _ => Action::None,
        }
    }

    /// Returns the currently selected row index.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Sets the selected row index.
    pub fn set_selected(&mut self, idx: usize) {
        self.selected = idx;
    }

    /// Keeps the cursor on a valid row after the list shrinks.
    pub fn clamp(&mut self, count: usize) {
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    /// Opens the view popup.
    pub fn show_view(&mut self, view: RecordView) {
        self.viewing = Some(view);
    }

    /// Returns the record shown in the popup, if open.
    pub fn viewing(&self) -> Option<&RecordView> {
        self.viewing.as_ref()
    }

    /// Returns the record awaiting delete confirmation, if any.
    pub fn pending_delete(&self) -> Option<RecordId> {
        self.pending_delete
    }
}

/// Renders the record list screen.
#[mutants::skip]
pub fn draw_record_list(state: &RecordListState, store: &RecordStore, frame: &mut Frame, area: Rect) {
    let [title_area, table_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let title = Paragraph::new(Line::from(format!("Records ({})", store.len())))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(title, title_area);

    if store.is_empty() {
        let empty = Paragraph::new("No records yet").alignment(Alignment::Center);
        frame.render_widget(empty, table_area);
    } else {
        let header = Row::new(vec![
            "ID", "Name", "Email", "Phone", "Date", "Gender", "Country", "Created",
        ])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

        let rows: Vec<Row> = store
            .records()
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let style = if i == state.selected() {
                    Style::default().fg(Color::Black).bg(Color::Yellow)
                } else if store.editing() == Some(record.id) {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                };
                let f = &record.fields;
                Row::new(vec![
                    record.id.to_string(),
                    f.name.clone(),
                    f.email.clone(),
                    f.phone.clone(),
                    f.date.clone(),
                    f.gender.to_string(),
                    f.country.to_string(),
                    record.created_at.format("%H:%M:%S").to_string(),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Length(5),
            Constraint::Length(14),
            Constraint::Length(20),
            Constraint::Length(12),
            Constraint::Length(11),
            Constraint::Length(7),
            Constraint::Length(8),
            Constraint::Min(0),
        ];

        let table = Table::new(rows, widths).header(header);
        frame.render_widget(table, table_area);
    }

    let footer_text = match state.pending_delete() {
        Some(id) => format!("Delete record {id}? y: yes  n: no"),
        None => "\u{2191}\u{2193}: navigate  Enter/v: view  e: edit  d: delete  q: back".to_string(),
    };
    let footer_style = if state.pending_delete().is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(Paragraph::new(footer_text).style(footer_style), footer_area);

    if let Some(view) = state.viewing() {
        draw_view_popup(view, frame, area);
    }
}

/// Renders a centered popup with every field of `view`.
#[mutants::skip]
fn draw_view_popup(view: &RecordView, frame: &mut Frame, area: Rect) {
    let rows = view.rows();
    let height = rows.len() as u16 + 4;
    let [vertical] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(50)])
        .flex(Flex::Center)
        .areas(vertical);

    let label_style = Style::default().fg(Color::Yellow);
    let mut lines: Vec<Line> = rows
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label:<9}"), label_style),
                Span::raw(value),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter/Esc: close",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title(format!(" Record {} ", view.id))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
