//! Record form screen: edits the session draft one keystroke at a time.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Country, Draft, ErrorMap, Field, FieldInput, Gender, RecordId};
use crate::tui::action::Action;
use crate::tui::app::Screen;
use crate::tui::widgets::form::{FieldKind, Form, FormField, draw_form};

/// Returns how `field` takes input.
fn field_kind(field: Field) -> FieldKind {
    match field {
        Field::Name | Field::Email | Field::Date | Field::Phone => FieldKind::Text,
        Field::Gender | Field::Country => FieldKind::Choice,
        Field::Terms => FieldKind::Toggle,
    }
}

/// Returns the selectable values of a choice field, after the empty slot.
fn choice_options(field: Field) -> Vec<&'static str> {
    match field {
        Field::Gender => Gender::all().iter().map(|g| g.as_str()).collect(),
        Field::Country => Country::all().iter().map(|c| c.as_str()).collect(),
        _ => Vec::new(),
    }
}

/// Steps through `options` from `current`, passing through an empty slot
/// before the first option.
fn cycle_choice(options: &[&'static str], current: &str, forward: bool) -> &'static str {
    let slots = options.len() + 1;
    let pos = options
        .iter()
        .position(|&o| o == current)
        .map_or(0, |i| i + 1);
    let next = if forward {
        (pos + 1) % slots
    } else {
        (pos + slots - 1) % slots
    };
    match next {
        0 => "",
        i => options[i - 1],
    }
}

/// State for the record form screen.
///
/// The form mirrors the session draft; call [`sync`](Self::sync) before
/// handling a key or drawing.
#[derive(Debug, Clone)]
pub struct RecordFormState {
    form: Form,
    editing: Option<RecordId>,
}

impl Default for RecordFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordFormState {
    /// Creates an empty form with focus on the first field.
    pub fn new() -> Self {
        let fields = Field::all()
            .iter()
            .map(|&f| FormField::new(f.label(), true, field_kind(f)))
            .collect();
        Self {
            form: Form::new(fields),
            editing: None,
        }
    }

    /// Copies draft values, validation messages and edit mode into the form.
    pub fn sync(&mut self, draft: &Draft, errors: &ErrorMap, editing: Option<RecordId>) {
        self.form.clear_errors();
        for (i, &field) in Field::all().iter().enumerate() {
            self.form.set_value(i, draft.value(field));
            if let Some(msg) = errors.get(field) {
                self.form.set_error(i, msg.to_string());
            }
        }
        if editing != self.editing {
            self.form.set_focus(0);
        }
        self.editing = editing;
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers == KeyModifiers::ALT {
            return match key.code {
                KeyCode::Char('l') => Action::Navigate(Screen::List),
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Enter => Action::Submit,
            KeyCode::Esc => match self.editing {
                Some(_) => Action::CancelEdit,
                None => Action::Quit,
            },
            _ => match self.form.focused_kind() {
                Some(FieldKind::Text) => self.handle_text(key.code),
                Some(FieldKind::Choice) => self.handle_choice(key.code),
                Some(FieldKind::Toggle) => self.handle_toggle(key.code),
                None => Action::None,
            },
        }
    }

    /// Returns the field that currently has focus.
    pub fn focused_field(&self) -> Field {
        Field::all()[self.form.focus()]
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the record being edited, as of the last sync.
    pub fn editing(&self) -> Option<RecordId> {
        self.editing
    }

    fn handle_text(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Char(ch) => self.form.insert_char(ch),
            KeyCode::Backspace => self.form.delete_char(),
            _ => return Action::None,
        }
        let value = self.form.value(self.form.focus()).to_string();
        Action::SetField(self.focused_field(), FieldInput::Text(value))
    }

    fn handle_choice(&mut self, code: KeyCode) -> Action {
        let forward = match code {
            KeyCode::Right | KeyCode::Char(' ') => true,
            KeyCode::Left => false,
            _ => return Action::None,
        };
        let field = self.focused_field();
        let current = self.form.value(self.form.focus());
        let next = cycle_choice(&choice_options(field), current, forward);
        self.form.set_value(self.form.focus(), next);
        Action::SetField(field, FieldInput::Text(next.to_string()))
    }

    fn handle_toggle(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Char(' ') => {
                let checked = self.form.value(self.form.focus()).is_empty();
                Action::SetField(self.focused_field(), FieldInput::Checked(checked))
            }
            _ => Action::None,
        }
    }
}

/// Renders the record form screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_record_form(state: &RecordFormState, frame: &mut Frame, area: Rect) {
    let title = match state.editing() {
        Some(id) => format!(" Edit Record {id} "),
        None => " New Record ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    draw_form(state.form(), frame, form_area);

    let (submit, escape) = match state.editing() {
        Some(_) => ("Update", "cancel edit"),
        None => ("Submit", "quit"),
    };
    let footer = Paragraph::new(format!(
        "Tab: next  \u{2190}/\u{2192}: choose  Space: toggle  Enter: {submit}  Alt+l: list  Esc: {escape}"
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
