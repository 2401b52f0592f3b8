use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tracing::{debug, warn};

use crate::config::UiConfig;
use crate::session::{Session, SessionError};
use crate::store::Submitted;

use super::action::Action;
use super::error::AppError;
use super::screens::{
    HelpState, RecordFormState, RecordListState, draw_help, draw_record_form, draw_record_list,
};
use super::widgets::{StatusBarContext, draw_status_bar};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Enter or edit a record.
    Form,
    /// Browse, view, edit and delete records.
    List,
    /// Show keybinding help.
    Help,
}

impl Screen {
    /// Human-readable label for titles.
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Form => "Record Form",
            Self::List => "Record List",
            Self::Help => "Help",
        }
    }
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    session: Session,
    form: RecordFormState,
    list: RecordListState,
    help: HelpState,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on the [`Screen::Form`] screen.
    pub fn new(ui: &UiConfig) -> Self {
        let mut app = Self {
            screen: Screen::Form,
            session: Session::with_default_country(ui.default_country),
            form: RecordFormState::new(),
            list: RecordListState::new(ui.confirm_delete),
            help: HelpState::new(),
            status: None,
            should_quit: false,
        };
        app.sync_form();
        app
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the current screen above the status bar.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match self.screen {
            Screen::Form => draw_record_form(&self.form, frame, main_area),
            Screen::List => draw_record_list(&self.list, self.session.store(), frame, main_area),
            Screen::Help => draw_help(&self.help, frame, main_area),
        }

        let ctx = StatusBarContext {
            record_count: self.session.store().len(),
            editing: self.session.editing(),
            message: self.status.clone(),
        };
        draw_status_bar(&ctx, frame, status_area);
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if key.code == KeyCode::F(1) {
            if self.screen != Screen::Help {
                self.help.set_origin(self.screen);
                self.help.reset();
                self.screen = Screen::Help;
            }
            return;
        }

        let action = match self.screen {
            Screen::Form => {
                self.sync_form();
                self.form.handle_key(key)
            }
            Screen::List => self.list.handle_key(key, self.session.store()),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    /// Applies an [`Action`] to the session and navigation state.
    fn apply(&mut self, action: Action) {
        if action != Action::None {
            debug!(?action, "applying action");
        }
        match action {
            Action::None => return,
            Action::Navigate(screen) => self.screen = screen,
            Action::SetField(field, input) => self.session.set_field(field, input),
            Action::Submit => self.submit(),
            Action::CancelEdit => {
                self.session.cancel_edit();
                self.status = Some("Edit cancelled".to_string());
            }
            Action::ViewRecord(id) => match self.session.view(id) {
                Ok(view) => self.list.show_view(view),
                Err(e) => self.report(&e),
            },
            Action::EditRecord(id) => match self.session.start_edit(id) {
                Ok(()) => {
                    self.status = Some(format!("Editing record {id}"));
                    self.screen = Screen::Form;
                }
                Err(e) => self.report(&e),
            },
            Action::DeleteRecord(id) => match self.session.delete(id) {
                Ok(_) => {
                    self.list.clamp(self.session.store().len());
                    self.status = Some(format!("Record {id} deleted"));
                }
                Err(e) => self.report(&e),
            },
            Action::Quit => self.should_quit = true,
        }
        self.sync_form();
    }

    fn submit(&mut self) {
        match self.session.submit() {
            Ok(Submitted::Added(id)) => self.status = Some(format!("Record {id} added")),
            Ok(Submitted::Updated(id)) => self.status = Some(format!("Record {id} updated")),
            Err(SessionError::Incomplete(errors)) => {
                let n = errors.len();
                let noun = if n == 1 { "field" } else { "fields" };
                self.status = Some(format!("Fix {n} {noun} before submitting"));
            }
            Err(e) => self.report(&e),
        }
    }

    fn report(&mut self, err: &SessionError) {
        warn!(error = %err, "action failed");
        self.status = Some(err.to_string());
    }

    fn sync_form(&mut self) {
        self.form.sync(
            self.session.draft(),
            self.session.errors(),
            self.session.editing(),
        );
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns a reference to the [`Session`].
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the outcome message of the last action, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn form(&self) -> &RecordFormState {
        &self.form
    }

    pub fn list(&self) -> &RecordListState {
        &self.list
    }
}
