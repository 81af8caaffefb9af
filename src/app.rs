//! Application state and core logic

use crate::config::TuiConfig;
use crate::schema::SchemaSource;
use crate::state::{AppState, Focus, SelectedSchema};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinSet;

/// Messages delivered to the event loop by background tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    ProgressReset,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where form schemas come from
    source: Box<dyn SchemaSource>,
    /// How long the progress gauge stays full
    progress_reset_delay: Duration,
    /// Pending progress-reset timers; dropping the set aborts them
    timers: JoinSet<()>,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(source: Box<dyn SchemaSource>, config: &TuiConfig) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let state = AppState::new(source.form_types());

        let mut app = Self {
            state,
            source,
            progress_reset_delay: config.progress_reset_delay(),
            timers: JoinSet::new(),
            events_tx,
            events_rx,
            quit: false,
        };

        if let Some(form_type) = &config.initial_form_type {
            match app.state.form_types.iter().position(|t| t == form_type) {
                Some(index) => {
                    app.state.selected_form_type = Some(index);
                    app.select_form_type(Some(form_type.clone()));
                }
                None => tracing::warn!("Configured initial form type {form_type:?} is unknown"),
            }
        }

        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Bind the form to the schema of `form_type`.
    ///
    /// A name the source does not know renders no form, the same as the
    /// blank selector entry.
    pub fn select_form_type(&mut self, form_type: Option<String>) {
        let selected = form_type.and_then(|form_type| match self.source.lookup(&form_type) {
            Some(schema) => Some(SelectedSchema { form_type, schema }),
            None => {
                tracing::debug!("No schema for form type {form_type:?}");
                None
            }
        });

        match &selected {
            Some(s) => tracing::info!(
                "Selected form type {} ({} fields)",
                s.form_type,
                s.schema.len()
            ),
            None => tracing::debug!("Form cleared"),
        }

        self.state.form.set_schema(selected);
    }

    /// Validate the form and move an accepted submission into the ledger
    pub fn submit(&mut self) {
        let Some(form_type) = self.state.form.form_type().map(str::to_string) else {
            self.state.status_message = Some("Select a form type first".to_string());
            return;
        };

        match self.state.form.submit() {
            Some(submission) => {
                self.state.ledger.append(submission);
                tracing::info!(
                    "Accepted {form_type} submission, ledger now has {} rows",
                    self.state.ledger.len()
                );
                self.state.progress.fill();
                self.schedule_progress_reset();
                self.state.status_message = Some(format!("{form_type} submitted"));
            }
            None => {
                let missing = self.state.form.errors().len();
                self.state.status_message = Some(match missing {
                    1 => "1 required field is missing".to_string(),
                    n => format!("{n} required fields are missing"),
                });
            }
        }
    }

    fn schedule_progress_reset(&mut self) {
        let tx = self.events_tx.clone();
        let delay = self.progress_reset_delay;
        self.timers.spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver is gone once the app is torn down
            let _ = tx.send(AppEvent::ProgressReset);
        });
    }

    /// Apply messages from finished background tasks
    pub fn process_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
        }
        while self.timers.try_join_next().is_some() {}
    }

    fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ProgressReset => {
                self.state.progress.reset();
                tracing::debug!("Progress gauge reset");
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        self.state.status_message = None;

        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
                return;
            }
            KeyCode::Tab => {
                self.state.next_focus();
                return;
            }
            KeyCode::BackTab => {
                self.state.prev_focus();
                return;
            }
            _ => {}
        }

        match self.state.focus {
            Focus::Selector => self.handle_selector_key(key),
            Focus::Form => self.handle_form_key(key),
            Focus::Ledger => self.handle_ledger_key(key),
        }
    }

    fn handle_selector_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                let form_type = self.state.cycle_form_type(false);
                self.select_form_type(form_type);
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                let form_type = self.state.cycle_form_type(true);
                self.select_form_type(form_type);
            }
            KeyCode::Enter => self.state.next_focus(),
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        if self.state.form.is_submit_active() {
            match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.submit(),
                KeyCode::Up => self.state.prev_focus(),
                KeyCode::Down => self.state.next_focus(),
                KeyCode::Esc => self.state.focus = Focus::Selector,
                _ => {}
            }
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let on_dropdown = self
            .state
            .form
            .active_definition()
            .is_some_and(|field| field.is_dropdown());

        match key.code {
            KeyCode::Char('u') if ctrl => self.state.form.clear_field(),
            KeyCode::Left if on_dropdown => self.state.form.cycle_option(false),
            KeyCode::Right | KeyCode::Char(' ') if on_dropdown => {
                self.state.form.cycle_option(true)
            }
            KeyCode::Char(c) if !ctrl => self.state.form.push_char(c),
            KeyCode::Backspace => self.state.form.pop_char(),
            KeyCode::Enter | KeyCode::Down => self.state.next_focus(),
            KeyCode::Up => self.state.prev_focus(),
            KeyCode::Esc => self.state.focus = Focus::Selector,
            _ => {}
        }
    }

    fn handle_ledger_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') => self.copy_history(),
            KeyCode::Esc => self.state.focus = Focus::Selector,
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Copy the submission history to the clipboard as JSON
    fn copy_history(&mut self) {
        if self.state.ledger.is_empty() {
            self.state.status_message = Some("No submissions to copy".to_string());
            return;
        }

        let result = self
            .state
            .ledger
            .to_json()
            .map_err(anyhow::Error::from)
            .and_then(|json| copy_to_clipboard(&json));

        self.state.status_message = Some(match result {
            Ok(()) => format!("Copied {} submissions", self.state.ledger.len()),
            Err(err) => {
                tracing::warn!("Clipboard copy failed: {err:#}");
                format!("Copy failed: {err}")
            }
        });
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}
