//! Application state definitions

use super::forms::{Form, FormGenerator};
use super::ledger::SubmissionLedger;
use super::progress::Progress;
use std::collections::VecDeque;

/// Which panel receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Selector,
    Form,
    Ledger,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Selector
    pub form_types: Vec<String>,
    /// Index into `form_types`; `None` is the blank "Select Form Type" entry
    pub selected_form_type: Option<usize>,

    // Panels
    pub focus: Focus,
    pub form: FormGenerator,
    pub ledger: SubmissionLedger,
    pub progress: Progress,

    // Feedback
    pub status_message: Option<String>,
    error_queue: VecDeque<String>,
}

impl AppState {
    pub fn new(form_types: Vec<String>) -> Self {
        Self {
            form_types,
            ..Default::default()
        }
    }

    /// Name of the selected form type, if any
    pub fn selected_form_type_name(&self) -> Option<&str> {
        self.selected_form_type
            .and_then(|i| self.form_types.get(i))
            .map(String::as_str)
    }

    /// Step the selector through `[blank, form types...]` and return the new name
    pub fn cycle_form_type(&mut self, forward: bool) -> Option<String> {
        let count = self.form_types.len();
        if count == 0 {
            return None;
        }
        self.selected_form_type = match (self.selected_form_type, forward) {
            (None, true) => Some(0),
            (Some(i), true) if i + 1 < count => Some(i + 1),
            (Some(_), true) => None,
            (None, false) => Some(count - 1),
            (Some(0), false) => None,
            (Some(i), false) => Some(i - 1),
        };
        self.selected_form_type_name().map(str::to_string)
    }

    /// Move focus forward: selector, each field, submit button, ledger
    pub fn next_focus(&mut self) {
        let has_form = self.form.field_count() > 0;
        self.focus = match self.focus {
            Focus::Selector if has_form => {
                self.form.set_active_field(0);
                Focus::Form
            }
            Focus::Selector => Focus::Ledger,
            Focus::Form if self.form.is_submit_active() => Focus::Ledger,
            Focus::Form => {
                self.form.next_field();
                Focus::Form
            }
            Focus::Ledger => Focus::Selector,
        };
    }

    /// Move focus backward through the same cycle
    pub fn prev_focus(&mut self) {
        let field_count = self.form.field_count();
        self.focus = match self.focus {
            Focus::Selector => Focus::Ledger,
            Focus::Ledger if field_count > 0 => {
                self.form.set_active_field(field_count - 1);
                Focus::Form
            }
            Focus::Ledger => Focus::Selector,
            Focus::Form if self.form.active_field() == 0 => Focus::Selector,
            Focus::Form => {
                self.form.prev_field();
                Focus::Form
            }
        };
    }

    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
