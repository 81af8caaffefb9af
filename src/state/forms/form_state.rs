//! Form generator state: the active schema, pending values and errors

use super::field::{FormValues, ValidationErrors};
use crate::schema::{FieldDefinition, FieldKind, FormSchema};
use crate::state::Submission;
use std::sync::Arc;

/// Trait for common form navigation
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Check every required field for a non-empty value.
///
/// Produces `"<label> is required."` keyed by field name, in schema order.
pub fn validate(schema: &FormSchema, values: &FormValues) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for field in schema.fields() {
        if field.required && !values.is_filled(&field.name) {
            errors.insert(&field.name, format!("{} is required.", field.label));
        }
    }
    errors
}

/// A schema bound to the form-type name it was looked up under
#[derive(Debug, Clone)]
pub struct SelectedSchema {
    pub form_type: String,
    pub schema: Arc<FormSchema>,
}

/// Form generated from the currently selected schema.
///
/// The field cursor runs over the schema's fields followed by one extra row
/// for the submit button.
#[derive(Debug, Clone, Default)]
pub struct FormGenerator {
    selected: Option<SelectedSchema>,
    values: FormValues,
    errors: ValidationErrors,
    active_field_index: usize,
}

impl FormGenerator {
    /// Replace the schema, dropping all pending values and errors
    pub fn set_schema(&mut self, selected: Option<SelectedSchema>) {
        self.selected = selected;
        self.values.clear();
        self.errors = ValidationErrors::new();
        self.active_field_index = 0;
    }

    pub fn schema(&self) -> Option<&FormSchema> {
        self.selected.as_ref().map(|s| s.schema.as_ref())
    }

    pub fn form_type(&self) -> Option<&str> {
        self.selected.as_ref().map(|s| s.form_type.as_str())
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name)
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name)
    }

    /// Upsert one value. Existing errors stay until the next validation pass.
    pub fn set_field_value(&mut self, name: &str, value: impl Into<String>) {
        self.values.set(name, value);
    }

    /// Validate the current values without touching them
    pub fn validate(&self) -> ValidationErrors {
        match self.schema() {
            Some(schema) => validate(schema, &self.values),
            None => ValidationErrors::new(),
        }
    }

    /// Validate and, when nothing is missing, hand back the submission and
    /// reset the values. Errors are stored for display either way.
    pub fn submit(&mut self) -> Option<Submission> {
        let selected = self.selected.as_ref()?;
        let errors = self.validate();

        if !errors.is_empty() {
            tracing::debug!(
                "Submission of {} rejected: {} missing fields",
                selected.form_type,
                errors.len()
            );
            self.errors = errors;
            return None;
        }

        let submission = Submission::new(
            &selected.form_type,
            selected.schema.columns(),
            std::mem::take(&mut self.values),
        );
        self.errors = errors;
        Some(submission)
    }

    /// Whether the cursor is on the submit button row
    pub fn is_submit_active(&self) -> bool {
        self.schema()
            .is_some_and(|schema| self.active_field_index == schema.len())
    }

    /// The field under the cursor, if the cursor is on a field
    pub fn active_definition(&self) -> Option<&FieldDefinition> {
        self.schema()
            .and_then(|schema| schema.fields().get(self.active_field_index))
    }

    /// Append a character to the focused text-like field
    pub fn push_char(&mut self, c: char) {
        let Some(field) = self.active_definition() else {
            return;
        };
        if field.is_dropdown() {
            return;
        }
        let name = field.name.clone();
        let mut value = self.values.get(&name).unwrap_or_default().to_string();
        value.push(c);
        self.values.set(&name, value);
    }

    /// Remove the last character of the focused text-like field
    pub fn pop_char(&mut self) {
        let Some(field) = self.active_definition() else {
            return;
        };
        if field.is_dropdown() {
            return;
        }
        let name = field.name.clone();
        if let Some(current) = self.values.get(&name) {
            let mut value = current.to_string();
            value.pop();
            self.values.set(&name, value);
        }
    }

    /// Empty the focused field (dropdowns go back to the blank choice)
    pub fn clear_field(&mut self) {
        if let Some(name) = self.active_definition().map(|f| f.name.clone()) {
            self.values.set(&name, "");
        }
    }

    /// Step the focused dropdown through `[blank, options...]`
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(field) = self.active_definition() else {
            return;
        };
        let FieldKind::Dropdown(options) = &field.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }

        let current = self
            .values
            .get(&field.name)
            .and_then(|v| options.iter().position(|o| o == v));
        let next = match (current, forward) {
            (None, true) => Some(0),
            (Some(i), true) if i + 1 < options.len() => Some(i + 1),
            (Some(_), true) => None,
            (None, false) => Some(options.len() - 1),
            (Some(0), false) => None,
            (Some(i), false) => Some(i - 1),
        };

        let name = field.name.clone();
        let value = next.map(|i| options[i].clone()).unwrap_or_default();
        self.values.set(&name, value);
    }
}

impl Form for FormGenerator {
    fn field_count(&self) -> usize {
        // fields + submit button
        self.schema().map_or(0, |schema| schema.len() + 1)
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count().saturating_sub(1));
    }
}
