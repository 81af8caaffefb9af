//! Submission ledger: append-only history of accepted submissions

use super::forms::FormValues;
use crate::schema::Column;
use chrono::{DateTime, Local};
use indexmap::IndexMap;
use serde::Serialize;

/// Snapshot of form values at the moment of a successful submission
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub form_type: String,
    /// Schema-derived columns, carried so the table never infers them from values
    #[serde(skip)]
    pub columns: Vec<Column>,
    pub values: FormValues,
    pub submitted_at: DateTime<Local>,
}

impl Submission {
    pub fn new(form_type: &str, columns: Vec<Column>, values: FormValues) -> Self {
        Self {
            form_type: form_type.to_string(),
            columns,
            values,
            submitted_at: Local::now(),
        }
    }
}

/// Ordered, append-only sequence of submissions for the session
#[derive(Debug, Clone, Default)]
pub struct SubmissionLedger {
    submissions: Vec<Submission>,
}

impl SubmissionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, submission: Submission) {
        self.submissions.push(submission);
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }

    /// Union of all submissions' columns, in first-seen order
    pub fn columns(&self) -> Vec<&Column> {
        let mut columns: IndexMap<&str, &Column> = IndexMap::new();
        for column in self.submissions.iter().flat_map(|s| &s.columns) {
            columns.entry(column.name.as_str()).or_insert(column);
        }
        columns.into_values().collect()
    }

    /// One row per submission, one cell per column; absent values are empty
    pub fn rows(&self) -> Vec<Vec<String>> {
        let columns = self.columns();
        self.submissions
            .iter()
            .map(|submission| {
                columns
                    .iter()
                    .map(|c| submission.values.get(&c.name).unwrap_or_default().to_string())
                    .collect()
            })
            .collect()
    }

    /// Pretty JSON of the whole history
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.submissions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn column(name: &str) -> Column {
        Column {
            name: name.to_string(),
            label: name.to_uppercase(),
        }
    }

    fn submission(form_type: &str, columns: &[&str], values: &[(&str, &str)]) -> Submission {
        let mut form_values = FormValues::new();
        for (name, value) in values {
            form_values.set(name, *value);
        }
        Submission::new(
            form_type,
            columns.iter().map(|c| column(c)).collect(),
            form_values,
        )
    }

    #[test]
    fn test_empty_ledger_has_no_columns_or_rows() {
        let ledger = SubmissionLedger::new();
        assert!(ledger.is_empty());
        assert!(ledger.columns().is_empty());
        assert!(ledger.rows().is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut ledger = SubmissionLedger::new();
        ledger.append(submission("A", &["x"], &[("x", "1")]));
        ledger.append(submission("A", &["x"], &[("x", "2")]));
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.rows(), vec![vec!["1"], vec!["2"]]);
    }

    #[test]
    fn test_columns_come_from_schema_not_values() {
        let mut ledger = SubmissionLedger::new();
        // age was never entered but the schema declares it
        ledger.append(submission(
            "User Information",
            &["firstName", "lastName", "age"],
            &[("lastName", "Lovelace"), ("firstName", "Ada")],
        ));
        let names: Vec<_> = ledger.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["firstName", "lastName", "age"]);
        assert_eq!(ledger.rows(), vec![vec!["Ada", "Lovelace", ""]]);
    }

    #[test]
    fn test_mixed_form_types_share_a_column_union() {
        let mut ledger = SubmissionLedger::new();
        ledger.append(submission("A", &["x", "y"], &[("x", "1"), ("y", "2")]));
        ledger.append(submission("B", &["y", "z"], &[("y", "3"), ("z", "4")]));

        let names: Vec<_> = ledger.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y", "z"]);
        assert_eq!(
            ledger.rows(),
            vec![vec!["1", "2", ""], vec!["", "3", "4"]]
        );
    }

    #[test]
    fn test_to_json_lists_values_in_entry_order() {
        let mut ledger = SubmissionLedger::new();
        ledger.append(submission("A", &["x"], &[("x", "1")]));
        let json: serde_json::Value = serde_json::from_str(&ledger.to_json().unwrap()).unwrap();

        assert_eq!(json[0]["form_type"], "A");
        assert_eq!(json[0]["values"]["x"], "1");
        assert!(json[0].get("columns").is_none());
        assert!(json[0]["submitted_at"].is_string());
    }
}
