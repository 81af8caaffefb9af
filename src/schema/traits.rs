//! Trait abstraction for schema lookup to enable mocking in tests

use super::types::FormSchema;
use std::sync::Arc;

/// Synchronous lookup of form schemas by form-type name
#[cfg_attr(test, mockall::automock)]
pub trait SchemaSource {
    /// Form-type names in display order
    fn form_types(&self) -> Vec<String>;

    /// Look up the schema for a form type. `None` means "no schema selected".
    fn lookup(&self, form_type: &str) -> Option<Arc<FormSchema>>;
}
