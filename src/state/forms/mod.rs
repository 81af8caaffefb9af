//! Form domain layer
//!
//! Schema-driven form state: pending values, validation and submission.

mod field;
mod form_state;

pub use field::FormValues;
pub use form_state::{Form, FormGenerator, SelectedSchema};
