//! Schema source module
//!
//! Form types map to immutable field-list schemas. The built-in catalog
//! mirrors the original mock response; a JSON catalog of the same shape can
//! replace it through the configuration.

mod catalog;
mod error;
mod traits;
mod types;

pub use catalog::SchemaCatalog;
pub use error::SchemaError;
pub use traits::SchemaSource;
pub use types::{Column, FieldDefinition, FieldKind, FormSchema};

#[cfg(test)]
pub use traits::MockSchemaSource;
