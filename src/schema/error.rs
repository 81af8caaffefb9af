//! Errors raised while loading a schema catalog

use std::path::PathBuf;
use thiserror::Error;

/// Failure to build a [`super::SchemaCatalog`] from external data
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to read schema file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid schema JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("schema catalog defines no form types")]
    Empty,

    #[error("form type \"{form_type}\": duplicate field name \"{name}\"")]
    DuplicateField { form_type: String, name: String },

    #[error("form type \"{form_type}\": dropdown field \"{name}\" has no options")]
    MissingOptions { form_type: String, name: String },

    #[error("form type \"{form_type}\": {kind} field \"{name}\" cannot declare options")]
    UnexpectedOptions {
        form_type: String,
        name: String,
        kind: &'static str,
    },
}
