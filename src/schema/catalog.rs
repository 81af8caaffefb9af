//! Schema catalogs: the built-in table and JSON-backed replacements

use super::error::SchemaError;
use super::traits::SchemaSource;
use super::types::{FieldDefinition, FieldKind, FormSchema};
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Field type names accepted in JSON catalogs
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawFieldType {
    Text,
    Number,
    Dropdown,
    Date,
    Password,
}

#[derive(Debug, Deserialize)]
struct RawField {
    name: String,
    #[serde(rename = "type")]
    field_type: RawFieldType,
    label: String,
    #[serde(default)]
    required: bool,
    options: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawSchema {
    fields: Vec<RawField>,
}

/// Ordered mapping from form-type name to schema
#[derive(Debug, Clone, Default)]
pub struct SchemaCatalog {
    entries: IndexMap<String, Arc<FormSchema>>,
}

impl SchemaCatalog {
    /// The fixed in-memory table shipped with the application
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        catalog.insert(
            "User Information",
            FormSchema::new(vec![
                FieldDefinition::text("firstName", "First Name", true),
                FieldDefinition::text("lastName", "Last Name", true),
                FieldDefinition::number("age", "Age", false),
            ]),
        );
        catalog.insert(
            "Address Information",
            FormSchema::new(vec![
                FieldDefinition::text("street", "Street", true),
                FieldDefinition::text("city", "City", true),
                FieldDefinition::dropdown(
                    "state",
                    "State",
                    &["California", "Texas", "New York"],
                    true,
                ),
                FieldDefinition::text("zipCode", "Zip Code", false),
            ]),
        );
        catalog.insert(
            "Payment Information",
            FormSchema::new(vec![
                FieldDefinition::text("cardNumber", "Card Number", true),
                FieldDefinition::date("expiryDate", "Expiry Date", true),
                FieldDefinition::password("cvv", "CVV", true),
                FieldDefinition::text("cardholderName", "Cardholder Name", true),
            ]),
        );
        catalog
    }

    /// Parse a catalog shaped like `{"<form type>": {"fields": [...]}}`.
    /// Form types keep the order in which they appear in the document.
    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        let document: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        if document.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut catalog = Self::default();
        for (form_type, value) in document {
            let raw: RawSchema = serde_json::from_value(value)?;
            let schema = convert_schema(&form_type, raw)?;
            catalog.insert(&form_type, schema);
        }
        Ok(catalog)
    }

    /// Read and parse a JSON catalog file
    pub fn from_path(path: &Path) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!(
            "Loaded {} form types from {}",
            catalog.entries.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Load the configured catalog, falling back to the built-in one.
    /// The load error, if any, is handed back so it can be shown to the user.
    pub fn load_or_builtin(path: Option<&Path>) -> (Self, Option<SchemaError>) {
        let Some(path) = path else {
            return (Self::builtin(), None);
        };
        match Self::from_path(path) {
            Ok(catalog) => (catalog, None),
            Err(err) => {
                tracing::error!("Falling back to built-in schemas: {err}");
                (Self::builtin(), Some(err))
            }
        }
    }

    fn insert(&mut self, form_type: &str, schema: FormSchema) {
        self.entries.insert(form_type.to_string(), Arc::new(schema));
    }
}

impl SchemaSource for SchemaCatalog {
    fn form_types(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    fn lookup(&self, form_type: &str) -> Option<Arc<FormSchema>> {
        self.entries.get(form_type).cloned()
    }
}

fn convert_schema(form_type: &str, raw: RawSchema) -> Result<FormSchema, SchemaError> {
    let mut seen = HashSet::new();
    let mut fields = Vec::with_capacity(raw.fields.len());

    for field in raw.fields {
        if !seen.insert(field.name.clone()) {
            return Err(SchemaError::DuplicateField {
                form_type: form_type.to_string(),
                name: field.name,
            });
        }

        let kind = match (field.field_type, field.options) {
            (RawFieldType::Dropdown, Some(options)) if !options.is_empty() => {
                FieldKind::Dropdown(options)
            }
            (RawFieldType::Dropdown, _) => {
                return Err(SchemaError::MissingOptions {
                    form_type: form_type.to_string(),
                    name: field.name,
                })
            }
            (other, Some(_)) => {
                return Err(SchemaError::UnexpectedOptions {
                    form_type: form_type.to_string(),
                    name: field.name,
                    kind: simple_kind(other).type_name(),
                })
            }
            (other, None) => simple_kind(other),
        };

        fields.push(FieldDefinition {
            name: field.name,
            label: field.label,
            kind,
            required: field.required,
        });
    }

    Ok(FormSchema::new(fields))
}

fn simple_kind(field_type: RawFieldType) -> FieldKind {
    match field_type {
        RawFieldType::Text => FieldKind::Text,
        RawFieldType::Number => FieldKind::Number,
        RawFieldType::Date => FieldKind::Date,
        RawFieldType::Password => FieldKind::Password,
        RawFieldType::Dropdown => FieldKind::Dropdown(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn field_names(schema: &FormSchema) -> Vec<&str> {
        schema.fields().iter().map(|f| f.name.as_str()).collect()
    }

    mod builtin {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_form_types_in_display_order() {
            let catalog = SchemaCatalog::builtin();
            assert_eq!(
                catalog.form_types(),
                vec![
                    "User Information",
                    "Address Information",
                    "Payment Information"
                ]
            );
        }

        #[test]
        fn test_user_information_fields() {
            let schema = SchemaCatalog::builtin().lookup("User Information").unwrap();
            assert_eq!(field_names(&schema), vec!["firstName", "lastName", "age"]);
            let required: Vec<bool> = schema.fields().iter().map(|f| f.required).collect();
            assert_eq!(required, vec![true, true, false]);
            assert_eq!(schema.fields()[2].kind, FieldKind::Number);
        }

        #[test]
        fn test_address_information_fields_in_order() {
            let schema = SchemaCatalog::builtin()
                .lookup("Address Information")
                .unwrap();
            assert_eq!(
                field_names(&schema),
                vec!["street", "city", "state", "zipCode"]
            );
            assert_eq!(
                schema.field("state").unwrap().options().unwrap(),
                &[
                    "California".to_string(),
                    "Texas".to_string(),
                    "New York".to_string()
                ]
            );
        }

        #[test]
        fn test_payment_information_kinds() {
            let schema = SchemaCatalog::builtin()
                .lookup("Payment Information")
                .unwrap();
            let kinds: Vec<_> = schema.fields().iter().map(|f| f.kind.type_name()).collect();
            assert_eq!(kinds, vec!["text", "date", "password", "text"]);
            assert!(schema.fields().iter().all(|f| f.required));
        }

        #[test]
        fn test_unknown_form_type_is_absent() {
            let catalog = SchemaCatalog::builtin();
            assert!(catalog.lookup("Shipping Information").is_none());
            assert!(catalog.lookup("").is_none());
        }

        #[test]
        fn test_lookup_shares_schema() {
            let catalog = SchemaCatalog::builtin();
            let a = catalog.lookup("User Information").unwrap();
            let b = catalog.lookup("User Information").unwrap();
            assert!(Arc::ptr_eq(&a, &b));
        }
    }

    mod json {
        use super::*;
        use pretty_assertions::assert_eq;

        const CATALOG: &str = r#"{
            "Shipping": {
                "fields": [
                    { "name": "carrier", "type": "dropdown", "label": "Carrier",
                      "options": ["UPS", "DHL"], "required": true },
                    { "name": "notes", "type": "text", "label": "Notes" }
                ]
            },
            "Account": {
                "fields": [
                    { "name": "pin", "type": "password", "label": "PIN", "required": true }
                ]
            }
        }"#;

        #[test]
        fn test_parses_in_document_order() {
            let catalog = SchemaCatalog::from_json_str(CATALOG).unwrap();
            assert_eq!(catalog.form_types(), vec!["Shipping", "Account"]);

            let shipping = catalog.lookup("Shipping").unwrap();
            assert_eq!(field_names(&shipping), vec!["carrier", "notes"]);
            assert!(!shipping.field("notes").unwrap().required);
            assert_eq!(
                shipping.field("carrier").unwrap().kind,
                FieldKind::Dropdown(vec!["UPS".to_string(), "DHL".to_string()])
            );
        }

        #[test]
        fn test_rejects_empty_catalog() {
            let err = SchemaCatalog::from_json_str("{}").unwrap_err();
            assert!(matches!(err, SchemaError::Empty));
        }

        #[test]
        fn test_rejects_non_object() {
            let err = SchemaCatalog::from_json_str("[1, 2]").unwrap_err();
            assert!(matches!(err, SchemaError::Json(_)));
        }

        #[test]
        fn test_rejects_unknown_field_type() {
            let json = r#"{"A": {"fields": [{"name": "x", "type": "color", "label": "X"}]}}"#;
            let err = SchemaCatalog::from_json_str(json).unwrap_err();
            assert!(matches!(err, SchemaError::Json(_)));
        }

        #[test]
        fn test_rejects_duplicate_field_names() {
            let json = r#"{"A": {"fields": [
                {"name": "x", "type": "text", "label": "X"},
                {"name": "x", "type": "number", "label": "X again"}
            ]}}"#;
            let err = SchemaCatalog::from_json_str(json).unwrap_err();
            assert!(matches!(
                err,
                SchemaError::DuplicateField { ref form_type, ref name } if form_type == "A" && name == "x"
            ));
        }

        #[test]
        fn test_rejects_dropdown_without_options() {
            let json = r#"{"A": {"fields": [{"name": "s", "type": "dropdown", "label": "S"}]}}"#;
            let err = SchemaCatalog::from_json_str(json).unwrap_err();
            assert!(matches!(err, SchemaError::MissingOptions { .. }));

            let json = r#"{"A": {"fields": [{"name": "s", "type": "dropdown", "label": "S", "options": []}]}}"#;
            let err = SchemaCatalog::from_json_str(json).unwrap_err();
            assert!(matches!(err, SchemaError::MissingOptions { .. }));
        }

        #[test]
        fn test_rejects_options_on_text_field() {
            let json = r#"{"A": {"fields": [{"name": "t", "type": "text", "label": "T", "options": ["a"]}]}}"#;
            let err = SchemaCatalog::from_json_str(json).unwrap_err();
            assert_eq!(
                err.to_string(),
                "form type \"A\": text field \"t\" cannot declare options"
            );
        }

        #[test]
        fn test_from_path_reads_file() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            file.write_all(CATALOG.as_bytes()).unwrap();
            let catalog = SchemaCatalog::from_path(file.path()).unwrap();
            assert_eq!(catalog.form_types().len(), 2);
        }

        #[test]
        fn test_load_or_builtin_without_path() {
            let (catalog, err) = SchemaCatalog::load_or_builtin(None);
            assert!(err.is_none());
            assert_eq!(catalog.form_types().len(), 3);
        }

        #[test]
        fn test_load_or_builtin_falls_back_on_error() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            file.write_all(b"{ not json").unwrap();
            let (catalog, err) = SchemaCatalog::load_or_builtin(Some(file.path()));
            assert!(matches!(err, Some(SchemaError::Json(_))));
            assert_eq!(
                catalog.form_types(),
                SchemaCatalog::builtin().form_types()
            );
        }

        #[test]
        fn test_load_or_builtin_uses_file() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            file.write_all(CATALOG.as_bytes()).unwrap();
            let (catalog, err) = SchemaCatalog::load_or_builtin(Some(file.path()));
            assert!(err.is_none());
            assert_eq!(catalog.form_types(), vec!["Shipping", "Account"]);
        }

        #[test]
        fn test_from_path_missing_file() {
            let err = SchemaCatalog::from_path(Path::new("/nonexistent/schemas.json")).unwrap_err();
            assert!(matches!(err, SchemaError::Io { .. }));
            assert!(err.to_string().contains("/nonexistent/schemas.json"));
        }
    }
}
