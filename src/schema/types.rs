//! Schema value objects

/// Input kind of a field. Dropdowns carry their ordered options, so a field
/// has options if and only if it is a dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Dropdown(Vec<String>),
    Date,
    Password,
}

impl FieldKind {
    /// Wire name used by JSON catalogs
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Dropdown(_) => "dropdown",
            Self::Date => "date",
            Self::Password => "password",
        }
    }
}

/// A single editable unit within a schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldDefinition {
    fn new(name: &str, label: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required,
        }
    }

    pub fn text(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Text, required)
    }

    pub fn number(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Number, required)
    }

    pub fn date(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Date, required)
    }

    pub fn password(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Password, required)
    }

    pub fn dropdown(name: &str, label: &str, options: &[&str], required: bool) -> Self {
        let options = options.iter().map(|o| o.to_string()).collect();
        Self::new(name, label, FieldKind::Dropdown(options), required)
    }

    /// Options of a dropdown field
    pub fn options(&self) -> Option<&[String]> {
        match &self.kind {
            FieldKind::Dropdown(options) => Some(options),
            _ => None,
        }
    }

    pub fn is_dropdown(&self) -> bool {
        matches!(self.kind, FieldKind::Dropdown(_))
    }
}

/// Table column derived from a schema field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub label: String,
}

/// Ordered, immutable list of field definitions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSchema {
    fields: Vec<FieldDefinition>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldDefinition>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Columns for the submission table, in schema order
    pub fn columns(&self) -> Vec<Column> {
        self.fields
            .iter()
            .map(|f| Column {
                name: f.name.clone(),
                label: f.label.clone(),
            })
            .collect()
    }
}
