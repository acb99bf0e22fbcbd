//! Render-ready projections of remote objects.

use serde::Serialize;

use super::schema::{FieldKind, SelectOption};

/// Which page a view model is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// List page: checkboxes read "Yes" / "No".
    Display,
    /// Edit form: checkboxes keep the stored value and carry `checked`.
    Edit,
}

/// One field of a view model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldView {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    /// Text shown in the cell or pre-filled in the input
    pub value: String,
    /// Checkbox state in edit mode
    pub checked: bool,
    /// Pre-selected options of a multi-select in edit mode
    pub selected: Vec<String>,
    /// Choices offered by a multi-select in edit mode: the schema's
    /// options followed by any stored value they do not list
    pub options: Vec<SelectOption>,
}

/// Flattened projection of one object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectView {
    /// Identifier, empty for a create form
    pub id: String,
    pub fields: Vec<FieldView>,
}

impl ObjectView {
    /// Display value of a field.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// True for the blank form shown when creating an object.
    pub fn is_new(&self) -> bool {
        self.id.is_empty()
    }
}
