//! Field mapping between remote property bags, view models and form posts.
//!
//! The rules are driven entirely by the [`ObjectSchema`]:
//!
//! | kind          | forward (display)          | reverse                                |
//! |---------------|----------------------------|----------------------------------------|
//! | text / email  | copied, `""` when unset    | copied, omitted when not submitted     |
//! | checkbox      | `"Yes"` / `"No"` / `""`    | `"true"` when submitted, else `"false"`|
//! | multi-select  | copied, `""` when unset    | values joined with `;`                 |
//! | number        | copied, `"0"` when unset   | parsed as `f64`, `0` when unparsable   |

use serde_json::{Number, Value};

use crate::domain::{
    FieldKind, FieldSpec, FieldView, FormSubmission, ObjectSchema, ObjectView, PropertyBag,
    RemoteObject, SelectOption, ViewMode,
};

/// Separator used upstream for multi-valued properties.
pub const MULTI_VALUE_SEPARATOR: &str = ";";

// ============================================================================
// Forward: remote -> view
// ============================================================================

/// Project a remote object into a view model.
pub fn to_view(schema: &ObjectSchema, object: &RemoteObject, mode: ViewMode) -> ObjectView {
    let id = object
        .property_text(&schema.id_property)
        .unwrap_or_else(|| object.id.clone());

    ObjectView {
        id,
        fields: schema
            .fields
            .iter()
            .map(|field| field_view(field, object.property_text(&field.name), mode))
            .collect(),
    }
}

/// Blank edit form used in create mode.
pub fn empty_view(schema: &ObjectSchema) -> ObjectView {
    to_view(schema, &RemoteObject::default(), ViewMode::Edit)
}

fn field_view(field: &FieldSpec, raw: Option<String>, mode: ViewMode) -> FieldView {
    let mut checked = false;
    let mut selected = Vec::new();
    let mut options = Vec::new();

    let value = match &field.kind {
        FieldKind::Checkbox => {
            // An empty stored value counts as unset.
            let raw = raw.filter(|v| !v.is_empty());
            checked = raw.as_deref() == Some("true");
            match mode {
                ViewMode::Display => match raw {
                    Some(_) if checked => "Yes".to_string(),
                    Some(_) => "No".to_string(),
                    None => String::new(),
                },
                ViewMode::Edit => raw.unwrap_or_default(),
            }
        }
        FieldKind::MultiSelect { options: choices } => {
            let raw = raw.unwrap_or_default();
            if mode == ViewMode::Edit {
                selected = split_multi_value(&raw);
                options = offered_options(choices, &selected);
            }
            raw
        }
        FieldKind::Number => raw
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "0".to_string()),
        FieldKind::Text | FieldKind::TextArea | FieldKind::Email => raw.unwrap_or_default(),
    };

    FieldView {
        name: field.name.clone(),
        label: field.label.clone(),
        kind: field.kind.clone(),
        value,
        checked,
        selected,
        options,
    }
}

/// Schema options plus every selected value they miss, so stored values
/// survive an edit.
fn offered_options(choices: &[SelectOption], selected: &[String]) -> Vec<SelectOption> {
    let mut options = choices.to_vec();
    for value in selected {
        if !options.iter().any(|o| &o.value == value) {
            options.push(SelectOption::new(value.as_str(), value.as_str()));
        }
    }
    options
}

fn split_multi_value(raw: &str) -> Vec<String> {
    raw.split(MULTI_VALUE_SEPARATOR)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect()
}

// ============================================================================
// Reverse: form -> remote
// ============================================================================

/// Build the property bag sent upstream from a form submission.
///
/// Only schema fields are copied; the identifier and unknown inputs are
/// dropped.
pub fn to_properties(schema: &ObjectSchema, form: &FormSubmission) -> PropertyBag {
    let mut properties = PropertyBag::new();

    for field in &schema.fields {
        let value = match &field.kind {
            FieldKind::Checkbox => Some(Value::from(if form.is_truthy(&field.name) {
                "true"
            } else {
                "false"
            })),
            FieldKind::MultiSelect { .. } => form.get(&field.name).and_then(|values| {
                match values {
                    [] => None,
                    [single] => Some(Value::from(single.as_str())),
                    many => Some(Value::from(many.join(MULTI_VALUE_SEPARATOR))),
                }
            }),
            FieldKind::Number => Some(coerce_number(form.first(&field.name))),
            FieldKind::Text | FieldKind::TextArea | FieldKind::Email => {
                form.first(&field.name).map(Value::from)
            }
        };

        if let Some(value) = value {
            properties.insert(field.name.clone(), value);
        }
    }

    properties
}

/// Parse a submitted number, falling back to `0`.
///
/// Whole numbers become JSON integers so `"5"` is sent as `5` rather than
/// `5.0`.
pub fn coerce_number(raw: Option<&str>) -> Value {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .map_or_else(|| Value::from(0), number_value)
}

/// Largest magnitude at which every integer is exactly representable.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

#[allow(clippy::cast_possible_truncation)] // guarded by the fract/range check
fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        Value::from(n as i64)
    } else {
        Number::from_f64(n).map_or_else(|| Value::from(0), Value::Number)
    }
}
