//! Domain types shared by every crate in the workspace.

mod form;
mod object;
mod schema;
mod view;

pub use form::{FormError, FormSubmission, ID_FIELD};
pub use object::{PropertyBag, RemoteObject, value_text};
pub use schema::{
    DEFAULT_ID_PROPERTY, FieldKind, FieldSpec, ObjectSchema, PRESET_NAMES, SchemaError,
    SelectOption,
};
pub use view::{FieldView, ObjectView, ViewMode};
