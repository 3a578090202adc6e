pub mod schema;
pub mod view;

pub use schema::{FieldError, FieldErrors, FieldKind, FieldSpec, FormSchema, FormValues, SelectOption};
pub use view::SchemaForm;
