//! Client-side form validation: the payload a form submits, the schema it is
//! checked against, and the translation of failures into per-field messages
//! the form renders under each input.

pub mod errors;
pub mod payload;
pub mod schema;

pub use errors::{FieldErrors, FieldFailure, ValidationErrors, field_errors};
pub use payload::FormPayload;
pub use schema::{FieldSchema, Schema};
