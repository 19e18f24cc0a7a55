//! Constraint checks for the student registration form.
//!
//! Each field carries HTML-style constraints (`required`, `minlength`, `pattern`, input type,
//! `min`/`max`). Checking a value yields the same validity flags a browser would report, and
//! the flags map to one user-facing message per field.

mod field;
mod messages;
mod student_form;

pub use field::{check, Constraints, Field, InputType, Validity};
pub use messages::message;
pub use student_form::{FieldError, FormError, StudentForm, Submission};
