use super::{check, message, Field};

use thiserror::Error;

/// A failed field and the message to show beside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Form has invalid fields: {0:?}")]
    Invalid(Vec<FieldError>),
}

/// Cleaned-up values of a form that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub age: u8,
}

/// Raw text of the three form inputs
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StudentForm {
    pub name: String,
    pub email: String,
    pub age: String,
}

impl StudentForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: impl Into<String>) -> Self {
        return Self {
            name: name.into(),
            email: email.into(),
            age: age.into(),
        };
    }

    pub fn value(&self, field: Field) -> &str {
        return match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Age => &self.age,
        };
    }

    /// Whether the field passes, paired with its message when it does not
    pub fn validate_field(&self, field: Field) -> (bool, Option<&'static str>) {
        let validity = check(field, self.value(field));

        return (validity.valid(), message(field, &validity));
    }

    pub fn validate(&self) -> Result<Submission, FormError> {
        let errors = Field::ALL
            .into_iter()
            .filter_map(|field| match self.validate_field(field) {
                (true, _) => None,
                (false, message) => Some(FieldError {
                    field,
                    message: message.unwrap_or_default(),
                }),
            })
            .collect::<Vec<_>>();

        if !errors.is_empty() {
            log::debug!("Form rejected: {errors:?}");
            Err(FormError::Invalid(errors))?
        }

        // a valid age is a finite number within 18..=100
        let age = self.age.trim().parse::<f64>().map_or(0, |age| age.trunc() as u8);

        return Ok(Submission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            age,
        });
    }

    /// Percentage of fields holding a non-blank value
    pub fn progress(&self) -> f64 {
        let filled = Field::ALL
            .iter()
            .filter(|field| !self.value(**field).trim().is_empty())
            .count();

        filled as f64 / Field::ALL.len() as f64 * 100.0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
