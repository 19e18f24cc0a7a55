use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Age,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Age];

    pub fn constraints(&self) -> Constraints {
        return match self {
            Self::Name => Constraints {
                required: true,
                input_type: InputType::Text,
                min_length: Some(3),
                pattern: Some(is_letters_only),
                min: None,
                max: None,
            },
            Self::Email => Constraints {
                required: true,
                input_type: InputType::Email,
                min_length: None,
                pattern: None,
                min: None,
                max: None,
            },
            Self::Age => Constraints {
                required: true,
                input_type: InputType::Number,
                min_length: None,
                pattern: None,
                min: Some(18.0),
                max: Some(100.0),
            },
        };
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Age => "age",
        };

        return f.write_str(name);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Number,
}

#[derive(Clone, Copy)]
pub struct Constraints {
    pub required: bool,
    pub input_type: InputType,
    pub min_length: Option<usize>,
    /// Must match the whole value
    pub pattern: Option<fn(&str) -> bool>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Validity flags as a browser reports them for a form control
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Validity {
    pub value_missing: bool,
    pub pattern_mismatch: bool,
    pub type_mismatch: bool,
    pub too_short: bool,
    pub range_underflow: bool,
    pub range_overflow: bool,
    pub bad_input: bool,
}

impl Validity {
    pub fn valid(&self) -> bool {
        *self == Self::default()
    }
}

/// Checks `value` against the constraints of `field`
pub fn check(field: Field, value: &str) -> Validity {
    let constraints = field.constraints();

    // email and number controls strip surrounding whitespace before validating
    let value = match constraints.input_type {
        InputType::Email | InputType::Number => value.trim(),
        InputType::Text => value,
    };

    let mut validity = Validity::default();

    if value.is_empty() {
        validity.value_missing = constraints.required;
        return validity;
    }

    if let Some(pattern) = constraints.pattern {
        validity.pattern_mismatch = !pattern(value);
    }

    if let Some(min_length) = constraints.min_length {
        validity.too_short = value.chars().count() < min_length;
    }

    match constraints.input_type {
        InputType::Text => {}
        InputType::Email => validity.type_mismatch = !is_email(value),
        InputType::Number => match value.parse::<f64>() {
            Ok(number) if number.is_finite() => {
                validity.range_underflow = constraints.min.map_or(false, |min| number < min);
                validity.range_overflow = constraints.max.map_or(false, |max| number > max);
            }
            _ => validity.bad_input = true,
        },
    }

    validity
}

/// Letters and spaces only, at least three characters
fn is_letters_only(value: &str) -> bool {
    value.chars().count() >= 3 && value.chars().all(|ch| ch.is_alphabetic() || ch == ' ')
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(ch));

    let domain_ok = !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
        });

    local_ok && domain_ok
}
