use super::{Field, Validity};

/// The message for the highest-priority failed constraint, or `None` when the value is valid.
///
/// Priority: missing, pattern, type, too short, underflow, overflow, bad input. A flag with no
/// message for the field yields `None`.
pub fn message(field: Field, validity: &Validity) -> Option<&'static str> {
    let flag = if validity.value_missing {
        Flag::ValueMissing
    } else if validity.pattern_mismatch {
        Flag::PatternMismatch
    } else if validity.type_mismatch {
        Flag::TypeMismatch
    } else if validity.too_short {
        Flag::TooShort
    } else if validity.range_underflow {
        Flag::RangeUnderflow
    } else if validity.range_overflow {
        Flag::RangeOverflow
    } else if validity.bad_input {
        Flag::BadInput
    } else {
        return None;
    };

    return lookup(field, flag);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    ValueMissing,
    PatternMismatch,
    TypeMismatch,
    TooShort,
    RangeUnderflow,
    RangeOverflow,
    BadInput,
}

fn lookup(field: Field, flag: Flag) -> Option<&'static str> {
    let message = match (field, flag) {
        (Field::Name, Flag::ValueMissing) => "Name is required",
        (Field::Name, Flag::PatternMismatch) => {
            "Name must contain only letters (min 3 characters)"
        }
        (Field::Name, Flag::TooShort) => "Name must be at least 3 characters long",

        (Field::Email, Flag::ValueMissing) => "Email is required",
        (Field::Email, Flag::TypeMismatch) => "Please enter a valid email address",
        (Field::Email, Flag::BadInput) => "Invalid email format",

        (Field::Age, Flag::ValueMissing) => "Age is required",
        (Field::Age, Flag::RangeUnderflow) => "You must be at least 18 years old",
        (Field::Age, Flag::RangeOverflow) => "Age cannot exceed 100 years",
        (Field::Age, Flag::BadInput) => "Please enter a valid age",

        _ => return None,
    };

    Some(message)
}
