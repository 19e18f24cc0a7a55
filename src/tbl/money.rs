use std::fmt;
use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{ToPrimitive, Zero};
use thiserror::Error;

/// Number of stored units per whole currency unit (4 fractional digits)
const SCALE: i64 = 10_000;

/// Most integer digits an amount may have and still fit in `i64` once scaled
const MAX_INTEGER_DIGITS: i64 = 15;

/// Amounts with at most this many integer digits are below half the smallest unit
const MIN_INTEGER_DIGITS: i64 = -5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1:?} and {2:?}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1:?} and {2:?}")]
    Underflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Fixed-point currency amount, counted in ten-thousandths of a unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    pub const fn from_units(units: i64) -> Self {
        Self(units * SCALE)
    }

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents * (SCALE / 100))
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Whole cents, rounding half away from zero
    pub fn to_cents(&self) -> i128 {
        let value = self.0 as i128;
        let half = (SCALE / 200) as i128;

        return (value + value.signum() * half) / (SCALE / 100) as i128;
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self, MoneyError> {
        return match self.0.checked_add(other.0) {
            Some(value) => Ok(Self(value)),
            None if other.0 > 0 => Err(MoneyError::Overflow("add", *self, *other)),
            None => Err(MoneyError::Underflow("add", *self, *other)),
        };
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self, MoneyError> {
        return match self.0.checked_sub(other.0) {
            Some(value) => Ok(Self(value)),
            None if other.0 < 0 => Err(MoneyError::Overflow("sub", *self, *other)),
            None => Err(MoneyError::Underflow("sub", *self, *other)),
        };
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    /// Parses user text such as `"250.50"`. Digits past the fourth decimal place are rounded.
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let trimmed = string.trim();

        if trimmed.is_empty() {
            Err(MoneyError::Parse("Empty amount", string.to_string()))?
        }

        let decimal = BigDecimal::from_str(trimmed)
            .map_err(|_| MoneyError::Parse("Not a number", string.to_string()))?;

        if decimal.is_zero() {
            return Ok(Self::ZERO);
        }

        // digits left of the decimal point, checked before any scaling
        let (_, exponent) = decimal.as_bigint_and_exponent();
        let integer_digits = (decimal.digits() as i64).saturating_sub(exponent);

        if integer_digits > MAX_INTEGER_DIGITS {
            Err(MoneyError::Parse("Amount out of range", string.to_string()))?
        }
        if integer_digits <= MIN_INTEGER_DIGITS {
            return Ok(Self::ZERO);
        }

        let scaled = (decimal * BigDecimal::from(SCALE)).with_scale_round(0, RoundingMode::HalfUp);

        let value = scaled
            .to_i64()
            .ok_or_else(|| MoneyError::Parse("Amount out of range", string.to_string()))?;

        return Ok(Self(value));
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cents = self.to_cents();
        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.unsigned_abs();

        return write!(f, "{sign}{}.{:02}", cents / 100, cents % 100);
    }
}
