//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that spending arithmetic is
//! exact: `100.00 - 17.86` is `82.14`, not a float approximation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest balance magnitude kept
    ///
    /// The store holds amounts as `f64` currency units; every cent value up to
    /// this bound survives that round trip exactly.
    pub const MAX_BALANCE: Money = Money(999_999_999_999_999);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use daily_budget::models::Money;
    /// let amount = Money::from_cents(1786); // 17.86
    /// assert_eq!(amount.to_string(), "17.86");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a floating-point value, rounded to the cent
    ///
    /// Non-finite inputs become zero.
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Self::zero();
        }
        Self((value * 100.0).round() as i64)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole units, truncated toward zero
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Cents within the unit, always 0-99
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount as a floating-point number of currency units
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Limit to `-MAX_BALANCE..=MAX_BALANCE`
    pub fn clamp_balance(self) -> Self {
        Self(self.0.clamp(-Self::MAX_BALANCE.0, Self::MAX_BALANCE.0))
    }

    /// Subtract a spent amount, saturating at the balance bounds
    pub fn debit(self, amount: Money) -> Self {
        Self(self.0.saturating_sub(amount.0)).clamp_balance()
    }

    /// Ratio of this amount to `whole`, or `None` if `whole` is not positive
    pub fn fraction_of(&self, whole: Money) -> Option<f64> {
        if whole.is_positive() {
            Some(self.0 as f64 / whole.0 as f64)
        } else {
            None
        }
    }

    /// Scale this amount by `to / from`, rounding half away from zero
    ///
    /// Keeps the same fraction of `to` that this amount was of `from`.
    /// Returns `to` unchanged when `from` is not positive.
    pub fn rescale(&self, from: Money, to: Money) -> Money {
        if !from.is_positive() {
            return to;
        }

        let numerator = self.0 as i128 * to.0 as i128;
        let denominator = from.0 as i128;
        let quotient = numerator / denominator;
        let remainder = numerator % denominator;

        let rounded = if remainder.abs() * 2 >= denominator {
            quotient + numerator.signum()
        } else {
            quotient
        };

        let bound = Self::MAX_BALANCE.0 as i128;
        Money(rounded.clamp(-bound, bound) as i64)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "10", "10.5", "10.", ".5"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (negative, body) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        if body.is_empty() {
            return Err(invalid());
        }

        let (units_str, cents_str) = match body.split_once('.') {
            Some((units, cents)) => (units, cents),
            None => (body, ""),
        };

        if cents_str.contains('.') || (units_str.is_empty() && cents_str.is_empty()) {
            return Err(invalid());
        }
        if !units_str.chars().all(|c| c.is_ascii_digit())
            || !cents_str.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let units: i64 = if units_str.is_empty() {
            0
        } else {
            units_str.parse().map_err(|_| invalid())?
        };

        // Pad or truncate cents to 2 digits
        let cents: i64 = match cents_str.len() {
            0 => 0,
            1 => cents_str.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => cents_str[..2].parse().map_err(|_| invalid())?,
        };

        let total = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a leading ISO currency code, e.g. "USD 82.14"
    pub fn format_with_code(&self, code: &str) -> String {
        format!("{} {}", code, self)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        f.pad(&format!("{}{}.{:02}", sign, self.units().abs(), self.cents_part()))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, m| total + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
