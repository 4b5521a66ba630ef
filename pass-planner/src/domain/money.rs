//! Monetary amounts held as whole cents.

use std::fmt;
use std::ops::Add;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid amount.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid amount: {reason}")]
pub struct MoneyError {
    reason: &'static str,
}

impl MoneyError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A non-negative amount of money, stored as whole cents.
///
/// Amounts are parsed from decimal text and rounded to two decimal places,
/// so equal prices compare exactly equal.
///
/// # Examples
///
/// ```
/// use pass_planner::domain::Money;
///
/// let week = Money::parse("8.00").unwrap();
/// let day = Money::parse("2").unwrap();
/// assert_eq!((week + day).to_string(), "10.00");
/// assert_eq!(Money::parse("1.005").unwrap().cents(), 101);
///
/// assert!(Money::parse("-1.00").is_err());
/// assert!(Money::parse("abc").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl Money {
    /// Zero.
    pub const ZERO: Money = Money(0);

    /// Create an amount from whole cents.
    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Returns the amount in whole cents.
    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Parse a decimal amount such as `8`, `8.5` or `8.00`.
    ///
    /// Digits past the second decimal place round half-up.
    pub fn parse(s: &str) -> Result<Self, MoneyError> {
        if s.starts_with('-') {
            return Err(MoneyError::new("must not be negative"));
        }

        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(MoneyError::new("no digits"));
        }
        if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(MoneyError::new("expected a decimal number"));
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| MoneyError::new("amount too large"))?
        };

        let frac = frac.as_bytes();
        let digit = |i: usize| frac.get(i).map_or(0, |b| u64::from(b - b'0'));
        let mut cents = digit(0) * 10 + digit(1);
        if digit(2) >= 5 {
            cents += 1;
        }

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Self)
            .ok_or_else(|| MoneyError::new("amount too large"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
