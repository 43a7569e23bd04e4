//! Non-negative integer sales amount with a 10-digit ceiling.
//!
//! Amounts are whole numbers. A running total may hold at most ten decimal
//! digits, so every addition goes through [`Amount::checked_add`].

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A sales amount or running total.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use calculate_sales::Amount;
///
/// let total = Amount::from_str("9999999995").unwrap();
/// assert!(total.checked_add(Amount::new(5)).is_none());
/// assert_eq!(total.checked_add(Amount::new(4)).unwrap().to_string(), "9999999999");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Amount(u64);

impl Amount {
    /// Exclusive upper bound for any total.
    pub const CEILING: u64 = 10_000_000_000;

    /// Zero value.
    pub const ZERO: Self = Amount(0);

    /// Wraps a raw value.
    pub fn new(value: u64) -> Self {
        Amount(value)
    }

    /// Returns the raw value.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Adds `rhs`, returning `None` if the sum would reach [`Amount::CEILING`].
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0
            .checked_add(rhs.0)
            .filter(|sum| *sum < Self::CEILING)
            .map(Amount)
    }
}

/// Why an amount line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    /// Empty, signed, or containing anything other than ASCII digits.
    NotNumeric,
    /// Only digits, but too large to ever fit under the ceiling.
    TooLarge,
}

impl FromStr for Amount {
    type Err = AmountError;

    /// Accepts one or more ASCII digits and nothing else; no trimming.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountError::NotNumeric);
        }
        s.parse::<u64>()
            .map(Amount)
            .map_err(|_| AmountError::TooLarge)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}
