//! Monetary amounts.
//!
//! The remote API speaks whole-currency-unit Rupiah amounts as plain JSON
//! numbers; quantities can be fractional (per-kg pricing), so amounts are
//! decimal end to end. Formatting is for display only; computation never
//! goes through strings or floats.

use core::fmt;
use core::ops::{Add, AddAssign};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-unit-tagged Rupiah amount in whole currency units.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Amount from whole currency units.
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    pub fn from_decimal(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Multiply a unit price by a quantity.
    pub fn times(&self, quantity: Decimal) -> Money {
        Money(self.0 * quantity)
    }

    /// Subtraction that never goes below zero.
    pub fn saturating_sub(self, other: Money) -> Money {
        Money((self.0 - other.0).max(Decimal::ZERO))
    }

    pub fn min(self, other: Money) -> Money {
        if self.0 <= other.0 { self } else { other }
    }
}

impl From<i64> for Money {
    fn from(units: i64) -> Self {
        Money::from_units(units)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

/// Renders in the id-ID convention: `Rp 36.000`, fractional amounts as
/// `Rp 7.500,50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round_dp(2).normalize();
        let negative = rounded.is_sign_negative();
        let text = rounded.abs().to_string();
        let (int_part, frac_part) = match text.split_once('.') {
            Some((i, fr)) => (i, Some(fr)),
            None => (text.as_str(), None),
        };

        let grouped = group_thousands(int_part);
        let sign = if negative { "-" } else { "" };
        match frac_part {
            Some(fr) => write!(f, "{sign}Rp {grouped},{fr}"),
            None => write!(f, "{sign}Rp {grouped}"),
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
