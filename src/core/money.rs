//! Monetary amounts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A dollar amount.
///
/// Displayed the way the reporting channel expects: no trailing zeros, so
/// `2.0` prints as `2` and `1.50` as `1.5`. Magnitudes from `1e21` up and
/// below `1e-6` switch to exponent form (`1e+21`, `5e-7`), and non-finite
/// amounts print as `Infinity`, `-Infinity` or `NaN`.
///
/// ```rust
/// use statewise::core::Money;
///
/// assert_eq!(Money::new(2.0).to_string(), "2");
/// assert_eq!((Money::new(2.0) - Money::new(1.5)).to_string(), "0.5");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    pub const ZERO: Money = Money(0.0);

    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    pub const fn amount(self) -> f64 {
        self.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl From<f64> for Money {
    fn from(amount: f64) -> Self {
        Self(amount)
    }
}

impl From<u32> for Money {
    fn from(amount: u32) -> Self {
        Self(f64::from(amount))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.0;
        if amount.is_nan() {
            return f.write_str("NaN");
        }
        if amount.is_infinite() {
            return f.write_str(if amount > 0.0 { "Infinity" } else { "-Infinity" });
        }
        if amount == 0.0 {
            // covers -0.0
            return f.write_str("0");
        }

        let magnitude = amount.abs();
        if (1e-6..1e21).contains(&magnitude) {
            return write!(f, "{amount}");
        }

        let exponent = format!("{amount:e}");
        match exponent.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                write!(f, "{mantissa}e+{power}")
            }
            _ => f.write_str(&exponent),
        }
    }
}
