//! The `Credit` value type.
//!
//! Credits are exact decimals. Addition, subtraction and comparison are only
//! defined between two `Credit` values; multiplication additionally accepts a
//! plain numeric factor (an integer, a `Decimal`, or, fallibly, a float).
//!
//! Arithmetic saturates at [`Decimal::MAX`] and [`Decimal::MIN`] rather than
//! panicking, so oversized billing parameters produce a capped charge.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{BillingError, Result};

/// An exact-precision amount of credits.
///
/// Equality and ordering compare the numeric value, so `1.0` and `1.00`
/// are the same credit amount.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credit(Decimal);

impl Credit {
    /// Wrap an exact decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Zero credits.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// A whole number of credits.
    #[must_use]
    pub fn from_int(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }

    /// Convert a float through its shortest decimal representation.
    ///
    /// `0.05` becomes exactly `0.05`, not the nearest binary fraction.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::InvalidAmount`] for NaN, infinities, and values
    /// outside the range of `Decimal`.
    pub fn from_float(amount: f64) -> Result<Self> {
        if !amount.is_finite() {
            return Err(BillingError::InvalidAmount(format!(
                "{amount} is not a finite credit amount"
            )));
        }
        Decimal::from_str(&amount.to_string())
            .map(Self)
            .map_err(|e| BillingError::InvalidAmount(format!("{amount}: {e}")))
    }

    /// The exact decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply by a float factor, converting the factor the same way as
    /// [`Credit::from_float`].
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::InvalidAmount`] if the factor is not finite.
    pub fn try_scale(self, factor: f64) -> Result<Self> {
        let factor = Self::from_float(factor)?;
        Ok(self * factor.0)
    }
}

impl fmt::Debug for Credit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credit({})", self.0)
    }
}

impl fmt::Display for Credit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl From<Decimal> for Credit {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Credit {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Credit {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Credit {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Credit {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for Credit {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0.saturating_mul(rhs.0))
    }
}

impl Mul<Decimal> for Credit {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self {
        Self(self.0.saturating_mul(rhs))
    }
}

impl Mul<i64> for Credit {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        Self(self.0.saturating_mul(Decimal::from(rhs)))
    }
}

impl Mul<u32> for Credit {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self(self.0.saturating_mul(Decimal::from(rhs)))
    }
}

impl Mul<usize> for Credit {
    type Output = Self;

    fn mul(self, rhs: usize) -> Self {
        Self(self.0.saturating_mul(Decimal::from(rhs)))
    }
}

impl MulAssign<u32> for Credit {
    fn mul_assign(&mut self, rhs: u32) {
        *self = *self * rhs;
    }
}

impl Sum for Credit {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}
