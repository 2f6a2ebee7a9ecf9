//! # Rational numbers
//!
//! Exact fractions with a 64 bit numerator and denominator. All arithmetic happens on 128 bit
//! intermediates, so cross multiplication can't overflow; only the reduced result is narrowed
//! back, and a result that doesn't fit is reported as `ArithmeticError::Overflow`.
use std::cmp::Ordering;
use std::fmt;

use num_traits::{One, Zero};

use crate::error::ArithmeticError;

mod macros;
mod ops;

/// A fraction `n / d`.
///
/// Values created through arithmetic or through `Rational::new` are normalized: the denominator
/// is positive and shares no factor with the numerator. `Rational::new_raw` skips that step.
#[derive(Clone, Copy, Debug)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

impl Rational {
    /// Create a new, normalized rational number.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Any value.
    /// * `denominator`: Any value but zero.
    ///
    /// # Panics
    ///
    /// If the denominator is zero, or if the value can't be normalized (e.g. `1 / i64::MIN`).
    pub fn new(numerator: i64, denominator: i64) -> Self {
        match Self::try_new(numerator, denominator) {
            Ok(value) => value,
            Err(error) => panic!("can't create rational {}/{}: {}", numerator, denominator, error),
        }
    }

    /// Create a new, normalized rational number.
    ///
    /// # Return value
    ///
    /// The reduced fraction, or `DivisionByZero` if the denominator is zero.
    pub fn try_new(numerator: i64, denominator: i64) -> Result<Self, ArithmeticError> {
        Self::from_wide(numerator as i128, denominator as i128)
    }

    /// Create a rational number without normalizing it.
    ///
    /// The caller decides whether and when to call `normalize`. A zero denominator is accepted
    /// here; it is only rejected once the value is used as an operand.
    pub const fn new_raw(numerator: i64, denominator: i64) -> Self {
        Self { numerator, denominator }
    }

    /// Reduce this value in place.
    ///
    /// Divides numerator and denominator by their greatest common divisor and moves the sign to
    /// the numerator.
    ///
    /// # Return value
    ///
    /// `Overflow` when the sign can't be moved because the denominator is `i64::MIN`.
    pub fn normalize(&mut self) -> Result<(), ArithmeticError> {
        let divisor = gcd(self.numerator as i128, self.denominator as i128);
        let (mut numerator, mut denominator) = (
            self.numerator as i128 / divisor,
            self.denominator as i128 / divisor,
        );
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }

        self.numerator = narrow(numerator)?;
        self.denominator = narrow(denominator)?;
        Ok(())
    }

    /// Build a normalized value from wide intermediates.
    pub(crate) fn from_wide(numerator: i128, denominator: i128) -> Result<Self, ArithmeticError> {
        if denominator == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }

        let divisor = gcd(numerator, denominator);
        let (numerator, denominator) = (numerator / divisor, denominator / divisor);
        let (numerator, denominator) = if denominator < 0 {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };

        Ok(Self {
            numerator: narrow(numerator)?,
            denominator: narrow(denominator)?,
        })
    }

    /// Numerator, carrying the sign of a normalized value.
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Denominator, positive for a normalized value.
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Whether this value is strictly larger than zero.
    ///
    /// Only looks at the numerator; assumes a positive denominator.
    pub fn is_positive(&self) -> bool {
        self.numerator > 0
    }

    /// Whether this value is strictly smaller than zero.
    ///
    /// Only looks at the numerator; assumes a positive denominator.
    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Product of two values.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        Self::from_wide(
            self.numerator as i128 * rhs.numerator as i128,
            self.denominator as i128 * rhs.denominator as i128,
        )
    }

    /// Quotient of two values.
    ///
    /// # Return value
    ///
    /// `DivisionByZero` if the numerator of `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if rhs.numerator == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }

        Self::from_wide(
            self.numerator as i128 * rhs.denominator as i128,
            self.denominator as i128 * rhs.numerator as i128,
        )
    }

    /// Sum of two values.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        let numerator = (self.numerator as i128 * rhs.denominator as i128)
            .checked_add(rhs.numerator as i128 * self.denominator as i128)
            .ok_or(ArithmeticError::Overflow)?;

        Self::from_wide(numerator, self.denominator as i128 * rhs.denominator as i128)
    }

    /// Difference of two values.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        let numerator = (self.numerator as i128 * rhs.denominator as i128)
            .checked_sub(rhs.numerator as i128 * self.denominator as i128)
            .ok_or(ArithmeticError::Overflow)?;

        Self::from_wide(numerator, self.denominator as i128 * rhs.denominator as i128)
    }

    /// Additive inverse.
    ///
    /// The denominator is left untouched, so a normalized value stays normalized.
    pub fn checked_neg(&self) -> Result<Self, ArithmeticError> {
        let numerator = self.numerator.checked_neg().ok_or(ArithmeticError::Overflow)?;
        Ok(Self::new_raw(numerator, self.denominator))
    }

    /// Computes `self - factor * value`, the elementary row operation of a pivot.
    pub(crate) fn checked_sub_mul(&self, factor: &Self, value: &Self) -> Result<Self, ArithmeticError> {
        self.checked_sub(&factor.checked_mul(value)?)
    }
}

/// Greatest common divisor of the absolute values of two numbers.
///
/// Returns one instead of zero, such that `gcd(0, 0)` can safely be divided by.
pub fn gcd(a: i128, b: i128) -> i128 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }

    match a {
        0 => 1,
        // Operands are products of 64 bit values, far below `i128::MAX`.
        divisor => i128::try_from(divisor).unwrap_or(i128::MAX),
    }
}

fn narrow(value: i128) -> Result<i64, ArithmeticError> {
    i64::try_from(value).map_err(|_| ArithmeticError::Overflow)
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::new_raw(value, 1)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::new_raw(0, 1)
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::new_raw(1, 1)
    }
}

/// Compares by value, also for values that were never normalized.
impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.numerator as i128 * other.denominator as i128
            == other.numerator as i128 * self.denominator as i128
    }
}

impl Eq for Rational {}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Cross multiplication: `a / b < c / d` iff `a * d < c * b`.
///
/// This is only correct when both denominators are positive, which holds for all normalized
/// values.
impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let left = self.numerator as i128 * other.denominator as i128;
        let right = other.numerator as i128 * self.denominator as i128;
        left.cmp(&right)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            f.pad(&self.numerator.to_string())
        } else {
            f.pad(&format!("{}/{}", self.numerator, self.denominator))
        }
    }
}

#[cfg(test)]
mod proptests;
