// ============================================================================
// Certified Decimal String
// Typed wrapper over text that has passed the decimal grammar
// ============================================================================

use super::approximate::to_approximate;
use super::arithmetic::add;
use super::digits::unsigned_cmp;
use super::errors::{NumericError, NumericResult};
use super::grammar::validate;
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Magnitude of `rust_decimal::Decimal::MAX`, digits only
const DECIMAL_MAX_DIGITS: &str = "79228162514264337593543950335";

/// A decimal string certified against the grammar `[+-]?[0-9]+(\.[0-9]+)?`.
///
/// The only way to build one from untrusted text is through validation, so
/// every value can be handed to the arithmetic engine without re-checking.
/// The original spelling is preserved (`"+007.50"` stays `"+007.50"`);
/// results of addition are always normalized.
///
/// Equality and hashing compare spelling, not numeric value. Compare
/// [`normalized`](Self::normalized) forms to test numeric equality.
///
/// # Example
/// ```
/// use text_decimal::numeric::DecimalString;
///
/// let a: DecimalString = "10".parse().unwrap();
/// let b: DecimalString = "-3.5".parse().unwrap();
/// assert_eq!((&a + &b).as_str(), "6.5");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct DecimalString(String);

impl DecimalString {
    /// The normalized zero value, `"0"`.
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// Wrap a string already known to satisfy the grammar.
    #[inline]
    pub(crate) fn from_certified(value: String) -> Self {
        debug_assert!(validate(&value).is_ok(), "uncertified decimal {value:?}");
        Self(value)
    }

    /// Borrow the certified text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the certified text.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Check if the value is zero, whatever its spelling (`"-0.00"` is zero).
    pub fn is_zero(&self) -> bool {
        self.0
            .bytes()
            .all(|b| matches!(b, b'0' | b'.' | b'+' | b'-'))
    }

    /// Check if the value is strictly negative. `"-0"` is not negative.
    pub fn is_negative(&self) -> bool {
        self.0.starts_with('-') && !self.is_zero()
    }

    /// The canonical spelling: no explicit `+`, no superfluous zeros, `"0"`
    /// for zero.
    pub fn normalized(&self) -> Self {
        Self(add(&self.0, "0"))
    }

    /// Lossy conversion to `f64`.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        to_approximate(&self.0)
    }
}

// ============================================================================
// Parsing and Conversion
// ============================================================================

impl FromStr for DecimalString {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)?;
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for DecimalString {
    type Error = NumericError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(&value)?;
        Ok(Self(value))
    }
}

impl TryFrom<&str> for DecimalString {
    type Error = NumericError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DecimalString> for String {
    fn from(value: DecimalString) -> Self {
        value.0
    }
}

impl AsRef<str> for DecimalString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Arithmetic Trait Implementations
// ============================================================================

impl Add for DecimalString {
    type Output = DecimalString;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        DecimalString(add(&self.0, &rhs.0))
    }
}

impl<'a> Add<&'a DecimalString> for &'a DecimalString {
    type Output = DecimalString;

    #[inline]
    fn add(self, rhs: &'a DecimalString) -> Self::Output {
        DecimalString(add(&self.0, &rhs.0))
    }
}

impl Sum for DecimalString {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, value| &acc + &value)
    }
}

impl<'a> Sum<&'a DecimalString> for DecimalString {
    fn sum<I: Iterator<Item = &'a DecimalString>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, value| &acc + value)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for DecimalString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for DecimalString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalString({:?})", self.0)
    }
}

// ============================================================================
// Conversion to/from rust_decimal (for API boundaries)
// ============================================================================

impl DecimalString {
    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// - `Overflow` if the integer part exceeds `Decimal::MAX`
    /// - `PrecisionLoss` if the value is in range but has more significant
    ///   digits than `Decimal` can hold exactly
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        let normalized = self.normalized();
        let text = normalized.as_str();
        let integer = text
            .trim_start_matches('-')
            .split('.')
            .next()
            .unwrap_or("0");

        if unsigned_cmp(integer, DECIMAL_MAX_DIGITS) == Ordering::Greater {
            return Err(NumericError::Overflow);
        }

        // Integer part is in range, so any failure is dropped digits
        rust_decimal::Decimal::from_str_exact(text).map_err(|_| NumericError::PrecisionLoss)
    }

    /// Convert from `rust_decimal::Decimal`, normalizing the spelling.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        if d.is_zero() {
            return Self::zero();
        }
        Self::from_certified(d.normalize().to_string())
    }
}
