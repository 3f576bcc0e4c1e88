// ============================================================================
// Decimal Addition
// Exact signed addition of two certified decimal strings
// ============================================================================

use super::digits::{strip_leading_zeros, unsigned_add, unsigned_cmp, unsigned_sub};
use super::grammar::is_valid;
use std::cmp::Ordering;

/// A certified decimal split into sign, integer digits and fraction digits.
///
/// Borrowed from the caller's string for the duration of one call.
struct Operand<'a> {
    negative: bool,
    integer: &'a str,
    fraction: &'a str,
}

impl<'a> Operand<'a> {
    fn split(s: &'a str) -> Self {
        let (negative, unsigned) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "0"));
        Self {
            negative,
            integer,
            fraction,
        }
    }

    /// Integer and fraction digits concatenated, fraction right-padded to
    /// `scale` digits, leading zeros stripped.
    fn scaled(&self, scale: usize) -> String {
        let mut digits = String::with_capacity(self.integer.len() + scale);
        digits.push_str(strip_leading_zeros(self.integer));
        digits.push_str(self.fraction);
        digits.extend(std::iter::repeat('0').take(scale - self.fraction.len()));
        strip_leading_zeros(&digits).to_string()
    }
}

/// Add two certified decimal strings exactly.
///
/// The result is normalized: no trailing zeros in the fraction, no point
/// when the fraction is empty, no superfluous leading zeros, and `"0"`
/// (never `"-0"`) for a zero sum. The output always satisfies
/// [`is_valid`](super::is_valid).
///
/// # Panics
/// Both inputs must satisfy the decimal grammar. This is a caller contract,
/// checked only in debug builds; in release builds the output for malformed
/// input is unspecified.
///
/// # Example
/// ```
/// use text_decimal::numeric::add;
///
/// assert_eq!(add("1.2", "0.03"), "1.23");
/// assert_eq!(add("10", "-3.5"), "6.5");
/// assert_eq!(add("5", "-5"), "0");
/// ```
pub fn add(a: &str, b: &str) -> String {
    debug_assert!(is_valid(a), "add called with malformed decimal {a:?}");
    debug_assert!(is_valid(b), "add called with malformed decimal {b:?}");

    let lhs = Operand::split(a);
    let rhs = Operand::split(b);

    let scale = lhs.fraction.len().max(rhs.fraction.len());
    let lhs_digits = lhs.scaled(scale);
    let rhs_digits = rhs.scaled(scale);

    let (magnitude, negative) = if lhs.negative == rhs.negative {
        (unsigned_add(&lhs_digits, &rhs_digits), lhs.negative)
    } else {
        match unsigned_cmp(&lhs_digits, &rhs_digits) {
            Ordering::Equal => return "0".to_string(),
            Ordering::Greater => (unsigned_sub(&lhs_digits, &rhs_digits), lhs.negative),
            Ordering::Less => (unsigned_sub(&rhs_digits, &lhs_digits), rhs.negative),
        }
    };

    render(&magnitude, scale, negative)
}

/// Re-insert the point `scale` digits from the right and normalize.
fn render(magnitude: &str, scale: usize, negative: bool) -> String {
    let padding = (scale + 1).saturating_sub(magnitude.len());
    let mut padded = String::with_capacity(magnitude.len() + padding);
    padded.extend(std::iter::repeat('0').take(padding));
    padded.push_str(magnitude);

    let (integer, fraction) = padded.split_at(padded.len() - scale);
    let integer = strip_leading_zeros(integer);
    let fraction = fraction.trim_end_matches('0');

    if integer == "0" && fraction.is_empty() {
        return "0".to_string();
    }

    let mut out = String::with_capacity(integer.len() + fraction.len() + 2);
    if negative {
        out.push('-');
    }
    out.push_str(integer);
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}
