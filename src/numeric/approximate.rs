// ============================================================================
// Lossy Conversion
// Certified decimal string -> f64, for contexts that accept rounding
// ============================================================================

use super::grammar::is_valid;

/// Approximate a certified decimal string as an `f64`.
///
/// The integer part is accumulated by multiply-by-ten-and-add, the fraction
/// by adding each digit times a shrinking power of ten. Digits beyond the
/// `f64` mantissa are silently lost; use [`add`](super::add) for exact work.
///
/// # Panics
/// The input must satisfy the decimal grammar; checked in debug builds only.
///
/// # Example
/// ```
/// use text_decimal::numeric::to_approximate;
///
/// assert_eq!(to_approximate("-2.25"), -2.25);
/// assert_eq!(to_approximate("+10"), 10.0);
/// ```
pub fn to_approximate(value: &str) -> f64 {
    debug_assert!(is_valid(value), "to_approximate called with malformed decimal {value:?}");

    let (sign, unsigned) = match value.as_bytes().first() {
        Some(b'-') => (-1.0, &value[1..]),
        Some(b'+') => (1.0, &value[1..]),
        _ => (1.0, value),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut result = integer
        .bytes()
        .fold(0.0_f64, |acc, b| acc * 10.0 + f64::from(b - b'0'));

    let mut factor = 0.1_f64;
    for b in fraction.bytes() {
        result += f64::from(b - b'0') * factor;
        factor *= 0.1;
    }

    sign * result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact_binary_fractions() {
        assert_eq!(to_approximate("0"), 0.0);
        assert_eq!(to_approximate("1.5"), 1.5);
        assert_eq!(to_approximate("-2.25"), -2.25);
        assert_eq!(to_approximate("+10"), 10.0);
        assert_eq!(to_approximate("007"), 7.0);
    }

    #[test]
    fn test_precision_is_lost_silently() {
        let many_digits = format!("1.{}1", "0".repeat(30));
        assert_eq!(to_approximate(&many_digits), 1.0);

        let huge = "1".repeat(400);
        assert!(to_approximate(&huge).is_infinite());
    }

    #[test]
    fn test_negative_zero() {
        let value = to_approximate("-0");
        assert_eq!(value, 0.0);
        assert!(value.is_sign_negative());
    }

    proptest! {
        #[test]
        fn prop_close_to_std_parse(token in "[+-]?[0-9]{1,12}(\\.[0-9]{1,6})?") {
            let expected: f64 = token.parse().unwrap();
            let actual = to_approximate(&token);
            let tolerance = expected.abs().max(1.0) * 1e-12;
            prop_assert!((actual - expected).abs() <= tolerance, "{} vs {}", actual, expected);
        }
    }
}
