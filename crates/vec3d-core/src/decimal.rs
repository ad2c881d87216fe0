//! Decimal scalar type and literal parsing.
//!
//! Components are stored as [`Decimal`], an arbitrary-precision decimal
//! backed by [`bigdecimal::BigDecimal`]. Addition, subtraction and
//! multiplication on it are exact; only square roots and division need a
//! [`MathContext`](crate::MathContext) to bound the number of digits.
//!
//! Literals are limited to scales within [`MAX_EXPONENT`] of zero. Scales
//! add under multiplication and must be aligned under addition, so an
//! unbounded exponent would overflow or explode later arithmetic.
//!
//! Every value reaches its decimal form through text: integers, floats and
//! strings are all formatted and then parsed. This keeps `0.1_f64` as the
//! decimal `0.1` rather than its binary expansion.
//!
//! # Usage
//!
//! ```rust
//! use vec3d_core::{decimal_from_display, parse_decimal, Decimal};
//!
//! let a = parse_decimal("-1.5e3").unwrap();
//! assert_eq!(a, Decimal::from(-1500));
//!
//! let b = decimal_from_display(0.1_f64).unwrap();
//! assert_eq!(b, parse_decimal("0.1").unwrap());
//! ```

use std::fmt::Display;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};

/// Arbitrary-precision decimal scalar.
pub type Decimal = bigdecimal::BigDecimal;

/// Largest accepted decimal scale magnitude.
///
/// `1e10000` and `1e-10000` parse; `1e10001` does not. Squaring and summing
/// values at the bound stays within a few tens of thousands of digits.
pub const MAX_EXPONENT: u64 = 10_000;

/// Returns `true` if `value`'s scale is within [`MAX_EXPONENT`].
#[inline]
pub fn is_within_bounds(value: &Decimal) -> bool {
    value.as_bigint_and_exponent().1.unsigned_abs() <= MAX_EXPONENT
}

/// Parses a decimal literal.
///
/// Surrounding whitespace is ignored. Sign, fraction and exponent are
/// accepted. Anything else (including `NaN` and `inf`) fails with
/// [`Error::InvalidNumericLiteral`], as do numbers whose scale is beyond
/// [`MAX_EXPONENT`].
pub fn parse_decimal(literal: &str) -> Result<Decimal> {
    let trimmed = literal.trim();
    if trimmed.is_empty() {
        debug!(literal, "rejecting empty numeric literal");
        return Err(Error::invalid_literal(literal));
    }
    let value = Decimal::from_str(trimmed).map_err(|e| {
        debug!(literal, error = %e, "rejecting numeric literal");
        Error::invalid_literal(literal)
    })?;
    if !is_within_bounds(&value) {
        debug!(literal, max = MAX_EXPONENT, "rejecting out-of-range exponent");
        return Err(Error::invalid_literal(literal));
    }
    Ok(value)
}

/// Converts any displayable value to a [`Decimal`] through its text form.
///
/// Works for integers, floats and strings alike. Floats that are not
/// finite render as `NaN`/`inf` and are rejected.
#[inline]
pub fn decimal_from_display<T: Display>(value: T) -> Result<Decimal> {
    parse_decimal(&value.to_string())
}

/// Deserializes a [`Decimal`], rejecting scales beyond [`MAX_EXPONENT`].
///
/// For use with `#[serde(deserialize_with = ...)]`.
#[cfg(feature = "serde")]
pub fn deserialize_bounded<'de, D>(deserializer: D) -> std::result::Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = <Decimal as serde::Deserialize>::deserialize(deserializer)?;
    if is_within_bounds(&value) {
        Ok(value)
    } else {
        Err(serde::de::Error::custom(Error::invalid_literal(value.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_decimal("42").unwrap(), Decimal::from(42));
        assert_eq!(parse_decimal("-7").unwrap(), Decimal::from(-7));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_decimal("  3 ").unwrap(), Decimal::from(3));
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(parse_decimal("2.5e2").unwrap(), Decimal::from(250));
    }

    #[test]
    fn test_parse_equal_by_value() {
        assert_eq!(parse_decimal("1.0").unwrap(), parse_decimal("1.000").unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["abc", "", "   ", "1.2.3", "NaN", "inf", "12a"] {
            let err = parse_decimal(bad).unwrap_err();
            assert_eq!(err, Error::invalid_literal(bad), "literal {bad:?}");
        }
    }

    #[test]
    fn test_parse_exponent_bounds() {
        assert!(parse_decimal("1e10000").is_ok());
        assert!(parse_decimal("-1e-10000").is_ok());
        for bad in ["1e10001", "1e-10001", "1e-5000000000000000000", "7E9223372036854775807"] {
            let err = parse_decimal(bad).unwrap_err();
            assert_eq!(err, Error::invalid_literal(bad), "literal {bad:?}");
        }
    }

    #[test]
    fn test_parse_long_fraction_counts_as_scale() {
        let ok = format!("0.{}1", "0".repeat(9_998));
        assert!(parse_decimal(&ok).is_ok());
        let too_long = format!("0.{}1", "0".repeat(10_000));
        assert!(parse_decimal(&too_long).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_bounded() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            #[serde(deserialize_with = "deserialize_bounded")]
            value: Decimal,
        }

        let ok: Wrapper = serde_json::from_str(r#"{"value":"2.5"}"#).unwrap();
        assert_eq!(ok.value, parse_decimal("2.5").unwrap());
        assert!(serde_json::from_str::<Wrapper>(r#"{"value":"1e-99999"}"#).is_err());
    }

    #[test]
    fn test_from_display_float_is_decimal() {
        let d = decimal_from_display(0.1_f64).unwrap();
        assert_eq!(d, parse_decimal("0.1").unwrap());
    }

    #[test]
    fn test_from_display_non_finite() {
        assert!(decimal_from_display(f64::NAN).is_err());
        assert!(decimal_from_display(f64::INFINITY).is_err());
        assert!(decimal_from_display(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_from_display_integer_and_str() {
        assert_eq!(decimal_from_display(17_u8).unwrap(), Decimal::from(17));
        assert_eq!(decimal_from_display("-0.25").unwrap(), parse_decimal("-0.25").unwrap());
    }
}
