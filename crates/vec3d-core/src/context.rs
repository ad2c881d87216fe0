//! Precision context for inexact decimal operations.
//!
//! Addition, subtraction and multiplication of [`Decimal`] values are exact.
//! Square roots and quotients are not, so they are rounded to a fixed
//! number of significant digits held by a [`MathContext`].
//!
//! # Environment
//!
//! | Variable          | Effect                                            |
//! |-------------------|---------------------------------------------------|
//! | `VEC3D_PRECISION` | Significant digits used by [`MathContext::from_env`] |
//!
//! [`MathContext::global`] reads the variable once per process; later
//! changes are not seen.
//!
//! # Usage
//!
//! ```rust
//! use vec3d_core::{Decimal, MathContext};
//!
//! let ctx = MathContext::new(10);
//! let root = ctx.sqrt(&Decimal::from(2)).unwrap();
//! assert_eq!(root.to_string(), "1.414213562");
//! ```

use std::env;
use std::sync::OnceLock;

use num_traits::{Signed, Zero};
use tracing::debug;

use crate::decimal::Decimal;
use crate::error::{Error, Result};

/// Significant digits used when no precision is given.
pub const DEFAULT_PRECISION: u64 = 50;

/// Upper bound on precision.
///
/// `bigdecimal` computes square roots and quotients with 100 significant
/// digits; asking for more would only pad with noise.
pub const MAX_PRECISION: u64 = 100;

/// Environment variable read by [`MathContext::from_env`].
pub const PRECISION_ENV: &str = "VEC3D_PRECISION";

static GLOBAL: OnceLock<MathContext> = OnceLock::new();

/// Rounding settings for inexact decimal operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MathContext {
    precision: u64,
}

impl Default for MathContext {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl MathContext {
    /// Creates a context keeping `precision` significant digits.
    ///
    /// Values outside `1..=MAX_PRECISION` are clamped.
    #[inline]
    pub fn new(precision: u64) -> Self {
        Self {
            precision: precision.clamp(1, MAX_PRECISION),
        }
    }

    /// Creates a context from `VEC3D_PRECISION`, or the default if the
    /// variable is unset or invalid.
    pub fn from_env() -> Self {
        let raw = env::var(PRECISION_ENV).ok();
        match parse_precision(raw.as_deref()) {
            Some(precision) => Self { precision },
            None => {
                if let Some(raw) = raw {
                    debug!(var = PRECISION_ENV, value = %raw, "ignoring invalid precision override");
                }
                Self::default()
            }
        }
    }

    /// Process-wide context, resolved from the environment on first use.
    ///
    /// Operations without an explicit context (`magnitude`, `unit`) use this.
    pub fn global() -> Self {
        *GLOBAL.get_or_init(|| {
            let ctx = Self::from_env();
            debug!(precision = ctx.precision, "resolved global math context");
            ctx
        })
    }

    /// Number of significant digits kept.
    #[inline]
    pub fn precision(&self) -> u64 {
        self.precision
    }

    /// Rounds `value` to this context's precision.
    #[inline]
    pub fn round(&self, value: &Decimal) -> Decimal {
        value.with_prec(self.precision)
    }

    /// Square root rounded to this context's precision.
    ///
    /// Zero maps to zero. Negative input fails with
    /// [`Error::NegativeRadicand`].
    pub fn sqrt(&self, value: &Decimal) -> Result<Decimal> {
        if value.is_zero() {
            return Ok(Decimal::zero());
        }
        if value.is_negative() {
            return Err(Error::NegativeRadicand {
                value: value.to_string(),
            });
        }
        value
            .sqrt()
            .map(|root| self.round(&root))
            .ok_or_else(|| Error::NegativeRadicand {
                value: value.to_string(),
            })
    }

    /// Quotient `num / den` rounded to this context's precision.
    ///
    /// Fails with [`Error::DivisionByZero`] when `den` is zero.
    pub fn div(&self, num: &Decimal, den: &Decimal) -> Result<Decimal> {
        if den.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(self.round(&(num / den)))
    }
}

/// Validates a raw precision override.
fn parse_precision(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|v| v.trim().parse().ok())
        .filter(|&p| (1..=MAX_PRECISION).contains(&p))
}
