//! # vec3d-core
//!
//! Core types for the vec3d workspace.
//!
//! This crate provides the scalar layer that [`vec3d-math`] builds on:
//!
//! - [`Decimal`] - Arbitrary-precision decimal scalar
//! - [`parse_decimal`], [`decimal_from_display`] - Literal parsing
//! - [`MathContext`] - Precision for square roots and division
//! - [`Error`], [`Result`] - Unified error handling
//!
//! ## Crate Structure
//!
//! ```text
//! vec3d-core (this crate)
//!    ^
//!    |
//!    +-- vec3d-math (Vector3d)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for [`MathContext`] and decimal values
//!
//! [`vec3d-math`]: https://docs.rs/vec3d-math

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod context;
pub mod decimal;
pub mod error;

pub use context::{MathContext, DEFAULT_PRECISION, MAX_PRECISION, PRECISION_ENV};
pub use decimal::{decimal_from_display, is_within_bounds, parse_decimal, Decimal, MAX_EXPONENT};
pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// ```
/// use vec3d_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::context::MathContext;
    pub use crate::decimal::{decimal_from_display, parse_decimal, Decimal};
    pub use crate::error::{Error, Result};
}
