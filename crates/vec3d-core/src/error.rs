//! Error types for vec3d operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers every failure mode in the workspace:
//! - Construction from text that is not a decimal number
//! - Parsing a vector literal with the wrong number of components
//! - Normalising a zero-length vector
//! - Context helpers fed a negative radicand or a zero divisor
//!
//! Arithmetic on already-valid vectors never fails.
//!
//! # Usage
//!
//! ```rust
//! use vec3d_core::{parse_decimal, Error};
//!
//! let err = parse_decimal("abc").unwrap_err();
//! assert!(matches!(err, Error::InvalidNumericLiteral { .. }));
//! assert!(err.is_literal_error());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by vec3d operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A component could not be interpreted as a decimal number.
    ///
    /// Raised at construction time. The offending text is kept verbatim.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vec3d_core::Error;
    ///
    /// let err = Error::invalid_literal("abc");
    /// assert!(err.to_string().contains("abc"));
    /// ```
    #[error("invalid numeric literal: {literal:?}")]
    InvalidNumericLiteral {
        /// Text that failed to parse
        literal: String,
    },

    /// A vector literal did not contain exactly three components.
    #[error("invalid vector literal {literal:?}: expected 3 components, found {found}")]
    InvalidVectorLiteral {
        /// Text that failed to parse
        literal: String,
        /// Number of components found
        found: usize,
    },

    /// Attempted to normalise a vector of zero length.
    #[error("cannot normalise a zero-length vector")]
    DegenerateVector,

    /// Square root of a negative value was requested.
    #[error("square root of negative value {value}")]
    NegativeRadicand {
        /// The negative input, rendered as text
        value: String,
    },

    /// Division by zero was requested.
    #[error("division by zero")]
    DivisionByZero,
}

impl Error {
    /// Creates an [`Error::InvalidNumericLiteral`] error.
    #[inline]
    pub fn invalid_literal(literal: impl Into<String>) -> Self {
        Self::InvalidNumericLiteral {
            literal: literal.into(),
        }
    }

    /// Creates an [`Error::InvalidVectorLiteral`] error.
    #[inline]
    pub fn invalid_vector_literal(literal: impl Into<String>, found: usize) -> Self {
        Self::InvalidVectorLiteral {
            literal: literal.into(),
            found,
        }
    }

    /// Returns `true` if this error came from parsing text.
    #[inline]
    pub fn is_literal_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidNumericLiteral { .. } | Self::InvalidVectorLiteral { .. }
        )
    }

    /// Returns `true` if this is a [`Error::DegenerateVector`] error.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateVector)
    }
}
