//! # vec3d-math
//!
//! A 3D vector value type with arbitrary-precision decimal components.
//!
//! - [`Vector3d`] - x/y/z vector with exact add, subtract and scale
//!
//! # Design
//!
//! Components are [`Decimal`] values rather than floats. Arithmetic that can
//! be exact is exact; square roots and division round through a
//! [`MathContext`]. Each operation is exposed twice:
//!
//! ```text
//! mutating        non-mutating
//! scale_in_place  scaled     (*=, *)
//! add_in_place    plus       (+=, +)
//! subtract_in_place minus    (-=, -)
//! add_scaled
//! ```
//!
//! # Usage
//!
//! ```rust
//! use vec3d_math::{Decimal, Vector3d};
//!
//! let a = Vector3d::from([1, 2, 3]);
//! let b = Vector3d::from([4, 5, 6]);
//! assert_eq!(a.plus(&b), Vector3d::from([5, 7, 9]));
//! assert_eq!(&a * &Decimal::from(2), Vector3d::from([2, 4, 6]));
//! ```
//!
//! # Dependencies
//!
//! - `vec3d-core` - Decimal scalar (`bigdecimal`), precision context and errors

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod vector3d;

pub use vector3d::*;

pub use vec3d_core::{Decimal, Error, MathContext, Result};
