//! Integration tests for vec3d crates.
//!
//! Checks the algebraic properties of [`vec3d_math::Vector3d`] over a fixed
//! set of sample vectors, plus the end-to-end scenarios that cross the
//! `vec3d-core`/`vec3d-math` boundary.
