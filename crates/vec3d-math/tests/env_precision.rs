//! `VEC3D_PRECISION` drives the precision of `magnitude` and `unit`.
//!
//! Lives in its own test binary: the global context is resolved once per
//! process, so the variable must be set before anything else touches it.

use vec3d_math::{Decimal, MathContext, Vector3d};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn test_env_precision_applies_to_magnitude_and_unit() {
    // SAFETY: single test in this binary, run before any other env access
    unsafe { std::env::set_var(vec3d_core::PRECISION_ENV, "5") };

    assert_eq!(MathContext::global().precision(), 5);

    let v = Vector3d::from([1, 1, 0]);
    assert_eq!(v.magnitude(), dec("1.4142"));
    assert_eq!(v.unit().unwrap(), Vector3d::new(dec("0.70711"), dec("0.70711"), dec("0")));

    // resolved once; later changes are ignored
    unsafe { std::env::set_var(vec3d_core::PRECISION_ENV, "20") };
    assert_eq!(MathContext::global().precision(), 5);
}
