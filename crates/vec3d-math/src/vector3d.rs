//! 3D vector with arbitrary-precision decimal components.
//!
//! [`Vector3d`] stores `x`, `y` and `z` as [`Decimal`] values. Addition,
//! subtraction and scaling are exact; [`magnitude`](Vector3d::magnitude) and
//! [`unit`](Vector3d::unit) round through a [`MathContext`].
//!
//! Every operation comes in two flavours: a mutating one that updates the
//! receiver (`add_in_place`, `+=`) and a non-mutating one that returns a new
//! vector (`plus`, `+`).
//!
//! # Usage
//!
//! ```rust
//! use vec3d_math::{Decimal, Vector3d};
//!
//! let mut position = Vector3d::from([0, 0, 0]);
//! let velocity = Vector3d::try_new("1.5", 0, "-2").unwrap();
//! let dt = Decimal::from(2);
//!
//! position.add_scaled(&velocity, &dt);
//! assert_eq!(position, Vector3d::from([3, 0, -4]));
//! assert_eq!(position.magnitude(), Decimal::from(5));
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_traits::{ToPrimitive, Zero};
use tracing::{debug, trace};
use vec3d_core::{decimal_from_display, parse_decimal, Decimal, Error, MathContext, Result};

/// A 3D vector with arbitrary-precision decimal components.
///
/// Components are always finite decimals. Construction from text is the only
/// fallible step; all arithmetic on valid vectors is total. Text and
/// deserialized input is limited to scales within
/// [`MAX_EXPONENT`](vec3d_core::MAX_EXPONENT); [`new`](Self::new) takes
/// decimals as given.
///
/// # Comparison
///
/// `==` compares components by value, so `1.0` equals `1.00`. The ordering
/// helpers ([`less_than`](Self::less_than) and friends) are componentwise:
/// a relation holds only if it holds on every axis. Two vectors can
/// therefore be neither less, greater nor equal, which is why this type does
/// not implement [`PartialOrd`].
///
/// # Example
///
/// ```rust
/// use vec3d_math::Vector3d;
///
/// let a = Vector3d::from([1, 1, 1]);
/// let b = Vector3d::from([2, 2, 2]);
/// assert!(a.less_than(&b));
/// assert!(b.greater_or_equal(&a));
/// assert_eq!(a.plus(&b), Vector3d::from([3, 3, 3]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3d {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "vec3d_core::decimal::deserialize_bounded"))]
    x: Decimal,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "vec3d_core::decimal::deserialize_bounded"))]
    y: Decimal,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "vec3d_core::decimal::deserialize_bounded"))]
    z: Decimal,
}

impl Vector3d {
    /// Creates a vector from decimal components.
    ///
    /// No scale check is applied; decimals from [`parse_decimal`] are
    /// already bounded.
    #[inline]
    pub fn new(x: Decimal, y: Decimal, z: Decimal) -> Self {
        Self { x, y, z }
    }

    /// The zero vector (0, 0, 0).
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub fn splat(v: Decimal) -> Self {
        Self::new(v.clone(), v.clone(), v)
    }

    /// Creates a vector from anything with a numeric text form.
    ///
    /// Integers, floats and strings are formatted and parsed as decimals.
    /// Components are checked in x, y, z order; the first one that is not a
    /// number is reported as [`Error::InvalidNumericLiteral`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use vec3d_math::{Error, Vector3d};
    ///
    /// let v = Vector3d::try_new(1, 2.5, "-3").unwrap();
    /// assert_eq!(v.to_string(), "(1, 2.5, -3)");
    ///
    /// let err = Vector3d::try_new("abc", 0, 0).unwrap_err();
    /// assert!(matches!(err, Error::InvalidNumericLiteral { .. }));
    /// ```
    pub fn try_new<X, Y, Z>(x: X, y: Y, z: Z) -> Result<Self>
    where
        X: fmt::Display,
        Y: fmt::Display,
        Z: fmt::Display,
    {
        Ok(Self::new(
            decimal_from_display(x)?,
            decimal_from_display(y)?,
            decimal_from_display(z)?,
        ))
    }

    /// Creates a vector from three decimal literals.
    pub fn parse(x: &str, y: &str, z: &str) -> Result<Self> {
        Ok(Self::new(parse_decimal(x)?, parse_decimal(y)?, parse_decimal(z)?))
    }

    /// Creates a vector from floats via their shortest text form.
    ///
    /// `0.1` becomes the decimal `0.1`. `NaN` and infinities are rejected.
    pub fn from_f64_array(a: [f64; 3]) -> Result<Self> {
        Self::try_new(a[0], a[1], a[2])
    }

    /// X component.
    #[inline]
    pub fn x(&self) -> &Decimal {
        &self.x
    }

    /// Y component.
    #[inline]
    pub fn y(&self) -> &Decimal {
        &self.y
    }

    /// Z component.
    #[inline]
    pub fn z(&self) -> &Decimal {
        &self.z
    }

    /// Borrows all components as an array.
    #[inline]
    pub fn components(&self) -> [&Decimal; 3] {
        [&self.x, &self.y, &self.z]
    }

    /// Consumes the vector, returning its components.
    #[inline]
    pub fn into_components(self) -> (Decimal, Decimal, Decimal) {
        (self.x, self.y, self.z)
    }

    /// Lossy conversion to floats, `None` if a component is out of `f64` range.
    pub fn to_f64_array(&self) -> Option<[f64; 3]> {
        Some([self.x.to_f64()?, self.y.to_f64()?, self.z.to_f64()?])
    }

    /// Returns `true` if every component is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }

    /// Squared length `x² + y² + z²`, computed exactly.
    ///
    /// Prefer this over [`magnitude`](Self::magnitude) when only relative
    /// lengths matter: it needs no square root and never rounds.
    pub fn square_magnitude(&self) -> Decimal {
        &self.x * &self.x + &self.y * &self.y + &self.z * &self.z
    }

    /// Length of the vector at the process-wide precision
    /// ([`MathContext::global`], 50 digits unless `VEC3D_PRECISION` is set).
    ///
    /// # Example
    ///
    /// ```rust
    /// use vec3d_math::{Decimal, Vector3d};
    ///
    /// assert_eq!(Vector3d::from([3, 4, 0]).magnitude(), Decimal::from(5));
    /// assert_eq!(Vector3d::zero().magnitude(), Decimal::from(0));
    /// ```
    #[inline]
    pub fn magnitude(&self) -> Decimal {
        self.magnitude_with(&MathContext::global())
    }

    /// Length of the vector rounded to `ctx`'s precision.
    pub fn magnitude_with(&self, ctx: &MathContext) -> Decimal {
        ctx.sqrt(&self.square_magnitude())
            .unwrap_or_else(|_| unreachable!("sum of squares is never negative"))
    }

    /// Vector of unit length pointing the same way, at the process-wide
    /// precision ([`MathContext::global`]).
    ///
    /// Fails with [`Error::DegenerateVector`] for the zero vector.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vec3d_math::Vector3d;
    ///
    /// let u = Vector3d::from([3, 4, 0]).unit().unwrap();
    /// assert_eq!(u, Vector3d::parse("0.6", "0.8", "0").unwrap());
    /// assert!(Vector3d::zero().unit().is_err());
    /// ```
    #[inline]
    pub fn unit(&self) -> Result<Self> {
        self.unit_with(&MathContext::global())
    }

    /// Unit vector with components rounded to `ctx`'s precision.
    pub fn unit_with(&self, ctx: &MathContext) -> Result<Self> {
        let m = self.magnitude_with(ctx);
        if m.is_zero() {
            debug!("refusing to normalise zero-length vector");
            return Err(Error::DegenerateVector);
        }
        trace!(precision = ctx.precision(), magnitude = %m, "unit");
        Ok(Self::new(
            ctx.div(&self.x, &m)?,
            ctx.div(&self.y, &m)?,
            ctx.div(&self.z, &m)?,
        ))
    }

    /// `true` if every component is strictly less than `other`'s.
    #[inline]
    pub fn less_than(&self, other: &Self) -> bool {
        self.x < other.x && self.y < other.y && self.z < other.z
    }

    /// `true` if every component is strictly greater than `other`'s.
    #[inline]
    pub fn greater_than(&self, other: &Self) -> bool {
        self.x > other.x && self.y > other.y && self.z > other.z
    }

    /// `true` if every component is less than or equal to `other`'s.
    #[inline]
    pub fn less_or_equal(&self, other: &Self) -> bool {
        self.x <= other.x && self.y <= other.y && self.z <= other.z
    }

    /// `true` if every component is greater than or equal to `other`'s.
    #[inline]
    pub fn greater_or_equal(&self, other: &Self) -> bool {
        self.x >= other.x && self.y >= other.y && self.z >= other.z
    }

    /// Multiplies every component by `scalar`.
    pub fn scale_in_place(&mut self, scalar: &Decimal) {
        self.x = &self.x * scalar;
        self.y = &self.y * scalar;
        self.z = &self.z * scalar;
    }

    /// Returns a copy scaled by `scalar`.
    pub fn scaled(&self, scalar: &Decimal) -> Self {
        Self::new(&self.x * scalar, &self.y * scalar, &self.z * scalar)
    }

    /// Adds `other` to this vector.
    pub fn add_in_place(&mut self, other: &Self) {
        self.x += &other.x;
        self.y += &other.y;
        self.z += &other.z;
    }

    /// Returns the componentwise sum.
    pub fn plus(&self, other: &Self) -> Self {
        Self::new(&self.x + &other.x, &self.y + &other.y, &self.z + &other.z)
    }

    /// Subtracts `other` from this vector.
    pub fn subtract_in_place(&mut self, other: &Self) {
        self.x -= &other.x;
        self.y -= &other.y;
        self.z -= &other.z;
    }

    /// Returns the componentwise difference.
    pub fn minus(&self, other: &Self) -> Self {
        Self::new(&self.x - &other.x, &self.y - &other.y, &self.z - &other.z)
    }

    /// Adds `other * scalar` to this vector.
    ///
    /// The usual integrator step, `position += velocity * dt`, without
    /// allocating a temporary vector.
    pub fn add_scaled(&mut self, other: &Self, scalar: &Decimal) {
        self.x += &other.x * scalar;
        self.y += &other.y * scalar;
        self.z += &other.z * scalar;
    }
}

// Indexing
impl Index<usize> for Vector3d {
    type Output = Decimal;

    #[inline]
    fn index(&self, i: usize) -> &Decimal {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3d index out of bounds: {}", i),
        }
    }
}

// Vector + Vector, Vector - Vector for every owned/borrowed pairing
macro_rules! impl_vector_binop {
    ($trait:ident, $fn:ident, $method:ident) => {
        impl $trait<&Vector3d> for &Vector3d {
            type Output = Vector3d;

            #[inline]
            fn $fn(self, rhs: &Vector3d) -> Vector3d {
                self.$method(rhs)
            }
        }

        impl $trait<Vector3d> for &Vector3d {
            type Output = Vector3d;

            #[inline]
            fn $fn(self, rhs: Vector3d) -> Vector3d {
                self.$method(&rhs)
            }
        }

        impl $trait<&Vector3d> for Vector3d {
            type Output = Vector3d;

            #[inline]
            fn $fn(self, rhs: &Vector3d) -> Vector3d {
                self.$method(rhs)
            }
        }

        impl $trait<Vector3d> for Vector3d {
            type Output = Vector3d;

            #[inline]
            fn $fn(self, rhs: Vector3d) -> Vector3d {
                self.$method(&rhs)
            }
        }
    };
}

impl_vector_binop!(Add, add, plus);
impl_vector_binop!(Sub, sub, minus);

// Vector += Vector, Vector -= Vector
macro_rules! impl_vector_assign {
    ($trait:ident, $fn:ident, $method:ident) => {
        impl $trait<&Vector3d> for Vector3d {
            #[inline]
            fn $fn(&mut self, rhs: &Vector3d) {
                self.$method(rhs);
            }
        }

        impl $trait<Vector3d> for Vector3d {
            #[inline]
            fn $fn(&mut self, rhs: Vector3d) {
                self.$method(&rhs);
            }
        }
    };
}

impl_vector_assign!(AddAssign, add_assign, add_in_place);
impl_vector_assign!(SubAssign, sub_assign, subtract_in_place);

// Vector * Decimal
impl Mul<&Decimal> for &Vector3d {
    type Output = Vector3d;

    #[inline]
    fn mul(self, rhs: &Decimal) -> Vector3d {
        self.scaled(rhs)
    }
}

impl Mul<Decimal> for &Vector3d {
    type Output = Vector3d;

    #[inline]
    fn mul(self, rhs: Decimal) -> Vector3d {
        self.scaled(&rhs)
    }
}

impl Mul<&Decimal> for Vector3d {
    type Output = Vector3d;

    #[inline]
    fn mul(mut self, rhs: &Decimal) -> Vector3d {
        self.scale_in_place(rhs);
        self
    }
}

impl Mul<Decimal> for Vector3d {
    type Output = Vector3d;

    #[inline]
    fn mul(mut self, rhs: Decimal) -> Vector3d {
        self.scale_in_place(&rhs);
        self
    }
}

// Vector *= Decimal
impl MulAssign<&Decimal> for Vector3d {
    #[inline]
    fn mul_assign(&mut self, rhs: &Decimal) {
        self.scale_in_place(rhs);
    }
}

impl MulAssign<Decimal> for Vector3d {
    #[inline]
    fn mul_assign(&mut self, rhs: Decimal) {
        self.scale_in_place(&rhs);
    }
}

// -Vector
impl Neg for Vector3d {
    type Output = Vector3d;

    #[inline]
    fn neg(self) -> Vector3d {
        Vector3d::new(-self.x, -self.y, -self.z)
    }
}

impl Neg for &Vector3d {
    type Output = Vector3d;

    #[inline]
    fn neg(self) -> Vector3d {
        Vector3d::new(-&self.x, -&self.y, -&self.z)
    }
}

impl<T: Into<Decimal>> From<[T; 3]> for Vector3d {
    #[inline]
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x.into(), y.into(), z.into())
    }
}

impl<T: Into<Decimal>> From<(T, T, T)> for Vector3d {
    #[inline]
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x.into(), y.into(), z.into())
    }
}

impl From<Vector3d> for (Decimal, Decimal, Decimal) {
    #[inline]
    fn from(v: Vector3d) -> Self {
        v.into_components()
    }
}

impl fmt::Display for Vector3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Parses `x, y, z`, optionally wrapped in `()` or `[]`.
///
/// This is the inverse of the [`Display`](fmt::Display) impl.
impl FromStr for Vector3d {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|t| t.strip_suffix(')'))
            .or_else(|| trimmed.strip_prefix('[').and_then(|t| t.strip_suffix(']')))
            .unwrap_or(trimmed);

        if inner.trim().is_empty() {
            return Err(Error::invalid_vector_literal(s, 0));
        }
        let parts: Vec<&str> = inner.split(',').collect();
        match parts.as_slice() {
            [x, y, z] => Self::parse(x, y, z),
            _ => Err(Error::invalid_vector_literal(s, parts.len())),
        }
    }
}
