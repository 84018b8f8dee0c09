//! The core 3D vector type.
//!
//! [`Vector3d`] is a free vector in 3-space: three `f64` components with no
//! attached position. All triples are valid, including the zero vector;
//! magnitude-dependent operations on the zero vector produce NaN (see
//! [`unit_vector`](Vector3d::unit_vector) and
//! [`angle_between`](Vector3d::angle_between)) rather than errors.
//!
//! # Construction
//!
//! ```
//! use spatial_core::{CoordPoint, Vector3d};
//!
//! // Direct construction
//! let v = Vector3d::new(1.0, 2.0, 3.0);
//!
//! // Unit vectors along axes
//! let x = Vector3d::x_axis();
//!
//! // From an array
//! let v = Vector3d::from_array([1.0, 2.0, 3.0]);
//!
//! // From text in the default `{x,y,z}` form (lenient: a string without
//! // the delimiters yields the zero vector)
//! let v = Vector3d::from_text("{1,2,3}").unwrap();
//! assert_eq!(v, Vector3d::new(1.0, 2.0, 3.0));
//!
//! // From a 3-dimensional point's coordinates
//! let p = CoordPoint::new(vec![4.0, 5.0, 6.0]);
//! let v = Vector3d::from_point(&p);
//! ```
//!
//! # Dot and Cross Products
//!
//! ```
//! use spatial_core::Vector3d;
//!
//! let a = Vector3d::x_axis();
//! let b = Vector3d::y_axis();
//!
//! // Perpendicular: dot product is zero
//! assert_eq!(a.dot(&b), 0.0);
//! assert!(a.is_perpendicular_to(&b));
//!
//! // Cross product gives +Z axis (right-hand rule)
//! assert_eq!(a.cross(&b), Vector3d::z_axis());
//! ```
//!
//! # Scaling
//!
//! Scalars are integral by contract. The primary form returns a new vector;
//! [`scale_in_place`](Vector3d::scale_in_place) (also spelled `*=`) mutates
//! the receiver for callers that need by-reference semantics.
//!
//! ```
//! use spatial_core::Vector3d;
//!
//! let v = Vector3d::new(1.0, 2.0, 3.0);
//! assert_eq!(v.scale(2), Vector3d::new(2.0, 4.0, 6.0));
//!
//! let mut w = v;
//! w *= -1;
//! assert_eq!(w, Vector3d::new(-1.0, -2.0, -3.0));
//! ```

use crate::constants::RAD_TO_DEG;
use crate::math::clamp_unit;
use crate::point::Point;
use crate::vector::format::VectorFormat;
use crate::vector::parse::parse_vector;
use crate::{VectorError, VectorResult};

/// A free vector in 3-space.
///
/// # Fields
///
/// Components are public for direct access:
/// - `x`: first component
/// - `y`: second component
/// - `z`: third component
///
/// # Derives
///
/// - `Copy`, `Clone`: vectors are small (24 bytes) and cheap to copy
/// - `Debug`: shows component values
/// - `PartialEq`: exact component-wise comparison
/// - `Default`: the zero vector
///
/// Note: `Eq` and `Ord` are not implemented because f64 can be NaN; ordering
/// by magnitude is provided by the explicit
/// [`magnitude_cmp`](Self::magnitude_cmp) comparator instead.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3d {
    /// The zero vector `[0, 0, 0]`.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a new vector from x, y, z components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the zero vector `[0, 0, 0]`.
    #[inline]
    pub fn zeros() -> Self {
        Self::ZERO
    }

    /// Returns the unit vector along the X axis `[1, 0, 0]`.
    #[inline]
    pub fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Returns the unit vector along the Y axis `[0, 1, 0]`.
    #[inline]
    pub fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Returns the unit vector along the Z axis `[0, 0, 1]`.
    #[inline]
    pub fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Creates a vector from a `[f64; 3]` array.
    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Returns the components as a `[f64; 3]` array.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates a vector from text in the default `{x,y,z}` form.
    ///
    /// This is the lenient entry point: a string that does not match the
    /// outer delimiter shape yields the zero vector rather than an error.
    /// A string with the right shape but a non-integer field still fails —
    /// that error is propagated, never swallowed. Callers needing to
    /// distinguish "no vector" from "zero vector" should use
    /// [`parse_vector`] or [`VectorFormat::parse`] directly.
    ///
    /// ```
    /// use spatial_core::Vector3d;
    ///
    /// assert_eq!(Vector3d::from_text("{1,2,3}").unwrap(), Vector3d::new(1.0, 2.0, 3.0));
    /// assert_eq!(Vector3d::from_text("not-a-vector").unwrap(), Vector3d::ZERO);
    /// assert!(Vector3d::from_text("{1,x,3}").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidComponent`] if a delimited field is not
    /// a valid integer literal, or [`VectorError::ComponentCount`] if the
    /// delimited form held fewer than three fields.
    pub fn from_text(s: &str) -> VectorResult<Self> {
        Ok(parse_vector(s, &VectorFormat::default())?.unwrap_or(Self::ZERO))
    }

    /// Creates a vector from the first three coordinates of a point.
    ///
    /// If the point's dimension is anything other than 3, the result is the
    /// zero vector. This dimension-mismatch defaulting is part of the
    /// contract: conversion never fails observably.
    ///
    /// ```
    /// use spatial_core::{CoordPoint, Vector3d};
    ///
    /// let p2 = CoordPoint::new(vec![1.0, 2.0]);
    /// assert_eq!(Vector3d::from_point(&p2), Vector3d::ZERO);
    /// ```
    pub fn from_point(point: &impl Point) -> Self {
        if point.dimension() == 3 {
            let coords = point.coordinates();
            Self::new(coords[0], coords[1], coords[2])
        } else {
            Self::ZERO
        }
    }

    /// Returns the component at the given index (0=x, 1=y, 2=z).
    ///
    /// Returns an error for indices outside 0-2. For unchecked access, use
    /// indexing syntax `v[i]` or the public fields directly.
    pub fn get(&self, index: usize) -> VectorResult<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(VectorError::index_out_of_bounds(index)),
        }
    }

    /// Sets the component at the given index (0=x, 1=y, 2=z).
    ///
    /// Returns an error for indices outside 0-2. For unchecked access, use
    /// indexing syntax `v[i] = value` or the public fields directly.
    pub fn set(&mut self, index: usize, value: f64) -> VectorResult<()> {
        match index {
            0 => {
                self.x = value;
                Ok(())
            }
            1 => {
                self.y = value;
                Ok(())
            }
            2 => {
                self.z = value;
                Ok(())
            }
            _ => Err(VectorError::index_out_of_bounds(index)),
        }
    }

    /// Returns the Euclidean length (L2 norm) of the vector.
    ///
    /// Always non-negative; zero only for the zero vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Returns the squared magnitude.
    ///
    /// Faster than [`magnitude`](Self::magnitude) when you only need to
    /// compare lengths.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns the unit vector pointing in the same direction.
    ///
    /// For the zero vector this divides by zero and produces a vector of
    /// NaNs per IEEE-754. That is the defined degenerate output, not an
    /// error; it is deliberately not special-cased.
    ///
    /// ```
    /// use spatial_core::Vector3d;
    ///
    /// let v = Vector3d::new(3.0, 4.0, 0.0);
    /// let unit = v.unit_vector();
    /// assert_eq!(unit, Vector3d::new(0.6, 0.8, 0.0));
    ///
    /// assert!(Vector3d::ZERO.unit_vector().x.is_nan());
    /// ```
    pub fn unit_vector(&self) -> Self {
        let mag = self.magnitude();
        Self::new(self.x / mag, self.y / mag, self.z / mag)
    }

    /// Returns this vector scaled by an integer factor.
    ///
    /// The scalar is integral by contract; this is not general real scaling.
    #[inline]
    pub fn scale(self, scalar: i64) -> Self {
        let k = scalar as f64;
        Self::new(self.x * k, self.y * k, self.z * k)
    }

    /// Multiplies every component by an integer scalar, in place.
    ///
    /// The one mutating operation on the type. Equivalent to `*= scalar`.
    /// Prefer [`scale`](Self::scale) unless by-reference mutation semantics
    /// are required.
    #[inline]
    pub fn scale_in_place(&mut self, scalar: i64) {
        let k = scalar as f64;
        self.x *= k;
        self.y *= k;
        self.z *= k;
    }

    /// Computes the dot product (inner product) with another vector.
    ///
    /// ```
    /// use spatial_core::Vector3d;
    ///
    /// let a = Vector3d::new(1.0, 2.0, 3.0);
    /// let b = Vector3d::new(4.0, 5.0, 6.0);
    /// assert_eq!(a.dot(&b), 32.0);  // 1*4 + 2*5 + 3*6
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product with another vector.
    ///
    /// The result is perpendicular to both operands, with direction given by
    /// the right-hand rule.
    ///
    /// ```
    /// use spatial_core::Vector3d;
    ///
    /// let x = Vector3d::x_axis();
    /// let y = Vector3d::y_axis();
    /// assert_eq!(x.cross(&y), Vector3d::z_axis());  // X × Y = Z
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns the angle between this vector and another, in degrees.
    ///
    /// Computed as `acos(dot / (|a|·|b|))`. The ratio is clamped to the
    /// `acos` domain [-1, 1] so that floating error on parallel vectors
    /// cannot push the result to NaN. If either operand has zero magnitude
    /// the ratio is 0/0 and the result is NaN — the defined degenerate
    /// output for that case.
    ///
    /// ```
    /// use spatial_core::Vector3d;
    ///
    /// let a = Vector3d::x_axis();
    /// let b = Vector3d::y_axis();
    /// assert!((a.angle_between(&b) - 90.0).abs() < 1e-12);
    ///
    /// assert!(Vector3d::ZERO.angle_between(&a).is_nan());
    /// ```
    pub fn angle_between(&self, other: &Self) -> f64 {
        let ratio = self.dot(other) / (self.magnitude() * other.magnitude());
        libm::acos(clamp_unit(ratio)) * RAD_TO_DEG
    }

    /// Returns `true` if the two vectors are perpendicular.
    ///
    /// Uses exact floating equality (`dot == 0.0`), no epsilon tolerance.
    /// Components that merely *nearly* cancel do not count:
    ///
    /// ```
    /// use spatial_core::Vector3d;
    ///
    /// let a = Vector3d::x_axis();
    /// assert!(a.is_perpendicular_to(&Vector3d::y_axis()));
    /// assert!(!a.is_perpendicular_to(&a));
    /// ```
    #[inline]
    pub fn is_perpendicular_to(&self, other: &Self) -> bool {
        self.dot(other) == 0.0
    }

    /// Compares two vectors by magnitude at unit granularity.
    ///
    /// See [`magnitude_cmp`](crate::vector::magnitude_cmp) for the contract.
    #[inline]
    pub fn magnitude_cmp(&self, other: &Self) -> std::cmp::Ordering {
        crate::vector::compare::magnitude_cmp(self, other)
    }
}
