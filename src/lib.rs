//! Elementary 3D vector algebra with a configurable text format.
//!
//! `spatial-core` provides [`Vector3d`], a free vector in 3-space supporting
//! magnitude, unit-vector normalization, integer scaling, dot and cross
//! products, angle measurement, perpendicularity testing, coarse ordering by
//! magnitude, and delimited textual parsing/formatting.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`vector`] | [`Vector3d`], operators, [`VectorFormat`], parsing, ordering |
//! | [`point`] | [`Point`] collaborator trait for coordinate holders |
//! | [`math`] | Decimal-truncation helper |
//! | [`constants`] | Angular conversion constants |
//! | [`errors`] | [`VectorError`] and [`VectorResult`] |
//!
//! # Quick Start
//!
//! ```
//! use spatial_core::Vector3d;
//!
//! let a = Vector3d::new(1.0, 2.0, 3.0);
//! let b = Vector3d::new(4.0, 5.0, 6.0);
//!
//! assert_eq!(a.dot(&b), 32.0);
//! let n = a.cross(&b);
//! assert!(a.is_perpendicular_to(&n));
//! ```
//!
//! # Parsing Policy
//!
//! Text input has two entry points with deliberately different failure
//! behavior:
//!
//! - [`parse_vector`] (strict): `Ok(None)` when the outer delimiter shape is
//!   missing, `Err` when the shape matches but a field is malformed.
//! - [`Vector3d::from_text`] (lenient): falls back to the zero vector when no
//!   vector is present, but still propagates malformed-field errors.
//!
//! ```
//! use spatial_core::{parse_vector, Vector3d, VectorFormat};
//!
//! let fmt = VectorFormat::default();
//! assert!(parse_vector("no delimiters", &fmt).unwrap().is_none());
//! assert_eq!(Vector3d::from_text("no delimiters").unwrap(), Vector3d::ZERO);
//! assert!(Vector3d::from_text("{1,x,3}").is_err());
//! ```
//!
//! # Degenerate Inputs
//!
//! The zero vector is a valid value, but magnitude-dependent operations on it
//! are degenerate by contract: [`Vector3d::unit_vector`] yields NaN
//! components and [`Vector3d::angle_between`] yields NaN. These are defined
//! outputs under IEEE-754 semantics, not errors.
//!
//! # Serde
//!
//! With the `serde` feature enabled, [`Vector3d`] serializes as a `[f64; 3]`.

pub mod constants;
pub mod errors;
pub mod math;
pub mod point;
pub mod vector;

pub use errors::{VectorError, VectorResult};
pub use point::{CoordPoint, Point};
pub use vector::{magnitude_cmp, parse_vector, Vector3d, VectorFormat};
