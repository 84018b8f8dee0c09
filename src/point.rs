//! The N-dimensional point collaborator.
//!
//! [`Vector3d`](crate::Vector3d) can be built from the coordinates of any
//! point-like value. The crate does not own a point type of its own; instead
//! the [`Point`] trait is the seam through which external coordinate holders
//! plug in. [`CoordPoint`] is a minimal concrete implementation for callers
//! that don't already have one.
//!
//! ```
//! use spatial_core::{CoordPoint, Point, Vector3d};
//!
//! let p = CoordPoint::new(vec![1.0, 2.0, 3.0]);
//! assert_eq!(p.dimension(), 3);
//!
//! let v = Vector3d::from_point(&p);
//! assert_eq!(v, Vector3d::new(1.0, 2.0, 3.0));
//! ```

/// An ordered list of coordinates with a known dimension.
///
/// Implement this on any coordinate-holding type to make it usable with
/// [`Vector3d::from_point`](crate::Vector3d::from_point). The conversion reads
/// exactly the first three coordinates when [`dimension`](Self::dimension)
/// is 3.
pub trait Point {
    /// Number of coordinate dimensions.
    fn dimension(&self) -> usize;

    /// The ordered coordinate values. Must contain at least
    /// [`dimension`](Self::dimension) entries.
    fn coordinates(&self) -> &[f64];
}

/// A plain `Vec<f64>`-backed point.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordPoint {
    coords: Vec<f64>,
}

impl CoordPoint {
    /// Creates a point from its coordinate list. The dimension is the list
    /// length.
    pub fn new(coords: Vec<f64>) -> Self {
        Self { coords }
    }
}

impl Point for CoordPoint {
    #[inline]
    fn dimension(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    fn coordinates(&self) -> &[f64] {
        &self.coords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_point_dimension() {
        let p = CoordPoint::new(vec![1.0, 2.0]);
        assert_eq!(p.dimension(), 2);
        assert_eq!(p.coordinates(), &[1.0, 2.0]);
    }

    #[test]
    fn test_coord_point_empty() {
        let p = CoordPoint::new(vec![]);
        assert_eq!(p.dimension(), 0);
        assert!(p.coordinates().is_empty());
    }
}
