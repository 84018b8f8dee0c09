//! Ordering of vectors by magnitude at unit granularity.

use super::core::Vector3d;
use std::cmp::Ordering;

/// Compares two vectors by the truncated difference of their magnitudes.
///
/// The magnitude difference is truncated toward zero before its sign is
/// taken, so vectors whose magnitudes differ by less than 1.0 compare
/// `Equal` even when the raw magnitudes differ. Ordering is consistent with
/// equality only at magnitude granularity of 1.0; this is deliberately NOT a
/// strict weak ordering over raw magnitudes, and for that reason the type
/// does not implement `PartialOrd`/`Ord`.
///
/// ```
/// use spatial_core::{magnitude_cmp, Vector3d};
/// use std::cmp::Ordering;
///
/// let a = Vector3d::new(5.2, 0.0, 0.0);
/// let b = Vector3d::new(5.9, 0.0, 0.0);
/// let c = Vector3d::new(6.1, 0.0, 0.0);
///
/// // |5.2 - 5.9| < 1.0: coarsely equal
/// assert_eq!(magnitude_cmp(&a, &b), Ordering::Equal);
///
/// // 5.2 - 6.1 = -0.9, truncated to 0: still coarsely equal
/// assert_eq!(magnitude_cmp(&a, &c), Ordering::Equal);
///
/// let d = Vector3d::new(7.5, 0.0, 0.0);
/// assert_eq!(magnitude_cmp(&a, &d), Ordering::Less);
/// assert_eq!(magnitude_cmp(&d, &a), Ordering::Greater);
/// ```
pub fn magnitude_cmp(a: &Vector3d, b: &Vector3d) -> Ordering {
    let truncated = (a.magnitude() - b.magnitude()) as i64;
    truncated.cmp(&0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn along_x(magnitude: f64) -> Vector3d {
        Vector3d::new(magnitude, 0.0, 0.0)
    }

    #[test]
    fn test_sub_unit_difference_compares_equal() {
        assert_eq!(
            magnitude_cmp(&along_x(5.2), &along_x(5.9)),
            Ordering::Equal
        );
        assert_eq!(
            magnitude_cmp(&along_x(5.9), &along_x(5.2)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_truncation_not_rounding() {
        // 6.1 - 5.2 = 0.9, truncated to 0: equal despite crossing 5.9 vs 6.1
        // raw comparison. Only a full unit of difference separates them.
        assert_eq!(
            magnitude_cmp(&along_x(5.2), &along_x(6.1)),
            Ordering::Equal
        );
        assert_eq!(
            magnitude_cmp(&along_x(5.2), &along_x(6.3)),
            Ordering::Less
        );
    }

    #[test]
    fn test_unit_difference_orders() {
        assert_eq!(magnitude_cmp(&along_x(2.0), &along_x(4.0)), Ordering::Less);
        assert_eq!(
            magnitude_cmp(&along_x(4.0), &along_x(2.0)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_equal_magnitudes() {
        let a = Vector3d::new(3.0, 4.0, 0.0);
        let b = Vector3d::new(0.0, 0.0, 5.0);
        assert_eq!(magnitude_cmp(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_method_delegates() {
        let small = along_x(1.0);
        let large = along_x(10.0);
        assert_eq!(small.magnitude_cmp(&large), Ordering::Less);
    }
}
