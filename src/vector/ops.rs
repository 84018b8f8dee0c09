//! Operator impls for [`Vector3d`].
//!
//! Component-wise `+`, `-`, unary `-`, integer scaling via `*`/`*=`, and
//! `v[i]` indexing. Scalar multiplication is `i64` only: the scaling contract
//! is integral, not general real scaling.

use super::core::Vector3d;
use core::ops::*;

/// Vector + Vector → Vector
impl Add for Vector3d {
    type Output = Vector3d;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vector3d::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Vector - Vector → Vector
impl Sub for Vector3d {
    type Output = Vector3d;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Vector3d::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// -Vector → Vector
impl Neg for Vector3d {
    type Output = Vector3d;
    #[inline]
    fn neg(self) -> Self {
        Vector3d::new(-self.x, -self.y, -self.z)
    }
}

/// Vector * integer scalar → Vector
impl Mul<i64> for Vector3d {
    type Output = Vector3d;
    #[inline]
    fn mul(self, scalar: i64) -> Self {
        self.scale(scalar)
    }
}

/// integer scalar * Vector → Vector
impl Mul<Vector3d> for i64 {
    type Output = Vector3d;
    #[inline]
    fn mul(self, vec: Vector3d) -> Vector3d {
        vec.scale(self)
    }
}

/// Vector *= integer scalar (the in-place scaling mutator)
impl MulAssign<i64> for Vector3d {
    #[inline]
    fn mul_assign(&mut self, scalar: i64) {
        self.scale_in_place(scalar);
    }
}

/// v[i] indexing (panics if i > 2)
impl Index<usize> for Vector3d {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3d index out of bounds: {}", index),
        }
    }
}

/// v[i] = value mutable indexing (panics if i > 2)
impl IndexMut<usize> for Vector3d {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3d index out of bounds: {}", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sub() {
        let a = Vector3d::new(1.0, 2.0, 3.0);
        let b = Vector3d::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vector3d::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3d::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_neg() {
        let a = Vector3d::new(1.0, -2.0, 3.0);
        assert_eq!(-a, Vector3d::new(-1.0, 2.0, -3.0));
        assert_eq!(-(-a), a);
    }

    #[test]
    fn test_integer_scaling_operators() {
        let a = Vector3d::new(1.0, 2.0, 3.0);
        assert_eq!(a * 2, Vector3d::new(2.0, 4.0, 6.0));
        assert_eq!(3 * a, Vector3d::new(3.0, 6.0, 9.0));

        let mut b = a;
        b *= -2;
        assert_eq!(b, Vector3d::new(-2.0, -4.0, -6.0));
    }

    #[test]
    fn test_indexing() {
        let mut v = Vector3d::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v[2], 3.0);

        v[1] = 20.0;
        assert_eq!(v, Vector3d::new(1.0, 20.0, 3.0));
    }

    #[test]
    #[should_panic(expected = "Vector3d index out of bounds: 4")]
    fn test_index_panic() {
        let v = Vector3d::ZERO;
        let _ = v[4];
    }

    #[test]
    #[should_panic(expected = "Vector3d index out of bounds: 7")]
    fn test_index_mut_panic() {
        let mut v = Vector3d::ZERO;
        v[7] = 42.0;
    }
}
