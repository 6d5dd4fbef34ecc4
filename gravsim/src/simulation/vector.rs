//! Vector primitives shared by every other module
//!
//! Vectors are plain nalgebra `SVector<f64, D>` values. They are `Copy` and
//! their operators (`+`, `-`, `* s`, `.dot()`, `.magnitude()`, `.cross()`)
//! always return new values, so a vector is never mutated behind a caller's
//! back. [`VectorExt`] adds the few operations nalgebra does not spell the
//! way the engine needs them.

use nalgebra::SVector;

use crate::error::PhysicsError;
use crate::simulation::states::{NVec2, NVec3};

/// Checked division, zero-safe normalization and point distance
pub trait VectorExt: Sized {
    /// Componentwise division by `scalar`
    ///
    /// Fails with [`PhysicsError::ZeroDivisor`] when `scalar` is exactly zero.
    fn checked_div(&self, scalar: f64) -> Result<Self, PhysicsError>;

    /// Unit vector in the same direction, or the zero vector when the
    /// magnitude is exactly zero. Never fails.
    fn normalized_or_zero(&self) -> Self;

    /// Euclidean distance between two points
    fn distance_to(&self, other: &Self) -> f64;
}

impl<const D: usize> VectorExt for SVector<f64, D> {
    fn checked_div(&self, scalar: f64) -> Result<Self, PhysicsError> {
        if scalar == 0.0 {
            return Err(PhysicsError::ZeroDivisor);
        }
        Ok(*self / scalar)
    }

    fn normalized_or_zero(&self) -> Self {
        let magnitude = self.magnitude();
        // magnitude is non-zero past this point, so the division cannot fail
        self.checked_div(magnitude).unwrap_or_else(|_| Self::zeros())
    }

    fn distance_to(&self, other: &Self) -> f64 {
        (self - other).magnitude()
    }
}

/// Drop the z component
pub fn project_to_2d(v: &NVec3) -> NVec2 {
    NVec2::new(v.x, v.y)
}

/// Append a z component (use `0.0` for a flat lift)
pub fn lift_to_3d(v: &NVec2, z: f64) -> NVec3 {
    NVec3::new(v.x, v.y, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero_vector_is_zero() {
        assert_eq!(NVec3::zeros().normalized_or_zero(), NVec3::zeros());
        assert_eq!(NVec2::zeros().normalized_or_zero(), NVec2::zeros());
    }

    #[test]
    fn normalize_has_unit_length() {
        let v = NVec3::new(3.0, -4.0, 12.0);
        assert!((v.normalized_or_zero().magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn checked_div_rejects_exact_zero_only() {
        let v = NVec2::new(1.0, 2.0);
        assert_eq!(v.checked_div(0.0), Err(PhysicsError::ZeroDivisor));
        assert!(v.checked_div(1e-300).is_ok());
    }

    #[test]
    fn projection_and_lift() {
        let v = NVec3::new(1.0, 2.0, 3.0);
        assert_eq!(project_to_2d(&v), NVec2::new(1.0, 2.0));
        assert_eq!(lift_to_3d(&NVec2::new(1.0, 2.0), 0.0), NVec3::new(1.0, 2.0, 0.0));
    }
}
