//! 3x3 matrices acting on 2D points in homogeneous coordinates `(x, y, 1)`.
//!
//! ```
//! use glongge_math::core::prelude::*;
//!
//! let m = homogeneous2d::translate(Vec2::new(1.0, 2.0)) * homogeneous2d::scale(3.0);
//! assert_eq!(m.transform_point2(Vec2::new(1.0, 1.0)), Vec2::new(4.0, 5.0));
//! ```
use crate::linalg::{Mat3x3, Vec2};

/// Anticlockwise rotation by `radians` about the origin.
#[must_use]
pub fn rotate(radians: f32) -> Mat3x3 {
    let (s, c) = radians.sin_cos();
    Mat3x3::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0)
}

#[must_use]
pub fn translate(offset: Vec2) -> Mat3x3 {
    let mut m = Mat3x3::identity();
    m.set(0, 2, offset.x);
    m.set(1, 2, offset.y);
    m
}

/// Uniform scale about the origin; the homogeneous coordinate is left alone.
#[must_use]
pub fn scale(factor: f32) -> Mat3x3 {
    let mut m = Mat3x3::identity();
    m.set(0, 0, factor);
    m.set(1, 1, factor);
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::gg_float::PI;

    #[test]
    fn homogeneous2d_rotate() {
        let m = rotate(PI / 2.0);
        assert!(m.transform_point2(Vec2::new(1.0, 0.0)).almost_eq(Vec2::new(0.0, 1.0)));
        assert_eq!(m.get(2, 2), 1.0);
        assert!(rotate(0.0).is_identity());
    }

    #[test]
    fn homogeneous2d_translate() {
        let m = translate(Vec2::new(-1.0, 4.0));
        assert_eq!(m.transform_point2(Vec2::new(1.0, 1.0)), Vec2::new(0.0, 5.0));
        // Directions are unaffected.
        assert_eq!(m.transform_vector2(Vec2::new(1.0, 1.0)), Vec2::new(1.0, 1.0));
        assert!(translate(Vec2::zero()).is_identity());
    }

    #[test]
    fn homogeneous2d_scale() {
        let m = scale(2.0);
        assert_eq!(m.transform_point2(Vec2::new(1.5, -1.0)), Vec2::new(3.0, -2.0));
        assert_eq!(m.get(2, 2), 1.0);
        assert!((scale(2.0) * scale(0.5)).is_identity());
    }

    #[test]
    fn homogeneous2d_composition() {
        // Rotate about the point (1, 0).
        let pivot = Vec2::new(1.0, 0.0);
        let m = translate(pivot) * rotate(PI) * translate(-pivot);
        assert!(m.transform_point2(Vec2::new(2.0, 0.0)).almost_eq(Vec2::new(0.0, 0.0)));
        assert!(m.transform_point2(pivot).almost_eq(pivot));
    }
}
