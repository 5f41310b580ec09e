//! Linear, normalised-linear and spherical interpolation.
//!
//! Every function clamps `t` to `[0, 1]` first; a `NaN` parameter is passed through and poisons
//! the result.
use crate::linalg::{geom, Quat, Vec2, Vec3, Vec4, Vector};
use crate::util::gg_float;

pub trait Lerp: Sized {
    /// Returns `(1 - t) * self + t * other` with `t` clamped to `[0, 1]`. Exact at both ends.
    #[must_use]
    fn lerp(self, other: Self, t: f32) -> Self;
}

pub trait Nlerp: Lerp {
    /// Linear interpolation followed by normalisation.
    #[must_use]
    fn nlerp(self, other: Self, t: f32) -> Self;
}

pub trait Slerp: Nlerp {
    /// Interpolates along the arc between `self` and `other` at constant angular speed. Falls
    /// back to a cheaper interpolation when the two are (anti)parallel.
    #[must_use]
    fn slerp(self, other: Self, t: f32) -> Self;
}

/// Linearly interpolates between `a` and `b`.
///
/// # Examples
/// ```
/// use glongge_math::core::prelude::*;
///
/// assert_eq!(lerp(2.0_f32, 4.0, 0.5), 3.0);
/// assert_eq!(lerp(Vec2::zero(), Vec2::new(2.0, 4.0), 0.25), Vec2::new(0.5, 1.0));
/// // t is clamped.
/// assert_eq!(lerp(2.0_f32, 4.0, 7.0), 4.0);
/// ```
#[must_use]
pub fn lerp<T: Lerp>(a: T, b: T, t: f32) -> T {
    Lerp::lerp(a, b, t)
}
#[must_use]
pub fn nlerp<T: Nlerp>(a: T, b: T, t: f32) -> T {
    Nlerp::nlerp(a, b, t)
}
#[must_use]
pub fn slerp<T: Slerp>(a: T, b: T, t: f32) -> T {
    Slerp::slerp(a, b, t)
}

fn clamp_t(t: f32) -> f32 {
    gg_float::clamp(t, 0.0, 1.0)
}

impl Lerp for f32 {
    fn lerp(self, other: f32, t: f32) -> f32 {
        let t = clamp_t(t);
        (1.0 - t) * self + t * other
    }
}

fn lerp_vector<V: Vector>(a: V, b: V, t: f32) -> V {
    let t = clamp_t(t);
    a * (1.0 - t) + b * t
}

fn slerp_vector<V: Vector>(a: V, b: V, t: f32) -> V {
    let t = clamp_t(t);
    let angle = geom::angle(a, b);
    let sin_angle = angle.sin();
    if sin_angle.abs() < f32::EPSILON {
        return lerp_vector(a, b, t);
    }
    a * (((1.0 - t) * angle).sin() / sin_angle) + b * ((t * angle).sin() / sin_angle)
}

macro_rules! impl_vector_interp {
    ($($t:ty),*) => {$(
        impl Lerp for $t {
            fn lerp(self, other: $t, t: f32) -> $t {
                lerp_vector(self, other, t)
            }
        }
        impl Nlerp for $t {
            fn nlerp(self, other: $t, t: f32) -> $t {
                Vector::normed(&lerp_vector(self, other, t))
            }
        }
        impl Slerp for $t {
            fn slerp(self, other: $t, t: f32) -> $t {
                slerp_vector(self, other, t)
            }
        }
    )*};
}

impl_vector_interp!(Vec2, Vec3, Vec4);

/// Plain component-wise interpolation; no shortest-path correction.
impl Lerp for Quat {
    fn lerp(self, other: Quat, t: f32) -> Quat {
        let t = clamp_t(t);
        self * (1.0 - t) + other * t
    }
}

fn shortest_path(a: Quat, b: Quat) -> Quat {
    if a.dot(b) < 0.0 {
        -b
    } else {
        b
    }
}

impl Nlerp for Quat {
    fn nlerp(self, other: Quat, t: f32) -> Quat {
        self.lerp(shortest_path(self, other), t).normed()
    }
}

impl Slerp for Quat {
    fn slerp(self, other: Quat, t: f32) -> Quat {
        let t = clamp_t(t);
        let other = shortest_path(self, other);
        let angle = gg_float::clamp(self.dot(other), -1.0, 1.0).acos();
        let sin_angle = angle.sin();
        if sin_angle.abs() < f32::EPSILON {
            return self.nlerp(other, t);
        }
        let a = ((1.0 - t) * angle).sin() / sin_angle;
        let b = (t * angle).sin() / sin_angle;
        (self * a + other * b).normed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::diag;
    use crate::util::gg_float::PI;

    #[test]
    fn lerp_scalar() {
        assert_eq!(lerp(1.0_f32, 3.0, 0.0), 1.0);
        assert_eq!(lerp(1.0_f32, 3.0, 1.0), 3.0);
        assert_eq!(lerp(1.0_f32, 3.0, 0.5), 2.0);
        assert_eq!(lerp(1.0_f32, 3.0, -2.0), 1.0);
        assert_eq!(lerp(1.0_f32, 3.0, 2.0), 3.0);
        assert!(lerp(1.0_f32, 3.0, f32::NAN).is_nan());
        assert_eq!(lerp(0.1_f32, 0.7, 1.0), 0.7);
    }

    #[test]
    fn lerp_vectors() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-1.0, 0.5, 7.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(a, b, 0.5), Vec3::new(0.0, 1.25, 5.0));
        assert_eq!(lerp(Vec2::zero(), Vec2::one(), 3.0), Vec2::one());
        assert_eq!(
            lerp(Vec4::zero(), Vec4::splat(4.0), 0.25),
            Vec4::splat(1.0)
        );
    }

    #[test]
    fn nlerp_vectors() {
        let v = nlerp(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), 0.5);
        assert!(v.almost_eq(Vec2::new(1.0, 1.0).normed()));
        assert!((v.len() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn slerp_vectors() {
        let a = Vec3::RIGHT;
        let b = Vec3::UP;
        let mid = slerp(a, b, 0.5);
        let expected = Vec3::new(1.0, 1.0, 0.0).normed();
        assert!(mid.almost_eq(expected));
        let third = slerp(a, b, 1.0 / 3.0);
        assert!((geom::angle(a, third) - PI / 6.0).abs() < 1e-5);
        assert!(slerp(a, b, 0.0).almost_eq(a));
        assert!(slerp(a, b, 1.0).almost_eq(b));
        // Parallel: falls back to lerp.
        assert_eq!(
            slerp(Vec2::new(1.0, 0.0), Vec2::new(3.0, 0.0), 0.5),
            Vec2::new(2.0, 0.0)
        );
    }

    #[test]
    fn slerp_vectors_zero_input() {
        let (v, errors) = diag::capture(|| slerp(Vec2::zero(), Vec2::new(2.0, 0.0), 0.5));
        assert_eq!(v, Vec2::new(1.0, 0.0));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn lerp_quat() {
        let a = Quat::identity();
        let b = Quat::from_axis_angle(Vec3::UP, 1.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        // No shortest-path correction.
        assert_eq!(lerp(a, -a, 0.5), Quat::zero());
    }

    #[test]
    fn nlerp_quat_shortest_path() {
        let a = Quat::identity();
        let b = Quat::from_axis_angle(Vec3::UP, 0.5);
        let n = nlerp(a, -b, 1.0);
        assert!(n.almost_eq(b));
        let half = nlerp(a, b, 0.5);
        assert!((half.len() - 1.0).abs() < 1e-6);
        assert!(half.same_rotation(Quat::from_axis_angle(Vec3::UP, 0.25)));
    }

    #[test]
    fn slerp_quat() {
        let a = Quat::identity();
        let b = Quat::from_axis_angle(Vec3::BACK, PI / 2.0);
        let half = slerp(a, b, 0.5);
        assert!(half.almost_eq(Quat::from_axis_angle(Vec3::BACK, PI / 4.0)));
        assert!(slerp(a, b, 0.0).almost_eq(a));
        assert!(slerp(a, b, 1.0).almost_eq(b));
        assert!(slerp(a, b, 5.0).almost_eq(b));
        // Shortest path: -b is the same rotation as b.
        assert!(slerp(a, -b, 0.5).same_rotation(half));
    }

    #[test]
    fn slerp_quat_near_parallel() {
        let a = Quat::from_axis_angle(Vec3::RIGHT, 0.3);
        assert!(slerp(a, a, 0.5).almost_eq(a));
        let b = Quat::from_axis_angle(Vec3::RIGHT, 0.3 + 1e-4);
        assert!(slerp(a, b, 0.5).almost_eq_eps(nlerp(a, b, 0.5), 1e-5));
    }
}
