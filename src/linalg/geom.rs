//! Free functions built on the vector and matrix types: angles, projections, the standard
//! transform and projection matrices, and [`look_at`].
use crate::core::config::{LOOK_AT_ALIGNED_THRESHOLD, LOOK_AT_PERPENDICULAR_TOLERANCE};
use crate::linalg::{Mat4x4, Quat, Vec3, Vector};
use crate::util::diag;
use crate::util::error::MathError;
use crate::util::gg_float;

/// Returns the angle in radians between two non-zero vectors, in `[0, pi]`.
///
/// A zero input is reported as [`MathError::InvalidArgument`] and gives 0.
///
/// # Examples
/// ```
/// use glongge_math::core::prelude::*;
///
/// let a = angle(Vec2::new(1.0, 0.0), Vec2::new(0.0, 3.0));
/// assert!((a - gg_float::PI / 2.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn angle<V: Vector>(v1: V, v2: V) -> f32 {
    if v1.is_zero() || v2.is_zero() {
        diag::report(MathError::invalid(format!(
            "tried to find the angle between {} and {}",
            V::NAME,
            if v1.is_zero() { "a zero vector" } else { "another vector" },
        )));
        return 0.0;
    }
    let cos = v1.normed().dot(v2.normed());
    gg_float::clamp(cos, -1.0, 1.0).acos()
}

/// Projects `from` onto the line through the origin along `to`. Neither vector needs to be
/// normalised, but a zero input is reported as [`MathError::InvalidArgument`] and gives the zero
/// vector.
#[must_use]
pub fn proj<V: Vector>(from: V, to: V) -> V {
    if from.is_zero() || to.is_zero() {
        diag::report(MathError::invalid(format!(
            "tried to project with a zero {}",
            V::NAME
        )));
        return V::zero();
    }
    let u = to.normed();
    u * from.dot(u)
}

/// Returns the component of `v2` orthogonal to `v1`.
#[must_use]
pub fn orthogonalize<V: Vector>(v1: V, v2: V) -> V {
    v2 - proj(v2, v1)
}
/// As [`orthogonalize`], normalised. Unguarded: parallel inputs give `NaN`s.
#[must_use]
pub fn orthonormalize<V: Vector>(v1: V, v2: V) -> V {
    orthogonalize(v1, v2).normed()
}

/// A rotation of `radians` about `axis`. A zero axis is reported and gives the identity.
#[must_use]
pub fn rotation_matrix(axis: Vec3, radians: f32) -> Mat4x4 {
    let mut m = Mat4x4::identity();
    m.rotate(axis, radians);
    m
}
#[must_use]
pub fn translation_matrix(offset: Vec3) -> Mat4x4 {
    let mut m = Mat4x4::identity();
    m.translate(offset);
    m
}
#[must_use]
pub fn scale_matrix(factor: f32) -> Mat4x4 {
    let mut m = Mat4x4::identity();
    m.scale_uniform(factor);
    m
}

/// Right-handed perspective projection for a camera looking down `-Z`, mapping view depths
/// `-near` and `-far` to clip-space depths -1 and 1.
///
/// `fov` is the vertical field of view in radians and `aspect` is width / height.
///
/// The depth row is `[0, 0, (near + far) / (near - far), 2 * far * near / (near - far)]` and the
/// last row is `[0, 0, -1, 0]`, so clip-space `w` is `-z`. This matches [`Vec3::FORWARD`] and
/// [`orthographic_matrix`]; a `+Z`-forward projection would have the opposite sign in both places.
///
/// # Examples
/// ```
/// use glongge_math::core::prelude::*;
///
/// let m = perspective_matrix(gg_float::PI / 2.0, 1.0, 1.0, 10.0);
/// let near = m.project_point(Vec3::new(0.0, 0.0, -1.0));
/// assert!((near.z + 1.0).abs() < 1e-5);
/// ```
#[must_use]
pub fn perspective_matrix(fov: f32, aspect: f32, near: f32, far: f32) -> Mat4x4 {
    let f = 1.0 / (fov / 2.0).tan();
    let depth = near - far;
    Mat4x4::new(
        f / aspect,
        0.0,
        0.0,
        0.0,
        0.0,
        f,
        0.0,
        0.0,
        0.0,
        0.0,
        (near + far) / depth,
        2.0 * far * near / depth,
        0.0,
        0.0,
        -1.0,
        0.0,
    )
}

/// Right-handed orthographic projection of the box `[left, right] x [bottom, top] x [-near, -far]`
/// onto the clip-space cube `[-1, 1]^3`.
#[must_use]
pub fn orthographic_matrix(
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    near: f32,
    far: f32,
) -> Mat4x4 {
    let width = right - left;
    let height = top - bottom;
    let depth = far - near;
    Mat4x4::new(
        2.0 / width,
        0.0,
        0.0,
        -(right + left) / width,
        0.0,
        2.0 / height,
        0.0,
        -(top + bottom) / height,
        0.0,
        0.0,
        -2.0 / depth,
        -(far + near) / depth,
        0.0,
        0.0,
        0.0,
        1.0,
    )
}

/// Shortest rotation taking unit vector `from` onto unit vector `to`. `fallback_axis` is used
/// when they point in opposite directions and must be perpendicular to `from`.
fn rotation_between(from: Vec3, to: Vec3, fallback_axis: Vec3) -> Quat {
    let cos = from.dot(to);
    if cos >= LOOK_AT_ALIGNED_THRESHOLD {
        return Quat::identity();
    }
    let mut axis = from.cross(to);
    if axis.len_squared() < f32::EPSILON * f32::EPSILON {
        axis = fallback_axis;
    }
    Quat::from_axis_angle(axis, gg_float::clamp(cos, -1.0, 1.0).acos())
}

/// Returns the rotation that turns [`Vec3::FORWARD`] to point along `forward` and
/// [`Vec3::UP`] to point along `up`.
///
/// The two directions need not be normalised but must be non-zero and perpendicular, i.e.
/// `|forward . up|` must be below
/// [`LOOK_AT_PERPENDICULAR_TOLERANCE`](crate::core::config::LOOK_AT_PERPENDICULAR_TOLERANCE).
/// Otherwise this reports [`MathError::InvalidArgument`] and returns the identity.
///
/// # Examples
/// ```
/// use glongge_math::core::prelude::*;
///
/// let q = look_at(Vec3::RIGHT, Vec3::UP);
/// assert!(q.forward().almost_eq(Vec3::RIGHT));
/// assert!(q.up().almost_eq(Vec3::UP));
/// ```
#[must_use]
pub fn look_at(forward: Vec3, up: Vec3) -> Quat {
    let f_dot_u = forward.dot(up);
    if f_dot_u.abs() >= LOOK_AT_PERPENDICULAR_TOLERANCE || forward.is_zero() || up.is_zero() {
        diag::report(MathError::invalid(format!(
            "look_at() needs perpendicular non-zero vectors: forward={forward}, up={up}, dot={f_dot_u}"
        )));
        return Quat::identity();
    }
    let f = forward.normed();
    let look = rotation_between(Vec3::FORWARD, f, Vec3::UP);

    // Spin about the new forward axis until the carried-along up vector meets `up`.
    let current_up = look * Vec3::UP;
    let target_up = orthonormalize(f, up.normed());
    let cos = current_up.dot(target_up);
    if cos >= LOOK_AT_ALIGNED_THRESHOLD {
        return look;
    }
    let sign = if f.dot(current_up.cross(target_up)) < 0.0 {
        -1.0
    } else {
        1.0
    };
    let spin = Quat::from_axis_angle(f, sign * gg_float::clamp(cos, -1.0, 1.0).acos());
    spin * look
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::{Vec2, Vec4};
    use crate::util::assert::{check, check_eq, check_lt};
    use crate::util::gg_float::PI;

    #[test]
    fn geom_angle() {
        assert!((angle(Vec3::RIGHT, Vec3::UP) - PI / 2.0).abs() < 1e-6);
        assert!((angle(Vec3::RIGHT, Vec3::LEFT) - PI).abs() < 1e-6);
        assert_eq!(angle(Vec2::new(2.0, 0.0), Vec2::new(5.0, 0.0)), 0.0);
        assert!(
            (angle(Vec4::new(1.0, 0.0, 0.0, 0.0), Vec4::new(1.0, 1.0, 0.0, 0.0)) - PI / 4.0).abs()
                < 1e-6
        );

        let (a, errors) = diag::capture(|| angle(Vec3::zero(), Vec3::UP));
        assert_eq!(a, 0.0);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].is_invalid_argument());
    }

    #[test]
    fn geom_extreme_magnitudes() {
        let huge = Vec3::new(1e20, 1e20, 0.0);
        check_lt!(angle(huge, huge), 1e-3);
        check_lt!((angle(huge, Vec3::new(1e20, 0.0, 0.0)) - PI / 4.0).abs(), 1e-5);
        let tiny = Vec2::new(1e-25, 0.0);
        check_lt!((angle(tiny, Vec2::new(0.0, 1e-25)) - PI / 2.0).abs(), 1e-6);

        let p = proj(Vec3::new(1e-25, 1e-25, 0.0), Vec3::new(2e-25, 0.0, 0.0));
        check_eq!(p, Vec3::new(1e-25, 0.0, 0.0));
        let p = proj(Vec3::new(1e20, 1e20, 0.0), Vec3::new(0.0, 1e30, 0.0));
        check_eq!(p, Vec3::new(0.0, 1e20, 0.0));
        check!(orthonormalize(Vec3::new(1e20, 0.0, 0.0), huge).almost_eq(Vec3::UP));
    }

    #[test]
    fn geom_proj() {
        let p = proj(Vec2::new(3.0, 4.0), Vec2::new(2.0, 0.0));
        assert_eq!(p, Vec2::new(3.0, 0.0));
        let q = proj(Vec3::new(1.0, 1.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        assert!(q.almost_eq(Vec3::splat(2.0 / 3.0)));

        let (z, errors) = diag::capture(|| proj(Vec3::UP, Vec3::zero()));
        assert_eq!(z, Vec3::zero());
        assert_eq!(errors.len(), 1);
        let (z, errors) = diag::capture(|| proj(Vec3::zero(), Vec3::UP));
        assert_eq!(z, Vec3::zero());
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn geom_orthogonalize() {
        let v1 = Vec3::new(1.0, 0.0, 0.0);
        let v2 = Vec3::new(2.0, 3.0, 0.0);
        assert_eq!(orthogonalize(v1, v2), Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(orthonormalize(v1, v2), Vec3::UP);

        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-2.0, 0.5, 1.0);
        assert!(orthogonalize(a, b).dot(a).abs() < 1e-5);
        assert!((orthonormalize(a, b).len() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn geom_transform_matrices() {
        let r = rotation_matrix(Vec3::BACK, PI / 2.0);
        assert!(r.transform_point(Vec3::RIGHT).almost_eq(Vec3::UP));
        let t = translation_matrix(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.transform_point(Vec3::one()), Vec3::new(2.0, 3.0, 4.0));
        let s = scale_matrix(2.0);
        assert_eq!(s.transform_point(Vec3::one()), Vec3::splat(2.0));
        assert_eq!(s.get(3, 3), 1.0);

        let (m, errors) = diag::capture(|| rotation_matrix(Vec3::zero(), 1.0));
        assert!(m.is_identity());
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn geom_perspective() {
        let m = perspective_matrix(PI / 2.0, 2.0, 1.0, 100.0);
        assert_eq!(m.get(3, 2), -1.0);
        assert_eq!(m.get(3, 3), 0.0);
        assert!((m.get(2, 2) + 101.0 / 99.0).abs() < 1e-6);
        assert!((m.get(2, 3) + 200.0 / 99.0).abs() < 1e-5);
        assert!((m.get(1, 1) - 1.0).abs() < 1e-6);
        assert!((m.get(0, 0) - 0.5).abs() < 1e-6);

        let near = m.project_point(Vec3::new(0.0, 0.0, -1.0));
        let far = m.project_point(Vec3::new(0.0, 0.0, -100.0));
        assert!((near.z + 1.0).abs() < 1e-5);
        assert!((far.z - 1.0).abs() < 1e-4);
        // A point at the edge of the vertical field of view lands on the top of clip space.
        let top = m.project_point(Vec3::new(0.0, 5.0, -5.0));
        assert!((top.y - 1.0).abs() < 1e-5);
        let (_, errors) = diag::capture(|| m.project_point(Vec3::zero()));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn geom_orthographic() {
        let m = orthographic_matrix(-2.0, 2.0, 1.0, -1.0, 0.5, 10.5);
        assert!(m
            .transform_point(Vec3::new(-2.0, -1.0, -0.5))
            .almost_eq(Vec3::new(-1.0, -1.0, -1.0)));
        assert!(m
            .transform_point(Vec3::new(2.0, 1.0, -10.5))
            .almost_eq(Vec3::new(1.0, 1.0, 1.0)));
        assert_eq!(m.get(3, 3), 1.0);
    }

    #[test]
    fn geom_look_at_identity() {
        assert!(look_at(Vec3::FORWARD, Vec3::UP).is_identity());
        let q = look_at(Vec3::FORWARD * 3.0, Vec3::UP * 0.5);
        assert!(q.is_identity());
    }

    fn check_look_at(forward: Vec3, up: Vec3) {
        let q = look_at(forward, up);
        assert!((q.len() - 1.0).abs() < 1e-5);
        assert!(
            q.forward().almost_eq_eps(forward.normed(), 1e-4),
            "forward: {} vs {}",
            q.forward(),
            forward.normed()
        );
        assert!(
            q.up().almost_eq_eps(up.normed(), 1e-4),
            "up: {} vs {}",
            q.up(),
            up.normed()
        );
    }

    #[test]
    fn geom_look_at() {
        check_look_at(Vec3::RIGHT, Vec3::UP);
        check_look_at(Vec3::LEFT, Vec3::UP);
        check_look_at(Vec3::BACK, Vec3::UP);
        check_look_at(Vec3::FORWARD, Vec3::RIGHT);
        check_look_at(Vec3::FORWARD, Vec3::DOWN);
        check_look_at(Vec3::UP, Vec3::BACK);
        check_look_at(Vec3::DOWN, Vec3::FORWARD);
        check_look_at(Vec3::new(1.0, 0.0, -1.0), Vec3::new(0.0, 2.0, 0.0));
        check_look_at(Vec3::new(1.0, 1.0, 0.0), Vec3::new(-1.0, 1.0, 1.0));
        check_look_at(Vec3::new(0.3, -2.0, 1.0), Vec3::new(2.0, 0.5, 0.4));
    }

    #[test]
    fn geom_look_at_invalid() {
        let (q, errors) = diag::capture(|| look_at(Vec3::FORWARD, Vec3::new(0.0, 1.0, -0.1)));
        assert!(q.is_identity());
        assert_eq!(errors.len(), 1);
        let (q, errors) = diag::capture(|| look_at(Vec3::zero(), Vec3::UP));
        assert!(q.is_identity());
        assert_eq!(errors.len(), 1);
        let (q, errors) = diag::capture(|| look_at(Vec3::FORWARD, Vec3::zero()));
        assert!(q.is_identity());
        assert_eq!(errors.len(), 1);
    }
}
