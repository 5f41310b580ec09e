use crate::core::config::EPSILON;
use crate::linalg::{fmt_components, Mat3x3, Mat4x4, Vec3};
use crate::util::diag;
use crate::util::error::MathError;
use crate::util::{gg_err, gg_float};
use num_traits::Zero;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A quaternion `w + xi + yj + zk`, used to represent rotations.
///
/// Rotation-related methods assume unit length but do not check it. Products compose like
/// matrices: `a * b` applies `b` first, then `a`.
///
/// # Examples
/// ```
/// use glongge_math::core::prelude::*;
///
/// let q = Quat::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), gg_float::PI / 2.0);
/// assert!((q * Vec3::RIGHT).almost_eq(Vec3::UP));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Quat {
        Quat { x, y, z, w }
    }
    #[must_use]
    pub const fn identity() -> Quat {
        Quat::new(0.0, 0.0, 0.0, 1.0)
    }
    /// The all-zero quaternion. Not a rotation; returned by failed divisions.
    #[must_use]
    pub const fn zero() -> Quat {
        Quat::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Rotation of `radians` about `axis`. The axis is normalised here; a zero axis gives `NaN`
    /// components.
    #[must_use]
    pub fn from_axis_angle(axis: Vec3, radians: f32) -> Quat {
        let (s, c) = (radians / 2.0).sin_cos();
        let n = axis.normed() * s;
        Quat::new(n.x, n.y, n.z, c)
    }
    pub fn set_axis_angle(&mut self, axis: Vec3, radians: f32) {
        *self = Quat::from_axis_angle(axis, radians);
    }

    /// The vector part `(x, y, z)`.
    #[must_use]
    pub fn axis(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
    /// The rotation angle of a unit quaternion, in `[0, 2pi]`.
    #[must_use]
    pub fn angle(&self) -> f32 {
        2.0 * self.w.clamp(-1.0, 1.0).acos()
    }

    #[must_use]
    pub fn dot(&self, other: Quat) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }
    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.dot(*self)
    }
    #[must_use]
    pub fn len(&self) -> f32 {
        gg_float::norm(&[self.x, self.y, self.z, self.w])
    }
    /// Unguarded: the zero quaternion yields `NaN`s.
    #[must_use]
    pub fn normed(&self) -> Quat {
        let len = self.len();
        Quat::new(self.x / len, self.y / len, self.z / len, self.w / len)
    }
    pub fn normalize(&mut self) {
        *self = self.normed();
    }

    #[must_use]
    pub fn conjugate(&self) -> Quat {
        Quat::new(-self.x, -self.y, -self.z, self.w)
    }
    /// The multiplicative inverse, `conjugate / len_squared`. Unguarded like [`Quat::normed`].
    #[must_use]
    pub fn inverse(&self) -> Quat {
        self.conjugate() * (1.0 / self.len_squared())
    }
    pub fn try_inverse(&self) -> Result<Quat, MathError> {
        if self.is_zero() {
            Err(MathError::invalid("tried to invert a zero Quat"))
        } else {
            Ok(self.inverse())
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0 && self.w == 0.0
    }
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Quat::identity()
    }

    /// The equivalent rotation matrix, assuming unit length.
    #[must_use]
    pub fn to_mat3(&self) -> Mat3x3 {
        let Quat { x, y, z, w } = *self;
        Mat3x3::new(
            1.0 - 2.0 * (y * y + z * z),
            2.0 * (x * y - z * w),
            2.0 * (x * z + y * w),
            2.0 * (x * y + z * w),
            1.0 - 2.0 * (x * x + z * z),
            2.0 * (y * z - x * w),
            2.0 * (x * z - y * w),
            2.0 * (y * z + x * w),
            1.0 - 2.0 * (x * x + y * y),
        )
    }
    #[must_use]
    pub fn to_matrix(&self) -> Mat4x4 {
        Mat4x4::from_mat3(self.to_mat3())
    }

    #[must_use]
    pub fn up(&self) -> Vec3 {
        *self * Vec3::UP
    }
    #[must_use]
    pub fn down(&self) -> Vec3 {
        *self * Vec3::DOWN
    }
    #[must_use]
    pub fn left(&self) -> Vec3 {
        *self * Vec3::LEFT
    }
    #[must_use]
    pub fn right(&self) -> Vec3 {
        *self * Vec3::RIGHT
    }
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        *self * Vec3::FORWARD
    }
    #[must_use]
    pub fn back(&self) -> Vec3 {
        *self * Vec3::BACK
    }

    pub fn try_div(&self, rhs: f32) -> Result<Quat, MathError> {
        if rhs == 0.0 {
            Err(MathError::div_by_zero("Quat"))
        } else {
            Ok(Quat::new(
                self.x / rhs,
                self.y / rhs,
                self.z / rhs,
                self.w / rhs,
            ))
        }
    }

    #[must_use]
    pub fn almost_eq(&self, rhs: Quat) -> bool {
        self.almost_eq_eps(rhs, EPSILON)
    }
    #[must_use]
    pub fn almost_eq_eps(&self, rhs: Quat, eps: f32) -> bool {
        (*self - rhs).len() < eps
    }
    /// True if both represent the same rotation, i.e. `self` is close to `rhs` or `-rhs`.
    #[must_use]
    pub fn same_rotation(&self, rhs: Quat) -> bool {
        self.almost_eq(rhs) || self.almost_eq(-rhs)
    }

    #[must_use]
    pub fn to_array(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl Default for Quat {
    fn default() -> Self {
        Quat::identity()
    }
}

impl Zero for Quat {
    fn zero() -> Self {
        Quat::zero()
    }

    fn is_zero(&self) -> bool {
        Quat::is_zero(self)
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_components(f, "quat", &self.to_array())
    }
}

impl Mul<Quat> for Quat {
    type Output = Quat;

    fn mul(self, rhs: Quat) -> Self::Output {
        let a = self;
        let b = rhs;
        Quat {
            x: a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            y: a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            z: a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            w: a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        }
    }
}
/// `a *= b` is `a = a * b`: `b` is applied before the existing rotation.
impl MulAssign<Quat> for Quat {
    fn mul_assign(&mut self, rhs: Quat) {
        *self = *self * rhs;
    }
}

/// Rotates a vector: `q * (v, 0) * conjugate(q)`.
impl Mul<Vec3> for Quat {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        let v = Quat::new(rhs.x, rhs.y, rhs.z, 0.0);
        (self * v * self.conjugate()).axis()
    }
}

impl Add<Quat> for Quat {
    type Output = Quat;

    fn add(self, rhs: Quat) -> Self::Output {
        Quat::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}
impl AddAssign<Quat> for Quat {
    fn add_assign(&mut self, rhs: Quat) {
        *self = *self + rhs;
    }
}

impl Sub<Quat> for Quat {
    type Output = Quat;

    fn sub(self, rhs: Quat) -> Self::Output {
        Quat::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}
impl SubAssign<Quat> for Quat {
    fn sub_assign(&mut self, rhs: Quat) {
        *self = *self - rhs;
    }
}

impl Neg for Quat {
    type Output = Quat;

    fn neg(self) -> Self::Output {
        Quat::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<f32> for Quat {
    type Output = Quat;

    fn mul(self, rhs: f32) -> Self::Output {
        Quat::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}
impl Mul<Quat> for f32 {
    type Output = Quat;

    fn mul(self, rhs: Quat) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Quat {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

/// Dividing by exactly 0 reports [`MathError::DivisionByZero`] and returns [`Quat::zero`].
impl Div<f32> for Quat {
    type Output = Quat;

    fn div(self, rhs: f32) -> Self::Output {
        gg_err::report_or_else(self.try_div(rhs), Quat::zero)
    }
}
impl DivAssign<f32> for Quat {
    fn div_assign(&mut self, rhs: f32) {
        match self.try_div(rhs) {
            Ok(q) => *self = q,
            Err(e) => diag::report(e),
        }
    }
}
