use crate::core::config::EPSILON;
use crate::linalg::{fmt_components, Vec2, Vec4, Vector};
use crate::util::diag;
use crate::util::error::MathError;
use crate::util::{gg_err, gg_float};
use num_traits::Zero;
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A 3D vector using 32-bit floating point coordinates.
///
/// The direction constants describe a right-handed world with +Y up and -Z forward.
///
/// # Examples
///
/// ```
/// use glongge_math::core::prelude::*;
///
/// let x = Vec3::new(1.0, 0.0, 0.0);
/// let y = Vec3::new(0.0, 1.0, 0.0);
/// assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
/// assert_eq!(Vec3::RIGHT.cross(Vec3::UP), Vec3::BACK);
/// ```
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const DOWN: Vec3 = Vec3::new(0.0, -1.0, 0.0);
    pub const LEFT: Vec3 = Vec3::new(-1.0, 0.0, 0.0);
    pub const RIGHT: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);
    pub const BACK: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }
    #[must_use]
    pub const fn zero() -> Vec3 {
        Vec3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
    #[must_use]
    pub const fn one() -> Vec3 {
        Vec3 {
            x: 1.0,
            y: 1.0,
            z: 1.0,
        }
    }
    #[must_use]
    pub const fn splat(v: f32) -> Vec3 {
        Vec3 { x: v, y: v, z: v }
    }
    /// Extends a 2D vector with the given `z`.
    #[must_use]
    pub const fn from_vec2(v: Vec2, z: f32) -> Vec3 {
        Vec3 { x: v.x, y: v.y, z }
    }

    pub fn try_get(&self, i: usize) -> Result<f32, MathError> {
        match i {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(MathError::index("Vec3", i, 3)),
        }
    }
    /// Returns component `i`, or reports [`MathError::IndexOutOfRange`] and returns 0.
    #[must_use]
    pub fn get(&self, i: usize) -> f32 {
        gg_err::report_or(0.0, self.try_get(i))
    }
    /// Sets component `i`; out-of-range indices are reported and otherwise ignored.
    pub fn set(&mut self, i: usize, value: f32) {
        match i {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => diag::report(MathError::index("Vec3", i, 3)),
        }
    }

    #[must_use]
    pub fn dot(&self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    /// Right-handed cross product.
    #[must_use]
    pub fn cross(&self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.dot(*self)
    }
    #[must_use]
    pub fn len(&self) -> f32 {
        gg_float::norm(&[self.x, self.y, self.z])
    }

    /// Returns a unit vector in the same direction. Unguarded: the zero vector yields `NaN`s.
    #[must_use]
    pub fn normed(&self) -> Vec3 {
        let len = self.len();
        Vec3 {
            x: self.x / len,
            y: self.y / len,
            z: self.z / len,
        }
    }
    pub fn normalize(&mut self) {
        *self = self.normed();
    }
    pub fn try_normed(&self) -> Result<Vec3, MathError> {
        if self.is_zero() {
            Err(MathError::invalid("tried to normalise a zero Vec3"))
        } else {
            Ok(self.normed())
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Returns `(x, y, z, 1)`, the homogeneous form of this point.
    #[must_use]
    pub fn homogeneous(&self) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, 1.0)
    }

    #[must_use]
    pub fn component_wise(&self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }

    pub fn try_div(&self, rhs: f32) -> Result<Vec3, MathError> {
        if rhs == 0.0 {
            Err(MathError::div_by_zero("Vec3"))
        } else {
            Ok(Vec3 {
                x: self.x / rhs,
                y: self.y / rhs,
                z: self.z / rhs,
            })
        }
    }

    #[must_use]
    pub fn almost_eq(&self, rhs: Vec3) -> bool {
        self.almost_eq_eps(rhs, EPSILON)
    }
    #[must_use]
    pub fn almost_eq_eps(&self, rhs: Vec3, eps: f32) -> bool {
        (*self - rhs).len() < eps
    }

    #[must_use]
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
    #[must_use]
    pub fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Vector for Vec3 {
    const DIM: usize = 3;
    const NAME: &'static str = "Vec3";

    fn dot(&self, other: Vec3) -> f32 {
        Vec3::dot(self, other)
    }
    fn get(&self, i: usize) -> f32 {
        Vec3::get(self, i)
    }
    fn set(&mut self, i: usize, value: f32) {
        Vec3::set(self, i, value);
    }
    fn len(&self) -> f32 {
        Vec3::len(self)
    }
    fn normed(&self) -> Vec3 {
        Vec3::normed(self)
    }
}

impl Zero for Vec3 {
    fn zero() -> Self {
        Vec3::zero()
    }

    fn is_zero(&self) -> bool {
        Vec3::is_zero(self)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Vec3 {
            x: value[0],
            y: value[1],
            z: value[2],
        }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        value.to_array()
    }
}

/// Drops `w`.
impl From<Vec4> for Vec3 {
    fn from(value: Vec4) -> Self {
        Vec3 {
            x: value.x,
            y: value.y,
            z: value.z,
        }
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => {
                diag::report(MathError::index("Vec3", index, 3));
                &0.0
            }
        }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_components(f, "vec3", &self.to_array())
    }
}

impl Add<Vec3> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl AddAssign<Vec3> for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub<Vec3> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl SubAssign<Vec3> for Vec3 {
    fn sub_assign(&mut self, rhs: Vec3) {
        *self = *self - rhs;
    }
}

impl Sum<Vec3> for Vec3 {
    fn sum<I: Iterator<Item = Vec3>>(iter: I) -> Self {
        iter.fold(Vec3::zero(), Vec3::add)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Self::Output {
        Vec3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}
impl Mul<Vec3> for f32 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

/// Dividing by exactly 0 reports [`MathError::DivisionByZero`] and returns the zero vector.
impl Div<f32> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f32) -> Self::Output {
        gg_err::report_or_else(self.try_div(rhs), Vec3::zero)
    }
}
impl DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, rhs: f32) {
        match self.try_div(rhs) {
            Ok(v) => *self = v,
            Err(e) => diag::report(e),
        }
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::assert::{check, check_eq, check_lt};

    #[test]
    fn vec3_cross_product() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(x.cross(y), z);
        assert_eq!(y.cross(z), x);
        assert_eq!(z.cross(x), y);
        assert_eq!(y.cross(x), -z);
        assert_eq!(x.cross(x), Vec3::zero());

        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 5.0, 0.5);
        let c = a.cross(b);
        assert!(c.dot(a).abs() < 1e-4);
        assert!(c.dot(b).abs() < 1e-4);
    }

    #[test]
    fn vec3_directions() {
        assert_eq!(Vec3::UP, -Vec3::DOWN);
        assert_eq!(Vec3::LEFT, -Vec3::RIGHT);
        assert_eq!(Vec3::FORWARD, -Vec3::BACK);
        assert_eq!(Vec3::RIGHT.cross(Vec3::UP), Vec3::BACK);
        assert_eq!(Vec3::FORWARD.cross(Vec3::UP), Vec3::RIGHT);
    }

    #[test]
    fn vec3_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::splat(3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(
            a.component_wise(b),
            Vec3::new(4.0, 10.0, 18.0)
        );

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
        c *= 0.5;
        assert_eq!(c, Vec3::new(2.0, 2.5, 3.0));
        c /= 0.5;
        assert_eq!(c, b);

        let total: Vec3 = [a, b].into_iter().sum();
        assert_eq!(total, a + b);
    }

    #[test]
    fn vec3_division_by_zero() {
        let (v, errors) = diag::capture(|| Vec3::one() / 0.0);
        assert_eq!(v, Vec3::zero());
        assert_eq!(errors, vec![MathError::div_by_zero("Vec3")]);

        let mut w = Vec3::one();
        let ((), errors) = diag::capture(|| w /= 0.0);
        assert_eq!(w, Vec3::one());
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn vec3_element_access() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!((v[0], v[1], v[2]), (1.0, 2.0, 3.0));
        v.set(2, -1.0);
        assert_eq!(v.get(2), -1.0);

        let (value, errors) = diag::capture(|| v[3]);
        assert_eq!(value, 0.0);
        assert_eq!(errors, vec![MathError::index("Vec3", 3, 3)]);
        let ((), errors) = diag::capture(|| v.set(7, 1.0));
        assert_eq!(v, Vec3::new(1.0, 2.0, -1.0));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn vec3_len_and_normed() {
        let v = Vec3::new(2.0, 3.0, 6.0);
        assert_eq!(v.len_squared(), 49.0);
        assert_eq!(v.len(), 7.0);
        assert!((v.normed().len() - 1.0).abs() < 1e-6);
        assert!(v.normed().almost_eq(Vec3::new(2.0 / 7.0, 3.0 / 7.0, 6.0 / 7.0)));
        assert!(Vec3::zero().try_normed().is_err());
        assert!(Vec3::zero().normed().x.is_nan());
    }

    #[test]
    fn vec3_normed_extreme_magnitudes() {
        for v in [
            Vec3::new(1e-25, 0.0, 0.0),
            Vec3::new(0.0, -3e-30, 4e-30),
            Vec3::new(1e-36, 0.0, 1e-36),
            Vec3::new(1e20, 0.0, 0.0),
            Vec3::new(3e25, 4e25, -1e25),
            Vec3::new(2e38, 0.0, -1e38),
        ] {
            let n = v.normed();
            check!(n.x.is_finite() && n.y.is_finite() && n.z.is_finite());
            check_lt!((n.len() - 1.0).abs(), 1e-5);
        }
        check_eq!(Vec3::new(1e20, 0.0, 0.0).normed(), Vec3::RIGHT);
        check_eq!(Vec3::new(0.0, 0.0, -1e-25).normed(), Vec3::FORWARD);
        check!(Vec3::new(0.0, -3e-30, 4e-30)
            .normed()
            .almost_eq(Vec3::new(0.0, -0.6, 0.8)));
    }

    #[test]
    fn vec3_conversions() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.homogeneous(), Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(Vec3::from(Vec4::new(1.0, 2.0, 3.0, 4.0)), v);
        assert_eq!(Vec3::from([1.0, 2.0, 3.0]), v);
        assert_eq!(Vec3::from_vec2(Vec2::new(1.0, 2.0), 3.0), v);
        assert_eq!(v.xy(), Vec2::new(1.0, 2.0));
        assert_eq!(<[f32; 3]>::from(v), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn vec3_display() {
        assert_eq!(
            Vec3::new(1.0, 0.5, -3.0).to_string(),
            "vec3(1.000000, 0.500000, -3.000000)"
        );
        assert_eq!(format!("{:.1}", Vec3::UP), "vec3(0.0, 1.0, 0.0)");
    }
}
