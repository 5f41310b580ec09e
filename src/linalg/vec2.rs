use crate::core::config::EPSILON;
use crate::linalg::{fmt_components, Vec3, Vector};
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

/// A 2D vector using 32-bit floating point coordinates.
///
/// # Examples
///
/// ```
/// use glongge_math::core::prelude::*;
///
/// let v1 = Vec2::new(3.0, 4.0);
/// let v2 = Vec2::new(1.0, 2.0);
/// assert_eq!(v1 + v2, Vec2::new(4.0, 6.0));
/// assert_eq!(v1.len(), 5.0);
/// ```
///
/// # Equality
/// Equality is exact, component by component. Use [`Vec2::almost_eq`] to compare results of
/// floating point arithmetic.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }
    #[must_use]
    pub const fn zero() -> Vec2 {
        Vec2 { x: 0.0, y: 0.0 }
    }
    #[must_use]
    pub const fn one() -> Vec2 {
        Vec2 { x: 1.0, y: 1.0 }
    }
    /// Creates a new vector with both components set to the given value.
    #[must_use]
    pub const fn splat(v: f32) -> Vec2 {
        Vec2 { x: v, y: v }
    }

    /// Returns component `i` (0 is `x`, 1 is `y`).
    pub fn try_get(&self, i: usize) -> Result<f32, MathError> {
        match i {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(MathError::index("Vec2", i, 2)),
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
            _ => diag::report(MathError::index("Vec2", i, 2)),
        }
    }

    #[must_use]
    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the squared length of the vector. Prefer this over [`Vec2::len`] for comparisons.
    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.dot(*self)
    }
    #[must_use]
    pub fn len(&self) -> f32 {
        gg_float::norm(&[self.x, self.y])
    }

    /// Returns a unit vector in the same direction.
    ///
    /// The length is not checked: normalising the zero vector yields `NaN` components. Use
    /// [`Vec2::try_normed`] if the input may be zero.
    #[must_use]
    pub fn normed(&self) -> Vec2 {
        let len = self.len();
        Vec2 {
            x: self.x / len,
            y: self.y / len,
        }
    }
    pub fn normalize(&mut self) {
        *self = self.normed();
    }
    pub fn try_normed(&self) -> Result<Vec2, MathError> {
        if self.is_zero() {
            Err(MathError::invalid("tried to normalise a zero Vec2"))
        } else {
            Ok(self.normed())
        }
    }

    /// True if both components are exactly 0.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Returns `(x, y, 1)`, the homogeneous form of this point.
    #[must_use]
    pub fn homogeneous(&self) -> Vec3 {
        Vec3::new(self.x, self.y, 1.0)
    }

    /// The 2D cross product: the signed area of the parallelogram spanned by the two vectors.
    #[must_use]
    pub fn cross(&self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    #[must_use]
    pub fn component_wise(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x * other.x,
            y: self.y * other.y,
        }
    }

    pub fn try_div(&self, rhs: f32) -> Result<Vec2, MathError> {
        if rhs == 0.0 {
            Err(MathError::div_by_zero("Vec2"))
        } else {
            Ok(Vec2 {
                x: self.x / rhs,
                y: self.y / rhs,
            })
        }
    }

    /// Checks if the vector is approximately equal to another vector, i.e. the length of their
    /// difference is less than [`EPSILON`](crate::core::config::EPSILON).
    #[must_use]
    pub fn almost_eq(&self, rhs: Vec2) -> bool {
        self.almost_eq_eps(rhs, EPSILON)
    }
    #[must_use]
    pub fn almost_eq_eps(&self, rhs: Vec2, eps: f32) -> bool {
        (*self - rhs).len() < eps
    }

    #[must_use]
    pub fn to_array(&self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl Vector for Vec2 {
    const DIM: usize = 2;
    const NAME: &'static str = "Vec2";

    fn dot(&self, other: Vec2) -> f32 {
        Vec2::dot(self, other)
    }
    fn get(&self, i: usize) -> f32 {
        Vec2::get(self, i)
    }
    fn set(&mut self, i: usize, value: f32) {
        Vec2::set(self, i, value);
    }
    fn len(&self) -> f32 {
        Vec2::len(self)
    }
    fn normed(&self) -> Vec2 {
        Vec2::normed(self)
    }
}

impl Zero for Vec2 {
    fn zero() -> Self {
        Vec2::zero()
    }

    fn is_zero(&self) -> bool {
        Vec2::is_zero(self)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Vec2 {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        value.to_array()
    }
}

/// Drops `z`.
impl From<Vec3> for Vec2 {
    fn from(value: Vec3) -> Self {
        Vec2 {
            x: value.x,
            y: value.y,
        }
    }
}

impl Index<usize> for Vec2 {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => {
                diag::report(MathError::index("Vec2", index, 2));
                &0.0
            }
        }
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_components(f, "vec2", &self.to_array())
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign<Vec2> for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl SubAssign<Vec2> for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Sum<Vec2> for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Self {
        iter.fold(Vec2::zero(), Vec2::add)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Self::Output {
        Vec2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
impl Mul<Vec2> for f32 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

/// Dividing by exactly 0 reports [`MathError::DivisionByZero`] and returns the zero vector.
impl Div<f32> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f32) -> Self::Output {
        gg_err::report_or_else(self.try_div(rhs), Vec2::zero)
    }
}
/// Dividing by exactly 0 reports [`MathError::DivisionByZero`] and leaves the vector unchanged.
impl DivAssign<f32> for Vec2 {
    fn div_assign(&mut self, rhs: f32) {
        match self.try_div(rhs) {
            Ok(v) => *self = v,
            Err(e) => diag::report(e),
        }
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_construction() {
        assert_eq!(Vec2::default(), Vec2::zero());
        assert_eq!(Vec2::splat(3.0), Vec2 { x: 3.0, y: 3.0 });
        assert_eq!(Vec2::one(), Vec2::new(1.0, 1.0));
        let v: Vec2 = [1.0, 2.0].into();
        assert_eq!(v, Vec2::new(1.0, 2.0));
        let arr: [f32; 2] = v.into();
        assert_eq!(arr, [1.0, 2.0]);
        assert_eq!(Vec2::from(Vec3::new(1.0, 2.0, 3.0)), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn vec2_arithmetic() {
        let a = Vec2::new(5.0, 6.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a + b, Vec2::new(8.0, 10.0));
        assert_eq!(a - b, Vec2::new(2.0, 2.0));
        assert_eq!(-a, Vec2::new(-5.0, -6.0));
        assert_eq!(a * 2.0, Vec2::new(10.0, 12.0));
        assert_eq!(2.0 * a, Vec2::new(10.0, 12.0));
        assert_eq!(a / 2.0, Vec2::new(2.5, 3.0));

        let mut c = a;
        c += b;
        assert_eq!(c, Vec2::new(8.0, 10.0));
        c -= b;
        assert_eq!(c, a);
        c *= 2.0;
        assert_eq!(c, Vec2::new(10.0, 12.0));
        c /= 4.0;
        assert_eq!(c, Vec2::new(2.5, 3.0));

        let sum: Vec2 = vec![a, b, Vec2::one()].into_iter().sum();
        assert_eq!(sum, Vec2::new(9.0, 11.0));
    }

    #[test]
    fn vec2_division_by_zero() {
        let (v, errors) = diag::capture(|| Vec2::new(1.0, 1.0) / 0.0);
        assert_eq!(v, Vec2::zero());
        assert_eq!(errors, vec![MathError::div_by_zero("Vec2")]);

        let mut w = Vec2::new(1.0, 2.0);
        let ((), errors) = diag::capture(|| w /= 0.0);
        assert_eq!(w, Vec2::new(1.0, 2.0));
        assert_eq!(errors.len(), 1);
        assert!(Vec2::new(1.0, 1.0).try_div(0.0).is_err());
    }

    #[test]
    fn vec2_element_access() {
        let mut v = Vec2::new(1.0, 2.0);
        assert_eq!(v.get(0), 1.0);
        assert_eq!(v[1], 2.0);
        v.set(0, 7.0);
        assert_eq!(v.x, 7.0);

        let (value, errors) = diag::capture(|| v.get(2));
        assert_eq!(value, 0.0);
        assert!(errors[0].is_index_out_of_range());
        let (value, errors) = diag::capture(|| v[5]);
        assert_eq!(value, 0.0);
        assert_eq!(errors.len(), 1);
        let ((), errors) = diag::capture(|| v.set(2, 9.0));
        assert_eq!(v, Vec2::new(7.0, 2.0));
        assert_eq!(errors, vec![MathError::index("Vec2", 2, 2)]);
        assert_eq!(v.try_get(2), Err(MathError::index("Vec2", 2, 2)));
    }

    #[test]
    fn vec2_len_and_normed() {
        let v = Vec2::new(3.0, -4.0);
        assert_eq!(v.dot(Vec2::new(2.0, 1.0)), 2.0);
        assert_eq!(v.len_squared(), 25.0);
        assert_eq!(v.len(), 5.0);
        assert_eq!(v.normed(), Vec2::new(0.6, -0.8));
        let mut w = v;
        w.normalize();
        assert_eq!(w, v.normed());

        let n = Vec2::zero().normed();
        assert!(n.x.is_nan() && n.y.is_nan());
        assert!(Vec2::zero().try_normed().is_err());
        assert_eq!(Vec2::new(0.0, 2.0).try_normed(), Ok(Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn vec2_misc() {
        assert!(Vec2::zero().is_zero());
        assert!(!Vec2::new(0.0, 1e-30).is_zero());
        assert_eq!(Vec2::new(1.0, 2.0).homogeneous(), Vec3::new(1.0, 2.0, 1.0));
        assert_eq!(Vec2::new(2.0, 0.0).cross(Vec2::new(0.0, 3.0)), 6.0);
        assert_eq!(
            Vec2::new(2.0, 3.0).component_wise(Vec2::new(4.0, -5.0)),
            Vec2::new(8.0, -15.0)
        );
        assert!(Vec2::new(1.0, 1.0).almost_eq(Vec2::new(1.0, 1.0 + 1e-7)));
        assert!(Vec2::new(1.0, 1.0) != Vec2::new(1.0, 1.0 + 1e-6));
    }

    #[test]
    fn vec2_display() {
        let v = Vec2::new(1.5, -2.25);
        assert_eq!(format!("{v}"), "vec2(1.500000, -2.250000)");
        assert_eq!(format!("{v:.2}"), "vec2(1.50, -2.25)");
    }
}
