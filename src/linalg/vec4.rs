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

/// A 4D vector, mostly used for homogeneous coordinates: points have `w = 1` and directions
/// have `w = 0`.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
        Vec4 { x, y, z, w }
    }
    #[must_use]
    pub const fn zero() -> Vec4 {
        Vec4::splat(0.0)
    }
    #[must_use]
    pub const fn one() -> Vec4 {
        Vec4::splat(1.0)
    }
    #[must_use]
    pub const fn splat(v: f32) -> Vec4 {
        Vec4 {
            x: v,
            y: v,
            z: v,
            w: v,
        }
    }
    #[must_use]
    pub const fn from_vec3(v: Vec3, w: f32) -> Vec4 {
        Vec4 {
            x: v.x,
            y: v.y,
            z: v.z,
            w,
        }
    }

    pub fn try_get(&self, i: usize) -> Result<f32, MathError> {
        match i {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            3 => Ok(self.w),
            _ => Err(MathError::index("Vec4", i, 4)),
        }
    }
    #[must_use]
    pub fn get(&self, i: usize) -> f32 {
        gg_err::report_or(0.0, self.try_get(i))
    }
    pub fn set(&mut self, i: usize, value: f32) {
        match i {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            3 => self.w = value,
            _ => diag::report(MathError::index("Vec4", i, 4)),
        }
    }

    #[must_use]
    pub fn dot(&self, other: Vec4) -> f32 {
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
    /// Unguarded: the zero vector yields `NaN`s.
    #[must_use]
    pub fn normed(&self) -> Vec4 {
        let len = self.len();
        Vec4 {
            x: self.x / len,
            y: self.y / len,
            z: self.z / len,
            w: self.w / len,
        }
    }
    pub fn normalize(&mut self) {
        *self = self.normed();
    }
    pub fn try_normed(&self) -> Result<Vec4, MathError> {
        if self.is_zero() {
            Err(MathError::invalid("tried to normalise a zero Vec4"))
        } else {
            Ok(self.normed())
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0 && self.w == 0.0
    }

    /// Divides through by `w`, mapping a homogeneous point back to 3D. A zero `w` is reported as
    /// a division by zero and gives the zero vector.
    #[must_use]
    pub fn project(&self) -> Vec3 {
        Vec3::from(*self) / self.w
    }

    #[must_use]
    pub fn component_wise(&self, other: Vec4) -> Vec4 {
        Vec4 {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
            w: self.w * other.w,
        }
    }

    pub fn try_div(&self, rhs: f32) -> Result<Vec4, MathError> {
        if rhs == 0.0 {
            Err(MathError::div_by_zero("Vec4"))
        } else {
            Ok(Vec4 {
                x: self.x / rhs,
                y: self.y / rhs,
                z: self.z / rhs,
                w: self.w / rhs,
            })
        }
    }

    #[must_use]
    pub fn almost_eq(&self, rhs: Vec4) -> bool {
        self.almost_eq_eps(rhs, EPSILON)
    }
    #[must_use]
    pub fn almost_eq_eps(&self, rhs: Vec4, eps: f32) -> bool {
        (*self - rhs).len() < eps
    }

    #[must_use]
    pub fn xyz(&self) -> Vec3 {
        Vec3::from(*self)
    }
    #[must_use]
    pub fn to_array(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl Vector for Vec4 {
    const DIM: usize = 4;
    const NAME: &'static str = "Vec4";

    fn dot(&self, other: Vec4) -> f32 {
        Vec4::dot(self, other)
    }
    fn get(&self, i: usize) -> f32 {
        Vec4::get(self, i)
    }
    fn set(&mut self, i: usize, value: f32) {
        Vec4::set(self, i, value);
    }
    fn len(&self) -> f32 {
        Vec4::len(self)
    }
    fn normed(&self) -> Vec4 {
        Vec4::normed(self)
    }
}

impl Zero for Vec4 {
    fn zero() -> Self {
        Vec4::zero()
    }

    fn is_zero(&self) -> bool {
        Vec4::is_zero(self)
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(value: [f32; 4]) -> Self {
        Vec4::new(value[0], value[1], value[2], value[3])
    }
}

impl From<Vec4> for [f32; 4] {
    fn from(value: Vec4) -> Self {
        value.to_array()
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => {
                diag::report(MathError::index("Vec4", index, 4));
                &0.0
            }
        }
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_components(f, "vec4", &self.to_array())
    }
}

impl Add<Vec4> for Vec4 {
    type Output = Vec4;

    fn add(self, rhs: Vec4) -> Self::Output {
        Vec4 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}
impl AddAssign<Vec4> for Vec4 {
    fn add_assign(&mut self, rhs: Vec4) {
        *self = *self + rhs;
    }
}

impl Sub<Vec4> for Vec4 {
    type Output = Vec4;

    fn sub(self, rhs: Vec4) -> Self::Output {
        Vec4 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}
impl SubAssign<Vec4> for Vec4 {
    fn sub_assign(&mut self, rhs: Vec4) {
        *self = *self - rhs;
    }
}

impl Sum<Vec4> for Vec4 {
    fn sum<I: Iterator<Item = Vec4>>(iter: I) -> Self {
        iter.fold(Vec4::zero(), Vec4::add)
    }
}

impl Mul<f32> for Vec4 {
    type Output = Vec4;

    fn mul(self, rhs: f32) -> Self::Output {
        Vec4 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
            w: self.w * rhs,
        }
    }
}
impl Mul<Vec4> for f32 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Vec4 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Vec4 {
    type Output = Vec4;

    fn div(self, rhs: f32) -> Self::Output {
        gg_err::report_or_else(self.try_div(rhs), Vec4::zero)
    }
}
impl DivAssign<f32> for Vec4 {
    fn div_assign(&mut self, rhs: f32) {
        match self.try_div(rhs) {
            Ok(v) => *self = v,
            Err(e) => diag::report(e),
        }
    }
}

impl Neg for Vec4 {
    type Output = Vec4;

    fn neg(self) -> Self::Output {
        Vec4 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}
