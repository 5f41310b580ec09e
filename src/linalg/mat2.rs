use crate::core::config::EPSILON;
use crate::linalg::{fmt_rows, Vec2};
use crate::util::diag;
use crate::util::error::MathError;
use crate::util::gg_err;
use num_traits::{One, Zero};
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign},
};

const ZERO_ROW: [f32; 2] = [0.0; 2];

/// A 2x2 matrix stored row-major, acting on column vectors.
///
/// # Examples
/// ```
/// use glongge_math::core::prelude::*;
///
/// let mut m = Mat2x2::identity();
/// m.scale(Vec2::new(2.0, 3.0));
/// assert_eq!(m * Vec2::new(1.0, 1.0), Vec2::new(2.0, 3.0));
/// assert_eq!(m.det(), 6.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat2x2 {
    data: [[f32; 2]; 2],
}

impl Mat2x2 {
    /// Creates a matrix from its elements in row-major order.
    #[must_use]
    pub const fn new(m00: f32, m01: f32, m10: f32, m11: f32) -> Mat2x2 {
        Mat2x2 {
            data: [[m00, m01], [m10, m11]],
        }
    }
    #[must_use]
    pub const fn from_rows(rows: [[f32; 2]; 2]) -> Mat2x2 {
        Mat2x2 { data: rows }
    }
    #[must_use]
    pub const fn identity() -> Mat2x2 {
        Mat2x2::new(1.0, 0.0, 0.0, 1.0)
    }
    #[must_use]
    pub const fn zero() -> Mat2x2 {
        Mat2x2 {
            data: [[0.0; 2]; 2],
        }
    }

    #[must_use]
    pub fn to_rows(&self) -> [[f32; 2]; 2] {
        self.data
    }

    pub fn try_get(&self, row: usize, col: usize) -> Result<f32, MathError> {
        if row < 2 && col < 2 {
            Ok(self.data[row][col])
        } else {
            Err(MathError::matrix_index(row, col, 2))
        }
    }
    /// Returns the element at `(row, col)`, or reports the bad index and returns 0.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        gg_err::report_or(0.0, self.try_get(row, col))
    }
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        if row < 2 && col < 2 {
            self.data[row][col] = value;
        } else {
            diag::report(MathError::matrix_index(row, col, 2));
        }
    }
    /// Returns element `i` of the row-major storage.
    #[must_use]
    pub fn get_flat(&self, i: usize) -> f32 {
        if i < 4 {
            self.data[i / 2][i % 2]
        } else {
            diag::report(MathError::index("Mat2x2", i, 4));
            0.0
        }
    }
    pub fn set_flat(&mut self, i: usize, value: f32) {
        if i < 4 {
            self.data[i / 2][i % 2] = value;
        } else {
            diag::report(MathError::index("Mat2x2", i, 4));
        }
    }

    #[must_use]
    pub fn det(&self) -> f32 {
        let [[a, b], [c, d]] = self.data;
        a * d - b * c
    }

    pub fn transpose(&mut self) {
        *self = self.transposed();
    }
    #[must_use]
    pub fn transposed(&self) -> Mat2x2 {
        let [[a, b], [c, d]] = self.data;
        Mat2x2::new(a, c, b, d)
    }

    /// Returns the inverse. A singular matrix is not special-cased and gives infinite or `NaN`
    /// elements; see [`Mat2x2::try_inverse`].
    #[must_use]
    pub fn inverse(&self) -> Mat2x2 {
        let [[a, b], [c, d]] = self.data;
        let inv_det = 1.0 / self.det();
        Mat2x2::new(d * inv_det, -b * inv_det, -c * inv_det, a * inv_det)
    }
    pub fn invert(&mut self) {
        *self = self.inverse();
    }
    pub fn try_inverse(&self) -> Result<Mat2x2, MathError> {
        if self.det() == 0.0 {
            Err(MathError::invalid("Mat2x2 is singular"))
        } else {
            Ok(self.inverse())
        }
    }

    pub fn set_identity(&mut self) {
        *self = Mat2x2::identity();
    }
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Mat2x2::identity()
    }
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Mat2x2::zero()
    }

    #[must_use]
    pub fn almost_eq(&self, rhs: Mat2x2) -> bool {
        self.almost_eq_eps(rhs, EPSILON)
    }
    #[must_use]
    pub fn almost_eq_eps(&self, rhs: Mat2x2, eps: f32) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(rhs.data.iter().flatten())
            .all(|(a, b)| (a - b).abs() < eps)
    }

    /// Post-multiplies by a scale along each axis.
    pub fn scale(&mut self, s: Vec2) -> &mut Self {
        *self = *self * Mat2x2::new(s.x, 0.0, 0.0, s.y);
        self
    }
    /// Post-multiplies by an anticlockwise rotation of `radians`.
    pub fn rotate(&mut self, radians: f32) -> &mut Self {
        let (s, c) = radians.sin_cos();
        *self = *self * Mat2x2::new(c, -s, s, c);
        self
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Mat2x2 {
        Mat2x2 {
            data: self.data.map(|row| row.map(&f)),
        }
    }
    fn zip_with(self, rhs: Mat2x2, f: impl Fn(f32, f32) -> f32) -> Mat2x2 {
        let mut rv = self;
        for (r, row) in rv.data.iter_mut().enumerate() {
            for (c, x) in row.iter_mut().enumerate() {
                *x = f(*x, rhs.data[r][c]);
            }
        }
        rv
    }

    pub fn try_div(&self, rhs: f32) -> Result<Mat2x2, MathError> {
        if rhs == 0.0 {
            Err(MathError::div_by_zero("Mat2x2"))
        } else {
            Ok(self.map(|x| x / rhs))
        }
    }
}

impl Default for Mat2x2 {
    fn default() -> Self {
        Mat2x2::identity()
    }
}

impl One for Mat2x2 {
    fn one() -> Self {
        Mat2x2::identity()
    }
}

impl Zero for Mat2x2 {
    fn zero() -> Self {
        Mat2x2::zero()
    }

    fn is_zero(&self) -> bool {
        Mat2x2::is_zero(self)
    }
}

impl Index<usize> for Mat2x2 {
    type Output = [f32; 2];

    fn index(&self, index: usize) -> &Self::Output {
        if index < 2 {
            &self.data[index]
        } else {
            diag::report(MathError::index("Mat2x2 row", index, 2));
            &ZERO_ROW
        }
    }
}

impl fmt::Display for Mat2x2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_rows(f, "mat2x2", &self.data)
    }
}

impl Add<Mat2x2> for Mat2x2 {
    type Output = Mat2x2;

    fn add(self, rhs: Mat2x2) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}
impl AddAssign<Mat2x2> for Mat2x2 {
    fn add_assign(&mut self, rhs: Mat2x2) {
        *self = *self + rhs;
    }
}

impl Sub<Mat2x2> for Mat2x2 {
    type Output = Mat2x2;

    fn sub(self, rhs: Mat2x2) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}
impl SubAssign<Mat2x2> for Mat2x2 {
    fn sub_assign(&mut self, rhs: Mat2x2) {
        *self = *self - rhs;
    }
}

impl Neg for Mat2x2 {
    type Output = Mat2x2;

    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}

impl Mul<f32> for Mat2x2 {
    type Output = Mat2x2;

    fn mul(self, rhs: f32) -> Self::Output {
        self.map(|x| x * rhs)
    }
}
impl Mul<Mat2x2> for f32 {
    type Output = Mat2x2;

    fn mul(self, rhs: Mat2x2) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Mat2x2 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

/// Dividing by exactly 0 reports [`MathError::DivisionByZero`] and returns the zero matrix.
impl Div<f32> for Mat2x2 {
    type Output = Mat2x2;

    fn div(self, rhs: f32) -> Self::Output {
        gg_err::report_or_else(self.try_div(rhs), Mat2x2::zero)
    }
}
impl DivAssign<f32> for Mat2x2 {
    fn div_assign(&mut self, rhs: f32) {
        match self.try_div(rhs) {
            Ok(m) => *self = m,
            Err(e) => diag::report(e),
        }
    }
}

impl Mul<Vec2> for Mat2x2 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        let [[a, b], [c, d]] = self.data;
        Vec2 {
            x: a * rhs.x + b * rhs.y,
            y: c * rhs.x + d * rhs.y,
        }
    }
}

impl Mul<Mat2x2> for Mat2x2 {
    type Output = Mat2x2;

    fn mul(self, rhs: Mat2x2) -> Self::Output {
        let [[a00, a01], [a10, a11]] = self.data;
        let [[b00, b01], [b10, b11]] = rhs.data;
        Mat2x2::new(
            a00 * b00 + a01 * b10,
            a00 * b01 + a01 * b11,
            a10 * b00 + a11 * b10,
            a10 * b01 + a11 * b11,
        )
    }
}
impl MulAssign<Mat2x2> for Mat2x2 {
    fn mul_assign(&mut self, rhs: Mat2x2) {
        *self = *self * rhs;
    }
}
