use crate::core::config::EPSILON;
use crate::linalg::{fmt_rows, Quat, Vec2, Vec3};
use crate::util::diag;
use crate::util::error::MathError;
use crate::util::gg_err;
use num_traits::{One, Zero};
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign},
};

const ZERO_ROW: [f32; 3] = [0.0; 3];

/// A 3x3 matrix stored row-major, acting on column vectors.
///
/// Used both for 3D linear transforms (rotation and scale) and for 2D affine transforms in
/// homogeneous coordinates, see [`homogeneous2d`](crate::linalg::homogeneous2d).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3x3 {
    data: [[f32; 3]; 3],
}

impl Mat3x3 {
    /// Creates a matrix from its elements in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub const fn new(
        m00: f32,
        m01: f32,
        m02: f32,
        m10: f32,
        m11: f32,
        m12: f32,
        m20: f32,
        m21: f32,
        m22: f32,
    ) -> Mat3x3 {
        Mat3x3 {
            data: [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]],
        }
    }
    #[must_use]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Mat3x3 {
        Mat3x3 { data: rows }
    }
    #[must_use]
    pub const fn identity() -> Mat3x3 {
        Mat3x3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0)
    }
    #[must_use]
    pub const fn zero() -> Mat3x3 {
        Mat3x3 {
            data: [[0.0; 3]; 3],
        }
    }

    #[must_use]
    pub fn to_rows(&self) -> [[f32; 3]; 3] {
        self.data
    }

    pub fn try_get(&self, row: usize, col: usize) -> Result<f32, MathError> {
        if row < 3 && col < 3 {
            Ok(self.data[row][col])
        } else {
            Err(MathError::matrix_index(row, col, 3))
        }
    }
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        gg_err::report_or(0.0, self.try_get(row, col))
    }
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        if row < 3 && col < 3 {
            self.data[row][col] = value;
        } else {
            diag::report(MathError::matrix_index(row, col, 3));
        }
    }
    #[must_use]
    pub fn get_flat(&self, i: usize) -> f32 {
        if i < 9 {
            self.data[i / 3][i % 3]
        } else {
            diag::report(MathError::index("Mat3x3", i, 9));
            0.0
        }
    }
    pub fn set_flat(&mut self, i: usize, value: f32) {
        if i < 9 {
            self.data[i / 3][i % 3] = value;
        } else {
            diag::report(MathError::index("Mat3x3", i, 9));
        }
    }

    /// Calculates the determinant by expanding along the first row.
    ///
    /// # Examples
    /// ```
    /// use glongge_math::core::prelude::*;
    ///
    /// let m = Mat3x3::new(2.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 4.0);
    /// assert_eq!(m.det(), 24.0);
    /// ```
    #[must_use]
    pub fn det(&self) -> f32 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.data;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    pub fn transpose(&mut self) {
        *self = self.transposed();
    }
    #[must_use]
    pub fn transposed(&self) -> Mat3x3 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.data;
        Mat3x3::new(a, d, g, b, e, h, c, f, i)
    }

    /// Returns the inverse via the adjugate. A singular matrix is not special-cased and gives
    /// infinite or `NaN` elements; see [`Mat3x3::try_inverse`].
    #[must_use]
    pub fn inverse(&self) -> Mat3x3 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.data;
        let inv_det = 1.0 / self.det();
        Mat3x3::new(
            (e * i - f * h) * inv_det,
            (c * h - b * i) * inv_det,
            (b * f - c * e) * inv_det,
            (f * g - d * i) * inv_det,
            (a * i - c * g) * inv_det,
            (c * d - a * f) * inv_det,
            (d * h - e * g) * inv_det,
            (b * g - a * h) * inv_det,
            (a * e - b * d) * inv_det,
        )
    }
    pub fn invert(&mut self) {
        *self = self.inverse();
    }
    pub fn try_inverse(&self) -> Result<Mat3x3, MathError> {
        if self.det() == 0.0 {
            Err(MathError::invalid("Mat3x3 is singular"))
        } else {
            Ok(self.inverse())
        }
    }

    pub fn set_identity(&mut self) {
        *self = Mat3x3::identity();
    }
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Mat3x3::identity()
    }
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Mat3x3::zero()
    }

    #[must_use]
    pub fn almost_eq(&self, rhs: Mat3x3) -> bool {
        self.almost_eq_eps(rhs, EPSILON)
    }
    #[must_use]
    pub fn almost_eq_eps(&self, rhs: Mat3x3, eps: f32) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(rhs.data.iter().flatten())
            .all(|(a, b)| (a - b).abs() < eps)
    }

    pub fn scale(&mut self, s: Vec3) -> &mut Self {
        *self = *self * Mat3x3::new(s.x, 0.0, 0.0, 0.0, s.y, 0.0, 0.0, 0.0, s.z);
        self
    }
    /// Post-multiplies by a rotation of `radians` about `axis`, which need not be normalised.
    /// A zero axis is reported as [`MathError::InvalidArgument`] and leaves the matrix as it was.
    pub fn rotate(&mut self, axis: Vec3, radians: f32) -> &mut Self {
        if axis.is_zero() {
            diag::report(MathError::invalid("rotation axis is zero"));
        } else {
            *self = *self * Quat::from_axis_angle(axis, radians).to_mat3();
        }
        self
    }
    pub fn rotate_x(&mut self, radians: f32) -> &mut Self {
        let (s, c) = radians.sin_cos();
        *self = *self * Mat3x3::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c);
        self
    }
    pub fn rotate_y(&mut self, radians: f32) -> &mut Self {
        let (s, c) = radians.sin_cos();
        *self = *self * Mat3x3::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c);
        self
    }
    pub fn rotate_z(&mut self, radians: f32) -> &mut Self {
        let (s, c) = radians.sin_cos();
        *self = *self * Mat3x3::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0);
        self
    }

    /// Transforms a 2D point as `(x, y, 1)` and drops the resulting `z`, i.e. treats the matrix
    /// as an affine 2D transform.
    #[must_use]
    pub fn transform_point2(&self, p: Vec2) -> Vec2 {
        Vec2::from(*self * p.homogeneous())
    }
    /// Transforms a 2D direction as `(x, y, 0)`, ignoring any translation.
    #[must_use]
    pub fn transform_vector2(&self, v: Vec2) -> Vec2 {
        Vec2::from(*self * Vec3::from_vec2(v, 0.0))
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Mat3x3 {
        Mat3x3 {
            data: self.data.map(|row| row.map(&f)),
        }
    }
    fn zip_with(self, rhs: Mat3x3, f: impl Fn(f32, f32) -> f32) -> Mat3x3 {
        let mut rv = self;
        for (r, row) in rv.data.iter_mut().enumerate() {
            for (c, x) in row.iter_mut().enumerate() {
                *x = f(*x, rhs.data[r][c]);
            }
        }
        rv
    }

    pub fn try_div(&self, rhs: f32) -> Result<Mat3x3, MathError> {
        if rhs == 0.0 {
            Err(MathError::div_by_zero("Mat3x3"))
        } else {
            Ok(self.map(|x| x / rhs))
        }
    }
}

impl Default for Mat3x3 {
    fn default() -> Self {
        Mat3x3::identity()
    }
}

impl One for Mat3x3 {
    fn one() -> Self {
        Mat3x3::identity()
    }
}

impl Zero for Mat3x3 {
    fn zero() -> Self {
        Mat3x3::zero()
    }

    fn is_zero(&self) -> bool {
        Mat3x3::is_zero(self)
    }
}

impl Index<usize> for Mat3x3 {
    type Output = [f32; 3];

    fn index(&self, index: usize) -> &Self::Output {
        if index < 3 {
            &self.data[index]
        } else {
            diag::report(MathError::index("Mat3x3 row", index, 3));
            &ZERO_ROW
        }
    }
}

impl fmt::Display for Mat3x3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_rows(f, "mat3x3", &self.data)
    }
}

impl Add<Mat3x3> for Mat3x3 {
    type Output = Mat3x3;

    fn add(self, rhs: Mat3x3) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}
impl AddAssign<Mat3x3> for Mat3x3 {
    fn add_assign(&mut self, rhs: Mat3x3) {
        *self = *self + rhs;
    }
}

impl Sub<Mat3x3> for Mat3x3 {
    type Output = Mat3x3;

    fn sub(self, rhs: Mat3x3) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}
impl SubAssign<Mat3x3> for Mat3x3 {
    fn sub_assign(&mut self, rhs: Mat3x3) {
        *self = *self - rhs;
    }
}

impl Neg for Mat3x3 {
    type Output = Mat3x3;

    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}

impl Mul<f32> for Mat3x3 {
    type Output = Mat3x3;

    fn mul(self, rhs: f32) -> Self::Output {
        self.map(|x| x * rhs)
    }
}
impl Mul<Mat3x3> for f32 {
    type Output = Mat3x3;

    fn mul(self, rhs: Mat3x3) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Mat3x3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Mat3x3 {
    type Output = Mat3x3;

    fn div(self, rhs: f32) -> Self::Output {
        gg_err::report_or_else(self.try_div(rhs), Mat3x3::zero)
    }
}
impl DivAssign<f32> for Mat3x3 {
    fn div_assign(&mut self, rhs: f32) {
        match self.try_div(rhs) {
            Ok(m) => *self = m,
            Err(e) => diag::report(e),
        }
    }
}

impl Mul<Vec3> for Mat3x3 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.data;
        Vec3 {
            x: a * rhs.x + b * rhs.y + c * rhs.z,
            y: d * rhs.x + e * rhs.y + f * rhs.z,
            z: g * rhs.x + h * rhs.y + i * rhs.z,
        }
    }
}

impl Mul<Mat3x3> for Mat3x3 {
    type Output = Mat3x3;

    fn mul(self, rhs: Mat3x3) -> Self::Output {
        let [[a00, a01, a02], [a10, a11, a12], [a20, a21, a22]] = self.data;
        let [[b00, b01, b02], [b10, b11, b12], [b20, b21, b22]] = rhs.data;
        Mat3x3::new(
            a00 * b00 + a01 * b10 + a02 * b20,
            a00 * b01 + a01 * b11 + a02 * b21,
            a00 * b02 + a01 * b12 + a02 * b22,
            a10 * b00 + a11 * b10 + a12 * b20,
            a10 * b01 + a11 * b11 + a12 * b21,
            a10 * b02 + a11 * b12 + a12 * b22,
            a20 * b00 + a21 * b10 + a22 * b20,
            a20 * b01 + a21 * b11 + a22 * b21,
            a20 * b02 + a21 * b12 + a22 * b22,
        )
    }
}
impl MulAssign<Mat3x3> for Mat3x3 {
    fn mul_assign(&mut self, rhs: Mat3x3) {
        *self = *self * rhs;
    }
}
