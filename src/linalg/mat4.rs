use crate::core::config::EPSILON;
use crate::linalg::{fmt_rows, Mat3x3, Quat, Vec3, Vec4};
use crate::util::diag;
use crate::util::error::MathError;
use crate::util::gg_err;
use num_traits::{One, Zero};
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign},
};

const ZERO_ROW: [f32; 4] = [0.0; 4];

/// A 4x4 matrix stored row-major, acting on column vectors in homogeneous coordinates.
///
/// The builder methods post-multiply, so the last call is the first transform applied:
/// ```
/// use glongge_math::core::prelude::*;
///
/// let mut m = Mat4x4::identity();
/// m.translate(Vec3::new(1.0, 0.0, 0.0)).scale_uniform(2.0);
/// // Scaled first, then translated.
/// assert_eq!(m.transform_point(Vec3::new(1.0, 1.0, 1.0)), Vec3::new(3.0, 2.0, 2.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4x4 {
    data: [[f32; 4]; 4],
}

impl Mat4x4 {
    /// Creates a matrix from its elements in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub const fn new(
        m00: f32,
        m01: f32,
        m02: f32,
        m03: f32,
        m10: f32,
        m11: f32,
        m12: f32,
        m13: f32,
        m20: f32,
        m21: f32,
        m22: f32,
        m23: f32,
        m30: f32,
        m31: f32,
        m32: f32,
        m33: f32,
    ) -> Mat4x4 {
        Mat4x4 {
            data: [
                [m00, m01, m02, m03],
                [m10, m11, m12, m13],
                [m20, m21, m22, m23],
                [m30, m31, m32, m33],
            ],
        }
    }
    #[must_use]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Mat4x4 {
        Mat4x4 { data: rows }
    }
    #[must_use]
    pub const fn identity() -> Mat4x4 {
        Mat4x4 {
            data: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }
    #[must_use]
    pub const fn zero() -> Mat4x4 {
        Mat4x4 {
            data: [[0.0; 4]; 4],
        }
    }
    /// Embeds a 3x3 linear transform in the upper-left block of an identity matrix.
    #[must_use]
    pub fn from_mat3(m: Mat3x3) -> Mat4x4 {
        let mut rv = Mat4x4::identity();
        for (r, row) in m.to_rows().into_iter().enumerate() {
            rv.data[r][..3].copy_from_slice(&row);
        }
        rv
    }

    #[must_use]
    pub fn to_rows(&self) -> [[f32; 4]; 4] {
        self.data
    }

    pub fn try_get(&self, row: usize, col: usize) -> Result<f32, MathError> {
        if row < 4 && col < 4 {
            Ok(self.data[row][col])
        } else {
            Err(MathError::matrix_index(row, col, 4))
        }
    }
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        gg_err::report_or(0.0, self.try_get(row, col))
    }
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        if row < 4 && col < 4 {
            self.data[row][col] = value;
        } else {
            diag::report(MathError::matrix_index(row, col, 4));
        }
    }
    #[must_use]
    pub fn get_flat(&self, i: usize) -> f32 {
        if i < 16 {
            self.data[i / 4][i % 4]
        } else {
            diag::report(MathError::index("Mat4x4", i, 16));
            0.0
        }
    }
    pub fn set_flat(&mut self, i: usize, value: f32) {
        if i < 16 {
            self.data[i / 4][i % 4] = value;
        } else {
            diag::report(MathError::index("Mat4x4", i, 16));
        }
    }

    /// The 3x3 matrix left after deleting `row` and `col`.
    fn minor(&self, row: usize, col: usize) -> Mat3x3 {
        let mut rv = Mat3x3::zero();
        let rows = (0..4).filter(|&r| r != row);
        for (i, r) in rows.enumerate() {
            let cols = (0..4).filter(|&c| c != col);
            for (j, c) in cols.enumerate() {
                rv.set(i, j, self.data[r][c]);
            }
        }
        rv
    }
    fn cofactor(&self, row: usize, col: usize) -> f32 {
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        sign * self.minor(row, col).det()
    }

    /// Calculates the determinant by cofactor expansion along the first row.
    #[must_use]
    pub fn det(&self) -> f32 {
        (0..4).map(|c| self.data[0][c] * self.cofactor(0, c)).sum()
    }

    pub fn transpose(&mut self) {
        *self = self.transposed();
    }
    #[must_use]
    pub fn transposed(&self) -> Mat4x4 {
        let mut rv = *self;
        for (r, row) in rv.data.iter_mut().enumerate() {
            for (c, x) in row.iter_mut().enumerate() {
                *x = self.data[c][r];
            }
        }
        rv
    }

    /// Returns the inverse as the transposed cofactor matrix over the determinant. A singular
    /// matrix is not special-cased and gives infinite or `NaN` elements; see
    /// [`Mat4x4::try_inverse`].
    #[must_use]
    pub fn inverse(&self) -> Mat4x4 {
        let cofactors: [[f32; 4]; 4] =
            std::array::from_fn(|r| std::array::from_fn(|c| self.cofactor(r, c)));
        let det = (0..4).map(|c| self.data[0][c] * cofactors[0][c]).sum::<f32>();
        let inv_det = 1.0 / det;
        let mut rv = Mat4x4::zero();
        for (r, row) in rv.data.iter_mut().enumerate() {
            for (c, x) in row.iter_mut().enumerate() {
                *x = cofactors[c][r] * inv_det;
            }
        }
        rv
    }
    pub fn invert(&mut self) {
        *self = self.inverse();
    }
    pub fn try_inverse(&self) -> Result<Mat4x4, MathError> {
        if self.det() == 0.0 {
            Err(MathError::invalid("Mat4x4 is singular"))
        } else {
            Ok(self.inverse())
        }
    }

    pub fn set_identity(&mut self) {
        *self = Mat4x4::identity();
    }
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Mat4x4::identity()
    }
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Mat4x4::zero()
    }

    #[must_use]
    pub fn almost_eq(&self, rhs: Mat4x4) -> bool {
        self.almost_eq_eps(rhs, EPSILON)
    }
    #[must_use]
    pub fn almost_eq_eps(&self, rhs: Mat4x4, eps: f32) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(rhs.data.iter().flatten())
            .all(|(a, b)| (a - b).abs() < eps)
    }

    /// Post-multiplies by a scale along each axis; `w` is left alone.
    pub fn scale(&mut self, s: Vec3) -> &mut Self {
        let mut t = Mat4x4::identity();
        t.data[0][0] = s.x;
        t.data[1][1] = s.y;
        t.data[2][2] = s.z;
        *self = *self * t;
        self
    }
    pub fn scale_uniform(&mut self, factor: f32) -> &mut Self {
        self.scale(Vec3::splat(factor))
    }
    pub fn translate(&mut self, offset: Vec3) -> &mut Self {
        let mut t = Mat4x4::identity();
        t.data[0][3] = offset.x;
        t.data[1][3] = offset.y;
        t.data[2][3] = offset.z;
        *self = *self * t;
        self
    }
    /// Post-multiplies by a rotation of `radians` about `axis`, which need not be normalised.
    /// A zero axis is reported as [`MathError::InvalidArgument`] and leaves the matrix as it was.
    pub fn rotate(&mut self, axis: Vec3, radians: f32) -> &mut Self {
        if axis.is_zero() {
            diag::report(MathError::invalid("rotation axis is zero"));
        } else {
            *self = *self * Quat::from_axis_angle(axis, radians).to_matrix();
        }
        self
    }
    pub fn rotate_x(&mut self, radians: f32) -> &mut Self {
        let mut m = Mat3x3::identity();
        m.rotate_x(radians);
        *self = *self * Mat4x4::from_mat3(m);
        self
    }
    pub fn rotate_y(&mut self, radians: f32) -> &mut Self {
        let mut m = Mat3x3::identity();
        m.rotate_y(radians);
        *self = *self * Mat4x4::from_mat3(m);
        self
    }
    pub fn rotate_z(&mut self, radians: f32) -> &mut Self {
        let mut m = Mat3x3::identity();
        m.rotate_z(radians);
        *self = *self * Mat4x4::from_mat3(m);
        self
    }

    /// Transforms a point as `(x, y, z, 1)` and drops the resulting `w`, i.e. treats the matrix
    /// as an affine transform. Use [`Mat4x4::project_point`] for projections.
    #[must_use]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        Vec3::from(*self * p.homogeneous())
    }
    /// Transforms a direction as `(x, y, z, 0)`, ignoring any translation.
    #[must_use]
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        Vec3::from(*self * Vec4::from_vec3(v, 0.0))
    }
    /// Transforms a point and divides through by the resulting `w`. A zero `w` is reported as a
    /// division by zero and gives the zero vector.
    #[must_use]
    pub fn project_point(&self, p: Vec3) -> Vec3 {
        (*self * p.homogeneous()).project()
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Mat4x4 {
        Mat4x4 {
            data: self.data.map(|row| row.map(&f)),
        }
    }
    fn zip_with(self, rhs: Mat4x4, f: impl Fn(f32, f32) -> f32) -> Mat4x4 {
        let mut rv = self;
        for (r, row) in rv.data.iter_mut().enumerate() {
            for (c, x) in row.iter_mut().enumerate() {
                *x = f(*x, rhs.data[r][c]);
            }
        }
        rv
    }

    pub fn try_div(&self, rhs: f32) -> Result<Mat4x4, MathError> {
        if rhs == 0.0 {
            Err(MathError::div_by_zero("Mat4x4"))
        } else {
            Ok(self.map(|x| x / rhs))
        }
    }
}

impl Default for Mat4x4 {
    fn default() -> Self {
        Mat4x4::identity()
    }
}

impl One for Mat4x4 {
    fn one() -> Self {
        Mat4x4::identity()
    }
}

impl Zero for Mat4x4 {
    fn zero() -> Self {
        Mat4x4::zero()
    }

    fn is_zero(&self) -> bool {
        Mat4x4::is_zero(self)
    }
}

impl From<Mat3x3> for Mat4x4 {
    fn from(value: Mat3x3) -> Self {
        Mat4x4::from_mat3(value)
    }
}

impl Index<usize> for Mat4x4 {
    type Output = [f32; 4];

    fn index(&self, index: usize) -> &Self::Output {
        if index < 4 {
            &self.data[index]
        } else {
            diag::report(MathError::index("Mat4x4 row", index, 4));
            &ZERO_ROW
        }
    }
}

impl fmt::Display for Mat4x4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_rows(f, "mat4x4", &self.data)
    }
}

impl Add<Mat4x4> for Mat4x4 {
    type Output = Mat4x4;

    fn add(self, rhs: Mat4x4) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}
impl AddAssign<Mat4x4> for Mat4x4 {
    fn add_assign(&mut self, rhs: Mat4x4) {
        *self = *self + rhs;
    }
}

impl Sub<Mat4x4> for Mat4x4 {
    type Output = Mat4x4;

    fn sub(self, rhs: Mat4x4) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}
impl SubAssign<Mat4x4> for Mat4x4 {
    fn sub_assign(&mut self, rhs: Mat4x4) {
        *self = *self - rhs;
    }
}

impl Neg for Mat4x4 {
    type Output = Mat4x4;

    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}

impl Mul<f32> for Mat4x4 {
    type Output = Mat4x4;

    fn mul(self, rhs: f32) -> Self::Output {
        self.map(|x| x * rhs)
    }
}
impl Mul<Mat4x4> for f32 {
    type Output = Mat4x4;

    fn mul(self, rhs: Mat4x4) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Mat4x4 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Mat4x4 {
    type Output = Mat4x4;

    fn div(self, rhs: f32) -> Self::Output {
        gg_err::report_or_else(self.try_div(rhs), Mat4x4::zero)
    }
}
impl DivAssign<f32> for Mat4x4 {
    fn div_assign(&mut self, rhs: f32) {
        match self.try_div(rhs) {
            Ok(m) => *self = m,
            Err(e) => diag::report(e),
        }
    }
}

impl Mul<Vec4> for Mat4x4 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Self::Output {
        let [r0, r1, r2, r3] = self.data;
        let v = rhs.to_array();
        let row_dot = |row: [f32; 4]| row[0] * v[0] + row[1] * v[1] + row[2] * v[2] + row[3] * v[3];
        Vec4 {
            x: row_dot(r0),
            y: row_dot(r1),
            z: row_dot(r2),
            w: row_dot(r3),
        }
    }
}

impl Mul<Mat4x4> for Mat4x4 {
    type Output = Mat4x4;

    fn mul(self, rhs: Mat4x4) -> Self::Output {
        let [[a00, a01, a02, a03], [a10, a11, a12, a13], [a20, a21, a22, a23], [a30, a31, a32, a33]] =
            self.data;
        let [[b00, b01, b02, b03], [b10, b11, b12, b13], [b20, b21, b22, b23], [b30, b31, b32, b33]] =
            rhs.data;
        Mat4x4::new(
            a00 * b00 + a01 * b10 + a02 * b20 + a03 * b30,
            a00 * b01 + a01 * b11 + a02 * b21 + a03 * b31,
            a00 * b02 + a01 * b12 + a02 * b22 + a03 * b32,
            a00 * b03 + a01 * b13 + a02 * b23 + a03 * b33,
            a10 * b00 + a11 * b10 + a12 * b20 + a13 * b30,
            a10 * b01 + a11 * b11 + a12 * b21 + a13 * b31,
            a10 * b02 + a11 * b12 + a12 * b22 + a13 * b32,
            a10 * b03 + a11 * b13 + a12 * b23 + a13 * b33,
            a20 * b00 + a21 * b10 + a22 * b20 + a23 * b30,
            a20 * b01 + a21 * b11 + a22 * b21 + a23 * b31,
            a20 * b02 + a21 * b12 + a22 * b22 + a23 * b32,
            a20 * b03 + a21 * b13 + a22 * b23 + a23 * b33,
            a30 * b00 + a31 * b10 + a32 * b20 + a33 * b30,
            a30 * b01 + a31 * b11 + a32 * b21 + a33 * b31,
            a30 * b02 + a31 * b12 + a32 * b22 + a33 * b32,
            a30 * b03 + a31 * b13 + a32 * b23 + a33 * b33,
        )
    }
}
impl MulAssign<Mat4x4> for Mat4x4 {
    fn mul_assign(&mut self, rhs: Mat4x4) {
        *self = *self * rhs;
    }
}
