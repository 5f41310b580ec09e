//! Fixed-size vectors, square matrices and quaternions for 3D transform pipelines.
//!
//! Every type here is a plain `Copy` value. Equality is exact (no epsilon); use the
//! `almost_eq()` methods where accumulated floating point error matters.
//!
//! Conventions:
//! - Matrices are stored row-major and multiply column vectors (`m * v`).
//! - The world is right-handed: [`Vec3::UP`] is +Y, [`Vec3::RIGHT`] is +X and
//!   [`Vec3::FORWARD`] is -Z. The projection builders in [`geom`] follow the same convention.
//! - Transform builders such as [`Mat4x4::translate`] post-multiply, so the most recent call is
//!   the first one applied to a vector.
use crate::core::config::DEFAULT_PRECISION;
use itertools::Itertools;
use num_traits::Zero;
use std::fmt;
use std::fmt::Formatter;
use std::ops::{Add, Div, Mul, Neg, Sub};

pub mod geom;
pub mod homogeneous2d;
pub mod interp;
mod mat2;
mod mat3;
mod mat4;
mod quat;
mod vec2;
mod vec3;
mod vec4;

pub use mat2::Mat2x2;
pub use mat3::Mat3x3;
pub use mat4::Mat4x4;
pub use quat::Quat;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Operations shared by [`Vec2`], [`Vec3`] and [`Vec4`], so that the interpolation and geometry
/// functions can be written once.
pub trait Vector:
    Copy
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<f32, Output = Self>
    + Div<f32, Output = Self>
{
    /// Number of components.
    const DIM: usize;
    /// Type name used in diagnostics.
    const NAME: &'static str;

    fn dot(&self, other: Self) -> f32;
    fn get(&self, i: usize) -> f32;
    fn set(&mut self, i: usize, value: f32);

    fn len_squared(&self) -> f32 {
        self.dot(*self)
    }
    /// Stays finite and non-zero for any finite non-zero vector, even when
    /// [`len_squared`](Vector::len_squared) would underflow or overflow.
    fn len(&self) -> f32;
    /// Unguarded: a zero vector comes back as `NaN`s.
    fn normed(&self) -> Self;
}

pub(crate) fn fmt_components(
    f: &mut Formatter<'_>,
    name: &str,
    components: &[f32],
) -> fmt::Result {
    let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
    write!(
        f,
        "{name}({})",
        components
            .iter()
            .map(|x| format!("{x:.precision$}"))
            .join(", ")
    )
}

/// Renders the rows of a matrix one per line, with the rows lined up under the first:
/// ```text
/// mat2x2: [1.000000, 0.000000]
///         [0.000000, 1.000000]
/// ```
pub(crate) fn fmt_rows<const N: usize>(
    f: &mut Formatter<'_>,
    name: &str,
    rows: &[[f32; N]; N],
) -> fmt::Result {
    let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
    let prefix = format!("{name}: ");
    let offset = " ".repeat(prefix.len());
    let lines = rows
        .iter()
        .map(|row| {
            format!(
                "[{}]",
                row.iter().map(|x| format!("{x:.precision$}")).join(", ")
            )
        })
        .enumerate()
        .map(|(i, row)| if i == 0 { format!("{prefix}{row}") } else { format!("{offset}{row}") })
        .join("\n");
    write!(f, "{lines}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generic_len<V: Vector>(v: V) -> f32 {
        v.len()
    }

    #[test]
    fn vector_trait_defaults() {
        assert_eq!(generic_len(Vec2::new(3.0, 4.0)), 5.0);
        assert_eq!(generic_len(Vec3::new(2.0, 3.0, 6.0)), 7.0);
        assert_eq!(generic_len(Vec4::new(1.0, 1.0, 1.0, 1.0)), 2.0);
        assert_eq!(<Vec3 as Vector>::DIM, 3);
        assert_eq!(<Vec4 as Vector>::NAME, "Vec4");

        let n = Vector::normed(&Vec2::new(0.0, 2.0));
        assert_eq!(n, Vec2::new(0.0, 1.0));
        let nan = Vector::normed(&Vec3::zero());
        assert!(nan.x.is_nan() && nan.y.is_nan() && nan.z.is_nan());
    }

    #[test]
    fn vector_trait_get_set() {
        let mut v = Vec4::zero();
        Vector::set(&mut v, 3, 2.5);
        assert_eq!(Vector::get(&v, 3), 2.5);
        assert_eq!(v.w, 2.5);
    }
}
