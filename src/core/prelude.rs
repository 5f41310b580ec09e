#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context, Result};
#[allow(unused_imports)]
pub use tracing::{error, info, warn};

#[allow(unused_imports)]
pub use crate::{
    core::config::*,
    linalg,
    linalg::{
        geom::{
            angle, look_at, orthogonalize, orthographic_matrix, orthonormalize,
            perspective_matrix, proj, rotation_matrix, scale_matrix, translation_matrix,
        },
        homogeneous2d,
        interp::{lerp, nlerp, slerp, Lerp, Nlerp, Slerp},
        Mat2x2, Mat3x3, Mat4x4, Quat, Vec2, Vec3, Vec4, Vector,
    },
    memory::{Block, BlockPool, MatrixPool, PoolConfig},
    util::{
        diag::{self, CollectingSink, DiagnosticSink, TracingSink},
        error::MathError,
        gg_float,
    },
};
