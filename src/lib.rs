//! Small linear algebra library for 3D transform pipelines: vectors, square matrices,
//! quaternions, interpolation, and pooled matrix storage.
pub mod core;
pub mod linalg;
pub mod memory;
pub mod util;
