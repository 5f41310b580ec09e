//! Pooled storage for matrix-sized blocks of floats.
//!
//! Each pool is an ordinary value with a single owner: create it once, pass it by `&mut` to
//! whatever needs scratch matrices, and let `Drop` tear it down.

pub mod pool;
pub mod stats;

pub use pool::{Block, BlockPool, MatrixPool, PoolConfig, PoolError};
pub use stats::PoolStats;
