use crate::core::config::{
    DEFAULT_MAT3_BLOCKS, DEFAULT_MAT3_INCREMENT, DEFAULT_MAT4_BLOCKS, DEFAULT_MAT4_INCREMENT,
};
use crate::linalg::{Mat3x3, Mat4x4};
use crate::memory::stats::PoolStats;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info, warn};

static NEXT_POOL_ID: AtomicUsize = AtomicUsize::new(0);

/// Errors that can occur when setting up a block pool.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PoolError {
    #[error("{pool}: initial block count and growth increment are both 0")]
    EmptyConfig { pool: &'static str },
}

/// A fixed-size buffer of `N` floats handed out by a [`BlockPool`].
///
/// Dereferences to `[f32; N]`. Give it back to the pool it came from with [`BlockPool::release`];
/// dropping it instead just frees the memory.
#[derive(Debug)]
pub struct Block<const N: usize> {
    data: Box<[f32; N]>,
    pool_id: usize,
    pooled: bool,
}

impl<const N: usize> Block<N> {
    /// False if the block was allocated on the heap because its pool was exhausted.
    pub fn is_pooled(&self) -> bool {
        self.pooled
    }
}

impl<const N: usize> Deref for Block<N> {
    type Target = [f32; N];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> DerefMut for Block<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

/// Free list of `N`-float blocks with O(1) acquire and release.
///
/// The pool starts with `initial` blocks. When it runs dry it allocates another `increment`
/// blocks, or, with an increment of 0, serves the request from the heap and counts the fallback
/// in its [`PoolStats`].
///
/// # Examples
/// ```
/// use glongge_math::core::prelude::*;
///
/// let mut pool = BlockPool::<4>::new(1, 0).unwrap();
/// let a = pool.acquire();
/// let b = pool.acquire();
/// assert!(a.is_pooled());
/// assert!(!b.is_pooled());
/// pool.release(a);
/// pool.release(b);
/// assert_eq!(pool.available(), 1);
/// assert_eq!(pool.stats().heap_fallbacks, 1);
/// ```
#[derive(Debug)]
pub struct BlockPool<const N: usize> {
    id: usize,
    free: Vec<Box<[f32; N]>>,
    increment: usize,
    capacity: usize,
    stats: PoolStats,
}

impl<const N: usize> BlockPool<N> {
    pub fn new(initial: usize, increment: usize) -> Result<Self, PoolError> {
        if initial == 0 && increment == 0 {
            return Err(PoolError::EmptyConfig {
                pool: Self::name(),
            });
        }
        let mut rv = Self {
            id: NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed),
            free: Vec::with_capacity(initial),
            increment,
            capacity: 0,
            stats: PoolStats::new(),
        };
        rv.allocate_blocks(initial);
        Ok(rv)
    }

    fn name() -> &'static str {
        match N {
            16 => "mat4x4 pool",
            9 => "mat3x3 pool",
            _ => "block pool",
        }
    }

    fn allocate_blocks(&mut self, count: usize) {
        self.free.extend((0..count).map(|_| Box::new([0.0; N])));
        self.capacity += count;
    }

    /// Hands out a block. Its contents are unspecified.
    pub fn acquire(&mut self) -> Block<N> {
        if self.free.is_empty() && self.increment > 0 {
            debug!(
                "{}: growing by {} blocks (capacity {})",
                Self::name(),
                self.increment,
                self.capacity
            );
            self.allocate_blocks(self.increment);
            self.stats.record_growth();
        }
        match self.free.pop() {
            Some(data) => {
                self.stats.record_acquisition(false);
                Block {
                    data,
                    pool_id: self.id,
                    pooled: true,
                }
            }
            None => {
                self.stats.record_acquisition(true);
                Block {
                    data: Box::new([0.0; N]),
                    pool_id: self.id,
                    pooled: false,
                }
            }
        }
    }

    /// Takes a block back. Blocks that came from the heap fallback are freed rather than kept, as
    /// are blocks acquired from a different pool, which are also left out of this pool's stats.
    pub fn release(&mut self, block: Block<N>) {
        if block.pool_id != self.id {
            warn!(
                "{}: freeing a block that belongs to another pool",
                Self::name()
            );
            return;
        }
        self.stats.record_release();
        if block.pooled {
            self.free.push(block.data);
        }
    }

    /// Blocks ready to be handed out without allocating.
    pub fn available(&self) -> usize {
        self.free.len()
    }
    /// Blocks owned by the pool, whether free or handed out.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn increment(&self) -> usize {
        self.increment
    }
    pub fn stats(&self) -> &PoolStats {
        &self.stats
    }
}

impl<const N: usize> Drop for BlockPool<N> {
    fn drop(&mut self) {
        info!("{}: shutting down, {}", Self::name(), self.stats.format_summary());
    }
}

/// Initial sizes and growth increments for a [`MatrixPool`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    pub mat4_blocks: usize,
    pub mat4_increment: usize,
    pub mat3_blocks: usize,
    pub mat3_increment: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            mat4_blocks: DEFAULT_MAT4_BLOCKS,
            mat4_increment: DEFAULT_MAT4_INCREMENT,
            mat3_blocks: DEFAULT_MAT3_BLOCKS,
            mat3_increment: DEFAULT_MAT3_INCREMENT,
        }
    }
}

/// Pooled storage for matrix elements: one pool of 16-float blocks and one of 9-float blocks.
///
/// Matrices are stored row-major, matching their in-memory layout.
///
/// # Examples
/// ```
/// use glongge_math::core::prelude::*;
///
/// let mut pool = MatrixPool::new(PoolConfig::default()).unwrap();
/// let m = translation_matrix(Vec3::new(1.0, 2.0, 3.0));
/// let block = pool.store_mat4(&m);
/// assert_eq!(block[3], 1.0);
/// assert_eq!(pool.load_mat4(block), m);
/// ```
#[derive(Debug)]
pub struct MatrixPool {
    mat4: BlockPool<16>,
    mat3: BlockPool<9>,
}

impl MatrixPool {
    pub fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let rv = Self {
            mat4: BlockPool::new(config.mat4_blocks, config.mat4_increment)?,
            mat3: BlockPool::new(config.mat3_blocks, config.mat3_increment)?,
        };
        info!(
            "matrix pool ready: {} mat4x4 blocks (+{}), {} mat3x3 blocks (+{})",
            config.mat4_blocks, config.mat4_increment, config.mat3_blocks, config.mat3_increment
        );
        Ok(rv)
    }

    pub fn store_mat4(&mut self, m: &Mat4x4) -> Block<16> {
        let mut block = self.mat4.acquire();
        for (dst, src) in block.iter_mut().zip(m.to_rows().iter().flatten()) {
            *dst = *src;
        }
        block
    }
    /// Reads the matrix back and returns the block to the pool.
    pub fn load_mat4(&mut self, block: Block<16>) -> Mat4x4 {
        let m = Mat4x4::from_rows(std::array::from_fn(|r| {
            std::array::from_fn(|c| block[r * 4 + c])
        }));
        self.mat4.release(block);
        m
    }

    pub fn store_mat3(&mut self, m: &Mat3x3) -> Block<9> {
        let mut block = self.mat3.acquire();
        for (dst, src) in block.iter_mut().zip(m.to_rows().iter().flatten()) {
            *dst = *src;
        }
        block
    }
    pub fn load_mat3(&mut self, block: Block<9>) -> Mat3x3 {
        let m = Mat3x3::from_rows(std::array::from_fn(|r| {
            std::array::from_fn(|c| block[r * 3 + c])
        }));
        self.mat3.release(block);
        m
    }

    pub fn mat4_pool(&self) -> &BlockPool<16> {
        &self.mat4
    }
    pub fn mat3_pool(&self) -> &BlockPool<9> {
        &self.mat3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::Vec3;
    use crate::util::assert::{check, check_eq, check_lt};

    #[test]
    fn pool_creation() {
        let pool = BlockPool::<16>::new(8, 4).unwrap();
        assert_eq!(pool.available(), 8);
        assert_eq!(pool.capacity(), 8);
        assert_eq!(pool.increment(), 4);
        assert_eq!(pool.stats().acquisitions, 0);

        let growing_only = BlockPool::<9>::new(0, 2).unwrap();
        assert_eq!(growing_only.available(), 0);
    }

    #[test]
    fn pool_rejects_empty_config() {
        let result = BlockPool::<16>::new(0, 0);
        assert!(matches!(result, Err(PoolError::EmptyConfig { .. })));
        assert_eq!(
            result.unwrap_err().to_string(),
            "mat4x4 pool: initial block count and growth increment are both 0"
        );
    }

    #[test]
    fn pool_acquire_release() {
        let mut pool = BlockPool::<4>::new(2, 0).unwrap();
        let mut a = pool.acquire();
        a[0] = 5.0;
        let b = pool.acquire();
        assert_eq!(pool.available(), 0);
        assert_eq!(pool.stats().outstanding(), 2);
        pool.release(a);
        pool.release(b);
        assert_eq!(pool.available(), 2);
        assert_eq!(pool.stats().outstanding(), 0);
        assert_eq!(pool.stats().peak_outstanding, 2);
        assert_eq!(pool.stats().heap_fallbacks, 0);
    }

    #[test]
    fn pool_growth() {
        let mut pool = BlockPool::<9>::new(1, 3).unwrap();
        let blocks: Vec<_> = (0..5).map(|_| pool.acquire()).collect();
        assert!(blocks.iter().all(Block::is_pooled));
        // 1 initial block, then two batches of 3.
        assert_eq!(pool.capacity(), 7);
        assert_eq!(pool.stats().growths, 2);
        assert_eq!(pool.available(), 2);
        for block in blocks {
            pool.release(block);
        }
        assert_eq!(pool.available(), 7);
        assert_eq!(pool.stats().heap_fallbacks, 0);
    }

    #[test]
    fn pool_heap_fallback() {
        let mut pool = BlockPool::<16>::new(1, 0).unwrap();
        let pooled = pool.acquire();
        let extra = pool.acquire();
        assert!(pooled.is_pooled());
        assert!(!extra.is_pooled());
        assert_eq!(pool.capacity(), 1);
        assert_eq!(pool.stats().heap_fallbacks, 1);
        pool.release(extra);
        // The fallback block is not adopted by the pool.
        assert_eq!(pool.available(), 0);
        pool.release(pooled);
        assert_eq!(pool.available(), 1);
        assert!((pool.stats().hit_rate() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn pool_frees_foreign_blocks() {
        let mut a = BlockPool::<16>::new(1, 0).unwrap();
        let mut b = BlockPool::<16>::new(1, 0).unwrap();
        let block = a.acquire();
        b.release(block);
        check_eq!(b.available(), 1);
        check_eq!(b.capacity(), 1);
        check_eq!(b.stats().releases, 0);
        check_eq!(a.available(), 0);
        check_eq!(a.stats().outstanding(), 1);

        let own = b.acquire();
        check!(own.is_pooled());
        b.release(own);
        check_lt!(0, b.available());
        check_eq!(b.available(), b.capacity());
    }

    #[test]
    fn matrix_pool_round_trip() {
        let mut pool = MatrixPool::new(PoolConfig::default()).unwrap();
        let mut m4 = Mat4x4::identity();
        m4.translate(Vec3::new(1.0, 2.0, 3.0)).rotate_z(0.5);
        let block = pool.store_mat4(&m4);
        assert_eq!(block[7], 2.0);
        assert_eq!(pool.mat4_pool().stats().outstanding(), 1);
        assert_eq!(pool.load_mat4(block), m4);
        assert_eq!(pool.mat4_pool().stats().outstanding(), 0);

        let m3 = Mat3x3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let block = pool.store_mat3(&m3);
        assert_eq!(*block, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(pool.load_mat3(block), m3);
        assert_eq!(pool.mat3_pool().available(), DEFAULT_MAT3_BLOCKS);
    }

    #[test]
    fn matrix_pool_config() {
        let config = PoolConfig {
            mat4_blocks: 0,
            mat4_increment: 0,
            ..PoolConfig::default()
        };
        assert!(MatrixPool::new(config).is_err());

        let config = PoolConfig {
            mat4_blocks: 1,
            mat4_increment: 0,
            mat3_blocks: 1,
            mat3_increment: 0,
        };
        let mut pool = MatrixPool::new(config).unwrap();
        let a = pool.store_mat4(&Mat4x4::identity());
        let b = pool.store_mat4(&Mat4x4::zero());
        assert_eq!(pool.mat4_pool().stats().heap_fallbacks, 1);
        assert!(pool.load_mat4(b).is_zero());
        assert!(pool.load_mat4(a).is_identity());
    }
}
