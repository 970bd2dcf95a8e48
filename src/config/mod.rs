//! Configuration for pool sizing.
//!
//! - [`PoolConfig`] - Idle-store bound and initial buffer capacity
//!
//! # Example
//!
//! ```
//! use bpoolrs::{BufferPool, PoolConfig};
//!
//! let config = PoolConfig::default()
//!     .with_size(128)
//!     .with_alloc(16 * 1024);
//!
//! let pool: BufferPool = BufferPool::with_config(config);
//! assert_eq!(pool.size(), 128);
//! ```

/// Default number of idle buffers retained.
pub const DEFAULT_POOL_SIZE: usize = 64;

/// Default initial capacity of fabricated buffers (4 KiB).
pub const DEFAULT_ALLOC_SIZE: usize = 4 * 1024;

/// Sizing for a [`BufferPool`](crate::BufferPool).
///
/// - `size` - Maximum number of idle buffers the pool keeps. Zero is
///   allowed and yields a pool that never retains anything.
/// - `alloc` - Initial capacity of buffers fabricated on a pool miss.
///
/// Every combination of values is valid. Pick `alloc` close to what most
/// writes need (around the 95th percentile) without overshooting, since
/// each idle buffer holds at least that much memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolConfig {
    size: usize,
    alloc: usize,
}

impl PoolConfig {
    /// Creates a new configuration.
    pub const fn new(size: usize, alloc: usize) -> Self {
        Self { size, alloc }
    }

    /// Sets the maximum number of idle buffers.
    pub const fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the initial capacity of fabricated buffers.
    pub const fn with_alloc(mut self, alloc: usize) -> Self {
        self.alloc = alloc;
        self
    }

    /// Returns the maximum number of idle buffers.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the initial capacity of fabricated buffers.
    pub const fn alloc(&self) -> usize {
        self.alloc
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_SIZE, DEFAULT_ALLOC_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_config_default() {
        let config = PoolConfig::default();
        assert_eq!(config.size(), 64);
        assert_eq!(config.alloc(), 4 * 1024);
    }

    #[test]
    fn test_pool_config_builder() {
        let config = PoolConfig::default().with_size(8).with_alloc(512);
        assert_eq!(config, PoolConfig::new(8, 512));
    }

    #[test]
    fn test_pool_config_zero_values() {
        let config = PoolConfig::new(0, 0);
        assert_eq!(config.size(), 0);
        assert_eq!(config.alloc(), 0);
    }
}
