//! bpoolrs
//!
//! A bounded, lock-free pool of reusable growable byte buffers.
//!
//! `bpoolrs` cuts allocation churn on hot serialization and I/O paths where
//! buffers are borrowed, filled and returned over and over:
//!
//! - [`BufferPool::acquire`] never blocks. An empty pool fabricates a fresh
//!   buffer with the configured initial capacity.
//! - [`BufferPool::release`] never blocks. A full pool drops the buffer.
//! - Returned buffers are reset to length zero but keep their capacity.
//!
//! The crate intentionally:
//! - does NOT cap buffer sizes
//! - does NOT shrink over-grown buffers
//! - does NOT collect usage statistics
//! - does NOT resize itself
//!
//! Choosing `size` and `alloc` is up to the caller.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use bpoolrs::BufferPool;
//!
//! let pool: Arc<BufferPool> = Arc::new(BufferPool::new(8, 1024));
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|i| {
//!         let pool = Arc::clone(&pool);
//!         thread::spawn(move || {
//!             let mut buf = pool.acquire();
//!             buf.extend_from_slice(format!("worker {i}").as_bytes());
//!             pool.release(buf);
//!         })
//!     })
//!     .collect();
//!
//! for h in handles {
//!     h.join().unwrap();
//! }
//! assert!(pool.idle() <= pool.size());
//! ```
//!
//! # Buffer types
//!
//! Any [`PoolBuffer`] can be pooled. [`bytes::BytesMut`] is the default;
//! `Vec<u8>` works as well:
//!
//! ```
//! use bpoolrs::BufferPool;
//!
//! let pool: BufferPool<Vec<u8>> = BufferPool::new(4, 256);
//! let mut buf = pool.checkout();
//! buf.extend_from_slice(b"released when `buf` goes out of scope");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod config;
mod error;

//
// Public surface
//

pub use buffer::{BufferPool, PoolBuffer, Pooled};
pub use config::{DEFAULT_ALLOC_SIZE, DEFAULT_POOL_SIZE, PoolConfig};
pub use error::ReleaseError;
