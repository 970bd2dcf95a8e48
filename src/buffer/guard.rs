//! Scoped borrowing of pooled buffers.

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::{BufferPool, PoolBuffer};

/// A buffer borrowed from a [`BufferPool`] that goes back to the pool when
/// dropped.
///
/// Created by [`BufferPool::checkout`].
///
/// # Example
///
/// ```
/// use bpoolrs::BufferPool;
///
/// let pool: BufferPool<Vec<u8>> = BufferPool::new(4, 256);
/// {
///     let mut buf = pool.checkout();
///     buf.extend_from_slice(b"payload");
///     assert_eq!(&buf[..], b"payload");
/// }
/// assert_eq!(pool.idle(), 1);
/// ```
pub struct Pooled<'a, B: PoolBuffer> {
    pool: &'a BufferPool<B>,
    buf: Option<B>,
}

impl<'a, B: PoolBuffer> Pooled<'a, B> {
    pub(super) fn new(pool: &'a BufferPool<B>, buf: B) -> Self {
        Self {
            pool,
            buf: Some(buf),
        }
    }

    /// Takes the buffer out of the guard. It will not be returned to the
    /// pool.
    pub fn detach(mut self) -> B {
        // Only `Drop` empties the option.
        self.buf.take().unwrap()
    }
}

impl<B: PoolBuffer> Deref for Pooled<'_, B> {
    type Target = B;

    fn deref(&self) -> &B {
        self.buf.as_ref().unwrap()
    }
}

impl<B: PoolBuffer> DerefMut for Pooled<'_, B> {
    fn deref_mut(&mut self) -> &mut B {
        self.buf.as_mut().unwrap()
    }
}

impl<B: PoolBuffer> Drop for Pooled<'_, B> {
    fn drop(&mut self) {
        self.pool.release(self.buf.take());
    }
}

impl<B: PoolBuffer + fmt::Debug> fmt::Debug for Pooled<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pooled").field(&self.buf).finish()
    }
}
