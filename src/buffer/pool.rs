//! Bounded, lock-free buffer pool.

use std::fmt;

use bytes::BytesMut;
use crossbeam_queue::ArrayQueue;

use super::{PoolBuffer, Pooled};
use crate::config::PoolConfig;
use crate::error::ReleaseError;

/// A bounded pool of reusable byte buffers.
///
/// Idle buffers live in a fixed-capacity lock-free queue. Neither
/// [`acquire`](Self::acquire) nor [`release`](Self::release) ever blocks:
/// an empty pool fabricates a fresh buffer with `alloc` bytes of capacity,
/// and a full pool drops the returned buffer.
///
/// The pool never shrinks buffers. A buffer that grew while borrowed keeps
/// its capacity when it is handed out again.
///
/// # Example
///
/// ```
/// use bpoolrs::BufferPool;
///
/// let pool: BufferPool = BufferPool::new(16, 4096);
///
/// let mut buf = pool.acquire();
/// buf.extend_from_slice(b"hello world");
/// pool.release(buf);
///
/// let buf = pool.acquire();
/// assert!(buf.is_empty());
/// assert!(buf.capacity() >= 4096);
/// ```
pub struct BufferPool<B = BytesMut> {
    /// Idle buffers. `None` when the pool was built with `size == 0`,
    /// since a zero-capacity queue cannot exist.
    slots: Option<ArrayQueue<B>>,
    config: PoolConfig,
}

impl<B: PoolBuffer> BufferPool<B> {
    /// Creates a pool retaining at most `size` idle buffers, fabricating
    /// new ones with `alloc` bytes of initial capacity.
    ///
    /// Both values are accepted as-is. With `size == 0` the pool retains
    /// nothing: every acquire fabricates and every release discards.
    pub fn new(size: usize, alloc: usize) -> Self {
        Self::with_config(PoolConfig::new(size, alloc))
    }

    /// Creates a pool from a [`PoolConfig`].
    pub fn with_config(config: PoolConfig) -> Self {
        let slots = (config.size() > 0).then(|| ArrayQueue::new(config.size()));
        Self { slots, config }
    }

    /// Takes an idle buffer, or fabricates one if none is available.
    ///
    /// The returned buffer is empty and exclusively owned by the caller.
    #[inline]
    pub fn acquire(&self) -> B {
        match self.try_acquire() {
            Some(buf) => buf,
            None => {
                tracing::trace!(alloc = self.config.alloc(), "pool miss, fabricating buffer");
                B::with_capacity(self.config.alloc())
            }
        }
    }

    /// Takes an idle buffer without ever fabricating one.
    #[inline]
    pub fn try_acquire(&self) -> Option<B> {
        self.slots.as_ref()?.pop()
    }

    /// Hands a buffer back to the pool.
    ///
    /// `None` is accepted and ignored. A present buffer is reset to length
    /// zero and offered to the idle store; if the store is full it is
    /// dropped instead. The caller gives up the buffer either way.
    ///
    /// The fullness check before the reset is opportunistic: concurrent
    /// releases may fill the store between the check and the insert, in
    /// which case the insert fails and the buffer is dropped. The store
    /// itself never holds more than `size` buffers.
    #[inline]
    pub fn release(&self, buf: impl Into<Option<B>>) {
        let Some(buf) = buf.into() else {
            return;
        };
        if let Err(err) = self.try_release(buf) {
            tracing::trace!(size = self.config.size(), "{}, discarding buffer", err);
        }
    }

    /// Like [`release`](Self::release), but gives the buffer back on
    /// rejection instead of dropping it.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::Unretained`] if the pool was built with
    /// `size == 0`, or [`ReleaseError::Full`] if the idle store is full.
    pub fn try_release(&self, mut buf: B) -> Result<(), ReleaseError<B>> {
        let Some(slots) = self.slots.as_ref() else {
            return Err(ReleaseError::Unretained(buf));
        };
        // Skip the reset when there is obviously no room.
        if slots.is_full() {
            return Err(ReleaseError::Full(buf));
        }
        buf.reset();
        slots.push(buf).map_err(ReleaseError::Full)
    }

    /// Borrows a buffer behind a guard that releases it when dropped.
    pub fn checkout(&self) -> Pooled<'_, B> {
        Pooled::new(self, self.acquire())
    }
}

impl<B> BufferPool<B> {
    /// Maximum number of idle buffers retained.
    pub fn size(&self) -> usize {
        self.config.size()
    }

    /// Initial capacity of fabricated buffers.
    pub fn alloc(&self) -> usize {
        self.config.alloc()
    }

    /// The configuration this pool was built with.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Number of idle buffers at this instant.
    ///
    /// Under concurrent use the value may be stale as soon as it is read.
    pub fn idle(&self) -> usize {
        self.slots.as_ref().map_or(0, ArrayQueue::len)
    }

    /// Returns true if no buffer is idle.
    pub fn is_empty(&self) -> bool {
        self.idle() == 0
    }

    /// Returns true if a release would currently be discarded.
    pub fn is_full(&self) -> bool {
        self.slots.as_ref().is_none_or(ArrayQueue::is_full)
    }
}

impl<B: PoolBuffer> Default for BufferPool<B> {
    fn default() -> Self {
        Self::with_config(PoolConfig::default())
    }
}

impl<B> fmt::Debug for BufferPool<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferPool")
            .field("size", &self.size())
            .field("alloc", &self.alloc())
            .field("idle", &self.idle())
            .finish()
    }
}
