//! Buffer types managed by the pool.
//!
//! - [`PoolBuffer`] - What the pool needs from a growable byte container
//! - [`BufferPool`] - Bounded, lock-free pool of idle buffers
//! - [`Pooled`] - RAII guard that releases its buffer on drop

mod guard;
mod pool;

pub use guard::Pooled;
pub use pool::BufferPool;

use bytes::BytesMut;

/// A growable, contiguous byte container that can be recycled by a
/// [`BufferPool`].
///
/// The pool only ever creates, resets and inspects buffers. Writing is done
/// through the concrete type's own API (`extend_from_slice`, [`bytes::BufMut`],
/// [`std::io::Write`]).
pub trait PoolBuffer: Sized {
    /// Creates an empty buffer able to hold at least `capacity` bytes
    /// without reallocating.
    fn with_capacity(capacity: usize) -> Self;

    /// Sets the length to zero, keeping the allocation.
    fn reset(&mut self);

    /// Number of bytes currently written.
    fn len(&self) -> usize;

    /// Number of bytes the buffer can hold without reallocating.
    fn capacity(&self) -> usize;

    /// Returns true if no bytes are written.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PoolBuffer for BytesMut {
    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        BytesMut::with_capacity(capacity)
    }

    #[inline]
    fn reset(&mut self) {
        self.clear();
    }

    #[inline]
    fn len(&self) -> usize {
        BytesMut::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        BytesMut::capacity(self)
    }
}

impl PoolBuffer for Vec<u8> {
    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    #[inline]
    fn reset(&mut self) {
        self.clear();
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }
}
