//! Error types for bpoolrs.

use std::fmt;

/// A buffer the pool declined to keep, handed back to the caller.
///
/// Only returned by [`BufferPool::try_release`](crate::BufferPool::try_release).
/// [`BufferPool::release`](crate::BufferPool::release) drops the buffer
/// instead.
pub enum ReleaseError<B> {
    /// The idle store was at capacity.
    Full(B),

    /// The pool was built with `size == 0` and retains nothing.
    Unretained(B),
}

impl<B> ReleaseError<B> {
    /// Recovers the rejected buffer.
    pub fn into_inner(self) -> B {
        match self {
            ReleaseError::Full(buf) | ReleaseError::Unretained(buf) => buf,
        }
    }
}

// Buffers are not printed; their contents are arbitrary bytes.
impl<B> fmt::Debug for ReleaseError<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseError::Full(_) => f.write_str("Full(..)"),
            ReleaseError::Unretained(_) => f.write_str("Unretained(..)"),
        }
    }
}

impl<B> fmt::Display for ReleaseError<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseError::Full(_) => write!(f, "pool is full"),
            ReleaseError::Unretained(_) => write!(f, "pool retains no buffers"),
        }
    }
}

impl<B> std::error::Error for ReleaseError<B> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_inner() {
        let err = ReleaseError::Full(vec![1u8, 2]);
        assert_eq!(err.into_inner(), vec![1, 2]);

        let err = ReleaseError::Unretained(vec![3u8]);
        assert_eq!(err.into_inner(), vec![3]);
    }

    #[test]
    fn test_display() {
        assert!(ReleaseError::Full(()).to_string().contains("full"));
        assert!(ReleaseError::Unretained(()).to_string().contains("retains no"));
    }

    #[test]
    fn test_debug_hides_buffer() {
        let err = ReleaseError::Full(vec![0xFFu8; 4]);
        assert_eq!(format!("{:?}", err), "Full(..)");
    }

    #[test]
    fn test_boxed_error() {
        let err: Box<dyn std::error::Error> = Box::new(ReleaseError::Full(Vec::<u8>::new()));
        assert_eq!(err.to_string(), "pool is full");
    }
}
