//! Error types for pixpool.

use std::fmt;

/// Errors that can occur while creating, reshaping or releasing pixel buffers.
///
/// An acquire that finds nothing is not an error; it returns `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// A buffer was requested with a zero dimension.
    InvalidDimensions {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The byte size of the requested buffer cannot be allocated.
    CapacityOverflow {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The buffer has already been retired and its memory freed.
    RetiredBuffer {
        /// Identity of the offending buffer.
        id: u64,
    },

    /// A buffer with this identity is already held by the pool.
    DuplicateRelease {
        /// Identity of the offending buffer.
        id: u64,
    },

    /// The buffer's pixels cannot be modified.
    ImmutableBuffer {
        /// Identity of the offending buffer.
        id: u64,
    },

    /// The backing allocation is too small for the requested shape.
    InsufficientCapacity {
        /// Bytes the new shape needs.
        needed: usize,
        /// Bytes the buffer actually has.
        capacity: usize,
    },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
            PoolError::InvalidDimensions { width, height } => {
                write!(f, "invalid dimensions: {}x{}", width, height)
            }
            PoolError::CapacityOverflow { width, height } => {
                write!(f, "capacity overflow: {}x{} exceeds addressable memory", width, height)
            }
            PoolError::RetiredBuffer { id } => write!(f, "buffer #{} is retired", id),
            PoolError::DuplicateRelease { id } => {
                write!(f, "buffer #{} is already in the pool", id)
            }
            PoolError::ImmutableBuffer { id } => write!(f, "buffer #{} is immutable", id),
            PoolError::InsufficientCapacity { needed, capacity } => {
                write!(
                    f,
                    "insufficient capacity: {} bytes needed (have {})",
                    needed, capacity
                )
            }
        }
    }
}

impl std::error::Error for PoolError {}
