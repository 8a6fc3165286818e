//! Internal utility functions and helpers.
//!
//! This module contains small helper functions used throughout the crate.
//! It is an implementation detail and not part of the public API.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_BUFFER_ID: AtomicU64 = AtomicU64::new(1);

/// Hands out a process-unique buffer identity.
///
/// Identities only need to be distinct, not ordered, so relaxed ordering is enough.
pub(crate) fn next_buffer_id() -> u64 {
    NEXT_BUFFER_ID.fetch_add(1, Ordering::Relaxed)
}

/// Logical byte size of a `width` x `height` image at `bytes_per_pixel`.
///
/// Saturates instead of overflowing so an absurd request can never look small.
pub(crate) fn pixel_bytes(width: u32, height: u32, bytes_per_pixel: usize) -> usize {
    (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(bytes_per_pixel)
}

/// Logical byte size, or `None` if it cannot back a single allocation.
pub(crate) fn checked_pixel_bytes(width: u32, height: u32, bytes_per_pixel: usize) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(bytes_per_pixel)
        .filter(|&bytes| bytes <= isize::MAX as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_distinct() {
        let a = next_buffer_id();
        let b = next_buffer_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_pixel_bytes() {
        assert_eq!(pixel_bytes(50, 20, 4), 4000);
        assert_eq!(pixel_bytes(0, 20, 4), 0);
        assert_eq!(pixel_bytes(u32::MAX, u32::MAX, usize::MAX), usize::MAX);
    }

    #[test]
    fn test_checked_pixel_bytes() {
        assert_eq!(checked_pixel_bytes(50, 20, 4), Some(4000));
        assert_eq!(checked_pixel_bytes(u32::MAX, u32::MAX, 4), None);
        assert_eq!(checked_pixel_bytes(u32::MAX, u32::MAX, 1), None);
    }
}
