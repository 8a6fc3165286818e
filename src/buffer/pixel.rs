//! The PixelBuffer type - an owned, reusable block of pixel memory.

use bytes::BytesMut;
use std::fmt;

use super::PixelFormat;
use crate::error::PoolError;
use crate::util::{checked_pixel_bytes, next_buffer_id, pixel_bytes};

/// A rectangular block of pixel memory with a logical shape and a backing allocation.
///
/// The backing allocation (`byte_capacity`) may be larger than the logical
/// shape needs (`byte_count`) when a buffer allocated for a large image is
/// reused for a smaller one via [`reconfigure`](PixelBuffer::reconfigure).
///
/// Each buffer carries a process-unique identity. `PixelBuffer` is not
/// `Clone`: holding one means owning it exclusively.
///
/// # Example
///
/// ```
/// use pixpool::{PixelBuffer, PixelFormat};
///
/// let mut buf = PixelBuffer::with_capacity(50, 20, PixelFormat::Rgba8888, 8000)?;
/// assert_eq!(buf.byte_count(), 4000);
/// assert_eq!(buf.byte_capacity(), 8000);
///
/// buf.reconfigure(100, 20, PixelFormat::Rgba8888)?;
/// assert_eq!(buf.byte_count(), 8000);
/// # Ok::<(), pixpool::PoolError>(())
/// ```
pub struct PixelBuffer {
    id: u64,
    width: u32,
    height: u32,
    format: PixelFormat,
    data: BytesMut,
    mutable: bool,
    retired: bool,
}

impl PixelBuffer {
    /// Allocates a zeroed, mutable buffer sized exactly for the given shape.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidDimensions`] if either dimension is zero
    /// - [`PoolError::CapacityOverflow`] if the byte size exceeds `isize::MAX`
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Result<Self, PoolError> {
        Self::with_capacity(width, height, format, 0)
    }

    /// Allocates a zeroed, mutable buffer with at least `capacity` backing bytes.
    ///
    /// The backing is never smaller than the logical shape needs.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidDimensions`] if either dimension is zero
    /// - [`PoolError::CapacityOverflow`] if the byte size exceeds `isize::MAX`
    pub fn with_capacity(
        width: u32,
        height: u32,
        format: PixelFormat,
        capacity: usize,
    ) -> Result<Self, PoolError> {
        check_dimensions(width, height)?;
        let needed = checked_pixel_bytes(width, height, format.bytes_per_pixel())
            .filter(|_| capacity <= isize::MAX as usize)
            .ok_or(PoolError::CapacityOverflow { width, height })?;

        Ok(Self {
            id: next_buffer_id(),
            width,
            height,
            format,
            data: BytesMut::zeroed(needed.max(capacity)),
            mutable: true,
            retired: false,
        })
    }

    /// Returns the buffer's identity.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the logical width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the logical height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the pixel format.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Returns the bytes the logical shape occupies.
    pub fn byte_count(&self) -> usize {
        pixel_bytes(self.width, self.height, self.format.bytes_per_pixel())
    }

    /// Returns the bytes backing the buffer (0 once retired).
    pub fn byte_capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the pixels may be overwritten in place.
    pub fn is_mutable(&self) -> bool {
        self.mutable
    }

    /// Returns true once the buffer has been retired.
    pub fn is_retired(&self) -> bool {
        self.retired
    }

    /// Returns true if the pool may hand this buffer out again.
    pub fn is_reusable(&self) -> bool {
        self.mutable && !self.retired
    }

    /// Marks the buffer immutable. There is no way back.
    pub fn freeze(&mut self) {
        self.mutable = false;
    }

    /// Retires the buffer and frees its backing memory.
    ///
    /// Calling this on an already retired buffer does nothing.
    pub fn retire(&mut self) {
        if self.retired {
            return;
        }
        self.retired = true;
        self.data = BytesMut::new();
    }

    /// Changes the logical shape without reallocating.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidDimensions`] if either dimension is zero
    /// - [`PoolError::RetiredBuffer`] / [`PoolError::ImmutableBuffer`] if the buffer cannot be reused
    /// - [`PoolError::InsufficientCapacity`] if the new shape does not fit the backing
    pub fn reconfigure(
        &mut self,
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> Result<(), PoolError> {
        check_dimensions(width, height)?;
        self.check_writable()?;

        let needed = pixel_bytes(width, height, format.bytes_per_pixel());
        if needed > self.byte_capacity() {
            return Err(PoolError::InsufficientCapacity {
                needed,
                capacity: self.byte_capacity(),
            });
        }

        self.width = width;
        self.height = height;
        self.format = format;
        Ok(())
    }

    /// Fills every byte of the logical pixel region with `value`.
    ///
    /// Does nothing on a retired buffer.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ImmutableBuffer`] if the buffer is frozen.
    pub fn erase(&mut self, value: u8) -> Result<(), PoolError> {
        if self.retired {
            return Ok(());
        }
        self.pixels_mut()?.fill(value);
        Ok(())
    }

    /// Returns the logical pixel bytes (empty once retired).
    pub fn pixels(&self) -> &[u8] {
        let len = self.byte_count().min(self.data.len());
        &self.data[..len]
    }

    /// Returns the logical pixel bytes for writing.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::RetiredBuffer`] or [`PoolError::ImmutableBuffer`].
    pub fn pixels_mut(&mut self) -> Result<&mut [u8], PoolError> {
        self.check_writable()?;
        let len = self.byte_count();
        Ok(&mut self.data[..len])
    }

    #[cfg(test)]
    pub(crate) fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    fn check_writable(&self) -> Result<(), PoolError> {
        if self.retired {
            return Err(PoolError::RetiredBuffer { id: self.id });
        }
        if !self.mutable {
            return Err(PoolError::ImmutableBuffer { id: self.id });
        }
        Ok(())
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<(), PoolError> {
    if width == 0 || height == 0 {
        return Err(PoolError::InvalidDimensions { width, height });
    }
    Ok(())
}

impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("id", &self.id)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("format", &self.format)
            .field("byte_capacity", &self.byte_capacity())
            .field("mutable", &self.mutable)
            .field("retired", &self.retired)
            .finish()
    }
}

impl fmt::Display for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PixelBuffer(#{} {}x{} {}, {} bytes",
            self.id,
            self.width,
            self.height,
            self.format,
            self.byte_capacity()
        )?;
        if self.retired {
            write!(f, ", retired")?;
        } else if !self.mutable {
            write!(f, ", frozen")?;
        }
        write!(f, ")")
    }
}
