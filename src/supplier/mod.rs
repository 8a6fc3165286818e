//! Collaborators that sit on either side of the pool.
//!
//! - [`BufferSupplier`] - How page content obtains and hands back buffers
//! - [`PooledSupplier`] - Supplier that tries the pool before allocating
//! - [`ViewHost`] - Lifecycle hooks that tear the pool down when hidden

use log::debug;
use std::sync::Arc;

use crate::buffer::{PixelBuffer, PixelFormat};
use crate::error::PoolError;
use crate::pool::{FitRequest, ReusePool};

/// A source of pixel buffers for page content.
pub trait BufferSupplier {
    /// Returns a mutable buffer with exactly this shape and format.
    fn request_buffer(
        &self,
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> Result<PixelBuffer, PoolError>;

    /// Takes back a buffer the caller no longer needs.
    fn return_buffer(&self, buffer: PixelBuffer) -> Result<(), PoolError>;
}

/// A [`BufferSupplier`] backed by a shared [`ReusePool`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use pixpool::{BufferSupplier, PixelFormat, PooledSupplier, ReusePool};
///
/// let pool = Arc::new(ReusePool::default());
/// let supplier = PooledSupplier::new(Arc::clone(&pool));
///
/// let page = supplier.request_buffer(64, 64, PixelFormat::Rgba8888)?;
/// let id = page.id();
/// supplier.return_buffer(page)?;
///
/// // The next request of the same shape reuses the returned buffer
/// let page = supplier.request_buffer(64, 64, PixelFormat::Rgba8888)?;
/// assert_eq!(page.id(), id);
/// # Ok::<(), pixpool::PoolError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PooledSupplier {
    pool: Arc<ReusePool>,
}

impl PooledSupplier {
    /// Creates a supplier drawing from `pool`.
    pub fn new(pool: Arc<ReusePool>) -> Self {
        Self { pool }
    }

    /// Returns the shared pool.
    pub fn pool(&self) -> &Arc<ReusePool> {
        &self.pool
    }

    /// Returns a buffer shaped for the decoded output of `request`.
    ///
    /// A pooled buffer accepted by the pool's default policy is reshaped in
    /// place; otherwise a fresh buffer of the output size is allocated.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidDimensions`] if the decoded output has a zero dimension
    /// - [`PoolError::CapacityOverflow`] if a fresh output buffer cannot be allocated
    pub fn decode_target(&self, request: &FitRequest) -> Result<PixelBuffer, PoolError> {
        let (width, height) = (request.output_width(), request.output_height());
        if width == 0 || height == 0 {
            return Err(PoolError::InvalidDimensions { width, height });
        }

        if let Some(mut buf) = self.pool.acquire_fit(request) {
            match buf.reconfigure(width, height, request.format()) {
                Ok(()) => return Ok(buf),
                // Legacy matches are chosen by source shape, not capacity
                Err(PoolError::InsufficientCapacity { .. }) => self.pool.release(buf)?,
                Err(e) => return Err(e),
            }
        }

        PixelBuffer::new(width, height, request.format())
    }
}

impl BufferSupplier for PooledSupplier {
    fn request_buffer(
        &self,
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> Result<PixelBuffer, PoolError> {
        match self.pool.acquire_exact_size(width, height, format) {
            Some(buf) => Ok(buf),
            None => PixelBuffer::new(width, height, format),
        }
    }

    fn return_buffer(&self, buffer: PixelBuffer) -> Result<(), PoolError> {
        self.pool.release(buffer)
    }
}

/// Lifecycle hooks for the view that owns a pool.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use pixpool::{PixelBuffer, PixelFormat, ReusePool, ViewHost};
///
/// let pool = Arc::new(ReusePool::default());
/// pool.release(PixelBuffer::new(8, 8, PixelFormat::Alpha8)?)?;
///
/// let host = ViewHost::new(pool);
/// assert_eq!(host.diagnostics_size(), 64);
/// host.on_background();
/// assert_eq!(host.diagnostics_size(), 0);
/// # Ok::<(), pixpool::PoolError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ViewHost {
    pool: Arc<ReusePool>,
}

impl ViewHost {
    /// Creates a host for `pool`.
    pub fn new(pool: Arc<ReusePool>) -> Self {
        Self { pool }
    }

    /// Releases all cached buffer memory while the view is hidden.
    pub fn on_background(&self) {
        let retired = self.pool.clear();
        debug!("view host: backgrounded, retired {} pooled buffers", retired);
    }

    /// Returns the bytes currently idle in the pool.
    pub fn diagnostics_size(&self) -> usize {
        self.pool.total_bytes()
    }
}
