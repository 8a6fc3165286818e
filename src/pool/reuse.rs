//! Core reuse pool - a lock-guarded set of idle pixel buffers.
//!
//! Every operation takes the same [`parking_lot::Mutex`] for its whole
//! duration, so "find a match and remove it" is atomic across threads and
//! [`ReusePool::clear`] is observed entirely before or after any acquire.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pixpool::{PixelBuffer, PixelFormat, ReusePool};
//!
//! let pool = Arc::new(ReusePool::default());
//!
//! let page = PixelBuffer::new(320, 480, PixelFormat::Rgba8888)?;
//! let id = page.id();
//! pool.release(page)?;
//!
//! let again = pool.acquire_exact_size(320, 480, PixelFormat::Rgba8888).unwrap();
//! assert_eq!(again.id(), id);
//! assert!(pool.is_empty());
//! # Ok::<(), pixpool::PoolError>(())
//! ```

use log::{debug, trace};
use parking_lot::Mutex;
use std::collections::HashSet;

use super::{FitRequest, PoolStats};
use crate::buffer::{PixelBuffer, PixelFormat};
use crate::config::{FitPolicy, PoolConfig};
use crate::error::PoolError;

/// A thread-safe pool of idle pixel buffers.
///
/// The pool owns only idle buffers. A successful acquire moves the buffer out
/// to the caller; [`release`](ReusePool::release) moves it back in. Share a
/// pool between threads with `Arc<ReusePool>`.
///
/// Acquire never allocates. On a miss the caller allocates a fresh buffer.
#[derive(Debug, Default)]
pub struct ReusePool {
    config: PoolConfig,
    inner: Mutex<PoolInner>,
}

#[derive(Debug, Default)]
struct PoolInner {
    buffers: Vec<PixelBuffer>,
    ids: HashSet<u64>,
    total_bytes: usize,
    hits: u64,
    misses: u64,
    purged: u64,
    retired: u64,
}

impl PoolInner {
    /// Drops every entry that can no longer be handed out.
    fn compact(&mut self) {
        let before = self.buffers.len();
        let mut freed = 0;
        let ids = &mut self.ids;
        self.buffers.retain(|buf| {
            if buf.is_reusable() {
                true
            } else {
                freed += buf.byte_capacity();
                ids.remove(&buf.id());
                false
            }
        });

        let purged = before - self.buffers.len();
        if purged > 0 {
            self.total_bytes -= freed;
            self.purged += purged as u64;
            trace!("reuse pool: purged {} stale buffers ({} bytes)", purged, freed);
        }
    }

    /// Compacts, then removes and returns the first buffer matching `pred`.
    fn take_first(&mut self, pred: impl Fn(&PixelBuffer) -> bool) -> Option<PixelBuffer> {
        self.compact();

        match self.buffers.iter().position(pred) {
            Some(pos) => {
                let buf = self.buffers.swap_remove(pos);
                self.ids.remove(&buf.id());
                self.total_bytes -= buf.byte_capacity();
                self.hits += 1;
                Some(buf)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    fn exceeds(&self, incoming: usize, max: usize) -> bool {
        self.total_bytes.saturating_add(incoming) > max
    }

    fn push(&mut self, buffer: PixelBuffer) {
        self.ids.insert(buffer.id());
        self.total_bytes += buffer.byte_capacity();
        self.buffers.push(buffer);
    }
}

impl ReusePool {
    /// Creates an empty pool with the given configuration.
    pub fn new(config: PoolConfig) -> Self {
        Self {
            config,
            inner: Mutex::new(PoolInner::default()),
        }
    }

    /// Returns the pool configuration.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Removes and returns an idle buffer with exactly this shape and format.
    ///
    /// Returns `None` if nothing matches.
    pub fn acquire_exact_size(
        &self,
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> Option<PixelBuffer> {
        let found = self.inner.lock().take_first(|buf| {
            buf.width() == width && buf.height() == height && buf.format() == format
        });

        match &found {
            Some(buf) => trace!("reuse pool: hit {}", buf),
            None => trace!("reuse pool: miss {}x{} {}", width, height, format),
        }
        found
    }

    /// Removes and returns the first idle buffer that can back `request` under `policy`.
    ///
    /// The returned buffer keeps its previous shape; callers that decode into
    /// it reshape it with [`PixelBuffer::reconfigure`].
    ///
    /// # Example
    ///
    /// ```
    /// use pixpool::{FitPolicy, FitRequest, PixelBuffer, PixelFormat, ReusePool};
    ///
    /// let pool = ReusePool::default();
    /// pool.release(PixelBuffer::new(50, 20, PixelFormat::Rgba8888)?)?;
    ///
    /// let request = FitRequest::new(50, 20, PixelFormat::Rgba8888).with_sample_size(2);
    /// assert!(pool.acquire_best_fit(&request, FitPolicy::Modern).is_some());
    /// # Ok::<(), pixpool::PoolError>(())
    /// ```
    pub fn acquire_best_fit(&self, request: &FitRequest, policy: FitPolicy) -> Option<PixelBuffer> {
        let found = self
            .inner
            .lock()
            .take_first(|buf| request.fits(buf, policy));

        match &found {
            Some(buf) => trace!("reuse pool: {:?} fit {}", policy, buf),
            None => trace!(
                "reuse pool: no {:?} fit for {} bytes ({}x{}/{})",
                policy,
                request.needed_bytes(),
                request.width(),
                request.height(),
                request.sample_size()
            ),
        }
        found
    }

    /// Like [`acquire_best_fit`](ReusePool::acquire_best_fit) with the configured default policy.
    pub fn acquire_fit(&self, request: &FitRequest) -> Option<PixelBuffer> {
        self.acquire_best_fit(request, self.config.default_policy())
    }

    /// Returns a buffer to the pool.
    ///
    /// Frozen buffers are accepted and dropped by the next acquire's compaction.
    /// If a byte ceiling is configured and the buffer does not fit under it,
    /// the buffer is retired instead and `Ok(())` is returned.
    ///
    /// Buffers are moved in and identities are process-unique, so a duplicate
    /// cannot arise through this API; the identity check is defense in depth
    /// and costs one hash lookup.
    ///
    /// # Errors
    ///
    /// - [`PoolError::RetiredBuffer`] if the buffer was already retired
    /// - [`PoolError::DuplicateRelease`] if a buffer with the same identity is already pooled
    pub fn release(&self, mut buffer: PixelBuffer) -> Result<(), PoolError> {
        let id = buffer.id();
        if buffer.is_retired() {
            return Err(PoolError::RetiredBuffer { id });
        }

        let incoming = buffer.byte_capacity();
        let mut inner = self.inner.lock();
        if inner.ids.contains(&id) {
            return Err(PoolError::DuplicateRelease { id });
        }

        if let Some(max) = self.config.max_pooled_bytes() {
            if inner.exceeds(incoming, max) {
                inner.compact();
            }
            if inner.exceeds(incoming, max) {
                inner.retired += 1;
                drop(inner);

                buffer.retire();
                debug!(
                    "reuse pool: ceiling of {} bytes reached, retired #{} ({} bytes)",
                    max, id, incoming
                );
                return Ok(());
            }
        }

        inner.push(buffer);
        drop(inner);

        trace!("reuse pool: release #{} ({} bytes)", id, incoming);
        Ok(())
    }

    /// Retires every idle buffer, frees its memory and empties the pool.
    ///
    /// Returns the number of buffers retired.
    pub fn clear(&self) -> usize {
        let mut inner = self.inner.lock();
        let count = inner.buffers.len();
        for mut buf in inner.buffers.drain(..) {
            buf.retire();
        }
        inner.ids.clear();
        inner.total_bytes = 0;
        inner.retired += count as u64;
        drop(inner);

        debug!("reuse pool: cleared {} buffers", count);
        count
    }

    /// Returns the backing bytes held by idle buffers. For diagnostics only.
    pub fn total_bytes(&self) -> usize {
        self.inner.lock().total_bytes
    }

    /// Returns the number of idle buffers.
    pub fn len(&self) -> usize {
        self.inner.lock().buffers.len()
    }

    /// Returns true if no buffers are idle.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a consistent snapshot of the pool counters.
    pub fn stats(&self) -> PoolStats {
        let inner = self.inner.lock();
        PoolStats {
            buffers: inner.buffers.len(),
            total_bytes: inner.total_bytes,
            hits: inner.hits,
            misses: inner.misses,
            purged: inner.purged,
            retired: inner.retired,
        }
    }
}
