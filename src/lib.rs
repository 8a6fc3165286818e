//! pixpool
//!
//! Thread-safe reuse pool for pixel buffers.
//!
//! `pixpool` keeps retired-but-not-freed bitmaps around so repeated
//! allocate/decode cycles can recycle them instead of reallocating. It is a
//! small primitive for:
//!
//! - page renderers that redraw the same page size over and over
//! - image decoders that can write into a larger, already allocated buffer
//! - any view that should drop its cached bitmaps when hidden
//!
//! The crate intentionally:
//! - does NOT decode or render images
//! - does NOT allocate on acquire (a miss is `None`; the caller allocates)
//! - does NOT keep a global instance (construct a pool, share it by `Arc`)
//!
//! # Exact-size reuse
//!
//! ```
//! use std::sync::Arc;
//! use pixpool::{PixelBuffer, PixelFormat, ReusePool};
//!
//! let pool = Arc::new(ReusePool::default());
//!
//! let page = match pool.acquire_exact_size(320, 480, PixelFormat::Rgba8888) {
//!     Some(buf) => buf,
//!     None => PixelBuffer::new(320, 480, PixelFormat::Rgba8888)?,
//! };
//! // ... draw into page.pixels_mut()? ...
//! pool.release(page)?;
//!
//! assert_eq!(pool.total_bytes(), 320 * 480 * 4);
//! # Ok::<(), pixpool::PoolError>(())
//! ```
//!
//! # Best-fit reuse
//!
//! ```
//! use pixpool::{FitPolicy, FitRequest, PixelBuffer, PixelFormat, ReusePool};
//!
//! let pool = ReusePool::default();
//! pool.release(PixelBuffer::new(50, 20, PixelFormat::Rgba8888)?)?;
//!
//! // Decoding at half size needs 1000 bytes; the pooled 4000-byte buffer will do
//! let request = FitRequest::new(50, 20, PixelFormat::Rgba8888).with_sample_size(2);
//! let mut target = pool.acquire_best_fit(&request, FitPolicy::Modern).unwrap();
//! target.reconfigure(request.output_width(), request.output_height(), request.format())?;
//! # Ok::<(), pixpool::PoolError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod config;
mod error;
mod pool;
mod supplier;

mod util; // internal helpers

//
// Public surface
//

pub use buffer::{PixelBuffer, PixelFormat};
pub use config::{DEFAULT_FIT_POLICY, FitPolicy, MODERN_FIT_MIN_LEVEL, PoolConfig};
pub use error::PoolError;
pub use pool::{FitRequest, PoolStats, ReusePool};
pub use supplier::{BufferSupplier, PooledSupplier, ViewHost};
