//! Pixel buffer types.
//!
//! - [`PixelFormat`] - Pixel layout and its bytes-per-pixel cost
//! - [`PixelBuffer`] - Owned block of pixel memory with identity and lifecycle flags

mod format;
mod pixel;

pub use format::PixelFormat;
pub use pixel::PixelBuffer;
