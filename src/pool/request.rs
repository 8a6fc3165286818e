//! The FitRequest type - describes a decode that may reuse a larger buffer.

use crate::buffer::{PixelBuffer, PixelFormat};
use crate::config::FitPolicy;
use crate::util::pixel_bytes;

/// A best-fit request.
///
/// `width` and `height` are the dimensions the caller asks the decoder for;
/// `source_width` and `source_height` are the undecoded image dimensions
/// (they default to the requested ones). `sample_size` is the downsampling
/// divisor; 0 is treated as 1.
///
/// # Example
///
/// ```
/// use pixpool::{FitRequest, PixelFormat};
///
/// let request = FitRequest::new(50, 20, PixelFormat::Rgba8888).with_sample_size(2);
/// assert_eq!(request.output_width(), 25);
/// assert_eq!(request.output_height(), 10);
/// assert_eq!(request.needed_bytes(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FitRequest {
    width: u32,
    height: u32,
    source_width: u32,
    source_height: u32,
    sample_size: u32,
    format: PixelFormat,
}

impl FitRequest {
    /// Creates a request with sample size 1 and source dimensions equal to the requested ones.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        Self {
            width,
            height,
            source_width: width,
            source_height: height,
            sample_size: 1,
            format,
        }
    }

    /// Sets the downsampling divisor.
    pub fn with_sample_size(mut self, sample_size: u32) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Sets the undecoded source dimensions.
    pub fn with_source_size(mut self, width: u32, height: u32) -> Self {
        self.source_width = width;
        self.source_height = height;
        self
    }

    /// Returns the requested width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the requested height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the undecoded source dimensions.
    pub fn source_size(&self) -> (u32, u32) {
        (self.source_width, self.source_height)
    }

    /// Returns the requested format.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Returns the sample size, with 0 normalized to 1.
    pub fn sample_size(&self) -> u32 {
        self.sample_size.max(1)
    }

    /// Returns the decoded output width.
    pub fn output_width(&self) -> u32 {
        self.width / self.sample_size()
    }

    /// Returns the decoded output height.
    pub fn output_height(&self) -> u32 {
        self.height / self.sample_size()
    }

    /// Returns the bytes the decoded output needs in the requested format.
    pub fn needed_bytes(&self) -> usize {
        pixel_bytes(
            self.output_width(),
            self.output_height(),
            self.format.bytes_per_pixel(),
        )
    }

    /// Returns true if `candidate` can back this request under `policy`.
    ///
    /// Only checks shape and capacity; reusability is the pool's concern.
    pub(crate) fn fits(&self, candidate: &PixelBuffer, policy: FitPolicy) -> bool {
        match policy {
            FitPolicy::Legacy => {
                candidate.width() == self.source_width
                    && candidate.height() == self.source_height
                    && self.sample_size() == 1
            }
            FitPolicy::Modern => candidate.byte_capacity() >= self.needed_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(capacity: usize) -> PixelBuffer {
        PixelBuffer::with_capacity(50, 20, PixelFormat::Rgba8888, capacity).unwrap()
    }

    #[test]
    fn test_zero_sample_size_is_one() {
        let request = FitRequest::new(50, 20, PixelFormat::Rgba8888).with_sample_size(0);
        assert_eq!(request.sample_size(), 1);
        assert_eq!(request.needed_bytes(), 4000);
    }

    #[test]
    fn test_modern_exact_capacity() {
        let buf = candidate(4000);
        let request = FitRequest::new(50, 20, PixelFormat::Rgba8888);
        assert!(request.fits(&buf, FitPolicy::Modern));
    }

    #[test]
    fn test_modern_downsampled() {
        let buf = candidate(4000);
        let request = FitRequest::new(50, 20, PixelFormat::Rgba8888).with_sample_size(2);
        assert_eq!(request.needed_bytes(), 1000);
        assert!(request.fits(&buf, FitPolicy::Modern));
    }

    #[test]
    fn test_modern_too_large() {
        let buf = candidate(4000);
        // 50 * 25 * 4 = 5000
        let request = FitRequest::new(50, 25, PixelFormat::Rgba8888);
        assert!(!request.fits(&buf, FitPolicy::Modern));
    }

    #[test]
    fn test_modern_ignores_dimensions() {
        let buf = candidate(4000);
        let request = FitRequest::new(20, 50, PixelFormat::Rgb565);
        assert!(request.fits(&buf, FitPolicy::Modern));
    }

    #[test]
    fn test_legacy_requires_source_dimensions() {
        let buf = candidate(4000);

        let same = FitRequest::new(50, 20, PixelFormat::Rgba8888);
        assert!(same.fits(&buf, FitPolicy::Legacy));

        let other_source = FitRequest::new(50, 20, PixelFormat::Rgba8888).with_source_size(40, 20);
        assert!(!other_source.fits(&buf, FitPolicy::Legacy));
    }

    #[test]
    fn test_legacy_rejects_sampling() {
        let buf = candidate(1 << 20);
        let request = FitRequest::new(50, 20, PixelFormat::Rgba8888).with_sample_size(2);
        assert!(!request.fits(&buf, FitPolicy::Legacy));
    }

    #[test]
    fn test_legacy_ignores_capacity() {
        // A smaller request whose source matches the candidate still fits
        let buf = candidate(4000);
        let request = FitRequest::new(10, 10, PixelFormat::Alpha8).with_source_size(50, 20);
        assert!(request.fits(&buf, FitPolicy::Legacy));
    }
}
