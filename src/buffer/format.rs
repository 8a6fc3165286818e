//! The PixelFormat type - pixel layout of a buffer.

use std::fmt;

/// Pixel layout of a [`PixelBuffer`](crate::PixelBuffer).
///
/// The layout determines how many bytes a single pixel occupies, which the
/// pool uses for best-fit capacity checks.
///
/// # Example
///
/// ```
/// use pixpool::PixelFormat;
///
/// assert_eq!(PixelFormat::Rgba8888.bytes_per_pixel(), 4);
/// assert_eq!(PixelFormat::Unknown.bytes_per_pixel(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 8 bits per channel, with alpha.
    Rgba8888,
    /// 5-6-5 packed color, no alpha.
    Rgb565,
    /// 4 bits per channel, with alpha.
    Argb4444,
    /// Alpha mask only.
    Alpha8,
    /// Any layout the pool does not recognize.
    Unknown,
}

impl PixelFormat {
    /// Returns the bytes one pixel occupies in this format.
    ///
    /// Unrecognized formats map to 1 so available capacity is never overestimated.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgba8888 => 4,
            PixelFormat::Rgb565 => 2,
            PixelFormat::Argb4444 => 2,
            PixelFormat::Alpha8 => 1,
            PixelFormat::Unknown => 1,
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PixelFormat::Rgba8888 => "RGBA8888",
            PixelFormat::Rgb565 => "RGB565",
            PixelFormat::Argb4444 => "ARGB4444",
            PixelFormat::Alpha8 => "ALPHA8",
            PixelFormat::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_per_pixel_table() {
        assert_eq!(PixelFormat::Rgba8888.bytes_per_pixel(), 4);
        assert_eq!(PixelFormat::Rgb565.bytes_per_pixel(), 2);
        assert_eq!(PixelFormat::Argb4444.bytes_per_pixel(), 2);
        assert_eq!(PixelFormat::Alpha8.bytes_per_pixel(), 1);
        assert_eq!(PixelFormat::Unknown.bytes_per_pixel(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(PixelFormat::Rgb565.to_string(), "RGB565");
    }
}
