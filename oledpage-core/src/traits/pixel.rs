//! Pixel source trait

/// Intensity at or above which a pixel is lit (the 8-bit midpoint)
pub const LIT_THRESHOLD: u8 = 128;

/// Read-only grid of pixel intensities
///
/// Implementations are sampled column by column, eight rows at a time,
/// while a region is streamed to the display. Coordinates outside
/// `width() x height()` must read as 0.
pub trait PixelSource {
    /// Width in pixels
    fn width(&self) -> u16;

    /// Height in pixels
    fn height(&self) -> u16;

    /// Intensity at `(x, y)`, 0 = dark, 255 = fully lit
    fn intensity_at(&self, x: u16, y: u16) -> u8;

    /// Whether the pixel at `(x, y)` is lit after 1-bit thresholding
    fn is_lit(&self, x: u16, y: u16) -> bool {
        self.intensity_at(x, y) >= LIT_THRESHOLD
    }
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    fn width(&self) -> u16 {
        T::width(self)
    }

    fn height(&self) -> u16 {
        T::height(self)
    }

    fn intensity_at(&self, x: u16, y: u16) -> u8 {
        T::intensity_at(self, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ramp;

    impl PixelSource for Ramp {
        fn width(&self) -> u16 {
            256
        }

        fn height(&self) -> u16 {
            1
        }

        fn intensity_at(&self, x: u16, _y: u16) -> u8 {
            x.min(255) as u8
        }
    }

    #[test]
    fn test_threshold_at_midpoint() {
        assert!(!Ramp.is_lit(0, 0));
        assert!(!Ramp.is_lit(127, 0));
        assert!(Ramp.is_lit(128, 0));
        assert!(Ramp.is_lit(255, 0));
    }

    #[test]
    fn test_reference_forwards() {
        let source = &Ramp;
        assert_eq!(PixelSource::width(&source), 256);
        assert_eq!(source.intensity_at(42, 0), 42);
    }
}
