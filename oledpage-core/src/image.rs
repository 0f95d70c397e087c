//! Pixel source implementations
//!
//! All sources borrow their pixel data; nothing here allocates.

use crate::font::{glyph, GLYPH_WIDTH};
use crate::panel::PAGE_HEIGHT;
use crate::traits::PixelSource;

/// Errors when wrapping pixel data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImageError {
    /// Buffer is shorter than the dimensions require
    BufferTooSmall,
}

/// 8-bit grayscale image, row-major
#[derive(Debug, Clone, Copy)]
pub struct GrayImage<'a> {
    width: u16,
    height: u16,
    pixels: &'a [u8],
}

impl<'a> GrayImage<'a> {
    /// Wrap `width * height` grayscale bytes
    pub fn new(width: u16, height: u16, pixels: &'a [u8]) -> Result<Self, ImageError> {
        if pixels.len() < width as usize * height as usize {
            return Err(ImageError::BufferTooSmall);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }
}

impl PixelSource for GrayImage<'_> {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn intensity_at(&self, x: u16, y: u16) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}

/// 1-bit image, row-major, MSB = leftmost pixel, rows padded to whole bytes
#[derive(Debug, Clone, Copy)]
pub struct MonoImage<'a> {
    width: u16,
    height: u16,
    data: &'a [u8],
}

impl<'a> MonoImage<'a> {
    /// Wrap packed 1-bit rows
    pub fn new(width: u16, height: u16, data: &'a [u8]) -> Result<Self, ImageError> {
        if data.len() < Self::stride(width) * height as usize {
            return Err(ImageError::BufferTooSmall);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Bytes per row
    const fn stride(width: u16) -> usize {
        (width as usize + 7) / 8
    }
}

impl PixelSource for MonoImage<'_> {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn intensity_at(&self, x: u16, y: u16) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        let byte = self.data[y as usize * Self::stride(self.width) + x as usize / 8];
        if byte & (0x80 >> (x % 8)) != 0 {
            u8::MAX
        } else {
            0
        }
    }
}

/// Uniform block of one intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fill {
    width: u16,
    height: u16,
    intensity: u8,
}

impl Fill {
    /// Block of `width x height` pixels, all at `intensity`
    pub const fn new(width: u16, height: u16, intensity: u8) -> Self {
        Self {
            width,
            height,
            intensity,
        }
    }
}

impl PixelSource for Fill {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn intensity_at(&self, x: u16, y: u16) -> u8 {
        if x < self.width && y < self.height {
            self.intensity
        } else {
            0
        }
    }
}

/// A line of text rendered through the glyph table
///
/// One glyph row (8 pixels) tall, `GLYPH_WIDTH` pixels per character.
/// Lets text be placed through the bitmap pipeline at any column, or
/// clipped like an image.
#[derive(Debug, Clone, Copy)]
pub struct TextSource<'a> {
    text: &'a str,
    chars: u16,
    ascii: bool,
}

impl<'a> TextSource<'a> {
    /// Render `text`; characters outside the font draw as the fallback box
    pub fn new(text: &'a str) -> Self {
        let chars = text.chars().count().min((u16::MAX as usize) / GLYPH_WIDTH) as u16;
        Self {
            text,
            chars,
            ascii: text.is_ascii(),
        }
    }

    /// Character at a glyph index
    fn char_at(&self, index: usize) -> Option<char> {
        if index >= self.chars as usize {
            return None;
        }
        if self.ascii {
            // One byte per char
            self.text.as_bytes().get(index).map(|&b| b as char)
        } else {
            self.text.chars().nth(index)
        }
    }
}

impl PixelSource for TextSource<'_> {
    fn width(&self) -> u16 {
        self.chars * GLYPH_WIDTH as u16
    }

    fn height(&self) -> u16 {
        PAGE_HEIGHT as u16
    }

    fn intensity_at(&self, x: u16, y: u16) -> u8 {
        if y >= PAGE_HEIGHT as u16 {
            return 0;
        }
        match self.char_at(x as usize / GLYPH_WIDTH) {
            Some(ch) if glyph(ch)[x as usize % GLYPH_WIDTH] & (1 << y) != 0 => u8::MAX,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FALLBACK_GLYPH;

    #[test]
    fn test_gray_image_sampling() {
        let pixels = [0u8, 10, 20, 30, 40, 50];
        let image = GrayImage::new(3, 2, &pixels).unwrap();

        assert_eq!(image.intensity_at(0, 0), 0);
        assert_eq!(image.intensity_at(2, 0), 20);
        assert_eq!(image.intensity_at(1, 1), 40);
        // Outside the image reads dark
        assert_eq!(image.intensity_at(3, 0), 0);
        assert_eq!(image.intensity_at(0, 2), 0);
    }

    #[test]
    fn test_gray_image_rejects_short_buffer() {
        let pixels = [0u8; 5];
        assert_eq!(
            GrayImage::new(3, 2, &pixels).err(),
            Some(ImageError::BufferTooSmall)
        );
    }

    #[test]
    fn test_mono_image_msb_first() {
        // 10 pixels wide -> 2 bytes per row
        let data = [0b1000_0001, 0b0100_0000, 0b0000_0000, 0b1000_0000];
        let image = MonoImage::new(10, 2, &data).unwrap();

        assert!(image.is_lit(0, 0));
        assert!(!image.is_lit(1, 0));
        assert!(image.is_lit(7, 0));
        assert!(image.is_lit(9, 0));
        assert!(!image.is_lit(0, 1));
        assert!(image.is_lit(8, 1));
        assert_eq!(
            MonoImage::new(10, 3, &data).err(),
            Some(ImageError::BufferTooSmall)
        );
    }

    #[test]
    fn test_fill_is_uniform() {
        let fill = Fill::new(4, 3, 200);
        assert!(fill.is_lit(3, 2));
        assert!(!fill.is_lit(4, 0));
        assert!(!Fill::new(4, 3, 0).is_lit(0, 0));
    }

    #[test]
    fn test_text_source_matches_glyphs() {
        let text = TextSource::new("A");
        assert_eq!(text.width(), 6);
        assert_eq!(text.height(), 8);

        // 'A' = 7E 11 11 11 7E 00
        assert!(!text.is_lit(0, 0));
        assert!(text.is_lit(0, 1));
        assert!(text.is_lit(1, 0));
        assert!(text.is_lit(1, 4));
        assert!(!text.is_lit(5, 3));
    }

    #[test]
    fn test_text_source_fallback_and_bounds() {
        let text = TextSource::new("é");
        for x in 0..GLYPH_WIDTH as u16 {
            for y in 0..8 {
                let expected = FALLBACK_GLYPH[x as usize] & (1 << y) != 0;
                assert_eq!(text.is_lit(x, y), expected);
            }
        }
        assert_eq!(text.intensity_at(6, 0), 0);
        assert_eq!(text.intensity_at(0, 8), 0);
    }

    #[test]
    fn test_text_source_ascii_and_unicode_agree() {
        let ascii = TextSource::new("a?b");
        let mixed = TextSource::new("a\u{e9}b");
        assert_eq!(ascii.width(), mixed.width());

        // Only the middle glyph differs: '?' against the fallback box
        for x in 0..ascii.width() {
            let column = x as usize % GLYPH_WIDTH;
            for y in 0..8 {
                let expected = match x as usize / GLYPH_WIDTH {
                    1 => FALLBACK_GLYPH[column] & (1 << y) != 0,
                    _ => ascii.is_lit(x, y),
                };
                assert_eq!(mixed.is_lit(x, y), expected);
            }
        }
        assert!(!mixed.is_lit(mixed.width(), 0));
    }
}
