//! Page display trait

use core::fmt::{self, Write};

use heapless::String;

use super::pixel::PixelSource;
use crate::font::GLYPH_WIDTH;
use crate::image::Fill;
use crate::panel::{Panel, MAX_WIDTH, PAGE_HEIGHT};

/// Most glyphs that fit on one page of the widest panel
pub const MAX_LINE_CHARS: usize = MAX_WIDTH as usize / GLYPH_WIDTH;

/// Byte capacity for one line of text (up to 4 UTF-8 bytes per char)
const LINE_BUF: usize = MAX_LINE_CHARS * 4;

/// Trait for framebuffer-free page displays
///
/// Every call goes straight to the controller. Positions are in pages
/// (8-pixel rows) and pixel columns.
pub trait PageDisplay {
    /// Error type for display operations
    type Error;

    /// Panel geometry
    fn panel(&self) -> Panel;

    /// Blank the entire panel
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Draw text starting at a page and pixel column
    fn draw_text(&mut self, text: &str, page: u8, column: u8) -> Result<(), Self::Error>;

    /// Draw a pixel source with its top-left corner at a page and column
    fn draw_region<S: PixelSource + ?Sized>(
        &mut self,
        source: &S,
        page: u8,
        column: u8,
    ) -> Result<(), Self::Error>;

    /// Turn the panel off
    fn power_off(&mut self) -> Result<(), Self::Error>;
}

/// Helpers for laying out text lines
pub trait PageDisplayExt: PageDisplay {
    /// Glyphs that fit on one page
    fn line_chars(&self) -> usize {
        self.panel().width() as usize / GLYPH_WIDTH
    }

    /// Blank a single page
    fn clear_page(&mut self, page: u8) -> Result<(), Self::Error> {
        let blank = Fill::new(self.panel().width() as u16, PAGE_HEIGHT as u16, 0);
        self.draw_region(&blank, page, 0)
    }

    /// Draw text at the start of a page, blanking the rest of the line
    ///
    /// Text longer than the line is truncated.
    fn draw_line(&mut self, page: u8, text: &str) -> Result<(), Self::Error> {
        let mut line: String<LINE_BUF> = String::new();
        let mut writer = LineWriter::new(&mut line, self.line_chars());
        let _ = writer.write_str(text);
        writer.pad();
        self.draw_text(&line, page, 0)
    }

    /// Draw a label-value pair: `Label:     Value`
    ///
    /// The value is right-aligned; the label is cut short if both do not
    /// fit.
    fn draw_field(&mut self, page: u8, label: &str, value: &str) -> Result<(), Self::Error> {
        let width = self.line_chars();
        let value_len = value.chars().count().min(width);
        let label_len = label
            .chars()
            .count()
            .min(width.saturating_sub(value_len + 1));

        let mut line: String<LINE_BUF> = String::new();
        let mut writer = LineWriter::new(&mut line, width);
        for ch in label.chars().take(label_len) {
            let _ = writer.write_char(ch);
        }
        if value_len < width {
            let _ = writer.write_char(':');
        }
        let pad = width.saturating_sub(writer.written + value_len);
        for _ in 0..pad {
            let _ = writer.write_char(' ');
        }
        for ch in value.chars().take(value_len) {
            let _ = writer.write_char(ch);
        }

        self.draw_text(&line, page, 0)
    }

    /// Format text and draw it at a page and column
    ///
    /// Output past the end of the line is dropped.
    fn draw_fmt(
        &mut self,
        page: u8,
        column: u8,
        args: fmt::Arguments<'_>,
    ) -> Result<(), Self::Error> {
        let room = (self.panel().width().saturating_sub(column)) as usize / GLYPH_WIDTH;
        let mut line: String<LINE_BUF> = String::new();
        let mut writer = LineWriter::new(&mut line, room);
        let _ = writer.write_fmt(args);
        self.draw_text(&line, page, column)
    }
}

// Blanket implementation for all PageDisplay types
impl<T: PageDisplay> PageDisplayExt for T {}

/// Writes at most `limit` chars into a line buffer, silently dropping the rest
struct LineWriter<'a> {
    line: &'a mut String<LINE_BUF>,
    limit: usize,
    written: usize,
}

impl<'a> LineWriter<'a> {
    fn new(line: &'a mut String<LINE_BUF>, limit: usize) -> Self {
        Self {
            line,
            limit: limit.min(MAX_LINE_CHARS),
            written: 0,
        }
    }

    /// Fill the remainder of the line with spaces
    fn pad(&mut self) {
        while self.written < self.limit {
            if self.line.push(' ').is_err() {
                break;
            }
            self.written += 1;
        }
    }
}

impl Write for LineWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            if self.written >= self.limit || self.line.push(ch).is_err() {
                break;
            }
            self.written += 1;
        }
        Ok(())
    }
}
