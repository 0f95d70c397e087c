//! Glyph text rendering

use oledpage_core::glyph;
use oledpage_hal::I2cBus;

use super::Ssd1306;

impl<B: I2cBus> Ssd1306<B> {
    /// Draw text with the 6x8 font starting at a page and pixel column
    ///
    /// Characters outside the font draw as a box. Text is not clipped at
    /// the right edge; the controller wraps within the page.
    pub fn draw_text(&mut self, text: &str, page: u8, column: u8) -> Result<(), B::Error> {
        let cursor = self.panel.compute_window(page, column, 0, 0);
        self.protocol.set_window(&cursor)?;

        for ch in text.chars() {
            self.protocol.write_data_bulk(glyph(ch))?;
        }

        Ok(())
    }
}
