//! Bitmap-to-page packing
//!
//! Each data byte covers one column of one page: bit `r` is pixel row
//! `page * 8 + r` of the source. Bytes go to the controller as they are
//! packed; no frame is held in memory.

use oledpage_core::{AddressWindow, Addressing, PixelSource, PAGE_HEIGHT};
use oledpage_hal::I2cBus;

use super::Ssd1306;

/// Pack one page-column of a source into a data byte
///
/// Rows past the source height read as unlit.
pub fn pack_column<S: PixelSource + ?Sized>(source: &S, x: u16, page: u16) -> u8 {
    let mut byte = 0u8;
    for bit in 0..PAGE_HEIGHT as u16 {
        let y = page * PAGE_HEIGHT as u16 + bit;
        if y >= source.height() {
            break;
        }
        if source.is_lit(x, y) {
            byte |= 1 << bit;
        }
    }
    byte
}

impl<B: I2cBus> Ssd1306<B> {
    /// Stream a pixel source to the panel, top-left at a page and column
    ///
    /// The region is clipped to the panel once up front. An origin off the
    /// panel or an empty source sends nothing.
    pub fn draw_region<S: PixelSource + ?Sized>(
        &mut self,
        source: &S,
        origin_page: u8,
        origin_column: u8,
    ) -> Result<(), B::Error> {
        let panel = self.panel;
        if origin_page >= panel.page_count() || origin_column >= panel.width() {
            return Ok(());
        }

        let width = source.width().min((panel.width() - origin_column) as u16);
        let pages = source
            .height()
            .div_ceil(PAGE_HEIGHT as u16)
            .min((panel.page_count() - origin_page) as u16);
        if width == 0 || pages == 0 {
            return Ok(());
        }

        // The page span reaches one page past the data; clamping on the last
        // page collapses it to page addressing. Columns stay exact so range
        // mode wraps to the next page after the last data column.
        let window =
            panel.compute_window(origin_page, origin_column, pages as u8, (width - 1) as u8);

        match window.addressing() {
            Addressing::Range => {
                // Horizontal mode wraps from the window's last column to the
                // next page on its own
                self.protocol.set_window(&window)?;
                for page in 0..pages {
                    for x in 0..width {
                        self.protocol.write_data(pack_column(source, x, page))?;
                    }
                }
            }
            Addressing::Direct => {
                // Page mode never leaves the selected page
                for page in 0..pages {
                    let row = panel.compute_window(origin_page + page as u8, origin_column, 0, 0);
                    self.protocol.set_window(&row)?;
                    for x in 0..width {
                        self.protocol.write_data(pack_column(source, x, page))?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Fill every byte of display RAM with `byte`
    pub fn fill(&mut self, byte: u8) -> Result<(), B::Error> {
        let window = AddressWindow::full(&self.panel);
        self.protocol.fill_window(&window, byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ssd1306::mock::MockBus;
    use oledpage_core::{ColumnSelect, Fill, GrayImage, MonoImage, Panel, TextSource};
    use proptest::prelude::*;
    use std::vec;

    fn driver(panel: Panel) -> Ssd1306<MockBus> {
        Ssd1306::new(MockBus::new(), 0x3C, panel)
    }

    #[test]
    fn test_pack_single_pixel() {
        // 1x16 column, pixel lit at row 10 -> page 1, bit 2
        let mut pixels = [0u8; 16];
        pixels[10] = 255;
        let image = GrayImage::new(1, 16, &pixels).unwrap();

        assert_eq!(pack_column(&image, 0, 0), 0x00);
        assert_eq!(pack_column(&image, 0, 1), 0x04);
    }

    #[test]
    fn test_pack_threshold() {
        let pixels = [127u8, 128, 0, 255, 0, 0, 0, 0];
        let image = GrayImage::new(1, 8, &pixels).unwrap();
        assert_eq!(pack_column(&image, 0, 0), 0b0000_1010);
    }

    #[test]
    fn test_pack_short_source() {
        assert_eq!(pack_column(&Fill::new(1, 5, 255), 0, 0), 0x1F);
        assert_eq!(pack_column(&Fill::new(1, 8, 255), 0, 0), 0xFF);
    }

    #[test]
    fn test_small_block_uses_single_range_setup() {
        let mut display = driver(Panel::SIZE_128X64);
        display.draw_region(&Fill::new(8, 8, 255), 0, 0).unwrap();

        let bus = display.release();
        assert_eq!(
            bus.commands().as_slice(),
            &[0x20, 0x00, 0x22, 0, 1, 0x21, 0, 7]
        );
        assert_eq!(bus.data().as_slice(), &[0xFF; 8]);
    }

    #[test]
    fn test_block_on_last_page_uses_direct_setup() {
        let mut display = driver(Panel::SIZE_128X64);
        display.draw_region(&Fill::new(8, 8, 255), 7, 0x21).unwrap();

        let bus = display.release();
        assert_eq!(bus.commands().as_slice(), &[0x20, 0x02, 0xB7, 0x01, 0x12]);
        assert_eq!(bus.data().as_slice(), &[0xFF; 8]);
    }

    #[test]
    fn test_multi_page_block_uses_range_window() {
        let mut display = driver(Panel::SIZE_128X64);
        // 3 columns x 12 rows at page 2, column 40
        display.draw_region(&Fill::new(3, 12, 255), 2, 40).unwrap();

        let bus = display.release();
        assert_eq!(
            bus.commands().as_slice(),
            &[0x20, 0x00, 0x22, 2, 4, 0x21, 40, 42]
        );
        // Page-outer, column-inner; the second page holds rows 8..12
        assert_eq!(bus.data().as_slice(), &[0xFF, 0xFF, 0xFF, 0x0F, 0x0F, 0x0F]);
    }

    #[test]
    fn test_single_column_spanning_pages_readdresses_each_page() {
        let mut display = driver(Panel::SIZE_128X64);
        display.draw_region(&Fill::new(1, 16, 255), 1, 0x23).unwrap();

        let bus = display.release();
        assert_eq!(
            bus.commands().as_slice(),
            &[0x20, 0x02, 0xB1, 0x03, 0x12, 0x20, 0x02, 0xB2, 0x03, 0x12]
        );
        assert_eq!(bus.data().as_slice(), &[0xFF, 0xFF]);
    }

    #[test]
    fn test_low_low_column_select() {
        let mut display = driver(Panel::SIZE_128X64);
        display.set_column_select(ColumnSelect::LowLow);
        display.draw_region(&Fill::new(4, 8, 255), 7, 0x25).unwrap();

        let bus = display.release();
        assert_eq!(bus.commands().as_slice(), &[0x20, 0x02, 0xB7, 0x05, 0x05]);
    }

    #[test]
    fn test_wide_source_clamps_to_panel() {
        let mut display = driver(Panel::SIZE_128X64);
        display.draw_region(&Fill::new(200, 8, 255), 0, 0).unwrap();

        let bus = display.release();
        assert_eq!(bus.data().len(), 128);
    }

    #[test]
    fn test_source_past_right_edge_clamps() {
        let mut display = driver(Panel::SIZE_128X64);
        display.draw_region(&Fill::new(16, 16, 255), 0, 120).unwrap();

        let bus = display.release();
        assert_eq!(
            bus.commands().as_slice(),
            &[0x20, 0x00, 0x22, 0, 2, 0x21, 120, 127]
        );
        assert_eq!(bus.data().len(), 16);
    }

    #[test]
    fn test_tall_source_clamps_to_last_page() {
        let mut display = driver(Panel::SIZE_128X32);
        display.draw_region(&Fill::new(2, 64, 255), 2, 0).unwrap();

        let bus = display.release();
        // Pages 2 and 3 only
        assert_eq!(bus.data().len(), 4);
    }

    #[test]
    fn test_empty_or_offscreen_sends_nothing() {
        let mut display = driver(Panel::SIZE_128X64);
        display.draw_region(&Fill::new(0, 8, 255), 0, 0).unwrap();
        display.draw_region(&Fill::new(8, 0, 255), 0, 0).unwrap();
        display.draw_region(&Fill::new(8, 8, 255), 8, 0).unwrap();
        display.draw_region(&Fill::new(8, 8, 255), 0, 128).unwrap();

        assert!(display.release().writes.is_empty());
    }

    #[test]
    fn test_mono_image_packs_like_gray() {
        // 8x8 diagonal
        let mono_rows = [0x80u8, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01];
        let mono = MonoImage::new(8, 8, &mono_rows).unwrap();
        let mut gray_pixels = [0u8; 64];
        for i in 0..8 {
            gray_pixels[i * 8 + i] = 255;
        }
        let gray = GrayImage::new(8, 8, &gray_pixels).unwrap();

        for x in 0..8u16 {
            assert_eq!(pack_column(&mono, x, 0), 1 << x);
            assert_eq!(pack_column(&mono, x, 0), pack_column(&gray, x, 0));
        }
    }

    #[test]
    fn test_text_source_matches_text_path() {
        let mut via_bitmap = driver(Panel::SIZE_128X64);
        via_bitmap.draw_region(&TextSource::new("Hi?"), 4, 12).unwrap();

        let mut via_text = driver(Panel::SIZE_128X64);
        via_text.draw_text("Hi?", 4, 12).unwrap();

        assert_eq!(via_bitmap.release().data(), via_text.release().data());
    }

    #[test]
    fn test_failure_stops_stream() {
        let mut display = Ssd1306::new(MockBus::failing_after(10), 0x3C, Panel::SIZE_128X64);
        assert!(display.draw_region(&Fill::new(8, 8, 255), 0, 0).is_err());

        let bus = display.release();
        assert_eq!(bus.writes.len(), 10);
        assert_eq!(bus.attempts, 11);
    }

    #[test]
    fn test_fill() {
        let mut display = driver(Panel::SIZE_96X16);
        display.fill(0xAA).unwrap();

        let bus = display.release();
        assert_eq!(
            bus.commands().as_slice(),
            &[0x20, 0x00, 0x22, 0, 1, 0x21, 0, 95]
        );
        assert_eq!(bus.data(), vec![0xAA; 192]);
    }

    proptest! {
        #[test]
        fn prop_rows_past_height_unlit(height in 1u16..8, column in 0u16..4) {
            let byte = pack_column(&Fill::new(4, height, 255), column, 0);
            prop_assert_eq!(byte, ((1u16 << height) - 1) as u8);
        }

        #[test]
        fn prop_data_count_matches_clipped_region(
            width in 0u16..300,
            height in 0u16..100,
            page in 0u8..8,
            column in 0u8..128,
        ) {
            let mut display = driver(Panel::SIZE_128X64);
            display.draw_region(&Fill::new(width, height, 255), page, column).unwrap();

            let clipped_width = width.min(128 - column as u16) as usize;
            let clipped_pages = height.div_ceil(8).min(8 - page as u16) as usize;
            prop_assert_eq!(display.release().data().len(), clipped_width * clipped_pages);
        }
    }
}
