//! Controller-side horizontal scrolling
//!
//! The controller shifts its RAM contents itself once scrolling is
//! active. Writing RAM while a scroll runs corrupts the picture, so stop
//! the scroll before drawing and redraw afterwards.

use oledpage_hal::I2cBus;

use super::cmd::op;
use super::Ssd1306;

/// Scroll direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollDirection {
    /// Content moves toward higher columns
    Right,
    /// Content moves toward column 0
    Left,
}

/// Time between scroll steps, in frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollInterval {
    Frames2,
    Frames3,
    Frames4,
    #[default]
    Frames5,
    Frames25,
    Frames64,
    Frames128,
    Frames256,
}

impl ScrollInterval {
    /// Controller encoding (not monotonic in frame count)
    pub const fn code(self) -> u8 {
        match self {
            ScrollInterval::Frames5 => 0b000,
            ScrollInterval::Frames64 => 0b001,
            ScrollInterval::Frames128 => 0b010,
            ScrollInterval::Frames256 => 0b011,
            ScrollInterval::Frames3 => 0b100,
            ScrollInterval::Frames4 => 0b101,
            ScrollInterval::Frames25 => 0b110,
            ScrollInterval::Frames2 => 0b111,
        }
    }
}

impl<B: I2cBus> Ssd1306<B> {
    /// Scroll a band of pages horizontally
    ///
    /// Pages are clamped to the panel and swapped if given backwards.
    pub fn start_horizontal_scroll(
        &mut self,
        direction: ScrollDirection,
        start_page: u8,
        end_page: u8,
        interval: ScrollInterval,
    ) -> Result<(), B::Error> {
        let last = self.panel.last_page();
        let (a, b) = (start_page.min(last), end_page.min(last));
        let (start, end) = if a <= b { (a, b) } else { (b, a) };

        let opcode = match direction {
            ScrollDirection::Right => op::RIGHT_HORIZONTAL_SCROLL,
            ScrollDirection::Left => op::LEFT_HORIZONTAL_SCROLL,
        };

        self.protocol.write_commands(&[
            op::DEACTIVATE_SCROLL,
            opcode,
            0x00, // dummy
            start,
            interval.code(),
            end,
            0x00, // dummy
            0xFF, // dummy
            op::ACTIVATE_SCROLL,
        ])
    }

    /// Stop any running scroll
    pub fn stop_scroll(&mut self) -> Result<(), B::Error> {
        self.protocol.write_command(op::DEACTIVATE_SCROLL)
    }
}
