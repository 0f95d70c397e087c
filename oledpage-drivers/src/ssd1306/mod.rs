//! SSD1306 OLED driver
//!
//! Framebuffer-free driver for SSD1306 panels on I2C. Every draw call is
//! translated straight into controller commands and data bytes; the
//! driver holds no pixel memory.
//!
//! # Example
//!
//! ```ignore
//! let mut display = Ssd1306::new(bus, 0x3C, Panel::SIZE_128X64);
//! display.init()?;
//! display.draw_text("Hello", 0, 0)?;
//! display.draw_region(&logo, 2, 32)?;
//! ```

mod bitmap;
pub mod cmd;
mod protocol;
mod scroll;
mod text;

#[cfg(test)]
mod mock;

pub use bitmap::pack_column;
pub use protocol::CommandProtocol;
pub use scroll::{ScrollDirection, ScrollInterval};

use embedded_hal::i2c::I2c;
use oledpage_core::{
    ColumnSelect, ConfigError, ControllerState, DisplayConfig, Event, PageDisplay, Panel,
    PixelSource, VccSource,
};
use oledpage_hal::{EmbeddedHalBus, I2cBus, I2cConfig};

use cmd::op;

/// SSD1306 driver
pub struct Ssd1306<B> {
    protocol: CommandProtocol<B>,
    panel: Panel,
    vcc: VccSource,
    /// Contrast applied after the initialization sequence
    contrast: Option<u8>,
    state: ControllerState,
}

impl<B: I2cBus> Ssd1306<B> {
    /// Create a driver for a panel on the internal charge pump
    ///
    /// Nothing is sent until [`Ssd1306::init`].
    pub fn new(bus: B, address: u8, panel: Panel) -> Self {
        Self {
            protocol: CommandProtocol::new(bus, address, ColumnSelect::default()),
            panel,
            vcc: VccSource::Internal,
            contrast: None,
            state: ControllerState::PoweredOff,
        }
    }

    /// Create a driver from a validated configuration
    pub fn with_config(bus: B, config: &DisplayConfig) -> Result<Self, ConfigError> {
        let panel = config.validate()?;
        let mut display = Self::new(bus, config.address, panel);
        display.vcc = config.vcc;
        display.contrast = config.contrast;
        display.protocol.set_column_select(config.column_select);
        Ok(display)
    }

    /// Consume the driver and return the bus
    pub fn release(self) -> B {
        self.protocol.release()
    }

    /// Panel geometry
    pub fn panel(&self) -> Panel {
        self.panel
    }

    /// 7-bit I2C address
    pub fn address(&self) -> u8 {
        self.protocol.address()
    }

    /// What the driver last told the controller
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Column select encoding for direct windows
    pub fn column_select(&self) -> ColumnSelect {
        self.protocol.column_select()
    }

    /// Choose how direct windows encode their start column
    pub fn set_column_select(&mut self, column_select: ColumnSelect) {
        self.protocol.set_column_select(column_select);
    }

    /// Run the initialization sequence and blank the panel
    ///
    /// On a bus error the state stays `Initializing`; call again to retry.
    pub fn init(&mut self) -> Result<(), B::Error> {
        #[cfg(feature = "defmt")]
        defmt::info!(
            "SSD1306 init at {=u8:#x}, {}x{}",
            self.protocol.address(),
            self.panel.width(),
            self.panel.height()
        );

        self.state = self.state.transition(Event::InitStarted);

        let sequence = cmd::init_sequence(&self.panel, self.vcc);
        self.protocol
            .run_initialization_sequence(&sequence, &self.panel)?;

        if let Some(contrast) = self.contrast {
            self.set_contrast(contrast)?;
        }

        self.state = self.state.transition(Event::InitComplete);

        #[cfg(feature = "defmt")]
        defmt::debug!("SSD1306 ready");

        Ok(())
    }

    /// Turn the panel off
    ///
    /// Display RAM is retained but the configuration must be assumed lost;
    /// the only way back is [`Ssd1306::init`].
    pub fn power_off(&mut self) -> Result<(), B::Error> {
        self.protocol.write_command(op::DISPLAY_OFF)?;
        self.state = self.state.transition(Event::DisplayOff);

        #[cfg(feature = "defmt")]
        defmt::info!("SSD1306 powered off");

        Ok(())
    }

    /// Blank the whole panel
    pub fn clear(&mut self) -> Result<(), B::Error> {
        self.fill(0x00)
    }

    /// Set contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), B::Error> {
        self.protocol.write_commands(&[op::SET_CONTRAST, contrast])
    }

    /// Invert display colors
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), B::Error> {
        if inverted {
            self.protocol.write_command(op::INVERT_DISPLAY)
        } else {
            self.protocol.write_command(op::NORMAL_DISPLAY)
        }
    }

    /// Light every pixel regardless of RAM contents (panel test)
    pub fn set_entire_display_on(&mut self, on: bool) -> Result<(), B::Error> {
        if on {
            self.protocol.write_command(op::DISPLAY_ALL_ON)
        } else {
            self.protocol.write_command(op::DISPLAY_ALL_ON_RESUME)
        }
    }

    /// Mirror the segment (column) and COM (row) scan directions
    ///
    /// The initialization sequence leaves both flipped, which is upright
    /// on the common modules. Takes effect on data written afterwards for
    /// segments, immediately for COM.
    pub fn set_remap(&mut self, segment_remap: bool, com_reversed: bool) -> Result<(), B::Error> {
        let segment = op::SEG_REMAP | segment_remap as u8;
        let com = if com_reversed {
            op::COM_SCAN_DEC
        } else {
            op::COM_SCAN_INC
        };
        self.protocol.write_commands(&[segment, com])
    }
}

impl<T: I2c> Ssd1306<EmbeddedHalBus<T>> {
    /// Create a driver on a blocking embedded-hal I2C master
    pub fn from_i2c(i2c: T, config: &DisplayConfig) -> Result<Self, ConfigError> {
        Self::with_config(EmbeddedHalBus::new(i2c), config)
    }
}

/// Bus settings for a configuration
pub fn bus_config(config: &DisplayConfig) -> I2cConfig {
    I2cConfig::with_frequency(config.frequency_hz)
}

impl<B: I2cBus> PageDisplay for Ssd1306<B> {
    type Error = B::Error;

    fn panel(&self) -> Panel {
        self.panel
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        Ssd1306::clear(self)
    }

    fn draw_text(&mut self, text: &str, page: u8, column: u8) -> Result<(), Self::Error> {
        Ssd1306::draw_text(self, text, page, column)
    }

    fn draw_region<S: PixelSource + ?Sized>(
        &mut self,
        source: &S,
        page: u8,
        column: u8,
    ) -> Result<(), Self::Error> {
        Ssd1306::draw_region(self, source, page, column)
    }

    fn power_off(&mut self) -> Result<(), Self::Error> {
        Ssd1306::power_off(self)
    }
}
