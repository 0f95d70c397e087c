//! I2C bus abstractions
//!
//! Provides the byte-write primitive used by the display driver, plus an
//! adapter for blocking `embedded-hal` I2C masters.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c};

/// I2C bus master
///
/// The display protocol only ever writes, so this is the whole surface.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    ///
    /// Returns the number of bytes written.
    fn write(&mut self, address: u8, data: &[u8]) -> Result<usize, Self::Error>;
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<usize, Self::Error> {
        T::write(self, address, data)
    }
}

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Bus error (misplaced start/stop condition)
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// NACK received (device absent or refused a byte)
    Nack,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl From<ErrorKind> for BusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Bus => BusError::Bus,
            ErrorKind::ArbitrationLoss => BusError::ArbitrationLost,
            ErrorKind::NoAcknowledge(_) => BusError::Nack,
            ErrorKind::Overrun => BusError::Overrun,
            _ => BusError::Other,
        }
    }
}

/// Adapter from a blocking `embedded-hal` I2C master to [`I2cBus`]
///
/// Owns the underlying bus for the lifetime of the adapter; use
/// [`EmbeddedHalBus::release`] to get it back.
pub struct EmbeddedHalBus<T> {
    i2c: T,
}

impl<T> EmbeddedHalBus<T> {
    /// Wrap an I2C master
    pub fn new(i2c: T) -> Self {
        Self { i2c }
    }

    /// Consume the adapter and return the underlying I2C master
    pub fn release(self) -> T {
        self.i2c
    }
}

impl<T: I2c> I2cBus for EmbeddedHalBus<T> {
    type Error = BusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<usize, Self::Error> {
        self.i2c
            .write(address, data)
            .map_err(|e| BusError::from(e.kind()))?;
        Ok(data.len())
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        // SSD1306 modules are specified for fast mode
        Self::FAST
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };

    /// Fast mode plus (1 MHz)
    pub const FAST_PLUS: Self = Self {
        frequency: 1_000_000,
    };

    /// Create a configuration for an arbitrary clock frequency
    pub const fn with_frequency(frequency: u32) -> Self {
        Self { frequency }
    }
}
