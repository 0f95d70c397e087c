//! Display configuration

use crate::addressing::ColumnSelect;
use crate::panel::{Panel, PanelError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default I2C address (SA0 low)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Alternate I2C address (SA0 high)
pub const ALT_ADDRESS: u8 = 0x3D;

/// Largest 7-bit I2C address
const MAX_ADDRESS: u8 = 0x7F;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Address does not fit in 7 bits
    InvalidAddress,
    /// Panel dimensions rejected
    Panel(PanelError),
    /// TOML parsing failed
    TomlParse,
    /// Binary deserialization failed
    Deserialize,
    /// Output buffer too small for serialization
    BufferTooSmall,
}

impl From<PanelError> for ConfigError {
    fn from(e: PanelError) -> Self {
        ConfigError::Panel(e)
    }
}

/// Panel supply
///
/// Decides the charge pump, precharge and default contrast values in the
/// initialization sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VccSource {
    /// Internal charge pump generates the panel voltage
    #[default]
    Internal,
    /// Panel voltage supplied externally
    External,
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DisplayConfig {
    /// 7-bit I2C address
    pub address: u8,
    /// Panel width in pixels
    pub width: u8,
    /// Panel height in pixels (multiple of 8)
    pub height: u8,
    /// Panel supply
    pub vcc: VccSource,
    /// Contrast applied after initialization (None = sequence default)
    pub contrast: Option<u8>,
    /// Column select encoding for direct addressing
    pub column_select: ColumnSelect,
    /// I2C clock in Hz
    pub frequency_hz: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            width: 128,
            height: 64,
            vcc: VccSource::Internal,
            contrast: None,
            column_select: ColumnSelect::LowHigh,
            frequency_hz: 400_000,
        }
    }
}

impl DisplayConfig {
    /// Create the default configuration (128x64 at 0x3C)
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the configuration and build the panel descriptor
    pub fn validate(&self) -> Result<Panel, ConfigError> {
        if self.address > MAX_ADDRESS {
            return Err(ConfigError::InvalidAddress);
        }
        Ok(Panel::new(self.width, self.height)?)
    }

    /// Parse and validate a TOML document
    ///
    /// Missing keys take their defaults; unknown keys are rejected.
    #[cfg(feature = "toml")]
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input).map_err(|_| ConfigError::TomlParse)?;
        config.validate()?;
        Ok(config)
    }

    /// Decode and validate a postcard-encoded configuration
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;
        config.validate()?;
        Ok(config)
    }

    /// Encode as postcard into `buf`, returning the used prefix
    #[cfg(feature = "serde")]
    pub fn to_bytes<'b>(&self, buf: &'b mut [u8]) -> Result<&'b mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::BufferTooSmall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DisplayConfig::new();
        assert_eq!(config.address, 0x3C);
        assert_eq!(config.validate(), Ok(Panel::SIZE_128X64));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = DisplayConfig::new();
        config.address = 0x80;
        assert_eq!(config.validate(), Err(ConfigError::InvalidAddress));

        let mut config = DisplayConfig::new();
        config.height = 60;
        assert_eq!(
            config.validate(),
            Err(ConfigError::Panel(PanelError::HeightNotPageAligned))
        );
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_parse_toml() {
        let input = r#"
            # 0.91" module on the alternate address
            address = 0x3D
            width = 128
            height = 32
            vcc = "external"
            contrast = 0x8F
            column_select = "low_low"
        "#;

        let config = DisplayConfig::from_toml(input).unwrap();
        assert_eq!(config.address, ALT_ADDRESS);
        assert_eq!(config.height, 32);
        assert_eq!(config.vcc, VccSource::External);
        assert_eq!(config.contrast, Some(0x8F));
        assert_eq!(config.column_select, ColumnSelect::LowLow);
        // Not given, defaulted
        assert_eq!(config.frequency_hz, 400_000);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_parse_toml_minimal() {
        let config = DisplayConfig::from_toml("").unwrap();
        assert_eq!(config, DisplayConfig::default());
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_parse_toml_errors() {
        assert_eq!(
            DisplayConfig::from_toml("height = 30"),
            Err(ConfigError::Panel(PanelError::HeightNotPageAligned))
        );
        assert_eq!(
            DisplayConfig::from_toml("hieght = 32"),
            Err(ConfigError::TomlParse)
        );
        assert_eq!(
            DisplayConfig::from_toml("width = \"wide\""),
            Err(ConfigError::TomlParse)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_binary_roundtrip() {
        let mut config = DisplayConfig::new();
        config.height = 32;
        config.contrast = Some(0x40);

        let mut buf = [0u8; 32];
        let encoded = config.to_bytes(&mut buf).unwrap();
        let decoded = DisplayConfig::from_bytes(encoded).unwrap();
        assert_eq!(decoded, config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_binary_errors() {
        let config = DisplayConfig::new();
        let mut tiny = [0u8; 2];
        assert_eq!(config.to_bytes(&mut tiny), Err(ConfigError::BufferTooSmall));
        assert_eq!(
            DisplayConfig::from_bytes(&[]),
            Err(ConfigError::Deserialize)
        );
    }
}
