//! Board-agnostic core logic for page-organized monochrome OLED controllers
//!
//! This crate contains everything that does not touch the bus:
//!
//! - Panel geometry and the page/column address window calculator
//! - Pixel sources (grayscale, 1-bit, rendered text)
//! - The fixed-width page-packed glyph table
//! - The controller power state machine
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod addressing;
pub mod config;
pub mod font;
pub mod image;
pub mod panel;
pub mod state;
pub mod traits;

pub use addressing::{AddressWindow, Addressing, ColumnSelect};
pub use config::{ConfigError, DisplayConfig, VccSource};
pub use font::{glyph, FALLBACK_GLYPH, GLYPH_WIDTH};
pub use image::{Fill, GrayImage, ImageError, MonoImage, TextSource};
pub use panel::{Panel, PanelError, PAGE_HEIGHT};
pub use state::{ControllerState, Event};
pub use traits::{PageDisplay, PageDisplayExt, PixelSource, LIT_THRESHOLD};
