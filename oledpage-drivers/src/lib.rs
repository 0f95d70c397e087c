//! Display driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in oledpage-core for page-organized OLED controllers:
//!
//! - SSD1306 over I2C (128x64, 128x32, 96x16 modules)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod ssd1306;

pub use ssd1306::Ssd1306;
