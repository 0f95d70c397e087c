//! oledpage Hardware Abstraction Layer
//!
//! Defines the single bus primitive the display driver depends on: a
//! fallible, blocking "write these bytes to this 7-bit address" call.
//! Any blocking `embedded-hal` 1.0 I2C implementation can be plugged in
//! through [`i2c::EmbeddedHalBus`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  oledpage-drivers (SSD1306 protocol)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  oledpage-hal (this crate - I2cBus)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  embedded-hal I2c (chip HAL, linux, …)  │
//! └─────────────────────────────────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;

pub use i2c::{BusError, EmbeddedHalBus, I2cBus, I2cConfig};
