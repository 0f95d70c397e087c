//! Configuration types
//!
//! Loaded from TOML text or stored as postcard binary data.

pub mod display;

pub use display::*;
