//! Rendering traits
//!
//! These traits define the interface between pixel producers, the
//! page-packing pipeline and concrete display drivers.

pub mod display;
pub mod pixel;

pub use display::{PageDisplay, PageDisplayExt};
pub use pixel::{PixelSource, LIT_THRESHOLD};
