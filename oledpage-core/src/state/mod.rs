//! Controller power state machine
//!
//! Tracks what the driver has told the controller, not what the panel
//! reports (the bus is write-only).

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::ControllerState;
