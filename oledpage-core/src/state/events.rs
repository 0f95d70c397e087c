//! Events that trigger state transitions

/// Driver lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Initialization sequence started
    InitStarted,
    /// Initialization sequence and initial clear completed
    InitComplete,
    /// DISPLAY_OFF was sent
    DisplayOff,
}
