//! State machine definition

use super::events::Event;

/// Controller states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerState {
    /// Power-on or after DISPLAY_OFF; controller configuration unknown
    #[default]
    PoweredOff,
    /// Initialization sequence in flight (or aborted by a bus error)
    Initializing,
    /// Configured, display on, accepting draws
    Ready,
}

impl ControllerState {
    /// Check if the panel is configured and on
    pub fn is_ready(&self) -> bool {
        matches!(self, ControllerState::Ready)
    }

    /// Process an event and return the next state
    ///
    /// There is no recovery path out of `PoweredOff` other than running
    /// the initialization sequence again.
    pub fn transition(self, event: Event) -> Self {
        use ControllerState::*;
        use Event::*;

        match (self, event) {
            // Re-initialization is allowed from any state
            (_, InitStarted) => Initializing,

            (Initializing, InitComplete) => Ready,

            (_, DisplayOff) => PoweredOff,

            // Stray completion without a start is ignored
            (state, InitComplete) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        assert_eq!(ControllerState::default(), ControllerState::PoweredOff);
        assert!(!ControllerState::default().is_ready());
    }

    #[test]
    fn test_init_flow() {
        let state = ControllerState::PoweredOff;

        let initializing = state.transition(Event::InitStarted);
        assert_eq!(initializing, ControllerState::Initializing);

        let ready = initializing.transition(Event::InitComplete);
        assert_eq!(ready, ControllerState::Ready);
        assert!(ready.is_ready());
    }

    #[test]
    fn test_display_off_from_ready() {
        let off = ControllerState::Ready.transition(Event::DisplayOff);
        assert_eq!(off, ControllerState::PoweredOff);
    }

    #[test]
    fn test_no_automatic_recovery() {
        // Completion without a fresh start does not bring the panel back
        let state = ControllerState::PoweredOff.transition(Event::InitComplete);
        assert_eq!(state, ControllerState::PoweredOff);

        let state = state
            .transition(Event::InitStarted)
            .transition(Event::InitComplete);
        assert_eq!(state, ControllerState::Ready);
    }

    #[test]
    fn test_reinit_from_ready() {
        let state = ControllerState::Ready.transition(Event::InitStarted);
        assert_eq!(state, ControllerState::Initializing);
    }
}
