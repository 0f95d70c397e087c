//! Recording bus for driver tests

use std::vec::Vec;

use oledpage_hal::{BusError, I2cBus};

use super::cmd::{CONTROL_COMMAND, CONTROL_DATA};

/// Records every two-byte transfer; optionally refuses transfers after a
/// number of successes
pub struct MockBus {
    pub writes: Vec<[u8; 2]>,
    pub addresses: Vec<u8>,
    pub attempts: usize,
    fail_after: Option<usize>,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            addresses: Vec::new(),
            attempts: 0,
            fail_after: None,
        }
    }

    pub fn failing_after(successes: usize) -> Self {
        Self {
            fail_after: Some(successes),
            ..Self::new()
        }
    }

    /// Command bytes in send order
    pub fn commands(&self) -> Vec<u8> {
        self.payloads(CONTROL_COMMAND)
    }

    /// Data bytes in send order
    pub fn data(&self) -> Vec<u8> {
        self.payloads(CONTROL_DATA)
    }

    fn payloads(&self, control: u8) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|w| w[0] == control)
            .map(|w| w[1])
            .collect()
    }
}

impl I2cBus for MockBus {
    type Error = BusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<usize, BusError> {
        self.attempts += 1;
        if self.fail_after == Some(self.writes.len()) {
            return Err(BusError::Nack);
        }
        assert_eq!(data.len(), 2, "every transfer is control + payload");
        self.writes.push([data[0], data[1]]);
        self.addresses.push(address);
        Ok(data.len())
    }
}
