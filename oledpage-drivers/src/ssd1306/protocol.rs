//! I2C command/data framing
//!
//! Every transfer is two bytes: a control byte saying whether the
//! following byte is a command or display data, then the byte itself.
//! Failures propagate on the first error; nothing is retried.

use oledpage_core::{AddressWindow, ColumnSelect, Panel};
use oledpage_hal::I2cBus;

use super::cmd::{self, InitStep, CONTROL_COMMAND, CONTROL_DATA};

/// Framing layer between the driver and the bus
pub struct CommandProtocol<B> {
    bus: B,
    address: u8,
    column_select: ColumnSelect,
}

impl<B: I2cBus> CommandProtocol<B> {
    /// Wrap a bus, addressing the device at `address`
    pub fn new(bus: B, address: u8, column_select: ColumnSelect) -> Self {
        Self {
            bus,
            address,
            column_select,
        }
    }

    /// Device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Column select encoding used for direct windows
    pub fn column_select(&self) -> ColumnSelect {
        self.column_select
    }

    /// Change the column select encoding
    pub fn set_column_select(&mut self, column_select: ColumnSelect) {
        self.column_select = column_select;
    }

    /// Give back the bus
    pub fn release(self) -> B {
        self.bus
    }

    /// Send one command byte
    pub fn write_command(&mut self, command: u8) -> Result<(), B::Error> {
        self.bus.write(self.address, &[CONTROL_COMMAND, command])?;
        Ok(())
    }

    /// Send command bytes in order, one transfer each
    pub fn write_commands(&mut self, commands: &[u8]) -> Result<(), B::Error> {
        for &c in commands {
            self.write_command(c)?;
        }
        Ok(())
    }

    /// Send one data byte
    pub fn write_data(&mut self, data: u8) -> Result<(), B::Error> {
        self.bus.write(self.address, &[CONTROL_DATA, data])?;
        Ok(())
    }

    /// Send data bytes in order, one transfer each
    pub fn write_data_bulk(&mut self, data: &[u8]) -> Result<(), B::Error> {
        for &d in data {
            self.write_data(d)?;
        }
        Ok(())
    }

    /// Point the controller at a window
    pub fn set_window(&mut self, window: &AddressWindow) -> Result<(), B::Error> {
        let commands = cmd::window_commands(window, self.column_select);
        self.write_commands(&commands)
    }

    /// Fill a window with one byte value
    pub fn fill_window(&mut self, window: &AddressWindow, byte: u8) -> Result<(), B::Error> {
        self.set_window(window)?;
        for _ in 0..window.byte_count() {
            self.write_data(byte)?;
        }
        Ok(())
    }

    /// Send an initialization sequence, then blank the panel
    ///
    /// Stops at the first failed transfer.
    pub fn run_initialization_sequence(
        &mut self,
        sequence: &[InitStep],
        panel: &Panel,
    ) -> Result<(), B::Error> {
        for step in sequence {
            self.write_command(step.opcode)?;
            if let Some(arg) = step.argument {
                self.write_command(arg)?;
            }
        }

        self.fill_window(&AddressWindow::full(panel), 0x00)
    }
}
