//! SSD1306 command set and command-stream builders

use heapless::Vec;
use oledpage_core::{AddressWindow, Addressing, ColumnSelect, Panel, VccSource};

/// Control byte: one command byte follows
pub const CONTROL_COMMAND: u8 = 0x80;
/// Control byte: one data byte follows
pub const CONTROL_DATA: u8 = 0xC0;
/// Control byte: all following bytes are data
pub const CONTROL_DATA_STREAM: u8 = 0x40;

/// SSD1306 opcodes
pub mod op {
    // Fundamental
    pub const SET_CONTRAST: u8 = 0x81;
    pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;
    pub const DISPLAY_ALL_ON: u8 = 0xA5;
    pub const NORMAL_DISPLAY: u8 = 0xA6;
    pub const INVERT_DISPLAY: u8 = 0xA7;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;

    // Addressing
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const MEMORY_MODE: u8 = 0x20;
    pub const COLUMN_ADDR: u8 = 0x21;
    pub const PAGE_ADDR: u8 = 0x22;
    pub const SET_PAGE_START: u8 = 0xB0;

    // Memory mode arguments
    pub const MODE_HORIZONTAL: u8 = 0x00;
    pub const MODE_VERTICAL: u8 = 0x01;
    pub const MODE_PAGE: u8 = 0x02;

    // Hardware configuration
    pub const SET_START_LINE: u8 = 0x40;
    pub const SEG_REMAP: u8 = 0xA0;
    pub const SET_MULTIPLEX: u8 = 0xA8;
    pub const COM_SCAN_INC: u8 = 0xC0;
    pub const COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;

    // Timing and driving
    pub const SET_DISPLAY_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const CHARGE_PUMP: u8 = 0x8D;

    // Scrolling
    pub const RIGHT_HORIZONTAL_SCROLL: u8 = 0x26;
    pub const LEFT_HORIZONTAL_SCROLL: u8 = 0x27;
    pub const VERTICAL_AND_RIGHT_HORIZONTAL_SCROLL: u8 = 0x29;
    pub const VERTICAL_AND_LEFT_HORIZONTAL_SCROLL: u8 = 0x2A;
    pub const DEACTIVATE_SCROLL: u8 = 0x2E;
    pub const ACTIVATE_SCROLL: u8 = 0x2F;
    pub const SET_VERTICAL_SCROLL_AREA: u8 = 0xA3;
}

/// One step of the initialization sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitStep {
    /// Command byte
    pub opcode: u8,
    /// Parameter byte sent after the opcode, if the command takes one
    pub argument: Option<u8>,
}

impl InitStep {
    const fn cmd(opcode: u8) -> Self {
        Self {
            opcode,
            argument: None,
        }
    }

    const fn with_arg(opcode: u8, argument: u8) -> Self {
        Self {
            opcode,
            argument: Some(argument),
        }
    }
}

/// Number of steps in the initialization sequence
pub const INIT_STEPS: usize = 16;

/// Initialization sequence for a 128x64 panel on the internal charge pump
///
/// Order matters: the panel stays dark until the final DISPLAY_ON.
pub const INIT_SEQUENCE: [InitStep; INIT_STEPS] = [
    InitStep::cmd(op::DISPLAY_OFF),
    InitStep::with_arg(op::SET_DISPLAY_CLOCK_DIV, 0x80),
    InitStep::with_arg(op::SET_MULTIPLEX, 0x3F),
    InitStep::with_arg(op::SET_DISPLAY_OFFSET, 0x00),
    InitStep::cmd(op::SET_START_LINE | 0x00),
    InitStep::with_arg(op::CHARGE_PUMP, 0x14),
    InitStep::with_arg(op::MEMORY_MODE, op::MODE_HORIZONTAL),
    InitStep::cmd(op::SEG_REMAP | 0x01),
    InitStep::cmd(op::COM_SCAN_DEC),
    InitStep::with_arg(op::SET_COM_PINS, 0x12),
    InitStep::with_arg(op::SET_CONTRAST, 0xCF),
    InitStep::with_arg(op::SET_PRECHARGE, 0xF1),
    InitStep::with_arg(op::SET_VCOM_DETECT, 0x40),
    InitStep::cmd(op::DISPLAY_ALL_ON_RESUME),
    InitStep::cmd(op::NORMAL_DISPLAY),
    InitStep::cmd(op::DISPLAY_ON),
];

/// Initialization sequence adjusted for panel height and supply
///
/// A 128x64 panel on the internal charge pump gets `INIT_SEQUENCE`
/// unchanged.
pub fn init_sequence(panel: &Panel, vcc: VccSource) -> [InitStep; INIT_STEPS] {
    let external = vcc == VccSource::External;
    let mut sequence = INIT_SEQUENCE;

    for step in sequence.iter_mut() {
        let argument = match step.opcode {
            op::SET_MULTIPLEX => panel.height() - 1,
            // Sequential COM pins on the short panels
            op::SET_COM_PINS if panel.height() <= 32 => 0x02,
            op::CHARGE_PUMP if external => 0x10,
            op::SET_PRECHARGE if external => 0x22,
            op::SET_CONTRAST if external => 0x9F,
            _ => continue,
        };
        step.argument = Some(argument);
    }

    sequence
}

/// Commands that point the controller at a window
///
/// Direct windows switch to page addressing and place the cursor; range
/// windows switch to horizontal addressing and bound both axes.
pub fn window_commands(window: &AddressWindow, column_select: ColumnSelect) -> Vec<u8, 8> {
    let mut commands = Vec::new();

    match window.addressing() {
        Addressing::Direct => {
            let column = window.column_start();
            let second = match column_select {
                ColumnSelect::LowHigh => op::SET_HIGH_COLUMN | (column >> 4),
                ColumnSelect::LowLow => op::SET_LOW_COLUMN | (column & 0x0F),
            };
            commands.extend([
                op::MEMORY_MODE,
                op::MODE_PAGE,
                op::SET_PAGE_START | window.page_start(),
                op::SET_LOW_COLUMN | (column & 0x0F),
                second,
            ]);
        }
        Addressing::Range => commands.extend([
            op::MEMORY_MODE,
            op::MODE_HORIZONTAL,
            op::PAGE_ADDR,
            window.page_start(),
            window.page_end(),
            op::COLUMN_ADDR,
            window.column_start(),
            window.column_end(),
        ]),
    }

    commands
}
