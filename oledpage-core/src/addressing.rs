//! Page/column address window calculation
//!
//! Every draw starts by telling the controller which rectangle of its RAM
//! the following data bytes fill. There are two ways to do that:
//!
//! - **Direct**: page addressing mode, select one page, select a start
//!   column. Data auto-advances along the columns of that page only.
//! - **Range**: horizontal addressing mode with explicit page and column
//!   ranges. Data fills the columns of a page, then wraps to the next.
//!
//! The range commands need a strictly increasing range on both axes, so a
//! window that is a single page or a single column always uses the direct
//! path.

use crate::panel::Panel;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which addressing commands a window needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Addressing {
    /// Page select + low/high column select
    Direct,
    /// Page-address and column-address ranges
    Range,
}

/// How the direct path encodes the start column
///
/// Observed drivers disagree here: one variant sends the low-nibble
/// command twice instead of low then high. `LowLow` reproduces that
/// byte stream for hardware that was brought up against it; on columns
/// >= 16 it leaves the high nibble at whatever the controller last held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ColumnSelect {
    /// `0x00 | low nibble`, then `0x10 | high nibble`
    #[default]
    LowHigh,
    /// `0x00 | low nibble`, twice
    LowLow,
}

/// Rectangle of controller RAM, in pages and columns (inclusive)
///
/// Only built by [`Panel::compute_window`] and [`AddressWindow::full`],
/// so starts never exceed ends and both lie on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressWindow {
    page_start: u8,
    page_end: u8,
    column_start: u8,
    column_end: u8,
}

impl AddressWindow {
    /// First page
    pub fn page_start(&self) -> u8 {
        self.page_start
    }

    /// Last page (inclusive)
    pub fn page_end(&self) -> u8 {
        self.page_end
    }

    /// First column
    pub fn column_start(&self) -> u8 {
        self.column_start
    }

    /// Last column (inclusive)
    pub fn column_end(&self) -> u8 {
        self.column_end
    }

    /// Window covering the whole panel
    pub fn full(panel: &Panel) -> Self {
        Self {
            page_start: 0,
            page_end: panel.last_page(),
            column_start: 0,
            column_end: panel.last_column(),
        }
    }

    /// Addressing path this window needs
    pub fn addressing(&self) -> Addressing {
        if self.page_start == self.page_end || self.column_start == self.column_end {
            Addressing::Direct
        } else {
            Addressing::Range
        }
    }

    /// Number of pages covered
    pub fn pages(&self) -> u8 {
        self.page_end - self.page_start + 1
    }

    /// Number of columns covered
    pub fn columns(&self) -> u16 {
        (self.column_end - self.column_start) as u16 + 1
    }

    /// Number of data bytes that exactly fill the window
    pub fn byte_count(&self) -> usize {
        self.pages() as usize * self.columns() as usize
    }
}

impl Panel {
    /// Compute the address window for a draw
    ///
    /// Spans count units past the start: a span of 0 is a single page or
    /// column (plain cursor positioning), a span of `n` reaches `start + n`.
    /// Both ends are clamped to the panel, as are the starts.
    pub fn compute_window(
        &self,
        page_start: u8,
        column_start: u8,
        page_span: u8,
        column_span: u8,
    ) -> AddressWindow {
        let page_start = page_start.min(self.last_page());
        let column_start = column_start.min(self.last_column());

        let page_end = if page_span == 0 {
            page_start
        } else {
            page_start.saturating_add(page_span).min(self.last_page())
        };
        let column_end = if column_span == 0 {
            column_start
        } else {
            column_start
                .saturating_add(column_span)
                .min(self.last_column())
        };

        AddressWindow {
            page_start,
            page_end,
            column_start,
            column_end,
        }
    }
}
