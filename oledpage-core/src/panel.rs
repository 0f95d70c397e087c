//! Panel geometry
//!
//! The controller organizes its display RAM as `height / 8` pages, each
//! page holding one byte per column (bit 0 = top row of the page).

/// Pixel rows per page
pub const PAGE_HEIGHT: u8 = 8;

/// Widest panel the controller RAM can address
pub const MAX_WIDTH: u8 = 128;

/// Tallest panel the controller RAM can address (8 pages)
pub const MAX_HEIGHT: u8 = 64;

/// Errors when describing a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// Width or height is zero
    ZeroSize,
    /// Height is not a whole number of pages
    HeightNotPageAligned,
    /// Dimensions exceed the controller's 128x64 RAM
    TooLarge,
}

/// Immutable panel descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Panel {
    width: u8,
    height: u8,
}

impl Panel {
    /// 128x64 module (the common 0.96" part)
    pub const SIZE_128X64: Self = Self {
        width: 128,
        height: 64,
    };

    /// 128x32 module
    pub const SIZE_128X32: Self = Self {
        width: 128,
        height: 32,
    };

    /// 96x16 module
    pub const SIZE_96X16: Self = Self {
        width: 96,
        height: 16,
    };

    /// Describe a panel, rejecting heights that are not page aligned
    pub const fn new(width: u8, height: u8) -> Result<Self, PanelError> {
        if width == 0 || height == 0 {
            return Err(PanelError::ZeroSize);
        }
        if height % PAGE_HEIGHT != 0 {
            return Err(PanelError::HeightNotPageAligned);
        }
        if width > MAX_WIDTH || height > MAX_HEIGHT {
            return Err(PanelError::TooLarge);
        }
        Ok(Self { width, height })
    }

    /// Width in pixels (= columns)
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Number of 8-row pages
    pub const fn page_count(&self) -> u8 {
        self.height / PAGE_HEIGHT
    }

    /// Index of the last column
    pub const fn last_column(&self) -> u8 {
        self.width - 1
    }

    /// Index of the last page
    pub const fn last_page(&self) -> u8 {
        self.page_count() - 1
    }

    /// Number of data bytes covering the whole panel
    pub const fn byte_count(&self) -> usize {
        self.width as usize * self.page_count() as usize
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::SIZE_128X64
    }
}
