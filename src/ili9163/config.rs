//! Display configuration
//!
//! A [`DisplayConfig`] is built once and handed to the driver, which validates
//! it before touching any line or the bus. After construction it is never
//! mutated.

use crate::ili9163::error::ConfigError;
use crate::ili9163::flag::Flag;

/// Orientation of the visible image relative to panel memory
///
/// The controller scan direction is fixed by MADCTL. Rotation only changes
/// how the pixel stream is ordered and which way round width and height are
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    /// Image rows map onto memory rows
    Deg0,
    /// Rotated a quarter turn
    #[default]
    Deg90,
    /// Upside down
    Deg180,
    /// Rotated three quarter turns
    Deg270,
}

impl Rotation {
    /// Parse a rotation given in degrees
    pub fn from_degrees(degrees: u16) -> Result<Self, ConfigError> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(ConfigError::InvalidRotation(other)),
        }
    }

    /// Rotation in degrees
    pub const fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Number of counter-clockwise quarter turns applied to the image
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    /// True when width and height trade places
    pub const fn swaps_dimensions(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }

    /// Visible `(width, height)` for a memory area of `width` x `height`
    pub const fn effective_size(self, width: u16, height: u16) -> (u16, u16) {
        if self.swaps_dimensions() {
            (height, width)
        } else {
            (width, height)
        }
    }
}

/// Panel geometry, orientation and transport settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    panel_width: u16,
    panel_height: u16,
    width: u16,
    height: u16,
    rotation: u16,
    offset_left: Option<u16>,
    offset_top: Option<u16>,
    invert: bool,
    spi_speed_hz: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new(Flag::PANEL_COLS, Flag::PANEL_ROWS)
    }
}

impl DisplayConfig {
    /// Logical area of `width` x `height` on a 128x160 panel, rotated 90 degrees
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            panel_width: Flag::PANEL_COLS,
            panel_height: Flag::PANEL_ROWS,
            width,
            height,
            rotation: 90,
            offset_left: None,
            offset_top: None,
            invert: true,
            spi_speed_hz: Flag::SPI_SPEED_HZ,
        }
    }

    /// Controller memory dimensions
    pub const fn panel(mut self, width: u16, height: u16) -> Self {
        self.panel_width = width;
        self.panel_height = height;
        self
    }

    /// Rotation in degrees; checked by [`DisplayConfig::validate`]
    pub const fn rotation(mut self, degrees: u16) -> Self {
        self.rotation = degrees;
        self
    }

    /// Column offset into controller memory
    pub const fn offset_left(mut self, offset: u16) -> Self {
        self.offset_left = Some(offset);
        self
    }

    /// Row offset into controller memory
    pub const fn offset_top(mut self, offset: u16) -> Self {
        self.offset_top = Some(offset);
        self
    }

    /// Panel inversion. This panel is wired inverted, so `true` (the default)
    /// sends INVOFF and `false` sends INVON.
    pub const fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// SPI clock the bus should be configured with
    pub const fn spi_speed_hz(mut self, hz: u32) -> Self {
        self.spi_speed_hz = hz;
        self
    }

    /// Controller memory width
    pub const fn panel_width(&self) -> u16 {
        self.panel_width
    }

    /// Controller memory height
    pub const fn panel_height(&self) -> u16 {
        self.panel_height
    }

    /// Logical width in memory orientation
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Logical height in memory orientation
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Requested rotation in degrees, unvalidated
    pub const fn rotation_degrees(&self) -> u16 {
        self.rotation
    }

    /// Inversion flag
    pub const fn is_inverted(&self) -> bool {
        self.invert
    }

    /// Configured SPI clock
    pub const fn spi_speed(&self) -> u32 {
        self.spi_speed_hz
    }

    /// Column offset, centring the logical area when none was given
    pub const fn left(&self) -> u16 {
        match self.offset_left {
            Some(offset) => offset,
            None => self.panel_width.saturating_sub(self.width) / 2,
        }
    }

    /// Row offset, centring the logical area when none was given
    pub const fn top(&self) -> u16 {
        match self.offset_top {
            Some(offset) => offset,
            None => self.panel_height.saturating_sub(self.height) / 2,
        }
    }

    /// Check the configuration and return the parsed rotation
    pub fn validate(&self) -> Result<Rotation, ConfigError> {
        let rotation = Rotation::from_degrees(self.rotation)?;

        if self.width == 0 || self.height == 0 || self.panel_width == 0 || self.panel_height == 0
        {
            return Err(ConfigError::ZeroSize);
        }

        if self.width > self.panel_width || self.height > self.panel_height {
            return Err(ConfigError::LogicalExceedsPanel {
                width: self.width,
                height: self.height,
                panel_width: self.panel_width,
                panel_height: self.panel_height,
            });
        }

        let (left, top) = (self.left(), self.top());
        let right = u32::from(left) + u32::from(self.width);
        let bottom = u32::from(top) + u32::from(self.height);
        if right > u32::from(self.panel_width) || bottom > u32::from(self.panel_height) {
            return Err(ConfigError::WindowExceedsPanel { left, top });
        }

        Ok(rotation)
    }
}
