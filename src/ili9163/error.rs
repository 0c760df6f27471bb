//! Error types for the ILI9163 driver

pub use display_interface::DisplayError;
use thiserror::Error;

/// Reasons a [`DisplayConfig`](crate::ili9163::config::DisplayConfig) is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Rotation is not one of 0, 90, 180 or 270 degrees
    #[error("rotation must be 0, 90, 180 or 270 degrees, got {0}")]
    InvalidRotation(u16),

    /// Logical area is larger than the controller memory
    #[error("logical area {width}x{height} exceeds panel memory {panel_width}x{panel_height}")]
    LogicalExceedsPanel {
        /// Requested logical width
        width: u16,
        /// Requested logical height
        height: u16,
        /// Controller memory width
        panel_width: u16,
        /// Controller memory height
        panel_height: u16,
    },

    /// Logical area fits, but not at the requested offsets
    #[error("logical area does not fit panel memory at offset ({left}, {top})")]
    WindowExceedsPanel {
        /// Column offset
        left: u16,
        /// Row offset
        top: u16,
    },

    /// Width or height is zero
    #[error("logical and panel dimensions must be non-zero")]
    ZeroSize,
}

/// Errors returned by the driver
#[derive(Debug, Error)]
pub enum Error {
    /// SPI write or a control line failed
    #[error("bus transport failed: {0:?}")]
    Transport(DisplayError),

    /// A step of the power-up chain failed; the wrapped error is the original failure
    #[error("initialisation failed: {0}")]
    Init(Box<Error>),

    /// Configuration was rejected before any bus traffic
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Image dimensions do not match the visible display area
    #[error(
        "image is {}x{}, display expects {}x{}",
        actual.0,
        actual.1,
        expected.0,
        expected.1
    )]
    DimensionMismatch {
        /// Visible width and height
        expected: (u16, u16),
        /// Width and height of the image passed in
        actual: (u16, u16),
    },

    /// Raw pixel buffer has the wrong byte length
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize {
        /// Two bytes per pixel of the window
        expected: usize,
        /// Length of the buffer passed in
        actual: usize,
    },

    /// Address window is inverted or falls outside panel memory
    #[error("address window ({x0}, {y0})..=({x1}, {y1}) is outside panel memory")]
    WindowOutOfBounds {
        /// First column
        x0: u16,
        /// First row
        y0: u16,
        /// Last column, inclusive
        x1: u16,
        /// Last row, inclusive
        y1: u16,
    },

    /// The backlight line could not be driven
    #[error("backlight line could not be driven")]
    Backlight,

    /// The controller has not completed its init sequence
    #[error("display is not initialised")]
    NotReady,
}

impl From<DisplayError> for Error {
    fn from(error: DisplayError) -> Self {
        Error::Transport(error)
    }
}

impl Error {
    /// Wrap a failure that happened while bringing the controller up
    pub(crate) fn init(error: impl Into<Error>) -> Self {
        match error.into() {
            already @ Error::Init(_) => already,
            other => Error::Init(Box::new(other)),
        }
    }
}
