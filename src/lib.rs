//! Driver for SPI-attached ILI9163 colour TFT LCD controllers.
//!
//! See the [`ili9163`] module for the driver itself. The crate root re-exports
//! the types needed for everyday use.
#![warn(missing_docs)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod ili9163;

pub use crate::ili9163::color::{color565, image_to_data, rgb_from_565, Color, Frame};
pub use crate::ili9163::config::{DisplayConfig, Rotation};
pub use crate::ili9163::driver::{Ili9163, State};
pub use crate::ili9163::error::{ConfigError, DisplayError, Error};
pub use crate::ili9163::interface::{DisplayInterface, NoPin};
pub use crate::ili9163::protocol::AddressWindow;
pub use crate::ili9163::{Cmd, Flag, HEIGHT, WIDTH};
