//! ILI9163 TFT LCD Driver
//!
//! Used with the 1.77" 128x160 SPI modules built around the ILI9163 (the
//! AE-ATM0177B3A and similar). The controller is close enough to the ST7735
//! that the same wiring works.
//!
//! ### Usage
//! The driver takes a whole RGB frame per update. To display something you:
//!
//! 1. build a [`config::DisplayConfig`] for the panel and orientation
//! 1. create the driver with [`driver::Ili9163::new`], which resets and
//!    initialises the controller
//! 1. create a [`color::Frame`] of [`driver::Ili9163::width`] x
//!    [`driver::Ili9163::height`] and draw onto it, preferably with
//!    [`embedded_graphics`](https://github.com/embedded-graphics/embedded-graphics)
//! 1. send it with [`driver::Ili9163::display`]
//!

pub mod cmd;
pub mod color;
pub mod config;
pub mod driver;
pub mod error;
pub mod flag;
pub mod interface;
pub mod protocol;

pub use cmd::Cmd;
pub use flag::Flag;

/// Panel memory width, pixels horizontally
pub const WIDTH: u16 = Flag::PANEL_COLS;

/// Panel memory height, pixels vertically
pub const HEIGHT: u16 = Flag::PANEL_ROWS;
