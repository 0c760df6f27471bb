//! ILI9163 Display Driver Implementation
//!
//! [`Ili9163`] composes the configuration, the command sequences from
//! [`protocol`](crate::ili9163::protocol) and the pixel codec from
//! [`color`](crate::ili9163::color) into the public lifecycle.
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized -> Resetting -> Initializing -> Ready
//! ```
//!
//! [`Ili9163::new`] walks the whole chain and only hands out a `Ready`
//! driver. [`Ili9163::from_interface`] stops at `Uninitialized` so the caller
//! can run [`Ili9163::init`] later; until then every drawing call fails with
//! [`Error::NotReady`].
//!
//! ## Timing
//!
//! Everything blocks. The reset pulse holds each level for 500 ms and the
//! register sequence adds another 760 ms of settle time, so bringing a panel
//! up takes a little over two seconds with a reset line wired.
//!
//! ## Rotation
//!
//! MADCTL is written once with a fixed scan direction. Rotation is applied in
//! software: the frame is turned before packing and `width`/`height` report
//! the visible size. The address window always stays in memory orientation.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

use crate::ili9163::color::{image_to_data, Frame};
use crate::ili9163::config::{DisplayConfig, Rotation};
use crate::ili9163::error::Error;
use crate::ili9163::interface::DisplayInterface;
use crate::ili9163::protocol::{init_sequence, window_commands, AddressWindow};
use crate::ili9163::Cmd;

/// Where the driver is in its power-up chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Created, no bus traffic yet
    Uninitialized,
    /// Backlight and hardware reset pulses in progress
    Resetting,
    /// Register init sequence in progress
    Initializing,
    /// Accepting window and pixel writes
    Ready,
}

/// ILI9163 TFT LCD Driver
///
/// ## Type Parameters
///
/// - `SPI` - SPI device for communication
/// - `DC` - Data/Command output pin
/// - `RST` - Reset output pin, optional
/// - `BL` - Backlight output pin, optional
/// - `DELAY` - Delay provider for timing
///
/// Not internally synchronised. Share it between threads behind a mutex.
pub struct Ili9163<SPI, DC, RST, BL, DELAY> {
    interface: DisplayInterface<SPI, DC, RST, BL, DELAY>,
    config: DisplayConfig,
    rotation: Rotation,
    state: State,
}

impl<SPI, DC, RST, BL, DELAY> Ili9163<SPI, DC, RST, BL, DELAY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BL: OutputPin,
    DELAY: DelayNs,
{
    /// Create and initialize the display driver
    ///
    /// Validates `config` before any line is touched, then pulses the
    /// backlight, resets the controller and runs the register sequence. Any
    /// failure along the way is returned and no driver is produced.
    pub fn new(
        spi: SPI,
        dc: DC,
        rst: Option<RST>,
        backlight: Option<BL>,
        delay: DELAY,
        config: DisplayConfig,
    ) -> Result<Self, Error> {
        let interface = DisplayInterface::new(spi, dc, rst, backlight, delay);
        let mut display = Self::from_interface(interface, config)?;
        display.init()?;
        Ok(display)
    }

    /// Create a driver from an existing interface without initialization
    pub fn from_interface(
        interface: DisplayInterface<SPI, DC, RST, BL, DELAY>,
        config: DisplayConfig,
    ) -> Result<Self, Error> {
        let rotation = config.validate().inspect_err(|e| {
            log::error!("Rejected display configuration: {}", e);
        })?;

        log::debug!(
            "{}x{} area on {}x{} panel at ({}, {}), rotated {} degrees",
            config.width(),
            config.height(),
            config.panel_width(),
            config.panel_height(),
            config.left(),
            config.top(),
            rotation.degrees()
        );

        Ok(Ili9163 {
            interface,
            config,
            rotation,
            state: State::Uninitialized,
        })
    }

    /// Bring the controller from reset to a displaying state.
    ///
    /// Runs once; calling it on a ready driver does nothing. A failure leaves
    /// the driver short of `Ready` and is reported as [`Error::Init`] wrapping
    /// the transport error.
    pub fn init(&mut self) -> Result<(), Error> {
        if self.state == State::Ready {
            log::warn!("Display already initialised");
            return Ok(());
        }

        log::info!("Starting ILI9163 initialization");
        if !self.interface.has_reset() {
            log::warn!("No reset line wired, relying on the software reset");
        }

        self.state = State::Resetting;
        self.interface.pulse_backlight().map_err(Error::init)?;
        self.interface.reset().map_err(Error::init)?;

        self.state = State::Initializing;
        for step in init_sequence(self.config.is_inverted()).iter() {
            self.interface.step(step).map_err(|e| {
                log::error!("Init step 0x{:02X} failed: {:?}", step.cmd, e);
                Error::init(e)
            })?;
        }

        self.state = State::Ready;
        log::info!("ILI9163 ready, {}x{} visible", self.width(), self.height());
        Ok(())
    }

    /// Current lifecycle state
    pub fn state(&self) -> State {
        self.state
    }

    /// True once the init sequence has completed
    pub fn is_ready(&self) -> bool {
        self.state == State::Ready
    }

    fn ensure_ready(&self) -> Result<(), Error> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(Error::NotReady)
        }
    }

    /// Configuration the driver was built with
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Validated rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Visible width; swapped with the height at 90 and 270 degrees
    pub fn width(&self) -> u16 {
        self.rotation
            .effective_size(self.config.width(), self.config.height())
            .0
    }

    /// Visible height; swapped with the width at 90 and 270 degrees
    pub fn height(&self) -> u16 {
        self.rotation
            .effective_size(self.config.width(), self.config.height())
            .1
    }

    /// Address the rectangle the next pixel burst fills and open a memory write.
    ///
    /// Coordinates are logical and in memory orientation; `x1`/`y1` default to
    /// the last logical column and row. The configured offsets are added
    /// before the window is sent.
    pub fn set_window(
        &mut self,
        x0: u16,
        y0: u16,
        x1: Option<u16>,
        y1: Option<u16>,
    ) -> Result<AddressWindow, Error> {
        self.ensure_ready()?;

        let x1 = x1.unwrap_or(self.config.width() - 1);
        let y1 = y1.unwrap_or(self.config.height() - 1);
        let window = AddressWindow::new(x0, y0, x1, y1)?.translate(
            self.config.left(),
            self.config.top(),
            self.config.panel_width(),
            self.config.panel_height(),
        )?;

        log::debug!(
            "Window columns {}..={}, rows {}..={}",
            window.x0(),
            window.x1(),
            window.y0(),
            window.y1()
        );

        for (cmd, data) in window_commands(&window) {
            self.interface.cmd_with_data(cmd, &data)?;
        }
        self.interface.cmd(Cmd::RAMWR)?;

        Ok(window)
    }

    /// Write a frame to the whole logical area.
    ///
    /// `image` must be exactly [`width`](Self::width) x
    /// [`height`](Self::height); it is never scaled or cropped.
    pub fn display(&mut self, image: &Frame) -> Result<(), Error> {
        self.ensure_ready()?;

        let expected = (self.width(), self.height());
        let actual = (image.width(), image.height());
        if expected != actual {
            log::warn!(
                "Refusing {}x{} image for {}x{} display",
                actual.0,
                actual.1,
                expected.0,
                expected.1
            );
            return Err(Error::DimensionMismatch { expected, actual });
        }

        self.set_window(0, 0, None, None)?;
        let pixels = image_to_data(image, self.rotation);
        self.interface.data_chunked(&pixels)?;
        Ok(())
    }

    /// Address a sub-window and stream already packed RGB565 bytes into it.
    ///
    /// `data` must hold exactly two bytes per pixel of the window.
    pub fn write_window(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        data: &[u8],
    ) -> Result<(), Error> {
        self.ensure_ready()?;

        let window = AddressWindow::new(x0, y0, x1, y1)?;
        let expected = window.pixel_count() * 2;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }

        self.set_window(x0, y0, Some(x1), Some(y1))?;
        self.interface.data_chunked(data)?;
        Ok(())
    }

    /// Switch the backlight on or off. Does nothing when no backlight line is wired.
    pub fn set_backlight(&mut self, on: bool) -> Result<(), Error> {
        self.ensure_ready()?;
        self.interface.set_backlight(on)
    }

    /// Send a raw command with its parameter bytes
    pub fn command(&mut self, cmd: u8, data: &[u8]) -> Result<(), Error> {
        self.ensure_ready()?;
        self.interface.cmd_with_data(cmd, data)?;
        Ok(())
    }

    /// Send raw data bytes with DC high
    pub fn data(&mut self, data: &[u8]) -> Result<(), Error> {
        self.ensure_ready()?;
        self.interface.data_chunked(data)?;
        Ok(())
    }

    /// Tear down the driver and return the bus, lines and delay provider
    pub fn release(self) -> (SPI, DC, Option<RST>, Option<BL>, DELAY) {
        self.interface.release()
    }
}
