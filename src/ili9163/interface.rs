//! Display interface using SPI
use crate::ili9163::error::{DisplayError, Error};
use crate::ili9163::flag::Flag;
use crate::ili9163::protocol::{Step, RESET_PULSE};
use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, OutputPin},
    spi::{Operation, SpiDevice},
};

/// Placeholder for a control line that is not wired
///
/// Use it as the type parameter when passing `None` for the reset or
/// backlight line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPin;

impl ErrorType for NoPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// SPI connection to an ILI9163 with its control lines
pub struct DisplayInterface<SPI, DC, RST, BL, DELAY> {
    /// SPI device
    spi: SPI,
    /// Data/Command Control Pin (High for data, Low for command)
    dc: DC,
    /// Hardware reset line, if wired
    rst: Option<RST>,
    /// Backlight enable line, if wired
    backlight: Option<BL>,
    /// Delay provider for settle times
    pub(crate) delay: DELAY,
    /// Largest single write inside one data burst
    chunk_size: usize,
}

impl<SPI, DC, RST, BL, DELAY> DisplayInterface<SPI, DC, RST, BL, DELAY> {
    /// Bundle the bus, lines and delay provider
    pub fn new(spi: SPI, dc: DC, rst: Option<RST>, backlight: Option<BL>, delay: DELAY) -> Self {
        DisplayInterface {
            spi,
            dc,
            rst,
            backlight,
            delay,
            chunk_size: Flag::CHUNK_SIZE,
        }
    }

    /// Split pixel bursts into writes of at most `chunk_size` bytes (minimum 1)
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Current burst chunk size
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// True when a backlight line was supplied
    pub fn has_backlight(&self) -> bool {
        self.backlight.is_some()
    }

    /// True when a reset line was supplied
    pub fn has_reset(&self) -> bool {
        self.rst.is_some()
    }

    /// Hand back the bus, lines and delay provider
    pub fn release(self) -> (SPI, DC, Option<RST>, Option<BL>, DELAY) {
        (self.spi, self.dc, self.rst, self.backlight, self.delay)
    }
}

impl<SPI, DC, RST, BL, DELAY> DisplayInterface<SPI, DC, RST, BL, DELAY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BL: OutputPin,
    DELAY: DelayNs,
{
    /// Basic function for sending commands
    pub(crate) fn cmd(&mut self, command: u8) -> Result<(), DisplayError> {
        // low for commands
        self.dc.set_low().map_err(|_| DisplayError::DCError)?;

        self.spi.write(&[command]).map_err(|e| {
            log::error!("SPI write error for command 0x{:02X}: {:?}", command, e);
            DisplayError::BusWriteError
        })
    }

    /// Basic function for sending an array of u8-values of data over spi
    pub(crate) fn data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        // high for data
        self.dc.set_high().map_err(|_| DisplayError::DCError)?;
        self.spi.write(data).map_err(|e| {
            log::error!("SPI write error for {} data bytes: {:?}", data.len(), e);
            DisplayError::BusWriteError
        })
    }

    /// Basic function for sending a command and the data belonging to it.
    pub(crate) fn cmd_with_data(&mut self, command: u8, data: &[u8]) -> Result<(), DisplayError> {
        self.cmd(command)?;
        if data.is_empty() {
            return Ok(());
        }
        self.data(data)
    }

    /// Run one init step: command, parameters, then the settle time
    pub(crate) fn step(&mut self, step: &Step) -> Result<(), DisplayError> {
        log::debug!(
            "cmd 0x{:02X} with {} parameter bytes, settle {} ms",
            step.cmd,
            step.data.len(),
            step.delay_ms
        );
        self.cmd_with_data(step.cmd, step.data)?;
        if step.delay_ms > 0 {
            self.delay.delay_ms(step.delay_ms);
        }
        Ok(())
    }

    /// Send one logical data burst.
    ///
    /// DC is raised once and chip select stays asserted for the whole
    /// transaction; the bytes are split into `chunk_size` writes inside it.
    pub(crate) fn data_chunked(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        if data.is_empty() {
            return Ok(());
        }

        self.dc.set_high().map_err(|_| DisplayError::DCError)?;

        let mut operations: Vec<Operation<'_, u8>> =
            data.chunks(self.chunk_size).map(Operation::Write).collect();

        log::trace!(
            "Sending {} bytes in {} chunks of up to {}",
            data.len(),
            operations.len(),
            self.chunk_size
        );

        self.spi.transaction(&mut operations).map_err(|e| {
            log::error!("SPI burst of {} bytes failed: {:?}", data.len(), e);
            DisplayError::BusWriteError
        })
    }

    /// Pulse the reset line high, low, high. Does nothing when no reset line is wired.
    pub(crate) fn reset(&mut self) -> Result<(), DisplayError> {
        let Some(rst) = self.rst.as_mut() else {
            log::debug!("No reset line, skipping hardware reset");
            return Ok(());
        };

        log::info!("Hardware reset");
        for (level, hold_ms) in RESET_PULSE {
            if level {
                rst.set_high().map_err(|_| DisplayError::RSError)?;
            } else {
                rst.set_low().map_err(|_| DisplayError::RSError)?;
            }
            self.delay.delay_ms(hold_ms);
        }
        Ok(())
    }

    /// Drive the backlight low, wait, then high, leaving it on.
    /// Does nothing when no backlight line is wired.
    pub(crate) fn pulse_backlight(&mut self) -> Result<(), Error> {
        if !self.has_backlight() {
            return Ok(());
        }
        self.set_backlight(false)?;
        self.delay.delay_ms(Flag::BACKLIGHT_PULSE_MS);
        self.set_backlight(true)
    }

    /// Switch the backlight. Does nothing when no backlight line is wired.
    pub(crate) fn set_backlight(&mut self, on: bool) -> Result<(), Error> {
        let Some(backlight) = self.backlight.as_mut() else {
            return Ok(());
        };
        let result = if on {
            backlight.set_high()
        } else {
            backlight.set_low()
        };
        result.map_err(|_| Error::Backlight)
    }
}
