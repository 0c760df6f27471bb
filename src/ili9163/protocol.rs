//! Command sequences for the ILI9163
//!
//! Everything here is pure: it builds the `(command, parameters, settle time)`
//! steps the interface later puts on the wire. Keeping the sequences as data
//! lets the exact register contract be checked without a bus.

use crate::ili9163::cmd::Cmd;
use crate::ili9163::error::Error;
use crate::ili9163::flag::Flag;

/// One command with its parameter bytes and the time the controller needs afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Command opcode, sent with DC low
    pub cmd: u8,
    /// Parameter bytes, sent with DC high
    pub data: &'static [u8],
    /// Blocking settle time after the step, milliseconds
    pub delay_ms: u32,
}

impl Step {
    const fn new(cmd: u8, data: &'static [u8]) -> Self {
        Self {
            cmd,
            data,
            delay_ms: 0,
        }
    }

    const fn settle(cmd: u8, delay_ms: u32) -> Self {
        Self {
            cmd,
            data: &[],
            delay_ms,
        }
    }
}

/// Hardware reset pulse: reset line level and hold time for each phase
pub const RESET_PULSE: [(bool, u32); 3] = [
    (true, Flag::RESET_HOLD_MS),
    (false, Flag::RESET_HOLD_MS),
    (true, Flag::RESET_HOLD_MS),
];

/// Number of steps in the register init sequence
pub const INIT_STEPS: usize = 15;

/// Register init sequence, run once after the hardware reset
///
/// The panel is wired inverted, so `invert == true` selects INVOFF.
pub fn init_sequence(invert: bool) -> [Step; INIT_STEPS] {
    let inversion = if invert { Cmd::INVOFF } else { Cmd::INVON };

    [
        Step::settle(Cmd::SWRESET, Flag::SWRESET_SETTLE_MS),
        Step::settle(Cmd::SLPOUT, Flag::SLPOUT_SETTLE_MS),
        Step::new(Cmd::FRMCTR1, &Flag::FRAME_RATE_NORMAL),
        Step::new(Cmd::PWCTR1, &Flag::POWER_CONTROL_1),
        Step::new(Cmd::VMCTR1, &Flag::VCOM_CONTROL_1),
        Step::new(Cmd::VMCTR2, &Flag::VCOM_OFFSET),
        Step::new(inversion, &[]),
        Step::new(Cmd::MADCTL, &Flag::MADCTL_DEFAULT),
        Step::new(Cmd::COLMOD, &Flag::COLMOD_16BIT),
        Step::new(Cmd::CASET, &Flag::CASET_FULL_PANEL),
        Step::new(Cmd::RASET, &Flag::RASET_FULL_PANEL),
        Step::new(Cmd::GMCTRP1, &Flag::GAMMA_POSITIVE),
        Step::new(Cmd::GMCTRN1, &Flag::GAMMA_NEGATIVE),
        Step::settle(Cmd::NORON, Flag::NORON_SETTLE_MS),
        Step::settle(Cmd::DISPON, Flag::DISPON_SETTLE_MS),
    ]
}

/// Inclusive rectangle of controller memory that the next pixel burst fills
///
/// Only built through [`AddressWindow::new`], so `x0 <= x1` and `y0 <= y1`
/// always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressWindow {
    x0: u16,
    y0: u16,
    x1: u16,
    y1: u16,
}

impl AddressWindow {
    /// Build a window, rejecting inverted corners
    pub fn new(x0: u16, y0: u16, x1: u16, y1: u16) -> Result<Self, Error> {
        if x1 < x0 || y1 < y0 {
            return Err(Error::WindowOutOfBounds { x0, y0, x1, y1 });
        }
        Ok(Self { x0, y0, x1, y1 })
    }

    /// Shift logical coordinates into panel memory and check they stay inside it
    pub fn translate(
        self,
        left: u16,
        top: u16,
        panel_width: u16,
        panel_height: u16,
    ) -> Result<Self, Error> {
        let out_of_bounds = Error::WindowOutOfBounds {
            x0: self.x0,
            y0: self.y0,
            x1: self.x1,
            y1: self.y1,
        };

        let (Some(x0), Some(x1), Some(y0), Some(y1)) = (
            self.x0.checked_add(left),
            self.x1.checked_add(left),
            self.y0.checked_add(top),
            self.y1.checked_add(top),
        ) else {
            return Err(out_of_bounds);
        };

        if x1 >= panel_width || y1 >= panel_height {
            return Err(out_of_bounds);
        }

        Ok(Self { x0, y0, x1, y1 })
    }

    /// First column
    pub const fn x0(&self) -> u16 {
        self.x0
    }

    /// First row
    pub const fn y0(&self) -> u16 {
        self.y0
    }

    /// Last column, inclusive
    pub const fn x1(&self) -> u16 {
        self.x1
    }

    /// Last row, inclusive
    pub const fn y1(&self) -> u16 {
        self.y1
    }

    /// Columns covered
    pub const fn width(&self) -> u32 {
        (self.x1 - self.x0) as u32 + 1
    }

    /// Rows covered
    pub const fn height(&self) -> u32 {
        (self.y1 - self.y0) as u32 + 1
    }

    /// Pixels the controller expects before the write pointer wraps
    pub const fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// CASET parameters: start high, start low, end high, end low
    pub const fn column_data(&self) -> [u8; 4] {
        address_bytes(self.x0, self.x1)
    }

    /// RASET parameters: start high, start low, end high, end low
    pub const fn row_data(&self) -> [u8; 4] {
        address_bytes(self.y0, self.y1)
    }
}

const fn address_bytes(start: u16, end: u16) -> [u8; 4] {
    let [start_hi, start_lo] = start.to_be_bytes();
    let [end_hi, end_lo] = end.to_be_bytes();
    [start_hi, start_lo, end_hi, end_lo]
}

/// Commands that address `window` and open a memory write.
///
/// RAMWR carries no parameters; the pixel burst that follows is its data.
pub const fn window_commands(window: &AddressWindow) -> [(u8, [u8; 4]); 2] {
    [
        (Cmd::CASET, window.column_data()),
        (Cmd::RASET, window.row_data()),
    ]
}
