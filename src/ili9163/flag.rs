/// Register payloads and panel constants used by the ILI9163 driver.
///
/// Every value here is part of the bring-up contract with the controller; a
/// wrong byte tends to show up as a blank or garbled panel rather than an
/// error.
pub struct Flag;

#[allow(missing_docs)]
impl Flag {
    // Panel memory geometry
    pub const PANEL_COLS: u16 = 128;
    pub const PANEL_ROWS: u16 = 160;

    // Frame Rate Control (0xB1): divider, line period
    pub const FRAME_RATE_NORMAL: [u8; 2] = [0x0A, 0x14];

    // Power Control 1 (0xC0): GVDD, VCI1 = -4.6V, auto mode
    pub const POWER_CONTROL_1: [u8; 3] = [0xA2, 0x02, 0x84];

    // VCOM Control 1 (0xC5): VCOMH, VCOML
    pub const VCOM_CONTROL_1: [u8; 2] = [0x2F, 0x3E];

    // VCOM Offset Control (0xC7)
    pub const VCOM_OFFSET: [u8; 1] = [0x40];

    // Memory Access Control (0x36): row/column order, bottom to top refresh.
    // Scan direction stays fixed; rotation is applied to the pixel stream.
    pub const MADCTL_DEFAULT: [u8; 1] = [0xC0];

    // Interface Pixel Format (0x3A)
    pub const COLMOD_16BIT: [u8; 1] = [0x05];

    // Full-panel address window written during init: 0..=127, 0..=159
    pub const CASET_FULL_PANEL: [u8; 4] = [0x00, 0x00, 0x00, 0x7F];
    pub const RASET_FULL_PANEL: [u8; 4] = [0x00, 0x00, 0x00, 0x9F];

    // Gamma correction (0xE0 / 0xE1)
    pub const GAMMA_POSITIVE: [u8; 16] = [
        0x02, 0x1C, 0x07, 0x12, 0x37, 0x32, 0x29, 0x2D, 0x29, 0x25, 0x2B, 0x39, 0x00, 0x01,
        0x03, 0x10,
    ];
    pub const GAMMA_NEGATIVE: [u8; 16] = [
        0x03, 0x1D, 0x07, 0x06, 0x2E, 0x2C, 0x29, 0x2D, 0x2E, 0x2E, 0x37, 0x3F, 0x00, 0x00,
        0x02, 0x10,
    ];

    // Settle times after commands, milliseconds
    pub const SWRESET_SETTLE_MS: u32 = 150;
    pub const SLPOUT_SETTLE_MS: u32 = 500;
    pub const NORON_SETTLE_MS: u32 = 10;
    pub const DISPON_SETTLE_MS: u32 = 100;

    // Hardware reset pulse hold, per level
    pub const RESET_HOLD_MS: u32 = 500;

    // Backlight low time during power-up
    pub const BACKLIGHT_PULSE_MS: u32 = 100;

    // Transport defaults
    pub const SPI_SPEED_HZ: u32 = 4_000_000;
    pub const CHUNK_SIZE: usize = 4096;
}
