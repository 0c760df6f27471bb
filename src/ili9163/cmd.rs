//! ILI9163 command opcodes
//!
//! Every command is sent with the DC line low. Parameters that follow a
//! command are sent with DC high.

/// Command opcodes understood by the ILI9163 controller
pub struct Cmd;

#[allow(missing_docs)]
impl Cmd {
    pub const NOP: u8 = 0x00;
    pub const SWRESET: u8 = 0x01;
    pub const RDDID: u8 = 0x04;
    pub const RDDST: u8 = 0x09;

    // Power modes
    pub const SLPIN: u8 = 0x10;
    pub const SLPOUT: u8 = 0x11;
    pub const PTLON: u8 = 0x12;
    pub const NORON: u8 = 0x13;

    // Status reads
    pub const RDMODE: u8 = 0x0A;
    pub const RDMADCTL: u8 = 0x0B;
    pub const RDPIXFMT: u8 = 0x0C;
    pub const RDIMGFMT: u8 = 0x0A;
    pub const RDSELFDIAG: u8 = 0x0F;

    pub const INVOFF: u8 = 0x20;
    pub const INVON: u8 = 0x21;
    pub const GAMMASET: u8 = 0x26;
    pub const DISPOFF: u8 = 0x28;
    pub const DISPON: u8 = 0x29;

    // Addressing
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const RAMRD: u8 = 0x2E;

    pub const PTLAR: u8 = 0x30;
    pub const MADCTL: u8 = 0x36;
    pub const PIXFMT: u8 = 0x3A;
    pub const COLMOD: u8 = 0x3A;

    // Panel control
    pub const FRMCTR1: u8 = 0xB1;
    pub const FRMCTR2: u8 = 0xB2;
    pub const FRMCTR3: u8 = 0xB3;
    pub const INVCTR: u8 = 0xB4;
    pub const DFUNCTR: u8 = 0xB6;
    pub const DISSET5: u8 = 0xB6;

    // Power control
    pub const PWCTR1: u8 = 0xC0;
    pub const PWCTR2: u8 = 0xC1;
    pub const PWCTR3: u8 = 0xC2;
    pub const PWCTR4: u8 = 0xC3;
    pub const PWCTR5: u8 = 0xC4;
    pub const VMCTR1: u8 = 0xC5;
    pub const VMCTR2: u8 = 0xC7;

    pub const RDID1: u8 = 0xDA;
    pub const RDID2: u8 = 0xDB;
    pub const RDID3: u8 = 0xDC;
    pub const RDID4: u8 = 0xDD;

    // Gamma
    pub const GMCTRP1: u8 = 0xE0;
    pub const GMCTRN1: u8 = 0xE1;

    pub const PWCTR6: u8 = 0xFC;
}

/*
Init order used by the panel vendor sample:
0x01 - Software Reset (150 ms)
0x11 - Sleep Out (500 ms)
0xB1 - Frame Rate Control, normal mode
0xC0 - Power Control 1
0xC5 - VCOM Control 1
0xC7 - VCOM Offset Control
0x20 - Inversion Off (panel is wired inverted)
0x36 - Memory Access Control
0x3A - Interface Pixel Format
0x2A - Column Address Set
0x2B - Row Address Set
0xE0 - Positive Gamma Correction
0xE1 - Negative Gamma Correction
0x13 - Normal Display On (10 ms)
0x29 - Display On (100 ms)
*/
