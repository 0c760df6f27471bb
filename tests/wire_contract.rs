//! Byte-exact bus traffic checked with embedded-hal-mock.

use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::digital::{
    Mock as PinMock, State as PinState, Transaction as PinTransaction,
};
use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};
use ili9163::{DisplayConfig, Ili9163, NoPin};

/// Register sequence the panel needs after reset, with INVOFF for the inverted module
const BRING_UP: &[(u8, &[u8])] = &[
    (0x01, &[]),
    (0x11, &[]),
    (0xB1, &[0x0A, 0x14]),
    (0xC0, &[0xA2, 0x02, 0x84]),
    (0xC5, &[0x2F, 0x3E]),
    (0xC7, &[0x40]),
    (0x20, &[]),
    (0x36, &[0xC0]),
    (0x3A, &[0x05]),
    (0x2A, &[0x00, 0x00, 0x00, 0x7F]),
    (0x2B, &[0x00, 0x00, 0x00, 0x9F]),
    (
        0xE0,
        &[
            0x02, 0x1C, 0x07, 0x12, 0x37, 0x32, 0x29, 0x2D, 0x29, 0x25, 0x2B, 0x39, 0x00, 0x01,
            0x03, 0x10,
        ],
    ),
    (
        0xE1,
        &[
            0x03, 0x1D, 0x07, 0x06, 0x2E, 0x2C, 0x29, 0x2D, 0x2E, 0x2E, 0x37, 0x3F, 0x00, 0x00,
            0x02, 0x10,
        ],
    ),
    (0x13, &[]),
    (0x29, &[]),
];

#[derive(Default)]
struct Expect {
    spi: Vec<SpiTransaction<u8>>,
    dc: Vec<PinTransaction>,
}

impl Expect {
    fn write(&mut self, level: PinState, bytes: &[u8]) {
        self.dc.push(PinTransaction::set(level));
        self.spi.push(SpiTransaction::transaction_start());
        self.spi.push(SpiTransaction::write_vec(bytes.to_vec()));
        self.spi.push(SpiTransaction::transaction_end());
    }

    fn command(&mut self, cmd: u8, data: &[u8]) {
        self.write(PinState::Low, &[cmd]);
        if !data.is_empty() {
            self.write(PinState::High, data);
        }
    }
}

#[test]
fn bring_up_then_window_then_pixels() {
    let mut expect = Expect::default();
    for (cmd, data) in BRING_UP {
        expect.command(*cmd, data);
    }
    // 2x2 window at the panel origin, then 8 pixel bytes
    expect.command(0x2A, &[0x00, 0x00, 0x00, 0x01]);
    expect.command(0x2B, &[0x00, 0x00, 0x00, 0x01]);
    expect.command(0x2C, &[]);
    expect.write(PinState::High, &[0xF8, 0x00, 0x07, 0xE0, 0x00, 0x1F, 0xFF, 0xFF]);

    let mut spi = SpiMock::new(&expect.spi);
    let mut dc = PinMock::new(&expect.dc);

    let mut display = Ili9163::new(
        spi.clone(),
        dc.clone(),
        None::<NoPin>,
        None::<NoPin>,
        NoopDelay,
        DisplayConfig::default(),
    )
    .unwrap();
    display
        .write_window(0, 0, 1, 1, &[0xF8, 0x00, 0x07, 0xE0, 0x00, 0x1F, 0xFF, 0xFF])
        .unwrap();

    spi.done();
    dc.done();
}

#[test]
fn invalid_config_produces_no_traffic() {
    let mut spi = SpiMock::new(&[]);
    let mut dc = PinMock::new(&[]);

    let result = Ili9163::new(
        spi.clone(),
        dc.clone(),
        None::<NoPin>,
        None::<NoPin>,
        NoopDelay,
        DisplayConfig::default().rotation(360),
    );
    assert!(result.is_err());

    spi.done();
    dc.done();
}
