//! Recording fakes for the SPI bus, control lines and delay.
//!
//! All fakes append to one shared log so the relative order of DC changes,
//! SPI writes and delays can be asserted.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, Operation, SpiDevice};

use ili9163::{DisplayConfig, Ili9163};

/// Something observable on the wires
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Dc(bool),
    Reset(bool),
    Backlight(bool),
    Begin,
    Write(Vec<u8>),
    End,
    DelayMs(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Dc,
    Reset,
    Backlight,
}

type Log = Rc<RefCell<Vec<Event>>>;

pub struct FakeSpi {
    log: Log,
    writes: usize,
    fail_at: Option<usize>,
}

impl spi::ErrorType for FakeSpi {
    type Error = spi::ErrorKind;
}

impl SpiDevice for FakeSpi {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Begin);
        for op in operations.iter() {
            if let Operation::Write(bytes) = op {
                if self.fail_at == Some(self.writes) {
                    return Err(spi::ErrorKind::Other);
                }
                self.writes += 1;
                self.log.borrow_mut().push(Event::Write(bytes.to_vec()));
            }
        }
        self.log.borrow_mut().push(Event::End);
        Ok(())
    }
}

pub struct FakePin {
    log: Log,
    line: Line,
    fail: bool,
}

impl FakePin {
    fn record(&mut self, level: bool) -> Result<(), digital::ErrorKind> {
        if self.fail {
            return Err(digital::ErrorKind::Other);
        }
        let event = match self.line {
            Line::Dc => Event::Dc(level),
            Line::Reset => Event::Reset(level),
            Line::Backlight => Event::Backlight(level),
        };
        self.log.borrow_mut().push(event);
        Ok(())
    }
}

impl digital::ErrorType for FakePin {
    type Error = digital::ErrorKind;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.record(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.record(true)
    }
}

pub struct FakeDelay {
    log: Log,
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ms));
    }
}

pub type TestDisplay = Ili9163<FakeSpi, FakePin, FakePin, FakePin, FakeDelay>;

/// Shared log plus factories for fakes that write into it
#[derive(Default)]
pub struct Rig {
    log: Log,
}

impl Rig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spi(&self) -> FakeSpi {
        FakeSpi {
            log: self.log.clone(),
            writes: 0,
            fail_at: None,
        }
    }

    /// SPI that fails on the `n`th write (0-based)
    pub fn failing_spi(&self, n: usize) -> FakeSpi {
        FakeSpi {
            fail_at: Some(n),
            ..self.spi()
        }
    }

    pub fn pin(&self, line: Line) -> FakePin {
        FakePin {
            log: self.log.clone(),
            line,
            fail: false,
        }
    }

    pub fn failing_pin(&self, line: Line) -> FakePin {
        FakePin {
            fail: true,
            ..self.pin(line)
        }
    }

    pub fn delay(&self) -> FakeDelay {
        FakeDelay {
            log: self.log.clone(),
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }

    /// Ready driver with every optional line wired
    pub fn display(&self, config: DisplayConfig) -> TestDisplay {
        Ili9163::new(
            self.spi(),
            self.pin(Line::Dc),
            Some(self.pin(Line::Reset)),
            Some(self.pin(Line::Backlight)),
            self.delay(),
            config,
        )
        .expect("fake bus never fails")
    }
}

/// Fold the event log into `(command, parameter bytes)` pairs.
///
/// A write with DC low opens a command; writes with DC high extend the
/// parameters of the latest one.
pub fn commands(events: &[Event]) -> Vec<(u8, Vec<u8>)> {
    let mut dc = false;
    let mut out: Vec<(u8, Vec<u8>)> = Vec::new();
    for event in events {
        match event {
            Event::Dc(level) => dc = *level,
            Event::Write(bytes) if !dc => {
                for &cmd in bytes {
                    out.push((cmd, Vec::new()));
                }
            }
            Event::Write(bytes) => {
                if let Some((_, data)) = out.last_mut() {
                    data.extend_from_slice(bytes);
                }
            }
            _ => {}
        }
    }
    out
}

/// Delays in the order they were requested
pub fn delays(events: &[Event]) -> Vec<u32> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::DelayMs(ms) => Some(*ms),
            _ => None,
        })
        .collect()
}
