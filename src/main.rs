//! Scrolling text demo for a 128x160 ILI9163 module on an ESP32-S3.
//!
//! Wiring: SCK 12, MOSI 11, CS 10, DC 9, RST 8, backlight 7.

#[cfg(target_os = "espidf")]
mod demo {
    use std::time::Instant;

    use anyhow::Context;
    use embedded_graphics::mono_font::{ascii::FONT_10X20, MonoTextStyle};
    use embedded_graphics::pixelcolor::Rgb888;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
    use embedded_graphics::text::{Baseline, Text};

    use esp_idf_svc::hal::delay::Delay;
    use esp_idf_svc::hal::gpio;
    use esp_idf_svc::hal::peripherals::Peripherals;
    use esp_idf_svc::hal::prelude::*;
    use esp_idf_svc::hal::spi;

    use ili9163::{DisplayConfig, Frame, Ili9163};

    const MESSAGE: &str = "The AE-ATM0177B3A is a 128x160 SPI display module. \
                           Its ILI9163 controller is nearly identical to the ST7735.";

    // Optional splash image converted from splash.png at build time
    const SPLASH_IMAGE: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/splash.rgb"));

    const GLYPH_WIDTH: i32 = 10;
    const SCROLL_PX_PER_SEC: f32 = 100.0;

    // https://docs.esp-rs.org/esp-idf-svc/esp_idf_svc/
    pub fn run() -> anyhow::Result<()> {
        // It is necessary to call this function once. Otherwise some patches to the runtime
        // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
        esp_idf_svc::sys::link_patches();

        // Bind the log crate to the ESP Logging facilities
        esp_idf_svc::log::EspLogger::initialize_default();

        let peripherals = Peripherals::take().context("Could not take peripherals")?;
        let pins = peripherals.pins;

        let config = DisplayConfig::new(128, 160).rotation(90).spi_speed_hz(40_000_000);

        log::info!("Configuring SPI at {} Hz, mode 0", config.spi_speed());
        let spi = spi::SpiDeviceDriver::new_single(
            peripherals.spi2,
            pins.gpio12,                    // SCK
            pins.gpio11,                    // MOSI
            Option::<gpio::AnyIOPin>::None, // No MISO needed for display
            Some(pins.gpio10),              // CS
            &spi::SpiDriverConfig::new(),
            &spi::SpiConfig::new().baudrate(config.spi_speed().Hz().into()),
        )
        .context("Could not create SPI device driver")?;

        let dc = gpio::PinDriver::output(pins.gpio9).context("Failed to set dc pin as output")?;
        let rst = gpio::PinDriver::output(pins.gpio8).context("Failed to set rst pin as output")?;
        let backlight =
            gpio::PinDriver::output(pins.gpio7).context("Failed to set backlight pin as output")?;

        let delay = Delay::default();

        log::info!("Creating display driver");
        let mut display = Ili9163::new(spi, dc, Some(rst), Some(backlight), delay, config)
            .context("Could not initialise ILI9163")?;

        let width = display.width();
        let height = display.height();
        log::info!("Display ready, {}x{} visible", width, height);

        let mut frame = Frame::new(width, height);

        if SPLASH_IMAGE.is_empty() {
            log::warn!("Splash image not available (splash.png not found at build time)");
        } else {
            log::info!("Splash image embedded, size: {} bytes", SPLASH_IMAGE.len());
            match Frame::from_raw(width, height, SPLASH_IMAGE.to_vec()) {
                Ok(splash) => {
                    display.display(&splash)?;
                    delay.delay_ms(2000);
                }
                Err(e) => log::error!("Splash image does not fit the display: {}", e),
            }
        }

        let text_style = MonoTextStyle::new(&FONT_10X20, Rgb888::YELLOW);
        let text_width = MESSAGE.chars().count() as i32 * GLYPH_WIDTH;
        let text_y = (i32::from(height) - 20) / 2;
        let band = Rectangle::new(Point::zero(), Size::new(u32::from(width), u32::from(height)))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::BLACK));

        let start = Instant::now();
        let mut frames: u32 = 0;

        loop {
            let scrolled = (start.elapsed().as_secs_f32() * SCROLL_PX_PER_SEC) as i32;
            let x = scrolled % (text_width + i32::from(width));

            band.draw(&mut frame)?;
            Text::with_baseline(
                MESSAGE,
                Point::new(i32::from(width) - x, text_y),
                text_style,
                Baseline::Top,
            )
            .draw(&mut frame)?;

            display.display(&frame)?;

            frames = frames.wrapping_add(1);
            if frames % 100 == 0 {
                let fps = frames as f32 / start.elapsed().as_secs_f32();
                log::info!("{} frames, {:.1} fps", frames, fps);
            }
        }
    }
}

#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    demo::run()
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    eprintln!("ili9163-demo drives real hardware and only runs on ESP-IDF targets");
}
