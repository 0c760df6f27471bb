//! RGB565 pixel codec and the RGB frame buffer it consumes
//!
//! The controller takes 16 bits per pixel, 5 red, 6 green, 5 blue, high byte
//! first. A [`Frame`] holds 8-bit RGB samples in row-major order and can be
//! drawn into with `embedded-graphics`. [`image_to_data`] turns a whole frame
//! into the byte stream for one memory write, applying the rotation on the way.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::prelude::*;

use crate::ili9163::config::Rotation;
use crate::ili9163::error::Error;

/// Named RGB565 colours
pub struct Color;

#[allow(missing_docs)]
impl Color {
    pub const BLACK: u16 = 0x0000; // 0b 00000 000000 00000
    pub const BLUE: u16 = 0x001F; // 0b 00000 000000 11111
    pub const GREEN: u16 = 0x07E0; // 0b 00000 111111 00000
    pub const RED: u16 = 0xF800; // 0b 11111 000000 00000
    pub const CYAN: u16 = 0x07FF; // 0b 00000 111111 11111
    pub const MAGENTA: u16 = 0xF81F; // 0b 11111 000000 11111
    pub const YELLOW: u16 = 0xFFE0; // 0b 11111 111111 00000
    pub const WHITE: u16 = 0xFFFF; // 0b 11111 111111 11111
}

/// Pack 8-bit red, green and blue into one RGB565 value
pub const fn color565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3)
}

/// Expand an RGB565 value back to 8-bit channels, low bits zero
pub const fn rgb_from_565(color: u16) -> (u8, u8, u8) {
    let r = ((color >> 11) & 0x1F) as u8;
    let g = ((color >> 5) & 0x3F) as u8;
    let b = (color & 0x1F) as u8;
    (r << 3, g << 2, b << 3)
}

/// Source pixel `(x, y)` that lands at `(row, col)` of the rotated output.
///
/// Rotation is counter-clockwise by whole quarter turns over a `width` x
/// `height` source image. The output is `height` columns wide when the
/// rotation swaps dimensions, `width` otherwise.
pub const fn source_coordinate(
    rotation: Rotation,
    row: usize,
    col: usize,
    width: usize,
    height: usize,
) -> (usize, usize) {
    match rotation {
        Rotation::Deg0 => (col, row),
        Rotation::Deg90 => (width - 1 - row, col),
        Rotation::Deg180 => (width - 1 - col, height - 1 - row),
        Rotation::Deg270 => (row, height - 1 - col),
    }
}

/// Encode a whole frame as big-endian RGB565, rotated for the controller.
///
/// The result is always `width * height * 2` bytes, row-major over the
/// rotated image.
pub fn image_to_data(image: &Frame, rotation: Rotation) -> Vec<u8> {
    let width = usize::from(image.width);
    let height = usize::from(image.height);
    let (out_width, out_height) = if rotation.swaps_dimensions() {
        (height, width)
    } else {
        (width, height)
    };

    let src = image.data.as_slice();
    let mut out = vec![0u8; width * height * 2];
    if out.is_empty() {
        return out;
    }

    if rotation == Rotation::Deg0 {
        for (px, dst) in src.chunks_exact(3).zip(out.chunks_exact_mut(2)) {
            dst.copy_from_slice(&color565(px[0], px[1], px[2]).to_be_bytes());
        }
        return out;
    }

    // Rows of the rotated image are independent; each output row is written
    // in one pass over its destination slice.
    for (row, dst_row) in out.chunks_exact_mut(out_width * 2).enumerate() {
        debug_assert!(row < out_height);
        for (col, dst) in dst_row.chunks_exact_mut(2).enumerate() {
            let (x, y) = source_coordinate(rotation, row, col, width, height);
            let at = (y * width + x) * 3;
            let packed = color565(src[at], src[at + 1], src[at + 2]);
            dst.copy_from_slice(&packed.to_be_bytes());
        }
    }

    out
}

/// Decode a big-endian RGB565 stream into packed values
pub fn data_to_565(data: &[u8]) -> Vec<u16> {
    data.chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect()
}

/// Owned RGB image, 3 bytes per pixel, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    data: Vec<u8>,
}

impl Frame {
    /// Black frame of the given size
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            data: vec![0; usize::from(width) * usize::from(height) * 3],
        }
    }

    /// Wrap existing RGB bytes; the length must be `width * height * 3`
    pub fn from_raw(width: u16, height: u16, data: Vec<u8>) -> Result<Self, Error> {
        let expected = usize::from(width) * usize::from(height) * 3;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Raw RGB bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Give back the raw RGB bytes
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (usize::from(y) * usize::from(self.width) + usize::from(x)) * 3)
    }

    /// Colour at `(x, y)`, or `None` outside the frame
    pub fn pixel(&self, x: u16, y: u16) -> Option<Rgb888> {
        let at = self.offset(x, y)?;
        Some(Rgb888::new(
            self.data[at],
            self.data[at + 1],
            self.data[at + 2],
        ))
    }

    /// Set `(x, y)`; returns false when outside the frame
    pub fn set_pixel(&mut self, x: u16, y: u16, color: Rgb888) -> bool {
        match self.offset(x, y) {
            Some(at) => {
                self.data[at..at + 3].copy_from_slice(&[color.r(), color.g(), color.b()]);
                true
            }
            None => false,
        }
    }

    /// Paint every pixel
    pub fn fill(&mut self, color: Rgb888) {
        for px in self.data.chunks_exact_mut(3) {
            px.copy_from_slice(&[color.r(), color.g(), color.b()]);
        }
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        Size::new(u32::from(self.width), u32::from(self.height))
    }
}

impl DrawTarget for Frame {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u16::try_from(point.x), u16::try_from(point.y)) else {
                continue;
            };
            self.set_pixel(x, y, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}
