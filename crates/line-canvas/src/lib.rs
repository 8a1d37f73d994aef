#![cfg_attr(not(test), no_std)]

//! Fixed-size 256x16 ARGB pixel line, the unit handed to a display sink.

mod canvas;
pub mod format;

pub use canvas::Canvas;

use core::fmt;

/// Canvas width in pixels.
pub const WIDTH: usize = 256;
/// Canvas height in pixels.
pub const HEIGHT: usize = 16;
/// Total pixel count.
pub const PIXEL_COUNT: usize = WIDTH * HEIGHT;

/// Transparent white. Every pixel starts with this value.
pub const BACKGROUND: u32 = 0x00FF_FFFF;
/// Opaque black, used for set glyph bits.
pub const FOREGROUND: u32 = 0xFF00_0000;

/// Canvas access errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CanvasError {
    /// `(x, y)` lies outside the 256x16 grid.
    OutOfBounds { x: usize, y: usize },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { x, y } => {
                write!(f, "pixel ({x}, {y}) outside {WIDTH}x{HEIGHT} canvas")
            }
        }
    }
}
