//! In-memory ARGB pixel grid.

use core::convert::TryFrom;

use crate::{BACKGROUND, CanvasError, FOREGROUND, HEIGHT, PIXEL_COUNT, WIDTH, format};

/// Row-major 256x16 grid of 32-bit ARGB pixels, row 0 first.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: [u32; PIXEL_COUNT],
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let set = self.pixels.iter().filter(|&&px| px == FOREGROUND).count();
        f.debug_struct("Canvas")
            .field("width", &WIDTH)
            .field("height", &HEIGHT)
            .field("foreground_pixels", &set)
            .finish()
    }
}

impl Canvas {
    /// Creates a canvas filled with [`BACKGROUND`].
    pub const fn new() -> Self {
        Self {
            pixels: [BACKGROUND; PIXEL_COUNT],
        }
    }

    /// Returns all pixels, row-major.
    pub fn pixels(&self) -> &[u32; PIXEL_COUNT] {
        &self.pixels
    }

    /// Resets every pixel to [`BACKGROUND`].
    pub fn clear(&mut self) {
        self.pixels.fill(BACKGROUND);
    }

    /// Sets a pixel to [`FOREGROUND`] (`on = true`) or [`BACKGROUND`].
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) -> Result<(), CanvasError> {
        self.set_argb(x, y, if on { FOREGROUND } else { BACKGROUND })
    }

    /// Writes a raw ARGB value.
    pub fn set_argb(&mut self, x: usize, y: usize, argb: u32) -> Result<(), CanvasError> {
        let index = Self::index(x, y)?;
        self.pixels[index] = argb;
        Ok(())
    }

    /// Reads a pixel value.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        Self::index(x, y).ok().map(|index| self.pixels[index])
    }

    /// Whether a pixel holds [`FOREGROUND`].
    pub fn is_set(&self, x: usize, y: usize) -> Option<bool> {
        self.pixel(x, y).map(|px| px == FOREGROUND)
    }

    /// Returns row `y` (0..16).
    pub fn row(&self, y: usize) -> Option<&[u32; WIDTH]> {
        if y >= HEIGHT {
            return None;
        }

        let start = y * WIDTH;
        <&[u32; WIDTH]>::try_from(&self.pixels[start..start + WIDTH]).ok()
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.pixels.chunks_exact(WIDTH)
    }

    /// Writes the whole canvas as ARGB8888 rows into `out`.
    ///
    /// Returns the number of bytes written, or `None` when `out` is shorter
    /// than [`format::FRAME_BYTES`].
    pub fn write_argb8888(&self, out: &mut [u8]) -> Option<usize> {
        if out.len() < format::FRAME_BYTES {
            return None;
        }

        for (row, chunk) in self
            .pixels
            .chunks_exact(WIDTH)
            .zip(out.chunks_exact_mut(format::PITCH_BYTES))
        {
            let row = <&[u32; WIDTH]>::try_from(row).ok()?;
            chunk.copy_from_slice(&format::encode_row_argb8888(row));
        }

        Some(format::FRAME_BYTES)
    }

    fn index(x: usize, y: usize) -> Result<usize, CanvasError> {
        if x >= WIDTH || y >= HEIGHT {
            return Err(CanvasError::OutOfBounds { x, y });
        }

        Ok(y * WIDTH + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_background() {
        let canvas = Canvas::new();

        assert!(canvas.pixels().iter().all(|&px| px == BACKGROUND));
        assert_eq!(canvas.pixel(0, 0), Some(0x00FF_FFFF));
    }

    #[test]
    fn pixel_indexing_is_row_major() {
        let mut canvas = Canvas::new();

        canvas.set_pixel(3, 1, true).unwrap();

        assert_eq!(canvas.pixels()[WIDTH + 3], FOREGROUND);
        assert_eq!(canvas.row(1).unwrap()[3], FOREGROUND);
        assert_eq!(canvas.row(0).unwrap()[3], BACKGROUND);
    }

    #[test]
    fn out_of_bounds_pixel_is_rejected() {
        let mut canvas = Canvas::new();

        assert_eq!(
            canvas.set_pixel(WIDTH, 0, true),
            Err(CanvasError::OutOfBounds { x: WIDTH, y: 0 })
        );
        assert_eq!(
            canvas.set_pixel(0, HEIGHT, true),
            Err(CanvasError::OutOfBounds { x: 0, y: HEIGHT })
        );
        assert_eq!(canvas, Canvas::new());
    }

    #[test]
    fn set_and_read_last_pixel() {
        let mut canvas = Canvas::new();

        canvas.set_pixel(WIDTH - 1, HEIGHT - 1, true).unwrap();
        assert_eq!(canvas.is_set(WIDTH - 1, HEIGHT - 1), Some(true));
        assert_eq!(canvas.pixel(WIDTH, HEIGHT), None);
        assert!(canvas.row(HEIGHT).is_none());
    }

    #[test]
    fn clear_restores_background() {
        let mut canvas = Canvas::new();
        canvas.set_pixel(10, 10, true).unwrap();

        canvas.clear();

        assert_eq!(canvas, Canvas::new());
    }

    #[test]
    fn argb8888_dump_requires_full_frame() {
        let mut canvas = Canvas::new();
        canvas.set_pixel(0, 1, true).unwrap();

        let mut short = [0u8; 16];
        assert_eq!(canvas.write_argb8888(&mut short), None);

        let mut frame = vec![0u8; format::FRAME_BYTES];
        assert_eq!(canvas.write_argb8888(&mut frame), Some(format::FRAME_BYTES));
        assert_eq!(&frame[..4], &[0xFF, 0xFF, 0xFF, 0x00]);
        let second_row = format::PITCH_BYTES;
        assert_eq!(&frame[second_row..second_row + 4], &[0x00, 0x00, 0x00, 0xFF]);
    }
}
