//! Glyph blitting onto a [`Canvas`].

use line_canvas::{Canvas, WIDTH};

use crate::{
    error::RasterError,
    font::{GLYPH_HEIGHT, GlyphBitmap},
};

/// Writes `glyph` with its left edge at column `cursor` and returns the next
/// cursor (`cursor + glyph width`).
///
/// Every glyph pixel is written, so set bits become foreground and clear bits
/// background. Nothing is written when the glyph would cross column 256.
pub fn blit(glyph: &GlyphBitmap, cursor: usize, canvas: &mut Canvas) -> Result<usize, RasterError> {
    let width = glyph.width().pixels();
    if !fits(cursor, width) {
        return Err(RasterError::BufferOverflow);
    }

    for y in 0..GLYPH_HEIGHT {
        let bits = glyph.row_bits(y).unwrap_or(0);
        for x in 0..width {
            let on = bits & (0x8000u16 >> x) != 0;
            canvas
                .set_pixel(cursor + x, y, on)
                .map_err(|_| RasterError::BufferOverflow)?;
        }
    }

    Ok(cursor + width)
}

/// Whether a glyph of `width` pixels fits at `cursor`.
pub const fn fits(cursor: usize, width: usize) -> bool {
    cursor <= WIDTH && width <= WIDTH - cursor
}
