//! Unifont `.hex` glyph tables.
//!
//! A table is a text resource with one `HHHH:<hex>` record per line. The hex
//! payload is 32 digits for an 8x16 glyph or 64 digits for a 16x16 glyph.

mod hex_table;
mod index;
mod record;

pub use hex_table::HexGlyphTable;
pub use index::{GlyphIndex, IndexedGlyphTable};

use crate::error::LookupError;

/// Highest codepoint the table format covers.
pub const MAX_CODEPOINT: u32 = 0xFFFD;
/// Glyph height in rows, for both widths.
pub const GLYPH_HEIGHT: usize = 16;
/// Bitmap size of an 8x16 glyph.
pub const NARROW_GLYPH_BYTES: usize = 16;
/// Bitmap size of a 16x16 glyph.
pub const WIDE_GLYPH_BYTES: usize = 32;

/// Glyph cell width.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GlyphWidth {
    /// 8 px, one byte per row.
    Narrow,
    /// 16 px, two bytes per row.
    Wide,
}

impl GlyphWidth {
    /// Width in pixels, which is also the cursor advance.
    pub const fn pixels(self) -> usize {
        match self {
            Self::Narrow => 8,
            Self::Wide => 16,
        }
    }
}

/// 1bpp glyph image, 16 rows, MSB-first.
///
/// Always holds exactly 16 or 32 bytes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GlyphBitmap {
    bytes: heapless::Vec<u8, WIDE_GLYPH_BYTES>,
}

impl GlyphBitmap {
    /// Returns `None` unless `bytes` is 16 or 32 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != NARROW_GLYPH_BYTES && bytes.len() != WIDE_GLYPH_BYTES {
            return None;
        }

        heapless::Vec::from_slice(bytes).ok().map(|bytes| Self { bytes })
    }

    /// Raw bitmap bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Narrow for 16 bytes, wide for 32.
    pub fn width(&self) -> GlyphWidth {
        if self.bytes.len() == WIDE_GLYPH_BYTES {
            GlyphWidth::Wide
        } else {
            GlyphWidth::Narrow
        }
    }

    /// Row bits left-aligned in a `u16`: bit 15 is the leftmost pixel.
    pub fn row_bits(&self, row: usize) -> Option<u16> {
        if row >= GLYPH_HEIGHT {
            return None;
        }

        match self.width() {
            GlyphWidth::Narrow => Some(u16::from(self.bytes[row]) << 8),
            GlyphWidth::Wide => Some(u16::from_be_bytes([
                self.bytes[row * 2],
                self.bytes[row * 2 + 1],
            ])),
        }
    }

    /// Whether pixel `(x, y)` of the glyph is set.
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        if x >= self.width().pixels() {
            return false;
        }

        self.row_bits(y)
            .is_some_and(|bits| bits & (0x8000u16 >> x) != 0)
    }
}

/// Anything that resolves codepoints to glyph bitmaps.
pub trait GlyphSource {
    /// Resolves `codepoint` to its bitmap.
    fn lookup(&self, codepoint: u32) -> Result<GlyphBitmap, LookupError>;
}

impl<T: GlyphSource + ?Sized> GlyphSource for &T {
    fn lookup(&self, codepoint: u32) -> Result<GlyphBitmap, LookupError> {
        (**self).lookup(codepoint)
    }
}

#[cfg(test)]
mod tests;
