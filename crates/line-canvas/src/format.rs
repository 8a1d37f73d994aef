//! Byte layout helpers for handing a canvas to a display sink.

use crate::{HEIGHT, WIDTH};

/// Bytes per pixel in ARGB8888.
pub const BYTES_PER_PIXEL: usize = 4;
/// Bytes in one encoded canvas row (texture pitch).
pub const PITCH_BYTES: usize = WIDTH * BYTES_PER_PIXEL;
/// Bytes in one encoded canvas.
pub const FRAME_BYTES: usize = PITCH_BYTES * HEIGHT;

/// Splits an ARGB value into `(a, r, g, b)`.
#[inline]
pub const fn argb_channels(argb: u32) -> (u8, u8, u8, u8) {
    (
        (argb >> 24) as u8,
        (argb >> 16) as u8,
        (argb >> 8) as u8,
        argb as u8,
    )
}

/// Packs one row as ARGB8888.
///
/// Each pixel is stored as a native little-endian `u32`, i.e. `B, G, R, A`
/// in memory order, which is what 32-bit ARGB streaming textures expect.
#[inline]
pub fn encode_row_argb8888(row: &[u32; WIDTH]) -> [u8; PITCH_BYTES] {
    let mut out = [0u8; PITCH_BYTES];

    for (px, chunk) in row.iter().zip(out.chunks_exact_mut(BYTES_PER_PIXEL)) {
        chunk.copy_from_slice(&px.to_le_bytes());
    }

    out
}
