use heapless::Vec;

use super::{GlyphBitmap, NARROW_GLYPH_BYTES, WIDE_GLYPH_BYTES};
use crate::error::LookupError;

const HEADER_DIGITS: usize = 4;
const HEADER_LEN: usize = HEADER_DIGITS + 1;

/// One record line with its header decoded.
#[derive(Clone, Copy, Debug)]
pub(super) struct Record<'a> {
    pub(super) codepoint: u16,
    /// Byte offset of the line start in the table.
    pub(super) offset: usize,
    /// Line contents without the terminator.
    pub(super) line: &'a [u8],
}

impl Record<'_> {
    pub(super) fn bitmap(&self) -> Result<GlyphBitmap, LookupError> {
        parse_payload(&self.line[HEADER_LEN..], self.offset)
    }
}

/// Walks record headers from a byte offset, in file order.
///
/// Empty lines are skipped. Yields one `MalformedRecord` and then stops.
pub(super) struct Records<'a> {
    source: &'a [u8],
    cursor: usize,
    halted: bool,
}

impl<'a> Records<'a> {
    pub(super) fn from_offset(source: &'a [u8], cursor: usize) -> Self {
        Self {
            source,
            cursor,
            halted: false,
        }
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = Result<Record<'a>, LookupError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.halted {
            let (offset, line, next_cursor) = next_line(self.source, self.cursor)?;
            self.cursor = next_cursor;

            if line.is_empty() {
                continue;
            }

            return match parse_header(line) {
                Some(codepoint) => Some(Ok(Record {
                    codepoint,
                    offset,
                    line,
                })),
                None => {
                    self.halted = true;
                    Some(Err(LookupError::MalformedRecord { offset }))
                }
            };
        }

        None
    }
}

/// Returns `(line_offset, line, next_cursor)`; a trailing `\r` is dropped.
fn next_line(source: &[u8], cursor: usize) -> Option<(usize, &[u8], usize)> {
    let rest = source.get(cursor..)?;
    if rest.is_empty() {
        return None;
    }

    let (line, consumed) = match rest.iter().position(|&b| b == b'\n') {
        Some(end) => (&rest[..end], end + 1),
        None => (rest, rest.len()),
    };
    let line = line.strip_suffix(b"\r").unwrap_or(line);

    Some((cursor, line, cursor + consumed))
}

fn parse_header(line: &[u8]) -> Option<u16> {
    if line.len() < HEADER_LEN || line[HEADER_DIGITS] != b':' {
        return None;
    }

    line[..HEADER_DIGITS]
        .iter()
        .try_fold(0u16, |acc, &b| Some((acc << 4) | u16::from(hex_nibble(b)?)))
}

fn parse_payload(hex: &[u8], offset: usize) -> Result<GlyphBitmap, LookupError> {
    let malformed = LookupError::MalformedRecord { offset };

    if hex.len() != NARROW_GLYPH_BYTES * 2 && hex.len() != WIDE_GLYPH_BYTES * 2 {
        return Err(malformed);
    }

    let mut bytes: Vec<u8, WIDE_GLYPH_BYTES> = Vec::new();
    for pair in hex.chunks_exact(2) {
        let (Some(hi), Some(lo)) = (hex_nibble(pair[0]), hex_nibble(pair[1])) else {
            return Err(malformed);
        };
        bytes.push((hi << 4) | lo).map_err(|_| malformed)?;
    }

    GlyphBitmap::from_bytes(&bytes).ok_or(malformed)
}

#[inline]
fn hex_nibble(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
