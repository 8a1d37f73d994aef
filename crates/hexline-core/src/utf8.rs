//! Step-wise UTF-8 decoding over an immutable byte slice.
//!
//! [`decode_at`] decodes exactly one sequence starting at a byte index.
//! [`Utf8Decoder`] drives it lazily, one sequence per `next()`, and stops for
//! good after the first error. A `0x00` byte ends the input.

use core::iter::FusedIterator;

use crate::{config::DecodePolicy, error::DecodeError};

/// One decoded sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Decoded {
    pub codepoint: u32,
    /// Bytes consumed, 1..=4.
    pub len: usize,
    /// Byte index of the lead byte.
    pub offset: usize,
}

/// Decodes the sequence starting at `index` with the baseline policy.
///
/// Returns `None` at end of input or on a `0x00` byte.
pub fn decode_at(bytes: &[u8], index: usize) -> Option<Result<Decoded, DecodeError>> {
    decode_at_with(bytes, index, DecodePolicy::baseline())
}

/// Decodes the sequence starting at `index`.
pub fn decode_at_with(
    bytes: &[u8],
    index: usize,
    policy: DecodePolicy,
) -> Option<Result<Decoded, DecodeError>> {
    let lead = *bytes.get(index)?;

    let (len, payload) = match lead {
        0x00 => return None,
        0x01..=0x7F => {
            return Some(Ok(Decoded {
                codepoint: u32::from(lead),
                len: 1,
                offset: index,
            }));
        }
        0xC0..=0xDF => (2, lead & 0x1F),
        0xE0..=0xEF => (3, lead & 0x0F),
        0xF0..=0xF7 => (4, lead & 0x07),
        _ => return Some(Err(DecodeError::InvalidLeadByte)),
    };

    Some(assemble(bytes, index, len, payload, policy))
}

fn assemble(
    bytes: &[u8],
    index: usize,
    len: usize,
    payload: u8,
    policy: DecodePolicy,
) -> Result<Decoded, DecodeError> {
    if payload == 0 {
        return Err(DecodeError::InsignificantLeadByte);
    }

    let mut codepoint = u32::from(payload);
    for i in 1..len {
        let Some(&byte) = bytes.get(index + i) else {
            return Err(DecodeError::TruncatedSequence);
        };
        if byte & 0xC0 != 0x80 {
            return Err(DecodeError::InvalidContinuationByte);
        }
        codepoint = (codepoint << 6) | u32::from(byte & 0x3F);
    }

    if policy.reject_overlong && codepoint < min_codepoint_for_len(len) {
        return Err(DecodeError::OverlongEncoding);
    }
    if policy.reject_surrogates && (0xD800..=0xDFFF).contains(&codepoint) {
        return Err(DecodeError::SurrogateCodepoint);
    }

    Ok(Decoded {
        codepoint,
        len,
        offset: index,
    })
}

const fn min_codepoint_for_len(len: usize) -> u32 {
    match len {
        2 => 0x80,
        3 => 0x800,
        4 => 0x1_0000,
        _ => 0,
    }
}

/// Lazy decoder over `bytes`.
#[derive(Clone, Debug)]
pub struct Utf8Decoder<'a> {
    bytes: &'a [u8],
    position: usize,
    policy: DecodePolicy,
    halted: bool,
}

impl<'a> Utf8Decoder<'a> {
    /// Decoder with [`DecodePolicy::baseline`].
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self::with_policy(bytes, DecodePolicy::baseline())
    }

    /// Decoder that applies `policy` to every sequence.
    pub const fn with_policy(bytes: &'a [u8], policy: DecodePolicy) -> Self {
        Self {
            bytes,
            position: 0,
            policy,
            halted: false,
        }
    }

    /// Byte index of the next lead byte. After an error this is the offset of
    /// the sequence that failed.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Restarts decoding at `index`.
    pub fn seek(&mut self, index: usize) {
        self.position = index;
        self.halted = false;
    }

    /// Restarts decoding from the beginning.
    pub fn reset(&mut self) {
        self.seek(0);
    }
}

impl Iterator for Utf8Decoder<'_> {
    type Item = Result<Decoded, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }

        match decode_at_with(self.bytes, self.position, self.policy) {
            None => {
                self.halted = true;
                None
            }
            Some(Ok(decoded)) => {
                self.position += decoded.len;
                Some(Ok(decoded))
            }
            Some(Err(error)) => {
                self.halted = true;
                Some(Err(error))
            }
        }
    }
}

impl FusedIterator for Utf8Decoder<'_> {}
