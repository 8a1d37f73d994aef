//! Error kinds for each pipeline stage.
//!
//! Every one of these halts a render; none are retried.

use core::fmt;

/// Why a UTF-8 sequence failed to decode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// Byte cannot start a sequence (`10xxxxxx` or `11111xxx`).
    InvalidLeadByte,
    /// Lead byte carries no payload bits (`0xC0`, `0xE0`, `0xF0`).
    InsignificantLeadByte,
    /// Expected `10xxxxxx`.
    InvalidContinuationByte,
    /// Input ended in the middle of a sequence.
    TruncatedSequence,
    /// Codepoint in `0xD800..=0xDFFF` while the policy rejects surrogates.
    SurrogateCodepoint,
    /// Value fits a shorter sequence while the policy rejects overlong forms.
    OverlongEncoding,
}

/// Why a codepoint has no glyph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LookupError {
    /// Codepoint above the font coverage ceiling `0xFFFD`.
    CodepointOutOfRange,
    /// No record for the codepoint.
    NotFound,
    /// Table line at `offset` is not a valid `HHHH:<hex>` record.
    MalformedRecord { offset: usize },
}

/// Why a glyph could not be placed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RasterError {
    /// Glyph would extend past the right canvas edge.
    BufferOverflow,
}

/// Error that halted a render, tagged with the failing codepoint once known.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RenderError {
    Decode(DecodeError),
    Lookup { codepoint: u32, error: LookupError },
    Raster { codepoint: u32, error: RasterError },
}

impl From<DecodeError> for RenderError {
    fn from(error: DecodeError) -> Self {
        Self::Decode(error)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::InvalidLeadByte => "invalid UTF-8 lead byte",
            Self::InsignificantLeadByte => "insignificant UTF-8 lead byte",
            Self::InvalidContinuationByte => "invalid UTF-8 continuation byte",
            Self::TruncatedSequence => "truncated UTF-8 sequence",
            Self::SurrogateCodepoint => "UTF-16 surrogate codepoint",
            Self::OverlongEncoding => "overlong UTF-8 encoding",
        };
        f.write_str(msg)
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CodepointOutOfRange => f.write_str("codepoint outside font coverage"),
            Self::NotFound => f.write_str("glyph not found"),
            Self::MalformedRecord { offset } => {
                write!(f, "malformed font record at byte {offset}")
            }
        }
    }
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferOverflow => f.write_str("glyph does not fit in the line"),
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(error) => write!(f, "decode: {error}"),
            Self::Lookup { codepoint, error } => write!(f, "lookup U+{codepoint:04X}: {error}"),
            Self::Raster { codepoint, error } => write!(f, "raster U+{codepoint:04X}: {error}"),
        }
    }
}
