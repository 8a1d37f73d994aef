use super::{
    GlyphBitmap, GlyphSource, MAX_CODEPOINT,
    record::{Record, Records},
};
use crate::error::LookupError;

/// Unindexed `.hex` table over a borrowed font definition.
///
/// Every lookup scans from the top; the first record for a codepoint wins.
#[derive(Clone, Copy, Debug)]
pub struct HexGlyphTable<'a> {
    source: &'a [u8],
}

impl<'a> HexGlyphTable<'a> {
    /// Wraps the raw `.hex` bytes. Nothing is parsed until a lookup.
    pub const fn new(source: &'a [u8]) -> Self {
        Self { source }
    }

    /// Scans records starting at byte `start`, which must be a line start.
    pub(super) fn scan_from(
        &self,
        start: usize,
        codepoint: u32,
    ) -> Result<GlyphBitmap, LookupError> {
        for record in Records::from_offset(self.source, start) {
            let record = record?;
            if u32::from(record.codepoint) == codepoint {
                return record.bitmap();
            }
        }

        Err(LookupError::NotFound)
    }

    /// Decodes the record whose line starts at `offset`.
    pub(super) fn record_at(&self, offset: usize) -> Result<Record<'a>, LookupError> {
        Records::from_offset(self.source, offset)
            .next()
            .unwrap_or(Err(LookupError::NotFound))
    }

    pub(super) fn records(&self) -> Records<'a> {
        Records::from_offset(self.source, 0)
    }
}

impl GlyphSource for HexGlyphTable<'_> {
    fn lookup(&self, codepoint: u32) -> Result<GlyphBitmap, LookupError> {
        if codepoint > MAX_CODEPOINT {
            return Err(LookupError::CodepointOutOfRange);
        }

        self.scan_from(0, codepoint)
    }
}
