use heapless::Vec;
use log::debug;

use super::{GlyphBitmap, GlyphSource, HexGlyphTable, MAX_CODEPOINT};
use crate::error::LookupError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct IndexEntry {
    codepoint: u16,
    offset: usize,
}

/// Codepoint -> line offset map built by one pass over a table.
///
/// Holds at most `N` entries. Indexing stops at the first malformed header or
/// when full; the rest of the table stays unindexed and is scanned on a miss,
/// so lookups report the same results a plain scan would.
#[derive(Clone, Debug)]
pub struct GlyphIndex<const N: usize> {
    entries: Vec<IndexEntry, N>,
    unindexed_from: Option<usize>,
}

impl<const N: usize> GlyphIndex<N> {
    /// Indexes `table` in one pass.
    pub fn build(table: &HexGlyphTable<'_>) -> Self {
        let mut entries: Vec<IndexEntry, N> = Vec::new();
        let mut unindexed_from = None;

        for record in table.records() {
            match record {
                Ok(record) => {
                    let entry = IndexEntry {
                        codepoint: record.codepoint,
                        offset: record.offset,
                    };
                    if entries.push(entry).is_err() {
                        unindexed_from = Some(record.offset);
                        break;
                    }
                }
                Err(LookupError::MalformedRecord { offset }) => {
                    unindexed_from = Some(offset);
                    break;
                }
                Err(_) => break,
            }
        }

        // Duplicates sort by offset, so the first record still wins.
        entries.sort_unstable_by_key(|entry| (entry.codepoint, entry.offset));

        debug!(
            "font-index: built entries={} capacity={} unindexed_from={:?}",
            entries.len(),
            N,
            unindexed_from
        );

        Self {
            entries,
            unindexed_from,
        }
    }

    /// Number of indexed records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no record was indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every record of the table made it into the index.
    pub fn is_complete(&self) -> bool {
        self.unindexed_from.is_none()
    }

    fn offset_of(&self, codepoint: u32) -> Option<usize> {
        let start = self
            .entries
            .partition_point(|entry| u32::from(entry.codepoint) < codepoint);
        self.entries
            .get(start)
            .filter(|entry| u32::from(entry.codepoint) == codepoint)
            .map(|entry| entry.offset)
    }
}

/// A [`HexGlyphTable`] paired with a [`GlyphIndex`].
#[derive(Clone, Debug)]
pub struct IndexedGlyphTable<'a, const N: usize> {
    table: HexGlyphTable<'a>,
    index: GlyphIndex<N>,
}

impl<'a, const N: usize> IndexedGlyphTable<'a, N> {
    /// Builds the index for `table`.
    pub fn new(table: HexGlyphTable<'a>) -> Self {
        let index = GlyphIndex::build(&table);
        Self { table, index }
    }

    /// The index built at construction.
    pub fn index(&self) -> &GlyphIndex<N> {
        &self.index
    }

    /// The underlying unindexed table.
    pub fn table(&self) -> HexGlyphTable<'a> {
        self.table
    }
}

impl<const N: usize> GlyphSource for IndexedGlyphTable<'_, N> {
    fn lookup(&self, codepoint: u32) -> Result<GlyphBitmap, LookupError> {
        if codepoint > MAX_CODEPOINT {
            return Err(LookupError::CodepointOutOfRange);
        }

        if let Some(offset) = self.index.offset_of(codepoint) {
            return self.table.record_at(offset)?.bitmap();
        }

        match self.index.unindexed_from {
            Some(offset) => self.table.scan_from(offset, codepoint),
            None => Err(LookupError::NotFound),
        }
    }
}
