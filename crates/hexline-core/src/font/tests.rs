use super::*;

const FONT: &[u8] = b"\
0020:00000000000000000000000000000000
0041:0000000018242442427E424242420000
0061:0000000000003C42023E4242463A0000
00a2:00000000080808083E494848493E0808
AC00:000000007E10021002100410041E081010102010401000100010001000000000
0041:FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF
";

const A_BITMAP: [u8; 16] = [
    0x00, 0x00, 0x00, 0x00, 0x18, 0x24, 0x24, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x42, 0x42, 0x00, 0x00,
];

#[test]
fn lookup_returns_narrow_bitmap() {
    let table = HexGlyphTable::new(FONT);

    let glyph = table.lookup(0x0041).unwrap();
    assert_eq!(glyph.as_bytes(), &A_BITMAP);
    assert_eq!(glyph.width(), GlyphWidth::Narrow);
}

#[test]
fn lookup_returns_wide_bitmap() {
    let table = HexGlyphTable::new(FONT);

    let glyph = table.lookup(0xAC00).unwrap();
    assert_eq!(glyph.width(), GlyphWidth::Wide);
    assert_eq!(glyph.as_bytes().len(), 32);
    assert_eq!(glyph.row_bits(2), Some(0x7E10));
    assert_eq!(glyph.row_bits(6), Some(0x041E));
}

#[test]
fn lowercase_codepoints_match() {
    let table = HexGlyphTable::new(FONT);

    assert_eq!(table.lookup(0x00A2).unwrap().as_bytes()[4], 0x08);
}

#[test]
fn first_record_wins() {
    let table = HexGlyphTable::new(FONT);

    assert_ne!(table.lookup(0x0041).unwrap().as_bytes()[0], 0xFF);
}

#[test]
fn missing_codepoint_is_not_found() {
    let table = HexGlyphTable::new(FONT);

    assert_eq!(table.lookup(0x0042), Err(LookupError::NotFound));
    assert_eq!(HexGlyphTable::new(b"").lookup(0x41), Err(LookupError::NotFound));
}

#[test]
fn range_guard_fires_before_scanning() {
    // Would match 0xFFFE if scanned, and is malformed right after.
    let table = HexGlyphTable::new(b"FFFE:00000000000000000000000000000000\nbroken\n");

    assert_eq!(table.lookup(0xFFFE), Err(LookupError::CodepointOutOfRange));
    assert_eq!(table.lookup(0x1F600), Err(LookupError::CodepointOutOfRange));
    assert_eq!(table.lookup(0xFFFD), Err(LookupError::MalformedRecord { offset: 38 }));
}

#[test]
fn malformed_header_before_match_halts_scan() {
    let source = b"0020:00000000000000000000000000000000\n41:00\n\
        0041:0000000018242442427E424242420000\n";
    let table = HexGlyphTable::new(source);

    assert!(table.lookup(0x0020).is_ok());
    assert_eq!(table.lookup(0x0041), Err(LookupError::MalformedRecord { offset: 38 }));
}

#[test]
fn malformed_payload_is_reported_only_on_match() {
    let source = b"0041:0000\n0042:0000000018242442427E424242420000\n";
    let table = HexGlyphTable::new(source);

    assert!(table.lookup(0x0042).is_ok());
    assert_eq!(table.lookup(0x0041), Err(LookupError::MalformedRecord { offset: 0 }));
}

#[test]
fn crlf_and_missing_final_newline_are_tolerated() {
    let source = b"0020:00000000000000000000000000000000\r\n\r\n\
        0041:0000000018242442427E424242420000";
    let table = HexGlyphTable::new(source);

    assert_eq!(table.lookup(0x0041).unwrap().as_bytes(), &A_BITMAP);
}

#[test]
fn bitmap_constructor_enforces_length() {
    assert!(GlyphBitmap::from_bytes(&[0; 16]).is_some());
    assert!(GlyphBitmap::from_bytes(&[0; 32]).is_some());
    assert!(GlyphBitmap::from_bytes(&[0; 15]).is_none());
    assert!(GlyphBitmap::from_bytes(&[0; 24]).is_none());
    assert!(GlyphBitmap::from_bytes(&[]).is_none());
}

#[test]
fn bitmap_pixels_are_msb_first() {
    let glyph = GlyphBitmap::from_bytes(&A_BITMAP).unwrap();

    // Row 4 is 0x18 = 00011000.
    let set: Vec<usize> = (0..8).filter(|&x| glyph.is_set(x, 4)).collect();
    assert_eq!(set, vec![3, 4]);
    assert!(!glyph.is_set(8, 4));
    assert!(!glyph.is_set(3, 16));
}

#[test]
fn index_matches_linear_scan_for_every_codepoint() {
    let linear = HexGlyphTable::new(FONT);
    let indexed: IndexedGlyphTable<'_, 16> = IndexedGlyphTable::new(linear);

    assert!(indexed.index().is_complete());
    for codepoint in (0..=0xFFFFu32).chain([0x1_0000, 0x10_FFFF]) {
        assert_eq!(indexed.lookup(codepoint), linear.lookup(codepoint), "U+{codepoint:04X}");
    }
}

#[test]
fn full_index_falls_back_to_scanning_the_rest() {
    let linear = HexGlyphTable::new(FONT);
    let indexed: IndexedGlyphTable<'_, 2> = IndexedGlyphTable::new(linear);

    assert_eq!(indexed.index().len(), 2);
    assert!(!indexed.index().is_complete());
    for codepoint in [0x20, 0x41, 0x61, 0xA2, 0xAC00, 0x42] {
        assert_eq!(indexed.lookup(codepoint), linear.lookup(codepoint));
    }
}

#[test]
fn index_preserves_malformed_record_errors() {
    let source = b"0041:0000000018242442427E424242420000\nnope\n\
        0061:0000000000003C42023E4242463A0000\n";
    let linear = HexGlyphTable::new(source);
    let indexed: IndexedGlyphTable<'_, 8> = IndexedGlyphTable::new(linear);

    assert_eq!(indexed.index().len(), 1);
    assert!(indexed.lookup(0x41).is_ok());
    assert_eq!(indexed.lookup(0x61), linear.lookup(0x61));
    assert_eq!(indexed.lookup(0x61), Err(LookupError::MalformedRecord { offset: 38 }));
}
