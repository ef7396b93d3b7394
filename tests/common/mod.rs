//! A tiny TrueType font assembled in memory.
//!
//! Glyphs: 0 `.notdef` (empty), 1 space (empty, advance 250), 2 a square
//! from (50, -200) to (450, 700) with advance 500. Units per em is 1000.
//!
//! cmap has a format 4 subtable shared by the Unicode (0, 3) and Windows
//! (3, 1) records, mapping U+0020 and U+00A0 to glyph 1 and U+2245 to
//! glyph 2, plus a Macintosh (1, 0) format 6 subtable that maps 0x20 to the
//! square and must not be consulted.

#![allow(dead_code)]

pub const UNITS_PER_EM: u16 = 1000;
pub const SPACE_GID: u16 = 1;
pub const SQUARE_GID: u16 = 2;
pub const SQUARE_CODEPOINT: u32 = 0x2245;

fn u16be(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn i16be(out: &mut Vec<u8>, v: i16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn u32be(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn head() -> Vec<u8> {
    let mut t = Vec::new();
    u32be(&mut t, 0x0001_0000); // version
    u32be(&mut t, 0x0001_0000); // fontRevision
    u32be(&mut t, 0); // checksumAdjustment
    u32be(&mut t, 0x5F0F_3CF5); // magicNumber
    u16be(&mut t, 0); // flags
    u16be(&mut t, UNITS_PER_EM);
    t.extend_from_slice(&[0; 16]); // created, modified
    i16be(&mut t, 50);
    i16be(&mut t, -200);
    i16be(&mut t, 450);
    i16be(&mut t, 700);
    u16be(&mut t, 0); // macStyle
    u16be(&mut t, 8); // lowestRecPPEM
    i16be(&mut t, 2); // fontDirectionHint
    i16be(&mut t, 1); // indexToLocFormat: long
    i16be(&mut t, 0); // glyphDataFormat
    assert_eq!(t.len(), 54);
    t
}

fn hhea(num_h_metrics: u16) -> Vec<u8> {
    let mut t = Vec::new();
    u32be(&mut t, 0x0001_0000);
    i16be(&mut t, 800); // ascender
    i16be(&mut t, -200); // descender
    i16be(&mut t, 0); // lineGap
    u16be(&mut t, 500); // advanceWidthMax
    i16be(&mut t, 0); // minLeftSideBearing
    i16be(&mut t, 0); // minRightSideBearing
    i16be(&mut t, 450); // xMaxExtent
    i16be(&mut t, 1); // caretSlopeRise
    i16be(&mut t, 0); // caretSlopeRun
    i16be(&mut t, 0); // caretOffset
    t.extend_from_slice(&[0; 8]); // reserved
    i16be(&mut t, 0); // metricDataFormat
    u16be(&mut t, num_h_metrics);
    assert_eq!(t.len(), 36);
    t
}

fn maxp(num_glyphs: u16) -> Vec<u8> {
    let mut t = Vec::new();
    u32be(&mut t, 0x0000_5000);
    u16be(&mut t, num_glyphs);
    t
}

fn hmtx(metrics: &[(u16, i16)]) -> Vec<u8> {
    let mut t = Vec::new();
    for &(advance, lsb) in metrics {
        u16be(&mut t, advance);
        i16be(&mut t, lsb);
    }
    t
}

fn square_glyph() -> Vec<u8> {
    let mut g = Vec::new();
    i16be(&mut g, 1); // numberOfContours
    i16be(&mut g, 50);
    i16be(&mut g, -200);
    i16be(&mut g, 450);
    i16be(&mut g, 700);
    u16be(&mut g, 3); // endPtsOfContours
    u16be(&mut g, 0); // instructionLength
    g.extend_from_slice(&[0x01; 4]); // on-curve, 16-bit deltas
    for dx in [50i16, 400, 0, -400] {
        i16be(&mut g, dx);
    }
    for dy in [-200i16, 0, 900, 0] {
        i16be(&mut g, dy);
    }
    g
}

fn format4(mappings: &[(u16, u16)]) -> Vec<u8> {
    let mut segments: Vec<(u16, u16)> = mappings.to_vec();
    segments.push((0xFFFF, 0));
    let seg_count = segments.len() as u16;

    let mut t = Vec::new();
    u16be(&mut t, 4);
    u16be(&mut t, 16 + 8 * seg_count);
    u16be(&mut t, 0); // language
    u16be(&mut t, seg_count * 2);
    u16be(&mut t, 0); // searchRange
    u16be(&mut t, 0); // entrySelector
    u16be(&mut t, 0); // rangeShift
    for &(code, _) in &segments {
        u16be(&mut t, code);
    }
    u16be(&mut t, 0); // reservedPad
    for &(code, _) in &segments {
        u16be(&mut t, code);
    }
    for &(code, gid) in &segments {
        let delta = if code == 0xFFFF { 1 } else { gid.wrapping_sub(code) };
        u16be(&mut t, delta);
    }
    for _ in &segments {
        u16be(&mut t, 0); // idRangeOffset
    }
    t
}

fn format6(first_code: u16, glyphs: &[u16]) -> Vec<u8> {
    let mut t = Vec::new();
    u16be(&mut t, 6);
    u16be(&mut t, 10 + 2 * glyphs.len() as u16);
    u16be(&mut t, 0); // language
    u16be(&mut t, first_code);
    u16be(&mut t, glyphs.len() as u16);
    for &gid in glyphs {
        u16be(&mut t, gid);
    }
    t
}

fn cmap() -> Vec<u8> {
    let unicode = format4(&[(0x20, SPACE_GID), (0xA0, SPACE_GID), (0x2245, SQUARE_GID)]);
    let mac = format6(0x20, &[SQUARE_GID]);

    let header_len = 4 + 3 * 8;
    let unicode_offset = header_len as u32;
    let mac_offset = unicode_offset + unicode.len() as u32;

    let mut t = Vec::new();
    u16be(&mut t, 0); // version
    u16be(&mut t, 3);
    let records = [
        (0u16, 3u16, unicode_offset),
        (1, 0, mac_offset),
        (3, 1, unicode_offset),
    ];
    for (platform, encoding, offset) in records {
        u16be(&mut t, platform);
        u16be(&mut t, encoding);
        u32be(&mut t, offset);
    }
    t.extend_from_slice(&unicode);
    t.extend_from_slice(&mac);
    t
}

/// Bytes of the test font
pub fn build_font() -> Vec<u8> {
    let square = square_glyph();
    let glyf = square.clone();
    let mut loca = Vec::new();
    // .notdef and space are empty, the square fills the glyf table
    for offset in [0u32, 0, 0, square.len() as u32] {
        u32be(&mut loca, offset);
    }

    // Table records must be sorted by tag
    let tables: Vec<(&[u8; 4], Vec<u8>)> = vec![
        (b"cmap", cmap()),
        (b"glyf", glyf),
        (b"head", head()),
        (b"hhea", hhea(3)),
        (b"hmtx", hmtx(&[(500, 0), (250, 0), (500, 50)])),
        (b"loca", loca),
        (b"maxp", maxp(3)),
    ];

    let mut font = Vec::new();
    u32be(&mut font, 0x0001_0000);
    u16be(&mut font, tables.len() as u16);
    u16be(&mut font, 0); // searchRange
    u16be(&mut font, 0); // entrySelector
    u16be(&mut font, 0); // rangeShift

    let mut offset = 12 + 16 * tables.len();
    let mut body = Vec::new();
    for (tag, data) in &tables {
        font.extend_from_slice(*tag);
        u32be(&mut font, 0); // checksum
        u32be(&mut font, offset as u32);
        u32be(&mut font, data.len() as u32);

        body.extend_from_slice(data);
        while body.len() % 4 != 0 {
            body.push(0);
        }
        offset = 12 + 16 * tables.len() + body.len();
    }
    font.extend_from_slice(&body);
    font
}
