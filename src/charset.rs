//! Characters whose metrics are taken from the font files
//!
//! Italic correction and skew cannot be read off a glyph outline. A character
//! may therefore name a base character from the same font whose italic, skew
//! and width are copied over; height and depth are always measured.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// U+0020 SPACE
pub const SPACE: u32 = 0x20;
/// U+00A0 NO-BREAK SPACE
pub const NO_BREAK_SPACE: u32 = 0xa0;

/// One curated character of a font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuratedChar {
    pub codepoint: u32,
    /// Donor of italic, skew and width
    pub base: Option<u32>,
}

impl CuratedChar {
    const fn plain(codepoint: u32) -> Self {
        Self { codepoint, base: None }
    }

    const fn based_on(codepoint: u32, base: u32) -> Self {
        Self {
            codepoint,
            base: Some(base),
        }
    }
}

const AMS_REGULAR: &[CuratedChar] = &[
    CuratedChar::plain(0x21e2), // \dashrightarrow
    CuratedChar::plain(0x21e0), // \dashleftarrow
];

const MAIN_REGULAR: &[CuratedChar] = &[
    CuratedChar::plain(0x2245), // \cong
    CuratedChar::plain(0x2026), // \ldots
    CuratedChar::plain(0x22ef), // \cdots
    CuratedChar::plain(0x22f1), // \ddots
    CuratedChar::plain(0x22ee), // \vdots
    CuratedChar::plain(0x22a8), // \models
    CuratedChar::plain(0x22c8), // \bowtie
    CuratedChar::plain(0x2250), // \doteq
    CuratedChar::plain(0x23b0), // \lmoustache
    CuratedChar::plain(0x23b1), // \rmoustache
    CuratedChar::plain(0x27ee), // \lgroup
    CuratedChar::plain(0x27ef), // \rgroup
    CuratedChar::plain(0x27f5), // \longleftarrow
    CuratedChar::plain(0x27f8), // \Longleftarrow
    CuratedChar::plain(0x27f6), // \longrightarrow
    CuratedChar::plain(0x27f9), // \Longrightarrow
    CuratedChar::plain(0x27f7), // \longleftrightarrow
    CuratedChar::plain(0x27fa), // \Longleftrightarrow
    CuratedChar::plain(0x21a6), // \mapsto
    CuratedChar::plain(0x27fc), // \longmapsto
    CuratedChar::plain(0x21a9), // \hookleftarrow
    CuratedChar::plain(0x21aa), // \hookrightarrow
    CuratedChar::plain(0x21cc), // \rightleftharpoons
];

const MAIN_BOLD: &[CuratedChar] = &[
    CuratedChar::plain(0x2245), // \cong
];

// \iint and \iiint, based on \int
const SIZE_INTEGRALS: &[CuratedChar] = &[
    CuratedChar::based_on(0x222c, 0x222b),
    CuratedChar::based_on(0x222d, 0x222b),
];

lazy_static! {
    static ref CURATED: HashMap<&'static str, &'static [CuratedChar]> = {
        let mut map = HashMap::new();
        map.insert("AMS-Regular", AMS_REGULAR);
        map.insert("Main-Regular", MAIN_REGULAR);
        map.insert("Main-Bold", MAIN_BOLD);
        map.insert("Size1-Regular", SIZE_INTEGRALS);
        map.insert("Size2-Regular", SIZE_INTEGRALS);
        map
    };
}

/// Characters to extract for `font`, in processing order.
///
/// Space and no-break space are appended for every font, curated or not.
pub fn chars_for_font(font: &str) -> Vec<CuratedChar> {
    let mut chars: Vec<CuratedChar> = CURATED.get(font).map(|c| c.to_vec()).unwrap_or_default();
    for whitespace in [SPACE, NO_BREAK_SPACE] {
        if !chars.iter().any(|c| c.codepoint == whitespace) {
            chars.push(CuratedChar::plain(whitespace));
        }
    }
    chars
}
