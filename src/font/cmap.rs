use std::collections::BTreeSet;

use super::{GlyphId, GlyphSource};
use crate::error::{Error, Result};

/// Resolve `codepoint` to the single glyph all Unicode cmap subtables agree on.
///
/// Subtables that do not map the codepoint are ignored. Fails with
/// [`Error::UnresolvedCodepoint`] when no subtable maps it and with
/// [`Error::AmbiguousCodepoint`] when subtables name different glyphs.
pub fn resolve_glyph<S: GlyphSource + ?Sized>(
    source: &S,
    font: &str,
    codepoint: u32,
) -> Result<GlyphId> {
    let glyphs: BTreeSet<GlyphId> = source
        .cmap_lookups(codepoint)
        .into_iter()
        .flatten()
        .collect();

    let mut iter = glyphs.iter();
    match (iter.next(), iter.next()) {
        (None, _) => Err(Error::UnresolvedCodepoint {
            font: font.to_string(),
            codepoint,
        }),
        (Some(&glyph), None) => Ok(glyph),
        (Some(_), Some(_)) => {
            let mut labels: Vec<String> = glyphs.iter().map(|&g| source.glyph_label(g)).collect();
            labels.sort();
            Err(Error::AmbiguousCodepoint {
                font: font.to_string(),
                codepoint,
                glyphs: labels,
            })
        }
    }
}
