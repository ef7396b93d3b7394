//! Font access: loading files, resolving codepoints and measuring glyphs

pub mod cmap;
pub mod extract;
pub mod loader;

pub use cmap::resolve_glyph;
pub use extract::{extract_metrics, ContourCounter};
pub use loader::{check_font_name, load_font_file, FaceSource};

pub use ttf_parser::GlyphId;

/// Outline facts the metric extractor needs about one glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphOutline {
    /// Number of closed contours
    pub contours: usize,
    /// Bottom of the bounding box, in font units
    pub y_min: i16,
    /// Top of the bounding box, in font units
    pub y_max: i16,
}

/// Read access to the parts of a font that metrics are derived from
pub trait GlyphSource {
    /// Design grid resolution from the `head` table
    fn units_per_em(&self) -> u16;

    /// Lookup result of every Unicode cmap subtable for `codepoint`
    fn cmap_lookups(&self, codepoint: u32) -> Vec<Option<GlyphId>>;

    /// Outline summary, `None` for glyphs without an outline
    fn outline(&self, glyph: GlyphId) -> Option<GlyphOutline>;

    /// Horizontal advance in font units
    fn advance(&self, glyph: GlyphId) -> Option<u16>;

    /// Human readable glyph identifier for diagnostics
    fn glyph_label(&self, glyph: GlyphId) -> String {
        format!("gid{}", glyph.0)
    }
}
