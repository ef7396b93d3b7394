use ttf_parser::OutlineBuilder;

use super::{GlyphId, GlyphSource};
use crate::error::{Error, Result};
use crate::models::GlyphMetrics;

/// Counts contours while an outline is walked
#[derive(Debug, Default)]
pub struct ContourCounter {
    pub contours: usize,
}

impl OutlineBuilder for ContourCounter {
    fn move_to(&mut self, _x: f32, _y: f32) {
        self.contours += 1;
    }

    fn line_to(&mut self, _x: f32, _y: f32) {}

    fn quad_to(&mut self, _x1: f32, _y1: f32, _x: f32, _y: f32) {}

    fn curve_to(&mut self, _x1: f32, _y1: f32, _x2: f32, _y2: f32, _x: f32, _y: f32) {}

    fn close(&mut self) {}
}

/// Measure height, depth and width of `glyph` in em units.
///
/// Italic and skew are left at zero. Glyphs without contours have zero
/// height and depth.
pub fn extract_metrics<S: GlyphSource + ?Sized>(
    source: &S,
    font: &str,
    glyph: GlyphId,
) -> Result<GlyphMetrics> {
    let units_per_em = f64::from(source.units_per_em());
    if units_per_em <= 0.0 {
        return Err(Error::Font(format!("{} has zero units per em", font)));
    }

    let mut metrics = GlyphMetrics::default();
    if let Some(outline) = source.outline(glyph).filter(|o| o.contours > 0) {
        metrics.height = f64::from(outline.y_max.max(0)) / units_per_em;
        metrics.depth = f64::from((-i32::from(outline.y_min)).max(0)) / units_per_em;
    }

    let advance = source.advance(glyph).ok_or_else(|| {
        Error::Font(format!(
            "{} has no advance width for {}",
            font,
            source.glyph_label(glyph)
        ))
    })?;
    metrics.width = f64::from(advance) / units_per_em;

    Ok(metrics)
}
