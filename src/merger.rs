//! Merging freshly measured glyph metrics into a metrics dataset

use log::{debug, warn};

use crate::charset::{chars_for_font, CuratedChar};
use crate::error::{Error, Result};
use crate::font::{
    check_font_name, extract_metrics, load_font_file, resolve_glyph, FaceSource, GlyphSource,
};
use crate::models::{codepoint_key, Config, FontMetrics, GlyphMetrics, MetricsDataset};

/// Outcome of merging one font
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FontReport {
    /// Codepoints written to the dataset
    pub written: usize,
    /// Codepoints skipped after a warning
    pub skipped: usize,
}

/// Copy italic, skew and width of `base` onto `metrics`
pub fn apply_base(
    metrics: &mut GlyphMetrics,
    existing: &FontMetrics,
    font: &str,
    codepoint: u32,
    base: u32,
) -> Result<()> {
    let donor = existing
        .get(&codepoint_key(base))
        .ok_or_else(|| Error::MissingBaseMetrics {
            font: font.to_string(),
            codepoint,
            base,
        })?;
    let donor = GlyphMetrics::from_record(donor)?;
    metrics.italic = donor.italic;
    metrics.skew = donor.skew;
    metrics.width = donor.width;
    Ok(())
}

fn measure<S: GlyphSource + ?Sized>(
    source: &S,
    font: &str,
    existing: &FontMetrics,
    ch: CuratedChar,
) -> Result<GlyphMetrics> {
    let glyph = resolve_glyph(source, font, ch.codepoint)?;
    let mut metrics = extract_metrics(source, font, glyph)?;
    if let Some(base) = ch.base {
        apply_base(&mut metrics, existing, font, ch.codepoint, base)?;
    }
    Ok(metrics)
}

/// Measure `chars` in `source` and write them under `font` in `dataset`.
///
/// Unresolvable codepoints are logged and skipped; any other failure aborts.
pub fn merge_font<S: GlyphSource + ?Sized>(
    dataset: &mut MetricsDataset,
    font: &str,
    source: &S,
    chars: &[CuratedChar],
) -> Result<FontReport> {
    let entries = dataset.entry(font.to_string()).or_default();
    let mut report = FontReport::default();

    for &ch in chars {
        match measure(source, font, entries, ch) {
            Ok(metrics) => {
                entries.insert(codepoint_key(ch.codepoint), metrics.to_record()?);
                report.written += 1;
            }
            Err(e) if e.is_recoverable() => {
                warn!("{}", e);
                report.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

/// Load every font named in `dataset` and merge its curated metrics.
///
/// A font that cannot be loaded aborts the whole run.
pub fn merge_fonts(dataset: &mut MetricsDataset, config: &Config) -> Result<()> {
    let fonts: Vec<String> = dataset.keys().cloned().collect();

    for font in fonts {
        check_font_name(&font)?;
        let path = config.font_path(&font);
        debug!("Processing {} from {}", font, path.display());

        let data = load_font_file(&path)?;
        let source = FaceSource::parse(&data, &font)?;
        debug!("{} has {} units per em", font, source.units_per_em());

        let report = merge_font(dataset, &font, &source, &chars_for_font(&font))?;
        debug!(
            "{}: {} codepoints written, {} skipped",
            font, report.written, report.skipped
        );
    }

    Ok(())
}
