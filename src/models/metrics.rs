use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Metrics of one glyph, in fractions of the em.
///
/// Fields are declared in lexicographic order, matching the key order of a
/// stored record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GlyphMetrics {
    /// Extent below the baseline
    pub depth: f64,
    /// Extent above the baseline
    pub height: f64,
    /// Italic correction
    pub italic: f64,
    /// Skew used when placing accents
    pub skew: f64,
    /// Horizontal advance
    pub width: f64,
}

impl GlyphMetrics {
    /// Decode a stored record; unknown fields are ignored
    pub fn from_record(record: &Value) -> Result<Self> {
        Ok(GlyphMetrics::deserialize(record)?)
    }

    /// Encode as a record for the dataset
    pub fn to_record(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Records of every glyph of one font, keyed by decimal codepoint.
///
/// Records are kept as raw JSON so entries the run never writes come back
/// out exactly as they went in.
pub type FontMetrics = BTreeMap<String, Value>;

/// Metrics of every font, keyed by font name.
///
/// Both levels are ordered maps, and so are JSON objects, so serializing
/// yields lexicographically sorted keys at every level.
pub type MetricsDataset = BTreeMap<String, FontMetrics>;

/// Key under which a codepoint is stored in [`FontMetrics`]
pub fn codepoint_key(codepoint: u32) -> String {
    codepoint.to_string()
}

/// Parse a dataset from a JSON reader
pub fn read_dataset<R: std::io::Read>(reader: R) -> Result<MetricsDataset> {
    Ok(serde_json::from_reader(reader)?)
}

/// Serialize a dataset as compact JSON with sorted keys
pub fn dataset_to_string(dataset: &MetricsDataset) -> Result<String> {
    Ok(serde_json::to_string(dataset)?)
}
