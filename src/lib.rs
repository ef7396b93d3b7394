//! Regenerates per-glyph TeX metrics (height, depth, italic correction, skew,
//! width) from the font files and merges them into an existing metrics
//! dataset.

pub mod charset;
pub mod cli;
pub mod error;
pub mod font;
pub mod merger;
pub mod models;
pub mod utils;

pub use error::{Error, Result};
pub use merger::{merge_font, merge_fonts, FontReport};
pub use models::{Config, GlyphMetrics, MetricsDataset};
