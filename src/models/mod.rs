//! Run configuration and the metrics data model

pub mod config;
pub mod metrics;

pub use config::Config;
pub use metrics::{codepoint_key, FontMetrics, GlyphMetrics, MetricsDataset};
