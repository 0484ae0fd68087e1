// File: crates/chart-core/src/error.rs
// Summary: Library error type for configuration, export and treatment ingest.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: i32, height: i32 },

    #[error("nice bounds inverted: lower {lower} >= upper {upper}")]
    InvertedBounds { lower: f64, upper: f64 },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to encode png: {0}")]
    Encode(#[from] image::ImageError),

    #[error("cannot export an empty chart image")]
    EmptyImage,

    #[error("malformed treatment json: {0}")]
    TreatmentJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
