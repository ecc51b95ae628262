//! Interchange formats for a run's results.
//!
//! Exports the annotation list and the model so that external tools (graph
//! renderers, query engines) can consume them, and loads pipeline
//! configuration written as JSON.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌──────────────┐
//! │  Extraction  │ ──▶ │ ExportFormat     │ ──▶ │  JSON bytes  │
//! │  (run result)│     │  - write(&Extr.) │     │              │
//! └──────────────┘     └──────────────────┘     └──────────────┘
//! ```

mod error;
mod json;

pub use error::InterchangeError;
pub use json::Json;

use crate::config::PipelineConfig;
use crate::pipeline::Extraction;

/// Trait for export formats.
pub trait ExportFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension(s) for this format.
    fn extensions(&self) -> &'static [&'static str];

    /// MIME type for this format.
    fn mime_type(&self) -> &'static str;

    /// Serialize a run's annotations and model.
    fn write(&self, extraction: &Extraction) -> Result<Vec<u8>, InterchangeError>;
}

/// Detect format from file extension.
pub fn detect_format(path: &std::path::Path) -> Option<Box<dyn ExportFormat>> {
    let ext = path.extension()?.to_str()?;
    match ext.to_lowercase().as_str() {
        "json" => Some(Box::new(Json::pretty())),
        _ => None,
    }
}

/// Write a run to `path`, choosing the format from its extension.
pub fn export_to_path(
    extraction: &Extraction,
    path: &std::path::Path,
) -> Result<(), InterchangeError> {
    let format = detect_format(path).ok_or_else(|| {
        InterchangeError::unsupported(format!("no export format for {}", path.display()))
    })?;
    std::fs::write(path, format.write(extraction)?)?;
    Ok(())
}

/// Parse pipeline configuration from JSON. Missing fields take defaults.
pub fn config_from_json(input: &str) -> Result<PipelineConfig, InterchangeError> {
    Ok(serde_json::from_str(input)?)
}
