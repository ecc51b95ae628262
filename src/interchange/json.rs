//! JSON export of a run.
//!
//! ```json
//! {
//!   "annotations": [ { "id": 1, "tag": "Begin", "name": "main", ... } ],
//!   "model": { "programs": [...], "ports": [...], "channels": [...], ... }
//! }
//! ```

use serde::Serialize;

use super::{ExportFormat, InterchangeError};
use crate::annotations::Annotation;
use crate::model::Model;
use crate::pipeline::Extraction;

#[derive(Serialize)]
struct Document<'a> {
    annotations: &'a [Annotation],
    model: &'a Model,
}

/// JSON export format.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json {
    /// Indent nested values
    pub pretty: bool,
}

impl Json {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl ExportFormat for Json {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn write(&self, extraction: &Extraction) -> Result<Vec<u8>, InterchangeError> {
        let document = Document {
            annotations: extraction.annotations().all(),
            model: extraction.model(),
        };
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(&document)?
        } else {
            serde_json::to_vec(&document)?
        };
        Ok(bytes)
    }
}
