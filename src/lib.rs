//! # yw-markup
//!
//! Recovers a workflow model (nested programs, their ports, and the
//! data-flow channels between them) from structured markup embedded in
//! single-line comments of arbitrary scripts.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! pipeline     → One extract-then-model run, skeleton and listings
//!   ↓
//! model        → Program tree, ports, channel inference
//!   ↓
//! annotations  → Typed annotations, qualifier resolution
//!   ↓
//! parser       → Keyword table/matcher, segment tokenizer, logos lexer
//!   ↓
//! errors       → MarkupError, ErrorCode
//!   ↓
//! base         → Primitives (SourceId, Location, Comment, TextRange)
//! ```
//!
//! ## Example
//!
//! ```
//! use ywmarkup::{Comment, PipelineConfig, run};
//!
//! let comments = ["@begin step", "@in x", "@out y", "@end step"]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, text)| Comment::line(i as u32 + 1, *text));
//! let extraction = run(comments, &PipelineConfig::default()).unwrap();
//! let root = extraction.model().root().unwrap();
//! assert_eq!(root.name.as_str(), "step");
//! ```

// ============================================================================
// MODULES (dependency order: base → errors → parser → annotations → model)
// ============================================================================

/// Foundation types: SourceId, Location, Comment, TextRange
pub mod base;

/// Errors: MarkupError and categorized error codes
pub mod errors;

/// Lexing: keywords, matcher, segment tokenizer, argument lexer
pub mod parser;

/// Annotations and the annotation stream
pub mod annotations;

/// Workflow model: programs, ports, channels, data
pub mod model;

/// Extractor and modeler settings
pub mod config;

/// Comment listing and markup skeleton rendering
pub mod skeleton;

/// Extract-then-model runs
pub mod pipeline;

/// JSON export and configuration loading
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export commonly needed items
pub use annotations::{Annotation, AnnotationId, AnnotationStream, extract_annotations};
pub use base::{Comment, Location, SourceId, SourceMap};
pub use config::{ExtractorConfig, ModelerConfig, PipelineConfig};
pub use errors::{ErrorCode, MarkupError, Result};
pub use model::{Model, Program, build_model};
pub use parser::{Direction, Tag};
pub use pipeline::{Extraction, run};
