//! Foundation types for the markup toolchain.
//!
//! This module provides fundamental types used throughout the pipeline:
//! - [`SourceId`], [`SourceMap`] - Source identifiers in source-list order
//! - [`Location`] - Where an annotation came from (source, line, rank)
//! - [`Comment`] - One single-line comment handed over by a scanner
//!
//! This module has NO dependencies on other crate modules.

mod comment;
mod position;
mod source;

pub use comment::{Comment, sort_comments};
pub use position::Location;
pub use source::{SourceId, SourceMap};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
