//! Position tracking for annotations
//!
//! Stores where a markup unit was found so that errors can be reported
//! against the user's script.

use std::fmt;

use super::SourceId;

/// A location in the comment stream (1-indexed line and ranks)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct Location {
    pub source: Option<SourceId>,
    pub line: u32,
    /// Rank of the comment within its line
    pub comment: u32,
    /// Position of the markup unit within its comment
    pub rank: u32,
}

impl Location {
    /// Location of a markup unit in the first comment of `line`
    pub fn new(source: Option<SourceId>, line: u32, rank: u32) -> Self {
        Self {
            source,
            line,
            comment: 1,
            rank,
        }
    }

    /// The same position in another comment of the line
    pub fn with_comment(self, comment: u32) -> Self {
        Self { comment, ..self }
    }

    /// Location of a whole comment line, before any rank is known
    pub fn line(source: Option<SourceId>, line: u32) -> Self {
        Self {
            source,
            line,
            comment: 0,
            rank: 0,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source {
            Some(source) => write!(f, "{}:{}", source, self.line),
            None => write!(f, "line {}", self.line),
        }
    }
}
