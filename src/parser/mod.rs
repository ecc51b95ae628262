//! Markup lexing: keyword table, keyword matcher, segment tokenizer and the
//! argument lexer.
//!
//! ## Architecture
//!
//! ```text
//! Comment text
//!     ↓
//! SegmentTokenizer (char-by-char, KeywordMatcher) → Segments
//!     ↓
//! ArgumentLexer (logos) → name + description tokens
//!     ↓
//! AnnotationBuilder → typed Annotations
//! ```

pub mod keywords;
mod lexer;
mod matcher;
mod segment;

pub use keywords::{Direction, KeywordTable, Tag};
pub use lexer::{Argument, ArgumentKind, ArgumentLexer, arguments};
pub use matcher::{KeywordMatcher, MatchExtent};
pub use segment::{Segment, SegmentTokenizer};
