//! Comment records handed over by a comment-locating scanner.

use super::{Location, SourceId};

/// One single-line comment found in a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub source: Option<SourceId>,
    /// 1-based line number within the source
    pub line: u32,
    /// 1-based rank of the comment within its line
    pub rank: u32,
    pub text: String,
}

impl Comment {
    pub fn new(source: Option<SourceId>, line: u32, rank: u32, text: impl Into<String>) -> Self {
        Self {
            source,
            line,
            rank,
            text: text.into(),
        }
    }

    /// Comment on its own line, without a source id
    pub fn line(line: u32, text: impl Into<String>) -> Self {
        Self::new(None, line, 1, text)
    }

    pub fn location(&self) -> Location {
        Location::line(self.source, self.line).with_comment(self.rank)
    }

    fn sort_key(&self) -> (Option<SourceId>, u32, u32) {
        (self.source, self.line, self.rank)
    }
}

/// Order comments by source, then line, then rank in line.
///
/// The sort is stable, so comments sharing a key keep their relative order.
pub fn sort_comments(comments: &mut [Comment]) {
    comments.sort_by_key(Comment::sort_key);
}
