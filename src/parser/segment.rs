//! Splitting comment text into markup segments.
//!
//! A segment starts at a keyword occurrence and runs up to the next keyword
//! occurrence or the end of the comment. Prose before the first keyword is
//! not part of any segment.

use text_size::{TextRange, TextSize};

use super::matcher::{KeywordMatcher, MatchExtent};

/// One markup unit of a comment, trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    /// Byte range of `text` within the comment
    pub range: TextRange,
}

/// Splits comment text at keyword boundaries.
#[derive(Debug, Clone, Copy)]
pub struct SegmentTokenizer<'m> {
    matcher: &'m KeywordMatcher,
}

impl<'m> SegmentTokenizer<'m> {
    pub fn new(matcher: &'m KeywordMatcher) -> Self {
        Self { matcher }
    }

    /// Scan `text` one character at a time, growing a buffer and classifying
    /// it after each character.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();
        // Start of the buffer being matched
        let mut buffer_start = 0;
        // Start of the open segment, if a keyword has been seen
        let mut open: Option<usize> = None;

        for (i, c) in text.char_indices() {
            let next = i + c.len_utf8();
            match self.matcher.matches(&text[buffer_start..next]) {
                MatchExtent::NoMatch => buffer_start = next,
                MatchExtent::FullMatch => {
                    if let Some(start) = open {
                        push_trimmed(&mut segments, text, start, buffer_start);
                    }
                    open = Some(buffer_start);
                    buffer_start = next;
                }
                MatchExtent::PartialMatch => {}
            }
        }

        // A pending partial match belongs to the open segment
        if let Some(start) = open {
            push_trimmed(&mut segments, text, start, text.len());
        }

        tracing::trace!(count = segments.len(), "tokenized comment");
        segments
    }
}

fn push_trimmed<'a>(segments: &mut Vec<Segment<'a>>, text: &'a str, start: usize, end: usize) {
    let raw = &text[start..end];
    let leading = raw.len() - raw.trim_start().len();
    let trimmed = raw.trim();
    let offset = start + leading;
    segments.push(Segment {
        text: trimmed,
        range: TextRange::at(TextSize::new(offset as u32), TextSize::new(trimmed.len() as u32)),
    });
}
