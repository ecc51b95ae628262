//! A minimal `#` comment scanner for test scripts.
//!
//! Takes everything after the first `#` on a line as that line's comment.
//! Good enough for the fixtures, which never put `#` inside strings.

use ywmarkup::{Comment, SourceId};

/// Comments of a `#`-commented script, one per line at most.
pub fn scan_hash_comments(source: Option<SourceId>, text: &str) -> Vec<Comment> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let start = line.find('#')?;
            Some(Comment::new(
                source,
                i as u32 + 1,
                1,
                line[start + 1..].trim(),
            ))
        })
        .collect()
}
