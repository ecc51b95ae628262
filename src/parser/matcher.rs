//! Keyword matching against an accumulating buffer.

use smol_str::SmolStr;

use super::keywords::KeywordTable;

/// How far a buffer matches the keyword set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchExtent {
    /// The buffer is not a prefix of any keyword
    NoMatch,
    /// The buffer is a strict prefix of some keyword
    PartialMatch,
    /// The buffer equals some keyword
    FullMatch,
}

/// Case-insensitive matcher over a fixed keyword set.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    keywords: Vec<SmolStr>,
}

impl KeywordMatcher {
    pub fn new(table: &KeywordTable) -> Self {
        Self {
            keywords: table.keywords().map(SmolStr::new).collect(),
        }
    }

    /// Classify `buffer` against the keyword set.
    pub fn matches(&self, buffer: &str) -> MatchExtent {
        let buffer = buffer.as_bytes();
        let mut extent = MatchExtent::NoMatch;

        for keyword in &self.keywords {
            let keyword = keyword.as_bytes();
            if buffer.len() > keyword.len() || !keyword[..buffer.len()].eq_ignore_ascii_case(buffer) {
                continue;
            }
            if buffer.len() == keyword.len() {
                return MatchExtent::FullMatch;
            }
            extent = MatchExtent::PartialMatch;
        }

        extent
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new(&KeywordTable::default())
    }
}
