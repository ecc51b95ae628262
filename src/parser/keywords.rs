//! The keyword table: recognized markup keywords and the tags they map to.

use std::fmt;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// The kind of a markup unit, one per recognized keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    Begin,
    End,
    In,
    Out,
    Param,
    Return,
    As,
    Uri,
    File,
    Call,
    Create,
}

/// Data-flow direction of a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum Direction {
    Input,
    Output,
}

impl Tag {
    pub const ALL: [Tag; 11] = [
        Tag::Begin,
        Tag::End,
        Tag::In,
        Tag::Out,
        Tag::Param,
        Tag::Return,
        Tag::As,
        Tag::Uri,
        Tag::File,
        Tag::Call,
        Tag::Create,
    ];

    /// Canonical keyword text, e.g. `@begin`
    pub fn keyword(self) -> &'static str {
        match self {
            Tag::Begin => "@begin",
            Tag::End => "@end",
            Tag::In => "@in",
            Tag::Out => "@out",
            Tag::Param => "@param",
            Tag::Return => "@return",
            Tag::As => "@as",
            Tag::Uri => "@uri",
            Tag::File => "@file",
            Tag::Call => "@call",
            Tag::Create => "@create",
        }
    }

    /// Upper-case tag name used in listings, e.g. `BEGIN`
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Begin => "BEGIN",
            Tag::End => "END",
            Tag::In => "IN",
            Tag::Out => "OUT",
            Tag::Param => "PARAM",
            Tag::Return => "RETURN",
            Tag::As => "AS",
            Tag::Uri => "URI",
            Tag::File => "FILE",
            Tag::Call => "CALL",
            Tag::Create => "CREATE",
        }
    }

    /// Qualifiers modify the nearest preceding primary annotation.
    pub fn is_qualifier(self) -> bool {
        matches!(self, Tag::As | Tag::Uri | Tag::File)
    }

    pub fn is_primary(self) -> bool {
        !self.is_qualifier()
    }

    pub fn opens_scope(self) -> bool {
        matches!(self, Tag::Begin | Tag::Create)
    }

    /// Direction of the port a tag declares, if it declares one
    pub fn direction(self) -> Option<Direction> {
        match self {
            Tag::In | Tag::Param => Some(Direction::Input),
            Tag::Out | Tag::Return => Some(Direction::Output),
            _ => None,
        }
    }

    pub fn is_port(self) -> bool {
        self.direction().is_some()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Input => "input",
            Direction::Output => "output",
        })
    }
}

/// Mapping from keyword text to tag.
///
/// Lookups are case-insensitive; keys are stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    tags: FxHashMap<SmolStr, Tag>,
    /// Keywords in registration order, for deterministic iteration
    order: Vec<SmolStr>,
}

impl KeywordTable {
    /// An empty table. Most callers want [`KeywordTable::default`].
    pub fn empty() -> Self {
        Self {
            tags: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    /// Register an additional spelling for a tag, e.g. `@input` for `In`.
    pub fn with_keyword(mut self, keyword: &str, tag: Tag) -> Self {
        self.insert(keyword, tag);
        self
    }

    pub fn insert(&mut self, keyword: &str, tag: Tag) {
        let key = SmolStr::new(keyword.to_ascii_lowercase());
        if self.tags.insert(key.clone(), tag).is_none() {
            self.order.push(key);
        }
    }

    /// Tag for a keyword token, ignoring case
    pub fn tag(&self, token: &str) -> Option<Tag> {
        if token.bytes().any(|b| b.is_ascii_uppercase()) {
            self.tags.get(token.to_ascii_lowercase().as_str()).copied()
        } else {
            self.tags.get(token).copied()
        }
    }

    /// Lower-cased keywords in registration order
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(SmolStr::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for tag in Tag::ALL {
            table.insert(tag.keyword(), tag);
        }
        table
    }
}
