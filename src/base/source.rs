//! Source identifiers.

use std::fmt;

use indexmap::IndexSet;
use smol_str::SmolStr;

/// Identifier of one source (script) in a run.
///
/// Ids are handed out in source-list order, so ordering by `SourceId`
/// reproduces the order in which sources were given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct SourceId(pub u32);

impl SourceId {
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Get the index into the source list
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "source#{}", self.0)
    }
}

/// Registry of source paths, deduplicated, in registration order.
#[derive(Debug, Default, Clone)]
pub struct SourceMap {
    paths: IndexSet<SmolStr>,
}

impl SourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a path, returning its id. Registering the same path twice
    /// returns the id handed out the first time.
    pub fn insert(&mut self, path: &str) -> SourceId {
        let (index, _) = self.paths.insert_full(SmolStr::new(path));
        SourceId::new(index)
    }

    pub fn get(&self, path: &str) -> Option<SourceId> {
        self.paths.get_index_of(path).map(SourceId::new)
    }

    pub fn path(&self, id: SourceId) -> Option<&str> {
        self.paths.get_index(id.index()).map(SmolStr::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SourceId, &str)> {
        self.paths
            .iter()
            .enumerate()
            .map(|(i, p)| (SourceId::new(i), p.as_str()))
    }
}
