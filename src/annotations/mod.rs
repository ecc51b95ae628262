//! # Annotations
//!
//! Typed markup units parsed from comment segments, and the ordered stream
//! the model builder consumes.
//!
//! Qualifiers (`@as`, `@uri`, `@file`) refer to the primary annotation they
//! modify by id. Because a qualifier always attaches to the most recent
//! primary, the qualifiers of a primary are exactly the run of qualifiers
//! that directly follows it in the stream; [`AnnotationStream::qualified`]
//! resolves that run into a [`Qualified`] view.

mod builder;
mod grammar;

pub use builder::{AnnotationBuilder, extract_annotations};
pub use grammar::NameKind;

use std::fmt;

use smol_str::SmolStr;

use crate::base::{Location, SourceId};
use crate::parser::{Direction, Tag};

// ============================================================================
// IDS
// ============================================================================

/// Identifier of an annotation: 1-based, monotonic within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct AnnotationId(pub u32);

impl AnnotationId {
    /// Id of the annotation stored at `index` in the stream
    pub fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    /// Index of this annotation in the stream. Ids start at 1, so `0`
    /// has no index and panics here; use [`AnnotationId::checked_index`]
    /// for ids that did not come from a stream.
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    pub fn checked_index(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }
}

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ANNOTATION
// ============================================================================

/// One markup unit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct Annotation {
    pub id: AnnotationId,
    pub location: Location,
    pub tag: Tag,
    /// Keyword as written, e.g. `@BEGIN`
    pub keyword: SmolStr,
    /// Scope name, port name or literal, alias, or location value
    pub name: SmolStr,
    pub name_kind: NameKind,
    pub description: Option<String>,
    /// For qualifiers: the primary annotation this one modifies
    pub qualifies: Option<AnnotationId>,
}

impl Annotation {
    pub fn source(&self) -> Option<SourceId> {
        self.location.source
    }

    pub fn line(&self) -> u32 {
        self.location.line
    }

    pub fn rank(&self) -> u32 {
        self.location.rank
    }

    pub fn is_qualifier(&self) -> bool {
        self.tag.is_qualifier()
    }

    pub fn is_primary(&self) -> bool {
        self.tag.is_primary()
    }
}

// ============================================================================
// STREAM
// ============================================================================

/// The full ordered annotation list of a run, with its primaries indexed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct AnnotationStream {
    annotations: Vec<Annotation>,
    primaries: Vec<AnnotationId>,
}

impl AnnotationStream {
    /// Build a stream from annotations in id order.
    ///
    /// Ids must be consecutive from 1; this holds for anything produced by
    /// [`AnnotationBuilder`].
    pub fn new(annotations: Vec<Annotation>) -> Self {
        debug_assert!(
            annotations
                .iter()
                .enumerate()
                .all(|(i, a)| a.id == AnnotationId::from_index(i))
        );
        let primaries = annotations
            .iter()
            .filter(|a| a.is_primary())
            .map(|a| a.id)
            .collect();
        Self {
            annotations,
            primaries,
        }
    }

    /// All annotations, qualifiers included, in stream order
    pub fn all(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Ids of the primary annotations, in stream order
    pub fn primary_ids(&self) -> &[AnnotationId] {
        &self.primaries
    }

    pub fn primaries(&self) -> impl Iterator<Item = &Annotation> {
        self.primaries.iter().map(|id| &self.annotations[id.index()])
    }

    pub fn get(&self, id: AnnotationId) -> Option<&Annotation> {
        self.annotations.get(id.checked_index()?)
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// The qualifiers attached to `id`, in stream order
    pub fn qualifiers_of(&self, id: AnnotationId) -> &[Annotation] {
        let Some(start) = id.checked_index().map(|index| index + 1) else {
            return &[];
        };
        if start > self.annotations.len() {
            return &[];
        }
        let tail = &self.annotations[start..];
        let len = tail
            .iter()
            .take_while(|a| a.qualifies == Some(id))
            .count();
        &tail[..len]
    }

    /// A primary annotation together with its qualifiers
    pub fn qualified(&self, id: AnnotationId) -> Option<Qualified<'_>> {
        let primary = self.get(id)?;
        Some(Qualified {
            primary,
            qualifiers: self.qualifiers_of(id),
        })
    }

    /// Every primary with its qualifiers, in stream order
    pub fn iter_qualified(&self) -> impl Iterator<Item = Qualified<'_>> {
        self.primaries.iter().filter_map(|id| self.qualified(*id))
    }
}

// ============================================================================
// QUALIFIED VIEW
// ============================================================================

/// A primary annotation viewed through its qualifiers.
#[derive(Debug, Clone, Copy)]
pub struct Qualified<'s> {
    pub primary: &'s Annotation,
    pub qualifiers: &'s [Annotation],
}

impl<'s> Qualified<'s> {
    pub fn tag(&self) -> Tag {
        self.primary.tag
    }

    pub fn name(&self) -> &'s str {
        &self.primary.name
    }

    pub fn direction(&self) -> Option<Direction> {
        self.primary.tag.direction()
    }

    /// The alias of the last `@as`, if any
    pub fn alias(&self) -> Option<&'s str> {
        self.qualifiers
            .iter()
            .rev()
            .find(|q| q.tag == Tag::As)
            .map(|q| q.name.as_str())
    }

    /// Externally visible name: the alias if rebound, else the name
    pub fn binding(&self) -> &'s str {
        self.alias().unwrap_or(self.name())
    }

    /// Primary description followed by each `@as` description, joined by
    /// single spaces
    pub fn description(&self) -> Option<String> {
        let fragments: Vec<&str> = std::iter::once(self.primary)
            .chain(self.qualifiers.iter().filter(|q| q.tag == Tag::As))
            .filter_map(|a| a.description.as_deref())
            .collect();
        if fragments.is_empty() {
            None
        } else {
            Some(fragments.join(" "))
        }
    }

    /// Location from the last `@uri` or `@file` qualifier. `@file` values
    /// gain a `file:` scheme.
    pub fn uri(&self) -> Option<String> {
        let qualifier = self
            .qualifiers
            .iter()
            .rev()
            .find(|q| matches!(q.tag, Tag::Uri | Tag::File))?;
        let value = qualifier.name.as_str();
        Some(match qualifier.tag {
            Tag::File if !value.starts_with("file:") => format!("file:{value}"),
            _ => value.to_string(),
        })
    }
}
