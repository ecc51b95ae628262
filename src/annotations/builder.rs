//! Building the annotation stream from comments.

use smol_str::SmolStr;

use super::grammar::parse_segment;
use super::{Annotation, AnnotationId, AnnotationStream};
use crate::base::{Comment, Location, sort_comments};
use crate::config::ExtractorConfig;
use crate::errors::{MarkupError, Result};
use crate::parser::{KeywordMatcher, KeywordTable, SegmentTokenizer};

/// Turns comments into annotations, one comment at a time.
///
/// The builder's only cross-comment state is the id counter and the index
/// of the most recent primary annotation, which qualifiers attach to.
#[derive(Debug)]
pub struct AnnotationBuilder {
    table: KeywordTable,
    matcher: KeywordMatcher,
    annotations: Vec<Annotation>,
    last_primary: Option<AnnotationId>,
}

impl AnnotationBuilder {
    pub fn new(table: KeywordTable) -> Self {
        let matcher = KeywordMatcher::new(&table);
        Self {
            table,
            matcher,
            annotations: Vec::new(),
            last_primary: None,
        }
    }

    /// Parse all markup in one comment. Returns how many annotations the
    /// comment contributed.
    pub fn add_comment(&mut self, comment: &Comment) -> Result<usize> {
        let segments = SegmentTokenizer::new(&self.matcher).tokenize(&comment.text);

        for (rank, segment) in segments.iter().enumerate() {
            let location = Location::new(comment.source, comment.line, rank as u32 + 1)
                .with_comment(comment.rank);
            let parsed = parse_segment(&self.table, segment.text, location)?;
            let id = AnnotationId::from_index(self.annotations.len());

            let qualifies = if parsed.tag.is_qualifier() {
                let Some(primary) = self.last_primary else {
                    return Err(MarkupError::OrphanQualifier {
                        location,
                        tag: parsed.tag,
                    });
                };
                Some(primary)
            } else {
                self.last_primary = Some(id);
                None
            };

            tracing::trace!(
                id = id.0,
                tag = parsed.tag.as_str(),
                name = parsed.name,
                "annotation"
            );

            self.annotations.push(Annotation {
                id,
                location,
                tag: parsed.tag,
                keyword: SmolStr::new(parsed.keyword),
                name: SmolStr::new(parsed.name),
                name_kind: parsed.name_kind,
                description: parsed.description,
                qualifies,
            });
        }

        Ok(segments.len())
    }

    pub fn finish(self) -> AnnotationStream {
        AnnotationStream::new(self.annotations)
    }
}

impl Default for AnnotationBuilder {
    fn default() -> Self {
        Self::new(KeywordTable::default())
    }
}

/// Extract the annotation stream from a run's comments.
///
/// Comments are first ordered by source, line and rank, since qualifier
/// attachment and scope matching both depend on stream order.
pub fn extract_annotations(
    comments: impl IntoIterator<Item = Comment>,
    config: &ExtractorConfig,
) -> Result<AnnotationStream> {
    let mut comments: Vec<Comment> = comments.into_iter().collect();
    sort_comments(&mut comments);

    let mut builder = AnnotationBuilder::new(config.keyword_table());
    let mut markup_comments = 0;
    for comment in &comments {
        if builder.add_comment(comment)? > 0 {
            markup_comments += 1;
        }
    }

    let stream = builder.finish();
    if stream.is_empty() {
        tracing::warn!(comments = comments.len(), "no markup found in comments");
    } else {
        tracing::debug!(
            comments = comments.len(),
            markup_comments,
            annotations = stream.len(),
            primaries = stream.primary_ids().len(),
            "extracted annotations"
        );
    }
    Ok(stream)
}
