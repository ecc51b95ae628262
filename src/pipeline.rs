//! One extract-then-model run over a set of comments.

use crate::annotations::{AnnotationStream, extract_annotations};
use crate::base::Comment;
use crate::config::PipelineConfig;
use crate::errors::Result;
use crate::model::{Model, build_model};
use crate::skeleton;

/// Everything a run produced: the input comments, the annotation stream,
/// and the model built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    comments: Vec<Comment>,
    annotations: AnnotationStream,
    model: Model,
}

impl Extraction {
    /// Comments in the order they were given
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn annotations(&self) -> &AnnotationStream {
        &self.annotations
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn into_model(self) -> Model {
        self.model
    }

    pub fn comment_listing(&self) -> String {
        skeleton::comment_listing(&self.comments)
    }

    pub fn skeleton(&self, delimiter: &str) -> String {
        skeleton::render_skeleton(&self.annotations, delimiter)
    }
}

/// Run extraction and modeling. Any markup error aborts the run.
pub fn run(comments: impl IntoIterator<Item = Comment>, config: &PipelineConfig) -> Result<Extraction> {
    let comments: Vec<Comment> = comments.into_iter().collect();
    let annotations = extract_annotations(comments.iter().cloned(), &config.extract)?;
    let model = build_model(&annotations, &config.model)?;

    tracing::debug!(
        comments = comments.len(),
        annotations = annotations.len(),
        programs = model.programs().len(),
        channels = model.channels().len(),
        root = model.root().map(|p| p.name.as_str()),
        "pipeline finished"
    );

    Ok(Extraction {
        comments,
        annotations,
        model,
    })
}
