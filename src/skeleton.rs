//! Text renderings of a run's inputs: the comment listing and the markup
//! skeleton.
//!
//! The skeleton re-renders every primary annotation as a comment line in a
//! chosen comment syntax, with its qualifiers appended on the same line and
//! nesting shown by indentation:
//!
//! ```text
//! # @begin main
//!     #
//!     # @in x @as longitude
//!     #
//! # @end main
//! ```

use std::fmt::Write;

use crate::annotations::{Annotation, AnnotationStream};
use crate::base::Comment;
use crate::parser::Tag;

/// Comment texts in the order given, each followed by a newline.
pub fn comment_listing(comments: &[Comment]) -> String {
    let mut out = String::new();
    for comment in comments {
        let _ = writeln!(out, "{}", comment.text);
    }
    out
}

/// Render the markup skeleton of a stream using `delimiter` to open each
/// comment line, e.g. `#` or `//`.
pub fn render_skeleton(stream: &AnnotationStream, delimiter: &str) -> String {
    let mut writer = SkeletonWriter::new(delimiter);
    for primary in stream.iter_qualified() {
        writer.add(primary.primary, primary.qualifiers);
    }
    writer.output
}

struct SkeletonWriter<'d> {
    delimiter: &'d str,
    output: String,
    indent_level: usize,
}

impl<'d> SkeletonWriter<'d> {
    fn new(delimiter: &'d str) -> Self {
        Self {
            delimiter,
            output: String::new(),
            indent_level: 0,
        }
    }

    fn add(&mut self, primary: &Annotation, qualifiers: &[Annotation]) {
        if primary.tag == Tag::End {
            self.blank();
            self.indent_level = self.indent_level.saturating_sub(1);
        }

        let mut line = String::new();
        push_annotation(&mut line, primary);
        for qualifier in qualifiers {
            line.push(' ');
            push_annotation(&mut line, qualifier);
        }
        self.line(&line);

        if primary.tag.opens_scope() {
            self.indent_level += 1;
            self.blank();
        }
    }

    fn indent(&self) -> String {
        "    ".repeat(self.indent_level)
    }

    fn line(&mut self, text: &str) {
        let indent = self.indent();
        let _ = writeln!(self.output, "{}{} {}", indent, self.delimiter, text);
    }

    /// An empty comment line at the current depth
    fn blank(&mut self) {
        let indent = self.indent();
        let _ = writeln!(self.output, "{}{}", indent, self.delimiter);
    }
}

fn push_annotation(out: &mut String, annotation: &Annotation) {
    let _ = write!(out, "{} {}", annotation.keyword, annotation.name);
    if let Some(description) = &annotation.description {
        let _ = write!(out, " {description}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::extract_annotations;
    use crate::config::ExtractorConfig;
    use rstest::rstest;

    fn stream(lines: &[&str]) -> AnnotationStream {
        let comments = lines
            .iter()
            .enumerate()
            .map(|(i, text)| Comment::line(i as u32 + 1, *text));
        extract_annotations(comments, &ExtractorConfig::default()).unwrap()
    }

    #[test]
    fn test_comment_listing_keeps_every_comment() {
        let comments = vec![
            Comment::line(1, "plain comment"),
            Comment::line(2, "@begin main"),
            Comment::line(3, ""),
        ];
        assert_eq!(comment_listing(&comments), "plain comment\n@begin main\n\n");
    }

    #[test]
    fn test_skeleton_of_nested_scopes() {
        let stream = stream(&[
            "@begin main",
            "@in x @as longitude the coordinates",
            "@begin step",
            "@out y @file out.csv",
            "@end step",
            "@end main",
        ]);

        let expected = "\
# @begin main
    #
    # @in x @as longitude the coordinates
    # @begin step
        #
        # @out y @file out.csv
        #
    # @end step
    #
# @end main
";
        assert_eq!(render_skeleton(&stream, "#"), expected);
    }

    #[rstest]
    #[case("#", "# @begin a\n    #\n    #\n# @end a\n")]
    #[case("//", "// @begin a\n    //\n    //\n// @end a\n")]
    fn test_skeleton_delimiter(#[case] delimiter: &str, #[case] expected: &str) {
        let stream = stream(&["@begin a", "@end a"]);
        assert_eq!(render_skeleton(&stream, delimiter), expected);
    }

    #[test]
    fn test_skeleton_keeps_keyword_spelling() {
        let stream = stream(&["@BEGIN a", "@End a"]);
        assert_eq!(render_skeleton(&stream, "#"), "# @BEGIN a\n    #\n    #\n# @End a\n");
    }

    #[test]
    fn test_empty_stream_renders_nothing() {
        assert_eq!(render_skeleton(&AnnotationStream::default(), "#"), "");
    }
}
