//! Per-tag grammar of a markup segment: `keyword name [description...]`.

use crate::base::Location;
use crate::errors::{MarkupError, Result};
use crate::parser::{Argument, ArgumentKind, KeywordTable, Tag, arguments};

/// What kind of token a name is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum NameKind {
    #[default]
    Identifier,
    /// Numeric literal, e.g. `30.7`
    Number,
    /// Quoted string literal, quotes included
    String,
    /// Anything else: paths, URIs, dotted names
    Other,
}

impl NameKind {
    pub fn is_literal(self) -> bool {
        matches!(self, NameKind::Number | NameKind::String)
    }

    fn of(argument: &Argument<'_>) -> Self {
        match argument.kind {
            ArgumentKind::Number => NameKind::Number,
            ArgumentKind::DoubleQuoted | ArgumentKind::SingleQuoted => NameKind::String,
            ArgumentKind::Word if is_identifier(argument.text) => NameKind::Identifier,
            ArgumentKind::Word => NameKind::Other,
        }
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first == '_' || unicode_ident::is_xid_start(first) => {
            chars.all(unicode_ident::is_xid_continue)
        }
        _ => false,
    }
}

/// A segment split into its parts, before ids and qualifiers are assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedSegment<'a> {
    pub tag: Tag,
    pub keyword: &'a str,
    pub name: &'a str,
    pub name_kind: NameKind,
    pub description: Option<String>,
}

fn expected_argument(tag: Tag) -> &'static str {
    match tag {
        Tag::In | Tag::Out | Tag::Param => "name or literal",
        Tag::As => "alias",
        Tag::Uri | Tag::File => "value",
        _ => "name",
    }
}

/// Parse one trimmed segment. The leading token must be a keyword exactly.
pub(crate) fn parse_segment<'a>(
    table: &KeywordTable,
    text: &'a str,
    location: Location,
) -> Result<ParsedSegment<'a>> {
    let text = text.trim_start();
    let keyword = text.split_whitespace().next().unwrap_or_default();
    let Some(tag) = table.tag(keyword) else {
        return Err(MarkupError::UnknownKeyword {
            location,
            token: keyword.to_string(),
        });
    };

    let rest = &text[keyword.len()..];
    let mut args = arguments(rest).into_iter();
    let Some(name) = args.next() else {
        return Err(MarkupError::MissingArgument {
            location,
            tag,
            expected: expected_argument(tag),
        });
    };

    let description = args.map(|a| a.text).collect::<Vec<_>>().join(" ");

    Ok(ParsedSegment {
        tag,
        keyword,
        name: name.text,
        name_kind: NameKind::of(&name),
        description: (!description.is_empty()).then_some(description),
    })
}
