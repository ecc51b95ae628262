//! Markup error types
//!
//! Every failure of the extraction and modeling pipeline is fatal to the
//! run and is reported against the location of the offending annotation.

use smol_str::SmolStr;
use thiserror::Error;

use super::codes::ErrorCode;
use crate::base::Location;
use crate::parser::{Direction, Tag};

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, MarkupError>;

/// Errors in the markup of a script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// A segment starts with something that only looks like a keyword.
    #[error("{location}: unrecognized keyword '{token}'")]
    UnknownKeyword { location: Location, token: String },

    /// A keyword is missing its name or value.
    #[error("{location}: {tag} requires a {expected}")]
    MissingArgument {
        location: Location,
        tag: Tag,
        expected: &'static str,
    },

    /// `@as`, `@uri` or `@file` before any primary annotation.
    #[error("{location}: {tag} does not follow an annotation it could qualify")]
    OrphanQualifier { location: Location, tag: Tag },

    /// `@end` while no scope is open.
    #[error("{location}: @end {name} has no matching @begin")]
    UnmatchedEnd { location: Location, name: SmolStr },

    /// `@end` naming a scope other than the innermost open one.
    #[error("{location}: @end {found} does not match @begin {expected} at {opened_at}")]
    MismatchedEnd {
        location: Location,
        expected: SmolStr,
        found: SmolStr,
        opened_at: Location,
    },

    /// The stream ended while a scope was still open.
    #[error("{location}: @begin {name} is never closed by @end {name}")]
    UnclosedScope { location: Location, name: SmolStr },

    /// A port or call with no enclosing scope.
    #[error("{location}: {tag} {name} is not inside any @begin")]
    OutsideScope {
        location: Location,
        tag: Tag,
        name: SmolStr,
    },

    /// The same binding declared twice in one direction of one scope.
    #[error("{location}: {direction} '{binding}' is declared twice in {scope}")]
    DuplicateBinding {
        location: Location,
        scope: SmolStr,
        direction: Direction,
        binding: SmolStr,
    },
}

impl MarkupError {
    /// Categorized code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownKeyword { .. } => ErrorCode::E0101,
            Self::MissingArgument { .. } => ErrorCode::E0102,
            Self::OrphanQualifier { .. } => ErrorCode::E0103,
            Self::UnmatchedEnd { .. } => ErrorCode::E0201,
            Self::MismatchedEnd { .. } => ErrorCode::E0202,
            Self::UnclosedScope { .. } => ErrorCode::E0203,
            Self::OutsideScope { .. } => ErrorCode::E0204,
            Self::DuplicateBinding { .. } => ErrorCode::E0301,
        }
    }

    /// Where the error was detected
    pub fn location(&self) -> Location {
        match self {
            Self::UnknownKeyword { location, .. }
            | Self::MissingArgument { location, .. }
            | Self::OrphanQualifier { location, .. }
            | Self::UnmatchedEnd { location, .. }
            | Self::MismatchedEnd { location, .. }
            | Self::UnclosedScope { location, .. }
            | Self::OutsideScope { location, .. }
            | Self::DuplicateBinding { location, .. } => *location,
        }
    }

    /// Format the error with its code for display
    pub fn format(&self) -> String {
        format!("{}: {}", self.code(), self)
    }
}
