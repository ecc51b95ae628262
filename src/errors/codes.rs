//! Error code definitions for markup diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Extraction errors (keywords, arguments, qualifiers)
//! - E02xx: Scope errors (begin/end balance)
//! - E03xx: Port errors

use std::fmt;

/// Error codes for markup diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Extraction errors
    // =========================================================================
    /// Segment does not start with a recognized keyword
    E0101,
    /// Keyword without its name/value argument
    E0102,
    /// Qualifier with no preceding primary annotation
    E0103,

    // =========================================================================
    // E02xx: Scope errors
    // =========================================================================
    /// `@end` with no open scope
    E0201,
    /// `@end` name differs from the open scope
    E0202,
    /// Scope still open when the stream ends
    E0203,
    /// Port or call declared outside any scope
    E0204,

    // =========================================================================
    // E03xx: Port errors
    // =========================================================================
    /// Binding declared twice in one direction of one scope
    E0301,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0301 => "E0301",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 | Self::E0103 => "extraction error",
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 => "scope error",
            Self::E0301 => "port error",
        }
    }

    /// Get the default message for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "unrecognized keyword",
            Self::E0102 => "missing argument",
            Self::E0103 => "qualifier without a preceding annotation",
            Self::E0201 => "end without matching begin",
            Self::E0202 => "mismatched end",
            Self::E0203 => "unclosed scope",
            Self::E0204 => "declaration outside any scope",
            Self::E0301 => "duplicate port binding",
        }
    }

    /// Check if this is a scope-balance error
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
