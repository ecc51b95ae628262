//! Markup error handling module
//!
//! - Categorized error codes for filtering and documentation
//! - A single fatal error type carrying the offending location

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{MarkupError, Result};
