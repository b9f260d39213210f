//! Parse errors for user-supplied values.

use thiserror::Error;

/// Error returned when a user-supplied value cannot be parsed.
///
/// Rejected input never mutates controller state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not a recognized theme mode.
    #[error("invalid theme mode '{0}' (expected 'light' or 'dark')")]
    InvalidMode(String),
    /// Not a recognized hex color.
    #[error("invalid hex color '{0}' (expected #rgb or #rrggbb)")]
    InvalidHex(String),
}
