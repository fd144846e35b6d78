// third-party imports
use thiserror::Error;

/// Error is an error which may occur while matching a pattern.
///
/// Errors are structural: they describe a malformed pattern, never a failed match.
/// A pattern that is well-formed but does not match yields `Ok(false)` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A `[` reached by the matcher has no closing `]`.
    ///
    /// Holds the remaining pattern, starting at the offending `[`.
    #[error("unclosed character class {0:?}")]
    UnclosedClass(String),
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
