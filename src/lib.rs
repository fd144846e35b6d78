//! Minimal backtracking regular expression matcher.
//!
//! Supports anchors (`^`, `$`), literals, the wildcard `.`, character classes
//! (`[abc]`, `[a-z]`, `[^0-9]`) and greedy quantifiers (`*`, `+`, `?`).
//! There is no alternation, grouping or escaping.
//!
//! ```
//! use minire::{Error, is_match};
//!
//! assert_eq!(is_match("^a[bc]*d$", "abcbcd"), Ok(true));
//! assert_eq!(is_match("^a[bc]*d$", "abcecd"), Ok(false));
//! assert_eq!(is_match("[abc", "b"), Err(Error::UnclosedClass("[abc".into())));
//! ```

// public modules
pub mod class;
pub mod error;

// private modules
mod matcher;
mod pattern;
mod repeat;

// public uses
pub use class::CharClass;
pub use error::{Error, Result};
pub use pattern::{Pattern, is_match};
