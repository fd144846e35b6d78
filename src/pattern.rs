// std imports
use std::{convert::Infallible, fmt, str::FromStr};

// local imports
use crate::{error::Result, matcher::match_here};

/// Tests whether `pattern` matches anywhere in `text`.
///
/// Supported syntax:
/// - `^` as the first character anchors the match at the start of the text
/// - `$` as the last character anchors the match at the end of the text
/// - `.` matches any single character
/// - `[abc]`, `[a-z]` and `[^0-9]` match one character from a class or outside of it
/// - `*`, `+` and `?` repeat the preceding character, `.` or class greedily
///
/// Any other character matches itself. Without `^` the pattern is tried at every
/// offset of the text, leftmost first, including the empty suffix at the end.
///
/// Returns [`Error::UnclosedClass`](crate::Error::UnclosedClass) if matching reaches a `[`
/// without a closing `]`. This aborts the whole attempt and is distinct from `Ok(false)`.
///
/// # Examples
///
/// ```
/// use minire::is_match;
///
/// assert_eq!(is_match("^colou?r$", "color"), Ok(true));
/// assert_eq!(is_match("a[xyz]+z", "axyzxyzxz"), Ok(true));
/// assert_eq!(is_match("^[^0-9]*$", "abc123"), Ok(false));
/// assert!(is_match("[abc", "b").is_err());
/// ```
pub fn is_match(pattern: &str, text: &str) -> Result<bool> {
    if let Some(pattern) = pattern.strip_prefix('^') {
        log::trace!("matching {pattern:?} anchored at start");
        return match_here(pattern, text);
    }

    log::trace!("matching {pattern:?} at every offset");
    let mut text = text;
    loop {
        if match_here(pattern, text)? {
            return Ok(true);
        }
        let mut chars = text.chars();
        if chars.next().is_none() {
            return Ok(false);
        }
        text = chars.as_str();
    }
}

// ---

/// A pattern that can be matched against many texts.
///
/// The pattern is kept in its source form and interpreted on each match,
/// so construction never fails. A malformed class is reported by [`Pattern::matches`]
/// when matching reaches it.
///
/// # Examples
///
/// ```
/// use minire::Pattern;
///
/// let pattern = Pattern::new("^[A-Z]+[0-9]*$");
/// assert!(pattern.is_anchored());
/// assert_eq!(pattern.matches("HELLO123"), Ok(true));
/// assert_eq!(pattern.matches("Hello123"), Ok(false));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pattern {
    raw: String,
}

impl Pattern {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Tests whether the pattern matches anywhere in `text`, see [`is_match`].
    #[inline]
    pub fn matches(&self, text: &str) -> Result<bool> {
        is_match(&self.raw, text)
    }

    /// Returns `true` if the pattern starts with `^`.
    #[inline]
    pub fn is_anchored(&self) -> bool {
        self.raw.starts_with('^')
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Pattern {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Pattern {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Pattern {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}
