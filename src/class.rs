// std imports
use std::fmt;
use std::ops::RangeInclusive;

/// A bracket expression such as `[abc]`, `[a-z0-9]` or `[^0-9]`.
///
/// A class is built once from its token and is immutable afterwards.
/// Single characters are stored as one-character ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClass {
    items: Vec<RangeInclusive<char>>,
    negate: bool,
}

impl CharClass {
    /// Parses a bracket token including its brackets, e.g. `[^a-z_]`.
    ///
    /// The token ends at the first `]` after the opening `[`, so `]` is never a member.
    /// A `-` that has no character on both sides within the brackets is a literal.
    /// A reversed range like `z-a` is kept as is and matches nothing.
    pub fn parse(token: &str) -> Self {
        let body = token.strip_prefix('[').unwrap_or(token);
        let body = body.strip_suffix(']').unwrap_or(body);
        let (negate, body) = match body.strip_prefix('^') {
            Some(body) => (true, body),
            None => (false, body),
        };

        let chars: Vec<char> = body.chars().collect();
        let mut items = Vec::with_capacity(chars.len());
        let mut rest = &chars[..];
        loop {
            match rest {
                [start, '-', end, tail @ ..] => {
                    items.push(*start..=*end);
                    rest = tail;
                }
                [ch, tail @ ..] => {
                    items.push(*ch..=*ch);
                    rest = tail;
                }
                [] => break,
            }
        }

        Self { items, negate }
    }

    /// Tests whether a single character is accepted by the class.
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.items.iter().any(|range| range.contains(&ch)) != self.negate
    }

    #[inline]
    pub fn is_negated(&self) -> bool {
        self.negate
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        if self.negate {
            f.write_str("^")?;
        }
        for range in &self.items {
            if range.start() == range.end() {
                write!(f, "{}", range.start())?;
            } else {
                write!(f, "{}-{}", range.start(), range.end())?;
            }
        }
        f.write_str("]")
    }
}
