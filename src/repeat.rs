// std imports
use std::fmt;

// local imports
use crate::{class::CharClass, error::Result, matcher::match_here};

// ---

/// Repetition bounds applied to a [`Unit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantifier {
    pub min: usize,
    pub max: usize,
}

impl Quantifier {
    /// `*`
    pub const STAR: Self = Self::new(0, usize::MAX);
    /// `+`
    pub const PLUS: Self = Self::new(1, usize::MAX);
    /// `?`
    pub const OPTIONAL: Self = Self::new(0, 1);

    #[inline]
    pub const fn new(min: usize, max: usize) -> Self {
        debug_assert!(min <= max);
        Self { min, max }
    }

    /// Returns the quantifier denoted by a symbol, if it is one of `*`, `+` or `?`.
    #[inline]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '*' => Some(Self::STAR),
            '+' => Some(Self::PLUS),
            '?' => Some(Self::OPTIONAL),
            _ => None,
        }
    }

    /// Splits a leading quantifier symbol off the pattern.
    #[inline]
    pub fn split(pattern: &str) -> Option<(Self, &str)> {
        let mut chars = pattern.chars();
        let quantifier = Self::from_symbol(chars.next()?)?;
        Some((quantifier, chars.as_str()))
    }
}

// ---

/// A single-character matcher that a quantifier can repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unit {
    /// `.`
    Any,
    Literal(char),
    Class(CharClass),
}

impl Unit {
    /// Returns the unit denoted by a single pattern character outside of a class.
    #[inline]
    pub fn single(ch: char) -> Self {
        match ch {
            '.' => Self::Any,
            _ => Self::Literal(ch),
        }
    }

    #[inline]
    pub fn accepts(&self, ch: char) -> bool {
        match self {
            Self::Any => true,
            Self::Literal(expected) => *expected == ch,
            Self::Class(class) => class.contains(ch),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("."),
            Self::Literal(ch) => write!(f, "{}", ch),
            Self::Class(class) => write!(f, "{}", class),
        }
    }
}

// ---

/// Matches `unit` repeated within `quantifier` bounds, followed by `pattern`, at the start of `text`.
///
/// The greedy run of characters accepted by `unit` is measured first. Repetition counts
/// are then tried from `quantifier.min` upwards, and the first count that lets the rest
/// of the pattern match wins.
pub fn repeat(unit: &Unit, quantifier: Quantifier, pattern: &str, text: &str) -> Result<bool> {
    let run = text.chars().take_while(|&ch| unit.accepts(ch)).count();
    let upper = run.min(quantifier.max);
    log::trace!("repeat {unit} {}..={} over run of {run}", quantifier.min, quantifier.max);

    let mut chars = text.chars();
    for count in 0..=upper {
        if count >= quantifier.min && match_here(pattern, chars.as_str())? {
            return Ok(true);
        }
        chars.next();
    }

    Ok(false)
}
