// third-party imports
use memchr::memchr;

// local imports
use crate::{
    class::CharClass,
    error::{Error, Result},
    repeat::{Quantifier, Unit, repeat},
};

/// Tests whether `pattern` matches a prefix of `text`.
///
/// A pattern consisting of exactly `$` matches only the empty text.
/// Unquantified literals, wildcards and classes advance both views in place;
/// recursion happens only through [`repeat`] for quantified units.
pub fn match_here(mut pattern: &str, mut text: &str) -> Result<bool> {
    loop {
        let mut tokens = pattern.chars();
        let Some(first) = tokens.next() else {
            return Ok(true);
        };

        if pattern == "$" {
            return Ok(text.is_empty());
        }

        let (unit, rest) = if first == '[' {
            let Some(end) = memchr(b']', pattern.as_bytes()) else {
                log::debug!("unclosed character class in {pattern:?}");
                return Err(Error::UnclosedClass(pattern.to_owned()));
            };
            (Unit::Class(CharClass::parse(&pattern[..=end])), &pattern[end + 1..])
        } else {
            (Unit::single(first), tokens.as_str())
        };

        if let Some((quantifier, rest)) = Quantifier::split(rest) {
            return repeat(&unit, quantifier, rest, text);
        }

        let mut chars = text.chars();
        match chars.next() {
            Some(ch) if unit.accepts(ch) => {
                pattern = rest;
                text = chars.as_str();
            }
            _ => return Ok(false),
        }
    }
}
