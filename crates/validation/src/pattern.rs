//! Lazily compiled regular expressions declared as `static` items.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// A regular expression paired with the Spanish explanation shown when a
/// value does not match.
///
/// Declared as a `static` with [`Pattern::new`]; compiled on first use.
pub struct Pattern {
    source: &'static str,
    explanation: &'static str,
    compiled: OnceLock<Regex>,
}

impl Pattern {
    /// Declare a pattern. The source must be a valid regex literal.
    pub const fn new(source: &'static str, explanation: &'static str) -> Self {
        Self {
            source,
            explanation,
            compiled: OnceLock::new(),
        }
    }

    /// Regex source text.
    pub const fn source(&self) -> &'static str {
        self.source
    }

    /// Human explanation of what the pattern accepts (Spanish).
    pub const fn explanation(&self) -> &'static str {
        self.explanation
    }

    /// Compiled regex.
    #[expect(
        clippy::panic,
        reason = "pattern sources are compile-time literals covered by tests"
    )]
    pub fn regex(&self) -> &Regex {
        self.compiled.get_or_init(|| {
            Regex::new(self.source)
                .unwrap_or_else(|error| panic!("invalid pattern {}: {error}", self.source))
        })
    }

    /// Returns true when the whole value matches.
    pub fn is_match(&self, value: &str) -> bool {
        self.regex().is_match(value)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Pattern")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Decimal amounts with at most two fractional digits.
pub static DECIMAL: Pattern = Pattern::new(
    r"^-?\d+(\.\d{1,2})?$",
    "debe ser un número con hasta dos decimales",
);

/// Leading `YYYY-MM-DD` of an ISO-8601 date or date-time.
pub(crate) static ISO_DATE_PREFIX: Pattern =
    Pattern::new(r"^\d{4}-\d{2}-\d{2}(T|$)", "debe tener formato AAAA-MM-DD");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_accepts_up_to_two_places() {
        assert!(DECIMAL.is_match("12.34"));
        assert!(DECIMAL.is_match("-5"));
        assert!(!DECIMAL.is_match("12.345"));
        assert!(!DECIMAL.is_match("abc"));
        assert!(!DECIMAL.is_match("1."));
    }

    #[test]
    fn iso_prefix_requires_padded_date() {
        assert!(ISO_DATE_PREFIX.is_match("2024-03-01"));
        assert!(ISO_DATE_PREFIX.is_match("2024-03-01T10:00:00Z"));
        assert!(!ISO_DATE_PREFIX.is_match("2024-3-1"));
        assert!(!ISO_DATE_PREFIX.is_match("2024-03-01 10:00"));
    }

    #[test]
    fn debug_shows_source() {
        assert!(format!("{DECIMAL:?}").contains(r"\d{1,2}"));
    }
}
