//! Symbolic literals: an atom name with an optional negation.

use std::fmt;

/// Prefix marking a negated literal in symbolic form.
pub const NEGATION_PREFIX: char = '~';

/// An atom, possibly negated (`~atom`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    pub atom: String,
    pub negated: bool,
}

impl Literal {
    /// A positive literal.
    #[must_use]
    pub fn positive(atom: impl Into<String>) -> Self {
        Self {
            atom: atom.into(),
            negated: false,
        }
    }

    /// A negated literal.
    #[must_use]
    pub fn negative(atom: impl Into<String>) -> Self {
        Self {
            atom: atom.into(),
            negated: true,
        }
    }

    /// Parse `atom` or `~atom`. Surrounding whitespace is ignored.
    ///
    /// Returns `None` for an empty field (including a bare `~`).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let (negated, atom) = match raw.strip_prefix(NEGATION_PREFIX) {
            Some(rest) => (true, rest.trim()),
            None => (false, raw),
        };
        if atom.is_empty() {
            return None;
        }
        Some(Self {
            atom: atom.to_string(),
            negated,
        })
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "{NEGATION_PREFIX}{}", self.atom)
        } else {
            f.write_str(&self.atom)
        }
    }
}
