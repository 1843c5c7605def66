//! Graph node identifiers
//!
//! DOT output requires bare identifiers, so `-`, `.` and whitespace never
//! appear in an [`Identifier`]. Identifiers derived from coordinates or module
//! paths go through [`Identifier::canonicalize`], which strips those
//! characters. Identifiers handed in directly go through [`Identifier::new`],
//! which rejects them instead.

use std::fmt;
use std::str::FromStr;

use crate::error::GraphGeneratorError;

/// Opaque, value-compared name of a graph node
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

fn is_forbidden(c: char) -> bool {
    c == '-' || c == '.' || c.is_whitespace()
}

impl Identifier {
    /// Validate a caller-supplied identifier
    pub fn new(value: impl Into<String>) -> Result<Self, GraphGeneratorError> {
        let value = value.into();
        match value.chars().find(|&c| is_forbidden(c)) {
            Some(character) => Err(GraphGeneratorError::InvalidIdentifier { value, character }),
            None => Ok(Self(value)),
        }
    }

    /// Derive an identifier from an arbitrary coordinate string
    ///
    /// Distinct inputs may collide (`"a.b"` and `"ab"`); node identity is the
    /// concatenated coordinate, so that is accepted.
    pub fn canonicalize(raw: &str) -> Self {
        Self(raw.chars().filter(|&c| !is_forbidden(c)).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Identifier {
    type Err = GraphGeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_strips_forbidden_characters() {
        assert_eq!(Identifier::canonicalize("java.inject").as_str(), "javainject");
        assert_eq!(Identifier::canonicalize("firebase-core").as_str(), "firebasecore");
        assert_eq!(Identifier::canonicalize("firebase core").as_str(), "firebasecore");
        assert_eq!(
            Identifier::canonicalize("org.jetbrains.kotlin\tkotlin-stdlib").as_str(),
            "orgjetbrainskotlinkotlinstdlib"
        );
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        for raw in ["a.b-c d", ":app:feature-x", "plain", "", "   "] {
            let once = Identifier::canonicalize(raw);
            let twice = Identifier::canonicalize(once.as_str());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_canonicalize_collisions_are_equal() {
        assert_eq!(Identifier::canonicalize("a.b"), Identifier::canonicalize("ab"));
    }

    #[test]
    fn test_strict_accepts_clean_values() {
        let id = Identifier::new("orgjetbrainsannotations").unwrap();
        assert_eq!(id.to_string(), "orgjetbrainsannotations");
        assert_eq!(Identifier::new(":app").unwrap().as_str(), ":app");
    }

    #[test]
    fn test_strict_rejects_dash_dot_and_whitespace() {
        for (value, expected) in [("a-b", '-'), ("a.b", '.'), ("a b", ' '), ("a\nb", '\n')] {
            match Identifier::new(value) {
                Err(GraphGeneratorError::InvalidIdentifier { character, .. }) => {
                    assert_eq!(character, expected)
                }
                other => panic!("Expected InvalidIdentifier for {value:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_from_str_is_strict() {
        assert!("abc".parse::<Identifier>().is_ok());
        assert!("a.c".parse::<Identifier>().is_err());
    }
}
