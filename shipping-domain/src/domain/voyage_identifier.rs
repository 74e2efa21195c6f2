//! Voyage identifier type.

use std::fmt;

/// Identifies a voyage (its voyage number).
///
/// Voyage identifiers are opaque tokens with no format constraint. The
/// empty identifier is reserved for [`Voyage::none`](super::Voyage::none).
///
/// # Examples
///
/// ```
/// use shipping_domain::domain::VoyageIdentifier;
///
/// let id = VoyageIdentifier::new("V001");
/// assert_eq!(id.as_str(), "V001");
/// assert!(id.same_value_as(&VoyageIdentifier::from("V001")));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct VoyageIdentifier(String);

impl VoyageIdentifier {
    /// The reserved "no voyage" identifier.
    pub(crate) const EMPTY: VoyageIdentifier = VoyageIdentifier(String::new());

    /// Create an identifier from any string.
    pub fn new(id: impl Into<String>) -> Self {
        VoyageIdentifier(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns true for the reserved empty identifier.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if both identifiers hold the same string.
    pub fn same_value_as(&self, other: &VoyageIdentifier) -> bool {
        self.0 == other.0
    }
}

impl From<&str> for VoyageIdentifier {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for VoyageIdentifier {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl fmt::Debug for VoyageIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VoyageIdentifier({})", self.0)
    }
}

impl fmt::Display for VoyageIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: new then as_str returns the original
        #[test]
        fn roundtrip(s in ".*") {
            let id = VoyageIdentifier::new(s.clone());
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Equality follows string equality exactly
        #[test]
        fn equality_matches_strings(a in "[A-Z0-9]{0,4}", b in "[A-Z0-9]{0,4}") {
            let x = VoyageIdentifier::new(a.clone());
            let y = VoyageIdentifier::new(b.clone());
            prop_assert_eq!(x.same_value_as(&y), a == b);
            prop_assert_eq!(x == y, a == b);
        }
    }
}
