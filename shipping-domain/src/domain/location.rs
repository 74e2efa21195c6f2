//! UN/LOCODE location code type.

use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A valid UN/LOCODE (United Nations location code).
///
/// A code is a 2-letter country code followed by a 3-character location
/// segment. The location segment is usually letters, but may also contain
/// the digits 2-9. Input is accepted in any case and stored in its
/// canonical uppercase form, so two codes are equal exactly when their
/// canonical strings are.
///
/// See <http://www.unece.org/cefact/locode/>.
///
/// # Examples
///
/// ```
/// use shipping_domain::domain::LocationCode;
///
/// let stockholm = LocationCode::parse("sesto").unwrap();
/// assert_eq!(stockholm.as_str(), "SESTO");
/// assert_eq!(stockholm, LocationCode::parse("SESTO").unwrap());
///
/// // Digits 0 and 1 never appear in a location segment
/// assert!(LocationCode::parse("SE010").is_err());
///
/// // Wrong length is rejected
/// assert!(LocationCode::parse("SEST").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct LocationCode(String);

impl LocationCode {
    /// Parse a location code, normalising it to uppercase.
    ///
    /// The input must match `[A-Za-z]{2}[A-Za-z2-9]{3}` in full.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let bytes = s.as_bytes();

        if bytes.len() != 5 {
            return Err(ValidationError::invalid_location(
                s,
                "must be exactly 5 characters",
            ));
        }

        let (country, location) = bytes.split_at(2);

        if !country.iter().all(u8::is_ascii_alphabetic) {
            return Err(ValidationError::invalid_location(
                s,
                "country code must be 2 letters",
            ));
        }

        if !location.iter().all(|b| b.is_ascii_alphabetic() || (b'2'..=b'9').contains(b)) {
            return Err(ValidationError::invalid_location(
                s,
                "location must be letters or digits 2-9",
            ));
        }

        Ok(LocationCode(s.to_ascii_uppercase()))
    }

    /// Wrap a code read back from trusted storage without checking the
    /// pattern. The code is still brought to canonical uppercase form.
    ///
    /// Only the storage boundary may use this; everything else goes
    /// through [`LocationCode::parse`].
    pub(crate) fn from_trusted(code: String) -> Self {
        LocationCode(code.to_ascii_uppercase())
    }

    /// Returns the canonical (uppercase) code.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value objects have no identity: two codes are the same value when
    /// their canonical strings match.
    pub fn same_value_as(&self, other: &LocationCode) -> bool {
        self.0 == other.0
    }
}

impl FromStr for LocationCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationCode({})", self.0)
    }
}

impl fmt::Display for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn valid_code_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Za-z]{2}[A-Za-z2-9]{3}").unwrap()
    }

    proptest! {
        /// Any matching string parses to its uppercase form
        #[test]
        fn canonical_is_uppercase(s in valid_code_string()) {
            let code = LocationCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.to_ascii_uppercase());
        }

        /// Case of the input never affects equality
        #[test]
        fn case_insensitive_equality(s in valid_code_string()) {
            let lower = LocationCode::parse(&s.to_ascii_lowercase()).unwrap();
            let upper = LocationCode::parse(&s.to_ascii_uppercase()).unwrap();
            prop_assert!(lower.same_value_as(&upper));
            prop_assert_eq!(lower, upper);
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,4}|[A-Z]{6,10}") {
            prop_assert!(LocationCode::parse(&s).is_err());
        }

        /// Digits in the country code are always rejected
        #[test]
        fn digit_country_rejected(s in "[0-9][A-Z][A-Z]{3}") {
            prop_assert!(LocationCode::parse(&s).is_err());
        }

        /// Distinct canonical strings never compare equal
        #[test]
        fn distinct_codes_differ(a in valid_code_string(), b in valid_code_string()) {
            let x = LocationCode::parse(&a).unwrap();
            let y = LocationCode::parse(&b).unwrap();
            prop_assert_eq!(
                x.same_value_as(&y),
                a.eq_ignore_ascii_case(&b)
            );
        }
    }
}
