//! Domain error types.
//!
//! Every failure in the domain layer is a rejected construction: the caller
//! handed over input that does not describe a valid object. There is no
//! recovery path and no partially built value.

/// Validation failure raised when constructing a domain object.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was absent
    #[error("{0} is required")]
    Missing(&'static str),

    /// The string is not a well-formed UN/LOCODE
    #[error("{code} is not a valid UN/LOCODE ({reason})")]
    InvalidLocationCode { code: String, reason: &'static str },
}

impl ValidationError {
    pub(crate) fn invalid_location(code: &str, reason: &'static str) -> Self {
        Self::InvalidLocationCode {
            code: code.to_owned(),
            reason,
        }
    }
}
