//! Error types for CPE construction and encoding.

use std::fmt;

use crate::attribute::Attribute;
use crate::validate::Status;

/// An attribute failed the well-formed grammar during construction.
///
/// Only the first failing attribute, in binding order, is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The attribute that failed validation
    pub attribute: Attribute,
    /// The validator's verdict for that attribute
    pub status: Status,
}

impl ValidationError {
    /// Creates a validation error for an attribute.
    #[must_use]
    pub const fn new(attribute: Attribute, status: Status) -> Self {
        Self { attribute, status }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} component: {}", self.attribute, self.status)
    }
}

impl std::error::Error for ValidationError {}

/// A value cannot be represented in the CPE 2.2 URI binding.
///
/// Values held by a [`Cpe`](crate::Cpe) are always encodable; these errors
/// surface when the converter is handed text that was never validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// The value ends with a backslash that quotes nothing
    DanglingEscape {
        /// The value being encoded
        value: String,
    },
    /// The value contains a character with no URI mapping
    UnsupportedChar {
        /// The value being encoded
        value: String,
        /// The unsupported character
        char: char,
        /// Position in the value
        position: usize,
    },
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingEscape { value } => {
                write!(
                    f,
                    "cannot encode '{value}' as a CPE 2.2 URI: value ends with an unquoted backslash"
                )
            }
            Self::UnsupportedChar {
                value,
                char,
                position,
            } => {
                write!(
                    f,
                    "cannot encode '{value}' as a CPE 2.2 URI: character {char:?} at position {position} has no URI mapping"
                )
            }
        }
    }
}

impl std::error::Error for EncodingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_attribute() {
        let err = ValidationError::new(
            Attribute::SwEdition,
            Status::EmbeddedWildcard { char: '*', position: 5 },
        );
        let msg = err.to_string();
        assert!(msg.starts_with("invalid swEdition component: "));
        assert!(msg.contains("position 5"));
    }

    #[test]
    fn encoding_error_display() {
        let err = EncodingError::DanglingEscape {
            value: "abc\\".to_string(),
        };
        assert!(err.to_string().contains("unquoted backslash"));

        let err = EncodingError::UnsupportedChar {
            value: "a b".to_string(),
            char: ' ',
            position: 1,
        };
        assert!(err.to_string().contains("position 1"));
    }
}
