//! Grammar check for well-formed attribute values.
//!
//! The validator reports problems as a [`Status`] value instead of an error
//! so callers decide how to surface them. [`Cpe::new`](crate::Cpe::new)
//! attaches the attribute name and turns the first failure into a
//! [`ValidationError`](crate::ValidationError).

use std::fmt;

use crate::constants::{ESCAPE, WILDCARD_MULTI, WILDCARD_SINGLE};
use crate::logical_value::LogicalValue;

/// Outcome of validating one well-formed attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The value is well formed
    Valid,
    /// The value is empty
    Empty,
    /// The value is a lone quoted hyphen, which collides with `NA`
    SingleQuotedHyphen,
    /// The value ends with an unquoted backslash
    DanglingEscape,
    /// A backslash quotes a character that needs no quoting
    InvalidQuotedChar {
        /// The quoted character
        char: char,
        /// Position in the input
        position: usize,
    },
    /// An unquoted `*` or `?` appears away from the start or end
    EmbeddedWildcard {
        /// The wildcard character
        char: char,
        /// Position in the input
        position: usize,
    },
    /// Punctuation that must be quoted appears bare
    UnquotedChar {
        /// The unquoted character
        char: char,
        /// Position in the input
        position: usize,
    },
    /// Whitespace, a control character, or a non-ASCII character
    NonPrintable {
        /// The offending character
        char: char,
        /// Position in the input
        position: usize,
    },
}

impl Status {
    /// Returns true if the value passed validation.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns a description of the problem, or `None` when valid.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        if self.is_valid() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => write!(f, "valid"),
            Self::Empty => write!(f, "value cannot be empty; use '*' for ANY"),
            Self::SingleQuotedHyphen => {
                write!(f, "a lone quoted hyphen is not allowed; use '-' for NA")
            }
            Self::DanglingEscape => write!(f, "value ends with an unquoted backslash"),
            Self::InvalidQuotedChar { char, position } => {
                write!(
                    f,
                    "character '{char}' at position {position} is quoted but only punctuation may be quoted"
                )
            }
            Self::EmbeddedWildcard { char, position } => {
                write!(
                    f,
                    "unquoted wildcard '{char}' at position {position}; wildcards are only allowed at the beginning or end"
                )
            }
            Self::UnquotedChar { char, position } => {
                write!(
                    f,
                    "special character '{char}' at position {position} must be quoted with a backslash"
                )
            }
            Self::NonPrintable { char, position } => {
                write!(
                    f,
                    "invalid character {char:?} at position {position}; only printable ASCII is allowed"
                )
            }
        }
    }
}

/// Validates one well-formed attribute value.
///
/// The logical values `*` and `-` are always valid. Any other value must be
/// made of ASCII letters, digits and `_`, with other punctuation quoted by a
/// backslash. An unquoted `*` may only be the first or last character, and
/// unquoted `?` may only form a run at the start or the end.
///
/// # Examples
///
/// ```
/// use cpe::validate;
///
/// assert!(validate::component("internet_explorer").is_valid());
/// assert!(validate::component("8\\.0\\.6001").is_valid());
/// assert!(validate::component("*beta").is_valid());
/// assert!(!validate::component("ve*ndor").is_valid());
/// assert!(!validate::component("1.0").is_valid());
/// ```
#[must_use]
pub fn component(value: &str) -> Status {
    if LogicalValue::from_abbreviation(value).is_some() {
        return Status::Valid;
    }
    if value.is_empty() {
        return Status::Empty;
    }
    if value == "\\-" {
        return Status::SingleQuotedHyphen;
    }

    let chars: Vec<char> = value.chars().collect();
    let last = chars.len() - 1;
    let leading_singles = chars.iter().take_while(|&&c| c == WILDCARD_SINGLE).count();

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            ESCAPE => {
                let Some(&quoted) = chars.get(i + 1) else {
                    return Status::DanglingEscape;
                };
                if !quoted.is_ascii_punctuation() {
                    return Status::InvalidQuotedChar {
                        char: quoted,
                        position: i + 1,
                    };
                }
                i += 2;
                continue;
            }
            WILDCARD_MULTI => {
                if i != 0 && i != last {
                    return Status::EmbeddedWildcard { char: c, position: i };
                }
                if i == 0 && chars.get(1) == Some(&WILDCARD_MULTI) {
                    return Status::EmbeddedWildcard { char: c, position: 1 };
                }
            }
            WILDCARD_SINGLE => {
                let in_leading_run = i < leading_singles;
                let in_trailing_run = chars[i..].iter().all(|&t| t == WILDCARD_SINGLE);
                if !in_leading_run && !in_trailing_run {
                    return Status::EmbeddedWildcard { char: c, position: i };
                }
            }
            c if c.is_ascii_alphanumeric() || c == '_' => {}
            c if c.is_ascii_punctuation() => {
                return Status::UnquotedChar { char: c, position: i };
            }
            c => return Status::NonPrintable { char: c, position: i },
        }
        i += 1;
    }

    Status::Valid
}
