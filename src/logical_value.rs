//! Logical attribute values.

use std::fmt;
use std::str::FromStr;

/// A logical value standing in for attribute text.
///
/// `ANY` is the wildcard and `NA` marks an attribute as not applicable.
/// Both are stored in a well-formed name as their one-character
/// abbreviation.
///
/// # Examples
///
/// ```
/// use cpe::LogicalValue;
///
/// assert_eq!(LogicalValue::Any.abbreviation(), "*");
/// assert_eq!(LogicalValue::from_abbreviation("-"), Some(LogicalValue::Na));
/// assert_eq!(LogicalValue::from_abbreviation("apache"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LogicalValue {
    /// Matches any value (`*`)
    Any,
    /// Not applicable (`-`)
    Na,
}

impl LogicalValue {
    /// Returns the abbreviation used in well-formed text.
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Any => "*",
            Self::Na => "-",
        }
    }

    /// Looks up the logical value for an abbreviation.
    ///
    /// Returns `None` for ordinary attribute text.
    #[must_use]
    pub fn from_abbreviation(value: &str) -> Option<Self> {
        match value {
            "*" => Some(Self::Any),
            "-" => Some(Self::Na),
            _ => None,
        }
    }

    /// Returns true if `value` is exactly this value's abbreviation.
    #[must_use]
    pub fn is(self, value: &str) -> bool {
        value == self.abbreviation()
    }
}

impl fmt::Display for LogicalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for LogicalValue {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_abbreviation(s).ok_or("logical value must be '*' or '-'")
    }
}
