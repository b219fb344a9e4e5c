//! The part attribute of a CPE name.

use std::fmt;
use std::str::FromStr;

use crate::logical_value::LogicalValue;

/// The kind of platform a CPE name describes.
///
/// Unlike the other attributes, the part is a closed set rather than free
/// text.
///
/// # Examples
///
/// ```
/// use cpe::Part;
///
/// assert_eq!(Part::Application.abbreviation(), "a");
/// assert_eq!("o".parse::<Part>().unwrap(), Part::OperatingSystem);
/// assert_eq!(Part::from_abbreviation("*"), Some(Part::Any));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Part {
    /// Application (`a`)
    Application,
    /// Operating system (`o`)
    OperatingSystem,
    /// Hardware device (`h`)
    HardwareDevice,
    /// Any part (`*`)
    #[default]
    Any,
    /// Not applicable (`-`)
    Na,
}

impl Part {
    /// All part values in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Application,
        Self::OperatingSystem,
        Self::HardwareDevice,
        Self::Any,
        Self::Na,
    ];

    /// Returns the abbreviation used in both bindings.
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Application => "a",
            Self::OperatingSystem => "o",
            Self::HardwareDevice => "h",
            Self::Any => "*",
            Self::Na => "-",
        }
    }

    /// Looks up a part by its abbreviation, ignoring ASCII case.
    #[must_use]
    pub fn from_abbreviation(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.abbreviation().eq_ignore_ascii_case(value))
    }

    /// Returns the logical value this part stands for, if any.
    #[must_use]
    pub const fn logical_value(self) -> Option<LogicalValue> {
        match self {
            Self::Any => Some(LogicalValue::Any),
            Self::Na => Some(LogicalValue::Na),
            Self::Application | Self::OperatingSystem | Self::HardwareDevice => None,
        }
    }

    /// Returns true for `a`, `o` and `h`.
    #[must_use]
    pub const fn is_concrete(self) -> bool {
        self.logical_value().is_none()
    }
}

impl From<LogicalValue> for Part {
    fn from(value: LogicalValue) -> Self {
        match value {
            LogicalValue::Any => Self::Any,
            LogicalValue::Na => Self::Na,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Part {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_abbreviation(s).ok_or("part must be one of 'a', 'o', 'h', '*' or '-'")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Part {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.abbreviation())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Part {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
