//! Constants for CPE bindings.

/// Prefix of a CPE 2.3 formatted string binding.
pub const CPE23_FS_PREFIX: &str = "cpe:2.3:";

/// Prefix of a CPE 2.2 URI binding.
pub const CPE22_URI_PREFIX: &str = "cpe:/";

/// Number of attributes in a well-formed name, including the part.
pub const ATTRIBUTE_COUNT: usize = 11;

/// Separator between attributes in both bindings.
pub const ATTRIBUTE_SEPARATOR: char = ':';

/// Separator between packed extension attributes in the 2.2 edition field.
pub const PACKED_EDITION_SEPARATOR: char = '~';

/// Escape character of the well-formed form.
pub const ESCAPE: char = '\\';

/// Unquoted multi-character wildcard.
pub const WILDCARD_MULTI: char = '*';

/// Unquoted single-character wildcard.
pub const WILDCARD_SINGLE: char = '?';
