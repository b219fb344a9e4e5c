//! Names of the free-text attributes of a CPE name.

use std::fmt;

/// One of the ten text attributes of a well-formed name.
///
/// Variants are declared in binding order, so iterating [`Attribute::ALL`]
/// visits attributes in the order they appear in a formatted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    /// Vendor or maker of the product
    Vendor,
    /// Product name
    Product,
    /// Product version
    Version,
    /// Update or service pack
    Update,
    /// Legacy edition
    Edition,
    /// Interface language
    Language,
    /// Market or class of end users (2.3 only)
    SwEdition,
    /// Software environment the product runs in (2.3 only)
    TargetSw,
    /// Instruction set architecture (2.3 only)
    TargetHw,
    /// Any other descriptive text (2.3 only)
    Other,
}

impl Attribute {
    /// All attributes in binding order.
    pub const ALL: [Self; 10] = [
        Self::Vendor,
        Self::Product,
        Self::Version,
        Self::Update,
        Self::Edition,
        Self::Language,
        Self::SwEdition,
        Self::TargetSw,
        Self::TargetHw,
        Self::Other,
    ];

    /// The attributes introduced with CPE 2.3 and packed into the edition
    /// field of a 2.2 URI.
    pub const EXTENDED: [Self; 4] = [Self::SwEdition, Self::TargetSw, Self::TargetHw, Self::Other];

    /// Returns the attribute name used in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vendor => "vendor",
            Self::Product => "product",
            Self::Version => "version",
            Self::Update => "update",
            Self::Edition => "edition",
            Self::Language => "language",
            Self::SwEdition => "swEdition",
            Self::TargetSw => "targetSw",
            Self::TargetHw => "targetHw",
            Self::Other => "other",
        }
    }

    /// Returns the position of this attribute in [`Attribute::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
