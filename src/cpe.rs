//! The CPE well-formed name.

use std::fmt;

use tracing::{debug, trace};

use crate::attribute::Attribute;
use crate::constants::{
    ATTRIBUTE_SEPARATOR, CPE22_URI_PREFIX, CPE23_FS_PREFIX, PACKED_EDITION_SEPARATOR,
};
use crate::convert;
use crate::error::{EncodingError, ValidationError};
use crate::matcher::{compare_attributes, compare_parts};
use crate::part::Part;
use crate::validate;

/// An immutable, validated CPE well-formed name.
///
/// Every text attribute is stored in the well-formed form: punctuation is
/// quoted with a backslash and the logical values are stored as `*` and
/// `-`. A `Cpe` can only be obtained through [`Cpe::new`] (or
/// [`CpeBuilder`](crate::CpeBuilder)), which validates all attributes, so
/// every instance is well formed.
///
/// Equality, hashing and ordering are structural over all eleven
/// attributes.
///
/// # Examples
///
/// ```
/// use cpe::{Cpe, Part};
///
/// let cpe = Cpe::new(
///     Part::Application, "microsoft", "internet_explorer", "8\\.0\\.6001", "beta",
///     "*", "*", "*", "*", "*", "*",
/// ).unwrap();
///
/// assert_eq!(cpe.version(), "8.0.6001");
/// assert_eq!(
///     cpe.to_formatted_string(),
///     "cpe:2.3:a:microsoft:internet_explorer:8.0.6001:beta:*:*:*:*:*:*"
/// );
/// assert_eq!(
///     cpe.to_uri().unwrap(),
///     "cpe:/a:microsoft:internet_explorer:8.0.6001:beta"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "WellFormedName"))]
pub struct Cpe {
    part: Part,
    vendor: String,
    product: String,
    version: String,
    update: String,
    edition: String,
    language: String,
    sw_edition: String,
    target_sw: String,
    target_hw: String,
    other: String,
}

impl Cpe {
    /// Creates a CPE from well-formed attribute values.
    ///
    /// Use `*` for `ANY` and `-` for `NA`. Attributes are validated in
    /// binding order and the first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` naming the first attribute that is not
    /// well formed, for example one with an embedded unquoted `*`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpe::{Attribute, Cpe, Part};
    ///
    /// let err = Cpe::new(
    ///     Part::Any, "ve*ndor", "product", "*", "*", "*", "*", "*", "*", "*", "*",
    /// ).unwrap_err();
    /// assert_eq!(err.attribute, Attribute::Vendor);
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        part: Part,
        vendor: &str,
        product: &str,
        version: &str,
        update: &str,
        edition: &str,
        language: &str,
        sw_edition: &str,
        target_sw: &str,
        target_hw: &str,
        other: &str,
    ) -> Result<Self, ValidationError> {
        Self::from_values(
            part,
            [
                vendor, product, version, update, edition, language, sw_edition, target_sw,
                target_hw, other,
            ],
        )
    }

    /// Creates a CPE from the ten text attributes in binding order.
    pub(crate) fn from_values(part: Part, values: [&str; 10]) -> Result<Self, ValidationError> {
        for (attribute, value) in Attribute::ALL.into_iter().zip(values) {
            let status = validate::component(value);
            if !status.is_valid() {
                debug!(%attribute, value, %status, "rejected CPE attribute");
                return Err(ValidationError::new(attribute, status));
            }
        }

        let [
            vendor,
            product,
            version,
            update,
            edition,
            language,
            sw_edition,
            target_sw,
            target_hw,
            other,
        ] = values.map(str::to_string);

        Ok(Self {
            part,
            vendor,
            product,
            version,
            update,
            edition,
            language,
            sw_edition,
            target_sw,
            target_hw,
            other,
        })
    }

    /// Returns the part.
    #[must_use]
    pub const fn part(&self) -> Part {
        self.part
    }

    /// Returns the vendor as display text.
    #[must_use]
    pub fn vendor(&self) -> String {
        convert::to_display_text(&self.vendor)
    }

    /// Returns the product as display text.
    #[must_use]
    pub fn product(&self) -> String {
        convert::to_display_text(&self.product)
    }

    /// Returns the version as display text.
    #[must_use]
    pub fn version(&self) -> String {
        convert::to_display_text(&self.version)
    }

    /// Returns the update as display text.
    #[must_use]
    pub fn update(&self) -> String {
        convert::to_display_text(&self.update)
    }

    /// Returns the edition as display text.
    #[must_use]
    pub fn edition(&self) -> String {
        convert::to_display_text(&self.edition)
    }

    /// Returns the language as display text.
    #[must_use]
    pub fn language(&self) -> String {
        convert::to_display_text(&self.language)
    }

    /// Returns the software edition as display text.
    #[must_use]
    pub fn sw_edition(&self) -> String {
        convert::to_display_text(&self.sw_edition)
    }

    /// Returns the target software as display text.
    #[must_use]
    pub fn target_sw(&self) -> String {
        convert::to_display_text(&self.target_sw)
    }

    /// Returns the target hardware as display text.
    #[must_use]
    pub fn target_hw(&self) -> String {
        convert::to_display_text(&self.target_hw)
    }

    /// Returns the other attribute as display text.
    #[must_use]
    pub fn other(&self) -> String {
        convert::to_display_text(&self.other)
    }

    /// Returns the stored well-formed value of an attribute.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpe::{Attribute, CpeBuilder, Part};
    ///
    /// let cpe = CpeBuilder::new()
    ///     .part(Part::Application)
    ///     .vendor("at\\&t")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(cpe.well_formed(Attribute::Vendor), "at\\&t");
    /// assert_eq!(cpe.vendor(), "at&t");
    /// ```
    #[must_use]
    pub fn well_formed(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::Vendor => &self.vendor,
            Attribute::Product => &self.product,
            Attribute::Version => &self.version,
            Attribute::Update => &self.update,
            Attribute::Edition => &self.edition,
            Attribute::Language => &self.language,
            Attribute::SwEdition => &self.sw_edition,
            Attribute::TargetSw => &self.target_sw,
            Attribute::TargetHw => &self.target_hw,
            Attribute::Other => &self.other,
        }
    }

    /// Iterates the text attributes and their well-formed values in
    /// binding order.
    pub fn attributes(&self) -> impl Iterator<Item = (Attribute, &str)> {
        Attribute::ALL
            .into_iter()
            .map(move |attribute| (attribute, self.well_formed(attribute)))
    }

    /// Binds the name as a CPE 2.3 formatted string.
    ///
    /// All eleven attributes are always present.
    #[must_use]
    pub fn to_formatted_string(&self) -> String {
        let mut fs = String::from(CPE23_FS_PREFIX);
        fs.push_str(self.part.abbreviation());
        for (_, value) in self.attributes() {
            fs.push(ATTRIBUTE_SEPARATOR);
            fs.push_str(&convert::to_formatted_string_token(value));
        }
        fs
    }

    /// Binds the name as a CPE 2.2 URI.
    ///
    /// The four attributes introduced with 2.3 have no field of their own in
    /// a 2.2 URI. When any of them is set they are packed into the edition
    /// field as `~edition~sw_edition~target_sw~target_hw~other`; otherwise
    /// the edition is written alone. Trailing empty fields are dropped.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError` if an attribute has no URI encoding. This
    /// cannot happen for a validated name.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpe::{Cpe, Part};
    ///
    /// let cpe = Cpe::new(
    ///     Part::Any, "vendor", "product", "version", "update", "edition",
    ///     "language", "*", "targetSw", "targetHw", "other",
    /// ).unwrap();
    /// assert_eq!(
    ///     cpe.to_uri().unwrap(),
    ///     "cpe:/*:vendor:product:version:update:~edition~~targetSw~targetHw~other:language"
    /// );
    /// ```
    pub fn to_uri(&self) -> Result<String, EncodingError> {
        let mut uri = String::from(CPE22_URI_PREFIX);
        uri.push_str(self.part.abbreviation());

        for attribute in [
            Attribute::Vendor,
            Attribute::Product,
            Attribute::Version,
            Attribute::Update,
        ] {
            uri.push(ATTRIBUTE_SEPARATOR);
            uri.push_str(&convert::to_uri_token(self.well_formed(attribute))?);
        }

        uri.push(ATTRIBUTE_SEPARATOR);
        if self.has_extended_attributes() {
            for attribute in [Attribute::Edition]
                .into_iter()
                .chain(Attribute::EXTENDED)
            {
                uri.push(PACKED_EDITION_SEPARATOR);
                uri.push_str(&convert::to_uri_token(self.well_formed(attribute))?);
            }
        } else {
            uri.push_str(&convert::to_uri_token(&self.edition)?);
        }

        uri.push(ATTRIBUTE_SEPARATOR);
        uri.push_str(&convert::to_uri_token(&self.language)?);

        let len = uri.trim_end_matches(ATTRIBUTE_SEPARATOR).len();
        uri.truncate(len);
        Ok(uri)
    }

    /// Returns true if any attribute introduced with CPE 2.3 is set to
    /// something other than `ANY`.
    #[must_use]
    pub fn has_extended_attributes(&self) -> bool {
        Attribute::EXTENDED
            .into_iter()
            .any(|attribute| !convert::is_any_or_empty(self.well_formed(attribute)))
    }

    /// Returns true if this name, used as a pattern, matches `target`.
    ///
    /// Every attribute of `self` is compared as the left operand against
    /// the same attribute of `target`; see
    /// [`compare_attributes`](crate::matcher::compare_attributes).
    ///
    /// # Examples
    ///
    /// ```
    /// use cpe::{CpeBuilder, Part};
    ///
    /// let pattern = CpeBuilder::new().vendor("apache").build().unwrap();
    /// let target = CpeBuilder::new()
    ///     .part(Part::Application)
    ///     .vendor("apache")
    ///     .product("http_server")
    ///     .version("2\\.4\\.57")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert!(pattern.matches(&target));
    /// assert!(!target.matches(&pattern));
    /// assert!(target.matched_by(&pattern));
    /// ```
    #[must_use]
    pub fn matches(&self, target: &Self) -> bool {
        if !compare_parts(self.part, target.part) {
            trace!(pattern = %self.part, candidate = %target.part, "CPE part mismatch");
            return false;
        }
        for (attribute, pattern) in self.attributes() {
            let candidate = target.well_formed(attribute);
            if !compare_attributes(pattern, candidate) {
                trace!(%attribute, pattern, candidate, "CPE attribute mismatch");
                return false;
            }
        }
        true
    }

    /// Returns true if `target`, used as a pattern, matches this name.
    ///
    /// This swaps the operands of [`Cpe::matches`]; it is not its negation.
    #[must_use]
    pub fn matched_by(&self, target: &Self) -> bool {
        target.matches(self)
    }
}

impl fmt::Display for Cpe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_formatted_string())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct WellFormedName {
    part: Part,
    vendor: String,
    product: String,
    version: String,
    update: String,
    edition: String,
    language: String,
    sw_edition: String,
    target_sw: String,
    target_hw: String,
    other: String,
}

#[cfg(feature = "serde")]
impl TryFrom<WellFormedName> for Cpe {
    type Error = ValidationError;

    fn try_from(name: WellFormedName) -> Result<Self, Self::Error> {
        Self::from_values(
            name.part,
            [
                name.vendor.as_str(),
                name.product.as_str(),
                name.version.as_str(),
                name.update.as_str(),
                name.edition.as_str(),
                name.language.as_str(),
                name.sw_edition.as_str(),
                name.target_sw.as_str(),
                name.target_hw.as_str(),
                name.other.as_str(),
            ],
        )
    }
}
