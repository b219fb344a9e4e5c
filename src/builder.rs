//! Builder for constructing [`Cpe`] instances.
//!
//! Every attribute starts out as `ANY`, so callers only name the attributes
//! they know. Validation is deferred to [`CpeBuilder::build`], which runs
//! the same checks as [`Cpe::new`].

use crate::attribute::Attribute;
use crate::convert;
use crate::cpe::Cpe;
use crate::error::ValidationError;
use crate::logical_value::LogicalValue;
use crate::part::Part;

/// A builder for [`Cpe`] names.
///
/// Setters named after an attribute take well-formed text, with
/// punctuation already quoted. [`CpeBuilder::attribute_text`] takes plain
/// text and quotes it.
///
/// # Examples
///
/// ```
/// use cpe::{Attribute, CpeBuilder, Part};
///
/// let cpe = CpeBuilder::new()
///     .part(Part::Application)
///     .vendor("microsoft")
///     .product("internet_explorer")
///     .attribute_text(Attribute::Version, "8.0.6001")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     cpe.to_formatted_string(),
///     "cpe:2.3:a:microsoft:internet_explorer:8.0.6001:*:*:*:*:*:*:*"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpeBuilder {
    part: Part,
    values: [String; 10],
}

impl Default for CpeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CpeBuilder {
    /// Creates a builder with every attribute set to `ANY`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            part: Part::Any,
            values: std::array::from_fn(|_| LogicalValue::Any.abbreviation().to_string()),
        }
    }

    /// Sets the part.
    #[must_use]
    pub const fn part(mut self, part: Part) -> Self {
        self.part = part;
        self
    }

    /// Sets an attribute from well-formed text.
    #[must_use]
    pub fn attribute(mut self, attribute: Attribute, well_formed: impl Into<String>) -> Self {
        self.values[attribute.index()] = well_formed.into();
        self
    }

    /// Sets an attribute from plain text, quoting punctuation.
    ///
    /// The result is always literal text: `"*"` becomes `\*`, never `ANY`.
    /// Use [`CpeBuilder::logical`] for logical values.
    #[must_use]
    pub fn attribute_text(self, attribute: Attribute, text: &str) -> Self {
        self.attribute(attribute, convert::to_well_formed(text))
    }

    /// Sets an attribute to a logical value.
    #[must_use]
    pub fn logical(self, attribute: Attribute, value: LogicalValue) -> Self {
        self.attribute(attribute, value.abbreviation())
    }

    /// Sets the vendor from well-formed text.
    #[must_use]
    pub fn vendor(self, value: impl Into<String>) -> Self {
        self.attribute(Attribute::Vendor, value)
    }

    /// Sets the product from well-formed text.
    #[must_use]
    pub fn product(self, value: impl Into<String>) -> Self {
        self.attribute(Attribute::Product, value)
    }

    /// Sets the version from well-formed text.
    #[must_use]
    pub fn version(self, value: impl Into<String>) -> Self {
        self.attribute(Attribute::Version, value)
    }

    /// Sets the update from well-formed text.
    #[must_use]
    pub fn update(self, value: impl Into<String>) -> Self {
        self.attribute(Attribute::Update, value)
    }

    /// Sets the edition from well-formed text.
    #[must_use]
    pub fn edition(self, value: impl Into<String>) -> Self {
        self.attribute(Attribute::Edition, value)
    }

    /// Sets the language from well-formed text.
    #[must_use]
    pub fn language(self, value: impl Into<String>) -> Self {
        self.attribute(Attribute::Language, value)
    }

    /// Sets the software edition from well-formed text.
    #[must_use]
    pub fn sw_edition(self, value: impl Into<String>) -> Self {
        self.attribute(Attribute::SwEdition, value)
    }

    /// Sets the target software from well-formed text.
    #[must_use]
    pub fn target_sw(self, value: impl Into<String>) -> Self {
        self.attribute(Attribute::TargetSw, value)
    }

    /// Sets the target hardware from well-formed text.
    #[must_use]
    pub fn target_hw(self, value: impl Into<String>) -> Self {
        self.attribute(Attribute::TargetHw, value)
    }

    /// Sets the other attribute from well-formed text.
    #[must_use]
    pub fn other(self, value: impl Into<String>) -> Self {
        self.attribute(Attribute::Other, value)
    }

    /// Builds the [`Cpe`].
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first attribute that is not well
    /// formed.
    pub fn build(&self) -> Result<Cpe, ValidationError> {
        Cpe::from_values(self.part, self.values.each_ref().map(String::as_str))
    }
}

impl From<&Cpe> for CpeBuilder {
    fn from(cpe: &Cpe) -> Self {
        let mut builder = Self::new().part(cpe.part());
        for (attribute, value) in cpe.attributes() {
            builder = builder.attribute(attribute, value);
        }
        builder
    }
}
