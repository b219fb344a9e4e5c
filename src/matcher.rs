//! Attribute comparison with CPE wildcard semantics.
//!
//! Comparison is asymmetric. The left operand is the pattern and may use the
//! logical values to widen the match; the right operand is the candidate.
//! A wildcard on the right never widens a concrete pattern, so
//! `compare_attributes("apache", "*")` is false while
//! `compare_attributes("*", "apache")` is true.
//!
//! `ANY` compared with `NA` is undefined in the CPE name matching
//! specification. Here `ANY` on the left matches `NA`.

use crate::logical_value::LogicalValue;
use crate::part::Part;

/// Compares two part values, `left` being the pattern.
///
/// # Examples
///
/// ```
/// use cpe::{matcher, Part};
///
/// assert!(matcher::compare_parts(Part::Any, Part::Na));
/// assert!(matcher::compare_parts(Part::Application, Part::Application));
/// assert!(!matcher::compare_parts(Part::Application, Part::Any));
/// assert!(!matcher::compare_parts(Part::Na, Part::Any));
/// ```
#[must_use]
pub fn compare_parts(left: Part, right: Part) -> bool {
    left == right || left == Part::Any
}

/// Compares two well-formed attribute values, `left` being the pattern.
///
/// Text is compared ignoring ASCII case. The checks run in a fixed order:
///
/// 1. equal values match;
/// 2. an `ANY` pattern matches everything, `NA` included;
/// 3. an `NA` pattern matches nothing else;
/// 4. an `NA` candidate is only matched by an equal pattern;
/// 5. an `ANY` candidate is only matched by an equal pattern;
/// 6. anything else does not match.
///
/// # Examples
///
/// ```
/// use cpe::matcher;
///
/// assert!(matcher::compare_attributes("Apache", "apache"));
/// assert!(matcher::compare_attributes("*", "-"));
/// assert!(!matcher::compare_attributes("-", "*"));
/// assert!(!matcher::compare_attributes("apache", "*"));
/// ```
#[must_use]
pub fn compare_attributes(left: &str, right: &str) -> bool {
    if left.eq_ignore_ascii_case(right) {
        return true;
    }
    if LogicalValue::Any.is(left) {
        return true;
    }
    if LogicalValue::Na.is(left) {
        return false;
    }
    if LogicalValue::Na.is(right) {
        return false;
    }
    if LogicalValue::Any.is(right) {
        return false;
    }
    false
}
