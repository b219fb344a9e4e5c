//! Kani Arbitrary implementations and proof harnesses for the matcher and
//! validator.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{Part, convert, matcher, validate};

/// Characters the value generator draws from: plain, wildcard, escape,
/// punctuation and a logical-value abbreviation.
const VALUE_CHARS: &[u8] = b"ab_*?\\.-:";

impl kani::Arbitrary for Part {
    fn any() -> Self {
        let idx: usize = kani::any();
        Part::ALL[idx % Part::ALL.len()]
    }
}

/// Generate a short arbitrary value (0-4 chars) over [`VALUE_CHARS`].
fn arbitrary_value() -> String {
    let len: usize = kani::any();
    let len = len % 5;
    (0..len)
        .map(|_| {
            let idx: usize = kani::any();
            VALUE_CHARS[idx % VALUE_CHARS.len()] as char
        })
        .collect()
}

#[kani::proof]
fn any_part_matches_every_part() {
    let right: Part = kani::any();
    assert!(matcher::compare_parts(Part::Any, right));
}

#[kani::proof]
fn concrete_part_never_matches_any() {
    let left: Part = kani::any();
    kani::assume(left.is_concrete());
    assert!(!matcher::compare_parts(left, Part::Any));
}

#[kani::proof]
#[kani::unwind(6)]
fn any_attribute_matches_every_value() {
    let right = arbitrary_value();
    assert!(matcher::compare_attributes("*", &right));
}

#[kani::proof]
#[kani::unwind(6)]
fn validator_never_panics() {
    let value = arbitrary_value();
    let _ = validate::component(&value);
}

#[kani::proof]
#[kani::unwind(6)]
fn valid_values_encode_as_uri() {
    let value = arbitrary_value();
    kani::assume(validate::component(&value).is_valid());
    assert!(convert::to_uri_token(&value).is_ok());
}
