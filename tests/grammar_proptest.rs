//! Property-based tests validating the attribute grammar, bindings and
//! matcher.
//!
//! These tests generate well-formed attribute values according to the
//! grammar in `grammar.abnf` and check that construction, binding and
//! matching behave consistently on them.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;

use cpe::{Attribute, Cpe, CpeBuilder, Part, Status, convert, validate};

/// Strategies for generating grammar-conformant values.
mod strategies {
    use super::*;

    /// Characters allowed unquoted in a value body
    const PLAIN: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";

    /// Punctuation that must be quoted in a value body
    const PUNCTUATION: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^`{|}~";

    /// Printable ASCII without space, used as free text for the quoting
    /// converter
    const PRINTABLE: &[u8] =
        b"!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

    /// Generate one unquoted body character
    pub fn plain_char() -> impl Strategy<Value = String> {
        prop::sample::select(PLAIN.to_vec()).prop_map(|c| (c as char).to_string())
    }

    /// Generate one quoted punctuation character
    pub fn quoted_char() -> impl Strategy<Value = String> {
        prop::sample::select(PUNCTUATION.to_vec()).prop_map(|c| format!("\\{}", c as char))
    }

    /// Generate a body of letters, digits and underscores only (1-12 chars)
    pub fn plain_body() -> impl Strategy<Value = String> {
        prop::collection::vec(plain_char(), 1..=12).prop_map(|chars| chars.concat())
    }

    /// Generate a body mixing plain and quoted characters (1-12 tokens)
    pub fn body() -> impl Strategy<Value = String> {
        prop::collection::vec(prop_oneof![3 => plain_char(), 1 => quoted_char()], 1..=12)
            .prop_map(|tokens| tokens.concat())
            .prop_filter("lone quoted hyphen collides with NA", |b| b != "\\-")
    }

    /// Generate a well-formed value, with optional boundary wildcards
    pub fn value() -> impl Strategy<Value = String> {
        prop_oneof![
            1 => Just("*".to_string()),
            1 => Just("-".to_string()),
            6 => body(),
            1 => body().prop_map(|b| format!("*{b}")),
            1 => body().prop_map(|b| format!("{b}*")),
            1 => (1..=3usize, body()).prop_map(|(n, b)| format!("{}{b}", "?".repeat(n))),
            1 => (body(), 1..=3usize).prop_map(|(b, n)| format!("{b}{}", "?".repeat(n))),
        ]
    }

    /// Generate any part
    pub fn part() -> impl Strategy<Value = Part> {
        prop::sample::select(Part::ALL.to_vec())
    }

    /// Generate ten well-formed values
    pub fn values() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(value(), 10)
    }

    /// Generate a valid CPE
    pub fn name() -> impl Strategy<Value = Cpe> {
        (part(), values()).prop_map(|(part, values)| build(part, &values))
    }

    /// Generate printable ASCII text (1-16 chars)
    pub fn text() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(PRINTABLE.to_vec()), 1..=16)
            .prop_map(|chars| chars.into_iter().map(|c| c as char).collect())
    }

    /// Build a CPE from ten generated values
    pub fn build(part: Part, values: &[String]) -> Cpe {
        Attribute::ALL
            .into_iter()
            .zip(values)
            .fold(CpeBuilder::new().part(part), |b, (attribute, value)| {
                b.attribute(attribute, value.as_str())
            })
            .build()
            .expect("generated values are well formed")
    }
}

fn hash_of(cpe: &Cpe) -> u64 {
    let mut hasher = DefaultHasher::new();
    cpe.hash(&mut hasher);
    hasher.finish()
}

mod validator_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn generated_values_are_valid(v in value()) {
            let status = validate::component(&v);
            prop_assert!(status.is_valid(), "{} rejected: {}", v, status);
        }

        #[test]
        fn embedded_wildcard_is_rejected(head in plain_body(), tail in plain_body()) {
            let v = format!("{head}*{tail}");
            prop_assert!(
                matches!(validate::component(&v), Status::EmbeddedWildcard { char: '*', .. }),
                "{} accepted", v
            );
        }

        #[test]
        fn quoted_text_is_valid(t in text()) {
            prop_assume!(t != "-");
            let wf = convert::to_well_formed(&t);
            prop_assert!(validate::component(&wf).is_valid(), "{} rejected", wf);
        }

        #[test]
        fn quoting_roundtrips_through_display_text(t in text()) {
            let wf = convert::to_well_formed(&t);
            prop_assert_eq!(convert::to_display_text(&wf), t);
        }

        #[test]
        fn valid_values_encode_as_uri(v in value()) {
            prop_assert!(convert::to_uri_token(&v).is_ok());
        }
    }
}

mod construction_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn generated_names_construct(part in part(), values in values()) {
            let result = Cpe::new(
                part, &values[0], &values[1], &values[2], &values[3], &values[4],
                &values[5], &values[6], &values[7], &values[8], &values[9],
            );
            prop_assert!(result.is_ok(), "rejected: {:?}", result.err());
        }

        #[test]
        fn embedded_wildcard_rejected_per_attribute(
            index in 0..10usize,
            head in plain_body(),
            tail in plain_body(),
        ) {
            let attribute = Attribute::ALL[index];
            let err = CpeBuilder::new()
                .attribute(attribute, format!("{head}*{tail}"))
                .build()
                .unwrap_err();
            prop_assert_eq!(err.attribute, attribute);
        }

        #[test]
        fn plain_values_appear_verbatim(
            part in part(),
            values in prop::collection::vec(plain_body(), 10),
        ) {
            let cpe = build(part, &values);
            let expected = format!("cpe:2.3:{}:{}", part, values.join(":"));
            prop_assert_eq!(cpe.to_formatted_string(), expected);
        }

        #[test]
        fn well_formed_values_are_kept(part in part(), values in values()) {
            let cpe = build(part, &values);
            for (attribute, value) in cpe.attributes() {
                prop_assert_eq!(value, values[attribute.index()].as_str());
            }
        }

        #[test]
        fn uri_is_always_encodable(generated in name()) {
            let uri = generated.to_uri().unwrap();
            prop_assert!(uri.starts_with("cpe:/"));
            prop_assert!(!uri.ends_with(':'));
        }

        #[test]
        fn equal_inputs_build_equal_names(part in part(), values in values()) {
            let a = build(part, &values);
            let b = build(part, &values);
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }
}

mod matcher_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn any_pattern_matches_everything(target in name()) {
            let pattern = CpeBuilder::new().build().unwrap();
            prop_assert!(pattern.matches(&target));
            prop_assert!(target.matched_by(&pattern));
        }

        #[test]
        fn matching_is_reflexive(generated in name()) {
            prop_assert!(generated.matches(&generated));
        }

        #[test]
        fn matched_by_swaps_operands(a in name(), b in name()) {
            prop_assert_eq!(a.matches(&b), b.matched_by(&a));
            prop_assert_eq!(b.matches(&a), a.matched_by(&b));
        }

        #[test]
        fn concrete_pattern_rejects_any_candidate(v in plain_body()) {
            let pattern = CpeBuilder::new().vendor(v.as_str()).build().unwrap();
            let candidate = CpeBuilder::new().build().unwrap();
            prop_assert!(!pattern.matches(&candidate));
        }
    }
}
