//! Conversions between the well-formed form and the textual bindings.
//!
//! Every function here is pure. The converters assume their input passed
//! [`validate::component`](crate::validate::component); only
//! [`to_uri_token`] checks its input, because the URI binding is the one
//! encoding that cannot carry arbitrary text.

use std::fmt::Write as _;

use crate::constants::{ESCAPE, WILDCARD_MULTI, WILDCARD_SINGLE};
use crate::error::EncodingError;
use crate::logical_value::LogicalValue;

/// Removes the escaping backslashes from a well-formed value.
///
/// The logical values `*` and `-` pass through unchanged.
///
/// # Examples
///
/// ```
/// use cpe::convert;
///
/// assert_eq!(convert::to_display_text("8\\.0\\.6001"), "8.0.6001");
/// assert_eq!(convert::to_display_text("at\\&t"), "at&t");
/// assert_eq!(convert::to_display_text("*"), "*");
/// ```
#[must_use]
pub fn to_display_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE {
            if let Some(quoted) = chars.next() {
                out.push(quoted);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Quotes human-readable text into the well-formed form.
///
/// Every ASCII character other than letters, digits and `_` gains a
/// backslash, so `*` and `-` become literal text rather than logical
/// values. Non-ASCII characters are copied as-is and will be rejected by the
/// validator.
///
/// # Examples
///
/// ```
/// use cpe::convert;
///
/// assert_eq!(convert::to_well_formed("8.0.6001"), "8\\.0\\.6001");
/// assert_eq!(convert::to_well_formed("internet_explorer"), "internet_explorer");
/// ```
#[must_use]
pub fn to_well_formed(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        if c.is_ascii() && !c.is_ascii_alphanumeric() && c != '_' {
            out.push(ESCAPE);
        }
        out.push(c);
    }
    out
}

/// Binds a well-formed value into a CPE 2.3 formatted string token.
///
/// The well-formed form already satisfies the formatted string grammar;
/// the only rewrite is that quoted `.`, `-` and `_` lose their backslash,
/// which the formatted string does not require. An empty value binds as
/// `*`.
///
/// # Examples
///
/// ```
/// use cpe::convert;
///
/// assert_eq!(convert::to_formatted_string_token("8\\.0"), "8.0");
/// assert_eq!(convert::to_formatted_string_token("at\\&t"), "at\\&t");
/// assert_eq!(convert::to_formatted_string_token("-"), "-");
/// ```
#[must_use]
pub fn to_formatted_string_token(value: &str) -> String {
    if value.is_empty() {
        return LogicalValue::Any.abbreviation().to_string();
    }
    if LogicalValue::from_abbreviation(value).is_some() {
        return value.to_string();
    }

    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != ESCAPE {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(quoted @ ('.' | '-' | '_')) => out.push(quoted),
            Some(quoted) => {
                out.push(ESCAPE);
                out.push(quoted);
            }
            None => out.push(ESCAPE),
        }
    }
    out
}

/// Binds a well-formed value into a CPE 2.2 URI token.
///
/// `ANY` and the empty value bind to the empty token and `NA` stays `-`.
/// Letters, digits and `_` are copied; quoted `.`, `-` and `_` are copied
/// without their backslash; other quoted punctuation is percent-encoded in
/// lowercase hex. Unquoted `?` and `*` use the 2.2 extension codes `%01`
/// and `%02`.
///
/// # Errors
///
/// Returns `EncodingError` if the value ends with an unquoted backslash, or
/// contains bare punctuation, whitespace or non-ASCII text. Neither can
/// occur for a validated value.
///
/// # Examples
///
/// ```
/// use cpe::convert;
///
/// assert_eq!(convert::to_uri_token("8\\.0").unwrap(), "8.0");
/// assert_eq!(convert::to_uri_token("at\\&t").unwrap(), "at%26t");
/// assert_eq!(convert::to_uri_token("*").unwrap(), "");
/// assert_eq!(convert::to_uri_token("beta*").unwrap(), "beta%02");
/// ```
pub fn to_uri_token(value: &str) -> Result<String, EncodingError> {
    if is_any_or_empty(value) {
        return Ok(String::new());
    }
    if LogicalValue::Na.is(value) {
        return Ok(value.to_string());
    }

    let mut out = String::with_capacity(value.len() + 8);
    let mut chars = value.chars().enumerate();
    while let Some((position, c)) = chars.next() {
        match c {
            ESCAPE => match chars.next() {
                Some((_, quoted @ ('.' | '-' | '_'))) => out.push(quoted),
                Some((_, quoted)) if quoted.is_ascii_punctuation() => {
                    percent_encode(&mut out, quoted);
                }
                Some((quoted_at, quoted)) => {
                    return Err(EncodingError::UnsupportedChar {
                        value: value.to_string(),
                        char: quoted,
                        position: quoted_at,
                    });
                }
                None => {
                    return Err(EncodingError::DanglingEscape {
                        value: value.to_string(),
                    });
                }
            },
            WILDCARD_SINGLE => out.push_str("%01"),
            WILDCARD_MULTI => out.push_str("%02"),
            c if c.is_ascii_alphanumeric() || c == '_' => out.push(c),
            c => {
                return Err(EncodingError::UnsupportedChar {
                    value: value.to_string(),
                    char: c,
                    position,
                });
            }
        }
    }
    Ok(out)
}

/// Returns true if the value is empty or the `ANY` abbreviation.
///
/// Both mean "unspecified" in the 2.2 binding, where an omitted component
/// defaults to the wildcard.
#[must_use]
pub fn is_any_or_empty(value: &str) -> bool {
    value.is_empty() || LogicalValue::Any.is(value)
}

fn percent_encode(out: &mut String, c: char) {
    // `c` is ASCII punctuation, so a single byte always suffices.
    let _ = write!(out, "%{:02x}", u32::from(c));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_text_unquotes() {
        assert_eq!(to_display_text("vendor"), "vendor");
        assert_eq!(to_display_text("a\\\\b"), "a\\b");
        assert_eq!(to_display_text("\\*"), "*");
        assert_eq!(to_display_text("-"), "-");
        assert_eq!(to_display_text("beta*"), "beta*");
    }

    #[test]
    fn well_formed_quotes_punctuation() {
        assert_eq!(to_well_formed("at&t"), "at\\&t");
        assert_eq!(to_well_formed("*"), "\\*");
        assert_eq!(to_well_formed("-"), "\\-");
        assert_eq!(to_well_formed("a b"), "a\\ b");
    }

    #[test]
    fn formatted_string_token_keeps_quoting() {
        assert_eq!(to_formatted_string_token("vendor"), "vendor");
        assert_eq!(to_formatted_string_token("*"), "*");
        assert_eq!(to_formatted_string_token(""), "*");
        assert_eq!(to_formatted_string_token("a\\-b\\_c"), "a-b_c");
        assert_eq!(to_formatted_string_token("a\\:b"), "a\\:b");
        assert_eq!(to_formatted_string_token("*beta"), "*beta");
    }

    #[test]
    fn uri_token_logical_values() {
        assert_eq!(to_uri_token("").unwrap(), "");
        assert_eq!(to_uri_token("*").unwrap(), "");
        assert_eq!(to_uri_token("-").unwrap(), "-");
    }

    #[test]
    fn uri_token_percent_encodes() {
        assert_eq!(to_uri_token("a\\!b").unwrap(), "a%21b");
        assert_eq!(to_uri_token("a\\~b").unwrap(), "a%7eb");
        assert_eq!(to_uri_token("a\\:b").unwrap(), "a%3ab");
        assert_eq!(to_uri_token("a\\\\b").unwrap(), "a%5cb");
        assert_eq!(to_uri_token("\\*").unwrap(), "%2a");
        assert_eq!(to_uri_token("a\\-b\\.c").unwrap(), "a-b.c");
    }

    #[test]
    fn uri_token_wildcards() {
        assert_eq!(to_uri_token("??beta").unwrap(), "%01%01beta");
        assert_eq!(to_uri_token("*beta").unwrap(), "%02beta");
    }

    #[test]
    fn uri_token_rejects_unvalidated_input() {
        assert_eq!(
            to_uri_token("abc\\"),
            Err(EncodingError::DanglingEscape {
                value: "abc\\".to_string()
            })
        );
        assert_eq!(
            to_uri_token("1.0"),
            Err(EncodingError::UnsupportedChar {
                value: "1.0".to_string(),
                char: '.',
                position: 1,
            })
        );
        assert!(matches!(
            to_uri_token("a\\\u{e9}"),
            Err(EncodingError::UnsupportedChar { position: 2, .. })
        ));
    }

    #[test]
    fn any_or_empty() {
        assert!(is_any_or_empty(""));
        assert!(is_any_or_empty("*"));
        assert!(!is_any_or_empty("-"));
        assert!(!is_any_or_empty("*beta"));
    }
}
