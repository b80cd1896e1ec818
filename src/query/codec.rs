//! Percent-encoding for query keys and values.
//!
//! The base encoder is [`urlencoding::encode`], which escapes everything
//! outside the RFC 3986 unreserved set. The API's standard component
//! encoding keeps a wider set of sub-delimiters literal (`,` separates
//! `searchOn` fields, `!` and `*` carry filter semantics), so those are
//! restored after encoding.
//!
//! `+` is never restored. Form decoders turn a literal `+` into a space,
//! which silently rewrites filter values such as `"C++"` or phone numbers
//! like `"+1 555"`. It always leaves this module as `%2B`.
//!
//! # Example
//!
//! ```rust
//! use ordercloud_query::query::{decode_component, encode_value};
//!
//! assert_eq!(encode_value("Smith*|*Jones"), "Smith*%7C*Jones");
//! assert_eq!(encode_value(">2020-04-20"), "%3E2020-04-20");
//! assert_eq!(encode_value("a+b"), "a%2Bb");
//! assert_eq!(decode_component("a%2Bb").unwrap(), "a+b");
//! ```

use std::borrow::Cow;

use crate::query::QueryError;

/// Characters kept literal in values after base encoding.
const VALUE_LITERALS: &[char] = &[
    '!', '*', '\'', '(', ')', '@', ':', '$', ',', ';', '=', '?', '/',
];

/// Characters kept literal in keys. `=` is excluded so a key can never
/// be split by the receiving form parser.
const KEY_LITERALS: &[char] = &['!', '*', '\'', '(', ')', '@', ':', '$', ',', ';', '?', '/'];

/// Encodes a query parameter key.
#[must_use]
pub fn encode_key(raw: &str) -> String {
    encode_with(raw, KEY_LITERALS)
}

/// Encodes a query parameter value.
#[must_use]
pub fn encode_value(raw: &str) -> String {
    encode_with(raw, VALUE_LITERALS)
}

/// Decodes a percent-encoded key or value.
///
/// Unlike form decoding, `+` is kept as `+`. Everything produced by
/// [`encode_key`] and [`encode_value`] decodes back to its input.
///
/// # Errors
///
/// Returns [`QueryError::InvalidEncoding`] if the decoded bytes are not
/// valid UTF-8.
pub fn decode_component(encoded: &str) -> Result<String, QueryError> {
    urlencoding::decode(encoded)
        .map(Cow::into_owned)
        .map_err(|_| QueryError::InvalidEncoding {
            input: encoded.to_string(),
        })
}

fn encode_with(raw: &str, literals: &[char]) -> String {
    let mut encoded = String::with_capacity(raw.len());
    let mut buf = [0u8; 4];

    for c in raw.chars() {
        if literals.contains(&c) {
            encoded.push(c);
        } else {
            encoded.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }

    encoded
}
