//! Resource path building.
//!
//! Paths are templates with `{name}` placeholders, e.g.
//! `buyers/{buyerID}/users/{userID}`. Identifiers are percent-encoded with
//! the same codec as query values, so IDs containing `/`, `+` or spaces
//! stay in a single path segment.
//!
//! # Example
//!
//! ```rust
//! use ordercloud_query::rest::{build_path, require, Operation};
//!
//! const GET_USER: Operation = Operation::new("Users", "Get");
//!
//! let buyer_id = require("buyerID", Some("acme"), GET_USER).unwrap();
//! let user_id = require("userID", Some("j smith"), GET_USER).unwrap();
//!
//! let path = build_path(
//!     "buyers/{buyerID}/users/{userID}",
//!     &[("buyerID", buyer_id), ("userID", user_id)],
//! );
//! assert_eq!(path, "buyers/acme/users/j%20smith");
//! ```

use std::fmt::Display;

use crate::query::{encode_value, QueryError};
use crate::rest::Operation;

/// Builds a path from a template by interpolating encoded IDs.
///
/// Placeholders without a matching ID are left untouched.
#[must_use]
pub fn build_path<V: Display>(template: &str, ids: &[(&str, V)]) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        let encoded = encode_path_segment(&value.to_string());
        result = result.replace(&placeholder, &encoded);
    }

    result
}

/// Unwraps a required call parameter.
///
/// # Errors
///
/// Returns [`QueryError::MissingParameter`] naming `field` and `operation`
/// when the value is `None`.
pub fn require<T>(field: &str, value: Option<T>, operation: Operation) -> Result<T, QueryError> {
    value.ok_or_else(|| QueryError::MissingParameter {
        field: field.to_string(),
        operation: operation.to_string(),
    })
}

/// `/` and `?` are kept literal by the value codec but would split or end
/// a path, so they are escaped here.
fn encode_path_segment(raw: &str) -> String {
    encode_value(raw).replace('/', "%2F").replace('?', "%3F")
}
