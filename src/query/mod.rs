//! Query and filter parameter encoding for list operations.
//!
//! This module turns a structured options bag into the query string of a
//! list request:
//!
//! - **[`ListOptions`]**: search, sort, paging, arbitrary options and a [`Filters`] map
//! - **[`build_query_params`]**: validates options and produces ordered [`QueryParams`]
//! - **[`QueryParams`]**: ordered multi-map with repeated keys allowed
//! - **Codec**: [`encode_key`], [`encode_value`] and [`decode_component`]
//! - **[`QueryError`]**: typed failures naming the field and operation
//!
//! # Filter expressions
//!
//! Filter values are strings interpreted by the API:
//!
//! | Value             | Meaning                                  |
//! |-------------------|------------------------------------------|
//! | `Smith`           | equals                                   |
//! | `!Smith`          | not equal                                |
//! | `Smith*`          | starts with (`*` is a wildcard)          |
//! | `Smith\|Jones`    | either value                             |
//! | `>2020-04-20`     | greater than (also `<`, `>=`, `<=`)      |
//! | `!*`              | field has no value                       |
//!
//! Passing an array for one field repeats the key, and every position must match.
//!
//! # Example
//!
//! ```rust
//! use ordercloud_query::query::ListOptions;
//!
//! let query = ListOptions::new()
//!     .filter("LastName", "Smith*|*Jones")
//!     .filter("xp.Color", vec!["!red", "!blue"])
//!     .to_query_params("Users.List")
//!     .unwrap()
//!     .to_query_string();
//!
//! assert_eq!(query, "LastName=Smith*%7C*Jones&xp.Color=!red&xp.Color=!blue");
//! ```

mod builder;
mod codec;
mod errors;
mod options;
mod params;

pub use builder::{build_query_params, FILTERS_KEY};
pub use codec::{decode_component, encode_key, encode_value};
pub use errors::QueryError;
pub use options::{Filters, ListOptions, OptionValue, Scalar};
pub use params::QueryParams;

// The builder holds no state; everything it touches must be shareable.
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ListOptions>();
    assert_send_sync::<QueryParams>();
    assert_send_sync::<QueryError>();
};
