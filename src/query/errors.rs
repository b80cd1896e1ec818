//! Error types for query parameter building.
//!
//! Every failure here is local and deterministic: it is raised before a
//! request exists, never retried, and always names the field and the
//! logical operation (e.g. `Products.List`) so the call site can be found.
//!
//! # Example
//!
//! ```rust
//! use ordercloud_query::query::{build_query_params, ListOptions, OptionValue, QueryError};
//!
//! let options = ListOptions::new().filter("X", OptionValue::Null);
//!
//! match build_query_params(&options, "Any.Op") {
//!     Err(QueryError::NullFilter { field, operation }) => {
//!         assert_eq!(field, "X");
//!         assert_eq!(operation, "Any.Op");
//!     }
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

use thiserror::Error;

/// Error type for building and encoding query parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A non-filter option was explicitly `null`.
    ///
    /// `null` is ambiguous with "unset"; leave the option out (or pass
    /// [`OptionValue::Undefined`](crate::query::OptionValue::Undefined)) instead.
    #[error("Required parameter {field} was null or undefined when calling {operation}.")]
    MissingParameter {
        /// The offending option name.
        field: String,
        /// The logical operation, e.g. `Products.List`.
        operation: String,
    },

    /// A filter value was explicitly `null`.
    #[error("Null is not a valid filter value for '{field}' when calling {operation}. To filter on the absence of a value use the string '!*' instead.")]
    NullFilter {
        /// The offending filter field.
        field: String,
        /// The logical operation, e.g. `Products.List`.
        operation: String,
    },

    /// The reserved `filters` option was given something other than a map.
    #[error("The 'filters' option passed to {operation} must be a map of field names to values.")]
    InvalidFilters {
        /// The logical operation, e.g. `Products.List`.
        operation: String,
    },

    /// An option value has a shape that cannot be rendered into a query string.
    #[error("Unsupported value for option '{field}': {reason}")]
    UnsupportedValue {
        /// The offending option name.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A percent-encoded component did not decode to valid UTF-8.
    #[error("Invalid percent-encoding in '{input}'")]
    InvalidEncoding {
        /// The component that failed to decode.
        input: String,
    },
}

impl QueryError {
    /// Returns the operation name carried by this error, if any.
    #[must_use]
    pub fn operation(&self) -> Option<&str> {
        match self {
            Self::MissingParameter { operation, .. }
            | Self::NullFilter { operation, .. }
            | Self::InvalidFilters { operation } => Some(operation),
            Self::UnsupportedValue { .. } | Self::InvalidEncoding { .. } => None,
        }
    }
}
