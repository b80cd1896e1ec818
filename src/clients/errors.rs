//! Error types for request shaping.
//!
//! Every error here is raised before any network I/O: the request either
//! shapes cleanly or the call fails synchronously.
//!
//! # Example
//!
//! ```rust
//! use ordercloud_query::clients::{ApiRequest, HttpMethod, RequestError};
//!
//! let result = ApiRequest::builder(HttpMethod::Get, "/").build();
//! assert!(matches!(result, Err(RequestError::InvalidPath { .. })));
//! ```

use thiserror::Error;

use crate::query::QueryError;

/// Error returned when a request cannot be shaped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The resource path is empty.
    #[error("Invalid resource path '{path}'. Paths must name a resource without a query string or fragment, e.g. 'products'.")]
    InvalidPath {
        /// The path that was provided.
        path: String,
    },

    /// The assembled URL could not be parsed.
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
        /// The parser's explanation.
        reason: String,
    },

    /// The query parameters could not be built.
    #[error(transparent)]
    Query(#[from] QueryError),
}
