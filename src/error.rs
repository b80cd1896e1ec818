//! Error types for SDK configuration.
//!
//! Configuration constructors return `Result<T, ConfigError>` so invalid
//! values are rejected when the configuration is assembled, not when the
//! first request is shaped.
//!
//! # Example
//!
//! ```rust
//! use ordercloud_query::{ApiUrl, ConfigError};
//!
//! let result = ApiUrl::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidApiUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building an [`OrderCloudConfig`](crate::OrderCloudConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The API base URL is not an absolute http(s) URL.
    #[error("Invalid API URL '{url}'. Please provide an absolute URL with scheme (e.g., 'https://api.ordercloud.io').")]
    InvalidApiUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The API version string is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'v<number>' (e.g., 'v1').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Obtain a token before attaching it to a request.")]
    EmptyAccessToken,
}
