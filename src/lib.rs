//! # OrderCloud Query
//!
//! Query and filter parameter encoding for the OrderCloud e-commerce REST
//! API, with the small amount of request shaping every resource method
//! shares.
//!
//! ## Overview
//!
//! This crate provides:
//! - Structured list options via [`ListOptions`] and [`Filters`]
//! - Deterministic, ordered query building via [`build_query_params`]
//! - A percent-encoding codec that keeps filter syntax intact and always
//!   sends `+` as `%2B`
//! - Typed errors ([`QueryError`]) naming the field and the operation
//! - Explicit, immutable configuration via [`OrderCloudConfig`]
//! - Request shaping via [`ApiRequest`], handed to `reqwest` unsent
//!
//! ## Quick Start
//!
//! ```rust
//! use ordercloud_query::{build_query_params, ListOptions};
//!
//! let options = ListOptions::new()
//!     .search_on(["ID", "Name", "xp.Color"])
//!     .filter("LastName", "Smith*")
//!     .filter("xp.Color", vec!["!red", "!blue"]);
//!
//! let params = build_query_params(&options, "Products.List").unwrap();
//! assert_eq!(
//!     params.to_query_string(),
//!     "searchOn=ID,Name,xp.Color&LastName=Smith*&xp.Color=!red&xp.Color=!blue"
//! );
//! ```
//!
//! ## Errors
//!
//! Explicit nulls are usage errors, raised before any request exists:
//!
//! ```rust
//! use ordercloud_query::{build_query_params, ListOptions, OptionValue, QueryError};
//!
//! let options = ListOptions::new().filter("X", OptionValue::Null);
//! let error = build_query_params(&options, "Any.Op").unwrap_err();
//!
//! assert!(matches!(error, QueryError::NullFilter { .. }));
//! assert!(error.to_string().contains("'!*'"));
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Invalid options abort the build with no partial result
//! - **Pure**: Building a query does no I/O and shares nothing between calls
//! - **Thread-safe**: All types are `Send + Sync`

pub mod clients;
pub mod config;
pub mod error;
pub mod query;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, ApiUrl, ApiVersion, OrderCloudConfig, OrderCloudConfigBuilder};
pub use error::ConfigError;

// Re-export the query core
pub use query::{
    build_query_params, decode_component, encode_key, encode_value, Filters, ListOptions,
    OptionValue, QueryError, QueryParams, Scalar, FILTERS_KEY,
};

// Re-export request shaping types
pub use clients::{ApiRequest, ApiRequestBuilder, HttpMethod, RequestError};
pub use rest::Operation;
