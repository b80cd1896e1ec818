//! Request shaping for OrderCloud API calls.
//!
//! This module assembles what a transport needs (method, URL with an
//! encoded query string, headers) without sending anything itself.
//!
//! - [`ApiRequest`]: A shaped request
//! - [`ApiRequestBuilder`]: Builder for [`ApiRequest`]
//! - [`HttpMethod`]: Supported HTTP methods
//! - [`RequestError`]: Failures raised while shaping
//!
//! # Example
//!
//! ```rust,ignore
//! use ordercloud_query::clients::ApiRequest;
//! use ordercloud_query::query::ListOptions;
//! use ordercloud_query::rest::Operation;
//! use ordercloud_query::{AccessToken, OrderCloudConfig};
//!
//! const LIST_PRODUCTS: Operation = Operation::new("Me", "ListProducts");
//!
//! let config = OrderCloudConfig::default();
//! let options = ListOptions::new().filter("xp.Featured", true);
//!
//! let mut request = ApiRequest::list("me/products", &options, LIST_PRODUCTS)?;
//! request.access_token = Some(AccessToken::new(token)?);
//!
//! let response = request
//!     .to_reqwest(&reqwest::Client::new(), &config)?
//!     .send()
//!     .await?;
//! ```

mod errors;
mod http_request;

pub use errors::RequestError;
pub use http_request::{ApiRequest, ApiRequestBuilder, HttpMethod, SDK_VERSION};
