//! Request shaping for the OrderCloud API.
//!
//! An [`ApiRequest`] is everything the transport needs to send a call: the
//! method, the resource path, the ordered query parameters and the headers.
//! This module never sends anything. [`ApiRequest::to_reqwest`] hands a
//! prepared, unsent `reqwest::RequestBuilder` to the caller.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::RequestError;
use crate::config::{AccessToken, OrderCloudConfig};
use crate::query::{build_query_params, ListOptions, QueryParams};
use crate::rest::Operation;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP methods used by the OrderCloud API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A shaped request, ready to hand to a transport.
///
/// # Example
///
/// ```rust
/// use ordercloud_query::clients::ApiRequest;
/// use ordercloud_query::query::ListOptions;
/// use ordercloud_query::rest::Operation;
/// use ordercloud_query::OrderCloudConfig;
///
/// const LIST_ORDERS: Operation = Operation::new("Me", "ListOrders");
///
/// let options = ListOptions::new().filter("DateSubmitted", ">2020-04-20");
/// let request = ApiRequest::list("me/orders/outgoing", &options, LIST_ORDERS).unwrap();
///
/// let config = OrderCloudConfig::default();
/// assert_eq!(
///     request.url(&config),
///     "https://api.ordercloud.io/v1/me/orders/outgoing?DateSubmitted=%3E2020-04-20"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct ApiRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The resource path, relative to the versioned base path.
    pub path: String,
    /// Query parameters, in wire order.
    pub query: QueryParams,
    /// Bearer token for the `Authorization` header, if any.
    pub access_token: Option<AccessToken>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
    /// The logical operation that shaped this request.
    pub operation: Option<Operation>,
}

impl ApiRequest {
    /// Creates a new builder for constructing an `ApiRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> ApiRequestBuilder {
        ApiRequestBuilder::new(method, path)
    }

    /// Shapes a GET request for a list operation.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Query`] if the options are invalid and
    /// [`RequestError::InvalidPath`] if `path` is empty or carries a query string.
    pub fn list(
        path: impl Into<String>,
        options: &ListOptions,
        operation: Operation,
    ) -> Result<Self, RequestError> {
        let query = build_query_params(options, &operation.to_string())?;

        Self::builder(HttpMethod::Get, path)
            .query(query)
            .operation(operation)
            .build()
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidPath`] if the path is empty or carries
    /// its own query string or fragment.
    pub fn verify(&self) -> Result<(), RequestError> {
        let path = self.path.trim().trim_matches('/').trim();
        if path.is_empty() || path.contains(['?', '#']) {
            return Err(RequestError::InvalidPath {
                path: self.path.clone(),
            });
        }
        Ok(())
    }

    /// Returns the full URL, with the encoded query string if there is one.
    #[must_use]
    pub fn url(&self, config: &OrderCloudConfig) -> String {
        let path = self.path.trim_start_matches('/');
        if self.query.is_empty() {
            format!("{}/{path}", config.base_path())
        } else {
            format!("{}/{path}?{}", config.base_path(), self.query)
        }
    }

    /// Returns the headers for this request.
    ///
    /// Extra headers override the defaults.
    #[must_use]
    pub fn headers(&self, config: &OrderCloudConfig) -> HashMap<String, String> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}OrderCloud Query Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut headers = HashMap::new();
        headers.insert("User-Agent".to_string(), user_agent);
        headers.insert("Accept".to_string(), "application/json".to_string());

        if let Some(token) = &self.access_token {
            headers.insert("Authorization".to_string(), token.bearer());
        }

        // Header names are case-insensitive on the wire.
        if let Some(extra) = &self.extra_headers {
            for (key, value) in extra {
                headers.retain(|existing: &String, _| !existing.eq_ignore_ascii_case(key));
                headers.insert(key.clone(), value.clone());
            }
        }

        headers
    }

    /// Prepares an unsent `reqwest` request.
    ///
    /// The URL carries the query string as this crate encoded it, with one
    /// exception: the URL parser escapes a literal `'` as `%27` in http(s)
    /// queries, which decodes to the same value. `reqwest`'s own query
    /// serializer is not used, since it would encode the parameters a
    /// second time.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidUrl`] if the assembled URL does not parse.
    pub fn to_reqwest(
        &self,
        client: &reqwest::Client,
        config: &OrderCloudConfig,
    ) -> Result<reqwest::RequestBuilder, RequestError> {
        let url = self.url(config);
        let parsed = reqwest::Url::parse(&url).map_err(|e| RequestError::InvalidUrl {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        tracing::debug!(
            "Prepared {} request for {}",
            self.http_method,
            self.operation
                .map_or_else(|| self.path.clone(), |op| op.to_string())
        );

        let mut builder = client.request(self.http_method.as_reqwest(), parsed);
        for (key, value) in self.headers(config) {
            builder = builder.header(key, value);
        }

        Ok(builder)
    }
}

/// Builder for constructing [`ApiRequest`] instances.
#[derive(Debug)]
pub struct ApiRequestBuilder {
    http_method: HttpMethod,
    path: String,
    query: QueryParams,
    access_token: Option<AccessToken>,
    extra_headers: Option<HashMap<String, String>>,
    operation: Option<Operation>,
}

impl ApiRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            query: QueryParams::new(),
            access_token: None,
            extra_headers: None,
            operation: None,
        }
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.append(key, value);
        self
    }

    /// Sets the bearer token.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Records the logical operation shaping this request.
    #[must_use]
    pub const fn operation(mut self, operation: Operation) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Builds the [`ApiRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidPath`] if the path is empty or carries
    /// a query string or fragment.
    pub fn build(self) -> Result<ApiRequest, RequestError> {
        let request = ApiRequest {
            http_method: self.http_method,
            path: self.path,
            query: self.query,
            access_token: self.access_token,
            extra_headers: self.extra_headers,
            operation: self.operation,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiUrl;
    use crate::query::QueryError;

    const LIST_PRODUCTS: Operation = Operation::new("Products", "List");

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Patch.to_string(), "patch");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_builder_creates_get_request() {
        let request = ApiRequest::builder(HttpMethod::Get, "products")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "products");
        assert!(request.query.is_empty());
        assert!(request.access_token.is_none());
    }

    #[test]
    fn test_verify_rejects_empty_path() {
        for path in ["", "/", " / "] {
            assert!(matches!(
                ApiRequest::builder(HttpMethod::Get, path).build(),
                Err(RequestError::InvalidPath { .. })
            ));
        }
    }

    #[test]
    fn test_verify_rejects_query_and_fragment_in_path() {
        for path in ["products?x=1", "products#top", "/?"] {
            assert!(matches!(
                ApiRequest::builder(HttpMethod::Get, path).build(),
                Err(RequestError::InvalidPath { .. })
            ));
        }

        let options = ListOptions::new().page(2);
        assert!(matches!(
            ApiRequest::list("products?x=1", &options, LIST_PRODUCTS),
            Err(RequestError::InvalidPath { path }) if path == "products?x=1"
        ));
    }

    #[test]
    fn test_url_without_query() {
        let request = ApiRequest::builder(HttpMethod::Get, "/products/p1")
            .build()
            .unwrap();
        assert_eq!(
            request.url(&OrderCloudConfig::default()),
            "https://api.ordercloud.io/v1/products/p1"
        );
    }

    #[test]
    fn test_url_with_query_param() {
        let request = ApiRequest::builder(HttpMethod::Get, "products")
            .query_param("search", "C++")
            .build()
            .unwrap();
        let config = OrderCloudConfig::builder()
            .base_api_url(ApiUrl::new("https://sandboxapi.ordercloud.io").unwrap())
            .build();
        assert_eq!(
            request.url(&config),
            "https://sandboxapi.ordercloud.io/v1/products?search=C%2B%2B"
        );
    }

    #[test]
    fn test_list_builds_query_and_records_operation() {
        let options = ListOptions::new().search_on(["ID", "Name", "xp.Color"]);
        let request = ApiRequest::list("products", &options, LIST_PRODUCTS).unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.operation, Some(LIST_PRODUCTS));
        assert_eq!(request.query.to_query_string(), "searchOn=ID,Name,xp.Color");
    }

    #[test]
    fn test_list_propagates_query_errors() {
        let options = ListOptions::new().sort_by(crate::query::OptionValue::Null);
        let result = ApiRequest::list("products", &options, LIST_PRODUCTS);
        assert!(matches!(
            result,
            Err(RequestError::Query(QueryError::MissingParameter { field, .. })) if field == "sortBy"
        ));
    }

    #[test]
    fn test_list_null_filter_names_operation() {
        let options = ListOptions::new().filter("X", crate::query::OptionValue::Null);
        let result = ApiRequest::list("products", &options, LIST_PRODUCTS);
        assert_eq!(
            result.unwrap_err(),
            RequestError::Query(QueryError::NullFilter {
                field: "X".to_string(),
                operation: "Products.List".to_string(),
            })
        );
    }

    #[test]
    fn test_default_headers() {
        let request = ApiRequest::builder(HttpMethod::Get, "me")
            .build()
            .unwrap();
        let headers = request.headers(&OrderCloudConfig::default());

        assert_eq!(headers.get("Accept"), Some(&"application/json".to_string()));
        assert!(headers["User-Agent"].contains("OrderCloud Query Library v"));
        assert!(!headers.contains_key("Authorization"));
    }

    #[test]
    fn test_authorization_and_extra_headers() {
        let request = ApiRequest::builder(HttpMethod::Get, "me")
            .access_token(AccessToken::new("tok").unwrap())
            .header("Accept", "text/plain")
            .build()
            .unwrap();
        let config = OrderCloudConfig::builder()
            .user_agent_prefix("Storefront/2.1")
            .build();
        let headers = request.headers(&config);

        assert_eq!(headers.get("Authorization"), Some(&"Bearer tok".to_string()));
        assert_eq!(headers.get("Accept"), Some(&"text/plain".to_string()));
        assert!(headers["User-Agent"].starts_with("Storefront/2.1 | "));
    }

    #[test]
    fn test_extra_headers_override_defaults_case_insensitively() {
        let request = ApiRequest::builder(HttpMethod::Get, "me")
            .header("accept", "text/plain")
            .build()
            .unwrap();
        let headers = request.headers(&OrderCloudConfig::default());

        let accept: Vec<_> = headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case("accept"))
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(accept, vec!["text/plain"]);

        let prepared = request
            .to_reqwest(&reqwest::Client::new(), &OrderCloudConfig::default())
            .unwrap()
            .build()
            .unwrap();
        let sent: Vec<_> = prepared
            .headers()
            .get_all(reqwest::header::ACCEPT)
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(sent, vec!["text/plain"]);
    }

    #[test]
    fn test_to_reqwest_escapes_apostrophe_only() {
        let request = ApiRequest::builder(HttpMethod::Get, "users")
            .query_param("LastName", "O'Brien*")
            .build()
            .unwrap();
        assert_eq!(
            request.url(&OrderCloudConfig::default()),
            "https://api.ordercloud.io/v1/users?LastName=O'Brien*"
        );

        let prepared = request
            .to_reqwest(&reqwest::Client::new(), &OrderCloudConfig::default())
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(prepared.url().query(), Some("LastName=O%27Brien*"));
    }

    #[test]
    fn test_to_reqwest_keeps_encoded_query() {
        let options = ListOptions::new().filter("LastName", "Smith*|*Jones");
        let request = ApiRequest::list("users", &options, LIST_PRODUCTS).unwrap();
        let prepared = request
            .to_reqwest(&reqwest::Client::new(), &OrderCloudConfig::default())
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(prepared.method(), &reqwest::Method::GET);
        assert_eq!(prepared.url().query(), Some("LastName=Smith*%7C*Jones"));
    }
}
