//! Configuration types for the OrderCloud SDK core.
//!
//! Configuration is an explicit, immutable value built once and passed to
//! whatever shapes requests. Nothing in this crate reads global state.
//!
//! # Overview
//!
//! - [`OrderCloudConfig`]: API base URL, version and user agent settings
//! - [`OrderCloudConfigBuilder`]: A builder for [`OrderCloudConfig`]
//! - [`ApiUrl`]: A validated API base URL
//! - [`ApiVersion`]: The API version path segment
//! - [`AccessToken`]: A bearer token with masked debug output
//!
//! # Example
//!
//! ```rust
//! use ordercloud_query::{OrderCloudConfig, ApiUrl, ApiVersion};
//!
//! let config = OrderCloudConfig::builder()
//!     .base_api_url(ApiUrl::new("https://sandboxapi.ordercloud.io").unwrap())
//!     .api_version(ApiVersion::V1)
//!     .build();
//!
//! assert_eq!(config.base_path(), "https://sandboxapi.ordercloud.io/v1");
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, ApiUrl};
pub use version::ApiVersion;

/// Configuration shared by every request shaped through this crate.
///
/// `OrderCloudConfig` is `Clone`, `Send`, and `Sync`. Build it once at
/// startup and hand out references; it is never mutated per call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderCloudConfig {
    base_api_url: ApiUrl,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
}

impl OrderCloudConfig {
    /// Creates a new builder for constructing an `OrderCloudConfig`.
    #[must_use]
    pub fn builder() -> OrderCloudConfigBuilder {
        OrderCloudConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_api_url(&self) -> &ApiUrl {
        &self.base_api_url
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the versioned base path, e.g. `https://api.ordercloud.io/v1`.
    #[must_use]
    pub fn base_path(&self) -> String {
        format!("{}/{}", self.base_api_url, self.api_version)
    }
}

// Verify OrderCloudConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OrderCloudConfig>();
};

/// Builder for constructing [`OrderCloudConfig`] instances.
///
/// # Defaults
///
/// - `base_api_url`: `https://api.ordercloud.io`
/// - `api_version`: [`ApiVersion::latest()`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct OrderCloudConfigBuilder {
    base_api_url: Option<ApiUrl>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
}

impl OrderCloudConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (e.g. a sandbox environment).
    #[must_use]
    pub fn base_api_url(mut self, url: ApiUrl) -> Self {
        self.base_api_url = Some(url);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets a prefix prepended to the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`OrderCloudConfig`], applying defaults for unset fields.
    ///
    /// Every field is validated by its own type, so building cannot fail.
    #[must_use]
    pub fn build(self) -> OrderCloudConfig {
        OrderCloudConfig {
            base_api_url: self.base_api_url.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}
