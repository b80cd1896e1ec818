//! OrderCloud API version definitions.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// OrderCloud API version.
///
/// The version is the first path segment after the base URL
/// (`https://api.ordercloud.io/v1/products`).
///
/// # Example
///
/// ```rust
/// use ordercloud_query::ApiVersion;
///
/// assert_eq!(ApiVersion::latest(), ApiVersion::V1);
///
/// let version: ApiVersion = "v2".parse().unwrap();
/// assert_eq!(version.to_string(), "v2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 1.
    V1,
    /// Any other `v<number>` version.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V1
    }

    fn is_valid_version_format(s: &str) -> bool {
        s.strip_prefix('v')
            .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => f.write_str("v1"),
            Self::Custom(s) => f.write_str(s),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "v1" => Ok(Self::V1),
            _ if Self::is_valid_version_format(&s) => Ok(Self::Custom(s)),
            _ => Err(ConfigError::InvalidApiVersion { version: s }),
        }
    }
}
