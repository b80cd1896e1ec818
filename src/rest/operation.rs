//! Logical operation names used in diagnostics.

use std::fmt;

/// A logical API operation such as `Products.List`.
///
/// Operation names never go over the wire. They are carried into every
/// [`QueryError`](crate::query::QueryError) so a failure can be traced
/// back to the resource method that shaped the request.
///
/// # Example
///
/// ```rust
/// use ordercloud_query::rest::Operation;
///
/// const LIST_PRODUCTS: Operation = Operation::new("Products", "List");
/// assert_eq!(LIST_PRODUCTS.to_string(), "Products.List");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operation {
    /// The resource class, e.g. `Products` or `Me`.
    pub resource: &'static str,
    /// The method on that resource, e.g. `List` or `ListOrders`.
    pub action: &'static str,
}

impl Operation {
    /// Creates a new `Operation`.
    ///
    /// This is a `const fn` so operations can be declared as constants.
    #[must_use]
    pub const fn new(resource: &'static str, action: &'static str) -> Self {
        Self { resource, action }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.resource, self.action)
    }
}
