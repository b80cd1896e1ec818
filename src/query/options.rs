//! List options and filter values.
//!
//! [`ListOptions`] is the per-call options bag for list operations: a few
//! well-known keys (`search`, `searchOn`, `sortBy`, `page`, `pageSize`), the
//! reserved `filters` map, and any other scalar or array option an
//! operation accepts. Entries keep their insertion order.
//!
//! "Not specified" and "explicitly null" are different things here, as
//! they are on the wire: [`OptionValue::Undefined`] is dropped silently,
//! [`OptionValue::Null`] is a usage error when the query is built.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::query::{build_query_params, QueryError, QueryParams, FILTERS_KEY};

/// A single option or filter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// A string, passed through verbatim (filter expressions included).
    String(String),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer, from `u64` values and JSON numbers above `i64::MAX`.
    UInt(u64),
    /// A floating point number. Integral values render without a fraction;
    /// magnitudes from `1e21` up and below `1e-6` use exponent form
    /// (`1e+21`, `1.5e-7`). NaN and infinities are rejected at build time.
    Float(f64),
    /// A boolean, rendered as `true` / `false`.
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::UInt(u) => write!(f, "{u}"),
            Self::Float(x) => fmt_float(*x, f),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl Scalar {
    /// Returns false for NaN and infinite floats, which have no query form.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Float(x) => x.is_finite(),
            Self::String(_) | Self::Int(_) | Self::UInt(_) | Self::Bool(_) => true,
        }
    }
}

fn fmt_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let magnitude = x.abs();
    if x == 0.0 || !x.is_finite() || (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{x}");
    }

    let exp = format!("{x:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{mantissa}e+{exponent}")
        }
        _ => f.write_str(&exp),
    }
}

/// The value of a list option or filter field.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// Not specified. Contributes nothing and is never an error.
    Undefined,
    /// Explicitly null. Always rejected when the query is built.
    Null,
    /// A single value.
    Scalar(Scalar),
    /// Several values. Comma-joined for plain options, repeated for filters.
    List(Vec<Scalar>),
}

macro_rules! impl_scalar_from {
    ($($ty:ty => |$v:ident| $expr:expr),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from($v: $ty) -> Self {
                    $expr
                }
            }

            impl From<$ty> for OptionValue {
                fn from(value: $ty) -> Self {
                    Self::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

impl_scalar_from! {
    String => |v| Self::String(v),
    &str => |v| Self::String(v.to_string()),
    &String => |v| Self::String(v.clone()),
    i8 => |v| Self::Int(i64::from(v)),
    i16 => |v| Self::Int(i64::from(v)),
    i32 => |v| Self::Int(i64::from(v)),
    i64 => |v| Self::Int(v),
    u8 => |v| Self::Int(i64::from(v)),
    u16 => |v| Self::Int(i64::from(v)),
    u32 => |v| Self::Int(i64::from(v)),
    u64 => |v| Self::UInt(v),
    usize => |v| u64::try_from(v).map_or_else(|_| Self::String(v.to_string()), Self::UInt),
    f32 => |v| Self::Float(f64::from(v)),
    f64 => |v| Self::Float(v),
    bool => |v| Self::Bool(v),
}

impl From<Scalar> for OptionValue {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for OptionValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Scalar>, const N: usize> From<[T; N]> for OptionValue {
    fn from(values: [T; N]) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Scalar>> From<&[T]> for OptionValue {
    fn from(values: &[T]) -> Self {
        Self::List(values.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

/// Filter fields mapped to values, in insertion order.
///
/// Field names are model property names (`LastName`) or dotted extended
/// property paths (`xp.Color`). Values are passed through exactly as
/// given; `!`, `*`, `|` and comparison prefixes are interpreted by the API.
///
/// # Example
///
/// ```rust
/// use ordercloud_query::query::Filters;
///
/// let filters = Filters::new()
///     .with("LastName", "Smith*|*Jones")
///     .with("xp.Color", vec!["!red", "!blue"]);
///
/// assert_eq!(filters.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    fields: Vec<(String, OptionValue)>,
}

impl Filters {
    /// Create an empty filter map.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Set `field` to `value`. An existing field keeps its position.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<OptionValue>) {
        let field = field.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(f, _)| *f == field) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((field, value)),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(field, value);
        self
    }

    /// Return the value for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&OptionValue> {
        self.fields.iter().find(|(f, _)| f == field).map(|(_, v)| v)
    }

    /// Iterate over fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.fields.iter().map(|(f, v)| (f.as_str(), v))
    }

    /// Number of filter fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if there are no filter fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Filters
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filters = Self::new();
        for (field, value) in iter {
            filters.insert(field, value);
        }
        filters
    }
}

/// Options for a list operation.
///
/// # Example
///
/// ```rust
/// use ordercloud_query::query::ListOptions;
///
/// let options = ListOptions::new()
///     .search("shirt")
///     .search_on(["ID", "Name", "xp.Color"])
///     .page_size(20)
///     .filter("xp.Featured", true);
///
/// let params = options.to_query_params("Me.ListProducts").unwrap();
/// assert_eq!(
///     params.to_query_string(),
///     "search=shirt&searchOn=ID,Name,xp.Color&pageSize=20&xp.Featured=true"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListOptions {
    entries: Vec<(String, OptionValue)>,
    filters: Option<Filters>,
}

impl ListOptions {
    /// Create empty options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            filters: None,
        }
    }

    /// Free-text search.
    #[must_use]
    pub fn search(self, value: impl Into<OptionValue>) -> Self {
        self.param("search", value)
    }

    /// Fields the search applies to. Arrays are comma-joined.
    #[must_use]
    pub fn search_on(self, value: impl Into<OptionValue>) -> Self {
        self.param("searchOn", value)
    }

    /// Sort fields, `!` prefixed for descending. Arrays are comma-joined.
    #[must_use]
    pub fn sort_by(self, value: impl Into<OptionValue>) -> Self {
        self.param("sortBy", value)
    }

    /// One-based page number.
    #[must_use]
    pub fn page(self, page: u32) -> Self {
        self.param("page", page)
    }

    /// Results per page.
    #[must_use]
    pub fn page_size(self, page_size: u32) -> Self {
        self.param("pageSize", page_size)
    }

    /// Any other option the operation accepts.
    ///
    /// Setting the same key twice keeps both entries; the later one wins
    /// when the query is built.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Add a single filter field.
    #[must_use]
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.filters
            .get_or_insert_with(Filters::new)
            .insert(field, value);
        self
    }

    /// Replace the whole filter map.
    #[must_use]
    pub fn filters(mut self, filters: Filters) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Plain (non-filter) entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The filter map, if any filters were set.
    #[must_use]
    pub const fn filter_fields(&self) -> Option<&Filters> {
        self.filters.as_ref()
    }

    /// Build the query parameters for `operation`.
    ///
    /// # Errors
    ///
    /// See [`build_query_params`].
    pub fn to_query_params(&self, operation: &str) -> Result<QueryParams, QueryError> {
        build_query_params(self, operation)
    }

    /// Convert any serializable params struct into options.
    ///
    /// Fields serialize by name. Use `#[serde(skip_serializing_if =
    /// "Option::is_none")]` for optional fields: a serialized `null` is
    /// treated as an explicit null and rejected when the query is built.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::UnsupportedValue`] if the params do not
    /// serialize to an object of scalars, scalar arrays and a `filters` map.
    pub fn from_params<T: Serialize>(params: &T) -> Result<Self, QueryError> {
        let value = serde_json::to_value(params).map_err(|e| QueryError::UnsupportedValue {
            field: "params".to_string(),
            reason: format!("failed to serialize params: {e}"),
        })?;
        Self::try_from(value)
    }
}

impl TryFrom<Value> for ListOptions {
    type Error = QueryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(map) = value else {
            return Err(QueryError::UnsupportedValue {
                field: "params".to_string(),
                reason: "list options must be an object".to_string(),
            });
        };

        let mut options = Self::new();
        for (key, value) in map {
            match value {
                Value::Object(filters) if key == FILTERS_KEY => {
                    let mut parsed = Filters::new();
                    for (field, value) in filters {
                        if value.is_object() {
                            return Err(QueryError::UnsupportedValue {
                                field,
                                reason: "filter values must be strings, numbers, booleans \
                                         or arrays of them; use a dotted path such as \
                                         'xp.Color' for nested properties"
                                    .to_string(),
                            });
                        }
                        let value = option_value_from_json(&field, value)?;
                        parsed.insert(field, value);
                    }
                    options.filters = Some(parsed);
                }
                value => {
                    let value = option_value_from_json(&key, value)?;
                    options.entries.push((key, value));
                }
            }
        }

        Ok(options)
    }
}

fn option_value_from_json(field: &str, value: Value) -> Result<OptionValue, QueryError> {
    match value {
        Value::Null => Ok(OptionValue::Null),
        Value::Array(items) => items
            .into_iter()
            .map(|item| {
                scalar_from_json(item).ok_or_else(|| QueryError::UnsupportedValue {
                    field: field.to_string(),
                    reason: "arrays may only contain strings, numbers and booleans".to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(OptionValue::List),
        Value::Object(_) => Err(QueryError::UnsupportedValue {
            field: field.to_string(),
            reason: format!("nested objects are only accepted under '{FILTERS_KEY}'"),
        }),
        scalar => scalar_from_json(scalar)
            .map(OptionValue::Scalar)
            .ok_or_else(|| QueryError::UnsupportedValue {
                field: field.to_string(),
                reason: "unrecognized value".to_string(),
            }),
    }
}

fn scalar_from_json(value: Value) -> Option<Scalar> {
    match value {
        Value::String(s) => Some(Scalar::String(s)),
        Value::Bool(b) => Some(Scalar::Bool(b)),
        Value::Number(n) => Some(if let Some(i) = n.as_i64() {
            Scalar::Int(i)
        } else if let Some(u) = n.as_u64() {
            Scalar::UInt(u)
        } else if let Some(f) = n.as_f64() {
            Scalar::Float(f)
        } else {
            Scalar::String(n.to_string())
        }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
