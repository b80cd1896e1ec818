//! Turns [`ListOptions`] into ordered query parameters.
//!
//! Plain options are written first, in insertion order, with [`QueryParams::set`]:
//! arrays are comma-joined and a key given twice keeps only its last value.
//! Filters follow, also in insertion order. A scalar filter is `set`, an
//! array filter is appended once per element so the key repeats. Repeated
//! keys are how the API expresses AND across values of one field.
//!
//! The overwrite-versus-append asymmetry between the two paths is part of
//! the wire format.

use crate::query::{Filters, ListOptions, OptionValue, QueryError, QueryParams, Scalar};

/// Reserved option key holding the filter map.
pub const FILTERS_KEY: &str = "filters";

/// Build the query parameters for one call of `operation`.
///
/// # Errors
///
/// Aborts on the first offending value, returning no partial result:
/// - [`QueryError::MissingParameter`] if a plain option is `Null`
/// - [`QueryError::NullFilter`] if a filter value (or the filter map itself) is `Null`
/// - [`QueryError::InvalidFilters`] if the reserved `filters` key holds a non-map value
/// - [`QueryError::UnsupportedValue`] if a float is NaN or infinite
///
/// # Example
///
/// ```rust
/// use ordercloud_query::query::{build_query_params, ListOptions};
///
/// let options = ListOptions::new().filter("xp.Color", vec!["!red", "!blue"]);
/// let params = build_query_params(&options, "Products.List").unwrap();
///
/// assert_eq!(params.to_query_string(), "xp.Color=!red&xp.Color=!blue");
/// ```
pub fn build_query_params(
    options: &ListOptions,
    operation: &str,
) -> Result<QueryParams, QueryError> {
    let mut params = QueryParams::new();

    for (key, value) in options.entries() {
        if key == FILTERS_KEY {
            check_reserved_entry(value, operation)?;
            continue;
        }

        let rendered = match value {
            OptionValue::Undefined => continue,
            OptionValue::Null => {
                return Err(QueryError::MissingParameter {
                    field: key.to_string(),
                    operation: operation.to_string(),
                })
            }
            OptionValue::Scalar(scalar) => render(key, scalar)?,
            OptionValue::List(items) => join(key, items)?,
        };

        if params.set(key, rendered) {
            tracing::debug!(
                "{} option '{}' was given more than once; keeping the last value",
                operation,
                key
            );
        }
    }

    if let Some(filters) = options.filter_fields() {
        unwrap_filters(&mut params, filters, operation)?;
    }

    tracing::debug!(
        "Built {} query parameters for {}",
        params.len(),
        operation
    );

    Ok(params)
}

/// A plain entry named `filters` can only come from untyped input. It may
/// be unset, but anything else is a misuse of the reserved key.
fn check_reserved_entry(value: &OptionValue, operation: &str) -> Result<(), QueryError> {
    match value {
        OptionValue::Undefined => Ok(()),
        OptionValue::Null => Err(QueryError::NullFilter {
            field: FILTERS_KEY.to_string(),
            operation: operation.to_string(),
        }),
        OptionValue::Scalar(_) | OptionValue::List(_) => Err(QueryError::InvalidFilters {
            operation: operation.to_string(),
        }),
    }
}

fn unwrap_filters(
    params: &mut QueryParams,
    filters: &Filters,
    operation: &str,
) -> Result<(), QueryError> {
    for (field, value) in filters.iter() {
        match value {
            OptionValue::Undefined => {}
            OptionValue::Null => {
                return Err(QueryError::NullFilter {
                    field: field.to_string(),
                    operation: operation.to_string(),
                })
            }
            OptionValue::Scalar(scalar) => {
                params.set(field, render(field, scalar)?);
            }
            OptionValue::List(items) => {
                tracing::trace!("Expanding filter '{}' into {} parameters", field, items.len());
                for item in items {
                    params.append(field, render(field, item)?);
                }
            }
        }
    }

    Ok(())
}

fn render(field: &str, scalar: &Scalar) -> Result<String, QueryError> {
    if !scalar.is_finite() {
        return Err(QueryError::UnsupportedValue {
            field: field.to_string(),
            reason: format!("{scalar} has no query string representation"),
        });
    }
    Ok(scalar.to_string())
}

fn join(field: &str, items: &[Scalar]) -> Result<String, QueryError> {
    Ok(items
        .iter()
        .map(|item| render(field, item))
        .collect::<Result<Vec<_>, _>>()?
        .join(","))
}
