//! Integration tests for list option query building.
//!
//! These tests pin the wire format produced for list operations: ordering,
//! array handling, filter expansion and the errors raised for nulls.

use ordercloud_query::query::{
    build_query_params, decode_component, Filters, ListOptions, OptionValue, QueryError,
};
use serde::Serialize;
use serde_json::json;

/// Builds and renders the query string for `options`.
fn query_string(options: &ListOptions, operation: &str) -> String {
    build_query_params(options, operation)
        .unwrap()
        .to_query_string()
}

// ============================================================================
// Documented Scenarios
// ============================================================================

#[test]
fn test_boolean_xp_filter() {
    let options = ListOptions::new().filter("xp.Featured", true);
    assert_eq!(query_string(&options, "Me.ListProducts"), "xp.Featured=true");
}

#[test]
fn test_comparison_filter_is_percent_encoded() {
    let options = ListOptions::new().filter("DateSubmitted", ">2020-04-20");
    assert_eq!(
        query_string(&options, "Me.ListOrders"),
        "DateSubmitted=%3E2020-04-20"
    );
}

#[test]
fn test_wildcard_filter_stays_literal() {
    let options = ListOptions::new().filter("LastName", "Smith*");
    assert_eq!(query_string(&options, "Users.List"), "LastName=Smith*");
}

#[test]
fn test_negated_array_filter_repeats_key() {
    let options = ListOptions::new().filter("xp.Color", vec!["!red", "!blue"]);
    assert_eq!(
        query_string(&options, "Products.List"),
        "xp.Color=!red&xp.Color=!blue"
    );
}

#[test]
fn test_search_on_array_is_comma_joined() {
    let options = ListOptions::new().search_on(vec!["ID", "Name", "xp.Color"]);
    assert_eq!(
        query_string(&options, "Products.List"),
        "searchOn=ID,Name,xp.Color"
    );
}

#[test]
fn test_null_filter_references_field_and_operation() {
    let options = ListOptions::new().filter("X", OptionValue::Null);
    let error = build_query_params(&options, "Any.Op").unwrap_err();

    assert_eq!(
        error,
        QueryError::NullFilter {
            field: "X".to_string(),
            operation: "Any.Op".to_string(),
        }
    );
    let message = error.to_string();
    assert!(message.contains("'X'"));
    assert!(message.contains("Any.Op"));
    assert!(message.contains("'!*'"));
}

#[test]
fn test_or_filter_round_trips() {
    let options = ListOptions::new().filter("LastName", "Smith*|*Jones");
    let rendered = query_string(&options, "Users.List");
    assert_eq!(rendered, "LastName=Smith*%7C*Jones");

    let (_, value) = rendered.split_once('=').unwrap();
    assert_eq!(decode_component(value).unwrap(), "Smith*|*Jones");
}

// ============================================================================
// Laws
// ============================================================================

#[test]
fn test_each_scalar_yields_exactly_one_parameter() {
    let cases: Vec<(&str, OptionValue, &str)> = vec![
        ("page", 2.into(), "2"),
        ("pageSize", 100u32.into(), "100"),
        ("search", "lamp".into(), "lamp"),
        ("depth", "all".into(), "all"),
        ("ratio", 0.25.into(), "0.25"),
        ("active", false.into(), "false"),
    ];

    for (key, value, expected) in cases {
        let params = build_query_params(&ListOptions::new().param(key, value), "Op.Test").unwrap();
        assert_eq!(params.len(), 1, "{key}");
        assert_eq!(params.get(key), Some(expected), "{key}");
    }
}

#[test]
fn test_plain_arrays_join_with_commas() {
    let options = ListOptions::new().param("ids", vec!["a", "b", "c"]);
    let params = build_query_params(&options, "Op.Test").unwrap();
    assert_eq!(params.get_all("ids"), vec!["a,b,c"]);
}

#[test]
fn test_undefined_anywhere_contributes_nothing() {
    let options = ListOptions::new()
        .search(OptionValue::Undefined)
        .sort_by(None::<&str>)
        .filter("xp.Color", OptionValue::Undefined)
        .filter("ID", None::<String>);
    let params = build_query_params(&options, "Op.Test").unwrap();
    assert!(params.is_empty());
}

#[test]
fn test_null_anywhere_aborts() {
    let plain = ListOptions::new().page(1).param("catalogID", OptionValue::Null);
    assert!(matches!(
        build_query_params(&plain, "Products.List"),
        Err(QueryError::MissingParameter { field, operation })
            if field == "catalogID" && operation == "Products.List"
    ));

    let filter = ListOptions::new().page(1).filter("ID", OptionValue::Null);
    assert!(matches!(
        build_query_params(&filter, "Products.List"),
        Err(QueryError::NullFilter { field, .. }) if field == "ID"
    ));
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_full_ordering() {
    let filters = Filters::new()
        .with("xp.Size", vec!["S", "M"])
        .with("Active", true)
        .with("Name", "Mug*");

    let options = ListOptions::new()
        .filters(filters)
        .search("mug")
        .search_on(["Name", "Description"])
        .sort_by("!DateCreated")
        .page(2)
        .page_size(25);

    assert_eq!(
        query_string(&options, "Products.List"),
        "search=mug&searchOn=Name,Description&sortBy=!DateCreated&page=2&pageSize=25\
         &xp.Size=S&xp.Size=M&Active=true&Name=Mug*"
    );
}

#[test]
fn test_plain_key_overwrite_but_filter_append() {
    // Plain options overwrite on a repeated key; array filters append.
    let options = ListOptions::new()
        .param("sortBy", "Name")
        .param("sortBy", "ID")
        .filter("ID", vec!["a*", "*z"]);

    assert_eq!(
        query_string(&options, "Products.List"),
        "sortBy=ID&ID=a*&ID=*z"
    );
}

#[test]
fn test_scalar_filter_replaces_plain_option_with_same_key() {
    let options = ListOptions::new().param("ID", "from-options").filter("ID", "from-filters");
    assert_eq!(query_string(&options, "Products.List"), "ID=from-filters");
}

// ============================================================================
// Untyped Input
// ============================================================================

#[test]
fn test_json_options_build_in_document_order() {
    let options = ListOptions::try_from(json!({
        "sortBy": ["Name", "!ID"],
        "filters": {"xp.Featured": true, "xp.Color": ["!red", "!blue"]},
        "page": 1
    }))
    .unwrap();

    assert_eq!(
        query_string(&options, "Products.List"),
        "sortBy=Name,!ID&page=1&xp.Featured=true&xp.Color=!red&xp.Color=!blue"
    );
}

#[test]
fn test_json_null_filter_map_is_rejected() {
    let options = ListOptions::try_from(json!({"filters": null})).unwrap();
    assert!(matches!(
        build_query_params(&options, "Orders.List"),
        Err(QueryError::NullFilter { field, .. }) if field == "filters"
    ));
}

#[test]
fn test_json_scalar_filters_value_is_rejected() {
    let options = ListOptions::try_from(json!({"filters": "ID=1"})).unwrap();
    assert_eq!(
        build_query_params(&options, "Orders.List"),
        Err(QueryError::InvalidFilters {
            operation: "Orders.List".to_string(),
        })
    );
}

#[test]
fn test_params_struct_round_trip() {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct OrderListParams {
        #[serde(skip_serializing_if = "Option::is_none")]
        search: Option<String>,
        sort_by: Vec<&'static str>,
        page_size: u32,
        filters: serde_json::Value,
    }

    let options = ListOptions::from_params(&OrderListParams {
        search: None,
        sort_by: vec!["!DateSubmitted"],
        page_size: 10,
        filters: json!({"Status": "Open|AwaitingApproval", "Total": ">=100"}),
    })
    .unwrap();

    assert_eq!(
        query_string(&options, "Me.ListOrders"),
        "sortBy=!DateSubmitted&pageSize=10&Status=Open%7CAwaitingApproval&Total=%3E=100"
    );
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_concurrent_builds_are_independent() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let options = ListOptions::new().page(i).filter("ID", vec![i, i + 1]);
                query_string(&options, "Products.List")
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let i = u32::try_from(i).unwrap();
        assert_eq!(
            handle.join().unwrap(),
            format!("page={i}&ID={i}&ID={}", i + 1)
        );
    }
}
