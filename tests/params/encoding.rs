//! Encoding of the full query string.

use crate::common::{period_end, period_start};
use odata_query::{
    ODataParam, ODataQueryParam, OrderField, RangeBoundary, ResponseFormat, SortOrder, filter,
};
use serde_json::json;

#[test]
fn test_filter_is_form_encoded() {
    let mut f = filter();
    f.field("Status").eq("A").unwrap();
    f.field("Status").eq("B").unwrap();
    f.field("Amount").gt(100).unwrap();

    let mut param = ODataQueryParam::new_param();
    param.filter(&f);

    assert_eq!(
        param.to_string(),
        "%24format=json&%24filter=%28Status+eq+%27A%27+or+Status+eq+%27B%27%29+and+Amount+gt+100"
    );
}

#[test]
fn test_full_c4c_style_query() {
    let mut f = filter();
    f.field("CreationDateTime")
        .between_date_time_offset(
            Some(period_start()),
            Some(period_end()),
            RangeBoundary::Exclusive,
        )
        .unwrap();

    let mut param = ODataParam::new_param();
    param
        .format(ResponseFormat::Json)
        .unwrap()
        .filter(f)
        .select(["ObjectID", "Name"])
        .orderby_multi(&[OrderField::asc("Name"), OrderField::desc("CreationDateTime")])
        .skip(20)
        .top(10)
        .inlinecount(true);

    let query = param.to_query_string();
    let decoded: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();

    assert_eq!(
        decoded,
        vec![
            ("$format".to_string(), "json".to_string()),
            (
                "$filter".to_string(),
                concat!(
                    "(CreationDateTime gt datetimeoffset'2019-01-01T00:00:00.000Z'",
                    " and CreationDateTime lt datetimeoffset'2019-12-31T23:59:59.000Z')"
                )
                .to_string(),
            ),
            ("$orderby".to_string(), "Name asc,CreationDateTime desc".to_string()),
            ("$select".to_string(), "ObjectID,Name".to_string()),
            ("$skip".to_string(), "20".to_string()),
            ("$top".to_string(), "10".to_string()),
            ("$inlinecount".to_string(), "allpages".to_string()),
        ]
    );
}

#[test]
fn test_orderby_from_json_description() {
    let fields: Vec<OrderField> = serde_json::from_value(json!([
        { "field": "Priority", "order": "asc" },
        { "field": "ChangedOn" }
    ]))
    .unwrap();

    let mut param = ODataQueryParam::new_param();
    param.orderby_multi(&fields);
    assert!(param.to_string().contains("%24orderby=Priority+asc%2CChangedOn+desc"));
}

#[test]
fn test_single_orderby_default_order() {
    let mut param = ODataQueryParam::new_param();
    param.orderby("Name", SortOrder::default());
    assert!(param.to_string().contains("%24orderby=Name+desc"));
}

#[test]
fn test_xml_format_is_rejected() {
    let mut param = ODataQueryParam::new_param();
    assert_framework_error!(param.format(ResponseFormat::Xml));
    assert_error_message_contains!(param.format("xml".parse().unwrap()), "xml");
}

#[test]
fn test_raw_filter_string() {
    let mut param = ODataQueryParam::new_param();
    param.filter("substringof('abc', Name)");
    assert_eq!(param.filter_value(), Some("substringof('abc', Name)"));
    assert_eq!(
        param.to_string(),
        "%24format=json&%24filter=substringof%28%27abc%27%2C+Name%29"
    );
}
