//! Grouping, combinator and ordering behavior of built filters.

use crate::common::{fixtures, init_logging, period_end, period_start};
use odata_query::{ExprOperator, FilterValue, ODataFilter, RangeBoundary, filter};
use serde_json::Value;

fn apply(filter: &mut ODataFilter, field: &str, op: ExprOperator, value: FilterValue) {
    let field = filter.field(field);
    let result = match op {
        ExprOperator::Eq => field.eq(value),
        ExprOperator::Ne => field.ne(value),
        ExprOperator::Gt => field.gt(value),
        ExprOperator::Ge => field.ge(value),
        ExprOperator::Lt => field.lt(value),
        ExprOperator::Le => field.le(value),
    };
    result.expect("fixture comparison should be accepted");
}

/// Every JSON fixture scenario builds its expected string
#[test]
fn test_fixture_scenarios() {
    init_logging();

    for scenario in fixtures::filter_scenarios() {
        let mut filter = ODataFilter::new_filter();
        for comparison in scenario["comparisons"].as_array().unwrap() {
            let op: ExprOperator = comparison["op"].as_str().unwrap().parse().unwrap();
            apply(
                &mut filter,
                comparison["field"].as_str().unwrap(),
                op,
                FilterValue::from(comparison["value"].clone()),
            );
        }
        assert_eq!(
            Value::String(filter.build()),
            scenario["expected"],
            "scenario: {}",
            scenario["name"]
        );
    }
}

#[test]
fn test_fluent_chain_across_fields() {
    let mut f = filter();
    f.field("Status")
        .eq("A")
        .unwrap()
        .field("Status")
        .eq("B")
        .unwrap()
        .field("Amount")
        .gt(100)
        .unwrap();

    assert_eq!(f.build(), "(Status eq 'A' or Status eq 'B') and Amount gt 100");
}

#[test]
fn test_in_and_between_on_different_fields() {
    let mut f = ODataFilter::new_builder();
    f.field("X").in_values(["a", "b"]);
    f.field("Y").between(1, 10, RangeBoundary::Inclusive).unwrap();
    f.field("Z").between(1, 10, RangeBoundary::Exclusive).unwrap();

    assert_eq!(
        f.build(),
        "(X eq 'a' or X eq 'b') and (Y ge 1 and Y le 10) and (Z gt 1 and Z lt 10)"
    );
}

#[test]
fn test_in_values_then_range_on_same_field_is_or_joined() {
    let mut f = filter();
    f.field("X").in_values(["a"]);
    f.field("X").gt("m").unwrap();
    assert_eq!(f.build(), "(X eq 'a' or X gt 'm')");
}

#[test]
fn test_date_range_and_status() {
    let mut f = filter();
    f.field("CreationDateTime")
        .between_date_time_offset(
            Some(period_start()),
            Some(period_end()),
            RangeBoundary::Inclusive,
        )
        .unwrap()
        .field("LifeCycleStatusCode")
        .eq_string("2");

    assert_eq!(
        f.build(),
        concat!(
            "(CreationDateTime ge datetimeoffset'2019-01-01T00:00:00.000Z'",
            " and CreationDateTime le datetimeoffset'2019-12-31T23:59:59.000Z')",
            " and LifeCycleStatusCode eq '2'"
        )
    );
}

#[test]
fn test_group_merges_with_last_merge_wins() {
    let mut base = filter();
    base.field("A").eq(1).unwrap();
    base.field("B").eq(2).unwrap();

    let mut first = filter();
    first.field("B").eq(3).unwrap();
    first.field("B").eq(4).unwrap();

    let mut second = filter();
    second.field("B").ne(5).unwrap();
    second.field("C").le(6).unwrap();

    base.group(first).group(second);
    assert_eq!(base.build(), "A eq 1 and B ne 5 and C le 6");
}

#[test]
fn test_group_with_empty_other_keeps_state() {
    let mut base = filter();
    base.field("A").eq(1).unwrap();
    base.group(filter());
    assert_eq!(base.build(), "A eq 1");
}

#[test]
fn test_build_is_idempotent() {
    let mut f = filter();
    f.field("A").eq(1).unwrap();
    f.field("A").eq(2).unwrap();
    f.field("B").lt(3).unwrap();

    let first = f.build();
    let second = f.build();
    assert_eq!(first, second);
    assert_eq!(f.to_string(), first);
}

#[test]
fn test_untouched_and_empty_fields_are_skipped() {
    let mut f = filter();
    f.field("Empty").in_values(Vec::<&str>::new());
    f.field("A").eq(1).unwrap();
    f.field("AlsoEmpty");
    assert_eq!(f.build(), "A eq 1");
    assert!(!f.is_empty());

    let mut only_empty = filter();
    only_empty.field("Empty");
    assert!(only_empty.is_empty());
    assert_eq!(only_empty.build(), "");
}

#[test]
fn test_filters_are_independent() {
    let mut a = filter();
    let mut b = a.clone();
    a.field("A").eq(1).unwrap();
    b.field("A").eq(2).unwrap();
    assert_eq!(a.build(), "A eq 1");
    assert_eq!(b.build(), "A eq 2");
}
