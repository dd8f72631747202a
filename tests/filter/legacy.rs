//! Builder-level helpers kept for older callers.

#![allow(deprecated)]

use crate::common::{period_end, period_start};
use odata_query::filter;

#[test]
fn test_field_in_matches_in_values() {
    let mut legacy = filter();
    legacy.field_in("Status", ["1", "2", "3"]);

    let mut current = filter();
    current.field("Status").in_values(["1", "2", "3"]);

    assert_eq!(legacy.build(), current.build());
    assert_eq!(
        legacy.build(),
        "(Status eq '1' or Status eq '2' or Status eq '3')"
    );
}

#[test]
fn test_field_value_match_array_quotes_everything() {
    let mut f = filter();
    f.field_value_match_array("Code", vec!["'x'".to_string()]);
    assert_eq!(f.build(), "Code eq ''x''");
}

#[test]
fn test_single_bound_helpers() {
    let mut f = filter();
    f.gt_date_time("A", period_start())
        .lt_date_time_offset("B", period_end())
        .gt_date_time_offset("C", period_start())
        .lt_date_time("D", period_end());
    assert_eq!(
        f.build(),
        concat!(
            "A gt datetime'2019-01-01T00:00:00.000Z'",
            " and B lt datetimeoffset'2019-12-31T23:59:59.000Z'",
            " and C gt datetimeoffset'2019-01-01T00:00:00.000Z'",
            " and D lt datetime'2019-12-31T23:59:59.000Z'"
        )
    );
}

#[test]
fn test_between_date_time_offset_is_exclusive() {
    let mut f = filter();
    f.between_date_time_offset("ChangedOn", Some(period_start()), Some(period_end()))
        .unwrap();
    assert_eq!(
        f.build(),
        concat!(
            "(ChangedOn gt datetimeoffset'2019-01-01T00:00:00.000Z'",
            " and ChangedOn lt datetimeoffset'2019-12-31T23:59:59.000Z')"
        )
    );
}

#[test]
fn test_legacy_ranges_require_both_bounds() {
    let mut f = filter();
    assert_validation_error!(f.between_date_time("A", None, Some(period_end())));
    assert_validation_error!(f.in_period("A", Some(period_start()), None));
    assert_error_message_contains!(f.between_date_time_offset("B", None, None), "'B'");
    assert_eq!(f.build(), "");
}
