//! # Basic Usage
//!
//! Builds a few `$filter` expressions and prints them. Run with
//! `RUST_LOG=trace` to see every recorded comparison.

use chrono::{Duration, Utc};
use odata_query::{FilterValue, ODataDateTimeOffset, RangeBoundary, filter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .format_timestamp_secs()
        .init();

    // Repeated eq on one field becomes an or-group
    let mut status = filter();
    status
        .field("Status")
        .eq("A")?
        .field("Status")
        .eq("B")?
        .field("Amount")
        .gt(100)?;
    println!("status:  {}", status);

    // Ranges and lists
    let now = Utc::now();
    let mut range = filter();
    range
        .field("CreationDateTime")
        .between_date_time_offset(
            Some(now - Duration::days(7)),
            Some(now),
            RangeBoundary::Inclusive,
        )?
        .field("TypeCode")
        .in_values(["72", "118"]);
    println!("range:   {}", range);

    // Typed wrappers and null
    let mut typed = filter();
    typed
        .field("ChangedOn")
        .ge(ODataDateTimeOffset::from(now))?
        .field("ParentID")
        .eq(FilterValue::Null)?;
    println!("typed:   {}", typed);

    // Errors are returned, never panicked
    match typed.field("Amount").between(Some(1), None::<i32>, RangeBoundary::Inclusive) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("rejected: {}", e),
    }

    Ok(())
}
