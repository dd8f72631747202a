//! OData `$filter` expression building.
//!
//! The [`ODataFilter`] builder records typed comparisons per field and
//! serializes them into one filter string. Values are converted to OData
//! literals as they are recorded, so quoting rules never leak into calling
//! code.
//!
//! # Grouping
//!
//! All comparisons on one field form a group. A group of two or more
//! comparisons is parenthesized and joined with `or` when any of them is an
//! `eq`, and with `and` otherwise. Groups are joined with `and` in the order
//! their fields were first used.
//!
//! ```rust
//! use odata_query::{filter, RangeBoundary};
//!
//! # fn main() -> Result<(), odata_query::ODataError> {
//! let mut f = filter();
//! f.field("Type").in_values(["A", "B"]);
//! f.field("Amount").between(10, 20, RangeBoundary::Inclusive)?;
//! assert_eq!(
//!     f.build(),
//!     "(Type eq 'A' or Type eq 'B') and (Amount ge 10 and Amount le 20)"
//! );
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod field;
pub mod operator;
pub mod value;

pub use builder::ODataFilter;
pub use field::{FieldExpr, FieldExpression, RangeBoundary};
pub use operator::ExprOperator;
pub use value::{FilterValue, ODataDateTime, ODataDateTimeOffset};

/// Construct a new, empty filter.
pub fn filter() -> ODataFilter {
    ODataFilter::new_filter()
}
