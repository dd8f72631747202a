//! OData v2 query builder for Rust.
//!
//! Builds `$filter`, `$select`, `$orderby` and the other system query options
//! from a typed, fluent API, so callers never concatenate or quote OData
//! literals by hand. Targets OData v2 backends such as SAP C4C.
//!
//! # Core Components
//!
//! - [`ODataFilter`] - Per-field filter builder producing a `$filter` string
//! - [`FilterValue`] - Comparison values and their literal forms
//! - [`ODataDateTime`] / [`ODataDateTimeOffset`] - Typed temporal literals
//! - [`ODataQueryParam`] - Query parameter container producing the URL query
//!
//! # Quick Start
//!
//! ```rust
//! use odata_query::{ODataFilter, ODataQueryParam, SortOrder};
//!
//! # fn main() -> Result<(), odata_query::ODataError> {
//! let mut filter = ODataFilter::new_filter();
//! filter
//!     .field("Status").eq("A")?
//!     .field("Status").eq("B")?
//!     .field("Amount").gt(100)?;
//!
//! let mut param = ODataQueryParam::new_param();
//! param.filter(&filter).top(20).orderby("Amount", SortOrder::Asc);
//!
//! assert_eq!(
//!     filter.build(),
//!     "(Status eq 'A' or Status eq 'B') and Amount gt 100"
//! );
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod filter;
pub mod params;

// Re-export commonly used types for convenience
pub use error::{ODataError, ODataResult, ValidationError, ValidationResult};
pub use filter::{
    ExprOperator, FieldExpr, FieldExpression, FilterValue, ODataDateTime, ODataDateTimeOffset,
    ODataFilter, RangeBoundary, filter,
};
pub use params::{FilterSource, ODataParam, ODataQueryParam, OrderField, ResponseFormat, SortOrder};
