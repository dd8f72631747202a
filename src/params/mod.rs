//! OData query parameters (`$filter`, `$select`, `$orderby`, ...).
//!
//! [`ODataQueryParam`] collects the system query options of one request and
//! encodes them as a URL query string. A `$filter` can be passed as a built
//! [`ODataFilter`](crate::ODataFilter) or as a raw expression.

pub mod order;
pub mod query;

pub use order::{OrderField, SortOrder};
pub use query::{FilterSource, ODataQueryParam, ResponseFormat};

/// Alias kept for callers that use the shorter name.
pub type ODataParam = ODataQueryParam;
