//! The OData query parameter container.
//!
//! See the SAP C4C OData developer guide for the parameters a C4C backend
//! honours; `$search` fuzzy matching is SAP specific.

use crate::error::{ODataError, ODataResult};
use crate::filter::ODataFilter;
use crate::params::order::{OrderField, SortOrder};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::form_urlencoded;

const INLINECOUNT_ALLPAGES: &str = "allpages";

/// Response payload format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Json,
    /// Recognized so it can be rejected explicitly
    Xml,
}

impl ResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
            ResponseFormat::Xml => "xml",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseFormat {
    type Err = ODataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ResponseFormat::Json),
            "xml" => Ok(ResponseFormat::Xml),
            other => Err(ODataError::invalid_parameter(format!(
                "Unknown $format value: {}",
                other
            ))),
        }
    }
}

/// A finished `$filter` value: either built from an [`ODataFilter`] or a raw
/// expression string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSource(String);

impl FilterSource {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&ODataFilter> for FilterSource {
    fn from(filter: &ODataFilter) -> Self {
        Self(filter.build())
    }
}

impl From<ODataFilter> for FilterSource {
    fn from(filter: ODataFilter) -> Self {
        Self(filter.build())
    }
}

impl From<&mut ODataFilter> for FilterSource {
    fn from(filter: &mut ODataFilter) -> Self {
        Self(filter.build())
    }
}

impl From<&str> for FilterSource {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for FilterSource {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// OData query parameters.
///
/// ```rust
/// use odata_query::{ODataFilter, ODataQueryParam, SortOrder};
///
/// # fn main() -> Result<(), odata_query::ODataError> {
/// let mut filter = ODataFilter::new_filter();
/// filter.field("Name").eq("Theo")?;
///
/// let mut param = ODataQueryParam::new_param();
/// param
///     .filter(&filter)
///     .top(10)
///     .orderby("CreationDateTime", SortOrder::Desc);
///
/// assert_eq!(
///     param.to_string(),
///     "%24format=json&%24filter=Name+eq+%27Theo%27&%24orderby=CreationDateTime+desc&%24top=10"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ODataQueryParam {
    skip: u64,
    top: u64,
    filter: Option<String>,
    select: Vec<String>,
    orderby: Option<String>,
    format: ResponseFormat,
    search: Option<String>,
    inlinecount: bool,
    expand: Vec<String>,
}

impl ODataQueryParam {
    pub fn new_param() -> Self {
        Self::default()
    }

    /// Request `$inlinecount=allpages`, or remove it.
    pub fn inlinecount(&mut self, inlinecount: bool) -> &mut Self {
        self.inlinecount = inlinecount;
        self
    }

    /// Set `$filter` from a builder or a raw expression.
    pub fn filter(&mut self, filter: impl Into<FilterSource>) -> &mut Self {
        self.filter = Some(filter.into().0);
        self
    }

    /// Skip the first records; zero omits the parameter.
    pub fn skip(&mut self, skip: u64) -> &mut Self {
        self.skip = skip;
        self
    }

    /// Limit the number of records; zero omits the parameter.
    pub fn top(&mut self, top: u64) -> &mut Self {
        self.top = top;
        self
    }

    /// Add fields to `$select`. Repeated calls accumulate.
    pub fn select<I, S>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Order by a single field.
    pub fn orderby(&mut self, field: impl Into<String>, order: SortOrder) -> &mut Self {
        self.orderby = Some(format!("{} {}", field.into(), order));
        self
    }

    /// Order by several fields, in the given precedence.
    pub fn orderby_multi(&mut self, fields: &[OrderField]) -> &mut Self {
        let clause = fields
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.orderby = Some(clause);
        self
    }

    /// Response format. Only json is supported.
    pub fn format(&mut self, format: ResponseFormat) -> ODataResult<&mut Self> {
        match format {
            ResponseFormat::Json => {
                self.format = format;
                Ok(self)
            }
            ResponseFormat::Xml => {
                warn!("Rejected $format=xml, only json responses are supported");
                Err(ODataError::unsupported_format(format.as_str()))
            }
        }
    }

    /// Full text search, wrapped in `%...%` when `fuzzy`.
    pub fn search(&mut self, value: &str, fuzzy: bool) -> &mut Self {
        self.search = Some(if fuzzy {
            format!("%{}%", value)
        } else {
            value.to_string()
        });
        self
    }

    /// Expand navigation properties, replacing the current list when
    /// `replace` is set and appending to it otherwise.
    pub fn expand<I, S>(&mut self, fields: I, replace: bool) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if replace {
            self.expand.clear();
        }
        self.expand.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Current `$filter` value, if any.
    pub fn filter_value(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// The `(name, value)` pairs that will be encoded, in emission order.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("$format", self.format.to_string())];
        if let Some(filter) = self.filter.as_deref().filter(|f| !f.is_empty()) {
            pairs.push(("$filter", filter.to_string()));
        }
        if let Some(orderby) = self.orderby.as_deref().filter(|o| !o.is_empty()) {
            pairs.push(("$orderby", orderby.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("$search", search.to_string()));
        }
        if !self.select.is_empty() {
            pairs.push(("$select", self.select.join(",")));
        }
        if self.skip > 0 {
            pairs.push(("$skip", self.skip.to_string()));
        }
        if self.top > 0 {
            pairs.push(("$top", self.top.to_string()));
        }
        if !self.expand.is_empty() {
            pairs.push(("$expand", self.expand.join(",")));
        }
        if self.inlinecount {
            pairs.push(("$inlinecount", INLINECOUNT_ALLPAGES.to_string()));
        }
        pairs
    }

    /// Encode as `application/x-www-form-urlencoded`.
    pub fn to_query_string(&self) -> String {
        let pairs = self.pairs();
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &pairs {
            serializer.append_pair(name, value);
        }
        let query = serializer.finish();
        debug!("Encoded {} odata query parameters", pairs.len());
        query
    }
}

impl fmt::Display for ODataQueryParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}
