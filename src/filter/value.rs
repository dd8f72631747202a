//! Comparison values and their OData literal forms.
//!
//! [`FilterValue`] is the closed set of inputs a filter comparison accepts.
//! Conversion to a literal is total over the variants: every variant either
//! produces a literal or fails with a specific error.
//!
//! The temporal wrappers [`ODataDateTime`] and [`ODataDateTimeOffset`] carry
//! their own literal prefix, so the same instant can be compared against
//! `Edm.DateTime` and `Edm.DateTimeOffset` properties.

use crate::error::{ODataError, ODataResult, ValidationError};
use crate::filter::ExprOperator;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Number, Value};
use std::fmt;

/// Literal prefix of `Edm.DateTime` values
pub const DATETIME_PREFIX: &str = "datetime";

/// Literal prefix of `Edm.DateTimeOffset` values
pub const DATETIMEOFFSET_PREFIX: &str = "datetimeoffset";

fn iso_instant(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A point in time rendered as an OData `datetime'...'` literal.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use odata_query::ODataDateTime;
///
/// let date = Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap();
/// assert_eq!(
///     ODataDateTime::from(date).to_string(),
///     "datetime'2021-03-04T05:06:07.000Z'"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ODataDateTime(DateTime<Utc>);

impl ODataDateTime {
    /// The wrapped instant.
    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    /// The literal used inside a filter expression.
    pub fn literal(&self) -> String {
        self.to_string()
    }
}

impl From<DateTime<Utc>> for ODataDateTime {
    fn from(date: DateTime<Utc>) -> Self {
        Self(date)
    }
}

impl fmt::Display for ODataDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'{}'", DATETIME_PREFIX, iso_instant(&self.0))
    }
}

/// A point in time rendered as an OData `datetimeoffset'...'` literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ODataDateTimeOffset(DateTime<Utc>);

impl ODataDateTimeOffset {
    /// The wrapped instant.
    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    /// The literal used inside a filter expression.
    pub fn literal(&self) -> String {
        self.to_string()
    }
}

impl From<DateTime<Utc>> for ODataDateTimeOffset {
    fn from(date: DateTime<Utc>) -> Self {
        Self(date)
    }
}

impl fmt::Display for ODataDateTimeOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'{}'", DATETIMEOFFSET_PREFIX, iso_instant(&self.0))
    }
}

/// A value accepted by filter comparisons.
///
/// Most callers never name this type: comparisons take `impl Into<FilterValue>`
/// and the conversions below cover numbers, booleans, strings, the temporal
/// wrappers, `Option` and `serde_json::Value`.
///
/// `Option::None` converts to [`FilterValue::Missing`], which is rejected with
/// a validation error. Use [`FilterValue::Null`] to compare against `null`.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Number(Number),
    Boolean(bool),
    String(String),
    Null,
    DateTime(ODataDateTime),
    DateTimeOffset(ODataDateTimeOffset),
    /// No value was supplied
    Missing,
    /// A value of a type that has no OData literal form
    Unsupported { type_name: String },
}

impl FilterValue {
    /// Name of the value's kind, used in diagnostics.
    pub fn type_name(&self) -> &str {
        match self {
            FilterValue::Number(_) => "number",
            FilterValue::Boolean(_) => "boolean",
            FilterValue::String(_) => "string",
            FilterValue::Null => "null",
            FilterValue::DateTime(_) => "ODataDateTime",
            FilterValue::DateTimeOffset(_) => "ODataDateTimeOffset",
            FilterValue::Missing => "missing",
            FilterValue::Unsupported { type_name } => type_name,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FilterValue::Missing)
    }

    /// Convert the value into the literal that follows `<field> <op>`.
    ///
    /// Strings that already start with `'` or `datetime` are assumed to be
    /// pre-formatted literals and are passed through untouched.
    pub fn to_literal(&self, field: &str, operator: ExprOperator) -> ODataResult<String> {
        match self {
            FilterValue::Number(n) => Ok(n.to_string()),
            FilterValue::Boolean(b) => Ok(b.to_string()),
            FilterValue::String(s) => {
                if s.starts_with('\'') || s.starts_with(DATETIME_PREFIX) {
                    Ok(s.clone())
                } else {
                    Ok(quote(s))
                }
            }
            FilterValue::Null => Ok("null".to_string()),
            FilterValue::DateTime(d) => Ok(d.literal()),
            FilterValue::DateTimeOffset(d) => Ok(d.literal()),
            FilterValue::Missing => Err(ValidationError::missing_value(field, operator).into()),
            FilterValue::Unsupported { type_name } => {
                Err(ODataError::unsupported_value_type(field, type_name.clone()))
            }
        }
    }
}

/// Wrap a raw string in single quotes.
pub(crate) fn quote(value: &str) -> String {
    format!("'{}'", value)
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FilterValue {
                fn from(value: $t) -> Self {
                    FilterValue::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Integers up to this magnitude are exact in an `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl From<f64> for FilterValue {
    /// Whole values render without a fractional part (`1.0` becomes `1`).
    fn from(value: f64) -> Self {
        if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
            return FilterValue::Number(Number::from(value as i64));
        }
        match Number::from_f64(value) {
            Some(n) => FilterValue::Number(n),
            None => FilterValue::Unsupported {
                type_name: format!("non-finite f64 ({})", value),
            },
        }
    }
}

impl From<f32> for FilterValue {
    fn from(value: f32) -> Self {
        if !value.is_finite() {
            return FilterValue::Unsupported {
                type_name: format!("non-finite f32 ({})", value),
            };
        }
        // shortest decimal of the f32, not of its f64 widening
        let shortest = value
            .to_string()
            .parse::<f64>()
            .unwrap_or_else(|_| f64::from(value));
        FilterValue::from(shortest)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Boolean(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::String(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::String(value)
    }
}

impl From<&String> for FilterValue {
    fn from(value: &String) -> Self {
        FilterValue::String(value.clone())
    }
}

impl From<ODataDateTime> for FilterValue {
    fn from(value: ODataDateTime) -> Self {
        FilterValue::DateTime(value)
    }
}

impl From<ODataDateTimeOffset> for FilterValue {
    fn from(value: ODataDateTimeOffset) -> Self {
        FilterValue::DateTimeOffset(value)
    }
}

impl<T: Into<FilterValue>> From<Option<T>> for FilterValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FilterValue::Missing)
    }
}

impl From<Value> for FilterValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FilterValue::Null,
            Value::Bool(b) => FilterValue::Boolean(b),
            Value::Number(n) => FilterValue::Number(n),
            Value::String(s) => FilterValue::String(s),
            Value::Array(_) => FilterValue::Unsupported {
                type_name: "array".to_string(),
            },
            Value::Object(_) => FilterValue::Unsupported {
                type_name: "object".to_string(),
            },
        }
    }
}
