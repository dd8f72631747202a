//! Per-field comparison accumulator.
//!
//! A [`FieldExpr`] is obtained from [`ODataFilter::field`] and borrows the
//! filter mutably. Every comparison consumes the accessor and hands the same
//! filter back, so calls on different fields can be chained:
//!
//! ```rust
//! use odata_query::ODataFilter;
//!
//! # fn main() -> Result<(), odata_query::ODataError> {
//! let mut filter = ODataFilter::new_filter();
//! filter
//!     .field("Status").eq("A")?
//!     .field("Status").eq("B")?
//!     .field("Amount").gt(100)?;
//! assert_eq!(
//!     filter.build(),
//!     "(Status eq 'A' or Status eq 'B') and Amount gt 100"
//! );
//! # Ok(())
//! # }
//! ```

use crate::error::{ODataResult, ValidationError, ValidationResult};
use crate::filter::value::{FilterValue, ODataDateTime, ODataDateTimeOffset, quote};
use crate::filter::{ExprOperator, ODataFilter};
use chrono::{DateTime, Utc};
use log::{trace, warn};
use serde::{Deserialize, Serialize};

/// One `(operator, literal)` pair recorded for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldExpression {
    operator: ExprOperator,
    literal: String,
}

impl FieldExpression {
    pub(crate) fn new(operator: ExprOperator, literal: String) -> Self {
        Self { operator, literal }
    }

    pub fn operator(&self) -> ExprOperator {
        self.operator
    }

    /// The already-quoted literal, or `null`.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Render as `<field> <op> <literal>`.
    pub fn render(&self, field: &str) -> String {
        format!("{} {} {}", field, self.operator, self.literal)
    }
}

/// Whether range helpers include their bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeBoundary {
    /// `ge` / `le`
    #[default]
    Inclusive,
    /// `gt` / `lt`
    Exclusive,
}

impl RangeBoundary {
    pub fn lower_operator(&self) -> ExprOperator {
        match self {
            RangeBoundary::Inclusive => ExprOperator::Ge,
            RangeBoundary::Exclusive => ExprOperator::Gt,
        }
    }

    pub fn upper_operator(&self) -> ExprOperator {
        match self {
            RangeBoundary::Inclusive => ExprOperator::Le,
            RangeBoundary::Exclusive => ExprOperator::Lt,
        }
    }
}

/// Comparison accessor for a single field of an [`ODataFilter`].
///
/// Values are converted to literals before anything is recorded, so a call
/// that returns an error leaves the filter exactly as it was.
#[derive(Debug)]
pub struct FieldExpr<'a> {
    filter: &'a mut ODataFilter,
    name: String,
}

impl<'a> FieldExpr<'a> {
    pub(crate) fn new(filter: &'a mut ODataFilter, name: String) -> Self {
        Self { filter, name }
    }

    /// The field this accessor appends to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// equal
    pub fn eq(self, value: impl Into<FilterValue>) -> ODataResult<&'a mut ODataFilter> {
        self.compare(ExprOperator::Eq, value.into())
    }

    /// not equal
    pub fn ne(self, value: impl Into<FilterValue>) -> ODataResult<&'a mut ODataFilter> {
        self.compare(ExprOperator::Ne, value.into())
    }

    /// greater than
    pub fn gt(self, value: impl Into<FilterValue>) -> ODataResult<&'a mut ODataFilter> {
        self.compare(ExprOperator::Gt, value.into())
    }

    /// greater or equal
    pub fn ge(self, value: impl Into<FilterValue>) -> ODataResult<&'a mut ODataFilter> {
        self.compare(ExprOperator::Ge, value.into())
    }

    /// less than
    pub fn lt(self, value: impl Into<FilterValue>) -> ODataResult<&'a mut ODataFilter> {
        self.compare(ExprOperator::Lt, value.into())
    }

    /// less or equal
    pub fn le(self, value: impl Into<FilterValue>) -> ODataResult<&'a mut ODataFilter> {
        self.compare(ExprOperator::Le, value.into())
    }

    /// Equal to a raw string, always quoted.
    ///
    /// Unlike [`eq`](Self::eq) this does not treat a leading `'` or
    /// `datetime` as a pre-formatted literal.
    pub fn eq_string(self, value: &str) -> &'a mut ODataFilter {
        self.append_literal(ExprOperator::Eq, quote(value))
    }

    /// Not equal to a raw string, always quoted.
    pub fn ne_string(self, value: &str) -> &'a mut ODataFilter {
        self.append_literal(ExprOperator::Ne, quote(value))
    }

    /// Match any value in the list.
    ///
    /// Records one quoted `eq` per value, which the builder joins with `or`.
    /// An empty list records nothing.
    pub fn in_values<I, S>(self, values: I) -> &'a mut ODataFilter
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let expressions: Vec<FieldExpression> = values
            .into_iter()
            .map(|value| FieldExpression::new(ExprOperator::Eq, quote(value.as_ref())))
            .collect();
        self.append(expressions)
    }

    /// Filter by value range.
    ///
    /// Records `ge low` and `le high` for an inclusive range, `gt low` and
    /// `lt high` otherwise. Both bounds are required; `null` counts as absent.
    pub fn between(
        self,
        low: impl Into<FilterValue>,
        high: impl Into<FilterValue>,
        boundary: RangeBoundary,
    ) -> ODataResult<&'a mut ODataFilter> {
        let (low, high) = (low.into(), high.into());
        require_bounds(&self.name, &low, &high)?;

        let lower_op = boundary.lower_operator();
        let upper_op = boundary.upper_operator();
        let lower = self.literal_for(lower_op, &low)?;
        let upper = self.literal_for(upper_op, &high)?;

        Ok(self.append(vec![
            FieldExpression::new(lower_op, lower),
            FieldExpression::new(upper_op, upper),
        ]))
    }

    /// Filter by an `Edm.DateTime` range; either bound may be open.
    pub fn between_date_time(
        self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        boundary: RangeBoundary,
    ) -> ODataResult<&'a mut ODataFilter> {
        self.date_range(start, end, boundary, |date| {
            ODataDateTime::from(date).literal()
        })
    }

    /// Filter by an `Edm.DateTimeOffset` range; either bound may be open.
    pub fn between_date_time_offset(
        self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        boundary: RangeBoundary,
    ) -> ODataResult<&'a mut ODataFilter> {
        self.date_range(start, end, boundary, |date| {
            ODataDateTimeOffset::from(date).literal()
        })
    }

    fn date_range(
        self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        boundary: RangeBoundary,
        to_literal: impl Fn(DateTime<Utc>) -> String,
    ) -> ODataResult<&'a mut ODataFilter> {
        if start.is_none() && end.is_none() {
            return Err(ValidationError::MissingDateRangeBounds {
                field: self.name.clone(),
            }
            .into());
        }

        let mut expressions = Vec::with_capacity(2);
        if let Some(start) = start {
            expressions.push(FieldExpression::new(
                boundary.lower_operator(),
                to_literal(start),
            ));
        }
        if let Some(end) = end {
            expressions.push(FieldExpression::new(
                boundary.upper_operator(),
                to_literal(end),
            ));
        }
        Ok(self.append(expressions))
    }

    fn compare(
        self,
        operator: ExprOperator,
        value: FilterValue,
    ) -> ODataResult<&'a mut ODataFilter> {
        let literal = self.literal_for(operator, &value)?;
        Ok(self.append_literal(operator, literal))
    }

    fn literal_for(&self, operator: ExprOperator, value: &FilterValue) -> ODataResult<String> {
        value.to_literal(&self.name, operator).inspect_err(|e| {
            if e.is_framework() {
                warn!(
                    "Rejected {} value for '{} {}': {}",
                    value.type_name(),
                    self.name,
                    operator,
                    e
                );
            }
        })
    }

    pub(crate) fn append_literal(
        self,
        operator: ExprOperator,
        literal: String,
    ) -> &'a mut ODataFilter {
        self.append(vec![FieldExpression::new(operator, literal)])
    }

    fn append(self, expressions: Vec<FieldExpression>) -> &'a mut ODataFilter {
        let FieldExpr { filter, name } = self;
        for expression in expressions {
            trace!("Appending '{}' to odata filter", expression.render(&name));
            filter.push_expression(&name, expression);
        }
        filter
    }
}

fn require_bounds(field: &str, low: &FilterValue, high: &FilterValue) -> ValidationResult<()> {
    let absent = |value: &FilterValue| matches!(value, FilterValue::Missing | FilterValue::Null);
    if absent(low) || absent(high) {
        Err(ValidationError::missing_range_bound(field))
    } else {
        Ok(())
    }
}
