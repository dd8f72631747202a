//! The `$filter` builder and its serialization rules.

use crate::error::{ODataResult, ValidationError};
use crate::filter::field::{FieldExpr, FieldExpression};
use crate::filter::value::{ODataDateTime, ODataDateTimeOffset};
use crate::filter::ExprOperator;
use chrono::{DateTime, Utc};
use log::debug;
use std::collections::HashMap;
use std::fmt;

/// All expressions recorded for one field, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldEntry {
    name: String,
    expressions: Vec<FieldExpression>,
}

impl FieldEntry {
    /// Render this field's group, or `None` when nothing was recorded.
    ///
    /// A group with any `eq` is joined entirely with `or`, including its
    /// non-`eq` expressions. Otherwise the group is joined with `and`.
    fn segment(&self) -> Option<String> {
        match self.expressions.as_slice() {
            [] => None,
            [single] => Some(single.render(&self.name)),
            expressions => {
                let combinator = if expressions
                    .iter()
                    .any(|e| e.operator() == ExprOperator::Eq)
                {
                    " or "
                } else {
                    " and "
                };
                let joined = expressions
                    .iter()
                    .map(|e| e.render(&self.name))
                    .collect::<Vec<_>>()
                    .join(combinator);
                Some(format!("({})", joined))
            }
        }
    }
}

/// OData `$filter` builder.
///
/// Fields are serialized in the order they were first touched. Each field's
/// expressions are grouped as described on [`build`](Self::build).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ODataFilter {
    entries: Vec<FieldEntry>,
    index: HashMap<String, usize>,
}

impl ODataFilter {
    /// Construct a new, empty builder.
    pub fn new_builder() -> Self {
        Self::default()
    }

    /// Construct a new, empty filter.
    pub fn new_filter() -> Self {
        Self::default()
    }

    /// Start comparisons on a property.
    ///
    /// The field is registered on first access, which fixes its position in
    /// the built string even if no comparison is ever recorded for it.
    pub fn field(&mut self, name: impl Into<String>) -> FieldExpr<'_> {
        let name = name.into();
        self.ensure_field(&name);
        FieldExpr::new(self, name)
    }

    /// Alias of [`field`](Self::field).
    pub fn property(&mut self, name: impl Into<String>) -> FieldExpr<'_> {
        self.field(name)
    }

    /// Merge another filter into this one.
    ///
    /// A field present in both takes `other`'s expressions wholesale and keeps
    /// its position here. Fields only present in `other` are appended.
    pub fn group(&mut self, other: ODataFilter) -> &mut Self {
        let merged = other.entries.len();
        for entry in other.entries {
            match self.index.get(&entry.name) {
                Some(&position) => self.entries[position].expressions = entry.expressions,
                None => {
                    self.index.insert(entry.name.clone(), self.entries.len());
                    self.entries.push(entry);
                }
            }
        }
        debug!("Merged {} fields into odata filter", merged);
        self
    }

    /// Build the `$filter` expression.
    ///
    /// - a field with one expression renders as `<field> <op> <literal>`
    /// - a field with several renders as a parenthesized group, joined with
    ///   `or` if any of them is `eq` and with `and` otherwise
    /// - fields without expressions are skipped
    /// - field segments are joined with `and`, without outer parentheses
    pub fn build(&self) -> String {
        let segments: Vec<String> = self.entries.iter().filter_map(FieldEntry::segment).collect();
        let built = segments.join(" and ");
        debug!(
            "Built odata filter from {} of {} fields: {}",
            segments.len(),
            self.entries.len(),
            built
        );
        built
    }

    /// True when no comparison has been recorded on any field.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.expressions.is_empty())
    }

    /// Number of fields touched so far.
    pub fn field_count(&self) -> usize {
        self.entries.len()
    }

    /// Field names in first-touched order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Expressions recorded for `name`, if the field was touched.
    pub fn expressions(&self, name: &str) -> Option<&[FieldExpression]> {
        self.index
            .get(name)
            .map(|&position| self.entries[position].expressions.as_slice())
    }

    pub(crate) fn push_expression(&mut self, name: &str, expression: FieldExpression) {
        let position = self.ensure_field(name);
        self.entries[position].expressions.push(expression);
    }

    fn ensure_field(&mut self, name: &str) -> usize {
        if let Some(&position) = self.index.get(name) {
            return position;
        }
        let position = self.entries.len();
        self.entries.push(FieldEntry {
            name: name.to_string(),
            expressions: Vec::new(),
        });
        self.index.insert(name.to_string(), position);
        position
    }
}

// Older entry points, kept for callers written before `field(..)` existed.
#[allow(deprecated)]
impl ODataFilter {
    /// The value of a field matches any value in the list.
    #[deprecated(note = "use `field(name).in_values(values)`")]
    pub fn field_in<I, S>(&mut self, name: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.field_value_match_array(name, values)
    }

    /// The value of a field matches any value in the list.
    #[deprecated(note = "use `field(name).in_values(values)`")]
    pub fn field_value_match_array<I, S>(&mut self, name: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        for value in values {
            self.field(name.as_str()).eq_string(value.as_ref());
        }
        self
    }

    #[deprecated(note = "use `field(name).between_date_time(..)`")]
    pub fn in_period(
        &mut self,
        name: impl Into<String>,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> ODataResult<&mut Self> {
        self.between_date_time(name, start, end)
    }

    /// Exclusive `Edm.DateTime` range; both bounds are required.
    #[deprecated(note = "use `field(name).between_date_time(..)`")]
    pub fn between_date_time(
        &mut self,
        name: impl Into<String>,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> ODataResult<&mut Self> {
        let name = name.into();
        match (start, end) {
            (Some(start), Some(end)) => Ok(self
                .gt_date_time(name.as_str(), start)
                .lt_date_time(name.as_str(), end)),
            _ => Err(ValidationError::MissingDateBound { field: name }.into()),
        }
    }

    /// Exclusive `Edm.DateTimeOffset` range; both bounds are required.
    #[deprecated(note = "use `field(name).between_date_time_offset(..)`")]
    pub fn between_date_time_offset(
        &mut self,
        name: impl Into<String>,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> ODataResult<&mut Self> {
        let name = name.into();
        match (start, end) {
            (Some(start), Some(end)) => Ok(self
                .gt_date_time_offset(name.as_str(), start)
                .lt_date_time_offset(name.as_str(), end)),
            _ => Err(ValidationError::MissingDateBound { field: name }.into()),
        }
    }

    #[deprecated(note = "use `field(name).gt(ODataDateTime::from(date))`")]
    pub fn gt_date_time(&mut self, name: impl Into<String>, date: DateTime<Utc>) -> &mut Self {
        self.field(name)
            .append_literal(ExprOperator::Gt, ODataDateTime::from(date).literal())
    }

    #[deprecated(note = "use `field(name).gt(ODataDateTimeOffset::from(date))`")]
    pub fn gt_date_time_offset(
        &mut self,
        name: impl Into<String>,
        date: DateTime<Utc>,
    ) -> &mut Self {
        self.field(name)
            .append_literal(ExprOperator::Gt, ODataDateTimeOffset::from(date).literal())
    }

    #[deprecated(note = "use `field(name).lt(ODataDateTime::from(date))`")]
    pub fn lt_date_time(&mut self, name: impl Into<String>, date: DateTime<Utc>) -> &mut Self {
        self.field(name)
            .append_literal(ExprOperator::Lt, ODataDateTime::from(date).literal())
    }

    #[deprecated(note = "use `field(name).lt(ODataDateTimeOffset::from(date))`")]
    pub fn lt_date_time_offset(
        &mut self,
        name: impl Into<String>,
        date: DateTime<Utc>,
    ) -> &mut Self {
        self.field(name)
            .append_literal(ExprOperator::Lt, ODataDateTimeOffset::from(date).literal())
    }
}

impl fmt::Display for ODataFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}
