//! Comparison operators supported in OData filter expressions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// OData comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExprOperator {
    /// equal
    Eq,
    /// not equal
    Ne,
    /// greater than
    Gt,
    /// less than
    Lt,
    /// greater or equal
    Ge,
    /// less or equal
    Le,
}

impl ExprOperator {
    /// The keyword used for this operator inside a `$filter` expression.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExprOperator::Eq => "eq",
            ExprOperator::Ne => "ne",
            ExprOperator::Gt => "gt",
            ExprOperator::Lt => "lt",
            ExprOperator::Ge => "ge",
            ExprOperator::Le => "le",
        }
    }
}

impl fmt::Display for ExprOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExprOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(ExprOperator::Eq),
            "ne" => Ok(ExprOperator::Ne),
            "gt" => Ok(ExprOperator::Gt),
            "lt" => Ok(ExprOperator::Lt),
            "ge" => Ok(ExprOperator::Ge),
            "le" => Ok(ExprOperator::Le),
            other => Err(format!("Unknown filter operator: {}", other)),
        }
    }
}
