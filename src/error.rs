//! Error types for OData query building.
//!
//! Two kinds of failure exist. Validation errors mean the caller supplied
//! incomplete input (a missing value or range bound). Framework errors mean a
//! value or option reached the builder that it cannot express at all, which
//! points at a programming error in the calling code.

use crate::filter::ExprOperator;

/// Main error type for OData query building.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ODataError {
    /// Caller input is structurally incomplete
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A comparison value of a type the filter cannot express
    #[error("Unsupported value type '{type_name}' for field '{field}' in odata filter comparison")]
    UnsupportedValueType { field: String, type_name: String },

    /// A response format other than json was requested
    #[error("Unsupported response format '{format}', only json is supported")]
    UnsupportedFormat { format: String },

    /// A query parameter could not be interpreted
    #[error("Invalid query parameter: {message}")]
    InvalidParameter { message: String },
}

/// Validation errors raised when required filter input is missing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A comparison was called without a value
    #[error("Field '{field}' requires a value for operator '{operator}'")]
    MissingValue {
        field: String,
        operator: ExprOperator,
    },

    /// `between` needs both a low and a high value
    #[error("Field '{field}' range requires both the start and end value")]
    MissingRangeBound { field: String },

    /// Date ranges need at least one of the two bounds
    #[error("Field '{field}' date range requires the start or end date")]
    MissingDateRangeBounds { field: String },

    /// Legacy date helpers need both bounds
    #[error("Field '{field}' requires both the start and end date")]
    MissingDateBound { field: String },
}

impl ODataError {
    /// Create an unsupported value type error
    pub fn unsupported_value_type(field: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::UnsupportedValueType {
            field: field.into(),
            type_name: type_name.into(),
        }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// True for errors caused by incomplete caller input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// True for errors caused by unsupported types or configuration.
    pub fn is_framework(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedValueType { .. } | Self::UnsupportedFormat { .. }
        )
    }
}

impl ValidationError {
    /// Create a missing value error
    pub fn missing_value(field: impl Into<String>, operator: ExprOperator) -> Self {
        Self::MissingValue {
            field: field.into(),
            operator,
        }
    }

    /// Create a missing range bound error
    pub fn missing_range_bound(field: impl Into<String>) -> Self {
        Self::MissingRangeBound {
            field: field.into(),
        }
    }
}

// Result type aliases for convenience
pub type ODataResult<T> = Result<T, ODataError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
