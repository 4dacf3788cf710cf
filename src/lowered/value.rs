//! Constant payloads carried by lowered expressions.

use serde::{Deserialize, Serialize};

/// Scalar value held by a lowered constant. An absent value is `Null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScalarValue {
    Null,
    Boolean(bool),
    Bigint(i64),
    Double(f64),
    Decimal(String),
    Varchar(String),
}

impl ScalarValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }

    /// Canonical text form used for literal comparison. Exact string
    /// equality on this form, no numeric tolerance.
    pub fn canonical_text(&self) -> String {
        match self {
            ScalarValue::Null => "null".to_string(),
            ScalarValue::Boolean(value) => value.to_string(),
            ScalarValue::Bigint(value) => value.to_string(),
            ScalarValue::Double(value) => canonical_double(*value),
            ScalarValue::Decimal(value) => value.clone(),
            ScalarValue::Varchar(value) => value.clone(),
        }
    }
}

/// Whole doubles keep one fractional digit so that `1.0` never collides
/// with the bigint text `1`.
pub(crate) fn canonical_double(value: f64) -> String {
    if value.is_finite() && value == value.trunc() && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
