//! Canonical text forms used for literal comparison.

use crate::lowered::value::canonical_double;
use crate::lowered::ScalarValue;
use crate::surface::Literal;

/// Canonical text of a surface literal.
pub(crate) fn literal_text(literal: &Literal) -> String {
    match literal {
        Literal::Null => "null".to_string(),
        Literal::Boolean(value) => value.to_string(),
        Literal::Long(value) => value.to_string(),
        Literal::Double(value) => canonical_double(*value),
        Literal::Decimal(value) => value.clone(),
        Literal::String(value) => value.clone(),
        Literal::Generic { value, .. } => value.clone(),
    }
}

/// Canonical text of a lowered scalar. Varchar payloads stay verbatim.
pub(crate) fn scalar_text(value: &ScalarValue) -> String {
    match value {
        ScalarValue::Varchar(text) => text.clone(),
        other => other.canonical_text(),
    }
}
