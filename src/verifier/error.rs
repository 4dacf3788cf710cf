//! Contract violations raised during verification.
//!
//! A violation means one of the inputs is malformed or outside the
//! supported surface, which is a different outcome from a verdict of
//! "not equivalent".

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum VerifierError {
    #[error("no verification rule for {kind} expressions")]
    UnsupportedExpression { kind: &'static str },
    #[error("symbol {name} has no binding")]
    UnboundAlias { name: String },
    #[error("dereference index {value} is not an integer constant")]
    NonIntegerFieldIndex { value: String },
    #[error("dereference index {index} out of range for row with {field_count} fields")]
    FieldIndexOutOfRange { index: i64, field_count: usize },
    #[error("row field {index} has no name")]
    UnnamedRowField { index: i64 },
}

pub type VerifyResult<T> = Result<T, VerifierError>;
