//! Type descriptors attached to lowered expressions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a lowered expression.
///
/// The verifier compares these against the type names written in surface
/// casts, so `Display` must render the parser-facing spelling
/// (e.g. `varchar(10)`, `decimal(10,2)`, `row(id bigint, name varchar)`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoweredType {
    Boolean,
    Bigint,
    Integer,
    Double,
    Decimal { precision: u8, scale: u8 },
    Varchar { length: Option<u32> },
    Row(Vec<RowField>),
}

/// One field of a row type. Anonymous fields carry no name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowField {
    pub name: Option<String>,
    pub ty: LoweredType,
}

impl RowField {
    pub fn named(name: impl Into<String>, ty: LoweredType) -> Self {
        Self {
            name: Some(name.into()),
            ty,
        }
    }

    pub fn unnamed(ty: LoweredType) -> Self {
        Self { name: None, ty }
    }
}

impl LoweredType {
    /// Unbounded varchar.
    pub fn varchar() -> Self {
        LoweredType::Varchar { length: None }
    }

    pub fn varchar_with_length(length: u32) -> Self {
        LoweredType::Varchar {
            length: Some(length),
        }
    }

    /// Base type name, ignoring parameters such as varchar width.
    pub fn base(&self) -> &'static str {
        match self {
            LoweredType::Boolean => "boolean",
            LoweredType::Bigint => "bigint",
            LoweredType::Integer => "integer",
            LoweredType::Double => "double",
            LoweredType::Decimal { .. } => "decimal",
            LoweredType::Varchar { .. } => "varchar",
            LoweredType::Row(_) => "row",
        }
    }

    /// Textual-family types compare equal ignoring parametric width in
    /// cast verification.
    pub fn is_textual(&self) -> bool {
        matches!(self, LoweredType::Varchar { .. })
    }
}

impl fmt::Display for LoweredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoweredType::Decimal { precision, scale } => {
                write!(f, "decimal({},{})", precision, scale)
            }
            LoweredType::Varchar { length: Some(length) } => write!(f, "varchar({})", length),
            LoweredType::Row(fields) => {
                write!(f, "row(")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match &field.name {
                        Some(name) => write!(f, "{} {}", name, field.ty)?,
                        None => write!(f, "{}", field.ty)?,
                    }
                }
                write!(f, ")")
            }
            other => write!(f, "{}", other.base()),
        }
    }
}
