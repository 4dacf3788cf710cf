//! Operator tags carried by surface expressions.

use serde::{Deserialize, Serialize};

use crate::functions::OperatorKind;

/// Comparison operator written in a surface expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    IsDistinctFrom,
}

impl ComparisonOperator {
    /// Operator kind the lowered call must resolve to.
    pub fn operator_kind(&self) -> OperatorKind {
        match self {
            ComparisonOperator::Equal => OperatorKind::Equal,
            ComparisonOperator::NotEqual => OperatorKind::NotEqual,
            ComparisonOperator::LessThan => OperatorKind::LessThan,
            ComparisonOperator::LessThanOrEqual => OperatorKind::LessThanOrEqual,
            ComparisonOperator::GreaterThan => OperatorKind::GreaterThan,
            ComparisonOperator::GreaterThanOrEqual => OperatorKind::GreaterThanOrEqual,
            ComparisonOperator::IsDistinctFrom => OperatorKind::IsDistinctFrom,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::Equal => "=",
            ComparisonOperator::NotEqual => "<>",
            ComparisonOperator::LessThan => "<",
            ComparisonOperator::LessThanOrEqual => "<=",
            ComparisonOperator::GreaterThan => ">",
            ComparisonOperator::GreaterThanOrEqual => ">=",
            ComparisonOperator::IsDistinctFrom => "IS DISTINCT FROM",
        }
    }
}

/// Arithmetic operator written in a surface expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArithmeticOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
}

impl ArithmeticOperator {
    pub fn operator_kind(&self) -> OperatorKind {
        match self {
            ArithmeticOperator::Add => OperatorKind::Add,
            ArithmeticOperator::Subtract => OperatorKind::Subtract,
            ArithmeticOperator::Multiply => OperatorKind::Multiply,
            ArithmeticOperator::Divide => OperatorKind::Divide,
            ArithmeticOperator::Modulus => OperatorKind::Modulus,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArithmeticOperator::Add => "+",
            ArithmeticOperator::Subtract => "-",
            ArithmeticOperator::Multiply => "*",
            ArithmeticOperator::Divide => "/",
            ArithmeticOperator::Modulus => "%",
        }
    }
}

/// Binary logical connective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOperator::And => "AND",
            LogicalOperator::Or => "OR",
        }
    }
}
