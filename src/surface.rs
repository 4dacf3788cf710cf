//! Surface expression representation.
//!
//! This module provides:
//! - The expression tree as parsed from surface text, before analysis
//! - Operator tags for comparisons, arithmetic, and logical connectives

pub mod expr;
pub mod operator;

pub use expr::{Expression, Literal, WhenClause};
pub use operator::{ArithmeticOperator, ComparisonOperator, LogicalOperator};
