//! Surface expression tree definitions.

use serde::{Deserialize, Serialize};

use crate::surface::operator::{ArithmeticOperator, ComparisonOperator, LogicalOperator};

/// Literal as written in the surface text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Null,
    Boolean(bool),
    Long(i64),
    Double(f64),
    Decimal(String),
    String(String),
    /// Typed literal such as `DATE '2020-01-01'`. The value keeps its
    /// written text.
    Generic { ty: String, value: String },
}

/// One WHEN arm of a simple CASE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhenClause {
    pub operand: Expression,
    pub result: Expression,
}

impl WhenClause {
    pub fn new(operand: Expression, result: Expression) -> Self {
        Self { operand, result }
    }
}

/// Expression as parsed from the surface text, before analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Literal(Literal),
    SymbolRef(String),
    Cast {
        expr: Box<Expression>,
        target_type: String,
    },
    IsNull(Box<Expression>),
    IsNotNull(Box<Expression>),
    Not(Box<Expression>),
    Try(Box<Expression>),
    Comparison {
        op: ComparisonOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Arithmetic {
        op: ArithmeticOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Between {
        value: Box<Expression>,
        min: Box<Expression>,
        max: Box<Expression>,
    },
    Logical {
        op: LogicalOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Coalesce(Vec<Expression>),
    InPredicate {
        value: Box<Expression>,
        value_list: Box<Expression>,
    },
    InList(Vec<Expression>),
    Dereference {
        base: Box<Expression>,
        field: String,
    },
    SimpleCase {
        operand: Box<Expression>,
        when_clauses: Vec<WhenClause>,
        default_value: Option<Box<Expression>>,
    },
    FunctionCall {
        name: String,
        args: Vec<Expression>,
    },
    Row(Vec<Expression>),
    Like {
        value: Box<Expression>,
        pattern: Box<Expression>,
    },
}

impl Expression {
    pub fn null() -> Self {
        Expression::Literal(Literal::Null)
    }

    pub fn boolean(value: bool) -> Self {
        Expression::Literal(Literal::Boolean(value))
    }

    pub fn long(value: i64) -> Self {
        Expression::Literal(Literal::Long(value))
    }

    pub fn double(value: f64) -> Self {
        Expression::Literal(Literal::Double(value))
    }

    pub fn decimal(value: impl Into<String>) -> Self {
        Expression::Literal(Literal::Decimal(value.into()))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::Literal(Literal::String(value.into()))
    }

    pub fn generic(ty: impl Into<String>, value: impl Into<String>) -> Self {
        Expression::Literal(Literal::Generic {
            ty: ty.into(),
            value: value.into(),
        })
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Expression::SymbolRef(name.into())
    }

    pub fn cast(expr: Expression, target_type: impl Into<String>) -> Self {
        Expression::Cast {
            expr: Box::new(expr),
            target_type: target_type.into(),
        }
    }

    pub fn is_null(expr: Expression) -> Self {
        Expression::IsNull(Box::new(expr))
    }

    pub fn is_not_null(expr: Expression) -> Self {
        Expression::IsNotNull(Box::new(expr))
    }

    pub fn not_expr(expr: Expression) -> Self {
        Expression::Not(Box::new(expr))
    }

    pub fn try_expr(expr: Expression) -> Self {
        Expression::Try(Box::new(expr))
    }

    pub fn comparison(op: ComparisonOperator, left: Expression, right: Expression) -> Self {
        Expression::Comparison {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn eq(left: Expression, right: Expression) -> Self {
        Self::comparison(ComparisonOperator::Equal, left, right)
    }

    pub fn ne(left: Expression, right: Expression) -> Self {
        Self::comparison(ComparisonOperator::NotEqual, left, right)
    }

    pub fn lt(left: Expression, right: Expression) -> Self {
        Self::comparison(ComparisonOperator::LessThan, left, right)
    }

    pub fn le(left: Expression, right: Expression) -> Self {
        Self::comparison(ComparisonOperator::LessThanOrEqual, left, right)
    }

    pub fn gt(left: Expression, right: Expression) -> Self {
        Self::comparison(ComparisonOperator::GreaterThan, left, right)
    }

    pub fn ge(left: Expression, right: Expression) -> Self {
        Self::comparison(ComparisonOperator::GreaterThanOrEqual, left, right)
    }

    pub fn distinct_from(left: Expression, right: Expression) -> Self {
        Self::comparison(ComparisonOperator::IsDistinctFrom, left, right)
    }

    pub fn arithmetic(op: ArithmeticOperator, left: Expression, right: Expression) -> Self {
        Expression::Arithmetic {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn add(left: Expression, right: Expression) -> Self {
        Self::arithmetic(ArithmeticOperator::Add, left, right)
    }

    pub fn subtract(left: Expression, right: Expression) -> Self {
        Self::arithmetic(ArithmeticOperator::Subtract, left, right)
    }

    pub fn multiply(left: Expression, right: Expression) -> Self {
        Self::arithmetic(ArithmeticOperator::Multiply, left, right)
    }

    pub fn divide(left: Expression, right: Expression) -> Self {
        Self::arithmetic(ArithmeticOperator::Divide, left, right)
    }

    pub fn modulus(left: Expression, right: Expression) -> Self {
        Self::arithmetic(ArithmeticOperator::Modulus, left, right)
    }

    pub fn between(value: Expression, min: Expression, max: Expression) -> Self {
        Expression::Between {
            value: Box::new(value),
            min: Box::new(min),
            max: Box::new(max),
        }
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::Logical {
            op: LogicalOperator::And,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Logical {
            op: LogicalOperator::Or,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn coalesce(operands: Vec<Expression>) -> Self {
        Expression::Coalesce(operands)
    }

    pub fn in_list(items: Vec<Expression>) -> Self {
        Expression::InList(items)
    }

    pub fn in_predicate(value: Expression, value_list: Expression) -> Self {
        Expression::InPredicate {
            value: Box::new(value),
            value_list: Box::new(value_list),
        }
    }

    pub fn dereference(base: Expression, field: impl Into<String>) -> Self {
        Expression::Dereference {
            base: Box::new(base),
            field: field.into(),
        }
    }

    pub fn simple_case(
        operand: Expression,
        when_clauses: Vec<WhenClause>,
        default_value: Option<Expression>,
    ) -> Self {
        Expression::SimpleCase {
            operand: Box::new(operand),
            when_clauses,
            default_value: default_value.map(Box::new),
        }
    }

    pub fn function_call(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::FunctionCall {
            name: name.into(),
            args,
        }
    }

    /// Human-readable name of this node kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::Literal(_) => "literal",
            Expression::SymbolRef(_) => "symbol reference",
            Expression::Cast { .. } => "cast",
            Expression::IsNull(_) => "IS NULL predicate",
            Expression::IsNotNull(_) => "IS NOT NULL predicate",
            Expression::Not(_) => "NOT",
            Expression::Try(_) => "TRY",
            Expression::Comparison { .. } => "comparison",
            Expression::Arithmetic { .. } => "arithmetic expression",
            Expression::Between { .. } => "BETWEEN predicate",
            Expression::Logical { .. } => "logical expression",
            Expression::Coalesce(_) => "COALESCE",
            Expression::InPredicate { .. } => "IN predicate",
            Expression::InList(_) => "IN value list",
            Expression::Dereference { .. } => "dereference",
            Expression::SimpleCase { .. } => "simple CASE",
            Expression::FunctionCall { .. } => "function call",
            Expression::Row(_) => "row constructor",
            Expression::Like { .. } => "LIKE predicate",
        }
    }
}
