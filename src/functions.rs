//! Function classification for lowered call expressions.

use serde::{Deserialize, Serialize};

/// Operator kind a lowered function may resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorKind {
    // Comparison
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    IsDistinctFrom,

    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
}

impl OperatorKind {
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            OperatorKind::Equal
                | OperatorKind::NotEqual
                | OperatorKind::LessThan
                | OperatorKind::LessThanOrEqual
                | OperatorKind::GreaterThan
                | OperatorKind::GreaterThanOrEqual
                | OperatorKind::IsDistinctFrom
        )
    }

    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            OperatorKind::Add
                | OperatorKind::Subtract
                | OperatorKind::Multiply
                | OperatorKind::Divide
                | OperatorKind::Modulus
        )
    }

    /// Token used in reserved operator function names.
    pub fn token(&self) -> &'static str {
        match self {
            OperatorKind::Equal => "equal",
            OperatorKind::NotEqual => "not_equal",
            OperatorKind::LessThan => "less_than",
            OperatorKind::LessThanOrEqual => "less_than_or_equal",
            OperatorKind::GreaterThan => "greater_than",
            OperatorKind::GreaterThanOrEqual => "greater_than_or_equal",
            OperatorKind::IsDistinctFrom => "is_distinct_from",
            OperatorKind::Add => "add",
            OperatorKind::Subtract => "subtract",
            OperatorKind::Multiply => "multiply",
            OperatorKind::Divide => "divide",
            OperatorKind::Modulus => "modulus",
        }
    }

    /// Get the display string for this operator kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorKind::Equal => "=",
            OperatorKind::NotEqual => "<>",
            OperatorKind::LessThan => "<",
            OperatorKind::LessThanOrEqual => "<=",
            OperatorKind::GreaterThan => ">",
            OperatorKind::GreaterThanOrEqual => ">=",
            OperatorKind::IsDistinctFrom => "IS DISTINCT FROM",
            OperatorKind::Add => "+",
            OperatorKind::Subtract => "-",
            OperatorKind::Multiply => "*",
            OperatorKind::Divide => "/",
            OperatorKind::Modulus => "%",
        }
    }
}

/// Opaque handle naming a resolved function in the lowered tree.
///
/// Classification is the registry's job; the handle itself carries only the
/// resolved name, possibly qualified with dots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionHandle {
    name: String,
}

pub const CAST_FUNCTION: &str = "$cast";
pub const NOT_FUNCTION: &str = "$not";
pub const TRY_FUNCTION: &str = "$try";
pub const BETWEEN_FUNCTION: &str = "$between";
const OPERATOR_PREFIX: &str = "$operator$";

impl FunctionHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cast() -> Self {
        Self::new(CAST_FUNCTION)
    }

    pub fn not() -> Self {
        Self::new(NOT_FUNCTION)
    }

    pub fn try_function() -> Self {
        Self::new(TRY_FUNCTION)
    }

    pub fn between() -> Self {
        Self::new(BETWEEN_FUNCTION)
    }

    pub fn operator(kind: OperatorKind) -> Self {
        Self::new(format!("{}{}", OPERATOR_PREFIX, kind.token()))
    }
}

/// Answers classification questions about lowered function handles.
pub trait FunctionRegistry {
    fn is_cast_function(&self, handle: &FunctionHandle) -> bool;
    fn is_not_function(&self, handle: &FunctionHandle) -> bool;
    fn is_try_function(&self, handle: &FunctionHandle) -> bool;
    fn is_between_function(&self, handle: &FunctionHandle) -> bool;

    /// Operator kind of the handle, if it resolves an operator.
    fn operator_kind(&self, handle: &FunctionHandle) -> Option<OperatorKind>;

    /// Unqualified display name of the function.
    fn display_name(&self, handle: &FunctionHandle) -> String;
}

/// Registry keyed by the reserved lowered function names.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFunctionRegistry;

impl BuiltinFunctionRegistry {
    pub fn new() -> Self {
        Self
    }
}

impl FunctionRegistry for BuiltinFunctionRegistry {
    fn is_cast_function(&self, handle: &FunctionHandle) -> bool {
        handle.name() == CAST_FUNCTION
    }

    fn is_not_function(&self, handle: &FunctionHandle) -> bool {
        handle.name() == NOT_FUNCTION
    }

    fn is_try_function(&self, handle: &FunctionHandle) -> bool {
        handle.name() == TRY_FUNCTION
    }

    fn is_between_function(&self, handle: &FunctionHandle) -> bool {
        handle.name() == BETWEEN_FUNCTION
    }

    fn operator_kind(&self, handle: &FunctionHandle) -> Option<OperatorKind> {
        let token = handle.name().strip_prefix(OPERATOR_PREFIX)?;
        match token {
            "equal" => Some(OperatorKind::Equal),
            "not_equal" => Some(OperatorKind::NotEqual),
            "less_than" => Some(OperatorKind::LessThan),
            "less_than_or_equal" => Some(OperatorKind::LessThanOrEqual),
            "greater_than" => Some(OperatorKind::GreaterThan),
            "greater_than_or_equal" => Some(OperatorKind::GreaterThanOrEqual),
            "is_distinct_from" => Some(OperatorKind::IsDistinctFrom),
            "add" => Some(OperatorKind::Add),
            "subtract" => Some(OperatorKind::Subtract),
            "multiply" => Some(OperatorKind::Multiply),
            "divide" => Some(OperatorKind::Divide),
            "modulus" => Some(OperatorKind::Modulus),
            _ => None,
        }
    }

    fn display_name(&self, handle: &FunctionHandle) -> String {
        handle
            .name()
            .rsplit('.')
            .next()
            .unwrap_or(handle.name())
            .to_string()
    }
}
