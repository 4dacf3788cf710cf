//! Constant evaluation for lowered expressions.

use crate::functions::FunctionRegistry;
use crate::lowered::{Constant, LoweredExpr, LoweredType, ScalarValue};

/// Produces the runtime value of lowered constants, and folds constant
/// subtrees when possible.
pub trait ConstantEvaluator {
    /// Value of a lowered constant node.
    fn evaluate(&self, constant: &Constant) -> ScalarValue;

    /// Fold a lowered subtree to a single value, or `None` when the
    /// subtree is not constant.
    fn fold(&self, expr: &LoweredExpr) -> Option<ScalarValue>;
}

/// Evaluator that folds constants and cast chains over constants.
pub struct FoldingEvaluator<'a> {
    functions: &'a dyn FunctionRegistry,
}

impl<'a> FoldingEvaluator<'a> {
    pub fn new(functions: &'a dyn FunctionRegistry) -> Self {
        Self { functions }
    }
}

impl ConstantEvaluator for FoldingEvaluator<'_> {
    fn evaluate(&self, constant: &Constant) -> ScalarValue {
        constant.value.clone()
    }

    fn fold(&self, expr: &LoweredExpr) -> Option<ScalarValue> {
        match expr {
            LoweredExpr::Constant(constant) => Some(self.evaluate(constant)),
            LoweredExpr::Call(call) if self.functions.is_cast_function(&call.function) => {
                let [argument] = call.args.as_slice() else {
                    return None;
                };
                let value = self.fold(argument)?;
                cast_scalar(value, &call.ty)
            }
            _ => None,
        }
    }
}

/// Reinterpret a folded value as the target type. `None` means the cast
/// cannot be folded statically.
fn cast_scalar(value: ScalarValue, target: &LoweredType) -> Option<ScalarValue> {
    if value.is_null() {
        return Some(ScalarValue::Null);
    }
    match target {
        LoweredType::Varchar { .. } => match value {
            ScalarValue::Varchar(text) => Some(ScalarValue::Varchar(text)),
            other => Some(ScalarValue::Varchar(other.canonical_text())),
        },
        LoweredType::Bigint | LoweredType::Integer => {
            value.canonical_text().parse::<i64>().ok().map(ScalarValue::Bigint)
        }
        LoweredType::Double => {
            value.canonical_text().parse::<f64>().ok().map(ScalarValue::Double)
        }
        LoweredType::Boolean => match value.canonical_text().as_str() {
            "true" => Some(ScalarValue::Boolean(true)),
            "false" => Some(ScalarValue::Boolean(false)),
            _ => None,
        },
        LoweredType::Decimal { .. } => Some(ScalarValue::Decimal(value.canonical_text())),
        LoweredType::Row(_) => None,
    }
}
