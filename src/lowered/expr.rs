//! Lowered expression tree definitions.

use serde::{Deserialize, Serialize};

use crate::functions::FunctionHandle;
use crate::lowered::types::LoweredType;
use crate::lowered::value::ScalarValue;

/// Built-in control construct tags. Closed set; anything else the
/// optimizer produces is an ordinary call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Form {
    And,
    Or,
    IsNull,
    In,
    Coalesce,
    Switch,
    When,
    Dereference,
}

impl Form {
    pub fn as_str(&self) -> &'static str {
        match self {
            Form::And => "AND",
            Form::Or => "OR",
            Form::IsNull => "IS_NULL",
            Form::In => "IN",
            Form::Coalesce => "COALESCE",
            Form::Switch => "SWITCH",
            Form::When => "WHEN",
            Form::Dereference => "DEREFERENCE",
        }
    }
}

/// Call of a resolved function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub function: FunctionHandle,
    pub ty: LoweredType,
    pub args: Vec<LoweredExpr>,
}

/// Typed constant. A `Null` value models an absent constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    pub ty: LoweredType,
    pub value: ScalarValue,
}

/// Reference to an expression by canonical name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    pub name: String,
    pub ty: LoweredType,
}

/// Reference to an expression by output slot position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputRef {
    pub field: usize,
    pub ty: LoweredType,
}

/// Built-in control construct with an ordered argument list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialForm {
    pub form: Form,
    pub ty: LoweredType,
    pub args: Vec<LoweredExpr>,
}

/// Compiler-internal expression representation after analysis and
/// optimization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LoweredExpr {
    Call(CallExpr),
    Constant(Constant),
    Named(NamedRef),
    Input(InputRef),
    Special(SpecialForm),
}

impl LoweredExpr {
    /// Declared type of this node.
    pub fn ty(&self) -> &LoweredType {
        match self {
            LoweredExpr::Call(call) => &call.ty,
            LoweredExpr::Constant(constant) => &constant.ty,
            LoweredExpr::Named(named) => &named.ty,
            LoweredExpr::Input(input) => &input.ty,
            LoweredExpr::Special(special) => &special.ty,
        }
    }

    pub fn call(function: FunctionHandle, ty: LoweredType, args: Vec<LoweredExpr>) -> Self {
        LoweredExpr::Call(CallExpr { function, ty, args })
    }

    pub fn constant(ty: LoweredType, value: ScalarValue) -> Self {
        LoweredExpr::Constant(Constant { ty, value })
    }

    pub fn null(ty: LoweredType) -> Self {
        Self::constant(ty, ScalarValue::Null)
    }

    pub fn boolean(value: bool) -> Self {
        Self::constant(LoweredType::Boolean, ScalarValue::Boolean(value))
    }

    pub fn bigint(value: i64) -> Self {
        Self::constant(LoweredType::Bigint, ScalarValue::Bigint(value))
    }

    pub fn double(value: f64) -> Self {
        Self::constant(LoweredType::Double, ScalarValue::Double(value))
    }

    pub fn varchar(value: impl Into<String>) -> Self {
        Self::constant(LoweredType::varchar(), ScalarValue::Varchar(value.into()))
    }

    pub fn named(name: impl Into<String>, ty: LoweredType) -> Self {
        LoweredExpr::Named(NamedRef {
            name: name.into(),
            ty,
        })
    }

    pub fn input(field: usize, ty: LoweredType) -> Self {
        LoweredExpr::Input(InputRef { field, ty })
    }

    pub fn special(form: Form, ty: LoweredType, args: Vec<LoweredExpr>) -> Self {
        LoweredExpr::Special(SpecialForm { form, ty, args })
    }
}
