//! Structural equivalence check between surface and lowered trees.

use crate::eval::ConstantEvaluator;
use crate::functions::FunctionRegistry;
use crate::lowered::{Form, LoweredExpr, LoweredType, ScalarValue, SpecialForm};
use crate::surface::{
    ArithmeticOperator, ComparisonOperator, Expression, Literal, LogicalOperator, WhenClause,
};
use crate::verifier::context::SymbolAliases;
use crate::verifier::error::{VerifierError, VerifyResult};
use crate::verifier::literal::{literal_text, scalar_text};

/// Checks that a lowered expression is a faithful rendering of a surface
/// expression.
///
/// A verdict of `Ok(false)` means the trees do not correspond; an `Err`
/// means one of the inputs breaks the verifier's contract and no verdict
/// can be given.
pub struct ExpressionVerifier<'a> {
    aliases: &'a SymbolAliases,
    functions: &'a dyn FunctionRegistry,
    evaluator: &'a dyn ConstantEvaluator,
    symbols: &'a [String],
}

impl<'a> ExpressionVerifier<'a> {
    pub fn new(
        aliases: &'a SymbolAliases,
        functions: &'a dyn FunctionRegistry,
        evaluator: &'a dyn ConstantEvaluator,
        symbols: &'a [String],
    ) -> Self {
        Self {
            aliases,
            functions,
            evaluator,
            symbols,
        }
    }

    pub fn verify(&self, expected: &Expression, actual: &LoweredExpr) -> VerifyResult<bool> {
        match expected {
            Expression::Literal(Literal::Null) => self.verify_null_literal(actual),
            Expression::Literal(Literal::String(text)) => self.verify_string_literal(text, actual),
            Expression::Literal(literal) => self.verify_literal(literal, actual),
            Expression::SymbolRef(name) => self.verify_symbol(name, actual),
            Expression::Cast { expr, target_type } => self.verify_cast(expr, target_type, actual),
            Expression::IsNull(inner) => self.verify_is_null(inner, actual),
            Expression::IsNotNull(inner) => self.verify_is_not_null(inner, actual),
            Expression::Not(inner) => self.verify_not(inner, actual),
            Expression::Try(inner) => self.verify_try(inner, actual),
            Expression::Comparison { op, left, right } => {
                self.verify_comparison(*op, left, right, actual)
            }
            Expression::Arithmetic { op, left, right } => {
                self.verify_arithmetic(*op, left, right, actual)
            }
            Expression::Between { value, min, max } => self.verify_between(value, min, max, actual),
            Expression::Logical { op, left, right } => {
                self.verify_logical(*op, left, right, actual)
            }
            Expression::Coalesce(operands) => self.verify_coalesce(operands, actual),
            Expression::InPredicate { value, value_list } => {
                self.verify_in_predicate(value, value_list, actual)
            }
            Expression::Dereference { base, field } => self.verify_dereference(base, field, actual),
            Expression::SimpleCase {
                operand,
                when_clauses,
                default_value,
            } => self.verify_simple_case(operand, when_clauses, default_value.as_deref(), actual),
            Expression::FunctionCall { name, args } => self.verify_function_call(name, args, actual),
            Expression::InList(_) | Expression::Row(_) | Expression::Like { .. } => {
                Err(VerifierError::UnsupportedExpression {
                    kind: expected.kind_name(),
                })
            }
        }
    }

    fn verify_null_literal(&self, actual: &LoweredExpr) -> VerifyResult<bool> {
        match actual {
            LoweredExpr::Constant(constant) => Ok(self.evaluator.evaluate(constant).is_null()),
            _ => Ok(false),
        }
    }

    fn verify_string_literal(&self, text: &str, actual: &LoweredExpr) -> VerifyResult<bool> {
        match actual {
            LoweredExpr::Call(call) if self.functions.is_cast_function(&call.function) => {
                match self.evaluator.fold(actual) {
                    Some(ScalarValue::Varchar(folded)) => Ok(folded == text),
                    _ => Ok(false),
                }
            }
            LoweredExpr::Constant(constant) if constant.ty.is_textual() => {
                match self.evaluator.evaluate(constant) {
                    ScalarValue::Varchar(value) => Ok(value == text),
                    _ => Ok(false),
                }
            }
            _ => Ok(false),
        }
    }

    fn verify_literal(&self, literal: &Literal, actual: &LoweredExpr) -> VerifyResult<bool> {
        let expected_text = literal_text(literal);
        match actual {
            LoweredExpr::Call(call) if self.functions.is_cast_function(&call.function) => {
                if let [LoweredExpr::Constant(inner)] = call.args.as_slice() {
                    let value = self.evaluator.evaluate(inner);
                    return Ok(scalar_text(&value) == expected_text);
                }
                match self.evaluator.fold(actual) {
                    Some(value) => Ok(scalar_text(&value) == expected_text),
                    None => Ok(false),
                }
            }
            LoweredExpr::Constant(constant) => {
                let value = self.evaluator.evaluate(constant);
                Ok(scalar_text(&value) == expected_text)
            }
            _ => Ok(false),
        }
    }

    fn verify_symbol(&self, name: &str, actual: &LoweredExpr) -> VerifyResult<bool> {
        let canonical = self
            .aliases
            .resolve(name)
            .ok_or_else(|| VerifierError::UnboundAlias {
                name: name.to_string(),
            })?;
        match actual {
            LoweredExpr::Named(named) => Ok(named.name == canonical),
            LoweredExpr::Input(input) => Ok(self
                .symbols
                .get(input.field)
                .is_some_and(|symbol| symbol == canonical)),
            _ => Ok(false),
        }
    }

    fn verify_cast(
        &self,
        inner: &Expression,
        target_type: &str,
        actual: &LoweredExpr,
    ) -> VerifyResult<bool> {
        // A cast of a literal may have been folded to a typed constant.
        if let (Expression::Literal(literal), LoweredExpr::Constant(constant)) = (inner, actual) {
            if target_type == constant.ty.to_string() {
                let value = self.evaluator.evaluate(constant);
                return Ok(scalar_text(&value) == literal_text(literal));
            }
        }

        // A cast of a symbol to its own declared type may have been
        // dropped entirely.
        if let (Expression::SymbolRef(name), LoweredExpr::Named(named)) = (inner, actual) {
            if named.ty.to_string() == target_type {
                return self.verify_symbol(name, actual);
            }
        }

        let LoweredExpr::Call(call) = actual else {
            return Ok(false);
        };
        if !self.functions.is_cast_function(&call.function) {
            return Ok(false);
        }
        // Textual types compare by family, ignoring parametric width.
        let actual_type = call.ty.to_string();
        let target_base = target_type.split('(').next().unwrap_or(target_type).trim();
        let type_matches = target_type.eq_ignore_ascii_case(&actual_type)
            || (target_base.eq_ignore_ascii_case("varchar") && call.ty.is_textual());
        if !type_matches {
            return Ok(false);
        }
        let [argument] = call.args.as_slice() else {
            return Ok(false);
        };
        self.verify(inner, argument)
    }

    fn verify_is_null(&self, inner: &Expression, actual: &LoweredExpr) -> VerifyResult<bool> {
        match actual {
            LoweredExpr::Special(special) if special.form == Form::IsNull => {
                let [argument] = special.args.as_slice() else {
                    return Ok(false);
                };
                self.verify(inner, argument)
            }
            _ => Ok(false),
        }
    }

    fn verify_is_not_null(&self, inner: &Expression, actual: &LoweredExpr) -> VerifyResult<bool> {
        let LoweredExpr::Call(call) = actual else {
            return Ok(false);
        };
        if !self.functions.is_not_function(&call.function) {
            return Ok(false);
        }
        let [LoweredExpr::Special(is_null)] = call.args.as_slice() else {
            return Ok(false);
        };
        if is_null.form != Form::IsNull {
            return Ok(false);
        }
        let [argument] = is_null.args.as_slice() else {
            return Ok(false);
        };
        self.verify(inner, argument)
    }

    fn verify_not(&self, inner: &Expression, actual: &LoweredExpr) -> VerifyResult<bool> {
        match actual {
            LoweredExpr::Call(call) if self.functions.is_not_function(&call.function) => {
                let [argument] = call.args.as_slice() else {
                    return Ok(false);
                };
                self.verify(inner, argument)
            }
            _ => Ok(false),
        }
    }

    fn verify_try(&self, inner: &Expression, actual: &LoweredExpr) -> VerifyResult<bool> {
        match actual {
            LoweredExpr::Call(call) if self.functions.is_try_function(&call.function) => {
                let [argument] = call.args.as_slice() else {
                    return Ok(false);
                };
                self.verify(inner, argument)
            }
            _ => Ok(false),
        }
    }

    fn verify_comparison(
        &self,
        op: ComparisonOperator,
        left: &Expression,
        right: &Expression,
        actual: &LoweredExpr,
    ) -> VerifyResult<bool> {
        let LoweredExpr::Call(call) = actual else {
            return Ok(false);
        };
        let Some(kind) = self.functions.operator_kind(&call.function) else {
            return Ok(false);
        };
        if !kind.is_comparison() || kind != op.operator_kind() {
            return Ok(false);
        }
        let [first, second] = call.args.as_slice() else {
            return Ok(false);
        };
        // Equality is the only comparison the optimizer may reorder.
        if op == ComparisonOperator::Equal {
            if self.verify(left, first)? && self.verify(right, second)? {
                return Ok(true);
            }
            return Ok(self.verify(left, second)? && self.verify(right, first)?);
        }
        Ok(self.verify(left, first)? && self.verify(right, second)?)
    }

    fn verify_arithmetic(
        &self,
        op: ArithmeticOperator,
        left: &Expression,
        right: &Expression,
        actual: &LoweredExpr,
    ) -> VerifyResult<bool> {
        let LoweredExpr::Call(call) = actual else {
            return Ok(false);
        };
        let Some(kind) = self.functions.operator_kind(&call.function) else {
            return Ok(false);
        };
        if !kind.is_arithmetic() || kind != op.operator_kind() {
            return Ok(false);
        }
        let [first, second] = call.args.as_slice() else {
            return Ok(false);
        };
        Ok(self.verify(left, first)? && self.verify(right, second)?)
    }

    fn verify_between(
        &self,
        value: &Expression,
        min: &Expression,
        max: &Expression,
        actual: &LoweredExpr,
    ) -> VerifyResult<bool> {
        let LoweredExpr::Call(call) = actual else {
            return Ok(false);
        };
        if !self.functions.is_between_function(&call.function) {
            return Ok(false);
        }
        let [value_arg, min_arg, max_arg] = call.args.as_slice() else {
            return Ok(false);
        };
        Ok(self.verify(value, value_arg)?
            && self.verify(min, min_arg)?
            && self.verify(max, max_arg)?)
    }

    fn verify_logical(
        &self,
        op: LogicalOperator,
        left: &Expression,
        right: &Expression,
        actual: &LoweredExpr,
    ) -> VerifyResult<bool> {
        let LoweredExpr::Special(special) = actual else {
            return Ok(false);
        };
        let expected_form = match op {
            LogicalOperator::And => Form::And,
            LogicalOperator::Or => Form::Or,
        };
        if special.form != expected_form {
            return Ok(false);
        }
        let [first, second] = special.args.as_slice() else {
            return Ok(false);
        };
        Ok(self.verify(left, first)? && self.verify(right, second)?)
    }

    fn verify_coalesce(&self, operands: &[Expression], actual: &LoweredExpr) -> VerifyResult<bool> {
        match actual {
            LoweredExpr::Special(special) if special.form == Form::Coalesce => {
                self.verify_all(operands, &special.args)
            }
            _ => Ok(false),
        }
    }

    fn verify_in_predicate(
        &self,
        value: &Expression,
        value_list: &Expression,
        actual: &LoweredExpr,
    ) -> VerifyResult<bool> {
        let LoweredExpr::Special(special) = actual else {
            return Ok(false);
        };
        if special.form != Form::In {
            return Ok(false);
        }
        if let Expression::InList(items) = value_list {
            let Some((value_arg, list_args)) = special.args.split_first() else {
                return Ok(false);
            };
            return Ok(self.verify(value, value_arg)? && self.verify_all(items, list_args)?);
        }
        // A single-item list may be written without parentheses; anything
        // else must desugar to a two-argument membership check.
        let [value_arg, list_arg] = special.args.as_slice() else {
            return Ok(false);
        };
        Ok(self.verify(value, value_arg)? && self.verify(value_list, list_arg)?)
    }

    fn verify_dereference(
        &self,
        base: &Expression,
        field: &str,
        actual: &LoweredExpr,
    ) -> VerifyResult<bool> {
        let LoweredExpr::Special(special) = actual else {
            return Ok(false);
        };
        if special.form != Form::Dereference {
            return Ok(false);
        }
        let [base_arg, index_arg] = special.args.as_slice() else {
            return Ok(false);
        };
        let LoweredType::Row(fields) = base_arg.ty() else {
            return Ok(false);
        };
        let LoweredExpr::Constant(index_constant) = index_arg else {
            return Ok(false);
        };
        let index = match self.evaluator.evaluate(index_constant) {
            ScalarValue::Bigint(index) => index,
            other => {
                return Err(VerifierError::NonIntegerFieldIndex {
                    value: other.canonical_text(),
                })
            }
        };
        if index < 0 || index as usize >= fields.len() {
            return Err(VerifierError::FieldIndexOutOfRange {
                index,
                field_count: fields.len(),
            });
        }
        let name = fields[index as usize]
            .name
            .as_deref()
            .ok_or(VerifierError::UnnamedRowField { index })?;
        Ok(name == field && self.verify(base, base_arg)?)
    }

    fn verify_simple_case(
        &self,
        operand: &Expression,
        when_clauses: &[WhenClause],
        default_value: Option<&Expression>,
        actual: &LoweredExpr,
    ) -> VerifyResult<bool> {
        let LoweredExpr::Special(special) = actual else {
            return Ok(false);
        };
        if special.form != Form::Switch || special.args.len() < 2 {
            return Ok(false);
        }
        if !self.verify(operand, &special.args[0])? {
            return Ok(false);
        }
        // A trailing WHEN means the CASE carries no else branch.
        let (when_args, else_arg) = match special.args.last() {
            Some(LoweredExpr::Special(last)) if last.form == Form::When => {
                (&special.args[1..], None)
            }
            Some(last) => (&special.args[1..special.args.len() - 1], Some(last)),
            None => return Ok(false),
        };
        if when_clauses.len() != when_args.len() {
            return Ok(false);
        }
        for (clause, arg) in when_clauses.iter().zip(when_args) {
            if !self.verify_when_clause(clause, arg)? {
                return Ok(false);
            }
        }
        self.verify_option(default_value, else_arg)
    }

    fn verify_when_clause(&self, clause: &WhenClause, actual: &LoweredExpr) -> VerifyResult<bool> {
        let LoweredExpr::Special(SpecialForm { form, args, .. }) = actual else {
            return Ok(false);
        };
        if *form != Form::When {
            return Ok(false);
        }
        let [operand_arg, result_arg] = args.as_slice() else {
            return Ok(false);
        };
        Ok(self.verify(&clause.operand, operand_arg)?
            && self.verify(&clause.result, result_arg)?)
    }

    fn verify_function_call(
        &self,
        name: &str,
        args: &[Expression],
        actual: &LoweredExpr,
    ) -> VerifyResult<bool> {
        let LoweredExpr::Call(call) = actual else {
            return Ok(false);
        };
        if !name.eq_ignore_ascii_case(&self.functions.display_name(&call.function)) {
            return Ok(false);
        }
        self.verify_all(args, &call.args)
    }

    fn verify_all(&self, expected: &[Expression], actual: &[LoweredExpr]) -> VerifyResult<bool> {
        if expected.len() != actual.len() {
            return Ok(false);
        }
        for (expected, actual) in expected.iter().zip(actual) {
            if !self.verify(expected, actual)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn verify_option(
        &self,
        expected: Option<&Expression>,
        actual: Option<&LoweredExpr>,
    ) -> VerifyResult<bool> {
        match (expected, actual) {
            (Some(expected), Some(actual)) => self.verify(expected, actual),
            (None, None) => Ok(true),
            _ => Ok(false),
        }
    }
}
