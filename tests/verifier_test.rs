//! End-to-end verification scenarios driving the public API.

use exprverify::eval::FoldingEvaluator;
use exprverify::functions::{BuiltinFunctionRegistry, FunctionHandle, OperatorKind};
use exprverify::lowered::{Form, LoweredExpr, LoweredType, RowField, ScalarValue};
use exprverify::surface::{Expression, WhenClause};
use exprverify::verifier::{ExpressionVerifier, SymbolAliases, VerifierError};

fn verify(
    aliases: &SymbolAliases,
    symbols: &[String],
    expected: &Expression,
    actual: &LoweredExpr,
) -> Result<bool, VerifierError> {
    let registry = BuiltinFunctionRegistry::new();
    let evaluator = FoldingEvaluator::new(&registry);
    let verifier = ExpressionVerifier::new(aliases, &registry, &evaluator, symbols);
    verifier.verify(expected, actual)
}

fn named_bigint(name: &str) -> LoweredExpr {
    LoweredExpr::named(name, LoweredType::Bigint)
}

#[test]
fn test_arithmetic_over_projected_symbol() {
    // a + 1 against ADD(a, 1) where the surface name a maps to the
    // canonical name expr_3.
    let aliases = SymbolAliases::from_pairs([("a", "expr_3")]);
    let expected = Expression::add(Expression::symbol("a"), Expression::long(1));
    let actual = LoweredExpr::call(
        FunctionHandle::operator(OperatorKind::Add),
        LoweredType::Bigint,
        vec![named_bigint("expr_3"), LoweredExpr::bigint(1)],
    );
    assert_eq!(verify(&aliases, &[], &expected, &actual), Ok(true));
}

#[test]
fn test_equality_survives_operand_reordering() {
    let aliases = SymbolAliases::from_pairs([("a", "a")]);
    let expected = Expression::eq(Expression::symbol("a"), Expression::long(1));
    let actual = LoweredExpr::call(
        FunctionHandle::operator(OperatorKind::Equal),
        LoweredType::Boolean,
        vec![LoweredExpr::bigint(1), named_bigint("a")],
    );
    assert_eq!(verify(&aliases, &[], &expected, &actual), Ok(true));
}

#[test]
fn test_comparison_reordering_fails_for_other_operators() {
    let aliases = SymbolAliases::from_pairs([("a", "a")]);
    for (expected, kind) in [
        (
            Expression::gt(Expression::symbol("a"), Expression::long(1)),
            OperatorKind::GreaterThan,
        ),
        (
            Expression::ne(Expression::symbol("a"), Expression::long(1)),
            OperatorKind::NotEqual,
        ),
        (
            Expression::le(Expression::symbol("a"), Expression::long(1)),
            OperatorKind::LessThanOrEqual,
        ),
    ] {
        let swapped = LoweredExpr::call(
            FunctionHandle::operator(kind),
            LoweredType::Boolean,
            vec![LoweredExpr::bigint(1), named_bigint("a")],
        );
        assert_eq!(verify(&aliases, &[], &expected, &swapped), Ok(false));
    }
}

#[test]
fn test_wrong_operator_is_not_equivalent() {
    let aliases = SymbolAliases::from_pairs([("a", "a")]);
    let expected = Expression::gt(Expression::symbol("a"), Expression::long(1));
    let actual = LoweredExpr::call(
        FunctionHandle::operator(OperatorKind::Equal),
        LoweredType::Boolean,
        vec![named_bigint("a"), LoweredExpr::bigint(1)],
    );
    assert_eq!(verify(&aliases, &[], &expected, &actual), Ok(false));
}

#[test]
fn test_cast_of_symbol_survives_lowering() {
    let aliases = SymbolAliases::from_pairs([("a", "a")]);
    let expected = Expression::cast(Expression::symbol("a"), "varchar");
    let actual = LoweredExpr::call(
        FunctionHandle::cast(),
        LoweredType::varchar(),
        vec![named_bigint("a")],
    );
    assert_eq!(verify(&aliases, &[], &expected, &actual), Ok(true));
}

#[test]
fn test_folded_literal_cast_matches_typed_constant() {
    let aliases = SymbolAliases::new();
    let expected = Expression::cast(Expression::string("1.50"), "decimal(10,2)");
    let actual = LoweredExpr::constant(
        LoweredType::Decimal {
            precision: 10,
            scale: 2,
        },
        ScalarValue::Decimal("1.50".to_string()),
    );
    assert_eq!(verify(&aliases, &[], &expected, &actual), Ok(true));
}

#[test]
fn test_dropped_identity_cast_of_symbol() {
    let aliases = SymbolAliases::from_pairs([("a", "a")]);
    let expected = Expression::cast(Expression::symbol("a"), "bigint");
    assert_eq!(
        verify(&aliases, &[], &expected, &named_bigint("a")),
        Ok(true)
    );
    // Dropping the cast is only allowed when the types line up.
    let expected = Expression::cast(Expression::symbol("a"), "varchar");
    assert_eq!(
        verify(&aliases, &[], &expected, &named_bigint("a")),
        Ok(false)
    );
}

#[test]
fn test_in_list_desugaring() {
    let aliases = SymbolAliases::from_pairs([("x", "x")]);
    let expected = Expression::in_predicate(
        Expression::symbol("x"),
        Expression::in_list(vec![
            Expression::long(1),
            Expression::long(2),
            Expression::long(3),
        ]),
    );
    let actual = LoweredExpr::special(
        Form::In,
        LoweredType::Boolean,
        vec![
            named_bigint("x"),
            LoweredExpr::bigint(1),
            LoweredExpr::bigint(2),
            LoweredExpr::bigint(3),
        ],
    );
    assert_eq!(verify(&aliases, &[], &expected, &actual), Ok(true));

    let reordered = LoweredExpr::special(
        Form::In,
        LoweredType::Boolean,
        vec![
            named_bigint("x"),
            LoweredExpr::bigint(3),
            LoweredExpr::bigint(2),
            LoweredExpr::bigint(1),
        ],
    );
    assert_eq!(verify(&aliases, &[], &expected, &reordered), Ok(false));
}

#[test]
fn test_singleton_in_requires_two_arguments() {
    let aliases = SymbolAliases::from_pairs([("x", "x"), ("y", "y")]);
    let expected = Expression::in_predicate(Expression::symbol("x"), Expression::symbol("y"));

    let two_args = LoweredExpr::special(
        Form::In,
        LoweredType::Boolean,
        vec![named_bigint("x"), named_bigint("y")],
    );
    assert_eq!(verify(&aliases, &[], &expected, &two_args), Ok(true));

    let three_args = LoweredExpr::special(
        Form::In,
        LoweredType::Boolean,
        vec![named_bigint("x"), named_bigint("y"), LoweredExpr::bigint(9)],
    );
    assert_eq!(verify(&aliases, &[], &expected, &three_args), Ok(false));
}

#[test]
fn test_logical_connectives() {
    let aliases = SymbolAliases::from_pairs([("p", "p"), ("q", "q")]);
    let p = || LoweredExpr::named("p", LoweredType::Boolean);
    let q = || LoweredExpr::named("q", LoweredType::Boolean);

    let expected = Expression::and(Expression::symbol("p"), Expression::symbol("q"));
    let actual = LoweredExpr::special(Form::And, LoweredType::Boolean, vec![p(), q()]);
    assert_eq!(verify(&aliases, &[], &expected, &actual), Ok(true));

    let as_or = LoweredExpr::special(Form::Or, LoweredType::Boolean, vec![p(), q()]);
    assert_eq!(verify(&aliases, &[], &expected, &as_or), Ok(false));

    let swapped = LoweredExpr::special(Form::And, LoweredType::Boolean, vec![q(), p()]);
    assert_eq!(verify(&aliases, &[], &expected, &swapped), Ok(false));
}

#[test]
fn test_coalesce() {
    let aliases = SymbolAliases::from_pairs([("a", "a"), ("b", "b")]);
    let expected = Expression::coalesce(vec![
        Expression::symbol("a"),
        Expression::symbol("b"),
        Expression::long(0),
    ]);
    let actual = LoweredExpr::special(
        Form::Coalesce,
        LoweredType::Bigint,
        vec![named_bigint("a"), named_bigint("b"), LoweredExpr::bigint(0)],
    );
    assert_eq!(verify(&aliases, &[], &expected, &actual), Ok(true));

    let truncated = LoweredExpr::special(
        Form::Coalesce,
        LoweredType::Bigint,
        vec![named_bigint("a"), named_bigint("b")],
    );
    assert_eq!(verify(&aliases, &[], &expected, &truncated), Ok(false));
}

#[test]
fn test_between() {
    let aliases = SymbolAliases::from_pairs([("x", "x")]);
    let expected = Expression::between(
        Expression::symbol("x"),
        Expression::long(1),
        Expression::long(10),
    );
    let actual = LoweredExpr::call(
        FunctionHandle::between(),
        LoweredType::Boolean,
        vec![
            named_bigint("x"),
            LoweredExpr::bigint(1),
            LoweredExpr::bigint(10),
        ],
    );
    assert_eq!(verify(&aliases, &[], &expected, &actual), Ok(true));
}

#[test]
fn test_case_without_else_requires_trailing_when() {
    let aliases = SymbolAliases::from_pairs([("x", "x")]);
    let no_else = Expression::simple_case(
        Expression::symbol("x"),
        vec![
            WhenClause::new(Expression::long(1), Expression::string("one")),
            WhenClause::new(Expression::long(2), Expression::string("two")),
        ],
        None,
    );
    let when = |operand: i64, result: &str| {
        LoweredExpr::special(
            Form::When,
            LoweredType::varchar(),
            vec![LoweredExpr::bigint(operand), LoweredExpr::varchar(result)],
        )
    };
    let actual = LoweredExpr::special(
        Form::Switch,
        LoweredType::varchar(),
        vec![named_bigint("x"), when(1, "one"), when(2, "two")],
    );
    assert_eq!(verify(&aliases, &[], &no_else, &actual), Ok(true));

    // The same surface tree with an explicit default must not match.
    let with_else = Expression::simple_case(
        Expression::symbol("x"),
        vec![
            WhenClause::new(Expression::long(1), Expression::string("one")),
            WhenClause::new(Expression::long(2), Expression::string("two")),
        ],
        Some(Expression::string("other")),
    );
    assert_eq!(verify(&aliases, &[], &with_else, &actual), Ok(false));
}

#[test]
fn test_dereference_by_field_name() {
    let aliases = SymbolAliases::from_pairs([("r", "r")]);
    let row = LoweredExpr::named(
        "r",
        LoweredType::Row(vec![
            RowField::named("id", LoweredType::Bigint),
            RowField::named("name", LoweredType::varchar()),
        ]),
    );
    let expected = Expression::dereference(Expression::symbol("r"), "id");
    let actual = LoweredExpr::special(
        Form::Dereference,
        LoweredType::Bigint,
        vec![row.clone(), LoweredExpr::bigint(0)],
    );
    assert_eq!(verify(&aliases, &[], &expected, &actual), Ok(true));

    let wrong_index = LoweredExpr::special(
        Form::Dereference,
        LoweredType::Bigint,
        vec![row, LoweredExpr::bigint(1)],
    );
    assert_eq!(verify(&aliases, &[], &expected, &wrong_index), Ok(false));
}

#[test]
fn test_violation_is_not_a_verdict() {
    let aliases = SymbolAliases::new();
    let result = verify(
        &aliases,
        &[],
        &Expression::symbol("never_bound"),
        &named_bigint("a"),
    );
    assert_eq!(
        result,
        Err(VerifierError::UnboundAlias {
            name: "never_bound".to_string()
        })
    );

    let result = verify(
        &aliases,
        &[],
        &Expression::Row(vec![Expression::long(1)]),
        &LoweredExpr::bigint(1),
    );
    assert!(matches!(
        result,
        Err(VerifierError::UnsupportedExpression { .. })
    ));
}

#[test]
fn test_positional_reference_resolution() {
    let aliases = SymbolAliases::from_pairs([("a", "expr_0"), ("b", "expr_1")]);
    let symbols = vec!["expr_0".to_string(), "expr_1".to_string()];

    let expected = Expression::add(Expression::symbol("a"), Expression::symbol("b"));
    let actual = LoweredExpr::call(
        FunctionHandle::operator(OperatorKind::Add),
        LoweredType::Bigint,
        vec![
            LoweredExpr::input(0, LoweredType::Bigint),
            LoweredExpr::input(1, LoweredType::Bigint),
        ],
    );
    assert_eq!(verify(&aliases, &symbols, &expected, &actual), Ok(true));

    let crossed = LoweredExpr::call(
        FunctionHandle::operator(OperatorKind::Add),
        LoweredType::Bigint,
        vec![
            LoweredExpr::input(1, LoweredType::Bigint),
            LoweredExpr::input(0, LoweredType::Bigint),
        ],
    );
    assert_eq!(verify(&aliases, &symbols, &expected, &crossed), Ok(false));
}

#[test]
fn test_nested_predicate() {
    // NOT(a IS NULL) AND a < 10
    let aliases = SymbolAliases::from_pairs([("a", "a")]);
    let expected = Expression::and(
        Expression::is_not_null(Expression::symbol("a")),
        Expression::lt(Expression::symbol("a"), Expression::long(10)),
    );
    let actual = LoweredExpr::special(
        Form::And,
        LoweredType::Boolean,
        vec![
            LoweredExpr::call(
                FunctionHandle::not(),
                LoweredType::Boolean,
                vec![LoweredExpr::special(
                    Form::IsNull,
                    LoweredType::Boolean,
                    vec![named_bigint("a")],
                )],
            ),
            LoweredExpr::call(
                FunctionHandle::operator(OperatorKind::LessThan),
                LoweredType::Boolean,
                vec![named_bigint("a"), LoweredExpr::bigint(10)],
            ),
        ],
    );
    assert_eq!(verify(&aliases, &[], &expected, &actual), Ok(true));
}

#[test]
fn test_case_insensitive_function_names() {
    let aliases = SymbolAliases::from_pairs([("s", "s")]);
    let expected = Expression::function_call(
        "UPPER",
        vec![Expression::symbol("s")],
    );
    let actual = LoweredExpr::call(
        FunctionHandle::new("system.default.upper"),
        LoweredType::varchar(),
        vec![LoweredExpr::named("s", LoweredType::varchar())],
    );
    assert_eq!(verify(&aliases, &[], &expected, &actual), Ok(true));
}

#[test]
fn test_trees_round_trip_through_json() {
    let expected = Expression::eq(Expression::symbol("a"), Expression::long(1));
    let encoded = serde_json::to_string(&expected).unwrap();
    let decoded: Expression = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, expected);

    let actual = LoweredExpr::call(
        FunctionHandle::operator(OperatorKind::Equal),
        LoweredType::Boolean,
        vec![
            LoweredExpr::named("a", LoweredType::Bigint),
            LoweredExpr::bigint(1),
        ],
    );
    let encoded = serde_json::to_string(&actual).unwrap();
    let decoded: LoweredExpr = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, actual);
}
