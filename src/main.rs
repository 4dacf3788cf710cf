//! exprverify - checks a lowered expression against its surface form

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use exprverify::eval::FoldingEvaluator;
use exprverify::functions::BuiltinFunctionRegistry;
use exprverify::lowered::LoweredExpr;
use exprverify::surface::Expression;
use exprverify::verifier::{ExpressionVerifier, SymbolAliases};
use serde::Deserialize;

/// exprverify - expression equivalence checker
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON verification case
    case: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

/// One verification case: a surface tree, a lowered tree, and the
/// bindings needed to relate them.
#[derive(Debug, Deserialize)]
struct VerificationCase {
    expected: Expression,
    actual: LoweredExpr,
    #[serde(default)]
    aliases: HashMap<String, String>,
    #[serde(default)]
    symbols: Vec<String>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let text = fs::read_to_string(&args.case)
        .with_context(|| format!("Failed to read case file {}", args.case.display()))?;
    let case: VerificationCase =
        serde_json::from_str(&text).context("Failed to parse verification case")?;

    if args.debug {
        println!("expected: {:?}", case.expected);
        println!("actual: {:?}", case.actual);
    }

    let aliases = SymbolAliases::from_pairs(case.aliases);
    let registry = BuiltinFunctionRegistry::new();
    let evaluator = FoldingEvaluator::new(&registry);
    let verifier = ExpressionVerifier::new(&aliases, &registry, &evaluator, &case.symbols);

    match verifier.verify(&case.expected, &case.actual) {
        Ok(true) => {
            println!("equivalent");
            Ok(ExitCode::SUCCESS)
        }
        Ok(false) => {
            println!("not equivalent");
            println!("expected: {:?}", case.expected);
            println!("actual: {:?}", case.actual);
            Ok(ExitCode::from(1))
        }
        Err(violation) => {
            println!("contract violation: {}", violation);
            Ok(ExitCode::from(2))
        }
    }
}
