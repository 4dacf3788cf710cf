//! Equivalence verification between surface and lowered expressions.
//!
//! This module provides:
//! - The structural matcher that walks both trees in lockstep
//! - Alias bindings for resolving surface symbol names
//! - Contract violations, kept distinct from a "not equivalent" verdict

pub mod context;
pub mod error;
mod literal;
pub mod matcher;

pub use context::SymbolAliases;
pub use error::{VerifierError, VerifyResult};
pub use matcher::ExpressionVerifier;
