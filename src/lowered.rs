//! Lowered expression representation.
//!
//! This module provides:
//! - The tagged-variant tree produced by the optimizer (calls, constants,
//!   named and positional references, special forms)
//! - Type descriptors attached to every node
//! - Constant payloads and their canonical text form

pub mod expr;
pub mod types;
pub mod value;

pub use expr::{CallExpr, Constant, Form, InputRef, LoweredExpr, NamedRef, SpecialForm};
pub use types::{LoweredType, RowField};
pub use value::ScalarValue;
