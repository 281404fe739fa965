//! # calcline
//!
//! calcline evaluates single-line integer arithmetic expressions.
//! It understands integers, the operators `+ - * / ^` and parentheses, and
//! reports precisely why an expression could not be evaluated.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::CalcError,
    interpreter::{
        evaluator::{core::evaluate_flat, usage::OperatorUsage},
        lexer::tokenize,
        resolver::resolve_parens,
    },
};

/// Provides the error types for every evaluation stage.
///
/// Each stage has its own error family: the tokenizer raises `LexError`, the
/// parenthesis resolver `ParseError` and the evaluator `EvalError`.
/// `CalcError` wraps whichever one stopped the evaluation.
///
/// # Responsibilities
/// - Defines one enum per failure family, with human readable messages.
/// - Provides a stable code for every failure kind.
/// - Integrates with `std::error::Error` for reporting.
pub mod error;
/// The expression engine.
///
/// This module holds the three pipeline stages and the token type that flows
/// between them: raw text is tokenized, parentheses are resolved innermost
/// first, and the resulting flat sequence is reduced by precedence.
///
/// # Responsibilities
/// - Converts text into tokens, validating integer literals.
/// - Eliminates parentheses by evaluating their contents.
/// - Reduces a flat sequence to one integer, honouring precedence.
pub mod interpreter;
/// Integer arithmetic helpers.
///
/// Wrapping exponentiation and truncating division with explicit errors for
/// the cases that would otherwise panic.
pub mod util;

/// Evaluates a single-line arithmetic expression.
///
/// Runs the whole pipeline: tokenize, resolve parentheses, then reduce the
/// flat sequence. No state is kept between calls, so the function can be
/// called concurrently and always gives the same answer for the same input.
///
/// # Errors
/// Returns the error of the first stage that fails.
///
/// # Examples
/// ```
/// use calcline::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14);
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20);
/// assert_eq!(evaluate("2 ^ 2 * 3").unwrap(), 12);
///
/// // Errors identify the failing stage.
/// assert_eq!(evaluate("(1 + 2").unwrap_err().code(), "mismatched-parens");
/// assert_eq!(evaluate("1 + + 2").unwrap_err().code(), "malformed-expression");
/// ```
pub fn evaluate(source: &str) -> Result<i64, CalcError> {
    let tokens = tokenize(source)?;
    let flat = resolve_parens(tokens)?;
    let value = evaluate_flat(&flat, OperatorUsage::of(&flat))?;

    debug!(source, value, "evaluated expression");
    Ok(value)
}
