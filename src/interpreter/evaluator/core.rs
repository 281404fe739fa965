use tracing::trace;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            pass::{reduce, validate},
            usage::OperatorUsage,
        },
        token::{OperatorClass, Token},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a parenthesis-free token sequence.
///
/// A lone number is returned as is. Otherwise one full left-to-right pass is
/// made per precedence class, exponentiation first, then multiplication and
/// division, then addition and subtraction. A pass only runs if `usage`
/// records its class, and every pass revalidates operator placement on the
/// sequence it is about to scan.
///
/// # Parameters
/// - `tokens`: A sequence containing no parentheses.
/// - `usage`: The operator classes present in `tokens`.
///
/// # Errors
/// - `MalformedExpression` for misplaced operators, or if anything other
///   than a single number is left after the passes. This includes an empty
///   sequence and a `usage` that omits a class present in `tokens`.
/// - `OperandNotNumber` if an operator touches a parenthesis.
/// - `DivisionByZero` and `NegativeExponent` from the arithmetic itself.
///
/// # Example
/// ```
/// use calcline::interpreter::{
///     evaluator::{core::evaluate_flat, usage::OperatorUsage},
///     lexer::tokenize,
/// };
///
/// let tokens = tokenize("2 + 3 * 2 ^ 2").unwrap();
/// let value = evaluate_flat(&tokens, OperatorUsage::of(&tokens)).unwrap();
/// assert_eq!(value, 14);
/// ```
pub fn evaluate_flat(tokens: &[Token], usage: OperatorUsage) -> EvalResult<i64> {
    if let [Token::Number(value)] = tokens {
        return Ok(*value);
    }

    let mut current = tokens.to_vec();
    for class in OperatorClass::PRECEDENCE {
        validate(&current)?;
        if usage.contains(class) {
            current = reduce(&current, class)?;
            trace!(?class, remaining = current.len(), "reduction pass");
        }
    }

    match current.as_slice() {
        [Token::Number(value)] => Ok(*value),
        [] => Err(EvalError::MalformedExpression { details: "empty expression".to_string() }),
        rest => {
            Err(EvalError::MalformedExpression { details: format!("{} tokens remain after reduction, expected a single number",
                                                                  rest.len()) })
        },
    }
}
