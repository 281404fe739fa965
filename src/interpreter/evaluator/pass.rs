use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::EvalResult,
        token::{Operator, OperatorClass, Token},
    },
    util::num::{truncating_div, wrapping_pow},
};

/// Checks operator placement in a flat token sequence.
///
/// An operator may not be the first or last token, may not touch another
/// operator, and both of its neighbours must be numbers.
///
/// # Errors
/// - `MalformedExpression` for a leading, trailing or doubled operator.
/// - `OperandNotNumber` when an operator touches a parenthesis.
pub(in crate::interpreter::evaluator) fn validate(tokens: &[Token]) -> EvalResult<()> {
    let last = tokens.len().saturating_sub(1);

    for (i, token) in tokens.iter().enumerate() {
        let Token::Operator(operator) = *token else {
            continue;
        };
        if i == 0 {
            return Err(malformed(format!("expression starts with operator '{operator}'")));
        }
        if i == last {
            return Err(malformed(format!("expression ends with operator '{operator}'")));
        }
        for neighbour in [tokens[i - 1], tokens[i + 1]] {
            match neighbour {
                Token::Number(_) => {},
                Token::Operator(other) => {
                    return Err(malformed(format!("operator '{other}' is adjacent to operator '{operator}'")));
                },
                Token::LeftParen | Token::RightParen => {
                    return Err(EvalError::OperandNotNumber { operator,
                                                             found: neighbour });
                },
            }
        }
    }
    Ok(())
}

/// Collapses every `Number op Number` triple whose operator is in `class`.
///
/// The scan runs left to right and feeds each result into the next triple, so
/// `8 / 2 / 2` is `(8 / 2) / 2`. For the additive class this is a running
/// total over the whole sequence. Operators of other classes are copied
/// through untouched.
///
/// # Parameters
/// - `tokens`: A sequence that has already passed [`validate`].
/// - `class`: The precedence class to reduce.
///
/// # Returns
/// A new, shorter sequence.
pub(in crate::interpreter::evaluator) fn reduce(tokens: &[Token],
                                                class: OperatorClass)
                                                -> EvalResult<Vec<Token>> {
    let mut reduced: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut iter = tokens.iter().copied();

    while let Some(token) = iter.next() {
        match token {
            Token::Operator(operator) if operator.class() == class => {
                let lhs = operand(operator, reduced.pop())?;
                let rhs = operand(operator, iter.next())?;
                reduced.push(Token::Number(apply(operator, lhs, rhs)?));
            },
            other => reduced.push(other),
        }
    }
    Ok(reduced)
}

/// Applies a single operator with native 64-bit semantics.
///
/// Addition, subtraction, multiplication and exponentiation wrap on
/// overflow; division truncates toward zero.
///
/// # Errors
/// - `DivisionByZero` if `op` is `/` and `rhs` is zero.
/// - `NegativeExponent` if `op` is `^` and `rhs` is negative.
///
/// # Example
/// ```
/// use calcline::interpreter::{evaluator::pass::apply, token::Operator};
///
/// assert_eq!(apply(Operator::Div, -7, 2).unwrap(), -3);
/// assert_eq!(apply(Operator::Pow, 3, 4).unwrap(), 81);
/// assert!(apply(Operator::Div, 1, 0).is_err());
/// ```
pub fn apply(op: Operator, lhs: i64, rhs: i64) -> EvalResult<i64> {
    match op {
        Operator::Add => Ok(lhs.wrapping_add(rhs)),
        Operator::Sub => Ok(lhs.wrapping_sub(rhs)),
        Operator::Mul => Ok(lhs.wrapping_mul(rhs)),
        Operator::Div => truncating_div(lhs, rhs),
        Operator::Pow => wrapping_pow(lhs, rhs),
    }
}

fn operand(operator: Operator, token: Option<Token>) -> EvalResult<i64> {
    match token {
        Some(Token::Number(n)) => Ok(n),
        Some(found) => Err(EvalError::OperandNotNumber { operator, found }),
        None => Err(malformed(format!("operator '{operator}' is missing an operand"))),
    }
}

const fn malformed(details: String) -> EvalError {
    EvalError::MalformedExpression { details }
}
