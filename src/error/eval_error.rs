use crate::interpreter::token::{Operator, Token};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reducing a flat token sequence.
pub enum EvalError {
    /// Operators are misplaced (leading, trailing or doubled), or the
    /// sequence does not reduce to exactly one number.
    MalformedExpression {
        /// What is wrong with the sequence.
        details: String,
    },
    /// An operator is next to a token that is not a number.
    OperandNotNumber {
        /// The operator whose operand is invalid.
        operator: Operator,
        /// The token found where a number was expected.
        found:    Token,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The left-hand side of the division.
        dividend: i64,
    },
    /// Raised a number to a negative power.
    NegativeExponent {
        /// The exponent that was supplied.
        exponent: i64,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedExpression { details } => write!(f, "Malformed expression: {details}."),
            Self::OperandNotNumber { operator, found } => write!(f,
                                                                 "Operator '{operator}' expects a number operand, found '{found}'."),
            Self::DivisionByZero { dividend } => write!(f, "Division by zero: {dividend} / 0."),
            Self::NegativeExponent { exponent } => write!(f,
                                                          "Negative exponent {exponent}: only non-negative integer powers are supported."),
        }
    }
}

impl std::error::Error for EvalError {}
