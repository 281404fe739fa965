/// Tokenizer errors.
///
/// Raised while turning raw text into tokens, when a run of non-delimiter
/// characters is not a valid integer literal.
pub mod lex_error;
/// Structural errors.
///
/// Raised by the parenthesis resolver for unbalanced or empty parenthesis
/// pairs.
pub mod parse_error;
/// Evaluation errors.
///
/// Raised while reducing a flat token sequence: misplaced operators,
/// non-number operands, division by zero and negative exponents.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any error produced while evaluating an expression.
///
/// Wraps the error of whichever stage failed first. Every variant is
/// terminal for the current evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The tokenizer rejected the input.
    Lex(LexError),
    /// The parenthesis structure is invalid.
    Parse(ParseError),
    /// A (sub)expression could not be reduced to a value.
    Eval(EvalError),
}

impl CalcError {
    /// Returns a stable, kebab-case identifier for the kind of failure.
    ///
    /// # Example
    /// ```
    /// use calcline::evaluate;
    ///
    /// let err = evaluate("4 / 0").unwrap_err();
    /// assert_eq!(err.code(), "division-by-zero");
    /// ```
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Lex(LexError::InvalidNumber { .. }) => "invalid-number",
            Self::Parse(ParseError::MismatchedParens { .. }) => "mismatched-parens",
            Self::Parse(ParseError::EmptySubexpression) => "empty-subexpression",
            Self::Eval(EvalError::MalformedExpression { .. }) => "malformed-expression",
            Self::Eval(EvalError::OperandNotNumber { .. }) => "operand-not-number",
            Self::Eval(EvalError::DivisionByZero { .. }) => "division-by-zero",
            Self::Eval(EvalError::NegativeExponent { .. }) => "negative-exponent",
        }
    }
}

impl From<LexError> for CalcError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for CalcError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
