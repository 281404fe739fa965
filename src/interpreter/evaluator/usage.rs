use crate::interpreter::token::{OperatorClass, Token};

/// Which operator classes occur within one expression scope.
///
/// Computed once per scope with [`OperatorUsage::of`] and never changed
/// afterwards. A parenthesised sub-expression gets its own summary covering
/// only its interior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperatorUsage {
    /// `+` or `-` occurs.
    pub additive:       bool,
    /// `*` or `/` occurs.
    pub multiplicative: bool,
    /// `^` occurs.
    pub exponentiation: bool,
}

impl OperatorUsage {
    /// Scans `tokens` and records every operator class it contains.
    ///
    /// Operators inside nested parentheses are counted too; callers pass the
    /// scope they are about to evaluate.
    ///
    /// # Example
    /// ```
    /// use calcline::interpreter::{
    ///     evaluator::usage::OperatorUsage,
    ///     lexer::tokenize,
    ///     token::OperatorClass,
    /// };
    ///
    /// let usage = OperatorUsage::of(&tokenize("2 * 3 + 4").unwrap());
    /// assert!(usage.contains(OperatorClass::Additive));
    /// assert!(usage.contains(OperatorClass::Multiplicative));
    /// assert!(!usage.contains(OperatorClass::Exponentiation));
    /// ```
    #[must_use]
    pub fn of(tokens: &[Token]) -> Self {
        tokens.iter().fold(Self::default(), |mut usage, token| {
                         if let Token::Operator(op) = token {
                             match op.class() {
                                 OperatorClass::Additive => usage.additive = true,
                                 OperatorClass::Multiplicative => usage.multiplicative = true,
                                 OperatorClass::Exponentiation => usage.exponentiation = true,
                             }
                         }
                         usage
                     })
    }

    /// Returns `true` if the summary records an operator of `class`.
    #[must_use]
    pub const fn contains(self, class: OperatorClass) -> bool {
        match class {
            OperatorClass::Additive => self.additive,
            OperatorClass::Multiplicative => self.multiplicative,
            OperatorClass::Exponentiation => self.exponentiation,
        }
    }
}
