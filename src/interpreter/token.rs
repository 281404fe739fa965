use std::fmt;

/// A single unit of an arithmetic expression.
///
/// Tokens are produced by the tokenizer and are the only intermediate
/// representation passed between the resolver and the evaluator. The set of
/// variants is closed; every consumer matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// An integer literal, or the value of an already reduced sub-expression.
    Number(i64),
    /// One of `+ - * / ^`.
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

/// Precedence class of an operator.
///
/// Classes are reduced in the order of [`OperatorClass::PRECEDENCE`], one
/// full left-to-right pass per class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorClass {
    /// `^`
    Exponentiation,
    /// `*` and `/`
    Multiplicative,
    /// `+` and `-`
    Additive,
}

impl OperatorClass {
    /// All classes, tightest binding first.
    pub const PRECEDENCE: [Self; 3] = [Self::Exponentiation, Self::Multiplicative, Self::Additive];
}

impl Operator {
    /// Returns the source character of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Returns the precedence class the operator belongs to.
    ///
    /// # Example
    /// ```
    /// use calcline::interpreter::token::{Operator, OperatorClass};
    ///
    /// assert_eq!(Operator::Div.class(), OperatorClass::Multiplicative);
    /// assert_eq!(Operator::Pow.class(), OperatorClass::Exponentiation);
    /// ```
    #[must_use]
    pub const fn class(self) -> OperatorClass {
        match self {
            Self::Add | Self::Sub => OperatorClass::Additive,
            Self::Mul | Self::Div => OperatorClass::Multiplicative,
            Self::Pow => OperatorClass::Exponentiation,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
        }
    }
}
