#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while resolving parentheses.
pub enum ParseError {
    /// A parenthesis has no partner.
    MismatchedParens {
        /// The unmatched parenthesis, `(` or `)`.
        paren: char,
    },
    /// A parenthesis pair encloses nothing, as in `()`.
    EmptySubexpression,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MismatchedParens { paren: '(' } => {
                write!(f, "Mismatched parentheses: '(' is never closed.")
            },
            Self::MismatchedParens { paren } => {
                write!(f, "Mismatched parentheses: '{paren}' has no opening partner.")
            },
            Self::EmptySubexpression => {
                write!(f, "Empty parentheses: '()' does not contain an expression.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
