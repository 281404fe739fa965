#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing.
pub enum LexError {
    /// A run of non-delimiter characters is not a signed decimal integer that
    /// fits in 64 bits.
    InvalidNumber {
        /// The offending literal, exactly as written.
        literal: String,
        /// 1-based character column where the literal starts.
        column:  usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber { literal, column } => {
                write!(f, "Invalid number '{literal}' at column {column}.")
            },
        }
    }
}

impl std::error::Error for LexError {}
