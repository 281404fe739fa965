use logos::Logos;
use tracing::trace;

use crate::{
    error::LexError,
    interpreter::token::{Operator, Token},
};

/// Result type used by the tokenizer.
pub type LexResult<T> = Result<T, LexError>;

/// Raw lexical unit recognised by the scanner.
///
/// Every character of the input belongs to exactly one lexeme: a delimiter,
/// whitespace, or a run of anything else. Whether such a run is a valid
/// number is decided afterwards by [`tokenize`], so the scanner itself never
/// rejects input. `tokenize` still maps a scanner error to `InvalidNumber`
/// so that adding a delimiter here cannot turn into a panic.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Lexeme {
    /// Candidate numeric literal: a maximal run of non-delimiter characters.
    #[regex(r"[^+\-*/^()\s]+", allow_greedy = true)]
    Literal,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Whitespace separates literals but produces no token.
    #[regex(r"\s+", logos::skip)]
    Whitespace,
}

/// Converts a line of text into a sequence of tokens.
///
/// Operators and parentheses become single tokens. Any other run of
/// non-whitespace characters must be a signed decimal integer that fits in
/// an `i64`. A literal at the very end of the input is handled exactly like
/// one followed by a delimiter.
///
/// # Errors
/// Returns [`LexError::InvalidNumber`] for the first literal that does not
/// parse.
///
/// # Example
/// ```
/// use calcline::interpreter::{
///     lexer::tokenize,
///     token::{Operator, Token},
/// };
///
/// let tokens = tokenize("(12+3)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::LeftParen,
///                 Token::Number(12),
///                 Token::Operator(Operator::Add),
///                 Token::Number(3),
///                 Token::RightParen]);
///
/// assert!(tokenize("1 + 2x").is_err());
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let token = match lexeme {
            Ok(Lexeme::Literal) => parse_number(lexer.slice(), column_of(source, lexer.span().start))?,
            Ok(Lexeme::Plus) => Token::Operator(Operator::Add),
            Ok(Lexeme::Minus) => Token::Operator(Operator::Sub),
            Ok(Lexeme::Star) => Token::Operator(Operator::Mul),
            Ok(Lexeme::Slash) => Token::Operator(Operator::Div),
            Ok(Lexeme::Caret) => Token::Operator(Operator::Pow),
            Ok(Lexeme::LParen) => Token::LeftParen,
            Ok(Lexeme::RParen) => Token::RightParen,
            Ok(Lexeme::Whitespace) => continue,
            Err(()) => {
                return Err(LexError::InvalidNumber { literal: lexer.slice().to_string(),
                                                     column:  column_of(source, lexer.span().start), });
            },
        };
        tokens.push(token);
    }

    trace!(count = tokens.len(), "tokenized input");
    Ok(tokens)
}

/// Parses a candidate literal as a signed decimal integer.
///
/// # Parameters
/// - `literal`: The characters collected between delimiters.
/// - `column`: 1-based character column of the literal, for error reporting.
///
/// # Returns
/// - `Ok(Token::Number)` if the literal is an in-range integer.
/// - `Err(LexError::InvalidNumber)` otherwise.
fn parse_number(literal: &str, column: usize) -> LexResult<Token> {
    literal.parse()
           .map(Token::Number)
           .map_err(|_| LexError::InvalidNumber { literal: literal.to_string(),
                                                  column })
}

/// Converts a byte offset into a 1-based character column.
fn column_of(source: &str, offset: usize) -> usize {
    source[..offset].chars().count() + 1
}
