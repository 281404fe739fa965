use std::iter;

use tracing::trace;

use crate::{
    error::{CalcError, ParseError},
    interpreter::{
        evaluator::{core::evaluate_flat, usage::OperatorUsage},
        token::Token,
    },
};

/// Result type used by the parenthesis resolver.
///
/// Evaluating a parenthesised interior can fail with any error the evaluator
/// raises, so the resolver reports the combined error type.
pub type ResolveResult<T> = Result<T, CalcError>;

/// Removes every parenthesis pair by evaluating its contents.
///
/// Repeatedly takes the first `)` and the closest `(` before it, which is
/// always an innermost pair. Its interior is evaluated on its own, with an
/// operator summary covering only the interior, and the pair is replaced by
/// a single number. The loop ends once no parentheses remain.
///
/// # Errors
/// - `ParseError::MismatchedParens` if a `(` is never closed or a `)` has no
///   `(` before it.
/// - `ParseError::EmptySubexpression` for `()`.
/// - Any evaluation error raised by an interior.
///
/// # Example
/// ```
/// use calcline::interpreter::{lexer::tokenize, resolver::resolve_parens, token::Token};
///
/// let flat = resolve_parens(tokenize("((1 + 2) * (3 + 4))").unwrap()).unwrap();
/// assert_eq!(flat, vec![Token::Number(21)]);
///
/// assert!(resolve_parens(tokenize("(1 + 2").unwrap()).is_err());
/// assert!(resolve_parens(tokenize("()").unwrap()).is_err());
/// ```
pub fn resolve_parens(mut tokens: Vec<Token>) -> ResolveResult<Vec<Token>> {
    loop {
        let Some(close) = tokens.iter().position(|t| *t == Token::RightParen) else {
            if tokens.contains(&Token::LeftParen) {
                return Err(ParseError::MismatchedParens { paren: '(' }.into());
            }
            return Ok(tokens);
        };
        let Some(open) = tokens[..close].iter().rposition(|t| *t == Token::LeftParen) else {
            return Err(ParseError::MismatchedParens { paren: ')' }.into());
        };

        let interior = &tokens[open + 1..close];
        if interior.is_empty() {
            return Err(ParseError::EmptySubexpression.into());
        }
        let value = evaluate_flat(interior, OperatorUsage::of(interior))?;
        trace!(open, close, value, "resolved parenthesis pair");

        tokens.splice(open..=close, iter::once(Token::Number(value)));
    }
}
