/// The evaluator reduces a flat token sequence to a single integer.
///
/// It applies operator precedence as a series of left-to-right passes, one
/// per precedence class, over a sequence that contains no parentheses.
///
/// # Responsibilities
/// - Validates operator placement before every pass.
/// - Performs wrapping 64-bit arithmetic with truncating division.
/// - Reports division by zero, negative exponents and malformed input.
pub mod evaluator;
/// The lexer turns a line of text into tokens.
///
/// This is the first stage of evaluation. Operators and parentheses become
/// single tokens, whitespace separates, and everything else must be an
/// integer literal.
pub mod lexer;
/// The resolver eliminates parentheses.
///
/// Each innermost parenthesis pair is evaluated on its own and replaced by
/// its value until the sequence is flat.
pub mod resolver;
/// Token types shared by every stage.
pub mod token;
