/// Evaluation entry point.
///
/// Drives the reduction passes over a flat token sequence in precedence order
/// and checks that exactly one number remains.
pub mod core;

/// Single reduction pass.
///
/// Validates operator placement and collapses every `Number op Number`
/// triple of one precedence class, left to right.
pub mod pass;

/// Operator usage summary.
///
/// Records which precedence classes occur in a (sub)expression so the
/// evaluator can skip passes that have nothing to reduce.
pub mod usage;
