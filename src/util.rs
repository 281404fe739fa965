/// Fixed-width integer arithmetic helpers.
///
/// The evaluator works on `i64` with native machine-word semantics: results
/// wrap on overflow and division truncates toward zero. These helpers cover
/// the two operations whose edge cases need an error instead of a panic.
pub mod num;
