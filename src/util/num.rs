use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Divides `dividend` by `divisor`, truncating toward zero.
///
/// `i64::MIN / -1` wraps to `i64::MIN` instead of panicking.
///
/// ## Errors
/// Returns `EvalError::DivisionByZero` if `divisor` is zero.
///
/// ## Example
/// ```
/// use calcline::{error::EvalError, util::num::truncating_div};
///
/// assert_eq!(truncating_div(7, 2).unwrap(), 3);
/// assert_eq!(truncating_div(-7, 2).unwrap(), -3);
/// assert_eq!(truncating_div(i64::MIN, -1).unwrap(), i64::MIN);
///
/// let err = truncating_div(4, 0).unwrap_err();
/// assert!(matches!(err, EvalError::DivisionByZero { dividend: 4 }));
/// ```
pub const fn truncating_div(dividend: i64, divisor: i64) -> EvalResult<i64> {
    if divisor == 0 {
        return Err(EvalError::DivisionByZero { dividend });
    }
    Ok(dividend.wrapping_div(divisor))
}

/// Raises `base` to a non-negative `exponent`, wrapping on overflow.
///
/// Uses square-and-multiply, so the exponent may be any non-negative `i64`
/// and the result is `base ^ exponent` modulo 2^64, read as two's
/// complement.
///
/// ## Errors
/// Returns `EvalError::NegativeExponent` if `exponent` is below zero.
///
/// ## Example
/// ```
/// use calcline::{error::EvalError, util::num::wrapping_pow};
///
/// assert_eq!(wrapping_pow(2, 10).unwrap(), 1024);
/// assert_eq!(wrapping_pow(-3, 3).unwrap(), -27);
/// assert_eq!(wrapping_pow(5, 0).unwrap(), 1);
/// assert_eq!(wrapping_pow(2, 64).unwrap(), 0);
/// assert_eq!(wrapping_pow(-1, i64::MAX).unwrap(), -1);
///
/// let err = wrapping_pow(2, -1).unwrap_err();
/// assert!(matches!(err, EvalError::NegativeExponent { exponent: -1 }));
/// ```
pub fn wrapping_pow(base: i64, exponent: i64) -> EvalResult<i64> {
    if exponent < 0 {
        return Err(EvalError::NegativeExponent { exponent });
    }

    let mut result: i64 = 1;
    let mut square = base;
    let mut remaining = exponent.unsigned_abs();
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result.wrapping_mul(square);
        }
        remaining >>= 1;
        if remaining > 0 {
            square = square.wrapping_mul(square);
        }
    }
    Ok(result)
}
