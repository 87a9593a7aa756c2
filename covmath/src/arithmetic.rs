use crate::error::{MathError, Result};

/// Wrapping integer addition
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Wrapping integer subtraction
pub fn subtract(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

/// Wrapping integer multiplication
pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Floating-point division.
///
/// Fails with [`MathError::InvalidArgument`] when `b` is zero (either sign).
/// Non-zero divisors follow IEEE-754, so NaN and infinite operands propagate.
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(MathError::invalid("divide", "Division by zero", (a, b)));
    }
    Ok(a / b)
}

/// Integer division truncating toward zero.
///
/// `i32::MIN / -1` wraps to `i32::MIN` instead of trapping.
pub fn divide_int(a: i32, b: i32) -> Result<i32> {
    if b == 0 {
        return Err(MathError::invalid("divide_int", "Division by zero", (a, b)));
    }
    Ok(a.wrapping_div(b))
}
