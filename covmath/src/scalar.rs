use crate::error::{MathError, Result};

/// `|n|`, wrapping for `i32::MIN`.
pub fn absolute_value(n: i32) -> i32 {
    if n < 0 { n.wrapping_neg() } else { n }
}

pub fn max(a: i32, b: i32) -> i32 {
    if a >= b { a } else { b }
}

pub fn min(a: i32, b: i32) -> i32 {
    if a <= b { a } else { b }
}

/// Greatest common divisor, always non-negative.
///
/// Operands are reduced to their magnitudes before the Euclidean loop, so the
/// result never depends on the sign convention of `%`. `gcd(0, 0)` is 0 and
/// `gcd(0, b)` is `|b|`. Returning `u32` keeps `gcd(i32::MIN, 0)` representable.
pub fn gcd(a: i32, b: i32) -> u32 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// n-th Fibonacci number with `F(0) = 0`, `F(1) = 1`.
///
/// Exact up to `F(92)`; later terms wrap in `i64`.
pub fn fibonacci(n: i32) -> Result<i64> {
    if n < 0 {
        return Err(MathError::invalid("fibonacci", "Negative fibonacci index", n));
    }
    if n == 0 {
        return Ok(0);
    }

    let (mut prev, mut curr): (i64, i64) = (0, 1);
    for _ in 1..n {
        (prev, curr) = (curr, prev.wrapping_add(curr));
    }
    Ok(curr)
}
