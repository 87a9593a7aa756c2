use crate::error::{MathError, Result};

/// Integer power `base^exponent`, widened to `i64`.
///
/// * `exponent == 0` yields 1 for every base, including 0.
/// * Negative exponents are rejected.
/// * Products beyond `i64` wrap, exactly as repeated wrapping multiplication would.
///
/// # Example
/// ```
/// assert_eq!(covmath::power(2, 10).unwrap(), 1024);
/// assert_eq!(covmath::power(0, 0).unwrap(), 1);
/// assert!(covmath::power(2, -1).is_err());
/// ```
pub fn power(base: i32, exponent: i32) -> Result<i64> {
    if exponent < 0 {
        return Err(MathError::invalid("power", "Negative exponent", (base, exponent)));
    }

    // squaring in the wrapping ring gives the same value as the naive product loop
    Ok((base as i64).wrapping_pow(exponent as u32))
}

/// `n!` computed with an iterative accumulator.
///
/// Exact for `n <= 20`; larger inputs wrap in `i64`.
pub fn factorial(n: i32) -> Result<i64> {
    if n < 0 {
        return Err(MathError::invalid("factorial", "Negative factorial", n));
    }

    let mut acc: i64 = 1;
    for k in 2..=n as i64 {
        acc = acc.wrapping_mul(k);
        // once every low bit is gone further factors cannot bring it back
        if acc == 0 {
            break;
        }
    }
    Ok(acc)
}
