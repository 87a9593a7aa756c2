//! Trial-division primality tests.
//!
//! [`is_prime`] walks the 6k±1 wheel; [`is_prime_odd_division`] tries every
//! odd candidate. Both give the same answer for every `i32`, the wheel just
//! performs roughly a third of the divisions.

/// Primality test using the 6k±1 wheel.
///
/// Every prime above 3 is congruent to 1 or 5 modulo 6, so after ruling out
/// 2 and 3 only candidates `i` and `i + 2` for `i = 5, 11, 17, ...` need to
/// be tried, up to `sqrt(n)`.
pub fn is_prime(n: i32) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    // i64 keeps i*i from overflowing near i32::MAX
    let n = n as i64;
    let mut i: i64 = 5;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Primality test trying every odd divisor up to `sqrt(n)`.
pub fn is_prime_odd_division(n: i32) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let n = n as i64;
    let mut i: i64 = 3;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}
