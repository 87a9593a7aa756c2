use covmath::{
    absolute_value, add, average, divide, divide_int, factorial, fibonacci, gcd, is_palindrome,
    is_prime, is_prime_odd_division, max, min, multiply, power, string_length, subtract, sum,
    MathError,
};
use proptest::prelude::*;

// Property 1: Addition and multiplication are commutative
proptest! {
    #[test]
    fn prop_add_multiply_commutative(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(add(a, b), add(b, a));
        prop_assert_eq!(multiply(a, b), multiply(b, a));
    }
}

// Property 2: Subtraction undoes addition, even across wrap-around
proptest! {
    #[test]
    fn prop_subtract_inverse_of_add(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(subtract(add(a, b), b), a);
    }
}

// Property 3: Integer division agrees with truncating division
proptest! {
    #[test]
    fn prop_divide_int_truncates(a in any::<i32>(), b in any::<i32>().prop_filter("non-zero", |b| *b != 0)) {
        let q = divide_int(a, b).unwrap();
        prop_assert_eq!(q, a.wrapping_div(b));
        if !(a == i32::MIN && b == -1) {
            prop_assert_eq!(q as i64, (a as i64) / (b as i64));
        }
    }
}

// Property 4: Zero divisors are always rejected
proptest! {
    #[test]
    fn prop_zero_divisor_rejected(a in any::<i32>(), x in -1e9f64..1e9f64) {
        prop_assert_eq!(divide_int(a, 0), Err(MathError::InvalidArgument("Division by zero")));
        prop_assert!(divide(x, 0.0).is_err());
    }
}

// Property 5: power(x, 0) == 1 and power(x, e + 1) == power(x, e) * x
proptest! {
    #[test]
    fn prop_power_recurrence(base in any::<i32>(), exponent in 0i32..200) {
        prop_assert_eq!(power(base, 0).unwrap(), 1);
        let next = power(base, exponent + 1).unwrap();
        prop_assert_eq!(next, power(base, exponent).unwrap().wrapping_mul(base as i64));
    }
}

// Property 6: Negative inputs are rejected by power, factorial and fibonacci
proptest! {
    #[test]
    fn prop_negative_inputs_rejected(base in any::<i32>(), n in i32::MIN..0) {
        prop_assert!(power(base, n).is_err());
        prop_assert!(factorial(n).is_err());
        prop_assert!(fibonacci(n).is_err());
    }
}

// Property 7: Fibonacci recurrence F(n) = F(n-1) + F(n-2)
proptest! {
    #[test]
    fn prop_fibonacci_recurrence(n in 2i32..500) {
        let f = fibonacci(n).unwrap();
        let f1 = fibonacci(n - 1).unwrap();
        let f2 = fibonacci(n - 2).unwrap();
        prop_assert_eq!(f, f1.wrapping_add(f2));
    }
}

// Property 8: Both primality tests agree
proptest! {
    #[test]
    fn prop_primality_variants_agree(n in any::<i32>()) {
        prop_assert_eq!(is_prime(n), is_prime_odd_division(n));
    }
}

// Property 9: gcd divides both operands and is symmetric and sign-blind
proptest! {
    #[test]
    fn prop_gcd_divides(a in any::<i32>(), b in any::<i32>()) {
        let g = gcd(a, b);
        prop_assert_eq!(g, gcd(b, a));
        prop_assert_eq!(g, gcd(a.wrapping_neg(), b));
        if g == 0 {
            prop_assert!(a == 0 && b == 0);
        } else {
            prop_assert_eq!(a.unsigned_abs() % g, 0);
            prop_assert_eq!(b.unsigned_abs() % g, 0);
        }
    }
}

// Property 10: max/min select one of the operands and bracket the other
proptest! {
    #[test]
    fn prop_max_min_select(a in any::<i32>(), b in any::<i32>()) {
        let hi = max(a, b);
        let lo = min(a, b);
        prop_assert!(hi == a || hi == b);
        prop_assert!(lo == a || lo == b);
        prop_assert!(lo <= hi);
        prop_assert_eq!(hi as i64 + lo as i64, a as i64 + b as i64);
    }
}

// Property 11: absolute_value is non-negative away from i32::MIN
proptest! {
    #[test]
    fn prop_absolute_value(n in (i32::MIN + 1)..=i32::MAX) {
        let v = absolute_value(n);
        prop_assert!(v >= 0);
        prop_assert_eq!(v, absolute_value(-n));
    }
}

// Property 12: sum and average are consistent with each other
proptest! {
    #[test]
    fn prop_sum_average_consistent(values in prop::collection::vec(any::<i32>(), 1..200)) {
        let total = sum(&values);
        prop_assert_eq!(total, values.iter().map(|&v| v as i64).sum::<i64>());
        let mean = average(&values);
        prop_assert!((mean * values.len() as f64 - total as f64).abs() <= 1e-6 * total.unsigned_abs().max(1) as f64);
    }
}

// Property 13: A string mirrored around itself is a palindrome
proptest! {
    #[test]
    fn prop_mirrored_is_palindrome(half in "[a-zA-Z0-9]{1,40}", middle in proptest::option::of("[a-z]")) {
        let reversed: String = half.chars().rev().collect();
        let text = format!("{}{}{}", half, middle.unwrap_or_default(), reversed);
        prop_assert!(is_palindrome(Some(&text)));
        prop_assert_eq!(string_length(Some(&text)), text.len());
    }
}

// Property 14: Determinism (same input always produces same output)
proptest! {
    #[test]
    fn prop_determinism(n in -50i32..2_000, a in any::<i32>(), b in any::<i32>(), text in "\\PC{0,20}") {
        prop_assert_eq!(factorial(n), factorial(n));
        prop_assert_eq!(fibonacci(n), fibonacci(n));
        prop_assert_eq!(power(a, n), power(a, n));
        prop_assert_eq!(is_prime(a), is_prime(a));
        prop_assert_eq!(gcd(a, b), gcd(a, b));
        prop_assert_eq!(divide_int(a, b), divide_int(a, b));
        prop_assert_eq!(is_palindrome(Some(&text)), is_palindrome(Some(&text)));
    }
}
