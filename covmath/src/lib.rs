//! # covmath
//!
//! Small, pure integer and string utilities: arithmetic, power and factorial,
//! primality, gcd, fibonacci, min/max, absolute value, sum/average and a pair
//! of byte-string helpers.
//!
//! Every function is stateless and deterministic. Invalid input is rejected
//! through a single convention, [`MathError::InvalidArgument`], never through
//! sentinel return values. Plain integer arithmetic wraps on overflow.
//!
//! All operations are re-exported at the crate root:
//!
//! ```
//! use covmath::{factorial, gcd, is_prime};
//!
//! assert_eq!(factorial(5).unwrap(), 120);
//! assert_eq!(gcd(12, 18), 6);
//! assert!(is_prime(97));
//! ```

pub mod arithmetic;
pub mod error;
pub mod power;
pub mod prime;
pub mod scalar;
pub mod stats;
pub mod text;

pub use arithmetic::{add, divide, divide_int, multiply, subtract};
pub use error::{MathError, Result};
pub use power::{factorial, power};
pub use prime::{is_prime, is_prime_odd_division};
pub use scalar::{absolute_value, fibonacci, gcd, max, min};
pub use stats::{average, sum};
pub use text::{is_palindrome, string_length};
