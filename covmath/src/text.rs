//! Byte-string helpers with C-string semantics.
//!
//! `None` plays the role of a null pointer, and the first NUL byte (if any)
//! terminates the string. Comparisons are on raw bytes with no case folding.

/// Number of bytes before the terminator, or 0 for `None`.
pub fn string_length(s: Option<&str>) -> usize {
    match s {
        Some(s) => s.bytes().take_while(|&b| b != 0).count(),
        None => 0,
    }
}

/// Whether the string reads the same forwards and backwards, byte for byte.
///
/// `None` and the empty string are not palindromes; any single byte is.
///
/// # Example
/// ```
/// use covmath::is_palindrome;
///
/// assert!(is_palindrome(Some("racecar")));
/// assert!(!is_palindrome(Some("Racecar")));
/// assert!(!is_palindrome(Some("")));
/// ```
pub fn is_palindrome(s: Option<&str>) -> bool {
    let Some(text) = s else {
        return false;
    };

    let len = string_length(s);
    if len == 0 {
        return false;
    }

    let bytes = &text.as_bytes()[..len];
    bytes
        .iter()
        .zip(bytes.iter().rev())
        .take(len / 2)
        .all(|(left, right)| left == right)
}
