/// Sum of all elements, accumulated in `i64`.
///
/// An empty slice sums to 0.
pub fn sum(values: &[i32]) -> i64 {
    values.iter().map(|&v| v as i64).sum()
}

/// Arithmetic mean of the elements, or 0.0 for an empty slice.
pub fn average(values: &[i32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    sum(values) as f64 / values.len() as f64
}
