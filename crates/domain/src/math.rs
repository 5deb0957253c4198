//! Integer helpers shared by the aggregation statistics.

/// Divide rounding up, for non-negative `dividend` and positive `divisor`.
///
/// `ceil_div(3, 2) == 2`, `ceil_div(4, 2) == 2`, `ceil_div(0, 5) == 0`.
/// Callers guard against a zero divisor; it is a precondition, not a runtime case.
#[inline]
pub fn ceil_div(dividend: u64, divisor: u64) -> u64 {
    debug_assert!(divisor > 0, "ceil_div called with a zero divisor");
    (dividend + divisor - 1) / divisor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceil_div() {
        assert_eq!(ceil_div(0, 5), 0);
        assert_eq!(ceil_div(3, 2), 2);
        assert_eq!(ceil_div(4, 2), 2);
        assert_eq!(ceil_div(7, 3), 3);
        assert_eq!(ceil_div(1, 1), 1);
    }
}
