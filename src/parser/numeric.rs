//! Numeric value filter
//!
//! Every decoder gates metric values through this predicate before
//! emission; non-numeric values are dropped, never errors.

/// Check whether a token is a finite numeric literal.
///
/// Accepts integers, decimals, signed values, and scientific notation.
/// Rejects empty strings, malformed literals, and the non-finite spellings
/// (`nan`, `inf`) that `f64::from_str` would otherwise admit.
pub fn is_numeric(token: &str) -> bool {
    token.parse::<f64>().map(f64::is_finite).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_numeric_literals() {
        assert!(is_numeric("0"));
        assert!(is_numeric("1234"));
        assert!(is_numeric("-17"));
        assert!(is_numeric("3.25"));
        assert!(is_numeric("-0.001"));
        assert!(is_numeric("1e6"));
        assert!(is_numeric("2.5E-3"));
    }

    #[test]
    fn test_rejects_non_numeric_tokens() {
        assert!(!is_numeric(""));
        assert!(!is_numeric("true"));
        assert!(!is_numeric("4.3.12"));
        assert!(!is_numeric("12ms"));
        assert!(!is_numeric("1,000"));
    }

    #[test]
    fn test_rejects_non_finite_literals() {
        assert!(!is_numeric("nan"));
        assert!(!is_numeric("NaN"));
        assert!(!is_numeric("inf"));
        assert!(!is_numeric("-inf"));
        assert!(!is_numeric("infinity"));
    }
}
