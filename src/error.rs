//! Error types for closest-pair queries.

use thiserror::Error;

/// Caller-input problems, detected before any pair is computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairQueryError {
    #[error("at least 2 points are required, got {found}")]
    EmptyInput { found: usize },

    #[error("k must be in 1..={max_pairs}, got {k}")]
    InvalidK { k: usize, max_pairs: usize },
}

pub type Result<T> = std::result::Result<T, PairQueryError>;

/// Number of unordered pairs of `n` points, saturating instead of overflowing.
pub fn pair_count(n: usize) -> usize {
    if n < 2 {
        return 0;
    }
    // One of n, n - 1 is even; halve it first so the product overflows as late as possible.
    let (a, b) = if n % 2 == 0 { (n / 2, n - 1) } else { (n, (n - 1) / 2) };
    a.saturating_mul(b)
}

/// Checks the query preconditions: `n >= 2` and `1 <= k <= C(n, 2)`.
pub fn validate(n: usize, k: usize) -> Result<()> {
    if n < 2 {
        return Err(PairQueryError::EmptyInput { found: n });
    }
    let max_pairs = pair_count(n);
    if k == 0 || k > max_pairs {
        return Err(PairQueryError::InvalidK { k, max_pairs });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_count() {
        assert_eq!(pair_count(0), 0);
        assert_eq!(pair_count(1), 0);
        assert_eq!(pair_count(2), 1);
        assert_eq!(pair_count(4), 6);
        assert_eq!(pair_count(5), 10);
        assert_eq!(pair_count(usize::MAX), usize::MAX);
    }

    #[test]
    fn test_validate() {
        assert_eq!(validate(0, 1), Err(PairQueryError::EmptyInput { found: 0 }));
        assert_eq!(validate(1, 1), Err(PairQueryError::EmptyInput { found: 1 }));
        assert_eq!(validate(4, 0), Err(PairQueryError::InvalidK { k: 0, max_pairs: 6 }));
        assert_eq!(validate(4, 7), Err(PairQueryError::InvalidK { k: 7, max_pairs: 6 }));
        assert!(validate(4, 6).is_ok());
        assert!(validate(2, 1).is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PairQueryError::InvalidK { k: 7, max_pairs: 6 }.to_string(),
            "k must be in 1..=6, got 7"
        );
        assert_eq!(
            PairQueryError::EmptyInput { found: 1 }.to_string(),
            "at least 2 points are required, got 1"
        );
    }
}
