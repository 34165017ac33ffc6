//! Binomial coefficients.
//!
//! The number of subsets with `k` elements of a set with `n` elements is the
//! binomial coefficient `C(n, k)`. The enumeration engine never calls this
//! module; it is used to cross-check enumeration counts.
//!
//! # Examples
//!
//! ```
//! use subsets::combinatorial::binomial;
//!
//! assert_eq!(binomial(8, 2), Ok(28));
//! assert_eq!(binomial(62, 31), Ok(465_428_353_255_261_088));
//!
//! let total: u64 = (0..=10).map(|k| binomial(10, k).unwrap()).sum();
//! assert_eq!(total, 1 << 10);
//! ```

/// Errors reported by [`binomial`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BinomialError {
    /// More elements are chosen than are available.
    #[display("cannot choose {n} out of {m} elements")]
    InvalidArguments {
        /// Number of elements to choose from.
        m: u64,
        /// Number of elements to choose.
        n: u64,
    },
    /// The coefficient does not fit in a `u64`.
    #[display("binomial coefficient overflows u64")]
    Overflow,
}

/// Returns the number of ways to choose `n` out of `m` elements,
/// `m! / (n! (m - n)!)`.
///
/// # Errors
///
/// Returns [`BinomialError::InvalidArguments`] if `n > m`, and
/// [`BinomialError::Overflow`] if the result does not fit in a `u64`.
pub fn binomial(m: u64, n: u64) -> Result<u64, BinomialError> {
    if n > m {
        return Err(BinomialError::InvalidArguments { m, n });
    }
    let n = n.min(m - n);
    // After step i the accumulator is C(m - n + i, i), always an integer.
    let mut result: u128 = 1;
    for i in 1..=u128::from(n) {
        result = result
            .checked_mul(u128::from(m - n) + i)
            .ok_or(BinomialError::Overflow)?
            / i;
        if result > u128::from(u64::MAX) {
            return Err(BinomialError::Overflow);
        }
    }
    u64::try_from(result).map_err(|_| BinomialError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        assert_eq!(binomial(0, 0), Ok(1));
        assert_eq!(binomial(5, 0), Ok(1));
        assert_eq!(binomial(5, 5), Ok(1));
        assert_eq!(binomial(5, 1), Ok(5));
    }

    #[test]
    fn test_known_values() {
        assert_eq!(binomial(5, 2), Ok(10));
        assert_eq!(binomial(10, 3), Ok(120));
        assert_eq!(binomial(52, 5), Ok(2_598_960));
        assert_eq!(binomial(62, 31), Ok(465_428_353_255_261_088));
    }

    #[test]
    fn test_symmetry() {
        for m in 0..=40 {
            for n in 0..=m {
                assert_eq!(binomial(m, n), binomial(m, m - n));
            }
        }
    }

    #[test]
    fn test_pascal_rule() {
        for m in 1..=60 {
            for n in 1..m {
                assert_eq!(
                    binomial(m, n).unwrap(),
                    binomial(m - 1, n - 1).unwrap() + binomial(m - 1, n).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_rows_sum_to_powers_of_two() {
        for m in 0..=62 {
            let sum: u64 = (0..=m).map(|n| binomial(m, n).unwrap()).sum();
            assert_eq!(sum, 1 << m);
        }
    }

    #[test]
    fn test_invalid_arguments() {
        assert_eq!(
            binomial(3, 4),
            Err(BinomialError::InvalidArguments { m: 3, n: 4 })
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(binomial(68, 34), Err(BinomialError::Overflow));
        assert_eq!(binomial(67, 33), Ok(14_226_520_737_620_288_370));
    }
}
