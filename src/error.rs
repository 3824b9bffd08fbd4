//! Error types for spmat

use thiserror::Error;

/// Result type alias using spmat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in spmat operations
///
/// All failures are synchronous and total: a constructor that fails returns
/// no partially built store, and nothing is retried internally. Indices are
/// `usize` throughout, so negative indices are unrepresentable; bounds
/// checking only has to reject indices at or above the declared dimension.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Index out of bounds
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Size of the dimension
        size: usize,
    },

    /// Shape mismatch between two operands
    #[error("Dimension mismatch: {lhs:?} vs {rhs:?}")]
    DimensionMismatch {
        /// Left-hand side shape [rows, cols]
        lhs: [usize; 2],
        /// Right-hand side shape [rows, cols]
        rhs: [usize; 2],
    },

    /// Parallel arrays with different lengths
    #[error("Length mismatch: expected {expected}, got {got}")]
    LengthMismatch {
        /// Expected length
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// Raw arrays that do not form a valid compressed store
    #[error("Invalid format: {reason}")]
    InvalidFormat {
        /// Description of the violated invariant
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::IndexOutOfBounds { index: 5, size: 3 };
        assert_eq!(
            err.to_string(),
            "Index 5 out of bounds for dimension of size 3"
        );

        let err = Error::DimensionMismatch {
            lhs: [4, 4],
            rhs: [3, 3],
        };
        assert!(err.to_string().contains("[4, 4]"));
    }
}
