//! Core CSR implementation: struct, creation, access

use crate::element::Element;
use crate::error::{Error, Result};
use crate::format::{SparseFormat, SparseStorage};

/// CSR (Compressed Sparse Row) sparse matrix
///
/// The canonical access-optimized store. Three arrays:
///
/// - `indptr` (length `nrows + 1`): non-decreasing row offsets into the
///   other two; `indptr[0] == 0`, `indptr[nrows] == nnz`.
/// - `indices` (length nnz): column index of each entry, grouped
///   contiguously by row and **strictly increasing within each row**
///   (sorted, no duplicate coordinates).
/// - `data` (length nnz): value of each entry, parallel to `indices`.
///
/// A `CsrMatrix` is an immutable value object once built: every producing
/// operation (`matmul`, `elementwise_mul`, conversions) allocates a new
/// store and never mutates an operand, so committed matrices can be shared
/// by any number of concurrent readers.
///
/// The strict ordering invariant is enforced by
/// [`from_parts`](CsrMatrix::from_parts) and preserved by every conversion
/// and operation in the crate; it is what makes
/// [`get`](CsrMatrix::get) a binary search.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix<T> {
    pub(crate) shape: [usize; 2],
    pub(crate) indptr: Vec<usize>,
    pub(crate) indices: Vec<usize>,
    pub(crate) data: Vec<T>,
}

impl<T: Element> CsrMatrix<T> {
    /// Create a CSR matrix from raw arrays, validating every invariant
    ///
    /// # Arguments
    ///
    /// * `rows`, `cols` - Matrix dimensions
    /// * `indptr` - Row offsets (length `rows + 1`)
    /// * `indices` - Column indices, row-grouped, strictly increasing per row
    /// * `data` - Values, parallel to `indices`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if `indptr` has the wrong length, is
    /// not non-decreasing, does not start at 0 or end at `data.len()`, or if
    /// any row's column indices are unsorted or duplicated (duplicate
    /// coordinates are rejected rather than merged: raw arrays are expected
    /// to be fully compiled, and silently accepting duplicates would break
    /// the uniqueness invariant). Returns [`Error::LengthMismatch`] if
    /// `indices` and `data` differ in length, and
    /// [`Error::IndexOutOfBounds`] if a column index is `>= cols`.
    ///
    /// On failure no partially built store is returned.
    pub fn from_parts(
        rows: usize,
        cols: usize,
        indptr: Vec<usize>,
        indices: Vec<usize>,
        data: Vec<T>,
    ) -> Result<Self> {
        if indptr.len() != rows + 1 {
            return Err(Error::InvalidFormat {
                reason: format!("indptr length {} != rows + 1 = {}", indptr.len(), rows + 1),
            });
        }
        if indices.len() != data.len() {
            return Err(Error::LengthMismatch {
                expected: data.len(),
                got: indices.len(),
            });
        }
        if indptr[0] != 0 {
            return Err(Error::InvalidFormat {
                reason: format!("indptr[0] = {}, expected 0", indptr[0]),
            });
        }
        if indptr[rows] != data.len() {
            return Err(Error::InvalidFormat {
                reason: format!(
                    "indptr[{}] = {}, expected nnz = {}",
                    rows,
                    indptr[rows],
                    data.len()
                ),
            });
        }
        // The whole offset array must be validated before any entry is
        // indexed: with indptr[0] == 0, indptr[rows] == nnz and every step
        // non-decreasing, each offset is bounded by nnz, so the per-row
        // scans below cannot run past `indices`.
        if let Some(row) = (0..rows).find(|&row| indptr[row] > indptr[row + 1]) {
            return Err(Error::InvalidFormat {
                reason: format!(
                    "indptr decreases at row {row}: {} > {}",
                    indptr[row],
                    indptr[row + 1]
                ),
            });
        }
        for row in 0..rows {
            let (start, end) = (indptr[row], indptr[row + 1]);
            for idx in start..end {
                let col = indices[idx];
                if col >= cols {
                    return Err(Error::IndexOutOfBounds {
                        index: col,
                        size: cols,
                    });
                }
                if idx > start && indices[idx - 1] >= col {
                    return Err(Error::InvalidFormat {
                        reason: format!(
                            "row {row} columns not strictly increasing: {} then {col}",
                            indices[idx - 1]
                        ),
                    });
                }
            }
        }

        Ok(Self {
            shape: [rows, cols],
            indptr,
            indices,
            data,
        })
    }

    /// Construct without validation; the caller guarantees the invariants
    ///
    /// Used by the builders and converters, which produce well-formed arrays
    /// by construction.
    pub(crate) fn from_parts_unchecked(
        rows: usize,
        cols: usize,
        indptr: Vec<usize>,
        indices: Vec<usize>,
        data: Vec<T>,
    ) -> Self {
        debug_assert_eq!(indptr.len(), rows + 1);
        debug_assert_eq!(indices.len(), data.len());
        Self {
            shape: [rows, cols],
            indptr,
            indices,
            data,
        }
    }

    /// Create an empty CSR matrix (all-zero indptr)
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            shape: [rows, cols],
            indptr: vec![0; rows + 1],
            indices: Vec::new(),
            data: Vec::new(),
        }
    }

    /// Returns the row-offset array (`indptr`), length `nrows + 1`
    pub fn indptr(&self) -> &[usize] {
        &self.indptr
    }

    /// Returns the row-grouped column indices, length nnz
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the values, parallel to `indices`
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Returns the number of stored entries in `row`
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `row >= nrows`.
    pub fn nnz_in_row(&self, row: usize) -> Result<usize> {
        if row >= self.nrows() {
            return Err(Error::IndexOutOfBounds {
                index: row,
                size: self.nrows(),
            });
        }
        Ok(self.indptr[row + 1] - self.indptr[row])
    }

    /// Returns one row as borrowed `(column indices, values)` slices
    ///
    /// No new store is constructed: the returned slices borrow directly
    /// from this matrix's arrays and cannot outlive it. Columns come out
    /// strictly increasing. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `row >= nrows`.
    pub fn row_view(&self, row: usize) -> Result<(&[usize], &[T])> {
        if row >= self.nrows() {
            return Err(Error::IndexOutOfBounds {
                index: row,
                size: self.nrows(),
            });
        }
        let (start, end) = (self.indptr[row], self.indptr[row + 1]);
        Ok((&self.indices[start..end], &self.data[start..end]))
    }

    /// Returns the stored value at `(row, col)`, or zero if absent
    ///
    /// Binary search over the row's column slice: O(log k) for a row with k
    /// entries, never O(cols).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `row` or `col` is outside the
    /// declared dimensions.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        if row >= self.nrows() {
            return Err(Error::IndexOutOfBounds {
                index: row,
                size: self.nrows(),
            });
        }
        if col >= self.ncols() {
            return Err(Error::IndexOutOfBounds {
                index: col,
                size: self.ncols(),
            });
        }
        let (start, end) = (self.indptr[row], self.indptr[row + 1]);
        match self.indices[start..end].binary_search(&col) {
            Ok(pos) => Ok(self.data[start + pos]),
            Err(_) => Ok(T::zero()),
        }
    }

    /// Materialize as a dense row-major buffer of length `rows * cols`
    ///
    /// Explicit O(rows*cols) time and memory; a debugging and testing aid,
    /// not a hot path.
    pub fn to_dense(&self) -> Vec<T> {
        let mut dense = vec![T::zero(); self.nrows() * self.ncols()];
        for row in 0..self.nrows() {
            for idx in self.indptr[row]..self.indptr[row + 1] {
                dense[row * self.ncols() + self.indices[idx]] = self.data[idx];
            }
        }
        dense
    }

    /// Extract the diagonal as a vector of length `min(nrows, ncols)`
    ///
    /// Missing diagonal entries come back as zeros.
    pub fn diagonal(&self) -> Vec<T> {
        let n = self.nrows().min(self.ncols());
        let mut diag = vec![T::zero(); n];
        for (row, d) in diag.iter_mut().enumerate() {
            let (start, end) = (self.indptr[row], self.indptr[row + 1]);
            if let Ok(pos) = self.indices[start..end].binary_search(&row) {
                *d = self.data[start + pos];
            }
        }
        diag
    }

    /// Check that every diagonal position has a structural entry
    ///
    /// For rectangular matrices, checks positions `0..min(nrows, ncols)`.
    /// A structural entry counts even if its value is zero.
    pub fn has_full_diagonal(&self) -> bool {
        let n = self.nrows().min(self.ncols());
        (0..n).all(|row| {
            let (start, end) = (self.indptr[row], self.indptr[row + 1]);
            self.indices[start..end].binary_search(&row).is_ok()
        })
    }
}

impl<T: Element> SparseStorage for CsrMatrix<T> {
    fn format(&self) -> SparseFormat {
        SparseFormat::Csr
    }

    fn shape(&self) -> [usize; 2] {
        self.shape
    }

    fn nnz(&self) -> usize {
        self.data.len()
    }

    fn memory_usage(&self) -> usize {
        let ptr_size = (self.nrows() + 1) * std::mem::size_of::<usize>();
        let index_size = self.nnz() * std::mem::size_of::<usize>();
        let value_size = self.nnz() * std::mem::size_of::<T>();
        ptr_size + index_size + value_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Matrix used throughout:
    // [1, 0, 2]
    // [0, 0, 3]
    // [4, 5, 0]
    fn sample() -> CsrMatrix<f32> {
        CsrMatrix::from_parts(
            3,
            3,
            vec![0, 2, 3, 5],
            vec![0, 2, 2, 0, 1],
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
        )
        .unwrap()
    }

    #[test]
    fn test_csr_creation() {
        let csr = sample();
        assert_eq!(csr.nnz(), 5);
        assert_eq!(csr.shape(), [3, 3]);
        assert_eq!(csr.nrows(), 3);
        assert_eq!(csr.ncols(), 3);
    }

    #[test]
    fn test_csr_empty() {
        let csr = CsrMatrix::<f64>::empty(100, 200);
        assert_eq!(csr.nnz(), 0);
        assert_eq!(csr.shape(), [100, 200]);
        assert!(csr.is_empty());
        assert_eq!(csr.indptr().len(), 101); // nrows + 1
    }

    #[test]
    fn test_csr_get() {
        let csr = sample();
        assert_eq!(csr.get(0, 0).unwrap(), 1.0);
        assert_eq!(csr.get(0, 1).unwrap(), 0.0);
        assert_eq!(csr.get(1, 2).unwrap(), 3.0);
        assert_eq!(csr.get(2, 1).unwrap(), 5.0);
        assert!(csr.get(3, 0).is_err());
        assert!(csr.get(0, 3).is_err());
    }

    #[test]
    fn test_csr_row_view() {
        let csr = sample();
        let (cols, vals) = csr.row_view(0).unwrap();
        assert_eq!(cols, &[0, 2]);
        assert_eq!(vals, &[1.0, 2.0]);

        let (cols, vals) = csr.row_view(1).unwrap();
        assert_eq!(cols, &[2]);
        assert_eq!(vals, &[3.0]);

        assert!(csr.row_view(3).is_err());
        assert_eq!(csr.nnz_in_row(2).unwrap(), 2);
    }

    #[test]
    fn test_csr_to_dense() {
        let csr = sample();
        assert_eq!(
            csr.to_dense(),
            vec![1.0, 0.0, 2.0, 0.0, 0.0, 3.0, 4.0, 5.0, 0.0]
        );
    }

    #[test]
    fn test_csr_invalid_indptr_length() {
        let result = CsrMatrix::from_parts(
            3,
            3,
            vec![0, 2, 3], // wrong length, should be 4
            vec![0, 2, 2, 0, 1],
            vec![1.0f32, 2.0, 3.0, 4.0, 5.0],
        );
        assert!(matches!(result, Err(Error::InvalidFormat { .. })));
    }

    #[test]
    fn test_csr_invalid_indptr_monotonicity() {
        let result = CsrMatrix::from_parts(
            2,
            3,
            vec![0, 2, 1],
            vec![0, 1],
            vec![1.0f32, 2.0],
        );
        assert!(matches!(result, Err(Error::InvalidFormat { .. })));
    }

    #[test]
    fn test_csr_rejects_indptr_overshooting_nnz() {
        // An interior offset past nnz that then decreases must fail cleanly,
        // not read past the entry arrays.
        let result = CsrMatrix::from_parts(
            2,
            8,
            vec![0, 7, 5],
            vec![0, 1, 2, 3, 4],
            vec![1.0f64; 5],
        );
        assert!(matches!(result, Err(Error::InvalidFormat { .. })));
    }

    #[test]
    fn test_csr_indptr_must_end_at_nnz() {
        let result = CsrMatrix::from_parts(2, 3, vec![0, 1, 3], vec![0, 1], vec![1.0f32, 2.0]);
        assert!(matches!(result, Err(Error::InvalidFormat { .. })));
    }

    #[test]
    fn test_csr_rejects_duplicate_columns() {
        let result = CsrMatrix::from_parts(
            1,
            3,
            vec![0, 2],
            vec![1, 1],
            vec![1.0f32, 2.0],
        );
        assert!(matches!(result, Err(Error::InvalidFormat { .. })));
    }

    #[test]
    fn test_csr_rejects_unsorted_columns() {
        let result = CsrMatrix::from_parts(
            1,
            3,
            vec![0, 2],
            vec![2, 0],
            vec![1.0f32, 2.0],
        );
        assert!(matches!(result, Err(Error::InvalidFormat { .. })));
    }

    #[test]
    fn test_csr_rejects_column_out_of_bounds() {
        let result = CsrMatrix::from_parts(1, 2, vec![0, 1], vec![5], vec![1.0f32]);
        assert!(matches!(result, Err(Error::IndexOutOfBounds { .. })));
    }

    #[test]
    fn test_csr_memory_usage() {
        let csr = sample();
        let word = std::mem::size_of::<usize>();
        // 4 indptr + 5 indices (usize) + 5 f32 values
        assert_eq!(csr.memory_usage(), 4 * word + 5 * word + 5 * 4);
    }

    #[test]
    fn test_csr_diagonal() {
        let csr = sample();
        assert_eq!(csr.diagonal(), vec![1.0, 0.0, 0.0]);
        assert!(!csr.has_full_diagonal());

        let full = CsrMatrix::from_parts(
            2,
            2,
            vec![0, 1, 2],
            vec![0, 1],
            vec![1i64, 2],
        )
        .unwrap();
        assert_eq!(full.diagonal(), vec![1, 2]);
        assert!(full.has_full_diagonal());
    }
}
