//! Core CSC implementation: struct, creation, access

use crate::element::Element;
use crate::error::{Error, Result};
use crate::format::{SparseFormat, SparseStorage};

/// CSC (Compressed Sparse Column) sparse matrix
///
/// Column-major dual of [`CsrMatrix`](crate::csr::CsrMatrix):
///
/// - `indptr` (length `ncols + 1`): non-decreasing column offsets.
/// - `indices` (length nnz): row index of each entry, grouped contiguously
///   by column and strictly increasing within each column.
/// - `data` (length nnz): values, parallel to `indices`.
///
/// Column access ([`col_view`](CscMatrix::col_view)) is O(1); extracting a
/// row ([`row_nonzeros`](CscMatrix::row_nonzeros)) must scan every column
/// group, O(cols + nnz) worst case. That directional asymmetry is the whole
/// reason both duals exist.
///
/// Immutable once built, like its row-major counterpart.
#[derive(Debug, Clone, PartialEq)]
pub struct CscMatrix<T> {
    pub(crate) shape: [usize; 2],
    pub(crate) indptr: Vec<usize>,
    pub(crate) indices: Vec<usize>,
    pub(crate) data: Vec<T>,
}

impl<T: Element> CscMatrix<T> {
    /// Create a CSC matrix from raw arrays, validating every invariant
    ///
    /// Same validation as
    /// [`CsrMatrix::from_parts`](crate::csr::CsrMatrix::from_parts)
    /// with the axes swapped: `indptr`
    /// must have length `cols + 1`, be non-decreasing from 0 to nnz, and
    /// every column's row indices must be strictly increasing and `< rows`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidFormat`], [`Error::LengthMismatch`], or
    /// [`Error::IndexOutOfBounds`] per the violated invariant; no partial
    /// store on failure.
    pub fn from_parts(
        rows: usize,
        cols: usize,
        indptr: Vec<usize>,
        indices: Vec<usize>,
        data: Vec<T>,
    ) -> Result<Self> {
        if indptr.len() != cols + 1 {
            return Err(Error::InvalidFormat {
                reason: format!("indptr length {} != cols + 1 = {}", indptr.len(), cols + 1),
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
        if indptr[cols] != data.len() {
            return Err(Error::InvalidFormat {
                reason: format!(
                    "indptr[{}] = {}, expected nnz = {}",
                    cols,
                    indptr[cols],
                    data.len()
                ),
            });
        }
        // Validate the whole offset array before indexing any entry; the
        // endpoint checks above plus non-decreasing steps bound every
        // offset by nnz.
        if let Some(col) = (0..cols).find(|&col| indptr[col] > indptr[col + 1]) {
            return Err(Error::InvalidFormat {
                reason: format!(
                    "indptr decreases at column {col}: {} > {}",
                    indptr[col],
                    indptr[col + 1]
                ),
            });
        }
        for col in 0..cols {
            let (start, end) = (indptr[col], indptr[col + 1]);
            for idx in start..end {
                let row = indices[idx];
                if row >= rows {
                    return Err(Error::IndexOutOfBounds {
                        index: row,
                        size: rows,
                    });
                }
                if idx > start && indices[idx - 1] >= row {
                    return Err(Error::InvalidFormat {
                        reason: format!(
                            "column {col} rows not strictly increasing: {} then {row}",
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
    pub(crate) fn from_parts_unchecked(
        rows: usize,
        cols: usize,
        indptr: Vec<usize>,
        indices: Vec<usize>,
        data: Vec<T>,
    ) -> Self {
        debug_assert_eq!(indptr.len(), cols + 1);
        debug_assert_eq!(indices.len(), data.len());
        Self {
            shape: [rows, cols],
            indptr,
            indices,
            data,
        }
    }

    /// Create an empty CSC matrix (all-zero indptr)
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            shape: [rows, cols],
            indptr: vec![0; cols + 1],
            indices: Vec::new(),
            data: Vec::new(),
        }
    }

    /// Returns the column-offset array (`indptr`), length `ncols + 1`
    pub fn indptr(&self) -> &[usize] {
        &self.indptr
    }

    /// Returns the column-grouped row indices, length nnz
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the values, parallel to `indices`
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Returns the number of stored entries in `col`
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `col >= ncols`.
    pub fn nnz_in_col(&self, col: usize) -> Result<usize> {
        if col >= self.ncols() {
            return Err(Error::IndexOutOfBounds {
                index: col,
                size: self.ncols(),
            });
        }
        Ok(self.indptr[col + 1] - self.indptr[col])
    }

    /// Returns one column as borrowed `(row indices, values)` slices
    ///
    /// Dual of [`CsrMatrix::row_view`](crate::csr::CsrMatrix::row_view):
    /// no allocation, slices borrow from this matrix and cannot outlive it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `col >= ncols`.
    pub fn col_view(&self, col: usize) -> Result<(&[usize], &[T])> {
        if col >= self.ncols() {
            return Err(Error::IndexOutOfBounds {
                index: col,
                size: self.ncols(),
            });
        }
        let (start, end) = (self.indptr[col], self.indptr[col + 1]);
        Ok((&self.indices[start..end], &self.data[start..end]))
    }

    /// Returns the stored value at `(row, col)`, or zero if absent
    ///
    /// Binary search over the column's row slice, O(log k).
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
        let (start, end) = (self.indptr[col], self.indptr[col + 1]);
        match self.indices[start..end].binary_search(&row) {
            Ok(pos) => Ok(self.data[start + pos]),
            Err(_) => Ok(T::zero()),
        }
    }

    /// Collect one row's `(col, value)` pairs by scanning every column group
    ///
    /// A row's entries are scattered across all column groups in CSC, so
    /// this is O(cols + nnz) worst case per call where the CSR equivalent
    /// is O(1). Columns come out ascending.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `row >= nrows`.
    pub fn row_nonzeros(&self, row: usize) -> Result<Vec<(usize, T)>> {
        if row >= self.nrows() {
            return Err(Error::IndexOutOfBounds {
                index: row,
                size: self.nrows(),
            });
        }
        let mut entries = Vec::new();
        for col in 0..self.ncols() {
            let (start, end) = (self.indptr[col], self.indptr[col + 1]);
            if let Ok(pos) = self.indices[start..end].binary_search(&row) {
                entries.push((col, self.data[start + pos]));
            }
        }
        Ok(entries)
    }

    /// Materialize as a dense row-major buffer of length `rows * cols`
    ///
    /// O(rows*cols); debugging and testing aid.
    pub fn to_dense(&self) -> Vec<T> {
        let mut dense = vec![T::zero(); self.nrows() * self.ncols()];
        for col in 0..self.ncols() {
            for idx in self.indptr[col]..self.indptr[col + 1] {
                dense[self.indices[idx] * self.ncols() + col] = self.data[idx];
            }
        }
        dense
    }
}

impl<T: Element> SparseStorage for CscMatrix<T> {
    fn format(&self) -> SparseFormat {
        SparseFormat::Csc
    }

    fn shape(&self) -> [usize; 2] {
        self.shape
    }

    fn nnz(&self) -> usize {
        self.data.len()
    }

    fn memory_usage(&self) -> usize {
        let ptr_size = (self.ncols() + 1) * std::mem::size_of::<usize>();
        let index_size = self.nnz() * std::mem::size_of::<usize>();
        let value_size = self.nnz() * std::mem::size_of::<T>();
        ptr_size + index_size + value_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // [1, 0, 2]
    // [0, 0, 3]
    // [4, 5, 0]
    // CSC: col 0 -> rows 0,2; col 1 -> row 2; col 2 -> rows 0,1
    fn sample() -> CscMatrix<f32> {
        CscMatrix::from_parts(
            3,
            3,
            vec![0, 2, 3, 5],
            vec![0, 2, 2, 0, 1],
            vec![1.0, 4.0, 5.0, 2.0, 3.0],
        )
        .unwrap()
    }

    #[test]
    fn test_csc_creation() {
        let csc = sample();
        assert_eq!(csc.nnz(), 5);
        assert_eq!(csc.shape(), [3, 3]);
        assert_eq!(csc.format(), SparseFormat::Csc);
    }

    #[test]
    fn test_csc_get() {
        let csc = sample();
        assert_eq!(csc.get(0, 0).unwrap(), 1.0);
        assert_eq!(csc.get(2, 1).unwrap(), 5.0);
        assert_eq!(csc.get(1, 0).unwrap(), 0.0);
        assert!(csc.get(0, 3).is_err());
    }

    #[test]
    fn test_csc_col_view() {
        let csc = sample();
        let (rows, vals) = csc.col_view(2).unwrap();
        assert_eq!(rows, &[0, 1]);
        assert_eq!(vals, &[2.0, 3.0]);
        assert_eq!(csc.nnz_in_col(1).unwrap(), 1);
        assert!(csc.col_view(3).is_err());
    }

    #[test]
    fn test_csc_row_nonzeros() {
        let csc = sample();
        assert_eq!(csc.row_nonzeros(0).unwrap(), vec![(0, 1.0), (2, 2.0)]);
        assert_eq!(csc.row_nonzeros(1).unwrap(), vec![(2, 3.0)]);
        assert_eq!(csc.row_nonzeros(2).unwrap(), vec![(0, 4.0), (1, 5.0)]);
    }

    #[test]
    fn test_csc_to_dense() {
        let csc = sample();
        assert_eq!(
            csc.to_dense(),
            vec![1.0, 0.0, 2.0, 0.0, 0.0, 3.0, 4.0, 5.0, 0.0]
        );
    }

    #[test]
    fn test_csc_invalid_indptr() {
        let result = CscMatrix::from_parts(3, 3, vec![0, 2, 3], vec![0, 2], vec![1.0f32, 2.0]);
        assert!(matches!(result, Err(Error::InvalidFormat { .. })));
    }

    #[test]
    fn test_csc_rejects_indptr_overshooting_nnz() {
        let result = CscMatrix::from_parts(
            8,
            2,
            vec![0, 7, 5],
            vec![0, 1, 2, 3, 4],
            vec![1.0f64; 5],
        );
        assert!(matches!(result, Err(Error::InvalidFormat { .. })));
    }

    #[test]
    fn test_csc_rejects_duplicate_rows_in_column() {
        let result = CscMatrix::from_parts(3, 1, vec![0, 2], vec![1, 1], vec![1.0f32, 2.0]);
        assert!(matches!(result, Err(Error::InvalidFormat { .. })));
    }

    #[test]
    fn test_csc_rejects_row_out_of_bounds() {
        let result = CscMatrix::from_parts(2, 1, vec![0, 1], vec![4], vec![1.0f32]);
        assert!(matches!(result, Err(Error::IndexOutOfBounds { .. })));
    }
}
