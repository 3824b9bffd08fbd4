//! COO (coordinate) builder: triplet accumulation and compilation

use crate::convert::compress_triplets;
use crate::csc::CscMatrix;
use crate::csr::CsrMatrix;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::format::{SparseFormat, SparseStorage};

/// COO (Coordinate) sparse matrix builder
///
/// Accumulates `(row, col, value)` triplets in arbitrary order. Duplicate
/// coordinates are allowed and represent accumulation: compiling the builder
/// into a compressed store sums them. This is the natural entry point for
/// incremental construction; all read-heavy work happens on the
/// [`CsrMatrix`]/[`CscMatrix`] it compiles into.
///
/// The builder is single-writer: it owns its triplet arrays exclusively and
/// shares no storage with the stores it produces.
#[derive(Debug, Clone)]
pub struct CooMatrix<T> {
    shape: [usize; 2],
    row_indices: Vec<usize>,
    col_indices: Vec<usize>,
    values: Vec<T>,
}

impl<T: Element> CooMatrix<T> {
    /// Create an empty COO builder with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            shape: [rows, cols],
            row_indices: Vec::new(),
            col_indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Create an empty COO builder with room for `capacity` triplets
    pub fn with_capacity(rows: usize, cols: usize, capacity: usize) -> Self {
        Self {
            shape: [rows, cols],
            row_indices: Vec::with_capacity(capacity),
            col_indices: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Create a COO builder from parallel triplet slices
    ///
    /// # Arguments
    ///
    /// * `rows`, `cols` - Matrix dimensions
    /// * `row_indices` - Row index of each entry
    /// * `col_indices` - Column index of each entry
    /// * `values` - Value of each entry
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the three slices differ in
    /// length, or [`Error::IndexOutOfBounds`] if any index is outside the
    /// declared dimensions.
    pub fn from_triplets(
        rows: usize,
        cols: usize,
        row_indices: &[usize],
        col_indices: &[usize],
        values: &[T],
    ) -> Result<Self> {
        if row_indices.len() != values.len() {
            return Err(Error::LengthMismatch {
                expected: values.len(),
                got: row_indices.len(),
            });
        }
        if col_indices.len() != values.len() {
            return Err(Error::LengthMismatch {
                expected: values.len(),
                got: col_indices.len(),
            });
        }
        for (&r, &c) in row_indices.iter().zip(col_indices.iter()) {
            if r >= rows {
                return Err(Error::IndexOutOfBounds {
                    index: r,
                    size: rows,
                });
            }
            if c >= cols {
                return Err(Error::IndexOutOfBounds {
                    index: c,
                    size: cols,
                });
            }
        }

        Ok(Self {
            shape: [rows, cols],
            row_indices: row_indices.to_vec(),
            col_indices: col_indices.to_vec(),
            values: values.to_vec(),
        })
    }

    /// Construct without validation; the caller guarantees bounds
    ///
    /// Used by the compressed stores when expanding back to COO: their
    /// invariants already imply every index is in bounds.
    pub(crate) fn from_parts_unchecked(
        shape: [usize; 2],
        row_indices: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        debug_assert_eq!(row_indices.len(), values.len());
        debug_assert_eq!(col_indices.len(), values.len());
        Self {
            shape,
            row_indices,
            col_indices,
            values,
        }
    }

    /// Append one triplet
    ///
    /// Duplicates of an existing coordinate are accepted; conversion sums
    /// them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `row` or `col` is outside the
    /// declared dimensions.
    pub fn push(&mut self, row: usize, col: usize, value: T) -> Result<()> {
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
        self.row_indices.push(row);
        self.col_indices.push(col);
        self.values.push(value);
        Ok(())
    }

    /// Iterate over the stored triplets in insertion order
    pub fn triplets(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.row_indices
            .iter()
            .zip(self.col_indices.iter())
            .zip(self.values.iter())
            .map(|((&r, &c), &v)| (r, c, v))
    }

    /// Returns the row indices of the stored triplets
    pub fn row_indices(&self) -> &[usize] {
        &self.row_indices
    }

    /// Returns the column indices of the stored triplets
    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    /// Returns the values of the stored triplets
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Compile into a CSR store
    ///
    /// Triplets are grouped by row, duplicates summed (in stable insertion
    /// order, so the result is deterministic for a fixed triplet sequence),
    /// and column indices sorted ascending within each row. The result owns
    /// independent storage; the builder is left untouched.
    pub fn to_csr(&self) -> CsrMatrix<T> {
        let (indptr, indices, data) = compress_triplets(
            &self.row_indices,
            &self.col_indices,
            &self.values,
            self.nrows(),
        );
        CsrMatrix::from_parts_unchecked(self.nrows(), self.ncols(), indptr, indices, data)
    }

    /// Compile into a CSC store
    ///
    /// Same grouping and duplicate summation as [`to_csr`](Self::to_csr),
    /// with columns as the compressed axis.
    pub fn to_csc(&self) -> CscMatrix<T> {
        let (indptr, indices, data) = compress_triplets(
            &self.col_indices,
            &self.row_indices,
            &self.values,
            self.ncols(),
        );
        CscMatrix::from_parts_unchecked(self.nrows(), self.ncols(), indptr, indices, data)
    }

    /// Materialize as a dense row-major buffer of length `rows * cols`
    ///
    /// Duplicate coordinates are summed. O(rows*cols) memory; debugging and
    /// testing aid, not a hot path.
    pub fn to_dense(&self) -> Vec<T> {
        let mut dense = vec![T::zero(); self.nrows() * self.ncols()];
        for (r, c, v) in self.triplets() {
            let idx = r * self.ncols() + c;
            dense[idx] = dense[idx] + v;
        }
        dense
    }
}

impl<T: Element> SparseStorage for CooMatrix<T> {
    fn format(&self) -> SparseFormat {
        SparseFormat::Coo
    }

    fn shape(&self) -> [usize; 2] {
        self.shape
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }

    fn memory_usage(&self) -> usize {
        let index_size = self.nnz() * std::mem::size_of::<usize>() * 2;
        let value_size = self.nnz() * std::mem::size_of::<T>();
        index_size + value_size
    }
}
