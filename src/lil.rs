//! LIL (list-of-lists) builder: random single-cell assignment

use crate::coo::CooMatrix;
use crate::csr::CsrMatrix;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::format::{SparseFormat, SparseStorage};

/// LIL (List of Lists) sparse matrix builder
///
/// One sorted `(col, value)` list per row, supporting point lookup and
/// update in O(log k + k) for a row with k entries. The format of choice
/// when a matrix is assembled cell by cell rather than as a triplet stream.
///
/// Zero policy: assigning the additive identity removes the entry rather
/// than storing an explicit zero, so `nnz` always counts structurally
/// nonzero cells.
#[derive(Debug, Clone)]
pub struct LilMatrix<T> {
    shape: [usize; 2],
    rows: Vec<Vec<(usize, T)>>,
    nnz: usize,
}

impl<T: Element> LilMatrix<T> {
    /// Create an empty LIL builder with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            shape: [rows, cols],
            rows: vec![Vec::new(); rows],
            nnz: 0,
        }
    }

    /// Insert or overwrite the entry at `(row, col)`
    ///
    /// A zero value removes any existing entry instead of storing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `row` or `col` is outside the
    /// declared dimensions.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_bounds(row, col)?;

        let entries = &mut self.rows[row];
        match entries.binary_search_by_key(&col, |&(c, _)| c) {
            Ok(pos) => {
                if value.is_zero() {
                    entries.remove(pos);
                    self.nnz -= 1;
                } else {
                    entries[pos].1 = value;
                }
            }
            Err(pos) => {
                if !value.is_zero() {
                    entries.insert(pos, (col, value));
                    self.nnz += 1;
                }
            }
        }
        Ok(())
    }

    /// Returns the stored value at `(row, col)`, or zero if absent
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `row` or `col` is outside the
    /// declared dimensions.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_bounds(row, col)?;

        let entries = &self.rows[row];
        match entries.binary_search_by_key(&col, |&(c, _)| c) {
            Ok(pos) => Ok(entries[pos].1),
            Err(_) => Ok(T::zero()),
        }
    }

    /// Returns one row's `(col, value)` pairs, sorted by column
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `row >= nrows`.
    pub fn row_entries(&self, row: usize) -> Result<&[(usize, T)]> {
        if row >= self.nrows() {
            return Err(Error::IndexOutOfBounds {
                index: row,
                size: self.nrows(),
            });
        }
        Ok(&self.rows[row])
    }

    /// Compile into a CSR store
    ///
    /// Rows are already sorted and duplicate-free, so this is a straight
    /// concatenation with per-row counts accumulated into the indptr.
    pub fn to_csr(&self) -> CsrMatrix<T> {
        let mut indptr = Vec::with_capacity(self.nrows() + 1);
        let mut indices = Vec::with_capacity(self.nnz);
        let mut data = Vec::with_capacity(self.nnz);

        indptr.push(0);
        for entries in &self.rows {
            for &(col, value) in entries {
                indices.push(col);
                data.push(value);
            }
            indptr.push(indices.len());
        }

        CsrMatrix::from_parts_unchecked(self.nrows(), self.ncols(), indptr, indices, data)
    }

    /// Convert into a COO builder holding the same entries
    pub fn to_coo(&self) -> CooMatrix<T> {
        let mut row_indices = Vec::with_capacity(self.nnz);
        let mut col_indices = Vec::with_capacity(self.nnz);
        let mut values = Vec::with_capacity(self.nnz);
        for (row, entries) in self.rows.iter().enumerate() {
            for &(col, value) in entries {
                row_indices.push(row);
                col_indices.push(col);
                values.push(value);
            }
        }
        CooMatrix::from_parts_unchecked(self.shape, row_indices, col_indices, values)
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
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
        Ok(())
    }
}

impl<T: Element> SparseStorage for LilMatrix<T> {
    fn format(&self) -> SparseFormat {
        SparseFormat::Lil
    }

    fn shape(&self) -> [usize; 2] {
        self.shape
    }

    fn nnz(&self) -> usize {
        self.nnz
    }

    fn memory_usage(&self) -> usize {
        let entry_size = std::mem::size_of::<(usize, T)>();
        self.nnz * entry_size + self.nrows() * std::mem::size_of::<Vec<(usize, T)>>()
    }
}
