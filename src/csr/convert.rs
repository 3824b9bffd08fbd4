//! CSR conversions: CSC, COO, transpose

use crate::convert::{expand_major, transpose_compressed};
use crate::coo::CooMatrix;
use crate::csc::CscMatrix;
use crate::element::Element;
use crate::format::SparseStorage;

use super::CsrMatrix;

impl<T: Element> CsrMatrix<T> {
    /// Convert to the column-major dual store
    ///
    /// Counting-sort reshuffle, O(nnz + rows + cols). The result owns
    /// independent storage; this matrix is not touched.
    pub fn to_csc(&self) -> CscMatrix<T> {
        let (indptr, indices, data) = transpose_compressed(
            &self.indptr,
            &self.indices,
            &self.data,
            self.nrows(),
            self.ncols(),
        );
        CscMatrix::from_parts_unchecked(self.nrows(), self.ncols(), indptr, indices, data)
    }

    /// Build a CSR store from a CSC store of the same matrix
    pub fn from_csc(csc: &CscMatrix<T>) -> Self {
        csc.to_csr()
    }

    /// Expand back into a COO builder, entries in row-major order
    pub fn to_coo(&self) -> CooMatrix<T> {
        let row_indices = expand_major(&self.indptr, self.nrows());
        CooMatrix::from_parts_unchecked(
            self.shape,
            row_indices,
            self.indices.clone(),
            self.data.clone(),
        )
    }

    /// Returns the transpose as a new CSR store
    ///
    /// The transpose of a CSR matrix has exactly the arrays of its CSC
    /// conversion, reinterpreted with the axes swapped.
    pub fn transpose(&self) -> CsrMatrix<T> {
        let (indptr, indices, data) = transpose_compressed(
            &self.indptr,
            &self.indices,
            &self.data,
            self.nrows(),
            self.ncols(),
        );
        CsrMatrix::from_parts_unchecked(self.ncols(), self.nrows(), indptr, indices, data)
    }
}
