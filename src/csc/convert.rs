//! CSC conversions: CSR, COO

use crate::convert::{expand_major, transpose_compressed};
use crate::coo::CooMatrix;
use crate::csr::CsrMatrix;
use crate::element::Element;
use crate::format::SparseStorage;

use super::CscMatrix;

impl<T: Element> CscMatrix<T> {
    /// Convert to the row-major dual store
    ///
    /// Counting-sort reshuffle, O(nnz + rows + cols).
    pub fn to_csr(&self) -> CsrMatrix<T> {
        let (indptr, indices, data) = transpose_compressed(
            &self.indptr,
            &self.indices,
            &self.data,
            self.ncols(),
            self.nrows(),
        );
        CsrMatrix::from_parts_unchecked(self.nrows(), self.ncols(), indptr, indices, data)
    }

    /// Expand back into a COO builder, entries in column-major order
    pub fn to_coo(&self) -> CooMatrix<T> {
        let col_indices = expand_major(&self.indptr, self.ncols());
        CooMatrix::from_parts_unchecked(
            self.shape,
            self.indices.clone(),
            col_indices,
            self.data.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csc_to_csr_roundtrip() {
        // [0, 7]
        // [8, 0]
        let csc = CscMatrix::from_parts(2, 2, vec![0, 1, 2], vec![1, 0], vec![8i32, 7]).unwrap();
        let csr = csc.to_csr();

        assert_eq!(csr.indptr(), &[0, 1, 2]);
        assert_eq!(csr.indices(), &[1, 0]);
        assert_eq!(csr.data(), &[7, 8]);
        assert_eq!(csr.to_csc(), csc);
    }

    #[test]
    fn test_csc_to_coo() {
        let csc = CscMatrix::from_parts(2, 2, vec![0, 1, 2], vec![1, 0], vec![8i32, 7]).unwrap();
        let coo = csc.to_coo();

        assert_eq!(coo.row_indices(), &[1, 0]);
        assert_eq!(coo.col_indices(), &[0, 1]);
        assert_eq!(coo.to_csc(), csc);
    }
}
