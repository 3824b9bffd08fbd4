//! High-level sparse matrix wrapper over the four physical formats

use crate::coo::CooMatrix;
use crate::csc::CscMatrix;
use crate::csr::CsrMatrix;
use crate::element::Element;
use crate::format::{SparseFormat, SparseStorage};
use crate::lil::LilMatrix;

/// Sparse matrix with runtime-selected storage format
///
/// The set of physical layouts is fixed and closed: exactly COO, LIL, CSR
/// and CSC. Modelling it as an enum (rather than open polymorphism) lets
/// every conversion and dispatch site match exhaustively, so adding a
/// format is a compile-checked change.
///
/// # Format Selection
///
/// - **COO**: best for bulk triplet construction
/// - **LIL**: best for random single-cell assignment
/// - **CSR**: best for row access and arithmetic (the canonical store)
/// - **CSC**: best for column access
///
/// The typical lifecycle accumulates into a `Coo` or `Lil` variant and
/// compiles once into `Csr` (or `Csc`) for all subsequent reads.
#[derive(Debug, Clone)]
pub enum SparseMatrix<T> {
    /// COO (Coordinate) builder - triplets in insertion order, duplicates allowed.
    Coo(CooMatrix<T>),

    /// LIL (List of Lists) builder - one sorted (col, value) list per row.
    Lil(LilMatrix<T>),

    /// CSR (Compressed Sparse Row) store - immutable, row-major access.
    Csr(CsrMatrix<T>),

    /// CSC (Compressed Sparse Column) store - immutable, column-major access.
    Csc(CscMatrix<T>),
}

impl<T: Element> SparseMatrix<T> {
    /// Compile into a CSR store, whatever the current format
    ///
    /// Builders are compiled (COO sums duplicates); an existing CSR is
    /// cloned; a CSC is transposed back. Always returns an independent
    /// store.
    pub fn to_csr(&self) -> CsrMatrix<T> {
        match self {
            SparseMatrix::Coo(coo) => coo.to_csr(),
            SparseMatrix::Lil(lil) => lil.to_csr(),
            SparseMatrix::Csr(csr) => csr.clone(),
            SparseMatrix::Csc(csc) => csc.to_csr(),
        }
    }

    /// Compile into a CSC store, whatever the current format
    pub fn to_csc(&self) -> CscMatrix<T> {
        match self {
            SparseMatrix::Coo(coo) => coo.to_csc(),
            SparseMatrix::Lil(lil) => lil.to_csr().to_csc(),
            SparseMatrix::Csr(csr) => csr.to_csc(),
            SparseMatrix::Csc(csc) => csc.clone(),
        }
    }

    /// Materialize as a dense row-major buffer of length `rows * cols`
    pub fn to_dense(&self) -> Vec<T> {
        match self {
            SparseMatrix::Coo(coo) => coo.to_dense(),
            SparseMatrix::Lil(lil) => lil.to_csr().to_dense(),
            SparseMatrix::Csr(csr) => csr.to_dense(),
            SparseMatrix::Csc(csc) => csc.to_dense(),
        }
    }
}

impl<T: Element> SparseStorage for SparseMatrix<T> {
    fn format(&self) -> SparseFormat {
        match self {
            SparseMatrix::Coo(_) => SparseFormat::Coo,
            SparseMatrix::Lil(_) => SparseFormat::Lil,
            SparseMatrix::Csr(_) => SparseFormat::Csr,
            SparseMatrix::Csc(_) => SparseFormat::Csc,
        }
    }

    fn shape(&self) -> [usize; 2] {
        match self {
            SparseMatrix::Coo(m) => m.shape(),
            SparseMatrix::Lil(m) => m.shape(),
            SparseMatrix::Csr(m) => m.shape(),
            SparseMatrix::Csc(m) => m.shape(),
        }
    }

    fn nnz(&self) -> usize {
        match self {
            SparseMatrix::Coo(m) => m.nnz(),
            SparseMatrix::Lil(m) => m.nnz(),
            SparseMatrix::Csr(m) => m.nnz(),
            SparseMatrix::Csc(m) => m.nnz(),
        }
    }

    fn memory_usage(&self) -> usize {
        match self {
            SparseMatrix::Coo(m) => m.memory_usage(),
            SparseMatrix::Lil(m) => m.memory_usage(),
            SparseMatrix::Csr(m) => m.memory_usage(),
            SparseMatrix::Csc(m) => m.memory_usage(),
        }
    }
}

impl<T> From<CooMatrix<T>> for SparseMatrix<T> {
    fn from(m: CooMatrix<T>) -> Self {
        SparseMatrix::Coo(m)
    }
}

impl<T> From<LilMatrix<T>> for SparseMatrix<T> {
    fn from(m: LilMatrix<T>) -> Self {
        SparseMatrix::Lil(m)
    }
}

impl<T> From<CsrMatrix<T>> for SparseMatrix<T> {
    fn from(m: CsrMatrix<T>) -> Self {
        SparseMatrix::Csr(m)
    }
}

impl<T> From<CscMatrix<T>> for SparseMatrix<T> {
    fn from(m: CscMatrix<T>) -> Self {
        SparseMatrix::Csc(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_dispatch() {
        let mut lil = LilMatrix::new(2, 2);
        lil.set(0, 1, 3.0f64).unwrap();
        let m: SparseMatrix<f64> = lil.into();

        assert_eq!(m.format(), SparseFormat::Lil);
        assert_eq!(m.shape(), [2, 2]);
        assert_eq!(m.nnz(), 1);
        assert_eq!(m.to_dense(), vec![0.0, 3.0, 0.0, 0.0]);
    }

    #[test]
    fn test_matrix_all_paths_agree() {
        let coo =
            CooMatrix::from_triplets(2, 3, &[0, 1, 1], &[2, 0, 1], &[1i64, 2, 3]).unwrap();
        let dense = coo.to_dense();

        let variants: Vec<SparseMatrix<i64>> = vec![
            coo.clone().into(),
            coo.to_csr().into(),
            coo.to_csc().into(),
        ];
        for m in &variants {
            assert_eq!(m.to_dense(), dense);
            assert_eq!(m.to_csr().to_dense(), dense);
            assert_eq!(m.to_csc().to_dense(), dense);
        }
    }
}
