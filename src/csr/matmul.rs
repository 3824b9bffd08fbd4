//! CSR multiplication: dense-vector product and sparse-sparse matmul

use std::collections::HashMap;

use crate::element::Element;
use crate::error::{Error, Result};
use crate::format::SparseStorage;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use super::CsrMatrix;

impl<T: Element> CsrMatrix<T> {
    /// Dense-vector product: `y = A * x`
    ///
    /// O(nnz) total: each row accumulates `data[k] * x[indices[k]]` over its
    /// slice. Row-parallel when the `rayon` feature is enabled; the result
    /// is identical either way.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `x.len() != ncols`.
    pub fn mul_vector(&self, x: &[T]) -> Result<Vec<T>> {
        if x.len() != self.ncols() {
            return Err(Error::DimensionMismatch {
                lhs: self.shape,
                rhs: [x.len(), 1],
            });
        }

        #[cfg(feature = "rayon")]
        {
            Ok((0..self.nrows())
                .into_par_iter()
                .map(|row| self.row_dot(row, x))
                .collect())
        }

        #[cfg(not(feature = "rayon"))]
        {
            Ok((0..self.nrows()).map(|row| self.row_dot(row, x)).collect())
        }
    }

    #[inline]
    fn row_dot(&self, row: usize, x: &[T]) -> T {
        let mut acc = T::zero();
        for idx in self.indptr[row]..self.indptr[row + 1] {
            acc = acc + self.data[idx] * x[self.indices[idx]];
        }
        acc
    }

    /// Sparse-sparse matrix product: `C = A * B`
    ///
    /// Row-by-row sparse accumulation: for each nonzero `A[i, k]`, row k of
    /// `B` is scaled and accumulated into a hash accumulator keyed by output
    /// column, which is then compacted sorted by column. Partial products
    /// that sum to zero are kept as explicit entries, so the computation is
    /// exact for integers and deterministic for floats (per-row accumulation
    /// order follows A's storage order).
    ///
    /// Row-parallel when the `rayon` feature is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `self.ncols() != other.nrows()`,
    /// before any computation begins.
    pub fn matmul(&self, other: &CsrMatrix<T>) -> Result<CsrMatrix<T>> {
        if self.ncols() != other.nrows() {
            return Err(Error::DimensionMismatch {
                lhs: self.shape,
                rhs: other.shape,
            });
        }

        let m = self.nrows();
        let n = other.ncols();

        #[cfg(feature = "rayon")]
        let row_results: Vec<(Vec<usize>, Vec<T>)> = (0..m)
            .into_par_iter()
            .map(|row| self.matmul_row(other, row))
            .collect();

        #[cfg(not(feature = "rayon"))]
        let row_results: Vec<(Vec<usize>, Vec<T>)> =
            (0..m).map(|row| self.matmul_row(other, row)).collect();

        let total: usize = row_results.iter().map(|(cols, _)| cols.len()).sum();
        let mut indptr = Vec::with_capacity(m + 1);
        let mut indices = Vec::with_capacity(total);
        let mut data = Vec::with_capacity(total);

        indptr.push(0);
        for (cols, vals) in row_results {
            indices.extend(cols);
            data.extend(vals);
            indptr.push(indices.len());
        }

        Ok(CsrMatrix::from_parts_unchecked(m, n, indptr, indices, data))
    }

    /// Compute one output row of `self * other`, compacted sorted by column
    fn matmul_row(&self, other: &CsrMatrix<T>, row: usize) -> (Vec<usize>, Vec<T>) {
        let mut accum: HashMap<usize, T> = HashMap::new();

        for a_idx in self.indptr[row]..self.indptr[row + 1] {
            let k = self.indices[a_idx];
            let a_val = self.data[a_idx];

            for b_idx in other.indptr[k]..other.indptr[k + 1] {
                let j = other.indices[b_idx];
                let contrib = a_val * other.data[b_idx];
                accum
                    .entry(j)
                    .and_modify(|v| *v = *v + contrib)
                    .or_insert(contrib);
            }
        }

        let mut entries: Vec<(usize, T)> = accum.into_iter().collect();
        entries.sort_unstable_by_key(|&(col, _)| col);

        let mut cols = Vec::with_capacity(entries.len());
        let mut vals = Vec::with_capacity(entries.len());
        for (col, val) in entries {
            cols.push(col);
            vals.push(val);
        }
        (cols, vals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_vector() {
        // [ 2  0  0  1 ]
        // [ 0  3  0  0 ]
        // [ 0  0  0  0 ]
        // [ 4  0  5  0 ]
        let csr = CsrMatrix::from_parts(
            4,
            4,
            vec![0, 2, 3, 3, 5],
            vec![0, 3, 1, 0, 2],
            vec![2.0f64, 1.0, 3.0, 4.0, 5.0],
        )
        .unwrap();

        let y = csr.mul_vector(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(y, vec![6.0, 6.0, 0.0, 19.0]);
    }

    #[test]
    fn test_mul_vector_dimension_mismatch() {
        let csr = CsrMatrix::<f64>::empty(3, 4);
        assert!(matches!(
            csr.mul_vector(&[1.0, 2.0, 3.0]),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_matmul_identity() {
        let eye = CsrMatrix::from_parts(
            3,
            3,
            vec![0, 1, 2, 3],
            vec![0, 1, 2],
            vec![1i64, 1, 1],
        )
        .unwrap();
        let a = CsrMatrix::from_parts(3, 3, vec![0, 2, 2, 3], vec![0, 2, 1], vec![5i64, 7, 9])
            .unwrap();

        assert_eq!(eye.matmul(&a).unwrap(), a);
        assert_eq!(a.matmul(&eye).unwrap(), a);
    }

    #[test]
    fn test_matmul_matches_dense_product() {
        // The 4x4 example: nonzeros at
        // (0,0)=1, (1,1)=3, (2,1)=1, (2,2)=1, (3,0)=1, (3,3)=1
        let a = CsrMatrix::from_parts(
            4,
            4,
            vec![0, 1, 2, 4, 6],
            vec![0, 1, 1, 2, 0, 3],
            vec![1i64, 3, 1, 1, 1, 1],
        )
        .unwrap();

        let c = a.matmul(&a).unwrap();
        assert_eq!(c.get(1, 1).unwrap(), 9);
        assert_eq!(c.get(2, 1).unwrap(), 4);
        assert_eq!(c.get(3, 0).unwrap(), 2);

        // Full check against the naive dense product
        let ad = a.to_dense();
        let mut expected = vec![0i64; 16];
        for i in 0..4 {
            for k in 0..4 {
                for j in 0..4 {
                    expected[i * 4 + j] += ad[i * 4 + k] * ad[k * 4 + j];
                }
            }
        }
        assert_eq!(c.to_dense(), expected);
    }

    #[test]
    fn test_matmul_rectangular_shapes() {
        // 2x3 times 3x2 -> 2x2
        let a = CsrMatrix::from_parts(2, 3, vec![0, 2, 3], vec![0, 2, 1], vec![1.0f64, 2.0, 3.0])
            .unwrap();
        let b = CsrMatrix::from_parts(3, 2, vec![0, 1, 2, 3], vec![1, 0, 0], vec![4.0, 5.0, 6.0])
            .unwrap();

        let c = a.matmul(&b).unwrap();
        assert_eq!(c.shape(), [2, 2]);
        // row 0: 1*[0,4] + 2*[6,0] = [12, 4]
        // row 1: 3*[5,0]           = [15, 0]
        assert_eq!(c.to_dense(), vec![12.0, 4.0, 15.0, 0.0]);
    }

    #[test]
    fn test_matmul_dimension_mismatch() {
        let a = CsrMatrix::<i32>::empty(4, 4);
        let b = CsrMatrix::<i32>::empty(3, 3);
        assert_eq!(
            a.matmul(&b),
            Err(Error::DimensionMismatch {
                lhs: [4, 4],
                rhs: [3, 3],
            })
        );
    }

    #[test]
    fn test_matmul_output_rows_sorted_unique() {
        let a = CsrMatrix::from_parts(
            2,
            2,
            vec![0, 2, 4],
            vec![0, 1, 0, 1],
            vec![1.0f32, 2.0, 3.0, 4.0],
        )
        .unwrap();

        let c = a.matmul(&a).unwrap();
        for row in 0..2 {
            let (cols, _) = c.row_view(row).unwrap();
            assert!(cols.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
