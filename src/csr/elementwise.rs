//! CSR element-wise operations

use crate::element::Element;
use crate::error::{Error, Result};
use crate::format::SparseStorage;

use super::CsrMatrix;

impl<T: Element> CsrMatrix<T> {
    /// Element-wise (Hadamard) product: `C[i,j] = A[i,j] * B[i,j]`
    ///
    /// Intersection semantics: the output stores a position only where both
    /// operands store one, since `0 * x = x * 0 = 0`. Per row this is a
    /// two-pointer merge over the sorted column slices, O(nnz(A) + nnz(B)).
    ///
    /// Not to be confused with [`matmul`](CsrMatrix::matmul), the
    /// matrix product.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] unless both shapes are
    /// identical.
    pub fn elementwise_mul(&self, other: &CsrMatrix<T>) -> Result<CsrMatrix<T>> {
        if self.shape != other.shape {
            return Err(Error::DimensionMismatch {
                lhs: self.shape,
                rhs: other.shape,
            });
        }

        let rows = self.nrows();
        let mut indptr = Vec::with_capacity(rows + 1);
        let mut indices = Vec::new();
        let mut data = Vec::new();

        indptr.push(0);
        for row in 0..rows {
            let (mut a, a_end) = (self.indptr[row], self.indptr[row + 1]);
            let (mut b, b_end) = (other.indptr[row], other.indptr[row + 1]);

            while a < a_end && b < b_end {
                let a_col = self.indices[a];
                let b_col = other.indices[b];
                if a_col == b_col {
                    indices.push(a_col);
                    data.push(self.data[a] * other.data[b]);
                    a += 1;
                    b += 1;
                } else if a_col < b_col {
                    a += 1;
                } else {
                    b += 1;
                }
            }
            indptr.push(indices.len());
        }

        Ok(CsrMatrix::from_parts_unchecked(
            rows,
            self.ncols(),
            indptr,
            indices,
            data,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elementwise_mul_intersection() {
        // [1, 2, 0]      [3, 0, 0]
        // [0, 4, 5]  .*  [0, 6, 7]
        let a = CsrMatrix::from_parts(
            2,
            3,
            vec![0, 2, 4],
            vec![0, 1, 1, 2],
            vec![1i32, 2, 4, 5],
        )
        .unwrap();
        let b = CsrMatrix::from_parts(2, 3, vec![0, 1, 3], vec![0, 1, 2], vec![3i32, 6, 7])
            .unwrap();

        let c = a.elementwise_mul(&b).unwrap();
        assert_eq!(c.nnz(), 3);
        assert_eq!(c.to_dense(), vec![3, 0, 0, 0, 24, 35]);
    }

    #[test]
    fn test_elementwise_mul_disjoint_patterns() {
        let a = CsrMatrix::from_parts(1, 4, vec![0, 2], vec![0, 2], vec![1.0f64, 2.0]).unwrap();
        let b = CsrMatrix::from_parts(1, 4, vec![0, 2], vec![1, 3], vec![3.0, 4.0]).unwrap();

        let c = a.elementwise_mul(&b).unwrap();
        assert_eq!(c.nnz(), 0);
        assert_eq!(c.to_dense(), vec![0.0; 4]);
    }

    #[test]
    fn test_elementwise_mul_shape_mismatch() {
        let a = CsrMatrix::<f32>::empty(2, 3);
        let b = CsrMatrix::<f32>::empty(3, 2);
        assert!(matches!(
            a.elementwise_mul(&b),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_elementwise_differs_from_matmul() {
        let a = CsrMatrix::from_parts(
            2,
            2,
            vec![0, 2, 4],
            vec![0, 1, 0, 1],
            vec![1i64, 2, 3, 4],
        )
        .unwrap();

        let hadamard = a.elementwise_mul(&a).unwrap();
        let product = a.matmul(&a).unwrap();
        assert_eq!(hadamard.to_dense(), vec![1, 4, 9, 16]);
        assert_eq!(product.to_dense(), vec![7, 10, 15, 22]);
    }
}
