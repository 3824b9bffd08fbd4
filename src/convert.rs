//! Pure format-conversion kernels shared by the matrix types
//!
//! Every function here is a stateless transformation over borrowed input
//! arrays: nothing is mutated, outputs own independent storage, and repeated
//! or concurrent calls over the same inputs are safe. The typed wrappers
//! (`CooMatrix::to_csr`, `CsrMatrix::to_csc`, ...) delegate to these kernels.
//!
//! The kernels are axis-neutral. "Major" is the compressed axis: rows for
//! CSR, columns for CSC. Converting in the other direction is the same
//! kernel with the axes swapped.

use crate::element::Element;

/// Compress coordinate triplets along `major_dim`, summing duplicates.
///
/// Entries are stable-sorted by (major, minor), then runs sharing the same
/// coordinate are merged by summation in that stable order. For a fixed
/// input sequence the summation order is therefore deterministic (floating
/// point totals can still differ between *different* input orderings of the
/// same logical triplets; callers that care should sort first).
///
/// Returns `(indptr, minor_indices, values)` with `indptr.len() ==
/// major_dim + 1`, minor indices strictly increasing within each major
/// slice.
///
/// Callers must have bounds-checked the indices already.
pub fn compress_triplets<T: Element>(
    major_idx: &[usize],
    minor_idx: &[usize],
    values: &[T],
    major_dim: usize,
) -> (Vec<usize>, Vec<usize>, Vec<T>) {
    let nnz = values.len();

    let mut perm: Vec<usize> = (0..nnz).collect();
    perm.sort_by_key(|&i| (major_idx[i], minor_idx[i]));

    let mut sorted_minor: Vec<usize> = Vec::with_capacity(nnz);
    let mut sorted_values: Vec<T> = Vec::with_capacity(nnz);
    let mut counts = vec![0usize; major_dim];

    for &i in &perm {
        sorted_minor.push(minor_idx[i]);
        sorted_values.push(values[i]);
        counts[major_idx[i]] += 1;
    }

    let (out_minor, out_values, counts) = merge_sorted_runs(sorted_minor, sorted_values, counts);

    let mut indptr = vec![0usize; major_dim + 1];
    for major in 0..major_dim {
        indptr[major + 1] = indptr[major] + counts[major];
    }

    (indptr, out_minor, out_values)
}

fn merge_sorted_runs<T: Element>(
    minor: Vec<usize>,
    values: Vec<T>,
    counts: Vec<usize>,
) -> (Vec<usize>, Vec<T>, Vec<usize>) {
    let mut out_minor = Vec::with_capacity(minor.len());
    let mut out_values = Vec::with_capacity(values.len());
    let mut out_counts = vec![0usize; counts.len()];

    let mut pos = 0;
    for (major, &count) in counts.iter().enumerate() {
        let end = pos + count;
        while pos < end {
            let m = minor[pos];
            let mut acc = values[pos];
            pos += 1;
            while pos < end && minor[pos] == m {
                acc = acc + values[pos];
                pos += 1;
            }
            out_minor.push(m);
            out_values.push(acc);
            out_counts[major] += 1;
        }
    }

    (out_minor, out_values, out_counts)
}

/// Transpose a compressed store: reshuffle (indptr over major, minor
/// indices, values) into the compressed form of the other axis.
///
/// This is the CSR⇄CSC conversion kernel. Counting sort over the minor
/// axis, O(nnz + major_dim + minor_dim). Because entries are scattered in
/// major order, each output slice comes out sorted by the old major index,
/// so the strictly-increasing-within-slice invariant is preserved.
pub fn transpose_compressed<T: Element>(
    indptr: &[usize],
    minor_indices: &[usize],
    values: &[T],
    major_dim: usize,
    minor_dim: usize,
) -> (Vec<usize>, Vec<usize>, Vec<T>) {
    let nnz = values.len();

    let mut counts = vec![0usize; minor_dim];
    for &m in minor_indices {
        counts[m] += 1;
    }

    let mut out_indptr = vec![0usize; minor_dim + 1];
    for m in 0..minor_dim {
        out_indptr[m + 1] = out_indptr[m] + counts[m];
    }

    let mut out_indices = vec![0usize; nnz];
    let mut out_values = vec![T::zero(); nnz];
    let mut positions = out_indptr[..minor_dim].to_vec();

    for major in 0..major_dim {
        for idx in indptr[major]..indptr[major + 1] {
            let minor = minor_indices[idx];
            let pos = positions[minor];
            out_indices[pos] = major;
            out_values[pos] = values[idx];
            positions[minor] += 1;
        }
    }

    (out_indptr, out_indices, out_values)
}

/// Expand a compressed store's indptr back into explicit major indices.
///
/// Inverse of the grouping step of `compress_triplets`: returns one major
/// index per stored entry, in storage order.
pub fn expand_major(indptr: &[usize], major_dim: usize) -> Vec<usize> {
    let nnz = *indptr.last().unwrap_or(&0);
    let mut major_indices = Vec::with_capacity(nnz);
    for major in 0..major_dim {
        for _ in indptr[major]..indptr[major + 1] {
            major_indices.push(major);
        }
    }
    major_indices
}
