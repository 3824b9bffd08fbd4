//! # spmat
//!
//! **A compressed-sparse-row matrix storage engine.**
//!
//! spmat separates sparse matrices into two phases: mutable *builders* for
//! construction and immutable *compressed stores* for everything after.
//! Triples or cell assignments accumulate in a [`CooMatrix`] or
//! [`LilMatrix`], then compile once into a [`CsrMatrix`] (or its
//! column-major dual [`CscMatrix`]) for all read-heavy and arithmetic work.
//!
//! ## Formats
//!
//! - **COO**: (row, col, value) triplets, duplicates summed at compile time
//! - **LIL**: one sorted list per row, efficient point assignment
//! - **CSR**: row-grouped compressed store; O(1) row views, O(log k) lookup,
//!   O(nnz) matrix-vector product, sparse-sparse matmul
//! - **CSC**: column-grouped dual, O(1) column views
//!
//! ## Quick Start
//!
//! ```
//! use spmat::prelude::*;
//!
//! # fn main() -> spmat::Result<()> {
//! let mut coo = CooMatrix::new(4, 4);
//! coo.push(0, 0, 2.0)?;
//! coo.push(0, 3, 1.0)?;
//! coo.push(1, 1, 3.0)?;
//! coo.push(3, 0, 4.0)?;
//! coo.push(3, 2, 5.0)?;
//!
//! let csr = coo.to_csr();
//! let y = csr.mul_vector(&[1.0, 2.0, 3.0, 4.0])?;
//! assert_eq!(y, vec![6.0, 6.0, 0.0, 19.0]);
//!
//! let (cols, vals) = csr.row_view(3)?;
//! assert_eq!(cols, &[0, 2]);
//! assert_eq!(vals, &[4.0, 5.0]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Builders are single-writer. A compiled [`CsrMatrix`]/[`CscMatrix`] is an
//! immutable value object: share it freely across threads, no locking.
//! Derived operations (`matmul`, `elementwise_mul`, conversions) allocate
//! new stores and never mutate an operand. Nothing blocks or does I/O.
//!
//! ## Feature Flags
//!
//! - `rayon` (default): row-parallel `matmul` and `mul_vector`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod convert;
pub mod coo;
pub mod csc;
pub mod csr;
pub mod element;
pub mod error;
pub mod format;
pub mod lil;
pub mod matrix;

pub use coo::CooMatrix;
pub use csc::CscMatrix;
pub use csr::CsrMatrix;
pub use element::Element;
pub use error::{Error, Result};
pub use format::{SparseFormat, SparseStorage};
pub use lil::LilMatrix;
pub use matrix::SparseMatrix;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::coo::CooMatrix;
    pub use crate::csc::CscMatrix;
    pub use crate::csr::CsrMatrix;
    pub use crate::element::Element;
    pub use crate::error::{Error, Result};
    pub use crate::format::{SparseFormat, SparseStorage};
    pub use crate::lil::LilMatrix;
    pub use crate::matrix::SparseMatrix;
}
