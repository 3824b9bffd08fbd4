//! CSR (Compressed Sparse Row) matrix store

mod convert;
mod core;
mod elementwise;
mod matmul;

pub use core::CsrMatrix;
