//! CSC (Compressed Sparse Column) matrix store

mod convert;
mod core;

pub use core::CscMatrix;
