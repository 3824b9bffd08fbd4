//! Element trait for values stored in sparse matrices

use std::fmt::Debug;
use std::ops::{Add, Mul};

/// Trait for types that can be stored in a sparse matrix
///
/// The engine only needs ring-like structure: addition (for accumulating
/// duplicate coordinates and matmul partial products), multiplication, and
/// the additive identity. Integers and floats alike qualify.
///
/// # Bounds
/// - `Copy + Clone + Send + Sync + 'static` - Basic trait requirements;
///   `Send + Sync` is what lets a committed store be shared across threads
/// - `Add + Mul` - Ring operations (Output = Self)
/// - `PartialEq` - Zero detection for builders that drop explicit zeros
///
/// Note: `Neg`/`Sub`/`Div` are NOT required, so unsigned integer types
/// qualify too.
pub trait Element:
    Copy
    + Clone
    + Send
    + Sync
    + Debug
    + 'static
    + Add<Output = Self>
    + Mul<Output = Self>
    + PartialEq
{
    /// Additive identity
    fn zero() -> Self;

    /// Multiplicative identity
    fn one() -> Self;

    /// Returns true if this value equals the additive identity
    ///
    /// Note: for floats this is an exact comparison; `-0.0` compares equal
    /// to `0.0` and is treated as zero.
    #[inline]
    fn is_zero(self) -> bool {
        self == Self::zero()
    }
}

impl Element for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }
}

impl Element for f32 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }
}

impl Element for i64 {
    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }
}

impl Element for i32 {
    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }
}

impl Element for u64 {
    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }
}

impl Element for u32 {
    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }
}
