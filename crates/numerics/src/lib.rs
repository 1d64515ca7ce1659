//! Fixed-size linear algebra for geometric computation.
//!
//! This crate provides vectors, matrices, quaternions and angles whose dimensions are fixed at
//! compile time, along with a small set of *transform descriptors* (translation, scale, rotation,
//! projection) that can be chained together and applied in one pass.
//!
//! # Overview
//!
//! - [`Vector`] is an `N`-element column vector.
//! - [`Matrix`] is an `R`x`C` matrix stored in column-major order. Elements are always addressed as
//!   `(row, column)`, regardless of the storage order.
//! - [`Quaternion`] represents a rotation in 3D space.
//! - [`Radians`] wraps a floating-point value that is known to be an angle, which prevents mixing
//!   up degrees, radians and unitless scalars at API boundaries.
//! - The [`transforms`] module contains the transform descriptors and the [`Sequence`]
//!   combinator.
//!
//! # Comparing values
//!
//! `==` always performs an *exact* comparison. Approximate comparisons are provided by the
//! [`ApproxEq`][approx::ApproxEq] trait, whose [`equivalent`][approx::ApproxEq::equivalent]
//! method implements this library's tolerance policy: values within 8 epsilons of each other are
//! equivalent near zero, and values at most 8 representable floats apart are equivalent
//! elsewhere.
//!
//! ```
//! # use numerics::*;
//! let one = (0..10).fold(0.0f32, |acc, _| acc + 0.1);
//! assert_ne!(one, 1.0);
//! assert!(one.equivalent(&1.0));
//! ```
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. Relying on const generics to specify
//!   dimensions lets shape mismatches be caught by the type checker.
//! - Support only a single, column-major, unpadded data layout for matrices.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types.
//! - No numerical solvers (eigen-decomposition, LU/QR, ...). The primitives needed to build them
//!   are exposed, though.

pub mod approx;
mod integer;
pub mod interpolate;
mod matrix;
mod number;
mod quat;
mod radians;
mod traits;
pub mod transforms;
mod vector;

pub use approx::ApproxEq;
pub use integer::*;
pub use matrix::*;
pub use number::*;
pub use quat::*;
pub use radians::*;
pub use traits::*;
pub use transforms::{Compose, Sequence, Step};
pub use vector::*;

/// Readable indices for the first four vector elements.
///
/// ```
/// # use numerics::*;
/// use numerics::axis::{X, Z};
///
/// let v = vec3(1, 2, 3);
/// assert_eq!(v[X], 1);
/// assert_eq!(v[Z], 3);
/// ```
pub mod axis {
    /// Index of the X axis.
    pub const X: usize = 0;
    /// Index of the Y axis.
    pub const Y: usize = 1;
    /// Index of the Z axis.
    pub const Z: usize = 2;
    /// Index of the W axis (the homogeneous coordinate in 4D).
    pub const W: usize = 3;
}
