//! Transform descriptors and their composition.
//!
//! A transform descriptor is a small value holding just the parameters of one geometric
//! operation: [`Translation`], [`Scale`], [`UniformScale`], [`FixedAxisRotation`],
//! [`AngleAxisRotation`], [`OffsetAngleAxisRotation`], [`PerspectiveProjection`] and
//! [`OrthographicProjection`]. Each one converts into the equivalent [`Matrix`] via [`From`], and
//! rotations also convert into [`Quaternion`]s.
//!
//! Descriptors (and matrices and quaternions) can be chained with [`Compose::then`] or
//! [`compose`], which builds a [`Sequence`] without computing anything. Converting the sequence
//! into a matrix multiplies every step onto the identity, in chain order.
//!
//! # Examples
//!
//! ```
//! # use numerics::*;
//! use numerics::transforms::{rotate_x, translate};
//!
//! let m = Mat4f::from(rotate_x(Radiansf::R90).then(translate(vec3(1.0, 2.0, 3.0))));
//! assert_approx_eq!(m * vec4(0.0, 0.0, 0.0, 1.0), vec4(1.0, -3.0, 2.0, 1.0));
//!
//! // Matrix multiplication does not commute, so the order of the steps matters.
//! let m = Mat4f::from(translate(vec3(1.0, 2.0, 3.0)).then(rotate_x(Radiansf::R90)));
//! assert_approx_eq!(m * vec4(0.0, 0.0, 0.0, 1.0), vec4(1.0, 2.0, 3.0, 1.0));
//! ```
//!
//! [`Matrix`]: crate::Matrix
//! [`Quaternion`]: crate::Quaternion

mod projection;
mod rotation;
mod scale;
mod sequence;
mod translation;

pub use projection::*;
pub use rotation::*;
pub use scale::*;
pub use sequence::*;
pub use translation::*;
