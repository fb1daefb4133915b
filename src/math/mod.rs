//! # Vector/Matrix Algebra
//!
//! Pure, stateless matrix construction and composition routines built on
//! [`cgmath`]'s column-major storage types.
//!
//! The crate-wide composition convention is fixed here: [`m4::multiply`]
//! returns the matrix that applies its second argument first, and
//! [`m4::combine`] left-folds `multiply` over a list, so the *leftmost*
//! element of a combine list is the outermost transform. The scene and
//! camera pipelines depend on this ordering; do not change it.
//!
//! - [`m4`] - 4x4 homogeneous transforms plus the 3-vector helpers the
//!   scene pipeline needs (cross, subtract, guarded normalize)
//! - [`m3`] - 3x3 homogeneous transforms for 2D overlay work
//! - [`angles`] - degree/radian conversion and point-to-point aiming

pub mod angles;
pub mod m3;
pub mod m4;
