//! 3x3 homogeneous transforms for 2D overlay work.
//!
//! Mirrors the [`m4`](super::m4) conventions one dimension down: column
//! major, `multiply(a, b)` applies `b` first.

use cgmath::{Matrix3, SquareMatrix};

pub fn identity() -> Matrix3<f32> {
    Matrix3::identity()
}

/// 2D translation by `(x, y)`.
#[rustfmt::skip]
pub fn translate(x: f32, y: f32) -> Matrix3<f32> {
    Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, 1.0, 0.0,
        x,   y,   1.0,
    )
}

/// 2D rotation of `rads` radians.
#[rustfmt::skip]
pub fn rotate(rads: f32) -> Matrix3<f32> {
    let c = rads.cos();
    let s = rads.sin();
    Matrix3::new(
        c,  -s,  0.0,
        s,   c,  0.0,
        0.0, 0.0, 1.0,
    )
}

/// 2D non-uniform scale.
#[rustfmt::skip]
pub fn scale(x: f32, y: f32) -> Matrix3<f32> {
    Matrix3::new(
        x,   0.0, 0.0,
        0.0, y,   0.0,
        0.0, 0.0, 1.0,
    )
}

/// Composes two transforms: the result applies `b` first, then `a`.
pub fn multiply(a: Matrix3<f32>, b: Matrix3<f32>) -> Matrix3<f32> {
    a * b
}

/// Left-folds [`multiply`] over `matrices`; see [`m4::combine`](super::m4::combine).
pub fn combine(matrices: &[Matrix3<f32>]) -> Matrix3<f32> {
    let mut result = identity();
    for (i, m) in matrices.iter().enumerate() {
        if i == 0 {
            result = *m;
        } else {
            result = multiply(result, *m);
        }
    }
    result
}

/// Screen-space projection: maps `(0, 0)..(width, height)` pixel
/// coordinates into clip space with Y flipped (top-left origin).
#[rustfmt::skip]
pub fn projection(width: f32, height: f32) -> Matrix3<f32> {
    Matrix3::new(
        2.0 / width, 0.0,           0.0,
        0.0,         -2.0 / height, 0.0,
        -1.0,        1.0,           1.0,
    )
}
