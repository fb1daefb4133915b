//! 4x4 homogeneous transform construction and composition.
//!
//! All matrices are [`cgmath::Matrix4<f32>`], column-major, acting on
//! column vectors. `multiply(a, b)` therefore means "apply `b`, then `a`".

use cgmath::{InnerSpace, Matrix4, Rad, SquareMatrix, Vector3};

/// The identity transform, neutral under [`multiply`].
pub fn identity() -> Matrix4<f32> {
    Matrix4::identity()
}

/// Translation by `(x, y, z)`.
pub fn translate(x: f32, y: f32, z: f32) -> Matrix4<f32> {
    Matrix4::from_translation(Vector3::new(x, y, z))
}

/// Rotation of `rads` radians about the X axis.
pub fn rotate_x(rads: f32) -> Matrix4<f32> {
    Matrix4::from_angle_x(Rad(rads))
}

/// Rotation of `rads` radians about the Y axis.
pub fn rotate_y(rads: f32) -> Matrix4<f32> {
    Matrix4::from_angle_y(Rad(rads))
}

/// Rotation of `rads` radians about the Z axis.
pub fn rotate_z(rads: f32) -> Matrix4<f32> {
    Matrix4::from_angle_z(Rad(rads))
}

/// Non-uniform scale along the three axes.
pub fn scale(x: f32, y: f32, z: f32) -> Matrix4<f32> {
    Matrix4::from_nonuniform_scale(x, y, z)
}

/// Composes two transforms: the result applies `b` first, then `a`.
pub fn multiply(a: Matrix4<f32>, b: Matrix4<f32>) -> Matrix4<f32> {
    a * b
}

/// Left-folds [`multiply`] over `matrices`, so
/// `combine(&[a, b, c]) == multiply(multiply(a, b), c)`.
///
/// The leftmost entry is the outermost transform: a vertex passed through
/// the result is scaled/offset by the tail entries before the head's
/// translation applies. An empty slice yields the identity.
pub fn combine(matrices: &[Matrix4<f32>]) -> Matrix4<f32> {
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

/// Symmetric-frustum perspective projection.
///
/// `field_of_view` is the full vertical FOV in radians; the focal factor
/// is `f = cot(fov / 2)`. Maps the view frustum to clip space with
/// `-w <= z <= w`.
#[rustfmt::skip]
pub fn perspective(field_of_view: f32, aspect: f32, near: f32, far: f32) -> Matrix4<f32> {
    let f = (std::f32::consts::FRAC_PI_2 - 0.5 * field_of_view).tan();
    let range_inv = 1.0 / (near - far);

    Matrix4::new(
        f / aspect, 0.0, 0.0,                        0.0,
        0.0,        f,   0.0,                        0.0,
        0.0,        0.0, (near + far) * range_inv,  -1.0,
        0.0,        0.0, near * far * range_inv * 2.0, 0.0,
    )
}

/// Screen-space projection: maps `(0, 0)..(width, height)` pixel
/// coordinates into clip space with Y flipped (top-left origin).
#[rustfmt::skip]
pub fn projection(width: f32, height: f32, depth: f32) -> Matrix4<f32> {
    Matrix4::new(
        2.0 / width, 0.0,           0.0,         0.0,
        0.0,         -2.0 / height, 0.0,         0.0,
        0.0,         0.0,           2.0 / depth, 0.0,
        -1.0,        1.0,           0.0,         1.0,
    )
}

/// Builds the world matrix of a viewer at `eye` facing `target`.
///
/// The columns are the orthonormal basis `z = normalize(eye - target)`,
/// `x = normalize(up x z)`, `y = normalize(z x x)` and the translation
/// column is `eye`. Note this is the camera's *world* transform; invert it
/// to obtain a view matrix.
#[rustfmt::skip]
pub fn look_at(eye: Vector3<f32>, target: Vector3<f32>, up: Vector3<f32>) -> Matrix4<f32> {
    let z_axis = normalize(subtract(eye, target));
    let x_axis = normalize(cross(up, z_axis));
    let y_axis = normalize(cross(z_axis, x_axis));

    Matrix4::new(
        x_axis.x, x_axis.y, x_axis.z, 0.0,
        y_axis.x, y_axis.y, y_axis.z, 0.0,
        z_axis.x, z_axis.y, z_axis.z, 0.0,
        eye.x,    eye.y,    eye.z,    1.0,
    )
}

/// General 4x4 inverse via cofactor expansion.
///
/// Not guarded against singular input: a zero determinant divides through
/// and the result is NaN/Inf. Callers keep scales nonzero upstream; a
/// per-frame guard here would only hide the configuration bug.
pub fn inverse(m: Matrix4<f32>) -> Matrix4<f32> {
    let (m00, m01, m02, m03) = (m[0][0], m[0][1], m[0][2], m[0][3]);
    let (m10, m11, m12, m13) = (m[1][0], m[1][1], m[1][2], m[1][3]);
    let (m20, m21, m22, m23) = (m[2][0], m[2][1], m[2][2], m[2][3]);
    let (m30, m31, m32, m33) = (m[3][0], m[3][1], m[3][2], m[3][3]);

    let tmp_0 = m22 * m33;
    let tmp_1 = m32 * m23;
    let tmp_2 = m12 * m33;
    let tmp_3 = m32 * m13;
    let tmp_4 = m12 * m23;
    let tmp_5 = m22 * m13;
    let tmp_6 = m02 * m33;
    let tmp_7 = m32 * m03;
    let tmp_8 = m02 * m23;
    let tmp_9 = m22 * m03;
    let tmp_10 = m02 * m13;
    let tmp_11 = m12 * m03;
    let tmp_12 = m20 * m31;
    let tmp_13 = m30 * m21;
    let tmp_14 = m10 * m31;
    let tmp_15 = m30 * m11;
    let tmp_16 = m10 * m21;
    let tmp_17 = m20 * m11;
    let tmp_18 = m00 * m31;
    let tmp_19 = m30 * m01;
    let tmp_20 = m00 * m21;
    let tmp_21 = m20 * m01;
    let tmp_22 = m00 * m11;
    let tmp_23 = m10 * m01;

    let t0 = tmp_0 * m11 + tmp_3 * m21 + tmp_4 * m31
        - (tmp_1 * m11 + tmp_2 * m21 + tmp_5 * m31);
    let t1 = tmp_1 * m01 + tmp_6 * m21 + tmp_9 * m31
        - (tmp_0 * m01 + tmp_7 * m21 + tmp_8 * m31);
    let t2 = tmp_2 * m01 + tmp_7 * m11 + tmp_10 * m31
        - (tmp_3 * m01 + tmp_6 * m11 + tmp_11 * m31);
    let t3 = tmp_5 * m01 + tmp_8 * m11 + tmp_11 * m21
        - (tmp_4 * m01 + tmp_9 * m11 + tmp_10 * m21);

    let d = 1.0 / (m00 * t0 + m10 * t1 + m20 * t2 + m30 * t3);

    Matrix4::new(
        d * t0,
        d * t1,
        d * t2,
        d * t3,
        d * (tmp_1 * m10 + tmp_2 * m20 + tmp_5 * m30
            - (tmp_0 * m10 + tmp_3 * m20 + tmp_4 * m30)),
        d * (tmp_0 * m00 + tmp_7 * m20 + tmp_8 * m30
            - (tmp_1 * m00 + tmp_6 * m20 + tmp_9 * m30)),
        d * (tmp_3 * m00 + tmp_6 * m10 + tmp_11 * m30
            - (tmp_2 * m00 + tmp_7 * m10 + tmp_10 * m30)),
        d * (tmp_4 * m00 + tmp_9 * m10 + tmp_10 * m20
            - (tmp_5 * m00 + tmp_8 * m10 + tmp_11 * m20)),
        d * (tmp_12 * m13 + tmp_15 * m23 + tmp_16 * m33
            - (tmp_13 * m13 + tmp_14 * m23 + tmp_17 * m33)),
        d * (tmp_13 * m03 + tmp_18 * m23 + tmp_21 * m33
            - (tmp_12 * m03 + tmp_19 * m23 + tmp_20 * m33)),
        d * (tmp_14 * m03 + tmp_19 * m13 + tmp_22 * m33
            - (tmp_15 * m03 + tmp_18 * m13 + tmp_23 * m33)),
        d * (tmp_17 * m03 + tmp_20 * m13 + tmp_23 * m23
            - (tmp_16 * m03 + tmp_21 * m13 + tmp_22 * m23)),
        d * (tmp_14 * m22 + tmp_17 * m32 + tmp_13 * m12
            - (tmp_16 * m32 + tmp_12 * m12 + tmp_15 * m22)),
        d * (tmp_20 * m32 + tmp_12 * m02 + tmp_19 * m22
            - (tmp_18 * m22 + tmp_21 * m32 + tmp_13 * m02)),
        d * (tmp_18 * m12 + tmp_23 * m32 + tmp_15 * m02
            - (tmp_22 * m32 + tmp_14 * m02 + tmp_19 * m12)),
        d * (tmp_22 * m22 + tmp_16 * m02 + tmp_21 * m12
            - (tmp_20 * m12 + tmp_23 * m22 + tmp_17 * m02)),
    )
}

/// Cross product of two 3-vectors.
pub fn cross(a: Vector3<f32>, b: Vector3<f32>) -> Vector3<f32> {
    Vector3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Component-wise `a - b`.
pub fn subtract(a: Vector3<f32>, b: Vector3<f32>) -> Vector3<f32> {
    a - b
}

/// Normalizes `v`, returning the zero vector when the length is below
/// `1e-5` rather than dividing noise up to unit length.
pub fn normalize(v: Vector3<f32>) -> Vector3<f32> {
    let length = v.magnitude();
    if length > 0.00001 {
        v / length
    } else {
        Vector3::new(0.0, 0.0, 0.0)
    }
}

/// The translation column of a transform, as a 3-vector.
pub fn translation_of(m: &Matrix4<f32>) -> Vector3<f32> {
    Vector3::new(m[3][0], m[3][1], m[3][2])
}
