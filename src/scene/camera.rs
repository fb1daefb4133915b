//! Scene camera: position/rotation state and view-matrix construction.

use cgmath::{Matrix4, Vector3};

use crate::math::m4;

/// The per-scene viewpoint.
///
/// Mutated continuously by caller-side input logic, read once per frame by
/// the transform pipeline. When a look-at `target` is set it overrides the
/// rotation fields in the final matrix: the composed transform is still
/// built to extract the eye position from, but the returned basis comes
/// from [`m4::look_at`].
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vector3<f32>,
    /// Euler angles in radians. The camera applies Z, then Y, then X;
    /// this deliberately differs from the object pipeline's X/Y/Z order.
    pub rotation: Vector3<f32>,
    /// Constant post-rotation translation, e.g. a first-person eye height.
    pub offset: Vector3<f32>,
    pub target: Option<Vector3<f32>>,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    pub fn new() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            offset: Vector3::new(0.0, 0.0, 0.0),
            target: None,
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.position = Vector3::new(x, y, z);
    }

    pub fn set_x(&mut self, x: f32) {
        self.position.x = x;
    }

    pub fn set_y(&mut self, y: f32) {
        self.position.y = y;
    }

    pub fn set_z(&mut self, z: f32) {
        self.position.z = z;
    }

    pub fn set_rotation(&mut self, x_rads: f32, y_rads: f32, z_rads: f32) {
        self.rotation = Vector3::new(x_rads, y_rads, z_rads);
    }

    pub fn rotate_x(&mut self, x_rads: f32) {
        self.rotation.x = x_rads;
    }

    pub fn rotate_y(&mut self, y_rads: f32) {
        self.rotation.y = y_rads;
    }

    pub fn rotate_z(&mut self, z_rads: f32) {
        self.rotation.z = z_rads;
    }

    /// Aims the camera at a fixed world-space point until
    /// [`clear_target`](Self::clear_target) is called.
    pub fn set_target(&mut self, x: f32, y: f32, z: f32) {
        self.target = Some(Vector3::new(x, y, z));
    }

    pub fn clear_target(&mut self) {
        self.target = None;
    }

    /// Builds the camera's world matrix for this frame.
    ///
    /// Composition order, outermost first: translate(x, -y, -z), then
    /// rotate Z, Y, X, then the constant offset. Y and Z are negated on
    /// input because world space and view space disagree on handedness;
    /// every object transform applies the same flip, so dropping it here
    /// would mirror the whole scene.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        let matrix = m4::combine(&[
            m4::translate(self.position.x, -self.position.y, -self.position.z),
            m4::rotate_z(self.rotation.z),
            m4::rotate_y(self.rotation.y),
            m4::rotate_x(self.rotation.x),
            m4::translate(self.offset.x, self.offset.y, self.offset.z),
        ]);

        if let Some(target) = self.target {
            let eye = m4::translation_of(&matrix);
            m4::look_at(eye, target, Vector3::new(0.0, 1.0, 0.0))
        } else {
            matrix
        }
    }
}
