//! # Transform Pipeline
//!
//! The once-per-frame pass that turns the scene's registered objects into
//! world matrices and bounding boxes, plus the camera/projection matrices
//! a rendering driver needs alongside them.
//!
//! The pass walks the arena once, top to bottom. Registration guarantees
//! parents appear before children, so a child's parent world matrix is
//! always already computed when the child is reached; no recursion or
//! topological sort happens at frame time.
//!
//! World matrices are computed for *every* object, including invisible
//! and distance-culled ones. Visibility only decides what lands in
//! [`Frame::outputs`] and whether a bounding box is derived. Skipping the
//! matrix computation itself would leave the children of a culled parent
//! composing against a stale matrix from an earlier frame.

use std::collections::HashMap;

use cgmath::Matrix4;

use crate::math::{angles, m4};
use crate::scene::bbox::{derive_bbox, BoundingBox};
use crate::scene::camera::Camera;
use crate::scene::object::Object3D;
use crate::scene::scene::Scene;
use crate::scene::store::Channel;

/// Camera/projection configuration, read by the pipeline each frame.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Full vertical field of view, in degrees.
    pub fov: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fov: 65.0,
            z_near: 1.0,
            z_far: 3000.0,
        }
    }
}

/// Everything the pipeline computes for one frame.
#[derive(Debug, Clone)]
pub struct Frame {
    pub camera_matrix: Matrix4<f32>,
    /// Unguarded inverse of `camera_matrix`; NaN if a caller managed to
    /// configure a singular camera transform.
    pub inverse_camera_matrix: Matrix4<f32>,
    pub projection_matrix: Matrix4<f32>,
    /// World matrix and bounding box per visible object. Culled and
    /// invisible objects are absent (their matrices are still computed
    /// and cached on the objects themselves).
    pub outputs: HashMap<String, (Matrix4<f32>, BoundingBox)>,
}

/// Whether an object is excluded from this frame's outputs: explicitly
/// invisible, or flagged for distance culling and further than
/// `1.25 * z_far` from the camera.
pub fn should_skip(z_far: f32, camera: &Camera, object: &Object3D) -> bool {
    if !object.visible {
        return true;
    }
    if object.hide_when_far_away {
        let dx = object.position.x - camera.position.x;
        let dy = object.position.y - camera.position.y;
        let dz = object.position.z - camera.position.z;
        let dist = (dx * dx + dy * dy + dz * dz).sqrt();
        if dist > 1.25 * z_far {
            return true;
        }
    }
    false
}

/// Runs the per-frame transform pass over a scene.
///
/// `aspect` is the viewport width/height ratio for the projection matrix.
pub fn run_frame(scene: &mut Scene, settings: &Settings, aspect: f32) -> Frame {
    let camera_matrix = scene.camera.view_matrix();
    let inverse_camera_matrix = m4::inverse(camera_matrix);
    let projection_matrix = m4::perspective(
        angles::rads(settings.fov),
        aspect,
        settings.z_near,
        settings.z_far,
    );

    // Pass 1: world matrices, in registration order.
    for i in 0..scene.objects.len() {
        let local = scene.objects[i].local_matrix();
        let world = match scene.objects[i].parent {
            Some(p) => m4::combine(&[scene.objects[p].world_matrix, local]),
            None => local,
        };
        scene.objects[i].world_matrix = world;
    }

    // Pass 2: visibility, bounding boxes, frame outputs.
    let mut outputs = HashMap::new();
    for i in 0..scene.objects.len() {
        if should_skip(settings.z_far, &scene.camera, &scene.objects[i]) {
            scene.objects[i].bbox = None;
            continue;
        }

        let bbox = if scene.objects[i].compute_bbox {
            let name = scene.objects[i].name.clone();
            let rotation = scene.objects[i].rotation;
            let scale = scene.objects[i].scale;
            let world = scene.objects[i].world_matrix;

            let derived = match scene.store.slice(Channel::Vertex, &name) {
                Some(vertices) if !vertices.is_empty() => {
                    derive_bbox(vertices, &world, rotation, scale)
                }
                _ => {
                    scene
                        .warnings
                        .warn(&format!("no vertex data for '{name}', bounding box is empty"));
                    BoundingBox::default()
                }
            };
            scene.objects[i].bbox = Some(derived);
            Some(derived)
        } else {
            scene.objects[i].bbox = None;
            None
        };

        outputs.insert(
            scene.objects[i].name.clone(),
            (scene.objects[i].world_matrix, bbox.unwrap_or_default()),
        );
    }

    Frame {
        camera_matrix,
        inverse_camera_matrix,
        projection_matrix,
        outputs,
    }
}
