//! Scene graph nodes and their registration descriptions.

use std::ops::Range;

use cgmath::{Matrix4, SquareMatrix, Vector3};

use crate::math::m4;
use crate::scene::bbox::BoundingBox;

/// Registration-time description of an object and its children.
///
/// Built with chained setters and handed to
/// [`Scene::add_object`](crate::scene::Scene::add_object), which flattens
/// the tree depth-first into the scene's arena. The raw channels move into
/// the scene's shared geometry store; the transform fields become an
/// [`Object3D`].
#[derive(Debug, Clone, Default)]
pub struct ObjectDesc {
    pub name: String,
    pub vertices: Vec<f32>,
    pub normals: Option<Vec<f32>>,
    pub texcoords: Option<Vec<f32>>,
    pub colors: Option<Vec<f32>>,
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub offsets: [f32; 3],
    pub scale: Option<[f32; 3]>,
    pub additional_matrix: Option<Matrix4<f32>>,
    pub visible: bool,
    pub compute_bbox: bool,
    pub hide_when_far_away: bool,
    pub children: Vec<ObjectDesc>,
}

impl ObjectDesc {
    pub fn new(name: impl Into<String>, vertices: Vec<f32>) -> Self {
        Self {
            name: name.into(),
            vertices,
            visible: true,
            ..Default::default()
        }
    }

    pub fn position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = [x, y, z];
        self
    }

    pub fn rotation(mut self, x_rads: f32, y_rads: f32, z_rads: f32) -> Self {
        self.rotation = [x_rads, y_rads, z_rads];
        self
    }

    pub fn offsets(mut self, x: f32, y: f32, z: f32) -> Self {
        self.offsets = [x, y, z];
        self
    }

    pub fn scale(mut self, x: f32, y: f32, z: f32) -> Self {
        self.scale = Some([x, y, z]);
        self
    }

    pub fn normals(mut self, normals: Vec<f32>) -> Self {
        self.normals = Some(normals);
        self
    }

    pub fn texcoords(mut self, texcoords: Vec<f32>) -> Self {
        self.texcoords = Some(texcoords);
        self
    }

    pub fn colors(mut self, colors: Vec<f32>) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Extra transform inserted after rotation and before the offset
    /// translation in the local-matrix chain.
    pub fn additional_matrix(mut self, matrix: Matrix4<f32>) -> Self {
        self.additional_matrix = Some(matrix);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Opt in to per-frame bounding box derivation. Off by default; most
    /// static decorative geometry never needs one.
    pub fn compute_bbox(mut self) -> Self {
        self.compute_bbox = true;
        self
    }

    /// Skip this object's frame output when it is further than
    /// `1.25 * z_far` from the camera.
    pub fn hide_when_far_away(mut self) -> Self {
        self.hide_when_far_away = true;
        self
    }

    pub fn child(mut self, child: ObjectDesc) -> Self {
        self.children.push(child);
        self
    }
}

/// A registered scene graph node.
///
/// Owned by the scene's arena; `parent` is an index into the same arena,
/// never an owning link. The computed world matrix and bounding box are
/// transient per-frame values, overwritten by every transform pass.
#[derive(Debug, Clone)]
pub struct Object3D {
    /// Registration name, also the key of the scene's name index. Not
    /// publicly mutable: renaming a live object would desync the index.
    pub(crate) name: String,
    pub position: Vector3<f32>,
    /// Euler angles in radians, applied X, then Y, then Z (the camera
    /// uses the opposite order; both are load-bearing).
    pub rotation: Vector3<f32>,
    /// Post-rotation translation.
    pub offsets: Vector3<f32>,
    pub scale: Vector3<f32>,
    pub additional_matrix: Option<Matrix4<f32>>,
    pub visible: bool,
    pub compute_bbox: bool,
    pub hide_when_far_away: bool,
    /// Arena index of the parent node; parents always precede children.
    pub(crate) parent: Option<usize>,
    /// This object's slice of the scene's shared vertex channel.
    pub(crate) vertex_range: Range<usize>,
    /// World matrix from the most recent transform pass.
    pub world_matrix: Matrix4<f32>,
    /// Bounding box from the most recent transform pass, when requested.
    pub bbox: Option<BoundingBox>,
}

impl Object3D {
    pub(crate) fn from_desc(desc: &ObjectDesc, parent: Option<usize>, vertex_range: Range<usize>) -> Self {
        let scale = desc.scale.unwrap_or([1.0, 1.0, 1.0]);
        Self {
            name: desc.name.clone(),
            position: desc.position.into(),
            rotation: desc.rotation.into(),
            offsets: desc.offsets.into(),
            scale: scale.into(),
            additional_matrix: desc.additional_matrix,
            visible: desc.visible,
            compute_bbox: desc.compute_bbox,
            hide_when_far_away: desc.hide_when_far_away,
            parent,
            vertex_range,
            world_matrix: Matrix4::identity(),
            bbox: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent_index(&self) -> Option<usize> {
        self.parent
    }

    /// The transform derived purely from this object's own fields, before
    /// parent composition.
    ///
    /// Outermost first: translate(x, -y, -z), rotate X, Y, Z, the optional
    /// additional matrix, the offset translation, then scale. The Y/Z
    /// negation matches the camera's handedness flip.
    pub fn local_matrix(&self) -> Matrix4<f32> {
        let mut matrices = vec![
            m4::translate(self.position.x, -self.position.y, -self.position.z),
            m4::rotate_x(self.rotation.x),
            m4::rotate_y(self.rotation.y),
            m4::rotate_z(self.rotation.z),
        ];

        if let Some(additional) = self.additional_matrix {
            matrices.push(additional);
        }

        matrices.push(m4::translate(self.offsets.x, self.offsets.y, self.offsets.z));
        matrices.push(m4::scale(self.scale.x, self.scale.y, self.scale.z));

        m4::combine(&matrices)
    }
}
