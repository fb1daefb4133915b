//! Bounding box derivation from raw geometry plus orientation.

use cgmath::{Matrix4, Vector3};

use crate::math::m4;

/// An object's derived bounding volume: a world-space anchor position plus
/// an orientation-adjusted extent vector.
///
/// `x/y/z` come from the world matrix's translation column with the
/// scene's Y/Z flip undone, so they live in the same space the collision
/// queries expect. `w/h/d` are the axis extents of the raw geometry,
/// scaled and carried through the object's rotation; they may be negative
/// for reversed orientations, which [`normalize_box`](crate::collision::normalize_box)
/// canonicalizes on query.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
    pub h: f32,
    pub d: f32,
}

/// Derives the bounding box of an object for this frame.
///
/// `vertices` is the object's flat slice of the scene vertex channel;
/// `world_matrix` must be the matrix computed *this* pass, never a stale
/// one. The min/max pass over raw vertices is rotation-independent; the
/// rotation only enters through the orientation matrix that reorients the
/// extent vector.
pub fn derive_bbox(
    vertices: &[f32],
    world_matrix: &Matrix4<f32>,
    rotation: Vector3<f32>,
    scale: Vector3<f32>,
) -> BoundingBox {
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];

    for vertex in vertices.chunks_exact(3) {
        for i in 0..3 {
            if min[i] > vertex[i] {
                min[i] = vertex[i];
            }
            if max[i] < vertex[i] {
                max[i] = vertex[i];
            }
        }
    }

    if vertices.is_empty() {
        min = [0.0; 3];
        max = [0.0; 3];
    }

    let width = (max[0] - min[0]) * scale.x;
    let height = (max[1] - min[1]) * scale.y;
    let depth = (max[2] - min[2]) * scale.z;

    // Reorient the extents the same way the object is rotated. Note the
    // Z/Y/X order here matches the camera, not the object pipeline.
    let orientation = m4::combine(&[
        m4::rotate_z(rotation.z),
        m4::rotate_y(rotation.y),
        m4::rotate_x(rotation.x),
        m4::translate(width, height, depth),
        m4::scale(scale.x, scale.y, scale.z),
    ]);

    let position = m4::translation_of(world_matrix);
    let extents = m4::translation_of(&orientation);

    BoundingBox {
        x: position.x,
        y: -position.y,
        z: -position.z,
        w: extents.x,
        h: -extents.y,
        d: -extents.z,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry;
    use cgmath::SquareMatrix;

    const EPS: f32 = 1e-4;

    #[test]
    fn unrotated_cuboid_reports_scaled_extents() {
        let vertices = geometry::cuboid(2.0, 3.0, 4.0);
        let bbox = derive_bbox(
            &vertices,
            &Matrix4::identity(),
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(2.0, 1.0, 1.0),
        );
        assert!((bbox.w - 4.0).abs() < EPS);
        assert!((bbox.h - (-3.0)).abs() < EPS);
        assert!((bbox.d - (-4.0)).abs() < EPS);
    }

    #[test]
    fn position_comes_from_world_matrix_with_sign_flip() {
        let vertices = geometry::cuboid(1.0, 1.0, 1.0);
        let world = m4::translate(5.0, -6.0, -7.0);
        let bbox = derive_bbox(
            &vertices,
            &world,
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 1.0),
        );
        assert!((bbox.x - 5.0).abs() < EPS);
        assert!((bbox.y - 6.0).abs() < EPS);
        assert!((bbox.z - 7.0).abs() < EPS);
    }

    #[test]
    fn half_turn_about_y_flips_width_sign() {
        let vertices = geometry::cuboid(2.0, 1.0, 1.0);
        let bbox = derive_bbox(
            &vertices,
            &Matrix4::identity(),
            Vector3::new(0.0, std::f32::consts::PI, 0.0),
            Vector3::new(1.0, 1.0, 1.0),
        );
        // Rotating the extent vector (2, 1, 1) half a turn about Y negates
        // its x and z components.
        assert!((bbox.w - (-2.0)).abs() < EPS);
        assert!((bbox.h - (-1.0)).abs() < EPS);
        assert!((bbox.d - 1.0).abs() < EPS);
    }

    #[test]
    fn empty_vertex_list_yields_zero_box() {
        let bbox = derive_bbox(
            &[],
            &Matrix4::identity(),
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 1.0),
        );
        assert_eq!(bbox, BoundingBox::default());
    }
}
