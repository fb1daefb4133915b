//! # Collision Queries
//!
//! Stateless geometric queries over boxes, spheres, and 2D segments.
//! Everything here is a pure function of its inputs; the scene graph is
//! not involved, so these can be called from game logic against the
//! bounding boxes the transform pipeline produces or against hand-built
//! volumes.
//!
//! Boxes arrive as a [`Cuboid`]: an origin corner plus extents. Extents
//! may be negative when the source geometry is orientation-reversed;
//! every query canonicalizes through [`normalize_box`] first, so callers
//! never need to pre-sort corners.

use cgmath::{Vector2, Vector3};

use crate::scene::bbox::BoundingBox;

/// An axis-aligned box given as an origin corner plus width/height/depth.
/// Extents may be negative (orientation-reversed geometry).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
    pub h: f32,
    pub d: f32,
}

impl Cuboid {
    pub fn new(x: f32, y: f32, z: f32, w: f32, h: f32, d: f32) -> Self {
        Self { x, y, z, w, h, d }
    }
}

impl From<BoundingBox> for Cuboid {
    /// A derived bounding box queries directly as a collision volume.
    fn from(bbox: BoundingBox) -> Self {
        Self::new(bbox.x, bbox.y, bbox.z, bbox.w, bbox.h, bbox.d)
    }
}

/// A sphere with `radius >= 0`. A zero radius degenerates to a point,
/// which is defined behavior for every query here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub radius: f32,
}

impl Sphere {
    pub fn new(x: f32, y: f32, z: f32, radius: f32) -> Self {
        Self { x, y, z, radius }
    }

    pub fn center(&self) -> Vector3<f32> {
        Vector3::new(self.x, self.y, self.z)
    }
}

/// Canonical min/max corners of a box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

/// Canonicalizes a [`Cuboid`] into min/max corners, swapping per axis
/// where a negative extent put max below min.
pub fn normalize_box(rect: &Cuboid) -> Aabb {
    let mut result = Aabb {
        min: [rect.x, rect.y, rect.z],
        max: [rect.x + rect.w, rect.y + rect.h, rect.z + rect.d],
    };

    for i in 0..3 {
        if result.max[i] < result.min[i] {
            std::mem::swap(&mut result.min[i], &mut result.max[i]);
        }
    }

    result
}

/// Squared distance from a point to the nearest point on (or in) a box:
/// the sum over axes of squared excess distance outside `[min, max]`.
/// Zero when the point is inside.
pub fn squared_distance_point_to_box(point: Vector3<f32>, rect: &Cuboid) -> f32 {
    let b = normalize_box(rect);
    let p = [point.x, point.y, point.z];
    let mut sq_dist = 0.0;

    for i in 0..3 {
        let v = p[i];
        if v < b.min[i] {
            sq_dist += (b.min[i] - v) * (b.min[i] - v);
        }
        if v > b.max[i] {
            sq_dist += (v - b.max[i]) * (v - b.max[i]);
        }
    }

    sq_dist
}

/// The point on or in a box that is closest to `point`: a per-axis clamp
/// into `[min, max]`.
pub fn closest_point_on_box(point: Vector3<f32>, rect: &Cuboid) -> Vector3<f32> {
    let b = normalize_box(rect);
    let p = [point.x, point.y, point.z];
    let mut result = [0.0f32; 3];

    for i in 0..3 {
        result[i] = p[i].clamp(b.min[i], b.max[i]);
    }

    Vector3::new(result[0], result[1], result[2])
}

/// Per-axis unsigned excess distance of `center` outside the box's range,
/// zero on axes where the point is inside.
///
/// This is *not* a separation vector (it is not the minimal translation
/// resolving an overlap); it is only the axis-wise overshoot, useful for
/// deciding which face a sphere ran past.
pub fn intersection_excess(center: Vector3<f32>, rect: &Cuboid) -> Vector3<f32> {
    let b = normalize_box(rect);
    let p = [center.x, center.y, center.z];
    let mut r = [0.0f32; 3];

    for i in 0..3 {
        let v = p[i];
        if v < b.min[i] {
            r[i] = b.min[i] - v;
        }
        if v > b.max[i] {
            r[i] = v - b.max[i];
        }
    }

    Vector3::new(r[0], r[1], r[2])
}

/// Sphere-vs-box intersection test.
///
/// Returns whether they intersect along with the squared center-to-box
/// distance, so callers ranking several candidate collisions don't need a
/// second query. The squared form also skips the `sqrt`.
pub fn sphere_intersects_box(sphere: &Sphere, rect: &Cuboid) -> (bool, f32) {
    let sq_dist = squared_distance_point_to_box(sphere.center(), rect);
    (sq_dist <= sphere.radius * sphere.radius, sq_dist)
}

/// 2D segment-segment intersection via cross-product parametrization.
///
/// `a1 -> a2` is the first segment, `b1 -> b2` the second. Parallel
/// segments report `false` even when they overlap colinearly; that case
/// has no single intersection parameter and this routine does not try to
/// produce one.
pub fn segments_intersect(
    a1: Vector2<f32>,
    a2: Vector2<f32>,
    b1: Vector2<f32>,
    b2: Vector2<f32>,
) -> bool {
    let b = a2 - a1;
    let d = b2 - b1;
    let b_dot_d_perp = b.x * d.y - b.y * d.x;

    // Zero cross product: parallel, infinite or no intersection points.
    if b_dot_d_perp == 0.0 {
        return false;
    }

    let c = b1 - a1;
    let t = (c.x * d.y - c.y * d.x) / b_dot_d_perp;
    if !(0.0..=1.0).contains(&t) {
        return false;
    }

    let u = (c.x * b.y - c.y * b.x) / b_dot_d_perp;
    if !(0.0..=1.0).contains(&u) {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_box_is_canonicalized() {
        let b = normalize_box(&Cuboid::new(5.0, 0.0, 0.0, -5.0, 1.0, 1.0));
        assert_eq!(b.min, [0.0, 0.0, 0.0]);
        assert_eq!(b.max, [5.0, 1.0, 1.0]);
    }

    #[test]
    fn sphere_outside_box_misses_with_corner_distance() {
        let unit_box = Cuboid::new(2.0, 2.0, 2.0, 1.0, 1.0, 1.0);

        // Nearest corner is (2, 2, 2): from (1, 1, 1) the distance is
        // sqrt(3), squared 3.
        let sphere = Sphere::new(1.0, 1.0, 1.0, 1.0);
        let (hit, sq_dist) = sphere_intersects_box(&sphere, &unit_box);
        assert!(!hit);
        assert!((sq_dist - 3.0).abs() < 1e-5);

        // From the origin each axis overshoots by 2, so 4 + 4 + 4.
        let sphere = Sphere::new(0.0, 0.0, 0.0, 1.0);
        let (hit, sq_dist) = sphere_intersects_box(&sphere, &unit_box);
        assert!(!hit);
        assert!((sq_dist - 12.0).abs() < 1e-5);
    }

    #[test]
    fn sphere_center_inside_box_hits_at_zero_distance() {
        let sphere = Sphere::new(2.5, 2.5, 2.5, 1.0);
        let unit_box = Cuboid::new(2.0, 2.0, 2.0, 1.0, 1.0, 1.0);
        let (hit, sq_dist) = sphere_intersects_box(&sphere, &unit_box);
        assert!(hit);
        assert_eq!(sq_dist, 0.0);
    }

    #[test]
    fn sphere_touching_face_exactly_hits() {
        let sphere = Sphere::new(1.0, 0.5, 0.5, 1.0);
        let unit_box = Cuboid::new(2.0, 0.0, 0.0, 1.0, 1.0, 1.0);
        let (hit, sq_dist) = sphere_intersects_box(&sphere, &unit_box);
        assert!(hit);
        assert!((sq_dist - 1.0).abs() < 1e-5);
    }

    #[test]
    fn zero_radius_sphere_is_a_point_query() {
        let unit_box = Cuboid::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);
        let (hit, _) = sphere_intersects_box(&Sphere::new(0.5, 0.5, 0.5, 0.0), &unit_box);
        assert!(hit);
        let (hit, _) = sphere_intersects_box(&Sphere::new(1.5, 0.5, 0.5, 0.0), &unit_box);
        assert!(!hit);
    }

    #[test]
    fn closest_point_clamps_per_axis() {
        let unit_box = Cuboid::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);
        let q = closest_point_on_box(Vector3::new(2.0, 0.5, -3.0), &unit_box);
        assert_eq!(q, Vector3::new(1.0, 0.5, 0.0));

        let inside = closest_point_on_box(Vector3::new(0.25, 0.5, 0.75), &unit_box);
        assert_eq!(inside, Vector3::new(0.25, 0.5, 0.75));
    }

    #[test]
    fn excess_vector_is_zero_inside_per_axis() {
        let unit_box = Cuboid::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);
        let r = intersection_excess(Vector3::new(3.0, 0.5, -2.0), &unit_box);
        assert_eq!(r, Vector3::new(2.0, 0.0, 2.0));
    }

    #[test]
    fn zero_volume_box_is_defined_behavior() {
        let flat = Cuboid::new(1.0, 1.0, 1.0, 0.0, 2.0, 2.0);
        let (hit, sq_dist) = sphere_intersects_box(&Sphere::new(0.0, 2.0, 2.0, 1.0), &flat);
        assert!(hit);
        assert!((sq_dist - 1.0).abs() < 1e-5);
    }

    #[test]
    fn crossing_diagonals_intersect() {
        assert!(segments_intersect(
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(0.0, 1.0),
            Vector2::new(1.0, 0.0),
        ));
    }

    #[test]
    fn parallel_segments_do_not_intersect() {
        assert!(!segments_intersect(
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, 1.0),
            Vector2::new(1.0, 1.0),
        ));
    }

    #[test]
    fn colinear_overlapping_segments_report_false() {
        // Documented limitation of the parametrization: zero cross product
        // short-circuits before any overlap check.
        assert!(!segments_intersect(
            Vector2::new(0.0, 0.0),
            Vector2::new(2.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(3.0, 0.0),
        ));
    }

    #[test]
    fn disjoint_non_parallel_segments_report_false() {
        assert!(!segments_intersect(
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(5.0, 0.0),
            Vector2::new(5.0, 1.0),
        ));
    }
}
