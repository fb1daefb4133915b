//! # Procedural Geometry
//!
//! Flat vertex-list generators for basic shapes, plus the small helpers
//! used to build such lists by hand. Everything here produces the
//! triangle-list `Vec<f32>` layout the scene's geometry store expects:
//! three floats per vertex, three vertices per triangle.

/// Flattens a point list into the scene's raw vertex layout.
pub fn flatten(points: &[[f32; 3]]) -> Vec<f32> {
    points.iter().flat_map(|p| p.iter().copied()).collect()
}

/// Repeats one point `qty` times; handy for per-vertex color channels.
pub fn repeat(point: [f32; 3], qty: usize) -> Vec<[f32; 3]> {
    vec![point; qty]
}

/// Triangle list for an axis-aligned cuboid anchored at the origin and
/// spanning `(w, h, d)`: 6 faces, 36 vertices, 108 floats.
pub fn cuboid(w: f32, h: f32, d: f32) -> Vec<f32> {
    flatten(&[
        // Front
        [0.0, 0.0, 0.0],
        [0.0, 0.0, d],
        [0.0, h, d],
        [0.0, h, 0.0],
        [0.0, 0.0, 0.0],
        [0.0, h, d],
        // Left
        [w, 0.0, 0.0],
        [0.0, 0.0, 0.0],
        [w, h, 0.0],
        [w, h, 0.0],
        [0.0, 0.0, 0.0],
        [0.0, h, 0.0],
        // Back
        [w, 0.0, 0.0],
        [w, h, 0.0],
        [w, h, d],
        [w, 0.0, d],
        [w, 0.0, 0.0],
        [w, h, d],
        // Right
        [w, h, d],
        [0.0, 0.0, d],
        [w, 0.0, d],
        [w, h, d],
        [0.0, h, d],
        [0.0, 0.0, d],
        // Top
        [w, h, d],
        [0.0, h, 0.0],
        [0.0, h, d],
        [w, h, d],
        [w, h, 0.0],
        [0.0, h, 0.0],
        // Bottom
        [0.0, 0.0, 0.0],
        [w, 0.0, d],
        [0.0, 0.0, d],
        [w, 0.0, d],
        [0.0, 0.0, 0.0],
        [w, 0.0, 0.0],
    ])
}
