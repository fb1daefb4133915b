//! # Tartan Prelude
//!
//! One-stop import for the types a typical caller touches every frame.
//!
//! ```
//! use tartan::prelude::*;
//!
//! let mut scene = Scene::new();
//! scene
//!     .add_object(ObjectDesc::new("floor", tartan::geometry::cuboid(10.0, 0.1, 10.0)))
//!     .unwrap();
//! let frame = run_frame(&mut scene, &Settings::default(), 16.0 / 9.0);
//! assert_eq!(frame.outputs.len(), 1);
//! ```

pub use crate::collision::{
    closest_point_on_box, intersection_excess, normalize_box, segments_intersect,
    sphere_intersects_box, squared_distance_point_to_box, Aabb, Cuboid, Sphere,
};
pub use crate::math::{m3, m4};
pub use crate::scene::{
    run_frame, BoundingBox, Camera, Channel, Frame, Object3D, ObjectDesc, ObjectUpdate, Scene,
    SceneError, Settings,
};
