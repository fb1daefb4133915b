// src/lib.rs
//! Tartan 3D Scene Library
//!
//! A retained-mode scene core: hierarchical transform composition,
//! bounding box derivation, and standalone geometric collision queries.
//! Rendering, asset I/O, and input handling are deliberately left to the
//! host application; this crate produces the matrices and volumes those
//! layers consume.
//!
//! ```
//! use tartan::geometry;
//! use tartan::scene::{pipeline, ObjectDesc, Scene, Settings};
//!
//! let mut scene = Scene::new();
//! scene
//!     .add_object(
//!         ObjectDesc::new("crate", geometry::cuboid(1.0, 1.0, 1.0))
//!             .position(0.0, 0.0, 5.0)
//!             .compute_bbox(),
//!     )
//!     .unwrap();
//!
//! let frame = pipeline::run_frame(&mut scene, &Settings::default(), 16.0 / 9.0);
//! assert!(frame.outputs.contains_key("crate"));
//! ```

pub mod collision;
pub mod geometry;
pub mod math;
pub mod prelude;
pub mod scene;

// Re-export main types for convenience
pub use collision::{Cuboid, Sphere};
pub use scene::{BoundingBox, Camera, ObjectDesc, Scene, SceneError, Settings};
