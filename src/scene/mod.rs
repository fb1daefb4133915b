//! # Scene Management Module
//!
//! The retained-mode core: an arena of [`Object3D`] nodes flattened from
//! registration trees, the shared geometry store they reference, the
//! camera, and the per-frame transform pipeline that composes everything
//! into world matrices and bounding boxes.
//!
//! ## Key Components
//!
//! - [`Scene`] - object arena, registration/removal, update dispatch
//! - [`ObjectDesc`] - builder-style registration input, tree shaped
//! - [`Object3D`] - a registered node with its transform fields
//! - [`Camera`] - view-matrix construction with optional look-at target
//! - [`pipeline`] - the once-per-frame transform pass
//! - [`bbox`] - bounding box derivation from raw geometry
//!
//! ## Ordering Contract
//!
//! Registration appends depth-first, parent before children. The pipeline
//! composes world matrices in one top-to-bottom sweep and relies on that
//! order; [`Scene`] enforces it across re-parenting and removal.

pub mod bbox;
pub mod camera;
pub mod error;
pub mod object;
pub mod pipeline;
pub mod scene;
pub mod store;
pub mod warnings;

// Re-export main types
pub use bbox::BoundingBox;
pub use camera::Camera;
pub use error::SceneError;
pub use object::{Object3D, ObjectDesc};
pub use pipeline::{run_frame, should_skip, Frame, Settings};
pub use scene::{ObjectUpdate, Scene};
pub use store::{Channel, GeometryStore};
pub use warnings::WarningSink;
