//! Registration-time configuration errors.
//!
//! These all indicate caller bugs and fail fast at registration; nothing
//! in the per-frame path returns them. Numerical degeneracies (singular
//! inverse, zero-length normalize) are deliberately *not* errors - see the
//! math module docs.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("an object named '{0}' is already registered")]
    DuplicateName(String),

    #[error("no object named '{0}' is registered")]
    UnknownObject(String),

    #[error("object '{child}' already has parent '{existing}'; a node cannot have two parents")]
    ParentConflict {
        child: String,
        existing: String,
        requested: String,
    },

    #[error("parent '{parent}' is registered after child '{child}'; parents must precede children")]
    OrderViolation { parent: String, child: String },

    #[error("vertex data for '{0}' is not a whole number of xyz triplets")]
    MalformedVertexData(String),
}
