//! World-chunk visibility culling.
//!
//! A `Culling` strategy is a side-effect-free predicate over points and
//! axis-aligned volumes: it answers "must this NOT be drawn?". Strategies
//! are composed by `ChunkVisibility`, which the world iterator consults
//! before submitting a chunk to the renderer.

mod culling;
mod behind_culling;
mod distance_culling;
mod frustum;
mod frustum_culling;
mod chunk_visibility;

pub use culling::{Culling, CullingReason};
pub use behind_culling::BehindCulling;
pub use distance_culling::DistanceCulling;
pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use frustum_culling::FrustumCulling;
pub use chunk_visibility::{ChunkVisibility, CullingStats};
