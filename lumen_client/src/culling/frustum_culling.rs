/// Frustum culling: rejects points outside the camera frustum.

use glam::{Mat4, Vec3};
use super::culling::{Culling, CullingReason};
use super::frustum::Frustum;

#[derive(Debug, Clone, Copy)]
pub struct FrustumCulling {
    frustum: Frustum,
}

impl FrustumCulling {
    pub fn new(frustum: Frustum) -> Self {
        Self { frustum }
    }

    /// Build from the camera's combined view-projection matrix
    pub fn from_view_projection(vp: &Mat4) -> Self {
        Self::new(Frustum::from_view_projection(vp))
    }

    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }
}

impl Culling for FrustumCulling {
    fn is_culling(&self, point: Vec3) -> bool {
        !self.frustum.contains_point(point)
    }

    fn reason(&self) -> CullingReason {
        CullingReason::Frustum
    }
}
