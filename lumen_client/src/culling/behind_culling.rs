/// Behind-the-viewer culling.
///
/// Currently a stub that keeps everything: it never culls, whatever the
/// point or volume. Registered first in the default visibility chain so
/// that the chain order stays stable once a real test lands here.

use glam::Vec3;
use super::culling::{Culling, CullingReason};

#[derive(Debug, Clone, Copy, Default)]
pub struct BehindCulling;

impl BehindCulling {
    pub fn new() -> Self {
        Self
    }
}

impl Culling for BehindCulling {
    fn is_culling(&self, _point: Vec3) -> bool {
        false
    }

    fn reason(&self) -> CullingReason {
        CullingReason::Behind
    }
}
