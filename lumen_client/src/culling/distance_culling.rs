/// Distance culling: rejects points beyond the view distance.

use glam::Vec3;
use super::culling::{Culling, CullingReason};

#[derive(Debug, Clone, Copy)]
pub struct DistanceCulling {
    viewer: Vec3,
    max_distance_squared: f32,
}

impl DistanceCulling {
    /// Keep everything within `max_distance` of `viewer` (inclusive)
    pub fn new(viewer: Vec3, max_distance: f32) -> Self {
        let max_distance = max_distance.max(0.0);
        Self {
            viewer,
            max_distance_squared: max_distance * max_distance,
        }
    }

    pub fn viewer(&self) -> Vec3 {
        self.viewer
    }

    pub fn max_distance(&self) -> f32 {
        self.max_distance_squared.sqrt()
    }
}

impl Culling for DistanceCulling {
    fn is_culling(&self, point: Vec3) -> bool {
        point.distance_squared(self.viewer) > self.max_distance_squared
    }

    fn reason(&self) -> CullingReason {
        CullingReason::OutOfRange
    }
}
