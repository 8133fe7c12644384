/// Culling strategy trait and rejection reasons.

use std::fmt;
use glam::Vec3;

/// Why a strategy rejects a point or volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CullingReason {
    /// Behind the viewer
    Behind,
    /// Farther than the view distance
    OutOfRange,
    /// Outside the view frustum
    Frustum,
}

impl fmt::Display for CullingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CullingReason::Behind => write!(f, "BEHIND"),
            CullingReason::OutOfRange => write!(f, "OUT_OF_RANGE"),
            CullingReason::Frustum => write!(f, "FRUSTUM"),
        }
    }
}

/// Visibility predicate. `true` means "not visible, do not draw".
///
/// `&self` on every method: a strategy holds the viewer state it was
/// built with and never mutates it while testing.
pub trait Culling: Send + Sync {
    /// Whether `point` is outside the region this strategy keeps
    fn is_culling(&self, point: Vec3) -> bool;

    /// Whether the volume `[origin, origin + size]` is rejected.
    ///
    /// Two-corner test: the volume is rejected only if both the near
    /// corner (`origin`) and the far corner (`origin + size`) are
    /// rejected by `is_culling`. Conservative, not an exact AABB test.
    fn is_culling_volume(&self, origin: Vec3, size: Vec3) -> bool {
        self.is_culling(origin) && self.is_culling(origin + size)
    }

    /// Tag reported when this strategy rejects
    fn reason(&self) -> CullingReason;
}

#[cfg(test)]
#[path = "culling_tests.rs"]
mod tests;
