/// Chunk visibility evaluator: an ordered chain of culling strategies.

use glam::Vec3;
use rustc_hash::FxHashMap;
use super::culling::{Culling, CullingReason};

/// Ordered chain of strategies.
///
/// Evaluation short-circuits on the first strategy that culls; its reason
/// is the one reported. Ties between strategies are broken by registration
/// order, never by severity. An empty chain keeps everything.
#[derive(Default)]
pub struct ChunkVisibility {
    strategies: Vec<Box<dyn Culling>>,
}

impl ChunkVisibility {
    pub fn new() -> Self {
        Self { strategies: Vec::new() }
    }

    /// Append a strategy (builder form)
    pub fn with<C: Culling + 'static>(mut self, strategy: C) -> Self {
        self.push(strategy);
        self
    }

    /// Append a strategy at the end of the chain
    pub fn push<C: Culling + 'static>(&mut self, strategy: C) {
        self.strategies.push(Box::new(strategy));
    }

    /// Reasons of the registered strategies, in evaluation order
    pub fn reasons(&self) -> Vec<CullingReason> {
        self.strategies.iter().map(|s| s.reason()).collect()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// First reason rejecting `point`, or None if it is visible
    pub fn evaluate_point(&self, point: Vec3) -> Option<CullingReason> {
        self.strategies
            .iter()
            .find(|s| s.is_culling(point))
            .map(|s| s.reason())
    }

    /// First reason rejecting the volume `[origin, origin + size]`
    pub fn evaluate(&self, origin: Vec3, size: Vec3) -> Option<CullingReason> {
        self.strategies
            .iter()
            .find(|s| s.is_culling_volume(origin, size))
            .map(|s| s.reason())
    }

    /// Whether the volume must be drawn
    pub fn is_visible(&self, origin: Vec3, size: Vec3) -> bool {
        self.evaluate(origin, size).is_none()
    }
}

/// Per-frame culling diagnostics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CullingStats {
    /// Volumes kept
    pub visible: usize,
    /// Volumes rejected, by the reason that rejected them
    pub culled: FxHashMap<CullingReason, usize>,
}

impl CullingStats {
    /// Record the outcome of one `ChunkVisibility::evaluate` call
    pub fn record(&mut self, outcome: Option<CullingReason>) {
        match outcome {
            None => self.visible += 1,
            Some(reason) => *self.culled.entry(reason).or_insert(0) += 1,
        }
    }

    /// Volumes rejected for `reason`
    pub fn culled_by(&self, reason: CullingReason) -> usize {
        self.culled.get(&reason).copied().unwrap_or(0)
    }

    /// Total volumes rejected
    pub fn culled_total(&self) -> usize {
        self.culled.values().sum()
    }

    /// Total volumes evaluated
    pub fn evaluated(&self) -> usize {
        self.visible + self.culled_total()
    }
}

#[cfg(test)]
#[path = "chunk_visibility_tests.rs"]
mod tests;
