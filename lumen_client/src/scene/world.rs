/// Chunked world storage.
///
/// Only chunk presence is tracked here; chunk meshes live on the backend,
/// addressed by chunk position.

use glam::{IVec3, Vec3};
use rustc_hash::FxHashSet;
use crate::culling::{ChunkVisibility, CullingStats};

/// Integer chunk coordinates
pub type ChunkPos = IVec3;

/// Edge length of a chunk in world units
pub const CHUNK_SIZE: i32 = 16;

#[derive(Debug, Default)]
pub struct World {
    /// Insertion order, used as draw order
    order: Vec<ChunkPos>,
    present: FxHashSet<ChunkPos>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flat layer of chunks at y = 0, `radius` chunks around the origin
    pub fn flat(radius: i32) -> Self {
        let mut world = Self::new();
        for x in -radius..=radius {
            for z in -radius..=radius {
                world.add_chunk(IVec3::new(x, 0, z));
            }
        }
        world
    }

    /// Returns false if the chunk was already present
    pub fn add_chunk(&mut self, pos: ChunkPos) -> bool {
        if !self.present.insert(pos) {
            return false;
        }
        self.order.push(pos);
        true
    }

    pub fn remove_chunk(&mut self, pos: ChunkPos) -> bool {
        if !self.present.remove(&pos) {
            return false;
        }
        self.order.retain(|&p| p != pos);
        true
    }

    pub fn contains(&self, pos: ChunkPos) -> bool {
        self.present.contains(&pos)
    }

    pub fn chunk_count(&self) -> usize {
        self.order.len()
    }

    pub fn chunks(&self) -> &[ChunkPos] {
        &self.order
    }

    /// Chunk containing the world-space `point`
    pub fn chunk_at(point: Vec3) -> ChunkPos {
        (point / CHUNK_SIZE as f32).floor().as_ivec3()
    }

    /// World-space (origin, size) of a chunk
    pub fn chunk_bounds(pos: ChunkPos) -> (Vec3, Vec3) {
        let origin = pos.as_vec3() * CHUNK_SIZE as f32;
        (origin, Vec3::splat(CHUNK_SIZE as f32))
    }

    /// Chunks `visibility` keeps, in draw order; every outcome is recorded
    /// in `stats`
    pub fn visible_chunks(&self, visibility: &ChunkVisibility, stats: &mut CullingStats) -> Vec<ChunkPos> {
        self.order
            .iter()
            .copied()
            .filter(|&pos| {
                let (origin, size) = Self::chunk_bounds(pos);
                let outcome = visibility.evaluate(origin, size);
                stats.record(outcome);
                outcome.is_none()
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.present.clear();
    }
}

#[cfg(test)]
#[path = "world_tests.rs"]
mod tests;
