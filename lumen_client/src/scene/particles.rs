/// CPU-side particle system.

use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Seconds left to live
    pub remaining: f32,
}

/// Bounded pool of short-lived particles
#[derive(Debug, Clone)]
pub struct ParticlesManager {
    particles: Vec<Particle>,
    capacity: usize,
    gravity: Vec3,
}

impl ParticlesManager {
    pub fn new(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
            capacity,
            gravity: Vec3::ZERO,
        }
    }

    pub fn with_gravity(mut self, gravity: Vec3) -> Self {
        self.gravity = gravity;
        self
    }

    /// Spawn a particle; false when the pool is full or `lifetime <= 0`
    pub fn emit(&mut self, position: Vec3, velocity: Vec3, lifetime: f32) -> bool {
        if self.particles.len() >= self.capacity || lifetime <= 0.0 {
            return false;
        }
        self.particles.push(Particle {
            position,
            velocity,
            remaining: lifetime,
        });
        true
    }

    /// Advance by `dt` seconds and drop expired particles
    pub fn update(&mut self, dt: f32) {
        let gravity = self.gravity;
        for p in &mut self.particles {
            p.velocity += gravity * dt;
            p.position += p.velocity * dt;
            p.remaining -= dt;
        }
        self.particles.retain(|p| p.remaining > 0.0);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn positions(&self) -> Vec<Vec3> {
        self.particles.iter().map(|p| p.position).collect()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
#[path = "particles_tests.rs"]
mod tests;
