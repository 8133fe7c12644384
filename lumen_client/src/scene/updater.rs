/// Update strategies.
///
/// An updater advances simulation state once per frame, between input
/// polling and rendering. The scene owns exactly one.

use super::particles::ParticlesManager;
use super::player::PlayerEntity;
use super::scene::FrameContext;
use super::world::World;

/// Mutable view of the scene handed to an updater
pub struct UpdateContext<'a> {
    pub world: &'a mut World,
    pub player: &'a mut PlayerEntity,
    /// Named particle systems, in registration order
    pub particles: &'a mut [(String, ParticlesManager)],
    pub frame: &'a FrameContext,
}

/// Strategy for advancing scene state each frame.
///
/// `&mut self` allows stateful implementations (accumulated time,
/// spawn timers).
pub trait SceneUpdater {
    fn update(&mut self, ctx: &mut UpdateContext<'_>);
}

/// Leaves the scene untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpUpdater;

impl NoOpUpdater {
    pub fn new() -> Self {
        Self
    }
}

impl SceneUpdater for NoOpUpdater {
    fn update(&mut self, _ctx: &mut UpdateContext<'_>) {}
}

/// Advances every particle system by a fixed time step.
#[derive(Debug, Clone, Copy)]
pub struct ParticlesUpdater {
    step: f32,
}

impl ParticlesUpdater {
    /// `step` is the simulated time per frame, in seconds
    pub fn new(step: f32) -> Self {
        Self { step: step.max(0.0) }
    }

    pub fn step(&self) -> f32 {
        self.step
    }
}

impl Default for ParticlesUpdater {
    fn default() -> Self {
        Self::new(1.0 / 60.0)
    }
}

impl SceneUpdater for ParticlesUpdater {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        for (_, particles) in ctx.particles.iter_mut() {
            particles.update(self.step);
        }
    }
}

#[cfg(test)]
#[path = "updater_tests.rs"]
mod tests;
