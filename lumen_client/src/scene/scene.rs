/// Scene: world, player, lights and particles, driven once per frame
/// through `input`, `update` and `render`, in that order.

use std::time::{Duration, Instant};
use crate::config::SceneConfig;
use crate::error::Result;
use crate::hud::HudManager;
use crate::input::{InputProvider, CONTEXT_GENERAL, CONTEXT_HUDS};
use crate::render::{RenderBackend, Viewport};
use crate::timer::Timer;
use crate::{engine_debug, engine_info, engine_warn};
use super::fog::Fog;
use super::lights::SceneLights;
use super::particles::ParticlesManager;
use super::player::PlayerEntity;
use super::renderer::{SceneFrame, SceneRenderer};
use super::updater::{NoOpUpdater, SceneUpdater, UpdateContext};
use super::world::World;

const SOURCE: &str = "lumen::Scene";

/// Shortcut switching the world pass to the depth shader
pub const SHORTCUT_DEPTH_MODE: &str = "DEPTH_MODE";

/// Shortcut switching the world pass back to the lit shader
pub const SHORTCUT_COLOR_MODE: &str = "COLOR_MODE";

const MAX_LIGHT_ANGLE: f32 = 90.0;

/// Per-frame render state passed down to the passes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameContext {
    /// Draw world chunks with the depth shader instead of the lit one
    pub depth_mode: bool,
    /// Number of frames rendered so far
    pub frame_index: u64,
}

pub struct Scene {
    world: World,
    player: PlayerEntity,
    lights: SceneLights,
    fog: Fog,
    particles: Vec<(String, ParticlesManager)>,
    light_angle: f32,
    angle_increment: f32,
    input_timer: Timer,
    input_interval: Duration,
    frame: FrameContext,
    updater: Box<dyn SceneUpdater>,
    renderer: SceneRenderer,
}

impl Scene {
    pub fn new(config: SceneConfig, world: World) -> Self {
        let mut lights = SceneLights::new(
            config.directional_light,
            config.specular_power,
            config.ambient_light,
        );
        let light_angle = config.light_angle.clamp(-MAX_LIGHT_ANGLE, MAX_LIGHT_ANGLE);
        lights.set_elevation(light_angle);

        engine_info!(SOURCE, "Scene created with {} chunk(s)", world.chunk_count());

        Self {
            world,
            player: PlayerEntity::new(config.player_start),
            lights,
            fog: config.fog,
            particles: Vec::new(),
            light_angle,
            angle_increment: config.angle_increment,
            input_timer: Timer::new(),
            input_interval: config.input_interval,
            frame: FrameContext::default(),
            updater: Box::new(NoOpUpdater::new()),
            renderer: SceneRenderer::new(config.clear_color, config.view_distance),
        }
    }

    // ===== FRAME PROTOCOL =====

    /// Poll gameplay input, unless a HUD holds the focus
    pub fn input(&mut self, input: &mut dyn InputProvider, huds: &HudManager) {
        self.input_at(Instant::now(), input, huds);
    }

    /// Same as `input` with an explicit clock reading.
    ///
    /// While a HUD needs focus the shortcut context is `HUDS`, movement
    /// indicators are cleared and nothing else is read. Otherwise the
    /// context is `GENERAL`: render-mode shortcuts are checked every tick,
    /// since they only fire on the tick their key goes down, and player
    /// movement is polled at most once per input interval.
    pub fn input_at(&mut self, now: Instant, input: &mut dyn InputProvider, huds: &HudManager) {
        if huds.need_focus() {
            input.set_context(CONTEXT_HUDS);
            self.player.reset_indicators();
            return;
        }

        input.set_context(CONTEXT_GENERAL);

        if input.is_shortcut_enabled(SHORTCUT_DEPTH_MODE) {
            self.frame.depth_mode = true;
            engine_info!(SOURCE, "Depth mode enabled");
        }
        if input.is_shortcut_enabled(SHORTCUT_COLOR_MODE) {
            self.frame.depth_mode = false;
            engine_info!(SOURCE, "Color mode enabled");
        }

        if self.input_timer.is_time_at(now, self.input_interval) {
            self.player.input(&*input);
        }
    }

    /// Advance simulation state through the scene updater
    pub fn update(&mut self) {
        let mut ctx = UpdateContext {
            world: &mut self.world,
            player: &mut self.player,
            particles: &mut self.particles,
            frame: &self.frame,
        };
        self.updater.update(&mut ctx);
    }

    /// Move the sun, then draw the frame
    pub fn render(
        &mut self,
        backend: &mut dyn RenderBackend,
        huds: &HudManager,
        viewport: &Viewport,
    ) -> Result<()> {
        self.light_angle = (self.light_angle + self.angle_increment)
            .clamp(-MAX_LIGHT_ANGLE, MAX_LIGHT_ANGLE);
        self.lights.set_elevation(self.light_angle);
        self.frame.frame_index += 1;

        let frame = SceneFrame {
            world: &self.world,
            player: &self.player,
            lights: &self.lights,
            fog: &self.fog,
            particles: &self.particles,
            frame: &self.frame,
        };
        self.renderer.render(&frame, backend, huds, viewport)
    }

    /// Release owned resources in reverse acquisition order
    pub fn cleanup(&mut self) {
        let systems = self.particles.len();
        self.particles.clear();
        self.renderer.cleanup();
        self.world.clear();
        engine_info!(SOURCE, "Scene cleaned up ({} particle system(s) released)", systems);
    }

    // ===== PARTICLES =====

    /// Register a particle system; a system with the same name is replaced
    /// in place and returned
    pub fn add_particles(&mut self, name: &str, particles: ParticlesManager) -> Option<ParticlesManager> {
        if let Some((_, slot)) = self.particles.iter_mut().find(|(n, _)| n == name) {
            engine_warn!(SOURCE, "Particle system '{}' replaced", name);
            return Some(std::mem::replace(slot, particles));
        }
        engine_debug!(SOURCE, "Particle system '{}' added", name);
        self.particles.push((name.to_string(), particles));
        None
    }

    pub fn particles(&self, name: &str) -> Option<&ParticlesManager> {
        self.particles.iter().find(|(n, _)| n == name).map(|(_, p)| p)
    }

    pub fn particles_mut(&mut self, name: &str) -> Option<&mut ParticlesManager> {
        self.particles.iter_mut().find(|(n, _)| n == name).map(|(_, p)| p)
    }

    pub fn remove_particles(&mut self, name: &str) -> Option<ParticlesManager> {
        let index = self.particles.iter().position(|(n, _)| n == name)?;
        Some(self.particles.remove(index).1)
    }

    /// Names of the particle systems, in registration order
    pub fn particles_names(&self) -> Vec<&str> {
        self.particles.iter().map(|(n, _)| n.as_str()).collect()
    }

    // ===== ACCESSORS =====

    /// Current sun elevation, in degrees
    pub fn light_angle(&self) -> f32 {
        self.light_angle
    }

    pub fn lights(&self) -> &SceneLights {
        &self.lights
    }

    pub fn fog(&self) -> &Fog {
        &self.fog
    }

    pub fn set_fog(&mut self, fog: Fog) {
        self.fog = fog;
    }

    pub fn player(&self) -> &PlayerEntity {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerEntity {
        &mut self.player
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn frame(&self) -> &FrameContext {
        &self.frame
    }

    pub fn set_updater(&mut self, updater: Box<dyn SceneUpdater>) {
        self.updater = updater;
    }

    pub fn renderer(&self) -> &SceneRenderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut SceneRenderer {
        &mut self.renderer
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
