/// Scene renderer.
///
/// Issues every pass of a frame against a `RenderBackend`, in a fixed
/// order: clear, HUD passes, skybox, world, particles. Each pass can be
/// disabled through `RenderPasses`.

use crate::culling::{BehindCulling, ChunkVisibility, CullingStats, DistanceCulling, FrustumCulling};
use crate::engine_debug;
use crate::error::Result;
use crate::hud::HudManager;
use crate::render::{
    RenderBackend, RenderPasses, Viewport,
    SHADER_DEPTH, SHADER_PARTICLES, SHADER_WORLD, UNIFORM_SCENE,
    require_shader,
};
use glam::Vec4;
use super::fog::Fog;
use super::lights::SceneLights;
use super::particles::ParticlesManager;
use super::player::PlayerEntity;
use super::scene::FrameContext;
use super::skybox::SkyboxRenderer;
use super::world::World;

const SOURCE: &str = "lumen::SceneRenderer";

/// Read-only view of the scene state needed to draw one frame
pub struct SceneFrame<'a> {
    pub world: &'a World,
    pub player: &'a PlayerEntity,
    pub lights: &'a SceneLights,
    pub fog: &'a Fog,
    pub particles: &'a [(String, ParticlesManager)],
    pub frame: &'a FrameContext,
}

/// Counters of the last rendered frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameStats {
    pub culling: CullingStats,
    pub chunks_drawn: usize,
    pub particles_drawn: usize,
}

pub struct SceneRenderer {
    clear_color: Vec4,
    passes: RenderPasses,
    view_distance: f32,
    skybox: Option<SkyboxRenderer>,
    stats: FrameStats,
}

impl SceneRenderer {
    pub fn new(clear_color: Vec4, view_distance: f32) -> Self {
        Self {
            clear_color,
            passes: RenderPasses::default(),
            view_distance,
            skybox: None,
            stats: FrameStats::default(),
        }
    }

    pub fn set_skybox(&mut self, skybox: Option<SkyboxRenderer>) {
        self.skybox = skybox;
    }

    pub fn skybox(&self) -> Option<&SkyboxRenderer> {
        self.skybox.as_ref()
    }

    pub fn passes(&self) -> RenderPasses {
        self.passes
    }

    pub fn set_passes(&mut self, passes: RenderPasses) {
        self.passes = passes;
    }

    pub fn view_distance(&self) -> f32 {
        self.view_distance
    }

    pub fn set_view_distance(&mut self, view_distance: f32) {
        self.view_distance = view_distance;
    }

    /// Counters of the last `render` call
    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Draw one frame.
    ///
    /// Stops at the first backend error; later passes are skipped.
    pub fn render(
        &mut self,
        scene: &SceneFrame<'_>,
        backend: &mut dyn RenderBackend,
        huds: &HudManager,
        viewport: &Viewport,
    ) -> Result<()> {
        self.stats = FrameStats::default();
        backend.clear(self.clear_color)?;

        if self.passes.contains(RenderPasses::HUDS) {
            huds.draw(backend, viewport)?;
        }
        if self.passes.contains(RenderPasses::SKYBOX) {
            if let Some(skybox) = &self.skybox {
                skybox.render(backend)?;
            }
        }
        if self.passes.contains(RenderPasses::WORLD) {
            self.render_world(scene, backend, viewport)?;
        }
        if self.passes.contains(RenderPasses::PARTICLES) {
            self.render_particles(scene, backend)?;
        }
        Ok(())
    }

    /// Visibility chain for the current player camera
    pub fn visibility(&self, player: &PlayerEntity, viewport: &Viewport) -> ChunkVisibility {
        let view_projection = player.view_projection(viewport.aspect_ratio());
        ChunkVisibility::new()
            .with(BehindCulling::new())
            .with(DistanceCulling::new(player.position(), self.view_distance))
            .with(FrustumCulling::from_view_projection(&view_projection))
    }

    fn render_world(
        &mut self,
        scene: &SceneFrame<'_>,
        backend: &mut dyn RenderBackend,
        viewport: &Viewport,
    ) -> Result<()> {
        let shader_name = if scene.frame.depth_mode { SHADER_DEPTH } else { SHADER_WORLD };
        let shader = require_shader(&*backend, shader_name)?;

        let visibility = self.visibility(scene.player, viewport);
        let visible = scene.world.visible_chunks(&visibility, &mut self.stats.culling);

        backend.attach_shader(shader)?;
        let uniform = scene.lights.uniform(scene.fog);
        backend.update_uniform(UNIFORM_SCENE, bytemuck::bytes_of(&uniform))?;
        for &chunk in &visible {
            backend.draw_chunk(chunk)?;
            self.stats.chunks_drawn += 1;
        }
        backend.detach_shader()
    }

    fn render_particles(&mut self, scene: &SceneFrame<'_>, backend: &mut dyn RenderBackend) -> Result<()> {
        if scene.particles.iter().all(|(_, p)| p.is_empty()) {
            return Ok(());
        }
        let shader = require_shader(&*backend, SHADER_PARTICLES)?;

        backend.attach_shader(shader)?;
        for (_, particles) in scene.particles.iter().filter(|(_, p)| !p.is_empty()) {
            backend.draw_particles(&particles.positions())?;
            self.stats.particles_drawn += particles.len();
        }
        backend.detach_shader()
    }

    pub fn cleanup(&mut self) {
        if self.skybox.take().is_some() {
            engine_debug!(SOURCE, "Skybox released");
        }
        self.stats = FrameStats::default();
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
