//! Scene orchestration: world, player, lights and the per-frame
//! `input -> update -> render` protocol.

mod scene;
mod lights;
mod fog;
mod player;
mod world;
mod particles;
mod updater;
mod skybox;
mod renderer;

pub use scene::{Scene, FrameContext, SHORTCUT_DEPTH_MODE, SHORTCUT_COLOR_MODE};
pub use lights::{DirectionalLight, SceneLights, SceneUniform, light_direction};
pub use fog::Fog;
pub use player::{PlayerEntity, MovementIndicators};
pub use world::{World, ChunkPos, CHUNK_SIZE};
pub use particles::{Particle, ParticlesManager};
pub use updater::{SceneUpdater, UpdateContext, NoOpUpdater, ParticlesUpdater};
pub use skybox::SkyboxRenderer;
pub use renderer::{SceneRenderer, SceneFrame, FrameStats};
