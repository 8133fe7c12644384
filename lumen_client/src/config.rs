//! Plain configuration structs with sensible defaults.

use std::time::Duration;
use glam::{Vec3, Vec4};
use winit::keyboard::KeyCode;
use crate::scene::{DirectionalLight, Fog};

/// Scene construction parameters
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// RGBA color the frame is cleared to
    pub clear_color: Vec4,
    /// Initial sun elevation in degrees
    pub light_angle: f32,
    /// Elevation change applied every rendered frame, in degrees
    pub angle_increment: f32,
    pub directional_light: DirectionalLight,
    pub specular_power: f32,
    pub ambient_light: Vec3,
    pub fog: Fog,
    pub player_start: Vec3,
    /// Minimum delay between two gameplay input polls
    pub input_interval: Duration,
    /// Chunks farther than this from the player are culled
    pub view_distance: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            clear_color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            light_angle: 45.0,
            angle_increment: 0.0,
            directional_light: DirectionalLight::default(),
            specular_power: 10.0,
            ambient_light: Vec3::splat(0.3),
            fog: Fog::NONE,
            player_start: Vec3::new(0.0, 0.0, 2.0),
            input_interval: Duration::from_millis(10),
            view_distance: 256.0,
        }
    }
}

/// Global keys the HUD registry reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudBindings {
    /// Held together, closes every open HUD
    pub close_all: Vec<KeyCode>,
    /// Reserved for closing the top-most HUD; currently ignored
    pub close_upper: KeyCode,
}

impl Default for HudBindings {
    fn default() -> Self {
        Self {
            close_all: vec![KeyCode::ControlLeft, KeyCode::Escape],
            close_upper: KeyCode::Escape,
        }
    }
}
