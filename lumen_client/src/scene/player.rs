/// First-person player: position, orientation, movement and camera.

use glam::{Mat4, Vec3};
use winit::keyboard::KeyCode;
use crate::input::InputProvider;

/// Keys currently asking for movement, refreshed on every input poll
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementIndicators {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MovementIndicators {
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right || self.up || self.down
    }
}

#[derive(Debug, Clone)]
pub struct PlayerEntity {
    position: Vec3,
    /// Radians, 0 looks down -Z
    yaw: f32,
    /// Radians, clamped just short of straight up/down
    pitch: f32,
    /// World units per input poll
    pub speed: f32,
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    indicators: MovementIndicators,
}

const PITCH_LIMIT: f32 = 89.0 * std::f32::consts::PI / 180.0;

impl PlayerEntity {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            speed: 0.1,
            fov_y: 70f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            indicators: MovementIndicators::default(),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw = (self.yaw + yaw_delta).rem_euclid(std::f32::consts::TAU);
        self.pitch = (self.pitch + pitch_delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn indicators(&self) -> MovementIndicators {
        self.indicators
    }

    /// Stop every movement (a HUD took the keyboard)
    pub fn reset_indicators(&mut self) {
        self.indicators = MovementIndicators::default();
    }

    /// Unit look direction
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
    }

    /// Unit right direction on the horizontal plane
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    /// Read movement keys and move accordingly
    pub fn input(&mut self, input: &dyn InputProvider) {
        self.indicators = MovementIndicators {
            forward: input.is_key_held(KeyCode::KeyW),
            backward: input.is_key_held(KeyCode::KeyS),
            left: input.is_key_held(KeyCode::KeyA),
            right: input.is_key_held(KeyCode::KeyD),
            up: input.is_key_held(KeyCode::Space),
            down: input.is_key_held(KeyCode::ShiftLeft),
        };
        self.step();
    }

    fn step(&mut self) {
        let axis = |positive: bool, negative: bool| positive as i32 as f32 - negative as i32 as f32;
        let flat_forward = Vec3::new(self.yaw.sin(), 0.0, -self.yaw.cos());
        let i = self.indicators;

        let wish = flat_forward * axis(i.forward, i.backward)
            + self.right() * axis(i.right, i.left)
            + Vec3::Y * axis(i.up, i.down);
        self.position += wish.normalize_or_zero() * self.speed;
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), Vec3::Y)
    }

    pub fn projection(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect_ratio, self.near, self.far)
    }

    pub fn view_projection(&self, aspect_ratio: f32) -> Mat4 {
        self.projection(aspect_ratio) * self.view()
    }
}

impl Default for PlayerEntity {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod tests;
