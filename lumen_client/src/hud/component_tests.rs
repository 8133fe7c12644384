use glam::{Vec2, Vec4};
use super::*;
use crate::input::InputState;
use crate::render::mock_backend::MockBackend;

#[test]
fn test_crosshair_centered_after_update() {
    let mut crosshair = CrosshairComponent::new(20.0, 2.0, Vec4::ONE);
    crosshair.update(&InputState::new(800, 600));

    let [horizontal, vertical] = crosshair.quads();
    assert_eq!(horizontal.position, Vec2::new(390.0, 299.0));
    assert_eq!(horizontal.size, Vec2::new(20.0, 2.0));
    assert_eq!(vertical.position, Vec2::new(399.0, 290.0));
    assert_eq!(vertical.size, Vec2::new(2.0, 20.0));
}

#[test]
fn test_crosshair_draws_two_quads_in_2d_only() {
    let mut crosshair = CrosshairComponent::default();
    crosshair.update(&InputState::new(100, 100));
    let mut backend = MockBackend::new();

    crosshair.draw_2d(ShaderHandle(0), &mut backend).unwrap();
    crosshair.draw_3d(ShaderHandle(1), &Viewport::new(100, 100), &mut backend).unwrap();

    assert_eq!(backend.commands, vec!["quad@42,49", "quad@49,42"]);
}
