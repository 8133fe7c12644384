use super::*;
use crate::hud::ItemStack;
use crate::input::InputState;
use crate::render::mock_backend::MockBackend;
use crate::render::MeshHandle;

#[test]
fn test_hotbar_does_not_need_focus() {
    assert!(!HotBarHud::new().need_focus());
}

#[test]
fn test_hotbar_digit_selects_slot() {
    let mut hotbar = HotBarHud::new();
    let mut input = InputState::new(800, 600);

    input.press(KeyCode::Digit3);
    hotbar.update(&input);
    assert_eq!(hotbar.selected(), 2);

    input.begin_tick();
    input.press(KeyCode::Digit9);
    hotbar.update(&input);
    assert_eq!(hotbar.selected(), 8);
}

#[test]
fn test_hotbar_select_out_of_range_ignored() {
    let mut hotbar = HotBarHud::new();
    hotbar.select(4);
    hotbar.select(HOTBAR_SLOTS);
    assert_eq!(hotbar.selected(), 4);
}

#[test]
fn test_hotbar_selected_item() {
    let mut hotbar = HotBarHud::new();
    let stack = ItemStack::new(MeshHandle(2), None, 64);
    hotbar.set_slot(1, Some(stack));

    assert!(hotbar.selected_item().is_none());
    hotbar.select(1);
    assert_eq!(hotbar.selected_item(), Some(&stack));
}

#[test]
fn test_hotbar_anchored_bottom_center() {
    let mut hotbar = HotBarHud::new();
    hotbar.update(&InputState::new(800, 600));

    // 9 * 42 - 2 = 376 wide
    let first = hotbar.slot_rect(0);
    assert_eq!((first.x, first.y), (212, 552));
    let last = hotbar.slot_rect(HOTBAR_SLOTS - 1);
    assert_eq!(last.x, 212 + 8 * 42);
}

#[test]
fn test_hotbar_draws_every_slot_and_items() {
    let mut hotbar = HotBarHud::new();
    hotbar.set_slot(0, Some(ItemStack::new(MeshHandle(4), None, 1)));
    let mut backend = MockBackend::new();

    hotbar.draw_2d(ShaderHandle(0), &mut backend).unwrap();
    hotbar.draw_3d(ShaderHandle(1), &Viewport::new(800, 600), &mut backend).unwrap();

    assert_eq!(backend.commands_starting_with("quad@").len(), HOTBAR_SLOTS);
    assert_eq!(backend.commands_starting_with("model:"), vec!["model:4"]);
}
