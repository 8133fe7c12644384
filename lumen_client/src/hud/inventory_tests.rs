use super::*;
use crate::input::InputState;
use crate::render::mock_backend::MockBackend;

fn item(mesh: u32) -> ItemStack {
    ItemStack::new(MeshHandle(mesh), None, 1)
}

#[test]
fn test_inventory_slots() {
    let mut inventory = InventoryHud::new(9, 3);
    assert_eq!(inventory.slot_count(), 27);
    assert_eq!(inventory.first_free_slot(), Some(0));

    assert_eq!(inventory.set_slot(0, Some(item(5))), None);
    assert_eq!(inventory.slot(0), Some(&item(5)));
    assert_eq!(inventory.first_free_slot(), Some(1));
    assert_eq!(inventory.set_slot(0, None), Some(item(5)));
}

#[test]
fn test_inventory_out_of_range_slot_ignored() {
    let mut inventory = InventoryHud::new(2, 2);
    assert_eq!(inventory.set_slot(10, Some(item(1))), None);
    assert!(inventory.slot(10).is_none());
}

#[test]
fn test_inventory_needs_focus() {
    assert!(InventoryHud::new(1, 1).need_focus());
}

#[test]
fn test_inventory_slot_grid_is_centered() {
    let mut inventory = InventoryHud::new(2, 1);
    inventory.on_open(&mut InputState::new(200, 100));

    // grid 100x48 (2 * 52 - 4), centered at (50, 26)
    let first = inventory.slot_rect(0);
    let second = inventory.slot_rect(1);
    assert_eq!((first.x, first.y, first.width), (50, 26, 48));
    assert_eq!((second.x, second.y), (102, 26));
}

#[test]
fn test_inventory_draws_items_in_3d_pass() {
    let mut inventory = InventoryHud::new(3, 1);
    inventory.set_slot(0, Some(item(7)));
    inventory.set_slot(2, Some(item(8)));
    let mut backend = MockBackend::new();

    inventory.draw_2d(ShaderHandle(0), &mut backend).unwrap();
    assert_eq!(backend.commands_starting_with("quad@").len(), 4);

    backend.commands.clear();
    inventory.draw_3d(ShaderHandle(1), &Viewport::new(800, 600), &mut backend).unwrap();
    assert_eq!(backend.commands, vec!["model:7", "model:8"]);
}

#[test]
fn test_inventory_cleanup_empties_slots() {
    let mut inventory = InventoryHud::new(2, 1);
    inventory.set_slot(1, Some(item(1)));
    inventory.cleanup();
    assert_eq!(inventory.first_free_slot(), Some(0));
    assert!(inventory.slot(1).is_none());
}
