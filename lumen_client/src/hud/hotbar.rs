/// Hotbar: always-visible row of quick slots at the bottom of the screen.

use glam::{Vec2, Vec4};
use winit::keyboard::KeyCode;
use crate::error::Result;
use crate::input::InputProvider;
use crate::render::{Quad2D, Rect2D, RenderBackend, ShaderHandle, Viewport};
use super::hud::Hud;
use super::inventory::ItemStack;
use super::layout::{grid_rect, rect_vecs};

pub const HOTBAR_SLOTS: usize = 9;

const SLOT_KEYS: [KeyCode; HOTBAR_SLOTS] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

const SLOT_COLOR: Vec4 = Vec4::new(0.2, 0.2, 0.2, 0.8);
const SELECTED_COLOR: Vec4 = Vec4::new(0.9, 0.9, 0.9, 0.9);

pub struct HotBarHud {
    slots: [Option<ItemStack>; HOTBAR_SLOTS],
    selected: usize,
    slot_size: f32,
    gap: f32,
    margin: f32,
    screen: Vec2,
}

impl HotBarHud {
    pub fn new() -> Self {
        Self {
            slots: [None; HOTBAR_SLOTS],
            selected: 0,
            slot_size: 40.0,
            gap: 2.0,
            margin: 8.0,
            screen: Vec2::ZERO,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&ItemStack> {
        self.slots[self.selected].as_ref()
    }

    /// Select slot `index`, ignored when out of range
    pub fn select(&mut self, index: usize) {
        if index < HOTBAR_SLOTS {
            self.selected = index;
        }
    }

    pub fn set_slot(&mut self, index: usize, item: Option<ItemStack>) -> Option<ItemStack> {
        match self.slots.get_mut(index) {
            Some(slot) => std::mem::replace(slot, item),
            None => None,
        }
    }

    pub fn slot_rect(&self, index: usize) -> Rect2D {
        let stride = self.slot_size + self.gap;
        let width = HOTBAR_SLOTS as f32 * stride - self.gap;
        let origin = Vec2::new(
            ((self.screen.x - width) * 0.5).max(0.0),
            (self.screen.y - self.slot_size - self.margin).max(0.0),
        );
        grid_rect(origin, HOTBAR_SLOTS, self.slot_size, self.gap, index)
    }
}

impl Default for HotBarHud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud for HotBarHud {
    fn update(&mut self, input: &dyn InputProvider) {
        let (width, height) = input.effective_size();
        self.screen = Vec2::new(width as f32, height as f32);

        if let Some(index) = SLOT_KEYS.iter().position(|&k| input.was_just_pressed(k)) {
            self.select(index);
        }
    }

    fn on_open(&mut self, input: &mut dyn InputProvider) {
        let (width, height) = input.effective_size();
        self.screen = Vec2::new(width as f32, height as f32);
    }

    fn draw_2d(&self, _shader: ShaderHandle, backend: &mut dyn RenderBackend) -> Result<()> {
        for index in 0..HOTBAR_SLOTS {
            let (position, size) = rect_vecs(self.slot_rect(index));
            let color = if index == self.selected { SELECTED_COLOR } else { SLOT_COLOR };
            backend.draw_quad(&Quad2D::colored(position, size, color))?;
        }
        Ok(())
    }

    fn draw_3d(
        &self,
        _shader: ShaderHandle,
        _viewport: &Viewport,
        backend: &mut dyn RenderBackend,
    ) -> Result<()> {
        for (index, slot) in self.slots.iter().enumerate() {
            if let Some(item) = slot {
                backend.draw_model(&item.model(self.slot_rect(index)))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "hotbar_tests.rs"]
mod tests;
