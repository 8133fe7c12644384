/// Inventory overlay: a grid of item slots.

use glam::{Mat4, Vec2, Vec3, Vec4};
use crate::error::Result;
use crate::input::InputProvider;
use crate::render::{MeshHandle, Model3D, Quad2D, Rect2D, RenderBackend, ShaderHandle, TextureId, Viewport};
use super::hud::Hud;
use super::layout::{centered, grid_rect, rect_vecs};

const PANEL_COLOR: Vec4 = Vec4::new(0.1, 0.1, 0.1, 0.8);
const SLOT_COLOR: Vec4 = Vec4::new(0.35, 0.35, 0.35, 1.0);

/// Item occupying a slot, drawn as a small rotated model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStack {
    pub mesh: MeshHandle,
    pub texture: Option<TextureId>,
    pub count: u32,
}

impl ItemStack {
    pub fn new(mesh: MeshHandle, texture: Option<TextureId>, count: u32) -> Self {
        Self { mesh, texture, count }
    }

    /// Isometric pose used for item icons
    pub fn icon_transform() -> Mat4 {
        Mat4::from_rotation_x(30f32.to_radians())
            * Mat4::from_rotation_y(45f32.to_radians())
            * Mat4::from_scale(Vec3::splat(0.6))
    }

    pub(crate) fn model(&self, target: Rect2D) -> Model3D {
        Model3D {
            mesh: self.mesh,
            transform: Self::icon_transform(),
            texture: self.texture,
            target,
        }
    }
}

pub struct InventoryHud {
    columns: usize,
    slots: Vec<Option<ItemStack>>,
    slot_size: f32,
    gap: f32,
    screen: Vec2,
}

impl InventoryHud {
    pub fn new(columns: usize, rows: usize) -> Self {
        let columns = columns.max(1);
        Self {
            columns,
            slots: vec![None; columns * rows],
            slot_size: 48.0,
            gap: 4.0,
            screen: Vec2::ZERO,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, index: usize) -> Option<&ItemStack> {
        self.slots.get(index).and_then(|s| s.as_ref())
    }

    /// Put `item` in slot `index`, returning what was there.
    /// Out-of-range indices are ignored.
    pub fn set_slot(&mut self, index: usize, item: Option<ItemStack>) -> Option<ItemStack> {
        match self.slots.get_mut(index) {
            Some(slot) => std::mem::replace(slot, item),
            None => None,
        }
    }

    /// First empty slot
    pub fn first_free_slot(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.is_none())
    }

    fn rows(&self) -> usize {
        self.slots.len().div_ceil(self.columns)
    }

    fn grid_size(&self) -> Vec2 {
        let stride = self.slot_size + self.gap;
        Vec2::new(
            self.columns as f32 * stride - self.gap,
            self.rows() as f32 * stride - self.gap,
        )
    }

    /// Screen rectangle of slot `index`
    pub fn slot_rect(&self, index: usize) -> Rect2D {
        let origin = centered(self.screen, self.grid_size());
        grid_rect(origin, self.columns, self.slot_size, self.gap, index)
    }
}

impl Hud for InventoryHud {
    fn need_focus(&self) -> bool {
        true
    }

    fn on_open(&mut self, input: &mut dyn InputProvider) {
        let (width, height) = input.effective_size();
        self.screen = Vec2::new(width as f32, height as f32);
    }

    fn update(&mut self, input: &dyn InputProvider) {
        let (width, height) = input.effective_size();
        self.screen = Vec2::new(width as f32, height as f32);
    }

    fn draw_2d(&self, _shader: ShaderHandle, backend: &mut dyn RenderBackend) -> Result<()> {
        let size = self.grid_size() + Vec2::splat(2.0 * self.gap);
        let origin = centered(self.screen, size);
        backend.draw_quad(&Quad2D::colored(origin, size, PANEL_COLOR))?;

        for index in 0..self.slots.len() {
            let (position, size) = rect_vecs(self.slot_rect(index));
            backend.draw_quad(&Quad2D::colored(position, size, SLOT_COLOR))?;
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

    fn cleanup(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }
}

#[cfg(test)]
#[path = "inventory_tests.rs"]
mod tests;
