/// Pause / main menu overlay.

use glam::{Vec2, Vec4};
use winit::keyboard::KeyCode;
use crate::error::Result;
use crate::input::InputProvider;
use crate::render::{Quad2D, RenderBackend, ShaderHandle};
use super::hud::Hud;
use super::layout::centered;

const PANEL_COLOR: Vec4 = Vec4::new(0.0, 0.0, 0.0, 0.6);
const ENTRY_COLOR: Vec4 = Vec4::new(0.3, 0.3, 0.3, 0.9);
const SELECTED_COLOR: Vec4 = Vec4::new(0.8, 0.8, 0.2, 0.9);

/// Vertical list of entries centered on screen, selected with the arrow keys
pub struct MenuHud {
    entries: Vec<String>,
    selected: usize,
    entry_size: Vec2,
    spacing: f32,
    screen: Vec2,
}

impl MenuHud {
    pub fn new<S: Into<String>>(entries: impl IntoIterator<Item = S>) -> Self {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
            selected: 0,
            entry_size: Vec2::new(240.0, 40.0),
            spacing: 8.0,
            screen: Vec2::ZERO,
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&str> {
        self.entries.get(self.selected).map(|s| s.as_str())
    }

    pub fn select_next(&mut self) {
        if !self.entries.is_empty() {
            self.selected = (self.selected + 1) % self.entries.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.entries.is_empty() {
            self.selected = (self.selected + self.entries.len() - 1) % self.entries.len();
        }
    }

    fn panel_size(&self) -> Vec2 {
        let count = self.entries.len() as f32;
        Vec2::new(
            self.entry_size.x + 2.0 * self.spacing,
            count * (self.entry_size.y + self.spacing) + self.spacing,
        )
    }
}

impl Hud for MenuHud {
    fn need_focus(&self) -> bool {
        true
    }

    fn on_open(&mut self, input: &mut dyn InputProvider) {
        let (width, height) = input.effective_size();
        self.screen = Vec2::new(width as f32, height as f32);
        self.selected = 0;
    }

    fn update(&mut self, input: &dyn InputProvider) {
        let (width, height) = input.effective_size();
        self.screen = Vec2::new(width as f32, height as f32);

        if input.was_just_pressed(KeyCode::ArrowDown) {
            self.select_next();
        }
        if input.was_just_pressed(KeyCode::ArrowUp) {
            self.select_previous();
        }
    }

    fn draw_2d(&self, _shader: ShaderHandle, backend: &mut dyn RenderBackend) -> Result<()> {
        let panel = self.panel_size();
        let origin = centered(self.screen, panel);
        backend.draw_quad(&Quad2D::colored(origin, panel, PANEL_COLOR))?;

        for index in 0..self.entries.len() {
            let position = origin
                + Vec2::new(
                    self.spacing,
                    self.spacing + index as f32 * (self.entry_size.y + self.spacing),
                );
            let color = if index == self.selected { SELECTED_COLOR } else { ENTRY_COLOR };
            backend.draw_quad(&Quad2D::colored(position, self.entry_size, color))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "menu_tests.rs"]
mod tests;
