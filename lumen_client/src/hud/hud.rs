/// HUD capability trait.

use crate::error::Result;
use crate::input::InputProvider;
use crate::render::{RenderBackend, ShaderHandle, Viewport};

/// A named overlay owned by `HudManager`.
///
/// The HUD does not store whether it is open: the manager holds that state
/// and calls `on_open` / `on_close` exactly when it changes.
pub trait Hud {
    /// While an open HUD returns true, gameplay input is suppressed
    fn need_focus(&self) -> bool {
        false
    }

    /// Called on the CLOSED -> OPEN transition
    fn on_open(&mut self, _input: &mut dyn InputProvider) {}

    /// Called on the OPEN -> CLOSED transition
    fn on_close(&mut self, _input: &mut dyn InputProvider) {}

    /// Called once per frame while open
    fn update(&mut self, _input: &dyn InputProvider) {}

    /// Screen-space pass, `shader` is attached
    fn draw_2d(&self, shader: ShaderHandle, backend: &mut dyn RenderBackend) -> Result<()>;

    /// 3D-to-2D pass, `shader` is attached
    fn draw_3d(
        &self,
        _shader: ShaderHandle,
        _viewport: &Viewport,
        _backend: &mut dyn RenderBackend,
    ) -> Result<()> {
        Ok(())
    }

    /// Release owned resources. The HUD is not used afterwards.
    fn cleanup(&mut self) {}
}
