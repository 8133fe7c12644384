/// Input provider trait consumed by the HUD registry and the scene.

use winit::keyboard::KeyCode;

/// Keyboard and framebuffer state for the current tick.
///
/// `just_pressed` holds the keys whose state went from released to
/// pressed since the previous tick, in the order they were reported.
pub trait InputProvider {
    /// Effective framebuffer size in pixels (width, height)
    fn effective_size(&self) -> (u32, u32);

    /// Whether `key` is currently held
    fn is_key_held(&self, key: KeyCode) -> bool;

    /// Whether every key of `keys` is currently held
    fn are_keys_held(&self, keys: &[KeyCode]) -> bool {
        !keys.is_empty() && keys.iter().all(|&key| self.is_key_held(key))
    }

    /// Keys newly pressed this tick
    fn just_pressed(&self) -> &[KeyCode];

    /// Whether `key` was newly pressed this tick
    fn was_just_pressed(&self, key: KeyCode) -> bool {
        self.just_pressed().contains(&key)
    }

    /// Switch the named shortcut context
    fn set_context(&mut self, name: &str);

    /// Name of the active shortcut context
    fn context(&self) -> &str;

    /// Whether the named shortcut of the active context fired this tick
    fn is_shortcut_enabled(&self, name: &str) -> bool;
}
