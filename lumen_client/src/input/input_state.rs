/// Concrete input state fed from window events.

use rustc_hash::{FxHashMap, FxHashSet};
use winit::event::ElementState;
use winit::keyboard::KeyCode;
use super::input_provider::InputProvider;
use super::CONTEXT_GENERAL;

/// Keyboard state accumulated from window events.
///
/// Call `begin_tick()` once per frame before feeding the events of that
/// frame; it clears the just-pressed list while keeping held keys.
///
/// Shortcuts are named key chords registered per context. A shortcut is
/// enabled on the tick where all its keys are held and at least one of
/// them was just pressed, and only while its context is active.
#[derive(Debug)]
pub struct InputState {
    held: FxHashSet<KeyCode>,
    just_pressed: Vec<KeyCode>,
    width: u32,
    height: u32,
    context: String,
    shortcuts: FxHashMap<String, FxHashMap<String, Vec<KeyCode>>>,
}

impl InputState {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            held: FxHashSet::default(),
            just_pressed: Vec::new(),
            width,
            height,
            context: CONTEXT_GENERAL.to_string(),
            shortcuts: FxHashMap::default(),
        }
    }

    /// Start a new tick: forget the keys pressed during the previous one
    pub fn begin_tick(&mut self) {
        self.just_pressed.clear();
    }

    /// Feed a key event from the window
    pub fn process_key(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => self.press(key),
            ElementState::Released => self.release(key),
        }
    }

    /// Mark `key` as held; records it as just pressed if it was up
    pub fn press(&mut self, key: KeyCode) {
        if self.held.insert(key) {
            self.just_pressed.push(key);
        }
    }

    /// Mark `key` as released
    pub fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    /// Framebuffer resized
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Register (or replace) a named shortcut in a context
    pub fn bind_shortcut(&mut self, context: &str, name: &str, keys: &[KeyCode]) {
        self.shortcuts
            .entry(context.to_string())
            .or_default()
            .insert(name.to_string(), keys.to_vec());
    }

    /// Remove a named shortcut; returns whether it existed
    pub fn unbind_shortcut(&mut self, context: &str, name: &str) -> bool {
        self.shortcuts
            .get_mut(context)
            .is_some_and(|shortcuts| shortcuts.remove(name).is_some())
    }
}

impl InputProvider for InputState {
    fn effective_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn is_key_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    fn just_pressed(&self) -> &[KeyCode] {
        &self.just_pressed
    }

    fn set_context(&mut self, name: &str) {
        if self.context != name {
            self.context.clear();
            self.context.push_str(name);
        }
    }

    fn context(&self) -> &str {
        &self.context
    }

    fn is_shortcut_enabled(&self, name: &str) -> bool {
        let Some(keys) = self
            .shortcuts
            .get(&self.context)
            .and_then(|shortcuts| shortcuts.get(name))
        else {
            return false;
        };
        self.are_keys_held(keys) && keys.iter().any(|&key| self.was_just_pressed(key))
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod tests;
