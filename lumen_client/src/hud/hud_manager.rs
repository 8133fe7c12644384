/// HUD registry and dispatcher.
///
/// Each registered HUD lives in a SlotMap entry that also carries its
/// open state (`opened_at`). That field is the only record of whether a
/// HUD is open: the "opened" and "need focus" views are computed from it
/// on demand, so they can never disagree with it.

use slotmap::{new_key_type, SlotMap};
use rustc_hash::FxHashMap;
use winit::keyboard::KeyCode;
use crate::config::HudBindings;
use crate::error::Result;
use crate::input::InputProvider;
use crate::render::{
    require_shader, RenderBackend, Viewport, SHADER_2D_IN_3D, SHADER_3D_TO_2D,
};
use crate::{engine_debug, engine_trace, engine_warn};
use super::component::HudComponent;
use super::hud::Hud;

const SOURCE: &str = "lumen::HudManager";

new_key_type! {
    /// Stable handle to a registered HUD
    pub struct HudKey;
}

/// How a key binding acts on its HUDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HudTrigger {
    /// Toggle
    Reverse,
    Open,
    Close,
}

/// State change requested on a HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Open,
    Close,
    /// Flip, membership follows the resulting state
    Toggle,
}

struct HudEntry {
    name: String,
    hud: Box<dyn Hud>,
    /// Opening sequence number, None while closed
    opened_at: Option<u64>,
}

pub struct HudManager {
    huds: SlotMap<HudKey, HudEntry>,
    names: FxHashMap<String, HudKey>,
    reverse_bindings: FxHashMap<KeyCode, Vec<HudKey>>,
    open_bindings: FxHashMap<KeyCode, Vec<HudKey>>,
    close_bindings: FxHashMap<KeyCode, Vec<HudKey>>,
    components: Vec<Box<dyn HudComponent>>,
    bindings: HudBindings,
    next_seq: u64,
}

impl HudManager {
    pub fn new() -> Self {
        Self::with_bindings(HudBindings::default())
    }

    pub fn with_bindings(bindings: HudBindings) -> Self {
        Self {
            huds: SlotMap::with_key(),
            names: FxHashMap::default(),
            reverse_bindings: FxHashMap::default(),
            open_bindings: FxHashMap::default(),
            close_bindings: FxHashMap::default(),
            components: Vec::new(),
            bindings,
            next_seq: 0,
        }
    }

    pub fn bindings(&self) -> &HudBindings {
        &self.bindings
    }

    // ===== REGISTRY =====

    /// Register `hud` under `name`.
    ///
    /// An existing HUD with the same name is dropped WITHOUT `cleanup`;
    /// use `replace` to get it back. The key stays the same, so bindings
    /// made for the old HUD now act on the new one, which starts closed.
    pub fn add(&mut self, name: &str, hud: Box<dyn Hud>) -> HudKey {
        self.replace(name, hud).0
    }

    /// Register `hud` under `name`, returning the HUD it displaced
    pub fn replace(&mut self, name: &str, hud: Box<dyn Hud>) -> (HudKey, Option<Box<dyn Hud>>) {
        if let Some(&key) = self.names.get(name) {
            if let Some(entry) = self.huds.get_mut(key) {
                engine_warn!(SOURCE, "HUD '{}' replaced, previous instance not cleaned up", name);
                entry.opened_at = None;
                let previous = std::mem::replace(&mut entry.hud, hud);
                return (key, Some(previous));
            }
        }

        let key = self.huds.insert(HudEntry {
            name: name.to_string(),
            hud,
            opened_at: None,
        });
        self.names.insert(name.to_string(), key);
        engine_debug!(SOURCE, "HUD '{}' registered", name);
        (key, None)
    }

    /// Unregister `name` and drop its bindings. `cleanup` is not called.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn Hud>> {
        let key = self.names.remove(name)?;
        for map in [&mut self.reverse_bindings, &mut self.open_bindings, &mut self.close_bindings] {
            for list in map.values_mut() {
                list.retain(|&k| k != key);
            }
            map.retain(|_, list| !list.is_empty());
        }
        self.huds.remove(key).map(|entry| entry.hud)
    }

    pub fn key(&self, name: &str) -> Option<HudKey> {
        self.names.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&dyn Hud> {
        let key = self.key(name)?;
        self.huds.get(key).map(|entry| entry.hud.as_ref())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut (dyn Hud + 'static)> {
        let key = self.key(name)?;
        self.huds.get_mut(key).map(|entry| entry.hud.as_mut())
    }

    pub fn name(&self, key: HudKey) -> Option<&str> {
        self.huds.get(key).map(|entry| entry.name.as_str())
    }

    pub fn hud_count(&self) -> usize {
        self.huds.len()
    }

    /// Add an always-drawn component
    pub fn add_component(&mut self, component: Box<dyn HudComponent>) {
        self.components.push(component);
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    // ===== KEY BINDINGS =====

    /// `key` toggles `hud`
    pub fn can_reverse_opening_with(&mut self, key: KeyCode, hud: HudKey) {
        self.bind(HudTrigger::Reverse, key, hud);
    }

    /// `key` opens `hud`
    pub fn can_open_with(&mut self, key: KeyCode, hud: HudKey) {
        self.bind(HudTrigger::Open, key, hud);
    }

    /// `key` closes `hud`
    pub fn can_close_with(&mut self, key: KeyCode, hud: HudKey) {
        self.bind(HudTrigger::Close, key, hud);
    }

    pub fn remove_reverse_opening_with(&mut self, key: KeyCode, hud: HudKey) -> bool {
        self.unbind(HudTrigger::Reverse, key, hud)
    }

    pub fn remove_opening_with(&mut self, key: KeyCode, hud: HudKey) -> bool {
        self.unbind(HudTrigger::Open, key, hud)
    }

    pub fn remove_closing_with(&mut self, key: KeyCode, hud: HudKey) -> bool {
        self.unbind(HudTrigger::Close, key, hud)
    }

    /// HUDs bound to `key` for `trigger`, in binding order
    pub fn bound(&self, trigger: HudTrigger, key: KeyCode) -> &[HudKey] {
        self.trigger_map(trigger)
            .get(&key)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    fn trigger_map(&self, trigger: HudTrigger) -> &FxHashMap<KeyCode, Vec<HudKey>> {
        match trigger {
            HudTrigger::Reverse => &self.reverse_bindings,
            HudTrigger::Open => &self.open_bindings,
            HudTrigger::Close => &self.close_bindings,
        }
    }

    fn trigger_map_mut(&mut self, trigger: HudTrigger) -> &mut FxHashMap<KeyCode, Vec<HudKey>> {
        match trigger {
            HudTrigger::Reverse => &mut self.reverse_bindings,
            HudTrigger::Open => &mut self.open_bindings,
            HudTrigger::Close => &mut self.close_bindings,
        }
    }

    fn bind(&mut self, trigger: HudTrigger, key: KeyCode, hud: HudKey) {
        self.trigger_map_mut(trigger).entry(key).or_default().push(hud);
    }

    fn unbind(&mut self, trigger: HudTrigger, key: KeyCode, hud: HudKey) -> bool {
        let map = self.trigger_map_mut(trigger);
        let Some(list) = map.get_mut(&key) else {
            return false;
        };
        let Some(index) = list.iter().position(|&k| k == hud) else {
            return false;
        };
        list.remove(index);
        if list.is_empty() {
            map.remove(&key);
        }
        true
    }

    // ===== TRANSITIONS =====

    /// Apply `transition` to every HUD of `keys`, in order.
    ///
    /// Opening an open HUD and closing a closed one change nothing and do
    /// not call the hooks. Stale keys are ignored.
    pub fn apply<I>(&mut self, keys: I, transition: Transition, input: &mut dyn InputProvider)
    where
        I: IntoIterator<Item = HudKey>,
    {
        for key in keys {
            let Some(entry) = self.huds.get_mut(key) else {
                continue;
            };
            let is_open = entry.opened_at.is_some();
            let open = match transition {
                Transition::Open => true,
                Transition::Close => false,
                Transition::Toggle => !is_open,
            };
            if open == is_open {
                continue;
            }

            if open {
                self.next_seq += 1;
                entry.opened_at = Some(self.next_seq);
                entry.hud.on_open(input);
                engine_debug!(SOURCE, "HUD '{}' opened", entry.name);
            } else {
                entry.opened_at = None;
                entry.hud.on_close(input);
                engine_debug!(SOURCE, "HUD '{}' closed", entry.name);
            }
        }
    }

    pub fn open_all<I: IntoIterator<Item = HudKey>>(&mut self, keys: I, input: &mut dyn InputProvider) {
        self.apply(keys, Transition::Open, input);
    }

    pub fn close_all<I: IntoIterator<Item = HudKey>>(&mut self, keys: I, input: &mut dyn InputProvider) {
        self.apply(keys, Transition::Close, input);
    }

    pub fn reverse_opening_all<I: IntoIterator<Item = HudKey>>(
        &mut self,
        keys: I,
        input: &mut dyn InputProvider,
    ) {
        self.apply(keys, Transition::Toggle, input);
    }

    pub fn open(&mut self, key: HudKey, input: &mut dyn InputProvider) {
        self.apply([key], Transition::Open, input);
    }

    pub fn close(&mut self, key: HudKey, input: &mut dyn InputProvider) {
        self.apply([key], Transition::Close, input);
    }

    pub fn reverse_opening(&mut self, key: HudKey, input: &mut dyn InputProvider) {
        self.apply([key], Transition::Toggle, input);
    }

    /// Open `name`, no-op if unknown
    pub fn open_by_name(&mut self, name: &str, input: &mut dyn InputProvider) {
        self.apply_by_name(name, Transition::Open, input);
    }

    /// Close `name`, no-op if unknown
    pub fn close_by_name(&mut self, name: &str, input: &mut dyn InputProvider) {
        self.apply_by_name(name, Transition::Close, input);
    }

    /// Toggle `name`, no-op if unknown
    pub fn reverse_opening_by_name(&mut self, name: &str, input: &mut dyn InputProvider) {
        self.apply_by_name(name, Transition::Toggle, input);
    }

    fn apply_by_name(&mut self, name: &str, transition: Transition, input: &mut dyn InputProvider) {
        match self.key(name) {
            Some(key) => self.apply([key], transition, input),
            None => engine_trace!(SOURCE, "Unknown HUD '{}' ignored ({:?})", name, transition),
        }
    }

    /// Close every open HUD, most recently opened last
    pub fn close_every_hud(&mut self, input: &mut dyn InputProvider) {
        let opened = self.opened_keys();
        self.apply(opened, Transition::Close, input);
    }

    // ===== VIEWS =====

    /// Whether `name` is registered and open
    pub fn is_open(&self, name: &str) -> bool {
        self.key(name).is_some_and(|key| self.is_key_open(key))
    }

    pub fn is_key_open(&self, key: HudKey) -> bool {
        self.huds.get(key).is_some_and(|entry| entry.opened_at.is_some())
    }

    /// Open HUDs in opening order
    pub fn opened_keys(&self) -> Vec<HudKey> {
        let mut opened: Vec<(u64, HudKey)> = self
            .huds
            .iter()
            .filter_map(|(key, entry)| entry.opened_at.map(|seq| (seq, key)))
            .collect();
        opened.sort_unstable_by_key(|&(seq, _)| seq);
        opened.into_iter().map(|(_, key)| key).collect()
    }

    /// Names of the open HUDs in opening order
    pub fn opened_huds(&self) -> Vec<&str> {
        self.opened_keys()
            .into_iter()
            .filter_map(|key| self.name(key))
            .collect()
    }

    /// Names of the open HUDs that hold focus, in opening order
    pub fn need_focus_huds(&self) -> Vec<&str> {
        self.opened_keys()
            .into_iter()
            .filter_map(|key| self.huds.get(key))
            .filter(|entry| entry.hud.need_focus())
            .map(|entry| entry.name.as_str())
            .collect()
    }

    /// Whether any open HUD holds focus
    pub fn need_focus(&self) -> bool {
        self.huds
            .values()
            .any(|entry| entry.opened_at.is_some() && entry.hud.need_focus())
    }

    // ===== FRAME =====

    /// Per-frame input handling.
    ///
    /// 1. The close-all chord closes every open HUD. Otherwise, when the
    ///    close-upper key is held, nothing happens yet.
    /// 2. For each key pressed this tick: its toggle, open, then close
    ///    bindings are applied, in that order.
    /// 3. Open HUDs are updated in opening order, then components.
    pub fn update(&mut self, input: &mut dyn InputProvider) {
        if input.are_keys_held(&self.bindings.close_all) {
            engine_debug!(SOURCE, "Close-all chord pressed");
            self.close_every_hud(input);
        } else if input.is_key_held(self.bindings.close_upper) {
            // Closing only the top-most HUD is not decided yet; this key
            // is reserved and intentionally does nothing.
        }

        let pressed = input.just_pressed().to_vec();
        for key in pressed {
            for (trigger, transition) in [
                (HudTrigger::Reverse, Transition::Toggle),
                (HudTrigger::Open, Transition::Open),
                (HudTrigger::Close, Transition::Close),
            ] {
                let bound = self.bound(trigger, key).to_vec();
                if !bound.is_empty() {
                    self.apply(bound, transition, input);
                }
            }
        }

        for key in self.opened_keys() {
            if let Some(entry) = self.huds.get_mut(key) {
                entry.hud.update(&*input);
            }
        }
        for component in &mut self.components {
            component.update(&*input);
        }
    }

    /// Submit both HUD passes.
    ///
    /// Open HUDs then components are drawn with the 2D shader, then again
    /// with the 3D-to-2D shader. Scissor and viewport are reset to the full
    /// window at the end.
    pub fn draw(&self, backend: &mut dyn RenderBackend, viewport: &Viewport) -> Result<()> {
        let shader_2d = require_shader(&*backend, SHADER_2D_IN_3D)?;
        let shader_3d = require_shader(&*backend, SHADER_3D_TO_2D)?;
        let opened = self.opened_keys();

        backend.begin_2d()?;
        backend.attach_shader(shader_2d)?;
        for &key in &opened {
            if let Some(entry) = self.huds.get(key) {
                entry.hud.draw_2d(shader_2d, backend)?;
            }
        }
        for component in &self.components {
            component.draw_2d(shader_2d, backend)?;
        }
        backend.detach_shader()?;
        backend.end_2d()?;

        backend.attach_shader(shader_3d)?;
        for &key in &opened {
            if let Some(entry) = self.huds.get(key) {
                entry.hud.draw_3d(shader_3d, viewport, backend)?;
            }
        }
        for component in &self.components {
            component.draw_3d(shader_3d, viewport, backend)?;
        }
        backend.detach_shader()?;

        let full = viewport.full_rect();
        backend.set_scissor(full, false)?;
        backend.set_viewport(full)?;
        Ok(())
    }

    /// Clean up every HUD and component, open or not, and empty the registry
    pub fn cleanup(&mut self) {
        for entry in self.huds.values_mut() {
            entry.hud.cleanup();
        }
        for component in &mut self.components {
            component.cleanup();
        }
        engine_debug!(
            SOURCE,
            "Cleaned up {} HUD(s) and {} component(s)",
            self.huds.len(),
            self.components.len()
        );

        self.huds.clear();
        self.names.clear();
        self.reverse_bindings.clear();
        self.open_bindings.clear();
        self.close_bindings.clear();
        self.components.clear();
    }
}

impl Default for HudManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "hud_manager_tests.rs"]
mod tests;
