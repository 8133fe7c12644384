//! Window / input collaborator.
//!
//! The client never talks to the windowing library directly. Everything
//! that reacts to keys (HUD registry, scene, player) reads an
//! `InputProvider`, which exposes the held keys, the keys pressed during
//! the current tick, the framebuffer size and the active shortcut context.

mod input_provider;
mod input_state;

pub use input_provider::InputProvider;
pub use input_state::InputState;
pub use winit::keyboard::KeyCode;

/// Shortcut context active while gameplay owns the keyboard
pub const CONTEXT_GENERAL: &str = "GENERAL";

/// Shortcut context active while a HUD holds focus
pub const CONTEXT_HUDS: &str = "HUDS";
