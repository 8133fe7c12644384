//! HUD overlays and their registry.
//!
//! A `Hud` is a toggleable overlay (menu, inventory, hotbar...). The
//! `HudManager` owns every HUD, holds their open/closed state, reacts to
//! key bindings and submits the two HUD draw passes.

mod hud;
mod component;
mod hud_manager;
mod layout;
mod menu;
mod inventory;
mod hotbar;

pub use hud::Hud;
pub use component::{HudComponent, CrosshairComponent};
pub use hud_manager::{HudManager, HudKey, HudTrigger, Transition};
pub use layout::{centered, grid_rect};
pub use menu::MenuHud;
pub use inventory::{InventoryHud, ItemStack};
pub use hotbar::{HotBarHud, HOTBAR_SLOTS};
